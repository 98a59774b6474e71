use super::*;

#[test]
fn prefers_document_name() {
    assert_eq!(download_name(" Budget Q1.pdf ", "https://cdn.example.com/a/b.pdf"), "Budget Q1.pdf");
}

#[test]
fn falls_back_to_url_segment_without_query() {
    assert_eq!(download_name("", "https://cdn.example.com/files/report.pdf?sig=abc"), "report.pdf");
    assert_eq!(download_name("  ", "https://cdn.example.com/files/"), "files");
}

#[test]
fn falls_back_to_generic_name() {
    assert_eq!(download_name("", ""), "document");
}
