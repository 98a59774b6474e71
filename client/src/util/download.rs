//! Document downloads through a synthetic anchor click.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// File name for the `download` attribute: the document name, else the URL's last segment.
pub fn download_name(name: &str, url: &str) -> String {
    let name = name.trim();
    if !name.is_empty() {
        return name.to_owned();
    }
    url.split(['?', '#'])
        .next()
        .and_then(|path| path.trim_end_matches('/').rsplit('/').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("document")
        .to_owned()
}

/// Create a hidden `<a download>` for `url`, click it, and remove it.
pub fn trigger_download(url: &str, name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(anchor) = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
        else {
            return;
        };
        anchor.set_href(url);
        anchor.set_download(&download_name(name, url));
        anchor.set_target("_blank");
        let Some(body) = document.body() else {
            return;
        };
        if body.append_child(&anchor).is_ok() {
            anchor.click();
            anchor.remove();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, name);
    }
}
