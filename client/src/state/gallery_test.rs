use super::*;

#[test]
fn prev_from_zero_wraps_to_last() {
    assert_eq!(wrap_prev(0, 3), 2);
    assert_eq!(wrap_prev(2, 3), 1);
}

#[test]
fn next_from_last_wraps_to_zero() {
    assert_eq!(wrap_next(2, 3), 0);
    assert_eq!(wrap_next(0, 3), 1);
}

#[test]
fn wrap_on_empty_is_zero() {
    assert_eq!(wrap_prev(0, 0), 0);
    assert_eq!(wrap_next(0, 0), 0);
}

#[test]
fn viewer_prev_from_zero_selects_index_two() {
    let mut viewer = GalleryViewer::new(3);
    assert!(viewer.open(0));
    viewer.prev();
    assert_eq!(viewer.open, Some(2));
    viewer.next();
    assert_eq!(viewer.open, Some(0));
}

#[test]
fn empty_gallery_never_opens() {
    let mut viewer = GalleryViewer::new(0);
    assert!(!viewer.open(0));
    viewer.next();
    assert_eq!(viewer.open, None);
}

#[test]
fn closed_viewer_ignores_navigation() {
    let mut viewer = GalleryViewer::new(3);
    viewer.next();
    assert_eq!(viewer.open, None);
    viewer.open(1);
    viewer.close();
    assert_eq!(viewer.open, None);
}

#[test]
fn carousel_wraps_independently_of_viewer() {
    let mut viewer = GalleryViewer::new(2);
    viewer.carousel_prev();
    assert_eq!(viewer.carousel, 1);
    viewer.carousel_next();
    assert_eq!(viewer.carousel, 0);
    assert_eq!(viewer.open, None);
}
