//! Banner image carousel and full-screen viewer.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Index before `index`, wrapping from 0 to the last image.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if index == 0 || index >= len { len - 1 } else { index - 1 }
}

/// Index after `index`, wrapping from the last image to 0.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index + 1) % len
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryViewer {
    pub len: usize,
    /// Carousel position.
    pub carousel: usize,
    /// Viewer position; `None` when closed.
    pub open: Option<usize>,
}

impl GalleryViewer {
    pub fn new(len: usize) -> Self {
        Self { len, carousel: 0, open: None }
    }

    /// Open the viewer at `index`. An empty gallery or out-of-range index stays closed.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = Some(index);
        true
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.open {
            self.open = Some(wrap_prev(index, self.len));
        }
    }

    pub fn next(&mut self) {
        if let Some(index) = self.open {
            self.open = Some(wrap_next(index, self.len));
        }
    }

    pub fn carousel_prev(&mut self) {
        self.carousel = wrap_prev(self.carousel, self.len);
    }

    pub fn carousel_next(&mut self) {
        self.carousel = wrap_next(self.carousel, self.len);
    }
}
