/// Cursor over a product's image sequence.
///
/// The only state machine of substance in the system: states are
/// no-image, viewing(idx), and zoomed(idx). Navigation is circular, every
/// index change drops the zoom, and the cursor survives the image list
/// changing length (a different product being shown) by clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallery {
    len: usize,
    index: usize,
    zoomed: bool,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            zoomed: false,
        }
    }

    /// Current image index, or None when there are no images.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    /// Advance circularly. Index no-op for fewer than two images, but any
    /// navigation attempt on a non-empty gallery still drops the zoom.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.zoomed = false;
    }

    /// Retreat circularly; same rules as [`Gallery::next`].
    pub fn previous(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.zoomed = false;
    }

    /// Jump to an explicit index. Out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
            self.zoomed = false;
        }
    }

    /// Adopt a new image count, keeping the cursor valid: an out-of-range
    /// index clamps to the last image, or to the no-image state at zero.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.index = 0;
            self.zoomed = false;
        } else if self.index >= len {
            self.index = len - 1;
            self.zoomed = false;
        }
    }

    pub fn toggle_zoom(&mut self) {
        if self.len > 0 {
            self.zoomed = !self.zoomed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_navigation_is_safe() {
        let mut g = Gallery::new(0);
        g.next();
        g.previous();
        g.select(0);
        g.toggle_zoom();
        assert_eq!(g.current(), None);
        assert!(!g.is_zoomed());
    }

    #[test]
    fn single_image_next_prev_are_noops() {
        let mut g = Gallery::new(1);
        g.next();
        assert_eq!(g.current(), Some(0));
        g.previous();
        assert_eq!(g.current(), Some(0));
    }

    #[test]
    fn wraps_around_both_directions() {
        let mut g = Gallery::new(3);
        g.select(2);
        g.next();
        assert_eq!(g.current(), Some(0));
        g.previous();
        assert_eq!(g.current(), Some(2));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut g = Gallery::new(3);
        g.select(1);
        g.select(3);
        assert_eq!(g.current(), Some(1));
        g.select(usize::MAX);
        assert_eq!(g.current(), Some(1));
    }

    #[test]
    fn index_change_resets_zoom() {
        let mut g = Gallery::new(3);
        g.toggle_zoom();
        assert!(g.is_zoomed());
        g.next();
        assert!(!g.is_zoomed());

        g.toggle_zoom();
        g.select(2);
        assert!(!g.is_zoomed());
    }

    #[test]
    fn resize_clamps_to_last_valid_index() {
        let mut g = Gallery::new(6);
        g.select(5);
        g.resize(3);
        assert_eq!(g.current(), Some(2));

        g.resize(0);
        assert_eq!(g.current(), None);

        g.resize(4);
        assert_eq!(g.current(), Some(0));
    }

    #[test]
    fn resize_within_bounds_keeps_cursor_and_zoom() {
        let mut g = Gallery::new(6);
        g.select(1);
        g.toggle_zoom();
        g.resize(4);
        assert_eq!(g.current(), Some(1));
        assert!(g.is_zoomed());
    }
}
