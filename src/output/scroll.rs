/// Vertical scroll position of the console panel.
///
/// Lives with the caller so the panel itself stays a pure function of its
/// entries. `auto_scroll` keeps the view pinned to the newest rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    window_height: usize,
    content_height: usize,
    auto_scroll: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            window_height: 0,
            content_height: 0,
            auto_scroll: true,
        }
    }

    pub fn update_dimensions(&mut self, window_height: usize, content_height: usize) {
        let max_offset = content_height.saturating_sub(window_height);

        self.window_height = window_height;
        self.content_height = content_height;
        self.offset = self.offset.min(max_offset);

        if self.auto_scroll {
            self.offset = max_offset;
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(amount.max(1));
    }

    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.max_offset();
        self.offset = (self.offset + amount.max(1)).min(max_offset);
        self.auto_scroll = self.offset >= max_offset;
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.window_height.saturating_sub(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.window_height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.auto_scroll = true;
        self.offset = self.max_offset();
    }

    /// Half-open range of content lines currently inside the window.
    pub fn visible_range(&self) -> (usize, usize) {
        if self.content_height <= self.window_height {
            return (0, self.content_height);
        }
        let end = (self.offset + self.window_height).min(self.content_height);
        (self.offset, end)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn window_height(&self) -> usize {
        self.window_height
    }

    pub fn content_height(&self) -> usize {
        self.content_height
    }

    pub fn is_auto_scroll(&self) -> bool {
        self.auto_scroll
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.window_height)
    }
}

crate::impl_default!(ScrollState, Self::new());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_scroll_follows_tail() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 12);
        assert_eq!(scroll.offset(), 7);
        assert_eq!(scroll.visible_range(), (7, 12));

        scroll.update_dimensions(5, 20);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_scroll_up_pins_position() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 12);
        scroll.scroll_up(3);
        assert!(!scroll.is_auto_scroll());
        assert_eq!(scroll.offset(), 4);

        // new content must not move a pinned view
        scroll.update_dimensions(5, 30);
        assert_eq!(scroll.offset(), 4);
    }

    #[test]
    fn test_scroll_down_to_tail_resumes_following() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 12);
        scroll.scroll_to_top();
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_down(100);
        assert_eq!(scroll.offset(), 7);
        assert!(scroll.is_auto_scroll());
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(10, 3);
        scroll.scroll_down(5);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), (0, 3));
    }

    #[test]
    fn test_paging_uses_window_height() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(6, 40);
        scroll.scroll_to_top();
        scroll.page_down();
        assert_eq!(scroll.offset(), 5);
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(5, 30);
        scroll.scroll_up(2);
        scroll.update_dimensions(5, 8);
        assert_eq!(scroll.offset(), 3);
    }
}
