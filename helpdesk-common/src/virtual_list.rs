//! Window math for virtualized lists
//!
//! Only rows intersecting the viewport (plus a buffer) are rendered; spacer
//! padding above and below keeps the scroll height of the full list.

/// Rows to render for the current scroll position
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VirtualWindow {
    /// First item index to render
    pub start_idx: usize,
    /// Last item index to render (exclusive)
    pub end_idx: usize,
    /// Height of the top spacer in pixels
    pub top_padding: f64,
    /// Height of the bottom spacer in pixels
    pub bottom_padding: f64,
}

impl VirtualWindow {
    pub fn calculate(
        item_count: usize,
        row_height: f64,
        buffer_rows: usize,
        viewport_height: f64,
        scroll_top: f64,
    ) -> Self {
        if item_count == 0 || row_height <= 0.0 {
            return Self {
                start_idx: 0,
                end_idx: 0,
                top_padding: 0.0,
                bottom_padding: 0.0,
            };
        }

        let first_visible = (scroll_top.max(0.0) / row_height).floor() as usize;
        let visible_count = ((viewport_height / row_height).ceil() as usize)
            .max(1)
            .saturating_add(1);

        let start_idx = first_visible.saturating_sub(buffer_rows).min(item_count);
        let end_idx = first_visible
            .saturating_add(visible_count)
            .saturating_add(buffer_rows)
            .min(item_count);

        Self {
            start_idx,
            end_idx,
            top_padding: start_idx as f64 * row_height,
            bottom_padding: (item_count - end_idx) as f64 * row_height,
        }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start_idx..self.end_idx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_of_list() {
        let w = VirtualWindow::calculate(1000, 72.0, 4, 720.0, 0.0);
        assert_eq!(w.start_idx, 0);
        assert_eq!(w.end_idx, 15);
        assert_eq!(w.top_padding, 0.0);
        assert_eq!(w.bottom_padding, 985.0 * 72.0);
    }

    #[test]
    fn test_scrolled_window_keeps_total_height() {
        let w = VirtualWindow::calculate(1000, 72.0, 4, 720.0, 72.0 * 100.0);
        assert_eq!(w.start_idx, 96);
        assert_eq!(w.end_idx, 115);
        let rendered = (w.end_idx - w.start_idx) as f64 * 72.0;
        assert_eq!(w.top_padding + rendered + w.bottom_padding, 1000.0 * 72.0);
    }

    #[test]
    fn test_short_list_renders_everything() {
        let w = VirtualWindow::calculate(3, 72.0, 4, 720.0, 0.0);
        assert_eq!(w.range(), 0..3);
        assert_eq!(w.bottom_padding, 0.0);
    }

    #[test]
    fn test_scroll_past_end_is_clamped() {
        let w = VirtualWindow::calculate(10, 50.0, 2, 200.0, 10_000.0);
        assert!(w.start_idx <= w.end_idx);
        assert_eq!(w.end_idx, 10);
    }

    #[test]
    fn test_empty_list() {
        let w = VirtualWindow::calculate(0, 72.0, 4, 720.0, 0.0);
        assert_eq!(w.range(), 0..0);
    }

    #[test]
    fn test_tiny_row_height_does_not_overflow() {
        let w = VirtualWindow::calculate(10, 1e-300, 4, 720.0, 0.0);
        assert_eq!(w.range(), 0..10);
        assert_eq!(w.bottom_padding, 0.0);

        let scrolled = VirtualWindow::calculate(10, 1e-300, usize::MAX, 720.0, 1e300);
        assert!(scrolled.start_idx <= scrolled.end_idx);
        assert!(scrolled.end_idx <= 10);
    }
}
