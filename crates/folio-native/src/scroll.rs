/// Page height the wheel scrolls through, in pixels.
pub const VIRTUAL_PAGE_PX: f32 = 4000.0;
/// Pixels per wheel line.
pub const WHEEL_LINE_PX: f32 = 40.0;

/// Stands in for the page scroll position in the native window.
#[derive(Debug, Default, Clone, Copy)]
pub struct VirtualScroll {
    progress: f32,
}

impl VirtualScroll {
    /// Scroll down by `px` (negative scrolls up); returns the new progress.
    pub fn scroll_by(&mut self, px: f32) -> f32 {
        if px.is_finite() {
            self.progress = (self.progress + px / VIRTUAL_PAGE_PX).clamp(0.0, 1.0);
        }
        self.progress
    }
}
