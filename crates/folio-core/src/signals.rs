//! Scroll and pointer inputs shared between host callbacks and the frame loop.
//!
//! Host event handlers write the latest value; the animation step reads a
//! snapshot once per frame. There is no queue: several writes between two
//! frames collapse into the last one, and a frame with no writes simply sees
//! the previous values again.

use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SignalState {
    /// Normalized page scroll in \[0, 1\] (clamped by the host helpers).
    pub scroll_progress: f32,
    /// Pointer in normalized device coordinates, both axes in \[-1, 1\].
    pub pointer: Vec2,
    /// Bumped on every pointer write so consumers can detect movement.
    pub pointer_generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct InputSignals {
    state: Rc<Cell<SignalState>>,
}

impl InputSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_scroll_progress(&self, progress: f32) {
        let mut s = self.state.get();
        s.scroll_progress = progress;
        self.state.set(s);
    }

    pub fn set_pointer(&self, pointer: Vec2) {
        let mut s = self.state.get();
        s.pointer = pointer;
        s.pointer_generation = s.pointer_generation.wrapping_add(1);
        self.state.set(s);
    }

    pub fn snapshot(&self) -> SignalState {
        self.state.get()
    }
}

/// Scroll offset to progress; a page that cannot scroll reports 0.
#[inline]
pub fn scroll_progress(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Client pixel coordinates to NDC with +y up.
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}
