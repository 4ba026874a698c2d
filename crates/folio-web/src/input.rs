use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use folio_core::pointer_ndc;
use glam::Vec2;

/// Backing-store size for a canvas laid out at `css_width` x `css_height`.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    };
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}

/// Client coordinates to NDC inside a canvas rect (`left`, `top`, `width`,
/// `height` in CSS px). Points outside the rect, or an empty rect, give `None`.
#[inline]
pub fn canvas_ndc(client: Vec2, left: f32, top: f32, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = client.x - left;
    let y = client.y - top;
    if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
        return None;
    }
    Some(pointer_ndc(x, y, width, height))
}
