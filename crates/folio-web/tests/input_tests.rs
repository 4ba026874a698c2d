// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn backing_size_caps_pixel_ratio() {
    assert_eq!(backing_size(400.0, 300.0, 1.0), (400, 300));
    assert_eq!(backing_size(400.0, 300.0, 1.5), (600, 450));
    assert_eq!(backing_size(400.0, 300.0, 3.0), (800, 600));
}

#[test]
fn backing_size_never_collapses_to_zero() {
    assert_eq!(backing_size(0.0, 0.0, 2.0), (1, 1));
    assert_eq!(backing_size(100.0, 50.0, 0.0), (100, 50));
    assert_eq!(backing_size(100.0, 50.0, f64::NAN), (100, 50));
}

#[test]
fn canvas_ndc_is_relative_to_the_canvas() {
    let centre = canvas_ndc(Vec2::new(300.0, 250.0), 100.0, 50.0, 400.0, 400.0);
    assert_eq!(centre, Some(Vec2::ZERO));
    let corner = canvas_ndc(Vec2::new(100.0, 50.0), 100.0, 50.0, 400.0, 400.0);
    assert_eq!(corner, Some(Vec2::new(-1.0, 1.0)));
}

#[test]
fn canvas_ndc_rejects_outside_and_empty_rects() {
    assert_eq!(canvas_ndc(Vec2::new(10.0, 10.0), 100.0, 50.0, 400.0, 400.0), None);
    assert_eq!(canvas_ndc(Vec2::new(600.0, 100.0), 100.0, 50.0, 400.0, 400.0), None);
    assert_eq!(canvas_ndc(Vec2::new(100.0, 50.0), 100.0, 50.0, 0.0, 400.0), None);
}
