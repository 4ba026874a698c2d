// Host-side tests for the per-frame GPU records (no device needed).

use folio_core::{Camera, InstanceData};
use folio_render::*;
use glam::{Vec3, Vec4};

#[test]
fn uniforms_carry_billboard_axes_and_time() {
    let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.5);
    let u = frame_uniforms(&camera, 2.5);
    assert_eq!(u.right_time, [1.0, 0.0, 0.0, 2.5]);
    assert_eq!(u.up, [0.0, 1.0, 0.0, 0.0]);
    assert_eq!(u.view_proj, camera.view_proj().to_cols_array_2d());
    assert_eq!(std::mem::size_of::<FrameUniforms>() % 16, 0);
}

#[test]
fn clear_color_widens_components() {
    let c = clear_color(Vec4::new(0.05, 0.05, 0.1, 1.0));
    assert!((c.r - 0.05).abs() < 1e-6);
    assert!((c.b - 0.1).abs() < 1e-6);
    assert_eq!(c.a, 1.0);
    assert_eq!(clear_color(Vec4::ZERO), wgpu::Color::TRANSPARENT);
}

#[test]
fn instance_buffer_fits_the_largest_scene() {
    let bytes = std::mem::size_of::<InstanceData>() * MAX_INSTANCES;
    assert!(bytes <= 256 << 20);
    assert!(MAX_INSTANCES >= 1024);
}
