// Host-side tests for the clock, input signals, arena, curves, picking and
// instance packing.

use folio_core::*;
use glam::{Vec2, Vec3};
use instant::Instant;
use std::time::Duration;

#[test]
fn clock_first_tick_has_zero_delta() {
    let mut clock = Clock::new();
    let t0 = Instant::now();
    let first = clock.tick_at(t0);
    assert_eq!(first.delta, 0.0);
    assert_eq!(first.elapsed, 0.0);
    assert_eq!(first.frame, 1);

    let second = clock.tick_at(t0 + Duration::from_millis(250));
    assert!((second.delta - 0.25).abs() < 1e-6);
    assert!((second.elapsed - 0.25).abs() < 1e-6);
    assert_eq!(second.frame, 2);
}

#[test]
fn clock_ignores_backwards_time_and_accepts_large_gaps() {
    let mut clock = Clock::new();
    let t0 = Instant::now() + Duration::from_secs(10);
    clock.tick_at(t0);
    let back = clock.tick_at(t0 - Duration::from_secs(1));
    assert_eq!(back.delta, 0.0);

    let gap = clock.advance(Duration::from_secs(30));
    assert!((gap.delta - 30.0).abs() < 1e-4);
    assert_eq!(clock.frames(), 3);
}

#[test]
fn signals_are_last_write_wins() {
    let signals = InputSignals::new();
    let host = signals.clone();
    host.set_scroll_progress(0.2);
    host.set_scroll_progress(0.7);
    host.set_pointer(Vec2::new(0.1, 0.1));
    host.set_pointer(Vec2::new(-0.5, 0.25));

    let s = signals.snapshot();
    assert_eq!(s.scroll_progress, 0.7);
    assert_eq!(s.pointer, Vec2::new(-0.5, 0.25));
    assert_eq!(s.pointer_generation, 2);
    assert_eq!(signals.snapshot(), s, "reads do not consume");
}

#[test]
fn scroll_progress_normalises_and_clamps() {
    assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(1500.0, 2000.0, 1000.0), 1.0);
    assert_eq!(scroll_progress(-20.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f32::NAN, 2000.0, 1000.0), 0.0);
}

#[test]
fn pointer_ndc_flips_y() {
    assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
}

#[test]
fn hsl_matches_three_conventions() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red - Vec3::X).abs().max_element() < 1e-6);
    let wrapped = hsl_to_rgb(1.0, 1.0, 0.5);
    assert!((wrapped - red).abs().max_element() < 1e-6);
    assert_eq!(hsl_to_rgb(0.3, 0.0, 0.4), Vec3::splat(0.4));
    let blue = hsl_to_rgb(2.0 / 3.0, 1.0, 0.5);
    assert!((blue - Vec3::Z).abs().max_element() < 1e-5);
    assert_eq!(rgb_hex(0xff0000), Vec3::X);
}

#[test]
fn arena_ids_do_not_alias_after_reuse() {
    let mut objects = ObjectArena::new();
    let a = objects.insert(Visual::mesh(Section::Hero)).unwrap();
    assert!(objects.remove(a).is_some());
    let b = objects.insert(Visual::mesh(Section::About)).unwrap();
    assert_eq!(a.index(), b.index());
    assert!(objects.get(a).is_none());
    assert!(objects.remove(a).is_none());
    assert_eq!(objects.get(b).unwrap().section, Section::About);
    assert_eq!(objects.len(), 1);
}

#[test]
fn world_position_composes_parents() {
    let mut objects = ObjectArena::new();
    let group = objects
        .insert(Visual::group(Section::Hero).at(Vec3::new(1.0, 0.0, 0.0)).scaled(2.0))
        .unwrap();
    let child = objects
        .insert(
            Visual::mesh(Section::Hero)
                .child_of(group)
                .at(Vec3::new(1.0, 1.0, 0.0)),
        )
        .unwrap();
    let p = objects.world_position(child).unwrap();
    assert!((p - Vec3::new(3.0, 2.0, 0.0)).abs().max_element() < 1e-6);
}

#[test]
fn catmull_rom_passes_through_endpoints() {
    let pts = vec![
        Vec3::ZERO,
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(3.0, 1.0, 1.0),
        Vec3::new(4.0, 0.0, -1.0),
    ];
    let path = CatmullRomPath::new(pts.clone());
    assert_eq!(path.point_at(0.0), pts[0]);
    assert!((path.point_at(1.0) - pts[3]).abs().max_element() < 1e-5);
    assert!((path.point_at(1.0 / 3.0) - pts[1]).abs().max_element() < 1e-5);
    assert_eq!(path.point_at(-4.0), path.point_at(0.0));
    assert_eq!(path.point_at(7.0), path.point_at(1.0));

    assert_eq!(CatmullRomPath::new(vec![]).point_at(0.5), Vec3::ZERO);
    assert_eq!(CatmullRomPath::new(vec![Vec3::ONE]).point_at(0.5), Vec3::ONE);
}

#[test]
fn ray_sphere_hits_and_misses() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!((hit.unwrap() - 3.0).abs() < 1e-6);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0).is_none());
}

#[test]
fn pick_selects_nearest_pickable() {
    let mut objects = ObjectArena::new();
    let camera = Camera::perspective(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, 1.0);
    let far = objects
        .insert(Visual::mesh(Section::Skills).at(Vec3::new(0.0, 0.0, -5.0)).pickable(1.0))
        .unwrap();
    let near = objects
        .insert(Visual::mesh(Section::Skills).pickable(1.0))
        .unwrap();
    // closer still, but not pickable
    objects
        .insert(Visual::mesh(Section::Skills).at(Vec3::new(0.0, 0.0, 4.0)))
        .unwrap();
    // pickable, but another section
    objects
        .insert(Visual::mesh(Section::About).at(Vec3::new(0.0, 0.0, 5.0)).pickable(1.0))
        .unwrap();

    assert_eq!(pick_nearest(&objects, Section::Skills, &camera, Vec2::ZERO), Some(near));
    objects.remove(near);
    assert_eq!(pick_nearest(&objects, Section::Skills, &camera, Vec2::ZERO), Some(far));
    assert_eq!(pick_nearest(&objects, Section::Skills, &camera, Vec2::new(0.9, -0.9)), None);
}

#[test]
fn camera_ray_points_through_target() {
    let camera = Camera::perspective(Vec3::new(0.0, 5.0, 25.0), Vec3::ZERO, 1.5);
    let (ro, rd) = camera_ray(&camera, Vec2::ZERO);
    assert_eq!(ro, camera.eye);
    let expected = (camera.target - camera.eye).normalize();
    assert!((rd - expected).abs().max_element() < 1e-3);
}

#[test]
fn instances_pack_visible_objects_of_one_section() {
    assert_eq!(std::mem::size_of::<InstanceData>(), 48);

    let mut objects = ObjectArena::new();
    let group = objects
        .insert(Visual::group(Section::About).at(Vec3::new(1.0, 0.0, 0.0)).scaled(2.0))
        .unwrap();
    objects
        .insert(
            Visual::mesh(Section::About)
                .child_of(group)
                .at(Vec3::new(1.0, 0.0, 0.0))
                .size(0.5)
                .shape(Shape::Diamond)
                .color(Vec3::new(0.2, 0.4, 0.6))
                .opacity(0.5),
        )
        .unwrap();
    objects
        .insert(Visual::mesh(Section::About).opacity(0.0))
        .unwrap();
    objects.insert(Visual::mesh(Section::Hero)).unwrap();

    let packed = pack_instances(Section::About, &objects);
    assert_eq!(packed.len(), 1);
    let inst = packed[0];
    assert!((Vec3::from(inst.pos) - Vec3::new(3.0, 0.0, 0.0)).abs().max_element() < 1e-5);
    assert!((inst.scale - 1.0).abs() < 1e-5);
    assert_eq!(inst.color, [0.2, 0.4, 0.6, 0.5]);
    assert_eq!(inst.shape, Shape::Diamond.code());
}

#[test]
fn lights_glow_with_their_intensity() {
    let mut objects = ObjectArena::new();
    objects
        .insert(Visual::light(Section::Hero, 2.5).color(AMBER))
        .unwrap();
    let packed = pack_instances(Section::Hero, &objects);
    assert_eq!(packed[0].glow, 2.5);
}
