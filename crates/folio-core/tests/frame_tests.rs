// Host-side tests for render dispatch, the frame context and teardown.

use folio_core::*;
use glam::{Vec2, Vec3};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<Section>>>,
    released: Rc<Cell<u32>>,
    stop_on_render: Option<LoopControl>,
}

impl RenderSurface for Recorder {
    fn render(&mut self, scene: &Scene, _camera: &Camera, _objects: &ObjectArena) {
        self.log.borrow_mut().push(scene.section);
        if let Some(control) = &self.stop_on_render {
            control.stop();
        }
    }

    fn release(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

fn entry(section: Section, rec: &Recorder) -> SceneEntry<Recorder> {
    SceneEntry::new(
        Scene::new(section),
        section_camera(section, 1.0),
        rec.clone(),
    )
}

fn frame_time(elapsed: f32, delta: f32) -> FrameTime {
    FrameTime {
        elapsed,
        delta,
        frame: 1,
    }
}

#[test]
fn partial_entries_are_skipped() {
    let rec = Recorder::default();
    let mut registry = SceneRegistry::new();
    registry.set(Section::Hero, entry(Section::Hero, &rec));
    let mut about = entry(Section::About, &rec);
    about.camera = None;
    registry.set(Section::About, about);

    let rendered = render_all(&mut registry, &ObjectArena::new());
    assert_eq!(rendered, 1);
    assert_eq!(*rec.log.borrow(), vec![Section::Hero]);
}

#[test]
fn dispatch_follows_section_order() {
    let rec = Recorder::default();
    let mut registry = SceneRegistry::new();
    registry.set(Section::Project(1), entry(Section::Project(1), &rec));
    registry.set(Section::Skills, entry(Section::Skills, &rec));
    registry.set(Section::Project(0), entry(Section::Project(0), &rec));
    registry.set(Section::Contact, entry(Section::Contact, &rec));
    registry.set(Section::Hero, entry(Section::Hero, &rec));

    render_all(&mut registry, &ObjectArena::new());
    assert_eq!(
        *rec.log.borrow(),
        vec![
            Section::Hero,
            Section::Skills,
            Section::Contact,
            Section::Project(0),
            Section::Project(1),
        ]
    );
}

#[test]
fn missing_project_slots_are_padded_and_skipped() {
    let rec = Recorder::default();
    let mut registry = SceneRegistry::new();
    registry.set(Section::Project(2), entry(Section::Project(2), &rec));
    assert_eq!(registry.projects.len(), 3);
    assert_eq!(render_all(&mut registry, &ObjectArena::new()), 1);
}

#[test]
fn camera_drift_is_idempotent() {
    let rec = Recorder::default();
    let mut registry = SceneRegistry::new();
    registry.set(
        Section::Hero,
        entry(Section::Hero, &rec).with_drift(ScrollDrift::default()),
    );

    drift_cameras(&mut registry, 0.5);
    let once = registry.hero.camera.clone().unwrap();
    drift_cameras(&mut registry, 0.5);
    let twice = registry.hero.camera.clone().unwrap();
    assert_eq!(once, twice);

    assert!(once.eye.x.abs() < 1e-4);
    assert!((once.eye.y - 12.5).abs() < 1e-5);
    assert!((once.eye.z - 22.5).abs() < 1e-5);
    assert_eq!(once.target, Vec3::ZERO);
}

#[test]
fn drift_positions_match_scroll_formula() {
    let drift = ScrollDrift::default();
    assert_eq!(drift.position_for(0.0), Vec3::new(0.0, 5.0, 25.0));
    let p = drift.position_for(0.125);
    assert!((p.x - 10.0).abs() < 1e-4);
    let end = drift.position_for(1.0);
    assert!((end.y - 20.0).abs() < 1e-5);
    assert!((end.z - 20.0).abs() < 1e-5);
}

#[test]
fn stop_takes_effect_before_the_next_tick() {
    let rec = Recorder::default();
    let mut ctx = FrameContext::new(InputSignals::new());
    ctx.mount(Section::Hero, entry(Section::Hero, &rec));
    let control = ctx.control();

    let t0 = Instant::now();
    assert!(ctx.frame_at(t0));
    assert_eq!(ctx.clock.frames(), 1);

    control.stop();
    control.stop();
    assert!(!ctx.frame_at(t0 + Duration::from_millis(16)));
    assert_eq!(ctx.clock.frames(), 1);
    assert_eq!(rec.log.borrow().len(), 1);
    assert!(!ctx.is_running());
}

#[test]
fn stop_during_render_ends_the_loop() {
    let mut ctx = FrameContext::new(InputSignals::new());
    let rec = Recorder {
        stop_on_render: Some(ctx.control()),
        ..Default::default()
    };
    ctx.mount(Section::Hero, entry(Section::Hero, &rec));
    assert!(!ctx.frame());
    assert_eq!(rec.log.borrow().len(), 1);
}

#[test]
fn frame_runs_tick_animate_render() {
    let rec = Recorder::default();
    let mut ctx = FrameContext::new(InputSignals::new());
    ctx.mount(Section::Contact, entry(Section::Contact, &rec));
    let id = ctx
        .spawn(Visual::mesh(Section::Contact).with_motion(Motion::orbit(0.0, 0.01, 6.0)))
        .unwrap();

    let t0 = Instant::now();
    for i in 0..3 {
        assert!(ctx.frame_at(t0 + Duration::from_millis(16 * i)));
    }
    assert_eq!(ctx.clock.frames(), 3);
    assert_eq!(rec.log.borrow().len(), 3);
    let Motion::Orbit { angle, .. } = ctx.objects.get(id).unwrap().motions[0] else {
        panic!("expected orbit motion");
    };
    assert!((angle - 0.03).abs() < 1e-6);
}

#[test]
fn pointer_tilt_tweens_towards_pointer() {
    let rec = Recorder::default();
    let signals = InputSignals::new();
    let mut ctx = FrameContext::new(signals.clone());
    ctx.mount(Section::Hero, entry(Section::Hero, &rec));
    let group = ctx
        .spawn(
            Visual::group(Section::Hero)
                .rotated(Vec3::new(0.0, 0.0, 0.4))
                .with_motion(Motion::PointerTilt {
                    gain: 0.3,
                    duration: 2.0,
                    ease: Ease::Power2Out,
                }),
        )
        .unwrap();

    ctx.step(frame_time(0.0, 0.0));
    assert!(ctx.tweens.is_empty(), "no pointer move yet");

    signals.set_pointer(Vec2::new(1.0, 0.5));
    ctx.step(frame_time(0.016, 0.0));
    assert!(ctx.tweens.is_active(group, TweenProperty::Rotation));

    ctx.step(frame_time(2.016, 2.0));
    let r = ctx.objects.get(group).unwrap().transform.rotation;
    assert!((r.x - 0.15).abs() < 1e-5);
    assert!((r.y - 0.3).abs() < 1e-5);
    assert_eq!(r.z, 0.4);
    assert!(ctx.tweens.is_empty());
}

#[test]
fn spawn_rejects_unknown_paths_and_parents() {
    let mut ctx: FrameContext<Recorder> = FrameContext::new(InputSignals::new());
    let err = ctx
        .spawn(Visual::points(Section::Skills).with_motion(Motion::flow(PathId(3), 0.0, 0.01)))
        .unwrap_err();
    assert_eq!(err, SetupError::UnknownPath(3));

    let parent = ctx.spawn(Visual::group(Section::Skills)).unwrap();
    ctx.objects.remove(parent);
    let err = ctx
        .spawn(Visual::mesh(Section::Skills).child_of(parent))
        .unwrap_err();
    assert_eq!(err, SetupError::MissingParent(parent));
}

#[test]
fn unmount_releases_renderer_and_objects() {
    let rec = Recorder::default();
    let mut ctx = FrameContext::new(InputSignals::new());
    let built = Showcase::new(&mut ctx.objects, &mut ctx.paths, ShowcaseParams::default())
        .build(Section::Project(0))
        .unwrap();
    ctx.mount(Section::Project(0), entry(Section::Project(0), &rec));
    ctx.mount(Section::Project(1), entry(Section::Project(1), &rec));
    let keep = ctx.spawn(Visual::mesh(Section::Project(1))).unwrap();

    let removed = ctx.unmount(Section::Project(0));
    assert_eq!(removed, built);
    assert_eq!(rec.released.get(), 1);
    assert_eq!(ctx.objects.in_section(Section::Project(0)).count(), 0);
    assert!(ctx.objects.contains(keep));

    // project slots keep their indices
    assert_eq!(ctx.scenes.projects.len(), 2);
    assert!(!ctx.scenes.projects[0].is_complete());
    ctx.step(frame_time(0.0, 0.0));
    assert_eq!(*rec.log.borrow(), vec![Section::Project(1)]);

    // a second unmount finds nothing to release
    assert_eq!(ctx.unmount(Section::Project(0)), 0);
    assert_eq!(rec.released.get(), 1);
}

#[test]
fn selection_pulses_the_picked_node() {
    let rec = Recorder::default();
    let mut ctx = FrameContext::new(InputSignals::new());
    ctx.mount(Section::Skills, entry(Section::Skills, &rec));
    let node = ctx
        .spawn(
            Visual::mesh(Section::Skills)
                .with_intensity(0.3)
                .pickable(0.6),
        )
        .unwrap();

    assert_eq!(ctx.select_at(Section::Skills, Vec2::new(0.95, 0.95)), None);
    assert_eq!(ctx.select_at(Section::Skills, Vec2::ZERO), Some(node));
    assert!(ctx.tweens.is_active(node, TweenProperty::Scale));
    assert!(ctx.tweens.is_active(node, TweenProperty::Intensity));

    ctx.step(frame_time(0.3, 0.3));
    let v = ctx.objects.get(node).unwrap();
    assert!((v.transform.scale.x - 1.5).abs() < 1e-5);
    assert!((v.intensity.unwrap() - 0.8).abs() < 1e-5);

    ctx.step(frame_time(0.6, 0.3));
    let v = ctx.objects.get(node).unwrap();
    assert!((v.transform.scale.x - 1.0).abs() < 1e-5);
    assert!((v.intensity.unwrap() - 0.3).abs() < 1e-5);
    assert!(ctx.tweens.is_empty());
}

#[test]
fn selection_without_camera_does_nothing() {
    let mut ctx: FrameContext<Recorder> = FrameContext::new(InputSignals::new());
    ctx.spawn(Visual::mesh(Section::Skills).pickable(1.0)).unwrap();
    assert_eq!(ctx.select_at(Section::Skills, Vec2::ZERO), None);
    assert!(ctx.tweens.is_empty());
}

#[test]
fn pointer_attraction_waits_for_the_selection_pulse() {
    let rec = Recorder::default();
    let signals = InputSignals::new();
    let mut ctx = FrameContext::new(signals.clone());
    ctx.mount(Section::Skills, entry(Section::Skills, &rec));
    let node = ctx
        .spawn(
            Visual::mesh(Section::Skills)
                .with_intensity(0.3)
                .pickable(0.6)
                .with_motion(Motion::PointerAttract {
                    reach: 10.0,
                    radius: 5.0,
                    strength: 0.5,
                    duration: 0.5,
                }),
        )
        .unwrap();

    assert_eq!(ctx.select_at(Section::Skills, Vec2::ZERO), Some(node));
    // pointer far from the node would settle the scale back to 1
    signals.set_pointer(Vec2::new(1.0, 1.0));
    ctx.step(frame_time(0.15, 0.15));
    signals.set_pointer(Vec2::new(0.9, 1.0));
    ctx.step(frame_time(0.3, 0.15));
    let v = ctx.objects.get(node).unwrap();
    assert!((v.transform.scale.x - 1.5).abs() < 1e-5);

    ctx.step(frame_time(0.6, 0.3));
    assert!((ctx.objects.get(node).unwrap().transform.scale.x - 1.0).abs() < 1e-5);
    assert!(ctx.tweens.is_empty());

    // once the pulse is over the pointer drives the scale again
    signals.set_pointer(Vec2::ZERO);
    ctx.step(frame_time(0.616, 0.0));
    assert!(ctx.tweens.is_active(node, TweenProperty::Scale));
}
