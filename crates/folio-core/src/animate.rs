//! The per-frame animation step.
//!
//! Runs every object's motions against one frame's time and input snapshot,
//! writes shader uniforms, fires pointer-driven tweens and then advances all
//! tweens. Missing data (no intensity slot, unknown path, no camera) is
//! skipped without error.

use crate::clock::FrameTime;
use crate::color::hsl_to_rgb;
use crate::constants::{FLOW_PULSE_FREQ, FLOW_PULSE_PHASE, GLOW_LIGHTNESS, GLOW_SATURATION};
use crate::curve::PathSet;
use crate::motion::{float_height, orbit_position, pulse_value, wrap_progress, Motion};
use crate::object::{ObjectArena, ObjectId, Visual};
use crate::scene::SceneRegistry;
use crate::signals::SignalState;
use crate::tween::{TweenList, TweenProperty, TweenSpec};
use glam::{BVec3, Vec2, Vec3};
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub time: FrameTime,
    pub signals: SignalState,
    /// The pointer was written since the previous frame.
    pub pointer_moved: bool,
}

/// Advance every object by one frame.
pub fn animate(
    inputs: &FrameInputs,
    objects: &mut ObjectArena,
    paths: &PathSet,
    tweens: &mut TweenList,
) {
    let mut fired: SmallVec<[(ObjectId, TweenSpec); 8]> = SmallVec::new();
    for (id, visual) in objects.iter_mut() {
        step_object(inputs, paths, id, visual, &mut fired);
    }
    for (id, spec) in fired {
        tweens.retarget(objects, id, spec);
    }
    tweens.advance(inputs.time.delta, objects);
}

fn step_object(
    inputs: &FrameInputs,
    paths: &PathSet,
    id: ObjectId,
    visual: &mut Visual,
    fired: &mut SmallVec<[(ObjectId, TweenSpec); 8]>,
) {
    let elapsed = inputs.time.elapsed;
    let progress = inputs.signals.scroll_progress;
    let pointer = inputs.signals.pointer;
    let Visual {
        motions,
        transform,
        intensity,
        opacity,
        color,
        uniforms,
        ..
    } = visual;

    for motion in motions.iter_mut() {
        match motion {
            Motion::Orbit {
                angle,
                angular_speed,
                radius,
            } => {
                *angle += *angular_speed;
                transform.position = orbit_position(*angle, *radius, transform.position.y);
            }
            Motion::Float {
                initial_y,
                float_speed,
                float_range,
            } => {
                transform.position.y =
                    float_height(*initial_y, *float_speed, *float_range, elapsed);
            }
            Motion::Spin { speed } => {
                transform.rotation += *speed;
            }
            Motion::TimedSpin { rate, phase } => {
                let target = *rate * elapsed + *phase;
                transform.rotation =
                    Vec3::select(rate.cmpne(Vec3::ZERO), target, transform.rotation);
            }
            Motion::Pulse {
                pulse_speed,
                base_intensity,
                amplitude,
                scale_amplitude,
            } => {
                if *amplitude != 0.0 || *base_intensity != 0.0 {
                    if let Some(i) = intensity.as_mut() {
                        *i = pulse_value(*base_intensity, *pulse_speed, *amplitude, elapsed);
                    }
                }
                if *scale_amplitude != 0.0 {
                    transform.scale =
                        Vec3::splat(pulse_value(1.0, *pulse_speed, *scale_amplitude, elapsed));
                }
            }
            Motion::Flicker {
                speed,
                base_opacity,
            } => {
                *opacity = *base_opacity * (0.5 + (elapsed * *speed).sin() * 0.5);
            }
            Motion::ScrollSpin { rate } => {
                let target = *rate * progress;
                transform.rotation =
                    Vec3::select(rate.cmpne(Vec3::ZERO), target, transform.rotation);
            }
            Motion::ScrollGlow {
                base_intensity,
                swing,
                hue_base,
                hue_span,
            } => {
                if let Some(i) = intensity.as_mut() {
                    *i = *base_intensity + (progress * TAU).sin() * *swing;
                }
                *color = hsl_to_rgb(
                    *hue_base + progress * *hue_span,
                    GLOW_SATURATION,
                    GLOW_LIGHTNESS,
                );
            }
            Motion::PointerTilt {
                gain,
                duration,
                ease,
            } => {
                if inputs.pointer_moved {
                    let end = Vec3::new(pointer.y * *gain, pointer.x * *gain, 0.0);
                    let spec = TweenSpec::new(TweenProperty::Rotation, end, *duration)
                        .axes(BVec3::new(true, true, false))
                        .ease(*ease);
                    fired.push((id, spec));
                }
            }
            Motion::PointerFollow { anchor, gain } => {
                transform.position.x = anchor.x + pointer.x * gain.x;
                transform.position.y = anchor.y + pointer.y * gain.y;
            }
            Motion::PointerAttract {
                reach,
                radius,
                strength,
                duration,
            } => {
                if inputs.pointer_moved {
                    let s =
                        attraction_scale(transform.position, pointer, *reach, *radius, *strength);
                    fired.push((id, TweenSpec::scalar(TweenProperty::Scale, s, *duration)));
                }
            }
            Motion::FlowParticle {
                path,
                progress: along,
                speed,
                pulse,
            } => {
                let Some(curve) = paths.get(*path) else {
                    continue;
                };
                *along = wrap_progress(*along + *speed);
                transform.position = curve.point_at(*along);
                if *pulse != 0.0 {
                    let s = 1.0
                        + (elapsed * FLOW_PULSE_FREQ + *along * FLOW_PULSE_PHASE).sin() * *pulse;
                    transform.scale = Vec3::splat(s);
                }
            }
        }
    }

    if let Some(u) = uniforms.as_mut() {
        if u.time.is_some() {
            u.time = Some(elapsed);
        }
        if u.mouse.is_some() {
            u.mouse = Some(pointer);
        }
    }
}

/// Scale an attracted object settles on: `1 + max(0, 1 - d / radius) * strength`,
/// with `d` measured to the pointer projected onto the z = 0 plane.
pub fn attraction_scale(
    position: Vec3,
    pointer: Vec2,
    reach: f32,
    radius: f32,
    strength: f32,
) -> f32 {
    if radius <= 0.0 {
        return 1.0;
    }
    let d = position.distance(Vec3::new(pointer.x * reach, pointer.y * reach, 0.0));
    1.0 + (1.0 - d / radius).max(0.0) * strength
}

/// Re-place every drifting camera from scroll progress.
pub fn drift_cameras<R>(registry: &mut SceneRegistry<R>, progress: f32) {
    for (_, entry) in registry.iter_mut() {
        if let (Some(drift), Some(camera)) = (entry.drift.as_ref(), entry.camera.as_mut()) {
            drift.apply(camera, progress);
        }
    }
}
