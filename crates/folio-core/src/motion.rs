//! Per-object animation parameters, one variant per animation family.
//!
//! An object carries zero or more motions; the animation step matches on the
//! variant instead of probing for optional fields. Parameters are fixed at
//! construction except `Orbit::angle` and `FlowParticle::progress`, which the
//! step advances.

use crate::curve::PathId;
use crate::tween::Ease;
use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Circular motion about the parent origin in the XZ plane; y is untouched.
    Orbit {
        angle: f32,
        angular_speed: f32,
        radius: f32,
    },
    /// Vertical bob around `initial_y`.
    Float {
        initial_y: f32,
        float_speed: f32,
        float_range: f32,
    },
    /// Euler rotation accumulated every frame.
    Spin { speed: Vec3 },
    /// Euler rotation derived from elapsed time; zero-rate axes are left alone.
    TimedSpin { rate: Vec3, phase: Vec3 },
    /// Sinusoidal intensity and/or scale.
    Pulse {
        pulse_speed: f32,
        base_intensity: f32,
        amplitude: f32,
        scale_amplitude: f32,
    },
    /// Opacity flicker around half of `base_opacity`.
    Flicker { speed: f32, base_opacity: f32 },
    /// Euler rotation derived from scroll progress; zero-rate axes are left alone.
    ScrollSpin { rate: Vec3 },
    /// Light intensity and hue driven by scroll progress.
    ScrollGlow {
        base_intensity: f32,
        swing: f32,
        hue_base: f32,
        hue_span: f32,
    },
    /// Eased tilt towards the pointer, retargeted on pointer moves.
    PointerTilt { gain: f32, duration: f32, ease: Ease },
    /// Position offset from `anchor` by the pointer, applied every frame.
    PointerFollow { anchor: Vec3, gain: Vec2 },
    /// Eased scale-up when the pointer's projection comes near.
    PointerAttract {
        reach: f32,
        radius: f32,
        strength: f32,
        duration: f32,
    },
    /// Travel along a curve from the path set, wrapping at the end.
    FlowParticle {
        path: PathId,
        progress: f32,
        speed: f32,
        pulse: f32,
    },
}

impl Motion {
    pub fn orbit(angle: f32, angular_speed: f32, radius: f32) -> Self {
        Motion::Orbit {
            angle,
            angular_speed,
            radius,
        }
    }

    pub fn float(initial_y: f32, float_speed: f32, float_range: f32) -> Self {
        Motion::Float {
            initial_y,
            float_speed,
            float_range,
        }
    }

    pub fn pulse(pulse_speed: f32, base_intensity: f32, amplitude: f32) -> Self {
        Motion::Pulse {
            pulse_speed,
            base_intensity,
            amplitude,
            scale_amplitude: 0.0,
        }
    }

    pub fn scale_pulse(pulse_speed: f32, scale_amplitude: f32) -> Self {
        Motion::Pulse {
            pulse_speed,
            base_intensity: 0.0,
            amplitude: 0.0,
            scale_amplitude,
        }
    }

    pub fn flow(path: PathId, progress: f32, speed: f32) -> Self {
        Motion::FlowParticle {
            path,
            progress,
            speed,
            pulse: 0.0,
        }
    }

    /// Position an orbiting object on its initial angle so it is correct
    /// before the first step.
    pub fn initial_position(&self, position: Vec3) -> Vec3 {
        match *self {
            Motion::Orbit { angle, radius, .. } => {
                Vec3::new(angle.cos() * radius, position.y, angle.sin() * radius)
            }
            Motion::Float { initial_y, .. } => Vec3::new(position.x, initial_y, position.z),
            _ => position,
        }
    }
}

/// Wrap flow progress back into \[0, 1\] keeping the overshoot.
#[inline]
pub fn wrap_progress(progress: f32) -> f32 {
    if progress > 1.0 {
        progress - progress.floor()
    } else {
        progress
    }
}

/// Orbit position for an angle, keeping the current height.
#[inline]
pub fn orbit_position(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// `initial_y + sin(elapsed * speed) * range`
#[inline]
pub fn float_height(initial_y: f32, float_speed: f32, float_range: f32, elapsed: f32) -> f32 {
    initial_y + (elapsed * float_speed).sin() * float_range
}

/// `base + sin(elapsed * speed) * amplitude`
#[inline]
pub fn pulse_value(base: f32, pulse_speed: f32, amplitude: f32, elapsed: f32) -> f32 {
    base + (elapsed * pulse_speed).sin() * amplitude
}
