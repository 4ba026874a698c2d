//! Eased property interpolation owned by the frame context.
//!
//! Tweens are fired from the animation step (pointer tilt, attraction) or by
//! host events (selection pulse) and advanced once per frame. A tween on a
//! (target, property) pair replaces any tween already running on that pair,
//! starting from the property's current value. Pointer-driven retargets yield
//! to a running yoyo pulse.

use crate::object::{ObjectArena, ObjectId, Visual};
use fnv::FnvHashMap;
use glam::{BVec3, Vec3};

/// Easing curves, named after their gsap equivalents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Ease {
    Linear,
    /// `power2.out`
    #[default]
    Power2Out,
    /// `power2.inOut`
    Power2InOut,
    /// `power3.out`
    Power3Out,
}

impl Ease {
    /// Map normalized time in \[0, 1\] to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    Position,
    Rotation,
    Scale,
    /// Scalar; carried in the x lane.
    Intensity,
}

impl TweenProperty {
    pub fn read(self, visual: &Visual) -> Option<Vec3> {
        match self {
            TweenProperty::Position => Some(visual.transform.position),
            TweenProperty::Rotation => Some(visual.transform.rotation),
            TweenProperty::Scale => Some(visual.transform.scale),
            TweenProperty::Intensity => visual.intensity.map(Vec3::splat),
        }
    }

    pub fn write(self, visual: &mut Visual, value: Vec3) {
        match self {
            TweenProperty::Position => visual.transform.position = value,
            TweenProperty::Rotation => visual.transform.rotation = value,
            TweenProperty::Scale => visual.transform.scale = value,
            TweenProperty::Intensity => {
                if let Some(i) = visual.intensity.as_mut() {
                    *i = value.x;
                }
            }
        }
    }
}

/// What to animate and how.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub property: TweenProperty,
    pub end: Vec3,
    /// Axes that are written; the others keep whatever they hold.
    pub axes: BVec3,
    pub duration: f32,
    pub ease: Ease,
    /// Play forward then back to the start value.
    pub yoyo: bool,
}

impl TweenSpec {
    pub fn new(property: TweenProperty, end: Vec3, duration: f32) -> Self {
        Self {
            property,
            end,
            axes: BVec3::TRUE,
            duration,
            ease: Ease::default(),
            yoyo: false,
        }
    }

    pub fn scalar(property: TweenProperty, end: f32, duration: f32) -> Self {
        Self::new(property, Vec3::splat(end), duration)
    }

    pub fn axes(mut self, axes: BVec3) -> Self {
        self.axes = axes;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }
}

#[derive(Clone, Debug)]
struct Tween {
    target: ObjectId,
    spec: TweenSpec,
    from: Vec3,
    elapsed: f32,
}

impl Tween {
    fn total(&self) -> f32 {
        if self.spec.yoyo {
            self.spec.duration * 2.0
        } else {
            self.spec.duration
        }
    }

    fn value(&self) -> Vec3 {
        if self.spec.duration <= 0.0 {
            return if self.spec.yoyo { self.from } else { self.spec.end };
        }
        let mut t = self.elapsed / self.spec.duration;
        if self.spec.yoyo && t > 1.0 {
            t = 2.0 - t;
        }
        self.from.lerp(self.spec.end, self.spec.ease.apply(t))
    }
}

#[derive(Debug, Default)]
pub struct TweenList {
    tweens: FnvHashMap<(ObjectId, TweenProperty), Tween>,
}

impl TweenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tween from the target's current value. Returns `false` when the
    /// target or its property does not exist.
    pub fn to(&mut self, objects: &ObjectArena, target: ObjectId, spec: TweenSpec) -> bool {
        match objects.get(target).and_then(|v| spec.property.read(v)) {
            Some(from) => {
                self.start(target, from, spec);
                true
            }
            None => false,
        }
    }

    /// Like [`TweenList::to`], but a running yoyo tween on the same pair keeps
    /// playing. Returns `false` when nothing was started.
    pub fn retarget(&mut self, objects: &ObjectArena, target: ObjectId, spec: TweenSpec) -> bool {
        match self.tweens.get(&(target, spec.property)) {
            Some(running) if running.spec.yoyo => false,
            _ => self.to(objects, target, spec),
        }
    }

    /// Start a tween from an explicit value.
    pub fn start(&mut self, target: ObjectId, from: Vec3, spec: TweenSpec) {
        self.tweens.insert(
            (target, spec.property),
            Tween {
                target,
                spec,
                from,
                elapsed: 0.0,
            },
        );
    }

    /// Advance every tween by `dt` seconds and write its value; finished
    /// tweens and tweens on removed objects are dropped.
    pub fn advance(&mut self, dt: f32, objects: &mut ObjectArena) {
        self.tweens.retain(|_, tw| {
            let Some(visual) = objects.get_mut(tw.target) else {
                return false;
            };
            tw.elapsed = (tw.elapsed + dt.max(0.0)).min(tw.total());
            let current = tw.spec.property.read(visual).unwrap_or(tw.from);
            let value = Vec3::select(tw.spec.axes, tw.value(), current);
            tw.spec.property.write(visual, value);
            tw.elapsed < tw.total()
        });
    }

    pub fn is_active(&self, target: ObjectId, property: TweenProperty) -> bool {
        self.tweens.contains_key(&(target, property))
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
