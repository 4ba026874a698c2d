//! Frame orchestration: stop check, clock tick, animation step, render
//! dispatch.

use crate::animate::{animate, drift_cameras, FrameInputs};
use crate::clock::{Clock, FrameTime};
use crate::constants::{SELECT_DURATION, SELECT_INTENSITY, SELECT_SCALE};
use crate::curve::PathSet;
use crate::dispatch::{render_all, RenderSurface};
use crate::motion::Motion;
use crate::object::{ObjectArena, ObjectId, Section, SetupError, Visual};
use crate::pick::pick_nearest;
use crate::scene::{SceneEntry, SceneRegistry};
use crate::signals::InputSignals;
use crate::tween::{Ease, TweenList, TweenProperty, TweenSpec};
use glam::Vec2;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag. Cloned into host callbacks; `stop` takes effect before
/// the next tick.
#[derive(Clone, Debug)]
pub struct LoopControl {
    running: Rc<Cell<bool>>,
}

impl Default for LoopControl {
    fn default() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent.
    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub struct FrameContext<R> {
    pub clock: Clock,
    pub signals: InputSignals,
    pub objects: ObjectArena,
    pub paths: PathSet,
    pub tweens: TweenList,
    pub scenes: SceneRegistry<R>,
    control: LoopControl,
    last_pointer_generation: u64,
}

impl<R: RenderSurface> FrameContext<R> {
    pub fn new(signals: InputSignals) -> Self {
        let last_pointer_generation = signals.snapshot().pointer_generation;
        Self {
            clock: Clock::new(),
            signals,
            objects: ObjectArena::new(),
            paths: PathSet::new(),
            tweens: TweenList::new(),
            scenes: SceneRegistry::new(),
            control: LoopControl::new(),
            last_pointer_generation,
        }
    }

    /// Handle for stopping the loop from outside the frame.
    pub fn control(&self) -> LoopControl {
        self.control.clone()
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    /// Run one frame. Returns whether the host should schedule another.
    pub fn frame(&mut self) -> bool {
        self.frame_at(Instant::now())
    }

    pub fn frame_at(&mut self, now: Instant) -> bool {
        if !self.control.is_running() {
            return false;
        }
        let time = self.clock.tick_at(now);
        self.step(time);
        self.control.is_running()
    }

    /// Animate and render one frame at an explicit time.
    pub fn step(&mut self, time: FrameTime) {
        let signals = self.signals.snapshot();
        let pointer_moved = signals.pointer_generation != self.last_pointer_generation;
        self.last_pointer_generation = signals.pointer_generation;

        let inputs = FrameInputs {
            time,
            signals,
            pointer_moved,
        };
        animate(&inputs, &mut self.objects, &self.paths, &mut self.tweens);
        drift_cameras(&mut self.scenes, signals.scroll_progress);
        render_all(&mut self.scenes, &self.objects);
    }

    /// Add an object, checking its parent and any flow path it follows.
    pub fn spawn(&mut self, visual: Visual) -> Result<ObjectId, SetupError> {
        for motion in &visual.motions {
            if let Motion::FlowParticle { path, .. } = motion {
                if !self.paths.contains(*path) {
                    return Err(SetupError::UnknownPath(path.0));
                }
            }
        }
        self.objects.insert(visual)
    }

    pub fn mount(&mut self, section: Section, entry: SceneEntry<R>) {
        log::debug!("mount {:?}", section);
        self.scenes.set(section, entry);
    }

    /// Tear down a section: drop its objects and scene entry and release the
    /// renderer's GPU resources. Returns the number of objects removed.
    pub fn unmount(&mut self, section: Section) -> usize {
        let removed = self.objects.remove_section(section);
        if let Some(mut entry) = self.scenes.take(section) {
            if let Some(renderer) = entry.renderer.as_mut() {
                renderer.release();
            }
        }
        log::info!("unmounted {:?}: {} objects", section, removed);
        removed
    }

    /// Pick the nearest pickable object in `section` under an NDC point and
    /// play the selection pulse on it.
    pub fn select_at(&mut self, section: Section, ndc: Vec2) -> Option<ObjectId> {
        let camera = self.scenes.entry(section)?.camera.as_ref()?;
        let id = pick_nearest(&self.objects, section, camera, ndc)?;
        let pulse = |property, end| {
            TweenSpec::scalar(property, end, SELECT_DURATION)
                .ease(Ease::Power2InOut)
                .yoyo()
        };
        self.tweens
            .to(&self.objects, id, pulse(TweenProperty::Scale, SELECT_SCALE));
        self.tweens
            .to(&self.objects, id, pulse(TweenProperty::Intensity, SELECT_INTENSITY));
        Some(id)
    }
}
