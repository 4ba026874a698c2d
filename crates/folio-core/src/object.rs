//! Animatable objects and the arena that owns them.
//!
//! Objects are addressed by generational [`ObjectId`]s: removing an object
//! frees its slot for reuse, and ids that referred to the old occupant stop
//! resolving instead of aliasing the new one.

use crate::constants::MAX_PARENT_DEPTH;
use crate::motion::Motion;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId {
    index: u32,
    generation: u32,
}

impl ObjectId {
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

/// Page section a scene (and its objects) belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Hero,
    About,
    Skills,
    Contact,
    Project(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Mesh,
    Points,
    Light,
    Group,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rot, self.position)
    }
}

/// Named uniform slots on a shader-backed material. `None` means the
/// material has no such slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShaderUniforms {
    pub time: Option<f32>,
    pub mouse: Option<Vec2>,
    pub color1: Option<Vec3>,
    pub color2: Option<Vec3>,
}

impl ShaderUniforms {
    /// Material with `time` and `mouse` slots and a two-color blend.
    pub fn animated(color1: Vec3, color2: Vec3) -> Self {
        Self {
            time: Some(0.0),
            mouse: Some(Vec2::ZERO),
            color1: Some(color1),
            color2: Some(color2),
        }
    }
}

/// Sprite shape the GPU backend draws for an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    #[default]
    Orb,
    Ring,
    Diamond,
    Spark,
}

impl Shape {
    pub fn code(self) -> u32 {
        match self {
            Shape::Orb => 0,
            Shape::Ring => 1,
            Shape::Diamond => 2,
            Shape::Spark => 3,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Visual {
    pub kind: ObjectKind,
    pub section: Section,
    pub parent: Option<ObjectId>,
    pub transform: Transform,
    pub shape: Shape,
    /// Sprite size in local units, multiplied by the world scale.
    pub size: f32,
    pub color: Vec3,
    pub opacity: f32,
    /// Light or emissive intensity, for objects that have one.
    pub intensity: Option<f32>,
    pub uniforms: Option<ShaderUniforms>,
    /// Radius for click picking; `None` means not pickable.
    pub pick_radius: Option<f32>,
    pub motions: SmallVec<[Motion; 2]>,
}

impl Visual {
    pub fn new(kind: ObjectKind, section: Section) -> Self {
        Self {
            kind,
            section,
            parent: None,
            transform: Transform::default(),
            shape: Shape::default(),
            size: 1.0,
            color: Vec3::ONE,
            opacity: 1.0,
            intensity: match kind {
                ObjectKind::Light => Some(1.0),
                _ => None,
            },
            uniforms: None,
            pick_radius: None,
            motions: SmallVec::new(),
        }
    }

    pub fn mesh(section: Section) -> Self {
        Self::new(ObjectKind::Mesh, section)
    }

    pub fn points(section: Section) -> Self {
        Self::new(ObjectKind::Points, section)
    }

    pub fn light(section: Section, intensity: f32) -> Self {
        Self::new(ObjectKind::Light, section).with_intensity(intensity)
    }

    pub fn group(section: Section) -> Self {
        Self::new(ObjectKind::Group, section)
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.transform.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.transform.scale = Vec3::splat(scale);
        self
    }

    pub fn child_of(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_uniforms(mut self, uniforms: ShaderUniforms) -> Self {
        self.uniforms = Some(uniforms);
        self
    }

    pub fn pickable(mut self, radius: f32) -> Self {
        self.pick_radius = Some(radius);
        self
    }

    /// Attach a motion; orbit and float motions also snap the position to
    /// their starting point.
    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.transform.position = motion.initial_position(self.transform.position);
        self.motions.push(motion);
        self
    }

    /// Groups are transform-only and are not drawn.
    pub fn is_drawable(&self) -> bool {
        self.kind != ObjectKind::Group && self.opacity > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("parent object {0:?} does not exist")]
    MissingParent(ObjectId),
    #[error("flow particle refers to unknown path {0}")]
    UnknownPath(usize),
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    visual: Option<Visual>,
}

#[derive(Debug, Default)]
pub struct ObjectArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl ObjectArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an object; a parent, when given, must already be live.
    pub fn insert(&mut self, visual: Visual) -> Result<ObjectId, SetupError> {
        if let Some(parent) = visual.parent {
            if !self.contains(parent) {
                return Err(SetupError::MissingParent(parent));
            }
        }
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.visual = Some(visual);
            return Ok(ObjectId {
                index,
                generation: slot.generation,
            });
        }
        self.slots.push(Slot {
            generation: 0,
            visual: Some(visual),
        });
        Ok(ObjectId {
            index: (self.slots.len() - 1) as u32,
            generation: 0,
        })
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<Visual> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let visual = slot.visual.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        Some(visual)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: ObjectId) -> Option<&Visual> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.visual.as_ref()
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Visual> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.visual.as_mut()
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Visual)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.visual.as_ref().map(|v| {
                (
                    ObjectId {
                        index: i as u32,
                        generation: slot.generation,
                    },
                    v,
                )
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ObjectId, &mut Visual)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.visual.as_mut().map(|v| {
                (
                    ObjectId {
                        index: i as u32,
                        generation,
                    },
                    v,
                )
            })
        })
    }

    pub fn in_section(&self, section: Section) -> impl Iterator<Item = (ObjectId, &Visual)> {
        self.iter().filter(move |(_, v)| v.section == section)
    }

    /// World matrix composed through the parent chain. A dangling parent
    /// ends the chain there.
    pub fn world_matrix(&self, id: ObjectId) -> Option<Mat4> {
        let mut visual = self.get(id)?;
        let mut m = visual.transform.matrix();
        for _ in 0..MAX_PARENT_DEPTH {
            let Some(parent) = visual.parent.and_then(|p| self.get(p)) else {
                break;
            };
            m = parent.transform.matrix() * m;
            visual = parent;
        }
        Some(m)
    }

    pub fn world_position(&self, id: ObjectId) -> Option<Vec3> {
        self.world_matrix(id).map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Remove every object belonging to `section`, returning how many went.
    pub fn remove_section(&mut self, section: Section) -> usize {
        let ids: Vec<ObjectId> = self.in_section(section).map(|(id, _)| id).collect();
        for id in &ids {
            self.remove(*id);
        }
        ids.len()
    }
}
