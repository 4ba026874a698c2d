//! Scene registry: one scene/camera/renderer triple per page section.

use crate::camera::{Camera, ScrollDrift};
use crate::object::Section;
use glam::Vec4;

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub section: Section,
    pub clear_color: Vec4,
}

impl Scene {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            clear_color: Vec4::new(0.0, 0.0, 0.0, 0.0),
        }
    }

    pub fn with_clear_color(mut self, clear_color: Vec4) -> Self {
        self.clear_color = clear_color;
        self
    }
}

pub struct SceneEntry<R> {
    pub scene: Option<Scene>,
    pub camera: Option<Camera>,
    pub renderer: Option<R>,
    /// Scroll-coupled placement for this entry's camera.
    pub drift: Option<ScrollDrift>,
}

impl<R> Default for SceneEntry<R> {
    fn default() -> Self {
        Self {
            scene: None,
            camera: None,
            renderer: None,
            drift: None,
        }
    }
}

impl<R> SceneEntry<R> {
    pub fn new(scene: Scene, camera: Camera, renderer: R) -> Self {
        Self {
            scene: Some(scene),
            camera: Some(camera),
            renderer: Some(renderer),
            drift: None,
        }
    }

    pub fn with_drift(mut self, drift: ScrollDrift) -> Self {
        self.drift = Some(drift);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.scene.is_some() && self.camera.is_some() && self.renderer.is_some()
    }
}

/// Entries for the fixed sections plus an ordered list of project scenes.
pub struct SceneRegistry<R> {
    pub hero: SceneEntry<R>,
    pub about: SceneEntry<R>,
    pub skills: SceneEntry<R>,
    pub contact: SceneEntry<R>,
    pub projects: Vec<SceneEntry<R>>,
}

impl<R> Default for SceneRegistry<R> {
    fn default() -> Self {
        Self {
            hero: SceneEntry::default(),
            about: SceneEntry::default(),
            skills: SceneEntry::default(),
            contact: SceneEntry::default(),
            projects: Vec::new(),
        }
    }
}

impl<R> SceneRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an entry; project entries past the end of the list pad it with
    /// empty entries so indices stay meaningful.
    pub fn set(&mut self, section: Section, entry: SceneEntry<R>) {
        match section {
            Section::Project(i) => {
                if self.projects.len() <= i {
                    self.projects.resize_with(i + 1, SceneEntry::default);
                }
                self.projects[i] = entry;
            }
            _ => {
                if let Some(slot) = self.entry_mut(section) {
                    *slot = entry;
                }
            }
        }
    }

    pub fn entry(&self, section: Section) -> Option<&SceneEntry<R>> {
        match section {
            Section::Hero => Some(&self.hero),
            Section::About => Some(&self.about),
            Section::Skills => Some(&self.skills),
            Section::Contact => Some(&self.contact),
            Section::Project(i) => self.projects.get(i),
        }
    }

    pub fn entry_mut(&mut self, section: Section) -> Option<&mut SceneEntry<R>> {
        match section {
            Section::Hero => Some(&mut self.hero),
            Section::About => Some(&mut self.about),
            Section::Skills => Some(&mut self.skills),
            Section::Contact => Some(&mut self.contact),
            Section::Project(i) => self.projects.get_mut(i),
        }
    }

    /// Take an entry out, leaving an empty one in its place.
    pub fn take(&mut self, section: Section) -> Option<SceneEntry<R>> {
        self.entry_mut(section).map(std::mem::take)
    }

    /// Entries in render order: hero, about, skills, contact, projects.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &SceneEntry<R>)> {
        [
            (Section::Hero, &self.hero),
            (Section::About, &self.about),
            (Section::Skills, &self.skills),
            (Section::Contact, &self.contact),
        ]
        .into_iter()
        .chain(
            self.projects
                .iter()
                .enumerate()
                .map(|(i, e)| (Section::Project(i), e)),
        )
    }

    /// Mutable entries in render order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Section, &mut SceneEntry<R>)> {
        [
            (Section::Hero, &mut self.hero),
            (Section::About, &mut self.about),
            (Section::Skills, &mut self.skills),
            (Section::Contact, &mut self.contact),
        ]
        .into_iter()
        .chain(
            self.projects
                .iter_mut()
                .enumerate()
                .map(|(i, e)| (Section::Project(i), e)),
        )
    }
}
