//! Seeded builders for the portfolio's section scenes.

use crate::camera::{Camera, ScrollDrift};
use crate::color::{hsl_to_rgb, rgb_hex};
use crate::constants::*;
use crate::curve::{CatmullRomPath, PathSet};
use crate::motion::Motion;
use crate::object::{ObjectArena, ObjectId, Section, SetupError, ShaderUniforms, Shape, Visual};
use crate::scene::Scene;
use crate::tween::Ease;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

/// Counts and seed for the showcase scenes.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseParams {
    pub seed: u64,
    /// Background particles per depth layer, nearest last.
    pub particle_layers: [usize; 3],
    pub energy_particles: usize,
    pub helix_samples: usize,
    pub data_nodes: usize,
    pub globe_points: usize,
    pub satellites: usize,
    pub project_tokens: usize,
}

impl Default for ShowcaseParams {
    fn default() -> Self {
        Self {
            seed: 0x00f0_110f,
            particle_layers: [400, 200, 100],
            energy_particles: 60,
            helix_samples: 40,
            data_nodes: 20,
            globe_points: 60,
            satellites: 6,
            project_tokens: 12,
        }
    }
}

const NETWORK_NODES: [[f32; 3]; 12] = [
    [0.0, 5.0, 0.0],
    [8.0, 2.0, 4.0],
    [-8.0, 2.0, -4.0],
    [4.0, -4.0, 6.0],
    [-6.0, -2.0, 2.0],
    [2.0, 2.0, -8.0],
    [-2.0, 8.0, 2.0],
    [6.0, -6.0, -2.0],
    [0.0, 0.0, 10.0],
    [-4.0, 4.0, -6.0],
    [10.0, -2.0, 0.0],
    [-10.0, 6.0, 4.0],
];

struct Skill {
    position: [f32; 3],
    color: u32,
    links: [usize; 3],
    shape: Shape,
    /// Rotation rate about x, y, z.
    spin: [f32; 3],
}

const SPIN_DEFAULT: [f32; 3] = [0.0, 0.3, 0.0];
const SPIN_DIAMOND: [f32; 3] = [0.2, 0.3, 0.0];
const SPIN_GEAR: [f32; 3] = [0.0, 0.0, 0.5];
const SPIN_WAVES: [f32; 3] = [0.4, 0.0, 0.0];

#[rustfmt::skip]
const SKILLS: [Skill; 16] = [
    Skill { position: [0.0, 3.0, 0.0], color: 0x6366f1, links: [1, 2, 3], shape: Shape::Diamond, spin: SPIN_DIAMOND },
    Skill { position: [3.0, 1.0, 2.0], color: 0xff6b35, links: [0, 4, 5], shape: Shape::Spark, spin: SPIN_DEFAULT },
    Skill { position: [-3.0, 1.0, -1.0], color: 0xf7df1e, links: [0, 5, 6], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [2.0, -1.0, 3.0], color: 0x627eea, links: [0, 1, 7], shape: Shape::Diamond, spin: SPIN_DIAMOND },
    Skill { position: [-2.0, -1.0, 1.0], color: 0x6c5ce7, links: [1, 2, 8], shape: Shape::Spark, spin: SPIN_DEFAULT },
    Skill { position: [1.0, 2.0, -3.0], color: 0xce422b, links: [1, 2, 9], shape: Shape::Ring, spin: SPIN_GEAR },
    Skill { position: [-1.0, 0.0, -2.0], color: 0x9945ff, links: [2, 5, 10], shape: Shape::Ring, spin: SPIN_WAVES },
    Skill { position: [0.0, -2.0, 2.0], color: 0x3178c6, links: [2, 6, 11], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [-3.0, 2.0, 0.0], color: 0x2496ed, links: [4, 6, 7], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [3.0, -2.0, -1.0], color: 0x375bd2, links: [0, 6, 7], shape: Shape::Diamond, spin: SPIN_DIAMOND },
    Skill { position: [1.0, 1.0, 4.0], color: 0xf05032, links: [6, 8, 9], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [-1.0, -3.0, -1.0], color: 0xfcc624, links: [7, 8, 10], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [2.0, 0.0, -3.0], color: 0x00599c, links: [5, 9, 11], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [-2.0, 3.0, 2.0], color: 0x326ce5, links: [8, 11, 12], shape: Shape::Orb, spin: SPIN_DEFAULT },
    Skill { position: [4.0, 1.0, 0.0], color: 0x4b4b5a, links: [0, 1, 4], shape: Shape::Diamond, spin: SPIN_DIAMOND },
    Skill { position: [0.0, 2.0, 3.0], color: 0xe5e7eb, links: [2, 7, 10], shape: Shape::Spark, spin: SPIN_DEFAULT },
];

const PROJECT_ACCENTS: [u32; 5] = [0xf59e0b, 0x10b981, 0x6366f1, 0x9945ff, 0xffd700];

const LOTTERY_BALLS: [u32; 6] = [0xff4444, 0x44ff44, 0x4444ff, 0xffff44, 0xff44ff, 0x44ffff];

/// Which visualization a project card asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    /// Yield curve ring with floating coins.
    Ambit,
    /// Circuit breaker box inside protective rings.
    Kairo,
    /// Floating keyboard keys.
    Typenad,
    /// Lottery balls.
    Lottery,
    /// Orbiting tokens around a spinning centerpiece.
    #[default]
    Generic,
}

impl ProjectKind {
    /// Map a card's `data-project` attribute; unknown or missing values fall
    /// back to [`ProjectKind::Generic`].
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr.map(str::trim) {
            Some("ambit") => ProjectKind::Ambit,
            Some("kairo") => ProjectKind::Kairo,
            Some("typenad") => ProjectKind::Typenad,
            Some("lottery") => ProjectKind::Lottery,
            _ => ProjectKind::Generic,
        }
    }
}

/// Camera a section starts with.
pub fn section_camera(section: Section, aspect: f32) -> Camera {
    match section {
        Section::Hero => Camera::perspective(HERO_CAMERA_HOME, HERO_LOOK_AT, aspect),
        Section::Project(_) => {
            Camera::perspective(Vec3::new(0.0, 2.0, PROJECT_CAMERA_Z), Vec3::ZERO, aspect)
        }
        _ => Camera::perspective(Vec3::new(0.0, 0.0, SECTION_CAMERA_Z), Vec3::ZERO, aspect),
    }
}

/// The hero paints the deep-space backdrop; other sections overlay the page.
pub fn section_scene(section: Section) -> Scene {
    match section {
        Section::Hero => Scene::new(section).with_clear_color(HERO_BACKDROP),
        _ => Scene::new(section),
    }
}

/// Scroll rig for sections whose camera follows the page.
pub fn section_drift(section: Section) -> Option<ScrollDrift> {
    match section {
        Section::Hero => Some(ScrollDrift::default()),
        _ => None,
    }
}

/// Populates an object arena and path set with the section scenes.
pub struct Showcase<'a> {
    objects: &'a mut ObjectArena,
    paths: &'a mut PathSet,
    params: ShowcaseParams,
    rng: StdRng,
}

impl<'a> Showcase<'a> {
    pub fn new(
        objects: &'a mut ObjectArena,
        paths: &'a mut PathSet,
        params: ShowcaseParams,
    ) -> Self {
        let rng = StdRng::seed_from_u64(params.seed);
        Self {
            objects,
            paths,
            params,
            rng,
        }
    }

    /// Build one section; returns how many objects were added.
    pub fn build(&mut self, section: Section) -> Result<usize, SetupError> {
        let before = self.objects.len();
        match section {
            Section::Hero => self.hero()?,
            Section::About => self.about()?,
            Section::Skills => {
                self.skills()?;
            }
            Section::Contact => self.contact()?,
            Section::Project(i) => self.project(i, ProjectKind::Generic)?,
        }
        let added = self.objects.len() - before;
        log::debug!("built {:?}: {} objects", section, added);
        Ok(added)
    }

    /// Build project card `index` with the visualization its card names.
    pub fn build_project(&mut self, index: usize, kind: ProjectKind) -> Result<usize, SetupError> {
        let before = self.objects.len();
        self.project(index, kind)?;
        let added = self.objects.len() - before;
        log::debug!("built project {} ({:?}): {} objects", index, kind, added);
        Ok(added)
    }

    fn spread(&mut self, half: Vec3) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(-half.x..=half.x),
            self.rng.gen_range(-half.y..=half.y),
            self.rng.gen_range(-half.z..=half.z),
        )
    }

    fn hero(&mut self) -> Result<(), SetupError> {
        let s = Section::Hero;

        // lighting rig
        self.objects.insert(
            Visual::light(s, 1.5)
                .at(Vec3::new(20.0, 20.0, 20.0))
                .color(INDIGO)
                .size(1.5)
                .with_motion(Motion::ScrollGlow {
                    base_intensity: 1.5,
                    swing: 0.5,
                    hue_base: 0.6,
                    hue_span: 0.2,
                }),
        )?;
        let accent_home = Vec3::new(-15.0, 10.0, 15.0);
        self.objects.insert(
            Visual::light(s, 2.0)
                .at(accent_home)
                .color(AMBER)
                .size(1.2)
                .with_motion(Motion::pulse(0.7, 2.0, 0.5))
                .with_motion(Motion::PointerFollow {
                    anchor: accent_home,
                    gain: Vec2::new(10.0, 5.0),
                }),
        )?;
        // sin(t * 0.5 + pi) == -sin(t * 0.5)
        self.objects.insert(
            Visual::light(s, 1.5)
                .at(Vec3::new(15.0, -10.0, -15.0))
                .color(EMERALD)
                .size(1.2)
                .with_motion(Motion::pulse(0.5, 1.5, -0.3)),
        )?;
        self.objects.insert(
            Visual::light(s, 3.0)
                .at(Vec3::new(0.0, 50.0, 0.0))
                .color(LAVENDER)
                .size(2.0)
                .with_motion(Motion::pulse(0.3, 3.0, 1.0)),
        )?;

        // blockchain network, turned by the page scroll and tilted towards
        // the pointer; the two rotations live on separate groups
        let scroll_spin = self.objects.insert(Visual::group(s).with_motion(Motion::ScrollSpin {
            rate: Vec3::new(PI, TAU, 0.0),
        }))?;
        let network = self.objects.insert(
            Visual::group(s)
                .child_of(scroll_spin)
                .with_motion(Motion::PointerTilt {
                    gain: POINTER_TILT_GAIN,
                    duration: POINTER_TILT_DURATION,
                    ease: Ease::Power2Out,
                }),
        )?;
        let mut nodes = Vec::with_capacity(NETWORK_NODES.len());
        for (i, p) in NETWORK_NODES.iter().enumerate() {
            let pos = Vec3::from_array(*p);
            nodes.push(pos);
            let f = i as f32;
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(network)
                    .at(pos)
                    .size(1.2)
                    .opacity(0.9)
                    .with_intensity(0.5)
                    .with_uniforms(ShaderUniforms::animated(INDIGO, AMBER))
                    .with_motion(Motion::TimedSpin {
                        rate: Vec3::new(0.3, 0.2, 0.0),
                        phase: Vec3::new(f * 0.2, f * 0.1, 0.0),
                    }),
            )?;
        }
        for _ in 0..self.params.energy_particles {
            let anchor = nodes[self.rng.gen_range(0..nodes.len())];
            let pos = anchor + self.spread(Vec3::ONE);
            let hue = 0.6 + self.rng.gen::<f32>() * 0.2;
            let size = self.rng.gen_range(0.1..0.6);
            let speed = self.rng.gen_range(0.5..1.5);
            self.objects.insert(
                Visual::points(s)
                    .child_of(network)
                    .at(pos)
                    .shape(Shape::Spark)
                    .size(size)
                    .color(hsl_to_rgb(hue, 0.9, 0.7))
                    .opacity(0.8)
                    .with_motion(Motion::float(pos.y, speed, 0.1)),
            )?;
        }

        // depth layers of drifting particles
        let layers = [(0.0005, 0.02, INDIGO), (0.001, 0.05, AMBER), (0.0015, 0.08, EMERALD)];
        for (count, (speed, size, color)) in self.params.particle_layers.into_iter().zip(layers) {
            let layer = self.objects.insert(Visual::group(s).with_motion(Motion::Spin {
                speed: Vec3::new(0.0, speed, 0.0),
            }))?;
            for _ in 0..count {
                let pos = self.spread(Vec3::splat(100.0));
                let opacity = self.rng.gen_range(0.2..1.0);
                self.objects.insert(
                    Visual::points(s)
                        .child_of(layer)
                        .at(pos)
                        .size(size * 10.0)
                        .color(color)
                        .opacity(opacity),
                )?;
            }
        }

        // floating polyhedra
        let shapes = [
            (Shape::Diamond, 5, 2.0),
            (Shape::Orb, 4, 1.5),
            (Shape::Diamond, 6, 1.8),
            (Shape::Spark, 3, 2.2),
        ];
        for (shape, count, size) in shapes {
            for _ in 0..count {
                let pos = self.spread(Vec3::new(40.0, 30.0, 20.0));
                let spin = self.spread(Vec3::splat(0.01));
                let hue = self.rng.gen::<f32>();
                let float_speed = self.rng.gen_range(0.005..0.015);
                let float_range = self.rng.gen_range(2.0..5.0);
                self.objects.insert(
                    Visual::mesh(s)
                        .at(pos)
                        .shape(shape)
                        .size(size)
                        .color(hsl_to_rgb(hue, 0.7, 0.6))
                        .opacity(0.8)
                        .with_motion(Motion::Spin { speed: spin })
                        .with_motion(Motion::float(pos.y, float_speed, float_range)),
                )?;
            }
        }
        Ok(())
    }

    fn about(&mut self) -> Result<(), SetupError> {
        let s = Section::About;
        let (radius, height) = (3.0, 10.0);
        let helix = self.objects.insert(Visual::group(s).with_motion(Motion::TimedSpin {
            rate: Vec3::new(0.0, 0.1, 0.0),
            phase: Vec3::ZERO,
        }))?;

        let n = self.params.helix_samples.max(2);
        for i in 0..n {
            let t = i as f32 / n as f32;
            let y = t * height - height / 2.0;
            let a = t * PI * 10.0;
            let strand_a = Vec3::new(a.cos() * radius, y, a.sin() * radius);
            let strand_b = Vec3::new(-strand_a.x, y, -strand_a.z);
            for (pos, color) in [(strand_a, INDIGO), (strand_b, AMBER)] {
                self.objects.insert(
                    Visual::mesh(s)
                        .child_of(helix)
                        .at(pos)
                        .size(0.35)
                        .color(color)
                        .opacity(0.8)
                        .with_intensity(0.1),
                )?;
            }
            if i % 5 == 0 {
                self.objects.insert(
                    Visual::mesh(s)
                        .child_of(helix)
                        .at(strand_a.lerp(strand_b, 0.5))
                        .shape(Shape::Spark)
                        .size(0.25)
                        .color(LAVENDER)
                        .opacity(0.6),
                )?;
            }
        }

        for _ in 0..self.params.data_nodes {
            let pos = self.spread(Vec3::new(6.0, height / 2.0, 6.0));
            let hue = self.rng.gen::<f32>();
            let float_speed = self.rng.gen_range(1.0..2.0);
            let spin = self.rng.gen_range(0.02..0.07);
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(helix)
                    .at(pos)
                    .size(0.4)
                    .color(hsl_to_rgb(hue, 0.8, 0.8))
                    .opacity(0.8)
                    .with_motion(Motion::Spin {
                        speed: Vec3::new(0.0, spin, 0.0),
                    })
                    .with_motion(Motion::float(pos.y, float_speed, 0.3)),
            )?;
        }
        Ok(())
    }

    /// Returns the ids of the pickable skill nodes.
    fn skills(&mut self) -> Result<Vec<ObjectId>, SetupError> {
        let s = Section::Skills;
        let network = self.objects.insert(Visual::group(s).with_motion(Motion::TimedSpin {
            rate: Vec3::new(0.0, 0.05, 0.0),
            phase: Vec3::ZERO,
        }))?;

        let mut ids = Vec::with_capacity(SKILLS.len());
        for (i, skill) in SKILLS.iter().enumerate() {
            let pos = Vec3::from_array(skill.position);
            let id = self.objects.insert(
                Visual::mesh(s)
                    .child_of(network)
                    .at(pos)
                    .shape(skill.shape)
                    .color(rgb_hex(skill.color))
                    .opacity(0.9)
                    .with_intensity(0.3)
                    .pickable(0.6)
                    .with_motion(Motion::float(pos.y, 2.0, 0.05 + i as f32 * 0.002))
                    .with_motion(Motion::TimedSpin {
                        rate: Vec3::from_array(skill.spin),
                        phase: Vec3::ZERO,
                    })
                    .with_motion(Motion::PointerAttract {
                        reach: ATTRACT_REACH,
                        radius: ATTRACT_RADIUS,
                        strength: ATTRACT_STRENGTH,
                        duration: ATTRACT_DURATION,
                    }),
            )?;
            ids.push(id);
        }

        for skill in SKILLS.iter() {
            let start = Vec3::from_array(skill.position);
            let color = rgb_hex(skill.color);
            for &link in skill.links.iter().filter(|&&l| l < SKILLS.len()) {
                let end = Vec3::from_array(SKILLS[link].position);
                let bend_a = self.spread(Vec3::splat(0.5));
                let bend_b = self.spread(Vec3::splat(0.5));
                let path = self.paths.add(CatmullRomPath::new(vec![
                    start,
                    start.lerp(end, 0.3) + bend_a,
                    start.lerp(end, 0.7) + bend_b,
                    end,
                ]));
                for k in 0..3 {
                    let speed = self.rng.gen_range(0.01..0.02);
                    self.objects.insert(
                        Visual::points(s)
                            .child_of(network)
                            .shape(Shape::Spark)
                            .size(0.15)
                            .color(color)
                            .with_intensity(0.8)
                            .with_motion(Motion::FlowParticle {
                                path,
                                progress: k as f32 * 0.33,
                                speed,
                                pulse: 0.5,
                            }),
                    )?;
                }
            }
        }
        Ok(ids)
    }

    fn contact(&mut self) -> Result<(), SetupError> {
        let s = Section::Contact;
        let globe_radius = 3.0;
        let group = self.objects.insert(Visual::group(s).with_motion(Motion::TimedSpin {
            rate: Vec3::new(0.0, 0.1, 0.0),
            phase: Vec3::ZERO,
        }))?;

        self.objects.insert(
            Visual::mesh(s)
                .child_of(group)
                .shape(Shape::Ring)
                .size(globe_radius * 2.0)
                .color(INDIGO)
                .opacity(0.1),
        )?;

        for _ in 0..self.params.globe_points {
            let phi = self.rng.gen::<f32>() * TAU;
            let theta = self.rng.gen::<f32>() * PI;
            let pos = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            ) * globe_radius;
            let hue = self.rng.gen::<f32>() * 0.3 + 0.6;
            let speed = self.rng.gen_range(0.01..0.03);
            self.objects.insert(
                Visual::points(s)
                    .child_of(group)
                    .at(pos)
                    .size(0.1)
                    .color(hsl_to_rgb(hue, 0.8, 0.8))
                    .opacity(0.8)
                    .with_motion(Motion::scale_pulse(speed, 0.3)),
            )?;
        }

        for (i, color) in [INDIGO, AMBER, EMERALD].into_iter().enumerate() {
            let f = i as f32;
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(group)
                    .shape(Shape::Ring)
                    .size(8.0)
                    .color(color)
                    .opacity(0.6)
                    .with_motion(Motion::TimedSpin {
                        rate: Vec3::new(0.2 + f * 0.1, 0.0, 0.15 + f * 0.05),
                        phase: Vec3::ZERO,
                    }),
            )?;
        }

        let n = self.params.satellites;
        for i in 0..n {
            let angle = i as f32 / n as f32 * TAU;
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(group)
                    .at(Vec3::new(0.0, angle.sin() * 2.0, 0.0))
                    .shape(Shape::Diamond)
                    .size(0.2)
                    .color(AMBER)
                    .with_motion(Motion::orbit(angle, 0.01, 6.0)),
            )?;
        }
        Ok(())
    }

    fn project(&mut self, index: usize, kind: ProjectKind) -> Result<(), SetupError> {
        let s = Section::Project(index);
        let accent = rgb_hex(PROJECT_ACCENTS[index % PROJECT_ACCENTS.len()]);

        self.objects.insert(
            Visual::light(s, 2.0)
                .at(Vec3::new(-5.0, 3.0, 5.0))
                .color(accent)
                .size(0.8),
        )?;
        match kind {
            ProjectKind::Generic => self.project_tokens(s, accent),
            ProjectKind::Ambit => self.ambit(s),
            ProjectKind::Kairo => self.kairo(s),
            ProjectKind::Typenad => self.typenad(s),
            ProjectKind::Lottery => self.lottery(s),
        }
    }

    /// Slowly turning parent for a card's visualization.
    fn card_group(&mut self, s: Section) -> Result<ObjectId, SetupError> {
        self.objects.insert(Visual::group(s).with_motion(Motion::TimedSpin {
            rate: Vec3::new(0.0, 0.3, 0.0),
            phase: Vec3::ZERO,
        }))
    }

    fn project_tokens(&mut self, s: Section, accent: Vec3) -> Result<(), SetupError> {
        self.objects.insert(
            Visual::mesh(s)
                .size(2.0)
                .color(accent)
                .with_intensity(0.1)
                .with_motion(Motion::TimedSpin {
                    rate: Vec3::new(0.0, 0.5, 0.0),
                    phase: Vec3::ZERO,
                }),
        )?;

        let n = self.params.project_tokens;
        for i in 0..n {
            let angle = i as f32 / n as f32 * TAU;
            let y = (i as f32 * 0.5).sin() * 0.5 + 1.5;
            self.objects.insert(
                Visual::mesh(s)
                    .at(Vec3::new(0.0, y, 0.0))
                    .shape(Shape::Ring)
                    .size(0.3)
                    .color(rgb_hex(0xffc107))
                    .with_motion(Motion::orbit(angle, 0.02, 3.0)),
            )?;
        }

        let flicker = self.rng.gen_range(0.05..0.15);
        self.objects.insert(
            Visual::points(s)
                .at(Vec3::new(0.0, 2.5, 0.0))
                .shape(Shape::Spark)
                .size(0.6)
                .color(rgb_hex(0x60a5fa))
                .opacity(0.8)
                .with_motion(Motion::Flicker {
                    speed: flicker,
                    base_opacity: 0.8,
                }),
        )?;
        Ok(())
    }

    fn ambit(&mut self, s: Section) -> Result<(), SetupError> {
        let group = self.card_group(s)?;
        self.objects.insert(
            Visual::mesh(s)
                .child_of(group)
                .rotated(Vec3::new(PI / 4.0, 0.0, 0.0))
                .shape(Shape::Ring)
                .size(2.0)
                .color(INDIGO),
        )?;
        for _ in 0..5 {
            let pos = self.spread(Vec3::new(1.5, 1.0, 1.0));
            let speed = self.rng.gen_range(1.0..2.0);
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(group)
                    .at(pos)
                    .size(0.4)
                    .color(AMBER)
                    .with_motion(Motion::float(pos.y, speed, 0.15)),
            )?;
        }
        Ok(())
    }

    fn kairo(&mut self, s: Section) -> Result<(), SetupError> {
        let group = self.card_group(s)?;
        self.objects.insert(
            Visual::mesh(s)
                .child_of(group)
                .shape(Shape::Diamond)
                .size(1.0)
                .color(rgb_hex(0xff6b35))
                .with_intensity(0.2),
        )?;
        for i in 0..3 {
            let f = i as f32;
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(group)
                    .rotated(Vec3::new(PI / 2.0, 0.0, 0.0))
                    .shape(Shape::Ring)
                    .size((1.5 + f * 0.3) * 2.0)
                    .color(EMERALD)
                    .opacity(0.8)
                    .with_motion(Motion::TimedSpin {
                        rate: Vec3::new(0.0, 0.0, 0.2 + f * 0.1),
                        phase: Vec3::ZERO,
                    }),
            )?;
        }
        Ok(())
    }

    fn typenad(&mut self, s: Section) -> Result<(), SetupError> {
        let group = self.card_group(s)?;
        for i in 0..8 {
            let pos = Vec3::new(
                ((i % 4) as f32 - 1.5) * 0.5,
                (i / 4) as f32 * 0.5 - 0.25,
                0.0,
            );
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(group)
                    .at(pos)
                    .shape(Shape::Diamond)
                    .size(0.3)
                    .color(rgb_hex(0x9945ff))
                    .with_motion(Motion::float(pos.y, 2.0, 0.05 + i as f32 * 0.01)),
            )?;
        }
        Ok(())
    }

    fn lottery(&mut self, s: Section) -> Result<(), SetupError> {
        let group = self.card_group(s)?;
        for color in LOTTERY_BALLS {
            let pos = self.spread(Vec3::ONE);
            let speed = self.rng.gen_range(1.0..3.0);
            self.objects.insert(
                Visual::mesh(s)
                    .child_of(group)
                    .at(pos)
                    .size(0.4)
                    .color(rgb_hex(color))
                    .with_intensity(0.2)
                    .with_motion(Motion::float(pos.y, speed, 0.2)),
            )?;
        }
        Ok(())
    }
}
