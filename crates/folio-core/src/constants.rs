use glam::{Vec3, Vec4};

// Shared tuning constants used by the scene builders and both front-ends.

// Hero camera and scroll drift
pub const HERO_CAMERA_HOME: Vec3 = Vec3::new(0.0, 5.0, 25.0);
pub const HERO_LOOK_AT: Vec3 = Vec3::ZERO;
pub const DRIFT_SWAY_AMPLITUDE: f32 = 10.0; // x swing at full sway
pub const DRIFT_SWAY_CYCLES: f32 = 4.0; // half-turns of pi over the whole page
pub const DRIFT_RISE: f32 = 15.0; // y gained from top to bottom of page
pub const DRIFT_PULLBACK: f32 = 5.0; // z lost from top to bottom of page

// Hero backdrop (clear color, premultiplied)
pub const HERO_BACKDROP: Vec4 = Vec4::new(0.05, 0.05, 0.1, 1.0);

// Section cameras
pub const SECTION_CAMERA_Z: f32 = 12.0;
pub const PROJECT_CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 2000.0;

// Pointer coupling
pub const POINTER_TILT_GAIN: f32 = 0.3; // radians of tilt at the viewport edge
pub const POINTER_TILT_DURATION: f32 = 2.0; // seconds to settle on the target
pub const ATTRACT_REACH: f32 = 10.0; // NDC to world units on the z=0 plane
pub const ATTRACT_RADIUS: f32 = 5.0;
pub const ATTRACT_STRENGTH: f32 = 0.5;
pub const ATTRACT_DURATION: f32 = 0.5;

// Selection pulse (click on a pickable node)
pub const SELECT_SCALE: f32 = 1.5;
pub const SELECT_INTENSITY: f32 = 0.8;
pub const SELECT_DURATION: f32 = 0.3;

// Flow particles
pub const FLOW_PULSE_FREQ: f32 = 5.0;
pub const FLOW_PULSE_PHASE: f32 = 10.0;

// Scroll glow on the main light
pub const GLOW_SATURATION: f32 = 0.8;
pub const GLOW_LIGHTNESS: f32 = 0.6;

// Palette
pub const INDIGO: Vec3 = Vec3::new(0.388, 0.400, 0.945); // 0x6366f1
pub const AMBER: Vec3 = Vec3::new(0.961, 0.620, 0.043); // 0xf59e0b
pub const EMERALD: Vec3 = Vec3::new(0.063, 0.725, 0.506); // 0x10b981
pub const LAVENDER: Vec3 = Vec3::new(0.506, 0.549, 0.973); // 0x818cf8

// Guard against parent cycles when composing world transforms
pub const MAX_PARENT_DEPTH: usize = 32;
