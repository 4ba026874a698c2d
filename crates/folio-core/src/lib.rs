//! Platform-free core of the portfolio scenes.
//!
//! Everything here is plain Rust so it can be exercised on the host; the web
//! and native front-ends supply canvases, a frame scheduler and a
//! [`RenderSurface`] implementation.

pub mod animate;
pub mod camera;
pub mod clock;
pub mod color;
pub mod constants;
pub mod curve;
pub mod dispatch;
pub mod frame;
pub mod instances;
pub mod motion;
pub mod object;
pub mod pick;
pub mod scene;
pub mod showcase;
pub mod signals;
pub mod tween;

pub use animate::*;
pub use camera::*;
pub use clock::*;
pub use color::*;
pub use constants::*;
pub use curve::*;
pub use dispatch::*;
pub use frame::*;
pub use instances::*;
pub use motion::*;
pub use object::*;
pub use pick::*;
pub use scene::*;
pub use showcase::*;
pub use signals::*;
pub use tween::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
