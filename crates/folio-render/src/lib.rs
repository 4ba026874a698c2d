//! wgpu backend for the portfolio scenes.
//!
//! One [`GpuContext`] (adapter, device, queue) is shared by every
//! [`SurfaceRenderer`]; each renderer owns a surface, its pipeline and the
//! buffers for one section.

mod error;
mod gpu;
mod surface;

pub use error::RenderError;
pub use gpu::GpuContext;
pub use surface::{clear_color, frame_uniforms, FrameUniforms, SurfaceRenderer, MAX_INSTANCES};
