//! GPU rendering helpers shared by the demos.
//!
//! Every demo draws one full-screen quad (a 4-vertex triangle strip with no
//! vertex buffers) and does all of its work in the fragment shader. Resources
//! are created once at startup and updated in place each frame.
//!
//! Convention:
//! - the vertex stage emits `uv` in `[0, 1]²`, origin bottom-left
//! - bind group 0 carries every resource a demo needs

mod buffer;
mod ctx;
mod layout;
mod pipeline;
mod texture;
mod uniforms;

pub use buffer::{JitterBuffer, StorageBuffer, UniformBuffer};
pub use ctx::{RenderCtx, RenderTarget};
pub use layout::{sampler_entry, storage_entry, texture_entry, uniform_entry};
pub use pipeline::{FULLSCREEN_VERTEX_COUNT, FULLSCREEN_WGSL, FullscreenPass, fullscreen_pipeline};
pub use texture::{FilterMode, GpuTexture, SamplerConfig, WrapMode};
pub use uniforms::{CoinUniforms, MeshUniforms};
