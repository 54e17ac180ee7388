//! Per-variant renderers.
//!
//! Each renderer owns its pipeline, preallocated buffers and a bind group built
//! once at startup. Per frame it only writes buffers and issues one draw.

mod coin;
mod mesh;

pub use coin::CoinRenderer;
pub use mesh::MeshRenderer;

use jewelbox_engine::params::FrameParams;
use jewelbox_engine::render::{RenderCtx, RenderTarget};

pub enum Renderer {
    Coin(CoinRenderer),
    Mesh(MeshRenderer),
}

impl Renderer {
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, params: &FrameParams) {
        match self {
            Renderer::Coin(r) => r.render(ctx, target, params),
            Renderer::Mesh(r) => r.render(ctx, target, params),
        }
    }
}
