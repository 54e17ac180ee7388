use anyhow::Result;

use jewelbox_engine::assets::{load_mesh_or_empty, load_texture_or_checkerboard};
use jewelbox_engine::core::{App, AppControl, FrameCtx};
use jewelbox_engine::input::{InputFrame, InputState};
use jewelbox_engine::params::FrameParams;

use crate::controls;
use crate::renderers::{CoinRenderer, MeshRenderer, Renderer};
use crate::variant::{Geometry, VariantConfig};

const CLEAR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.03,
    a: 1.0,
};

/// Drives one demo variant: loads its assets at startup, maps input onto the
/// parameters, and renders every frame.
pub struct DemoApp {
    config: VariantConfig,
    params: FrameParams,
    renderer: Option<Renderer>,
}

impl DemoApp {
    pub fn new(config: VariantConfig) -> Self {
        let params = config.params.clone();
        Self {
            config,
            params,
            renderer: None,
        }
    }
}

impl App for DemoApp {
    fn on_start(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
        ctx.window.set_title(&self.config.title());
        log::info!("starting {} demo", self.config.variant.name());

        let rctx = ctx.render_ctx();
        let renderer = match &self.config.geometry {
            Geometry::Coin { texture: None, .. } => {
                Renderer::Coin(CoinRenderer::new(&rctx, &self.params))
            }
            Geometry::Coin {
                texture: Some(path),
                sampler,
            } => {
                let max_dimension = rctx.device.limits().max_texture_dimension_2d;
                let face = load_texture_or_checkerboard(path, max_dimension);
                Renderer::Coin(CoinRenderer::textured(&rctx, &self.params, &face, *sampler))
            }
            Geometry::Mesh {
                model,
                anti_aliased,
            } => {
                let mut mesh = load_mesh_or_empty(model);
                mesh.normalize();
                Renderer::Mesh(MeshRenderer::new(
                    &rctx,
                    &self.params,
                    &mesh,
                    *anti_aliased,
                    self.config.seed,
                ))
            }
        };

        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_input(&mut self, _input: &InputState, frame: &InputFrame) -> AppControl {
        controls::apply_input(&mut self.params, &self.config.params, frame)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_mut() else {
            return AppControl::Continue;
        };

        self.params.advance();
        let params = &self.params;
        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, params))
    }
}
