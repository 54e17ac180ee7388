use jewelbox_engine::assets::TextureData;
use jewelbox_engine::params::FrameParams;
use jewelbox_engine::render::{
    CoinUniforms, FullscreenPass, GpuTexture, RenderCtx, RenderTarget, SamplerConfig, UniformBuffer,
    sampler_entry, texture_entry, uniform_entry,
};

const COIN_WGSL: &str = include_str!("../shaders/coin.wgsl");
const PLAIN_FACE_WGSL: &str = include_str!("../shaders/coin_plain.wgsl");
const TEXTURED_FACE_WGSL: &str = include_str!("../shaders/coin_textured.wgsl");

/// Ray-cast coin, optionally with an image on both faces.
pub struct CoinRenderer {
    pass: FullscreenPass,
    uniforms: UniformBuffer<CoinUniforms>,
    bind_group: wgpu::BindGroup,
    _texture: Option<GpuTexture>,
}

impl CoinRenderer {
    /// Plain gold coin. Bindings: 0 uniforms.
    pub fn new(ctx: &RenderCtx<'_>, params: &FrameParams) -> Self {
        let source = [COIN_WGSL, PLAIN_FACE_WGSL].concat();
        let pass = FullscreenPass::new(
            ctx,
            "coin",
            &source,
            &[uniform_entry::<CoinUniforms>(0, wgpu::ShaderStages::FRAGMENT)],
        );
        let uniforms = UniformBuffer::new(
            ctx.device,
            "coin uniforms",
            &CoinUniforms::from_params(params, ctx.viewport),
        );
        let bind_group = pass.create_bind_group(
            ctx.device,
            &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms.binding(),
            }],
        );

        Self {
            pass,
            uniforms,
            bind_group,
            _texture: None,
        }
    }

    /// Coin with `face` on both caps. Bindings: 0 uniforms, 1 sampler, 2 texture.
    pub fn textured(
        ctx: &RenderCtx<'_>,
        params: &FrameParams,
        face: &TextureData,
        sampler: SamplerConfig,
    ) -> Self {
        let source = [COIN_WGSL, TEXTURED_FACE_WGSL].concat();
        let pass = FullscreenPass::new(
            ctx,
            "textured coin",
            &source,
            &[
                uniform_entry::<CoinUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                sampler_entry(1),
                texture_entry(2),
            ],
        );
        let uniforms = UniformBuffer::new(
            ctx.device,
            "textured coin uniforms",
            &CoinUniforms::from_params(params, ctx.viewport),
        );
        let texture = GpuTexture::upload(ctx.device, ctx.queue, "coin face", face, sampler);
        log::debug!(
            "uploaded coin face {}x{} ({sampler:?})",
            face.width,
            face.height
        );

        let bind_group = pass.create_bind_group(
            ctx.device,
            &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
            ],
        );

        Self {
            pass,
            uniforms,
            bind_group,
            _texture: Some(texture),
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, params: &FrameParams) {
        self.uniforms
            .write(ctx.queue, &CoinUniforms::from_params(params, ctx.viewport));
        self.pass.draw(target, &self.bind_group);
    }
}
