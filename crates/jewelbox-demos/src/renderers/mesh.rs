use rand::SeedableRng;
use rand::rngs::StdRng;

use jewelbox_engine::assets::MeshData;
use jewelbox_engine::params::FrameParams;
use jewelbox_engine::render::{
    FullscreenPass, JitterBuffer, MeshUniforms, RenderCtx, RenderTarget, StorageBuffer, UniformBuffer,
    storage_entry, uniform_entry,
};
use jewelbox_engine::sampling::{JitterPattern, SubdivisionLevel};

const MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");

/// Ray-traced triangle mesh with optional jittered supersampling.
///
/// Bindings: 0 uniforms, 1 positions, 2 normals, 3 indices, 4 jitter offsets.
pub struct MeshRenderer {
    pass: FullscreenPass,
    uniforms: UniformBuffer<MeshUniforms>,
    _positions: StorageBuffer,
    _normals: StorageBuffer,
    _indices: StorageBuffer,
    jitter: JitterBuffer,
    bind_group: wgpu::BindGroup,

    triangle_count: u32,
    anti_aliased: bool,
    pattern: JitterPattern,
    rng: StdRng,
    offsets: Vec<f32>,
}

impl MeshRenderer {
    pub fn new(
        ctx: &RenderCtx<'_>,
        params: &FrameParams,
        mesh: &MeshData,
        anti_aliased: bool,
        seed: Option<u64>,
    ) -> Self {
        let pass = FullscreenPass::new(
            ctx,
            "mesh",
            MESH_WGSL,
            &[
                uniform_entry::<MeshUniforms>(0, wgpu::ShaderStages::FRAGMENT),
                storage_entry(1),
                storage_entry(2),
                storage_entry(3),
                storage_entry(4),
            ],
        );

        let triangle_count = u32::try_from(mesh.triangle_count()).unwrap_or(u32::MAX);
        if mesh.is_empty() {
            log::warn!("mesh is empty; only the background will be drawn");
        }

        let uniforms = UniformBuffer::new(
            ctx.device,
            "mesh uniforms",
            &MeshUniforms::from_params(params, ctx.viewport, triangle_count, anti_aliased),
        );
        let positions = StorageBuffer::from_slice(ctx.device, "mesh positions", &mesh.positions);
        let normals = StorageBuffer::from_slice(ctx.device, "mesh normals", &mesh.normals);
        let indices = StorageBuffer::from_slice(ctx.device, "mesh indices", &mesh.indices);
        let jitter = JitterBuffer::new(ctx.device, "jitter offsets");

        let bind_group = pass.create_bind_group(
            ctx.device,
            &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: positions.binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: normals.binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: indices.binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: jitter.binding(),
                },
            ],
        );

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            pass,
            uniforms,
            _positions: positions,
            _normals: normals,
            _indices: indices,
            jitter,
            bind_group,
            triangle_count,
            anti_aliased,
            pattern: JitterPattern::default(),
            rng,
            offsets: Vec::with_capacity(JitterBuffer::CAPACITY),
        }
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, params: &FrameParams) {
        let level = if self.anti_aliased {
            params.subdivision_level()
        } else {
            SubdivisionLevel::OFF
        };
        // Fresh offsets every frame so the noise does not stand still.
        self.pattern.generate_into(level, &mut self.rng, &mut self.offsets);
        self.jitter.write(ctx.queue, &self.offsets);

        let uniforms =
            MeshUniforms::from_params(params, ctx.viewport, self.triangle_count, self.anti_aliased);
        self.uniforms.write(ctx.queue, &uniforms);

        self.pass.draw(target, &self.bind_group);
    }
}
