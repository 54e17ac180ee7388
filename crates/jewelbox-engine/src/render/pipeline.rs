use super::{RenderCtx, RenderTarget};

/// Vertices per full-screen draw (triangle strip).
pub const FULLSCREEN_VERTEX_COUNT: u32 = 4;

/// Vertex stage shared by every demo: expands `vertex_index` 0..4 into a
/// screen-covering strip and hands `uv` to the fragment stage.
pub const FULLSCREEN_WGSL: &str = include_str!("shaders/fullscreen.wgsl");

/// Builds a pipeline whose vertex stage is [`FULLSCREEN_WGSL`] and whose fragment
/// stage is `fs_main` from `fragment_source`.
pub fn fullscreen_pipeline(
    device: &wgpu::Device,
    label: &str,
    fragment_source: &str,
    bind_group_layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let source = [FULLSCREEN_WGSL, fragment_source].concat();
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleStrip,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// A full-screen pipeline plus the layout of its single bind group.
pub struct FullscreenPass {
    label: String,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
}

impl FullscreenPass {
    pub fn new(
        ctx: &RenderCtx<'_>,
        label: &str,
        fragment_source: &str,
        entries: &[wgpu::BindGroupLayoutEntry],
    ) -> Self {
        let bind_group_layout = ctx
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(label),
                entries,
            });
        let pipeline = fullscreen_pipeline(
            ctx.device,
            label,
            fragment_source,
            &bind_group_layout,
            ctx.surface_format,
        );
        Self {
            label: label.to_string(),
            pipeline,
            bind_group_layout,
        }
    }

    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        entries: &[wgpu::BindGroupEntry<'_>],
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&self.label),
            layout: &self.bind_group_layout,
            entries,
        })
    }

    /// Records one pass that draws the full-screen strip over the existing
    /// contents of the target.
    pub fn draw(&self, target: &mut RenderTarget<'_>, bind_group: &wgpu::BindGroup) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some(&self.label),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..FULLSCREEN_VERTEX_COUNT, 0..1);
    }
}
