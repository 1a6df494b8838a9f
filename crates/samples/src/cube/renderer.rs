use wgpu::util::DeviceExt;

use samples_engine::render::{DepthTarget, RenderCtx, RenderTarget, DEPTH_FORMAT};

use super::camera::{self, CubeUniforms};
use super::geometry::{CubeVertex, CUBE_VERTEX_COUNT, CUBE_VERTICES};

const VERTEX_SHADER: &str = include_str!("../shaders/cube_vert.wgsl");
const FRAGMENT_SHADER: &str = include_str!("../shaders/cube_frag.wgsl");

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Cube renderer.
///
/// The pipeline and its bindings are built on first use and rebuilt if the
/// surface format changes; the depth target follows the surface size.
#[derive(Default)]
pub struct CubeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group: Option<wgpu::BindGroup>,
    uniform_buffer: Option<wgpu::Buffer>,
    vertex_buffer: Option<wgpu::Buffer>,

    depth: DepthTarget,
}

impl CubeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads the transform for `elapsed` seconds and draws the cube.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, elapsed: f32) {
        self.ensure_pipeline(ctx);
        self.ensure_buffers(ctx);

        let Some(uniform_buffer) = self.uniform_buffer.as_ref() else { return };
        let uniforms = CubeUniforms::new(camera::model_view_projection(ctx.aspect(), elapsed));
        ctx.queue.write_buffer(uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        let depth_view = self.depth.ensure(ctx.device, ctx.width, ctx.height, 1);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("cube pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(0..CUBE_VERTEX_COUNT, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let vertex_module = ctx.create_shader("cube vertex shader", VERTEX_SHADER);
        let fragment_module = ctx.create_shader("cube fragment shader", FRAGMENT_SHADER);

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("cube pipeline"),
            // Derived from the shaders; group 0 is fetched back for the uniform bind group.
            layout: None,

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CubeVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),

            multiview_mask: None,
            cache: None,
        });

        log::debug!("cube pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);

        // The auto layout belongs to this pipeline; bindings must follow it.
        self.bind_group = None;
    }

    fn ensure_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vertex_buffer.is_none() {
            self.vertex_buffer = Some(ctx.device.create_buffer_init(
                &wgpu::util::BufferInitDescriptor {
                    label: Some("cube vertex buffer"),
                    contents: bytemuck::cast_slice(&CUBE_VERTICES),
                    usage: wgpu::BufferUsages::VERTEX,
                },
            ));
        }

        if self.uniform_buffer.is_none() {
            self.uniform_buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("cube uniform buffer"),
                size: CubeUniforms::SIZE,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
        }

        if self.bind_group.is_some() {
            return;
        }
        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(uniform_buffer) = self.uniform_buffer.as_ref() else { return };

        self.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("cube uniform bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        }));
    }
}
