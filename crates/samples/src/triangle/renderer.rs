use samples_engine::render::{ColorTarget, RenderCtx, RenderTarget, TargetKey};

const VERTEX_SHADER: &str = include_str!("../shaders/triangle_vert.wgsl");
const FRAGMENT_SHADER: &str = include_str!("../shaders/triangle_frag.wgsl");

/// Vertices emitted by the vertex shader.
pub const TRIANGLE_VERTEX_COUNT: u32 = 3;

/// Renders the triangle, either straight into the surface or through a
/// multisampled color target resolved into it.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_key: Option<(wgpu::TextureFormat, u32)>,
    pipeline: Option<wgpu::RenderPipeline>,

    msaa: ColorTarget,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one render pass clearing to `clear` and drawing the triangle.
    ///
    /// `sample_count` must be supported for the surface format; `1` disables MSAA.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        sample_count: u32,
        clear: wgpu::Color,
    ) {
        let sample_count = sample_count.max(1);
        self.ensure_pipeline(ctx, sample_count);

        let Some(pipeline) = self.pipeline.as_ref() else { return };

        let color_attachment = if sample_count > 1 {
            let key = TargetKey::new(ctx.width, ctx.height, ctx.surface_format, sample_count);
            let msaa_view = self.msaa.ensure(ctx.device, key);

            // Only the resolved surface is presented; the MSAA samples are dropped.
            wgpu::RenderPassColorAttachment {
                view: msaa_view,
                resolve_target: Some(target.color_view),
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Discard,
                },
                depth_slice: None,
            }
        } else {
            wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            }
        };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("triangle pass"),
            color_attachments: &[Some(color_attachment)],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.draw(0..TRIANGLE_VERTEX_COUNT, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, sample_count: u32) {
        let key = (ctx.surface_format, sample_count);
        if self.pipeline_key == Some(key) && self.pipeline.is_some() {
            return;
        }

        let vertex_module = ctx.create_shader("triangle vertex shader", VERTEX_SHADER);
        let fragment_module = ctx.create_shader("triangle fragment shader", FRAGMENT_SHADER);

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("triangle pipeline"),
            // Derived from the shaders; there are no bindings.
            layout: None,

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
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
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "triangle pipeline built for {:?} x{sample_count}",
            ctx.surface_format
        );

        self.pipeline_key = Some(key);
        self.pipeline = Some(pipeline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaders_declare_expected_entry_points() {
        assert!(VERTEX_SHADER.contains("fn vs_main"));
        assert!(VERTEX_SHADER.contains("@builtin(vertex_index)"));
        assert!(FRAGMENT_SHADER.contains("fn fs_main"));
    }

    #[test]
    fn vertex_shader_emits_one_vertex_per_draw() {
        // The shader indexes fixed arrays; the draw call must not outrun them.
        assert!(VERTEX_SHADER.contains(&format!("array<vec2<f32>, {TRIANGLE_VERTEX_COUNT}>")));
        assert!(VERTEX_SHADER.contains(&format!("array<vec3<f32>, {TRIANGLE_VERTEX_COUNT}>")));
    }

    #[test]
    fn renderer_starts_without_pipeline() {
        let r = TriangleRenderer::new();
        assert!(r.pipeline.is_none());
        assert!(r.pipeline_key.is_none());
        assert!(r.msaa.key().is_none());
    }
}
