use samples_engine::core::{App, AppControl, FrameCtx};

use super::TriangleRenderer;

/// Triangle demo settings.
#[derive(Debug, Clone, Copy)]
pub struct TriangleConfig {
    /// Requested MSAA sample count; reduced to what the adapter supports.
    pub sample_count: u32,
    pub clear: wgpu::Color,
}

impl TriangleConfig {
    /// Single-sampled variant drawing straight into the surface.
    pub fn basic() -> Self {
        Self {
            sample_count: 1,
            ..Self::default()
        }
    }
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            sample_count: 4,
            clear: wgpu::Color::BLACK,
        }
    }
}

pub struct TriangleApp {
    config: TriangleConfig,
    sample_count: Option<u32>,
    renderer: TriangleRenderer,
}

impl TriangleApp {
    pub fn new(config: TriangleConfig) -> Self {
        Self {
            config,
            sample_count: None,
            renderer: TriangleRenderer::new(),
        }
    }
}

impl App for TriangleApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let requested = self.config.sample_count;
        let sample_count = *self.sample_count.get_or_insert_with(|| {
            let supported = ctx.gpu.supported_sample_count(requested);
            if supported != requested.max(1) {
                log::warn!("{requested}x MSAA unsupported for this surface; using {supported}x");
            }
            supported
        });

        let clear = self.config.clear;
        let renderer = &mut self.renderer;
        ctx.render(|rctx, target| renderer.render(rctx, target, sample_count, clear))
    }
}
