use samples_engine::core::{App, AppControl, FrameCtx};

use super::CubeRenderer;

/// Spins the cube using the frame clock's elapsed time as rotation phase.
#[derive(Default)]
pub struct CubeApp {
    renderer: CubeRenderer,
}

impl CubeApp {
    pub fn new() -> Self {
        Self::default()
    }
}

impl App for CubeApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let elapsed = ctx.time.elapsed;
        let renderer = &mut self.renderer;
        ctx.render(|rctx, target| renderer.render(rctx, target, elapsed))
    }
}
