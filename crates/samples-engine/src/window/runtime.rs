use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{AdapterUnavailable, Gpu, GpuInit};
use crate::time::FrameClock;

/// When the runtime asks the window for a new frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RedrawMode {
    /// Draw on startup, after resizes, and when the app asks for it.
    OnDemand,
    /// Draw again as soon as the previous frame is done.
    Continuous,
}

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub redraw: RedrawMode,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "webgpu samples".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            redraw: RedrawMode::OnDemand,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn request_redraw(&mut self) {
        self.commands.push(Command::RequestRedraw);
    }

    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Command {
    RequestRedraw,
    Exit,
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` until it exits or the window closes.
    ///
    /// A host without a usable GPU adapter is not an error: the loop ends and
    /// `Ok(())` is returned.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(entry) = &self.window {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()?;

        self.window = Some(entry);
        Ok(())
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, ctx: RuntimeCtx) {
        for cmd in ctx.commands {
            match cmd {
                Command::RequestRedraw => self.request_redraw(),
                Command::Exit => self.request_exit(event_loop),
            }
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let mut runtime_ctx = RuntimeCtx::default();
        let mut app_control = AppControl::Continue;

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return;
        };

        entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: fields.window,
                },
                gpu: fields.gpu,
                time,
                runtime: &mut runtime_ctx,
            };

            app_control = app.on_frame(&mut ctx);
        });

        if app_control == AppControl::Exit {
            runtime_ctx.exit();
        }

        self.apply_commands(event_loop, runtime_ctx);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.create_window_entry(event_loop) {
            if is_quiet_shutdown(&err) {
                log::warn!("{err}; nothing to render");
            } else {
                log::error!("failed to initialize window: {err:#}");
                self.failure = Some(err);
            }
            self.request_exit(event_loop);
            return;
        }

        self.request_redraw();
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        if self.config.redraw == RedrawMode::Continuous {
            self.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.request_exit(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.request_exit(event_loop),

            WindowEvent::KeyboardInput { event: key, .. }
                if key.state == ElementState::Pressed
                    && key.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.window.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                }
                self.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
                self.request_redraw();
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop, window_id),

            _ => {}
        }
    }
}

/// A host without a usable adapter ends the loop without reporting failure.
fn is_quiet_shutdown(err: &anyhow::Error) -> bool {
    err.downcast_ref::<AdapterUnavailable>().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_adapter_shuts_down_quietly() {
        assert!(is_quiet_shutdown(&anyhow::Error::from(AdapterUnavailable)));
    }

    #[test]
    fn missing_adapter_under_context_shuts_down_quietly() {
        let err = Err::<(), _>(AdapterUnavailable)
            .context("GPU initialization failed")
            .unwrap_err();
        assert!(is_quiet_shutdown(&err));
    }

    #[test]
    fn other_init_failures_are_reported() {
        let err = anyhow::anyhow!("window has zero size");
        assert!(!is_quiet_shutdown(&err));

        let err = Err::<(), _>(std::fmt::Error)
            .context("failed to create window")
            .unwrap_err();
        assert!(!is_quiet_shutdown(&err));
    }

    #[test]
    fn runtime_ctx_buffers_in_order() {
        let mut ctx = RuntimeCtx::default();
        ctx.request_redraw();
        ctx.exit();
        assert_eq!(ctx.commands, vec![Command::RequestRedraw, Command::Exit]);
    }

    #[test]
    fn default_config_draws_on_demand() {
        let config = RuntimeConfig::default();
        assert_eq!(config.redraw, RedrawMode::OnDemand);
        assert!(config.initial_size.width > 0.0 && config.initial_size.height > 0.0);
    }
}
