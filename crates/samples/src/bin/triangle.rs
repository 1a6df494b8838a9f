use anyhow::Result;
use winit::dpi::LogicalSize;

use samples::triangle::{TriangleApp, TriangleConfig};
use samples_engine::device::GpuInit;
use samples_engine::logging::{init_logging, LoggingConfig};
use samples_engine::window::{RedrawMode, Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "triangle (4x MSAA)".to_string(),
        initial_size: LogicalSize::new(640.0, 480.0),
        redraw: RedrawMode::OnDemand,
    };

    Runtime::run(config, GpuInit::canvas(), TriangleApp::new(TriangleConfig::default()))
}
