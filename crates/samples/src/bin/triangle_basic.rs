use anyhow::Result;

use samples::triangle::{TriangleApp, TriangleConfig};
use samples_engine::device::GpuInit;
use samples_engine::logging::{init_logging, LoggingConfig};
use samples_engine::window::{RedrawMode, Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "triangle".to_string(),
        redraw: RedrawMode::OnDemand,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::canvas(), TriangleApp::new(TriangleConfig::basic()))
}
