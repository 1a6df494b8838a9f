use anyhow::Result;

use samples::cube::CubeApp;
use samples_engine::device::GpuInit;
use samples_engine::logging::{init_logging, LoggingConfig};
use samples_engine::window::{RedrawMode, Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "rotating cube".to_string(),
        redraw: RedrawMode::Continuous,
        ..RuntimeConfig::default()
    };

    Runtime::run(config, GpuInit::canvas(), CubeApp::new())
}
