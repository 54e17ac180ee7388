//! jewelbox: interactive GPU coin and diamond demos.

mod app;
mod cli;
mod controls;
mod renderers;
mod variant;

use anyhow::Result;
use clap::Parser;

use jewelbox_engine::device::GpuInit;
use jewelbox_engine::logging::{LoggingConfig, init_logging};
use jewelbox_engine::window::{Runtime, RuntimeConfig};

use crate::app::DemoApp;
use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..Default::default()
    });

    let config = cli.to_config()?;
    log::info!(
        "variant {}: zoom {} in {:?}, speed {}, intensity {}",
        config.variant.name(),
        config.params.zoom.value(),
        config.params.zoom.bounds(),
        config.params.speed.value(),
        config.params.intensity.value(),
    );

    let runtime = RuntimeConfig::new(config.title(), cli.width, cli.height);

    Runtime::run(runtime, GpuInit::default(), DemoApp::new(config))
}
