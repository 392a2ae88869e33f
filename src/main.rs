use anyhow::Context;
use clap::Parser;

use assembly_designer::cli::Cli;
use assembly_designer::logging::{default_log_path, init_tracing};
use assembly_designer::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path).context("initializing logging")?;

    let config_path = cli.config_path();
    let config = cli
        .load_config()
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path.display(),
        selection = %config.wizard.default_selection,
        "Starting assembly designer"
    );

    runtime::run(&config).context("running wizard")?;

    tracing::info!("Assembly designer exited");
    Ok(())
}
