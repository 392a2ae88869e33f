use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::AppError;

#[derive(Debug, Clone, Parser)]
#[command(name = "assembly-designer", version, about = "Step-by-step DNA assembly designer")]
pub struct Cli {
    /// Config file (default: <config_dir>/assembly-designer/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Initial DNA assembly selection, overrides the config file
    #[arg(long, value_name = "VALUE")]
    pub selection: Option<String>,

    /// Log file location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Event loop tick in milliseconds, overrides the config file
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Fold CLI overrides into a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(selection) = &self.selection {
            config.wizard.default_selection = selection.clone();
        }
        if let Some(tick) = self.tick_ms {
            config.ui.tick_rate_ms = tick;
        }
        config
    }

    /// Load the config file, then apply and re-validate the overrides.
    pub fn load_config(&self) -> Result<Config, AppError> {
        let config = self.apply(Config::load_from(&self.config_path())?);
        config.validate()?;
        Ok(config)
    }
}
