use serde::Deserialize;
use std::time::Duration;

use crate::ui::wizard::DEFAULT_SELECTION;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Initial values handed to the wizard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WizardConfig {
    /// Selection the wizard mounts with (default: "basic").
    #[serde(default = "default_selection")]
    pub default_selection: String,
    /// Methods offered by the SBOL Designer picker.
    #[serde(default = "default_assembly_methods")]
    pub assembly_methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Config {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }
}

fn default_selection() -> String {
    DEFAULT_SELECTION.to_string()
}

fn default_assembly_methods() -> Vec<String> {
    ["basic", "bio_bricks", "golden_gate", "moclo"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            default_selection: default_selection(),
            assembly_methods: default_assembly_methods(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
