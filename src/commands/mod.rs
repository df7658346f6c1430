//! CLI command implementations.
//!
//! - **report**: render the dashboard for a payload
//! - **validate**: enforce a minimum quality score
//! - **init**: write a default `.smelldash.toml`

pub mod init;
pub mod report;
pub mod validate;

pub use init::{init_config, init_config_in};
pub use report::{handle_report, ReportConfig};
pub use validate::{validate_payload, ValidateOptions, ValidationOutcome};

use crate::config::{get_config, load_config_from, SmelldashConfig};
use crate::formatting::ColorMode;
use anyhow::{Context, Result};
use std::path::Path;

/// An explicit `--config` must load; otherwise use the discovered config.
pub fn resolve_config(explicit: Option<&Path>) -> Result<SmelldashConfig> {
    match explicit {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(get_config().clone()),
    }
}

/// Color mode from `[display] color`, before environment overrides.
pub fn configured_color_mode(config: &SmelldashConfig) -> ColorMode {
    config
        .display()
        .color
        .as_deref()
        .and_then(ColorMode::parse)
        .unwrap_or(ColorMode::Auto)
}
