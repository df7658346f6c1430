use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.smelldash.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SmelldashConfig {
    /// Display configuration for report output
    #[serde(default)]
    pub display: Option<DisplayConfig>,

    /// Quality gate used by `smelldash validate`
    #[serde(default)]
    pub validate: Option<ValidateConfig>,
}

impl SmelldashConfig {
    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    pub fn validate_section(&self) -> ValidateConfig {
        self.validate.clone().unwrap_or_default()
    }

    /// Reject values outside their documented ranges.
    pub fn validate(&self) -> Result<()> {
        if let Some(validate) = &self.validate {
            if validate.min_quality > 100 {
                return Err(Error::Config(format!(
                    "validate.min_quality must be between 0 and 100, got {}",
                    validate.min_quality
                )));
            }
        }
        if let Some(display) = &self.display {
            if display.max_recommendations == 0 {
                return Err(Error::Config(
                    "display.max_recommendations must be at least 1".to_string(),
                ));
            }
            if let Some(color) = &display.color {
                if crate::formatting::ColorMode::parse(color).is_none() {
                    return Err(Error::Config(format!(
                        "display.color must be auto, always or never, got '{color}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Display configuration for report output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Default report format when `--format` is not given
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Color mode: auto, always or never
    #[serde(default)]
    pub color: Option<String>,

    /// Maximum records listed in a report
    #[serde(default)]
    pub top: Option<usize>,

    /// Maximum recommendations shown (default: 5)
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,

    /// List records by severity instead of received order
    #[serde(default)]
    pub ranked: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: None,
            top: None,
            max_recommendations: default_max_recommendations(),
            ranked: false,
        }
    }
}

pub fn default_max_recommendations() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateConfig {
    /// Lowest acceptable quality score (0-100)
    #[serde(default = "default_min_quality")]
    pub min_quality: u32,
}

impl Default for ValidateConfig {
    fn default() -> Self {
        Self {
            min_quality: default_min_quality(),
        }
    }
}

pub fn default_min_quality() -> u32 {
    70
}
