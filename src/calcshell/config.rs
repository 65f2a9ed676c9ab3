//! Configuration for calcshell.
//!
//! Provides the [`CalcConfig`] struct for the initial settings of a session.
//! Construct it by hand, or load it from a JSON file where every field is
//! optional and falls back to its default.
//!
//! # Example
//!
//! ```rust
//! use calcshell::{AngleMode, CalcConfig};
//!
//! let config = CalcConfig::default();
//! assert_eq!(config.angle_mode, AngleMode::Degrees);
//! assert_eq!(config.precision, 10);
//!
//! let config = CalcConfig::from_json_str(r#"{"angle_mode": "radians"}"#).unwrap();
//! assert_eq!(config.angle_mode, AngleMode::Radians);
//! assert_eq!(config.precision, 10);
//! ```

use crate::calcshell::error::CalcError;
use crate::calcshell::parse::NumberParsing;
use crate::calcshell::settings::{AngleMode, Settings, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Initial angle mode.
    pub angle_mode: AngleMode,
    /// Initial rounding precision for transcendental results, `0..=15`.
    pub precision: u32,
    /// Reject non-numeric arguments instead of letting them become `NaN`.
    pub strict_numbers: bool,
    /// Prompt written before each line is read.
    pub prompt: String,
    /// Write each input line back to the output before its reply.
    pub echo: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            precision: DEFAULT_PRECISION,
            strict_numbers: false,
            prompt: "> ".to_string(),
            echo: false,
        }
    }
}

impl CalcConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            angle_mode: self.angle_mode,
            precision: self.precision,
        }
    }

    pub fn number_parsing(&self) -> NumberParsing {
        if self.strict_numbers {
            NumberParsing::Strict
        } else {
            NumberParsing::Lenient
        }
    }

    /// Apply the same checks the runtime setters enforce.
    pub fn validate(&self) -> Result<(), CalcError> {
        self.settings().validate()
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config: CalcConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            format!("Failed to read config file {}: {}", path.display(), e)
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::from_json_str(&content)
    }
}
