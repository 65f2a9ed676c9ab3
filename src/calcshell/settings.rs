//! Session-wide calculator settings.

use crate::calcshell::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest number of decimal digits kept when rounding transcendental results.
pub const MAX_PRECISION: u32 = 15;

/// Default number of decimal digits kept when rounding transcendental results.
pub const DEFAULT_PRECISION: u32 = 10;

/// Unit used to interpret trig arguments and inverse-trig results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleMode::Degrees => "degrees",
            AngleMode::Radians => "radians",
        }
    }
}

impl Default for AngleMode {
    fn default() -> Self {
        AngleMode::Degrees
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AngleMode {
    type Err = CalcError;

    /// Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degrees" => Ok(AngleMode::Degrees),
            "radians" => Ok(AngleMode::Radians),
            other => Err(CalcError::InvalidAngleMode(other.to_string())),
        }
    }
}

/// Angle mode and rounding precision.
///
/// Settings are read at call time by every trig, inverse-trig and logarithm
/// operation. Changing them never rewrites history that was already recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub angle_mode: AngleMode,
    pub precision: u32,
}

impl Settings {
    /// Check a requested precision against `0..=MAX_PRECISION`.
    pub fn check_precision(precision: i64) -> Result<u32, CalcError> {
        if precision < 0 || precision > MAX_PRECISION as i64 {
            return Err(CalcError::InvalidPrecision(precision.to_string()));
        }
        Ok(precision as u32)
    }

    pub fn validate(&self) -> Result<(), CalcError> {
        Self::check_precision(self.precision as i64).map(|_| ())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Degrees,
            precision: DEFAULT_PRECISION,
        }
    }
}
