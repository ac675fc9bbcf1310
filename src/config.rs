//! Calculator settings loaded from TOML.
//!
//! Every key is optional; anything left out takes the value a fresh session
//! starts with.
//!
//! ```toml
//! log_path = "logs/roll_centres.json"
//!
//! [sweep]
//! travel_range = 3.0
//! samples = 13
//!
//! [defaults.front]
//! half_track = 31.5
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ConfigError;
use crate::record::SuspensionSetup;
use crate::springs::SpringRateModel;

/// Travel sweep and camber gain sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepSettings {
    /// Sweep covers `[-travel_range, +travel_range]`.
    pub travel_range: f64,
    /// Number of samples, including both ends.
    pub samples: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            travel_range: 3.0,
            samples: 13,
        }
    }
}

/// Body roll sweep sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollSettings {
    /// Sweep covers `[-max_roll_deg, +max_roll_deg]`.
    pub max_roll_deg: f64,
    /// Number of samples, including both ends.
    pub samples: usize,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            max_roll_deg: 4.0,
            samples: 9,
        }
    }
}

/// Everything the calculator can be configured with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Geometry a new session starts from.
    pub defaults: SuspensionSetup,
    /// Travel sweep sampling.
    pub sweep: SweepSettings,
    /// Roll sweep sampling.
    pub roll: RollSettings,
    /// Corner spring model.
    pub springs: SpringRateModel,
    /// Where saved calculations go, if anywhere.
    pub log_path: Option<PathBuf>,
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] when a setting is out of range.
    ///
    /// # Examples
    /// ```
    /// use rollcentre::CalculatorConfig;
    ///
    /// let config = CalculatorConfig::from_toml_str("[sweep]\nsamples = 25\n").expect("valid");
    /// assert_eq!(config.sweep.samples, 25);
    /// assert_eq!(config.sweep.travel_range, 3.0);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`CalculatorConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), "loaded calculator configuration");
        Ok(config)
    }

    /// Check sampling settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sweep.travel_range > 0.0 && self.sweep.travel_range.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "sweep.travel_range must be positive (received {})",
                self.sweep.travel_range
            )));
        }
        if self.sweep.samples < 2 {
            return Err(ConfigError::Invalid(format!(
                "sweep.samples must be at least 2 (received {})",
                self.sweep.samples
            )));
        }
        if !(self.roll.max_roll_deg > 0.0 && self.roll.max_roll_deg < 90.0) {
            return Err(ConfigError::Invalid(format!(
                "roll.max_roll_deg must be between 0 and 90 (received {})",
                self.roll.max_roll_deg
            )));
        }
        if self.roll.samples < 2 {
            return Err(ConfigError::Invalid(format!(
                "roll.samples must be at least 2 (received {})",
                self.roll.samples
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::springs::SpringTarget;

    #[test]
    fn empty_document_gives_defaults() {
        let config = CalculatorConfig::from_toml_str("").expect("valid");
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn nested_geometry_overrides_single_fields() {
        let text = "
            log_path = \"logs/rc.json\"

            [defaults.front]
            half_track = 31.5

            [springs]
            corner_weight = 520.0
            target = { spring_rate = 175.0 }
        ";
        let config = CalculatorConfig::from_toml_str(text).expect("valid");
        assert_eq!(config.defaults.front.half_track, 31.5);
        assert_eq!(config.defaults.front.lca_length, 12.0);
        assert_eq!(config.springs.corner_weight, 520.0);
        assert_eq!(config.springs.target, SpringTarget::SpringRate(175.0));
        assert_eq!(config.log_path, Some(PathBuf::from("logs/rc.json")));
    }

    #[test]
    fn out_of_range_samples_are_rejected() {
        let error = CalculatorConfig::from_toml_str("[sweep]\nsamples = 1\n")
            .expect_err("too few samples");
        assert!(matches!(error, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let error = CalculatorConfig::from_toml_str("[sweep\n").expect_err("bad toml");
        assert!(matches!(error, ConfigError::Parse(_)));
    }
}
