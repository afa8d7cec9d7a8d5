//! Configuration loading for faction standing.
//!
//! All standing settings are loaded from a TOML configuration file and
//! validated once, before the feature is activated.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::effects::EffectToggles;

/// Complete faction standing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FactionStandingConfig {
    /// Global switches and contract tuning
    #[serde(default)]
    pub standing: GeneralConfig,
    /// Daily regard decay
    #[serde(default)]
    pub decay: DecayConfig,
    /// Monthly accolade and censure ladders
    #[serde(default)]
    pub escalation: EscalationConfig,
    /// Per-category effect switches
    #[serde(default)]
    pub effects: EffectToggles,
}

impl FactionStandingConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks every value that could corrupt standings if accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.decay.rate;
        if !rate.is_finite() {
            return Err(ConfigError::NonFiniteDecayRate);
        }
        if rate < 0.0 {
            return Err(ConfigError::NegativeDecayRate(rate));
        }

        let multiplier = self.standing.regard_multiplier;
        if !multiplier.is_finite() {
            return Err(ConfigError::NonFiniteRegardMultiplier);
        }
        if multiplier < 0.0 {
            return Err(ConfigError::NegativeRegardMultiplier(multiplier));
        }

        let ratio = self.standing.target_delta_ratio;
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(ConfigError::InvalidTargetRatio(ratio));
        }
        Ok(())
    }

    /// Validates and freezes the configuration for use by the standing engines.
    pub fn activate(self) -> Result<ValidatedConfig, ConfigError> {
        self.validate()?;
        Ok(ValidatedConfig(self))
    }
}

/// A configuration that passed validation.
///
/// The day cycle and contract adapter only accept this type, so an invalid
/// configuration can never reach them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedConfig(FactionStandingConfig);

impl ValidatedConfig {
    pub fn get(&self) -> &FactionStandingConfig {
        &self.0
    }

    pub fn is_enabled(&self) -> bool {
        self.0.standing.enabled
    }
}

/// Global switches and contract tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Master switch for the whole feature
    pub enabled: bool,
    /// Scales every contract-driven regard change
    pub regard_multiplier: f64,
    /// Fraction of the employer's delta applied, negated, to a target faction
    pub target_delta_ratio: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            regard_multiplier: 1.0,
            target_delta_ratio: 0.5,
        }
    }
}

/// Daily decay settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    pub enabled: bool,
    /// Regard moved toward zero per day
    pub rate: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: crate::decay::DEFAULT_DECAY_RATE,
        }
    }
}

/// Monthly escalation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationConfig {
    pub accolades_enabled: bool,
    pub censures_enabled: bool,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            accolades_enabled: true,
            censures_enabled: true,
        }
    }
}

/// Errors that can occur during configuration loading or validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("decay rate must not be negative, got {0}")]
    NegativeDecayRate(f64),
    #[error("decay rate must be finite")]
    NonFiniteDecayRate,
    #[error("regard multiplier must not be negative, got {0}")]
    NegativeRegardMultiplier(f64),
    #[error("regard multiplier must be finite")]
    NonFiniteRegardMultiplier,
    #[error("target delta ratio must be between 0 and 1 exclusive, got {0}")]
    InvalidTargetRatio(f64),
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Faction Standing Configuration

[standing]
enabled = true
regard_multiplier = 1.0
target_delta_ratio = 0.5

[decay]
enabled = true
rate = 0.375

[escalation]
accolades_enabled = true
censures_enabled = true

[effects]
negotiation = true
resupply = true
command_circuit = true
outlawed = true
batchall = true
recruitment = true
barracks = true
unit_market = true
contract_pay = true
support_points = true
"#
    .to_string()
}
