//! Engine configuration with documented constants
//!
//! Every fixed number the term rules depend on lives here. The engine never
//! reads a global; the config travels inside `EngineContext`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{ConfigurationError, Result};

/// Rule constants for the term simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === TIME ===
    /// Years that pass during one term of service
    pub term_years: i32,

    /// Age at which a character leaves school and may first enlist
    pub starting_age: i32,

    // === ROLLS ===
    /// Advancement DM granted by the top event result (natural 12)
    ///
    /// Large enough that the advancement roll cannot fail.
    pub overwhelming_advancement_dm: i32,

    // === ATTRIBUTES ===
    /// Lowest value an attribute can be reduced to
    pub attribute_min: i32,

    /// Highest value an attribute can be raised to
    pub attribute_max: i32,

    // === INJURY ===
    /// Die rolled for the age at which an in-term injury or mishap happens
    pub injury_age_die: u32,

    /// Extra years a severe injury adds to the recorded injury age
    pub severe_injury_recovery_years: i32,

    // === MUSTERING OUT ===
    /// Completed terms after which a departing character counts as retired
    pub retirement_terms: usize,

    /// Maximum number of muster-out rolls that may be taken as cash
    pub max_cash_rolls: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            term_years: 4,
            starting_age: 18,

            overwhelming_advancement_dm: 100,

            attribute_min: 0,
            attribute_max: 15,

            injury_age_die: 4,
            severe_injury_recovery_years: 1,

            retirement_terms: 5,
            max_cash_rolls: 3,
        }
    }
}

impl EngineConfig {
    /// Parse a config from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), ConfigurationError> {
        if self.term_years <= 0 {
            return Err(ConfigurationError::InvalidConfig(format!(
                "term_years ({}) must be positive",
                self.term_years
            )));
        }

        if self.overwhelming_advancement_dm < 12 {
            return Err(ConfigurationError::InvalidConfig(format!(
                "overwhelming_advancement_dm ({}) must guarantee a 2d6 success",
                self.overwhelming_advancement_dm
            )));
        }

        if self.attribute_min >= self.attribute_max {
            return Err(ConfigurationError::InvalidConfig(format!(
                "attribute_min ({}) should be < attribute_max ({})",
                self.attribute_min, self.attribute_max
            )));
        }

        if self.injury_age_die == 0 {
            return Err(ConfigurationError::InvalidConfig(
                "injury_age_die must have at least one side".into(),
            ));
        }

        Ok(())
    }
}

/// Limits a full character generation run works within
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// Character name written on the sheet
    pub name: String,

    /// Terms a character serves in one career before choosing to leave
    pub terms_per_career: u32,

    /// Hard cap on completed terms over the whole life
    pub max_terms: usize,

    /// No new career is started at or beyond this age
    pub max_age: i32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            name: "Traveller".to_string(),
            terms_per_career: 3,
            max_terms: 7,
            max_age: 46,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("term_years = 5\n").unwrap();
        assert_eq!(config.term_years, 5);
        assert_eq!(config.starting_age, 18);
    }

    #[test]
    fn test_weak_advancement_bonus_rejected() {
        let config = EngineConfig {
            overwhelming_advancement_dm: 3,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::InvalidConfig(_))
        ));
    }
}
