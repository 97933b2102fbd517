use thiserror::Error;

/// Data or programming errors in tables and configuration.
///
/// These are never game outcomes. A failed qualification or survival roll is
/// an ordinary branch of the simulation; a malformed table stops the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Frequency table '{table}' is malformed: {reason}")]
    MalformedFrequencyTable { table: String, reason: String },

    #[error("Frequency table '{table}' has no entry for roll {roll}")]
    SelectionOutOfRange { table: String, roll: u32 },

    #[error("Roll table '{table}' is malformed: {reason}")]
    MalformedRollTable { table: String, reason: String },

    #[error("'{context}' references undefined skill '{skill}'")]
    UndefinedSkill { context: String, skill: String },

    #[error("Skill '{skill}' has no specialization '{specialty}'")]
    MissingSpecialization { skill: String, specialty: String },

    #[error("Unknown career: {0}")]
    UnknownCareer(String),

    #[error("Career '{0}' is defined twice")]
    DuplicateCareer(String),

    #[error("Mishap table of '{0}' routes back into a mishap")]
    NestedMishap(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Error, Debug)]
pub enum LifepathError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifepathError>;
