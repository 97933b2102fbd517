pub mod config;
pub mod error;
pub mod types;

pub use config::{EngineConfig, GenerationOptions};
pub use error::{ConfigurationError, LifepathError, Result};
pub use types::{Attribute, RelationshipKind};
