use crate::builder::SpeciesCharacterBuilder;
use crate::core::config::EngineConfig;

/// Read-only world handed to every engine call
#[derive(Clone, Copy)]
pub struct EngineContext<'a> {
    pub builder: &'a dyn SpeciesCharacterBuilder,
    pub config: &'a EngineConfig,
}

impl<'a> EngineContext<'a> {
    pub fn new(builder: &'a dyn SpeciesCharacterBuilder, config: &'a EngineConfig) -> Self {
        Self { builder, config }
    }
}
