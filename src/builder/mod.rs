//! Species character builders
//!
//! A builder owns everything the engine treats as shared, read-only world
//! data: the career pool, the skill catalog and the tables every career
//! falls back on (injuries, life events, the draft).

pub mod generate;
pub mod standard;
pub mod tables;

pub use generate::generate_character;
pub use standard::StandardBuilder;

use crate::career::{CareerDefinition, Effect};
use crate::character::Character;
use crate::core::error::Result;
use crate::dice::Dice;
use crate::skills::{SkillCatalog, SkillTemplate, SkillTemplateCollection};

/// Supplies careers and shared tables to the engine.
///
/// Every method must be deterministic in the dice it is handed: the same
/// character and the same stream produce the same result.
pub trait SpeciesCharacterBuilder: Sync {
    fn catalog(&self) -> &SkillCatalog;

    /// All careers this species can enter, in a stable order
    fn careers(&self) -> &[CareerDefinition];

    /// Look up a career by key (assignment, or career if it has none)
    fn career(&self, key: &str) -> Option<&CareerDefinition>;

    /// Careers to attempt for the next cycle, in attempt order.
    ///
    /// Automatic careers come last and the career the character just left
    /// is excluded.
    fn candidate_careers(&self, character: &Character) -> Vec<&CareerDefinition>;

    fn specialties_for(&self, name: &str) -> Result<Vec<SkillTemplate>> {
        Ok(self.catalog().specialties_for(name)?)
    }

    /// Pool for "any skill" grants
    fn random_skills(&self, _character: &Character) -> Vec<SkillTemplate> {
        self.catalog().random_skills()
    }

    /// Apply the shared injury table and record the injury.
    ///
    /// `rank` is the rank held in `career` when the injury happens.
    fn injury(
        &self,
        character: &mut Character,
        dice: &mut Dice,
        career: &CareerDefinition,
        rank: i32,
        severe: bool,
        age: i32,
    ) -> Result<()>;

    /// Roll on the life event table and return the effects to apply
    fn life_event(&self, character: &mut Character, dice: &mut Dice, age: i32) -> Result<Vec<Effect>>;

    fn unusual_life_event(&self, character: &mut Character, dice: &mut Dice, age: i32) -> Result<Vec<Effect>>;

    /// Career key a draft sends the character to, if this species has a draft
    fn roll_draft(&self, character: &Character, dice: &mut Dice) -> Result<Option<String>>;

    /// Clean up the skill sheet once generation finishes
    fn fixup_skills(&self, _character: &mut Character, _dice: &mut Dice) {}

    /// Check for psionic potential when an event calls for it
    fn test_psionic(&self, _character: &mut Character, _dice: &mut Dice, _age: i32) {}

    /// Called just before basic training; may add to or change the training pool
    fn pre_career_events(
        &self,
        _character: &mut Character,
        _dice: &mut Dice,
        _career: &CareerDefinition,
        _training: &mut SkillTemplateCollection,
    ) {
    }
}
