//! The standard human builder
//!
//! Holds the built-in careers (plus any loaded from files), the standard
//! skill catalog and the shared injury, life event and draft tables.

use ahash::{AHashMap, AHashSet};

use crate::builder::tables::{self, InjuryLoss};
use crate::builder::SpeciesCharacterBuilder;
use crate::career::{standard_careers, validate_careers, CareerDefinition, Effect, Qualification, RollTable};
use crate::character::{Character, InjuryRecord};
use crate::core::error::{ConfigurationError, Result};
use crate::core::types::Attribute;
use crate::dice::{Dice, FrequencyTable};
use crate::engine::medical::medical_coverage;
use crate::skills::SkillCatalog;

const PSIONIC_TALENTS: [&str; 5] = ["Telepathy", "Clairvoyance", "Telekinesis", "Awareness", "Teleportation"];

/// 2d6 - terms served must reach this to show psionic potential
const PSIONIC_TARGET: i32 = 9;

pub struct StandardBuilder {
    catalog: SkillCatalog,
    careers: Vec<CareerDefinition>,
    index: AHashMap<String, usize>,
    life_events: RollTable,
    unusual_events: RollTable,
    draft: FrequencyTable<&'static str>,
}

impl StandardBuilder {
    /// The built-in careers only
    pub fn new() -> Result<Self> {
        Self::with_careers(SkillCatalog::standard(), standard_careers())
    }

    /// Built-in careers followed by `extra`, validated as one set
    pub fn with_extra_careers(extra: Vec<CareerDefinition>) -> Result<Self> {
        let mut careers = standard_careers();
        careers.extend(extra);
        Self::with_careers(SkillCatalog::standard(), careers)
    }

    pub fn with_careers(catalog: SkillCatalog, careers: Vec<CareerDefinition>) -> Result<Self> {
        validate_careers(&careers, &catalog)?;

        let life_events = tables::life_events();
        let unusual_events = tables::unusual_events();
        tables::validate_event_tables(&life_events, &unusual_events, &catalog)?;

        let index = careers
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key().to_string(), i))
            .collect();

        let builder = Self {
            catalog,
            careers,
            index,
            life_events,
            unusual_events,
            draft: tables::draft_table()?,
        };
        builder.check_shared_targets()?;

        tracing::info!("Standard builder ready with {} careers", builder.careers.len());
        Ok(builder)
    }

    /// Careers named by the draft and by life events must exist
    fn check_shared_targets(&self) -> std::result::Result<(), ConfigurationError> {
        let names: AHashSet<&str> = self.careers.iter().map(|c| c.career.as_str()).collect();
        let known = |target: &str| self.index.contains_key(target) || names.contains(target);

        for roll in 1..=self.draft.die_range() {
            let key: &str = self.draft.lookup(roll)?;
            if !known(key) {
                return Err(ConfigurationError::UnknownCareer(key.to_string()));
            }
        }

        let mut unknown = None;
        for effect in self.life_events.effects().chain(self.unusual_events.effects()) {
            effect.walk(&mut |e| {
                if let Effect::MustEnroll { career } = e {
                    if unknown.is_none() && !known(career.as_str()) {
                        unknown = Some(career.clone());
                    }
                }
            });
        }
        match unknown {
            Some(career) => Err(ConfigurationError::UnknownCareer(career)),
            None => Ok(()),
        }
    }

    fn physical_attribute(dice: &mut Dice) -> Attribute {
        dice.choose(&Attribute::PHYSICAL).copied().unwrap_or(Attribute::Endurance)
    }
}

/// Injuries only ever lower an attribute, and never below zero
fn reduce(character: &mut Character, attribute: Attribute, amount: i32) {
    let current = character.attribute(attribute).max(0);
    character.attributes.adjust(attribute, -amount, 0, current);
}

impl SpeciesCharacterBuilder for StandardBuilder {
    fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    fn careers(&self) -> &[CareerDefinition] {
        &self.careers
    }

    fn career(&self, key: &str) -> Option<&CareerDefinition> {
        self.index.get(key).and_then(|&i| self.careers.get(i))
    }

    fn candidate_careers(&self, character: &Character) -> Vec<&CareerDefinition> {
        let last = character.long_term.last_exited.as_deref();
        let open: Vec<&CareerDefinition> = self
            .careers
            .iter()
            .filter(|c| Some(c.key()) != last)
            .filter(|c| c.qualification != Qualification::Never)
            .collect();

        let (automatic, rolled): (Vec<_>, Vec<_>) = open
            .into_iter()
            .partition(|c| c.qualification == Qualification::Automatic);
        rolled.into_iter().chain(automatic).collect()
    }

    fn injury(
        &self,
        character: &mut Character,
        dice: &mut Dice,
        career: &CareerDefinition,
        rank: i32,
        severe: bool,
        age: i32,
    ) -> Result<()> {
        let mut roll = dice.d(6);
        if severe {
            roll = roll.min(dice.d(6));
        }
        let row = tables::injury_row(roll);

        match row.loss {
            InjuryLoss::NearlyKilled => {
                let worst = dice.choose_index(Attribute::PHYSICAL.len()).unwrap_or(0);
                let loss = dice.d(6);
                for (i, attribute) in Attribute::PHYSICAL.iter().enumerate() {
                    reduce(character, *attribute, if i == worst { loss } else { 2 });
                }
            }
            InjuryLoss::Severe => {
                let attribute = Self::physical_attribute(dice);
                let loss = dice.d(6);
                reduce(character, attribute, loss);
            }
            InjuryLoss::MissingLimb => {
                let attribute = if dice.next_bool() {
                    Attribute::Strength
                } else {
                    Attribute::Dexterity
                };
                reduce(character, attribute, 2);
            }
            InjuryLoss::Physical(loss) => {
                let attribute = Self::physical_attribute(dice);
                reduce(character, attribute, loss);
            }
            InjuryLoss::None => {}
        }

        let coverage = medical_coverage(career, rank, dice);
        character.injuries.push(InjuryRecord {
            age,
            severe,
            description: row.description.to_string(),
            medical_coverage: coverage,
        });
        character.add_history(age, format!("{}. Medical covers {}%.", row.description, coverage));
        tracing::debug!("{} injured: {} (roll {})", character.name, row.description, roll);
        Ok(())
    }

    fn life_event(&self, character: &mut Character, dice: &mut Dice, _age: i32) -> Result<Vec<Effect>> {
        let (roll, row) = self.life_events.roll(dice);
        tracing::debug!("{} life event {}", character.name, roll);
        Ok(row.to_vec())
    }

    fn unusual_life_event(&self, character: &mut Character, dice: &mut Dice, age: i32) -> Result<Vec<Effect>> {
        let (roll, row) = self.unusual_events.roll(dice);
        tracing::debug!("{} unusual event {}", character.name, roll);
        if roll == 1 {
            character.add_history(age, "Encountered a psionic institute.");
            self.test_psionic(character, dice, age);
        }
        Ok(row.to_vec())
    }

    fn roll_draft(&self, _character: &Character, dice: &mut Dice) -> Result<Option<String>> {
        let key = self.draft.choose(dice)?;
        Ok(Some(key.to_string()))
    }

    /// A bare level-0 skill is redundant once a specialization of it is held
    fn fixup_skills(&self, character: &mut Character, _dice: &mut Dice) {
        let specialized: AHashSet<String> = character
            .skills
            .iter()
            .filter(|s| s.specialty.is_some())
            .map(|s| s.name.clone())
            .collect();
        character
            .skills
            .retain(|s| s.specialty.is_some() || s.level > 0 || !specialized.contains(&s.name));
    }

    fn test_psionic(&self, character: &mut Character, dice: &mut Dice, age: i32) {
        let score = dice.d_n(2, 6) - character.completed_terms() as i32;
        if score < PSIONIC_TARGET {
            character.add_history(age, "Tested for psionic potential with no result.");
            return;
        }
        let available: Vec<&str> = PSIONIC_TALENTS
            .iter()
            .copied()
            .filter(|t| !character.psionic_talents.iter().any(|held| held == t))
            .collect();
        if let Some(talent) = dice.choose(&available) {
            character.psionic_talents.push(talent.to_string());
            character.add_history(age, format!("Discovered a talent for {}.", talent));
        }
    }
}
