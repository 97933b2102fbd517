//! Character - the subject of a life-path simulation
//!
//! The engine is the only writer while a cycle runs. Once a cycle returns,
//! callers read the sheet through the accessors here.

pub mod attributes;
pub mod benefits;
pub mod history;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use attributes::{attribute_modifier, Attributes};
pub use benefits::{EnlistmentBonus, LongTermBenefits, NextTermBenefits, TermBenefits};
pub use history::{CareerHistory, HistoryEntry, InjuryRecord, MusterOutBenefit};

use crate::core::config::EngineConfig;
use crate::core::types::{Attribute, RelationshipKind};
use crate::skills::SkillSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationships {
    pub contacts: u32,
    pub allies: u32,
    pub enemies: u32,
    pub rivals: u32,
}

impl Relationships {
    pub fn add(&mut self, kind: RelationshipKind, count: u32) {
        let slot = match kind {
            RelationshipKind::Contact => &mut self.contacts,
            RelationshipKind::Ally => &mut self.allies,
            RelationshipKind::Enemy => &mut self.enemies,
            RelationshipKind::Rival => &mut self.rivals,
        };
        *slot += count;
    }

    pub fn count(&self, kind: RelationshipKind) -> u32 {
        match kind {
            RelationshipKind::Contact => self.contacts,
            RelationshipKind::Ally => self.allies,
            RelationshipKind::Enemy => self.enemies,
            RelationshipKind::Rival => self.rivals,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub attributes: Attributes,
    pub age: i32,
    pub skills: SkillSet,
    pub career_history: Vec<CareerHistory>,
    pub history: Vec<HistoryEntry>,
    pub relationships: Relationships,
    pub injuries: Vec<InjuryRecord>,

    pub current_term: TermBenefits,
    pub next_term: NextTermBenefits,
    pub long_term: LongTermBenefits,

    pub benefit_rolls: i32,
    /// One-shot DMs, each consumed by a single muster-out roll
    pub benefit_roll_dms: Vec<i32>,
    pub muster_out_benefits: Vec<MusterOutBenefit>,
    pub cash: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub psionic_talents: Vec<String>,
}

impl Character {
    pub fn new(name: impl Into<String>, attributes: Attributes, config: &EngineConfig) -> Self {
        Self {
            name: name.into(),
            attributes,
            age: config.starting_age,
            skills: SkillSet::new(),
            career_history: Vec::new(),
            history: Vec::new(),
            relationships: Relationships::default(),
            injuries: Vec::new(),
            current_term: TermBenefits::default(),
            next_term: NextTermBenefits::default(),
            long_term: LongTermBenefits::default(),
            benefit_rolls: 0,
            benefit_roll_dms: Vec::new(),
            muster_out_benefits: Vec::new(),
            cash: 0,
            psionic_talents: Vec::new(),
        }
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        self.attributes.get(attribute)
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes.modifier(attribute)
    }

    pub fn adjust_attribute(&mut self, attribute: Attribute, delta: i32, config: &EngineConfig) -> i32 {
        self.attributes
            .adjust(attribute, delta, config.attribute_min, config.attribute_max)
    }

    pub fn add_history(&mut self, age: i32, text: impl Into<String>) {
        self.history.push(HistoryEntry {
            age,
            text: text.into(),
        });
    }

    pub fn add_relationship(&mut self, kind: RelationshipKind, count: u32) {
        self.relationships.add(kind, count);
    }

    pub fn completed_terms(&self) -> usize {
        self.career_history.len()
    }

    /// Career blocks entered so far, including ones a mishap ended before
    /// any term was recorded
    pub fn prior_career_count(&self) -> i32 {
        self.long_term.careers_entered as i32
    }

    pub fn enlistment_bonus(&self, career: &str, assignment: Option<&str>) -> i32 {
        self.long_term.enlistment_bonus(career, assignment)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}, age {}", self.name, self.age)?;
        let attrs: Vec<String> = Attribute::ALL
            .iter()
            .map(|a| format!("{} {}", a, self.attribute(*a)))
            .collect();
        writeln!(f, "  {}", attrs.join("  "))?;

        writeln!(f, "Careers:")?;
        for entry in &self.career_history {
            write!(f, "  term {} {} rank {}", entry.terms, entry.long_name(), entry.rank)?;
            if entry.commission_rank > 0 {
                write!(f, " (officer {})", entry.commission_rank)?;
            }
            match &entry.title {
                Some(title) => writeln!(f, " - {}", title)?,
                None => writeln!(f)?,
            }
        }

        let skills: Vec<String> = self
            .skills
            .iter()
            .map(|s| match &s.specialty {
                Some(specialty) => format!("{} ({}) {}", s.name, specialty, s.level),
                None => format!("{} {}", s.name, s.level),
            })
            .collect();
        writeln!(f, "Skills: {}", skills.join(", "))?;

        let r = &self.relationships;
        writeln!(
            f,
            "Contacts {}  Allies {}  Enemies {}  Rivals {}",
            r.contacts, r.allies, r.enemies, r.rivals
        )?;
        writeln!(f, "Cash: Cr{}", self.cash)?;
        for benefit in self.muster_out_benefits.iter().filter_map(|b| b.benefit.as_ref()) {
            writeln!(f, "  {}", benefit)?;
        }

        writeln!(f, "History:")?;
        for entry in &self.history {
            writeln!(f, "  {:>2}: {}", entry.age, entry.text)?;
        }
        Ok(())
    }
}
