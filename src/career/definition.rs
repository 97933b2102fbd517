//! Career definitions
//!
//! One closed data type covers every career and assignment. Nothing here
//! holds behavior beyond lookups and validation; `engine` interprets it.

use serde::{Deserialize, Serialize};

use crate::career::effect::Effect;
use crate::career::table::{RollTable, TableDie};
use crate::core::error::ConfigurationError;
use crate::core::types::Attribute;
use crate::skills::SkillCatalog;

/// How a character gets into a career
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Qualification {
    /// Attribute DM - prior careers + enlistment bonus + dm against target
    Roll {
        attribute: Attribute,
        target: i32,
        #[serde(default)]
        dm: i32,
    },
    /// Anyone who has not retired
    Automatic,
    /// Only through forced enrollment
    Never,
}

/// An attribute-based 2d6 check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollCheck {
    pub attribute: Attribute,
    pub target: i32,
}

impl RollCheck {
    pub fn new(attribute: Attribute, target: i32) -> Self {
        Self { attribute, target }
    }
}

/// One-time officer commission offered after a promotion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRule {
    /// Enlisted rank the promotion must reach before a commission is offered
    pub min_rank: i32,
    pub check: RollCheck,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankEntry {
    pub rank: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bonus: Vec<Effect>,
}

/// What a former employer pays toward injury treatment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicalPlan {
    #[default]
    None,
    /// 2d6 + rank: 12+ pays all, 8+ three quarters, 4+ half
    RankBanded,
}

/// Cash and material benefit columns, rows 1..=7
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusterOutTable {
    pub cash: Vec<i64>,
    pub benefits: Vec<String>,
}

impl MusterOutTable {
    pub const ROWS: usize = 7;

    pub fn new(cash: [i64; 7], benefits: [&str; 7]) -> Self {
        Self {
            cash: cash.to_vec(),
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerDefinition {
    pub career: String,
    #[serde(default)]
    pub assignment: Option<String>,
    pub qualification: Qualification,
    pub survival: RollCheck,
    #[serde(default)]
    pub advancement: Option<RollCheck>,
    #[serde(default)]
    pub commission: Option<CommissionRule>,
    #[serde(default)]
    pub rank_carryover: bool,
    /// Education needed to roll on the advanced education table
    #[serde(default)]
    pub advanced_education_min: Option<i32>,
    pub basic_training: Vec<String>,
    pub service_skills: RollTable,
    pub personal_development: RollTable,
    pub assignment_skills: RollTable,
    #[serde(default)]
    pub advanced_education: Option<RollTable>,
    pub events: RollTable,
    pub mishaps: RollTable,
    #[serde(default)]
    pub ranks: Vec<RankEntry>,
    #[serde(default)]
    pub medical: MedicalPlan,
    pub muster_out: MusterOutTable,
}

impl CareerDefinition {
    /// The lookup key: the assignment if there is one, else the career
    pub fn key(&self) -> &str {
        self.assignment.as_deref().unwrap_or(&self.career)
    }

    pub fn display_name(&self) -> String {
        match &self.assignment {
            Some(assignment) => format!("{} ({})", assignment, self.career),
            None => self.career.clone(),
        }
    }

    pub fn rank_entry(&self, rank: i32) -> Option<&RankEntry> {
        self.ranks.iter().find(|r| r.rank == rank)
    }

    /// Skill tables available to a character with the given Education
    pub fn skill_tables(&self, education: i32) -> Vec<(&'static str, &RollTable)> {
        let mut tables = vec![
            ("personal development", &self.personal_development),
            ("service skills", &self.service_skills),
            ("assignment skills", &self.assignment_skills),
        ];
        if let (Some(min), Some(table)) = (self.advanced_education_min, &self.advanced_education) {
            if education >= min {
                tables.push(("advanced education", table));
            }
        }
        tables
    }

    fn named_tables(&self) -> Vec<(String, &RollTable, TableDie)> {
        let key = self.key();
        let mut tables = vec![
            (format!("{} service skills", key), &self.service_skills, TableDie::D6),
            (format!("{} personal development", key), &self.personal_development, TableDie::D6),
            (format!("{} assignment skills", key), &self.assignment_skills, TableDie::D6),
            (format!("{} events", key), &self.events, TableDie::TwoD6),
            (format!("{} mishaps", key), &self.mishaps, TableDie::D6),
        ];
        if let Some(table) = &self.advanced_education {
            tables.push((format!("{} advanced education", key), table, TableDie::D6));
        }
        tables
    }

    /// Check shape and references against the catalog
    pub fn validate(&self, catalog: &SkillCatalog) -> Result<(), ConfigurationError> {
        let key = self.key();

        for (name, table, die) in self.named_tables() {
            if table.die != die {
                return Err(ConfigurationError::MalformedRollTable {
                    table: name,
                    reason: format!("expected a {:?} table", die),
                });
            }
            table.validate(&name)?;
            for effect in table.effects() {
                for skill in effect.skill_references() {
                    catalog.check_reference(&name, skill)?;
                }
            }
        }

        if self.mishaps.effects().any(Effect::contains_mishap) {
            return Err(ConfigurationError::NestedMishap(key.to_string()));
        }
        // The engine resolves the mishap on an event roll of 2 itself
        if self.events.row(2).iter().any(Effect::contains_mishap) {
            return Err(ConfigurationError::MalformedRollTable {
                table: format!("{} events", key),
                reason: "row 2 already resolves a mishap".to_string(),
            });
        }

        if self.basic_training.len() != 6 {
            return Err(ConfigurationError::MalformedRollTable {
                table: format!("{} basic training", key),
                reason: format!("{} skills, expected 6", self.basic_training.len()),
            });
        }
        for skill in &self.basic_training {
            catalog.check_reference(&format!("{} basic training", key), skill)?;
        }

        for rank in &self.ranks {
            for effect in &rank.bonus {
                for skill in effect.skill_references() {
                    catalog.check_reference(&format!("{} rank {}", key, rank.rank), skill)?;
                }
            }
        }

        let muster = &self.muster_out;
        if muster.cash.len() != MusterOutTable::ROWS || muster.benefits.len() != MusterOutTable::ROWS {
            return Err(ConfigurationError::MalformedRollTable {
                table: format!("{} muster out", key),
                reason: format!(
                    "{} cash and {} benefit rows, expected {}",
                    muster.cash.len(),
                    muster.benefits.len(),
                    MusterOutTable::ROWS
                ),
            });
        }

        Ok(())
    }
}
