//! Loading careers from TOML
//!
//! A career file is a list of `[[career]]` tables with the same shape as
//! `CareerDefinition`. Loaded careers are validated exactly like the
//! built-in ones.

use std::path::Path;

use ahash::AHashSet;
use serde::Deserialize;

use crate::career::definition::CareerDefinition;
use crate::career::effect::Effect;
use crate::core::error::{ConfigurationError, Result};
use crate::skills::SkillCatalog;

#[derive(Debug, Deserialize)]
struct CareerFile {
    #[serde(default, rename = "career")]
    careers: Vec<CareerDefinition>,
}

/// Parse careers from TOML text without validating them
pub fn parse_careers(content: &str) -> Result<Vec<CareerDefinition>> {
    let file: CareerFile = toml::from_str(content)?;
    Ok(file.careers)
}

/// Load a career file and validate it on its own against `catalog`
pub fn load_careers(path: &Path, catalog: &SkillCatalog) -> Result<Vec<CareerDefinition>> {
    let content = std::fs::read_to_string(path)?;
    let careers = parse_careers(&content)?;
    validate_careers(&careers, catalog)?;
    Ok(careers)
}

/// Validate a complete career set: every table, unique keys, and every
/// career named by a forced enrollment or enlistment bonus.
pub fn validate_careers(
    careers: &[CareerDefinition],
    catalog: &SkillCatalog,
) -> std::result::Result<(), ConfigurationError> {
    let mut keys = AHashSet::new();
    let mut names = AHashSet::new();
    for career in careers {
        career.validate(catalog)?;
        if !keys.insert(career.key()) {
            return Err(ConfigurationError::DuplicateCareer(career.key().to_string()));
        }
        names.insert(career.career.as_str());
    }

    for career in careers {
        let mut unknown = None;
        for effect in all_effects(career) {
            effect.walk(&mut |e| {
                let target = match e {
                    Effect::MustEnroll { career } => Some(career),
                    Effect::EnlistmentBonus { career, .. } => Some(career),
                    _ => None,
                };
                if let Some(target) = target {
                    if unknown.is_none() && !keys.contains(target.as_str()) && !names.contains(target.as_str()) {
                        unknown = Some(target.clone());
                    }
                }
            });
        }
        if let Some(target) = unknown {
            return Err(ConfigurationError::UnknownCareer(target));
        }
    }

    Ok(())
}

fn all_effects(career: &CareerDefinition) -> impl Iterator<Item = &Effect> {
    career
        .service_skills
        .effects()
        .chain(career.personal_development.effects())
        .chain(career.assignment_skills.effects())
        .chain(career.advanced_education.iter().flat_map(|t| t.effects()))
        .chain(career.events.effects())
        .chain(career.mishaps.effects())
        .chain(career.ranks.iter().flat_map(|r| r.bonus.iter()))
}
