//! Qualification
//!
//! A qualification roll is attribute DM - prior careers + enlistment bonus +
//! the career's own DM + any pending qualification DM, against the career's
//! target. Candidates are prechecked without drawing dice, then rolled for
//! real in order.

use serde::{Deserialize, Serialize};

use crate::career::{CareerDefinition, Qualification};
use crate::character::Character;
use crate::dice::{Dice, PRECHECK_ROLL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualifyOutcome {
    Qualified,
    Failed,
    /// The career cannot be entered voluntarily
    Ineligible,
}

impl QualifyOutcome {
    pub fn is_qualified(self) -> bool {
        self == QualifyOutcome::Qualified
    }
}

/// Total DM applied to a `Roll` qualification, or `None` for other kinds
pub fn qualification_dm(career: &CareerDefinition, character: &Character) -> Option<i32> {
    match career.qualification {
        Qualification::Roll { attribute, dm, .. } => Some(
            character.modifier(attribute) - character.prior_career_count()
                + character.enlistment_bonus(&career.career, career.assignment.as_deref())
                + dm
                + character.next_term.qualification_dm,
        ),
        Qualification::Automatic | Qualification::Never => None,
    }
}

/// Attempt to qualify. A precheck uses the fixed precheck roll and draws nothing.
pub fn qualify(career: &CareerDefinition, character: &Character, dice: &mut Dice, is_precheck: bool) -> QualifyOutcome {
    match &career.qualification {
        Qualification::Never => QualifyOutcome::Ineligible,
        Qualification::Automatic if character.long_term.retired => QualifyOutcome::Ineligible,
        Qualification::Automatic => QualifyOutcome::Qualified,
        Qualification::Roll { target, .. } => {
            let dm = qualification_dm(career, character).unwrap_or(0);
            if dice.roll_high_check(dm, *target, is_precheck) {
                QualifyOutcome::Qualified
            } else {
                QualifyOutcome::Failed
            }
        }
    }
}

/// Order candidates for real rolls.
///
/// Careers that pass the precheck are kept; rolled careers come first, best
/// precheck margin first, and automatic careers last. Ties keep the
/// builder's order.
pub fn select_candidates<'c>(
    candidates: Vec<&'c CareerDefinition>,
    character: &Character,
    dice: &mut Dice,
) -> Vec<&'c CareerDefinition> {
    let mut rolled: Vec<(i32, &CareerDefinition)> = Vec::new();
    let mut automatic = Vec::new();

    for career in candidates {
        if !qualify(career, character, dice, true).is_qualified() {
            continue;
        }
        match career.qualification {
            Qualification::Roll { target, .. } => {
                let dm = qualification_dm(career, character).unwrap_or(0);
                rolled.push((PRECHECK_ROLL + dm - target, career));
            }
            _ => automatic.push(career),
        }
    }

    rolled.sort_by(|a, b| b.0.cmp(&a.0));
    rolled.into_iter().map(|(_, c)| c).chain(automatic).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::standard_careers;
    use crate::character::Attributes;
    use crate::core::config::EngineConfig;
    use crate::core::types::Attribute;

    fn scholar_like(target: i32) -> CareerDefinition {
        let mut career = standard_careers().remove(0);
        career.qualification = Qualification::Roll {
            attribute: Attribute::Education,
            target,
            dm: 0,
        };
        career
    }

    fn with_education(education: i32) -> Character {
        let mut attributes = Attributes::default();
        attributes.education = education;
        Character::new("Test", attributes, &EngineConfig::default())
    }

    #[test]
    fn test_education_dm_two_against_five() {
        // Education 12 gives DM +2
        let career = scholar_like(5);
        let character = with_education(12);

        let mut dice = Dice::seeded(1);
        assert!(qualify(&career, &character, &mut dice, true).is_qualified());
        assert_eq!(dice.draws(), 0);

        for total in 2..=12u32 {
            let first = (total / 2).max(1);
            let second = total - first;
            let mut dice = Dice::scripted(vec![first, second]);
            let outcome = qualify(&career, &character, &mut dice, false);
            assert_eq!(outcome.is_qualified(), total as i32 + 2 >= 5, "2d6 = {}", total);
        }
    }

    #[test]
    fn test_prior_careers_penalize() {
        let career = scholar_like(8);
        let mut character = with_education(7);
        assert_eq!(qualification_dm(&career, &character), Some(0));

        character.long_term.careers_entered = 2;
        character.next_term.qualification_dm = 4;
        assert_eq!(qualification_dm(&career, &character), Some(2));
    }

    #[test]
    fn test_automatic_closed_after_retirement() {
        let mut drifter = standard_careers().into_iter().find(|c| c.career == "Drifter").unwrap();
        drifter.qualification = Qualification::Automatic;
        let mut character = with_education(7);
        let mut dice = Dice::seeded(1);
        assert_eq!(qualify(&drifter, &character, &mut dice, false), QualifyOutcome::Qualified);
        character.long_term.retired = true;
        assert_eq!(qualify(&drifter, &character, &mut dice, false), QualifyOutcome::Ineligible);
        assert_eq!(dice.draws(), 0);
    }

    #[test]
    fn test_select_candidates_orders_by_margin() {
        let careers = standard_careers();
        let character = with_education(7);
        let candidates: Vec<&CareerDefinition> = careers
            .iter()
            .filter(|c| !matches!(c.qualification, Qualification::Never))
            .collect();

        let mut dice = Dice::seeded(1);
        let ordered = select_candidates(candidates, &character, &mut dice);
        assert_eq!(dice.draws(), 0);

        // Citizen needs Edu 5, Scholar Int 5, Navy Int 6: all attributes 7
        let first_automatic = ordered
            .iter()
            .position(|c| c.qualification == Qualification::Automatic)
            .unwrap();
        assert!(ordered[..first_automatic]
            .iter()
            .all(|c| !matches!(c.qualification, Qualification::Automatic)));
        assert!(ordered[first_automatic..]
            .iter()
            .all(|c| c.qualification == Qualification::Automatic));
        assert_eq!(ordered[0].career, "Citizen");
        assert_eq!(ordered.last().map(|c| c.career.as_str()), Some("Drifter"));
    }
}
