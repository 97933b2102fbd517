//! Term-scoped and long-term benefit bookkeeping
//!
//! `NextTermBenefits` is written during a term and drained into
//! `TermBenefits` when the next term begins, so a modifier lives for
//! exactly one term boundary.

use serde::{Deserialize, Serialize};

/// Modifiers that apply to the term in progress
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermBenefits {
    pub advancement_dm: i32,
    pub survival_dm: i32,
    /// Commission may be attempted once per career block
    pub commission_attempted: bool,
}

impl TermBenefits {
    /// Start a term from what the previous term left behind
    pub fn carried_from(next: &NextTermBenefits, commission_attempted: bool) -> Self {
        Self {
            advancement_dm: next.advancement_dm,
            survival_dm: next.survival_dm,
            commission_attempted,
        }
    }
}

/// Modifiers and overrides that take effect at the next term boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextTermBenefits {
    pub advancement_dm: i32,
    pub survival_dm: i32,
    pub qualification_dm: i32,
    /// Career key the character is forced into next, bypassing qualification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub must_enroll: Option<String>,
    /// `Some(false)` compels another term, `Some(true)` forces leaving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muster_out: Option<bool>,
}

/// A standing qualification bonus earned by earlier service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnlistmentBonus {
    pub career: String,
    /// `None` applies to every assignment of the career
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<String>,
    pub dm: i32,
}

/// Flags that persist for the rest of the character's life
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermBenefits {
    pub retired: bool,
    /// The draft may only be rolled once per life
    pub drafted: bool,
    /// Career blocks entered, counting ones cut short before a term completed
    #[serde(default)]
    pub careers_entered: u32,
    /// Key of the career most recently left, however the block ended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_exited: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enlistment: Vec<EnlistmentBonus>,
}

impl LongTermBenefits {
    pub fn enlistment_bonus(&self, career: &str, assignment: Option<&str>) -> i32 {
        self.enlistment
            .iter()
            .filter(|b| {
                b.career == career
                    && (b.assignment.is_none() || b.assignment.as_deref() == assignment)
            })
            .map(|b| b.dm)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enlistment_bonus_matches_assignment() {
        let benefits = LongTermBenefits {
            enlistment: vec![
                EnlistmentBonus { career: "Navy".into(), assignment: None, dm: 1 },
                EnlistmentBonus { career: "Navy".into(), assignment: Some("Flight".into()), dm: 2 },
                EnlistmentBonus { career: "Scholar".into(), assignment: None, dm: 4 },
            ],
            ..LongTermBenefits::default()
        };
        assert_eq!(benefits.enlistment_bonus("Navy", Some("Flight")), 3);
        assert_eq!(benefits.enlistment_bonus("Navy", Some("Engineer/Gunner")), 1);
        assert_eq!(benefits.enlistment_bonus("Citizen", None), 0);
    }

    #[test]
    fn test_carryover_ignores_overrides() {
        let next = NextTermBenefits {
            advancement_dm: 1,
            survival_dm: -2,
            qualification_dm: 4,
            must_enroll: Some("Prisoner".into()),
            muster_out: Some(false),
        };
        let current = TermBenefits::carried_from(&next, false);
        assert_eq!(current.advancement_dm, 1);
        assert_eq!(current.survival_dm, -2);
    }
}
