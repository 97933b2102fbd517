//! Effects - the vocabulary career tables are written in
//!
//! Every row of every table is a list of effects. The engine interprets
//! them in order, drawing dice exactly where an effect says it does.

use serde::{Deserialize, Serialize};

use crate::core::types::{Attribute, RelationshipKind};
use crate::dice::Dice;

/// A count that is either fixed or rolled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Fixed(u32),
    Dice { count: u32, sides: u32 },
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Fixed(1)
    }
}

impl Amount {
    pub fn roll(&self, dice: &mut Dice) -> u32 {
        match self {
            Amount::Fixed(n) => *n,
            Amount::Dice { count, sides } => dice.d_n(*count, *sides).max(0) as u32,
        }
    }
}

/// Where the DM of a `Check` comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    #[default]
    None,
    Attribute(Attribute),
    /// Best level among the named skills, specialization ignored
    BestSkill(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Effect {
    /// Write a line into the character's history
    Note { text: String },
    /// Gain a skill at a level; level 0 keeps a bare name bare
    GainSkill {
        skill: String,
        #[serde(default)]
        level: i32,
    },
    /// Raise a skill by one, choosing a specialization if it needs one
    IncreaseSkill { skill: String },
    /// Gain one listed skill at level 1, skipping those already held
    AddOneSkill { skills: Vec<String> },
    /// Raise one listed skill by one level
    IncreaseOneSkill { skills: Vec<String> },
    /// Raise `count` distinct specializations of one skill
    PickSkills { skill: String, count: u32 },
    /// Gain any catalog skill at level 1
    AddRandomSkill,
    /// Raise one skill the character already has
    ImproveOwnedSkill,
    Attribute { attribute: Attribute, delta: i32 },
    Relationship {
        relation: RelationshipKind,
        #[serde(default)]
        count: Amount,
    },
    /// Advancement DM for the current term
    AdvancementDm { dm: i32 },
    NextSurvivalDm { dm: i32 },
    NextAdvancementDm { dm: i32 },
    /// DM for the next qualification roll
    QualificationDm { dm: i32 },
    /// A one-shot DM for a single muster-out roll
    BenefitRollDm { dm: i32 },
    BenefitRolls { delta: i32 },
    ResetBenefitRolls,
    /// Force (true) or forbid (false) leaving at the end of this term
    MusterOut { forced: bool },
    MustEnroll { career: String },
    Draft,
    Injury {
        #[serde(default)]
        severe: bool,
    },
    LifeEvent,
    UnusualLifeEvent,
    /// Resolve the active career's mishap table
    Mishap,
    EnlistmentBonus {
        career: String,
        #[serde(default)]
        assignment: Option<String>,
        dm: i32,
    },
    /// 2d6 + modifier against a target
    Check {
        #[serde(default)]
        modifier: Modifier,
        target: i32,
        #[serde(default)]
        success: Vec<Effect>,
        #[serde(default)]
        failure: Vec<Effect>,
    },
    CoinFlip { heads: Vec<Effect>, tails: Vec<Effect> },
    /// Roll 1dN over the options
    OneOf { options: Vec<Vec<Effect>> },
}

impl Effect {
    pub fn note(text: &str) -> Self {
        Effect::Note { text: text.to_string() }
    }

    pub fn gain(skill: &str, level: i32) -> Self {
        Effect::GainSkill { skill: skill.to_string(), level }
    }

    pub fn increase(skill: &str) -> Self {
        Effect::IncreaseSkill { skill: skill.to_string() }
    }

    pub fn add_one(skills: &[&str]) -> Self {
        Effect::AddOneSkill { skills: skills.iter().map(|s| s.to_string()).collect() }
    }

    pub fn increase_one(skills: &[&str]) -> Self {
        Effect::IncreaseOneSkill { skills: skills.iter().map(|s| s.to_string()).collect() }
    }

    pub fn attribute(attribute: Attribute, delta: i32) -> Self {
        Effect::Attribute { attribute, delta }
    }

    pub fn relation(relation: RelationshipKind, count: u32) -> Self {
        Effect::Relationship { relation, count: Amount::Fixed(count) }
    }

    pub fn check(modifier: Modifier, target: i32, success: Vec<Effect>, failure: Vec<Effect>) -> Self {
        Effect::Check { modifier, target, success, failure }
    }

    pub fn coin(heads: Vec<Effect>, tails: Vec<Effect>) -> Self {
        Effect::CoinFlip { heads, tails }
    }

    pub fn best_skill(names: &[&str]) -> Modifier {
        Modifier::BestSkill(names.iter().map(|s| s.to_string()).collect())
    }

    /// Visit this effect and every effect nested inside it
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Effect)) {
        visit(self);
        match self {
            Effect::Check { success, failure, .. } => {
                success.iter().chain(failure).for_each(|e| e.walk(visit));
            }
            Effect::CoinFlip { heads, tails } => {
                heads.iter().chain(tails).for_each(|e| e.walk(visit));
            }
            Effect::OneOf { options } => {
                options.iter().flatten().for_each(|e| e.walk(visit));
            }
            _ => {}
        }
    }

    /// Every skill reference this effect makes, nested ones included
    pub fn skill_references(&self) -> Vec<&str> {
        let mut refs = Vec::new();
        self.walk(&mut |effect| match effect {
            Effect::GainSkill { skill, .. }
            | Effect::IncreaseSkill { skill }
            | Effect::PickSkills { skill, .. } => refs.push(skill.as_str()),
            Effect::AddOneSkill { skills } | Effect::IncreaseOneSkill { skills } => {
                refs.extend(skills.iter().map(String::as_str))
            }
            Effect::Check { modifier: Modifier::BestSkill(names), .. } => {
                refs.extend(names.iter().map(String::as_str))
            }
            _ => {}
        });
        refs
    }

    pub fn contains_mishap(&self) -> bool {
        let mut found = false;
        self.walk(&mut |effect| {
            if matches!(effect, Effect::Mishap) {
                found = true;
            }
        });
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_references_include_nested() {
        let effect = Effect::check(
            Effect::best_skill(&["Stealth"]),
            8,
            vec![Effect::increase("Streetwise")],
            vec![Effect::coin(vec![Effect::add_one(&["Admin", "Advocate"])], vec![])],
        );
        let refs = effect.skill_references();
        assert_eq!(refs, vec!["Stealth", "Streetwise", "Admin", "Advocate"]);
    }

    #[test]
    fn test_contains_mishap() {
        let nested = Effect::coin(vec![Effect::note("x")], vec![Effect::Mishap]);
        assert!(nested.contains_mishap());
        assert!(!Effect::LifeEvent.contains_mishap());
    }

    #[test]
    fn test_amount_roll() {
        let mut dice = Dice::scripted(vec![2, 3]);
        assert_eq!(Amount::Fixed(2).roll(&mut dice), 2);
        assert_eq!(Amount::Dice { count: 2, sides: 6 }.roll(&mut dice), 5);
    }
}
