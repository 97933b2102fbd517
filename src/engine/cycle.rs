//! Career cycle state machine
//!
//! One cycle takes a character from "not enlisted" through a single career
//! block and out again. Every state transition is recorded so a report can
//! show exactly which path a life took.

use serde::{Deserialize, Serialize};

use crate::career::CareerDefinition;
use crate::character::{CareerHistory, Character, MusterOutBenefit};
use crate::core::error::{ConfigurationError, Result};
use crate::dice::Dice;
use crate::engine::context::EngineContext;
use crate::engine::muster::muster_out;
use crate::engine::policy::ContinuationPolicy;
use crate::engine::qualify::{qualify, select_candidates};
use crate::engine::term::{self, Continuation, TermOutcome};

/// Why a career block ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitReason {
    /// Failed a survival roll
    Mishap,
    /// Left voluntarily when the policy declined another term
    Chose,
    /// An event or the advancement roll forced the character out
    Forced,
    /// Sent straight into another career
    Transferred(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CareerState {
    Enlisted { term: u32 },
    Event { term: u32 },
    Mishap { term: u32 },
    Advancing { term: u32 },
    Continuing { term: u32 },
    Transferring { career: String },
    MusteringOut { reason: ExitReason },
    Exited,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CycleOutcome {
    Served {
        career: String,
        /// Terms recorded in this block; a term cut short is not counted
        terms: u32,
        exit: ExitReason,
    },
    /// No career would take the character and the draft was spent
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleReport {
    pub outcome: CycleOutcome,
    /// History entries appended during this cycle
    pub new_history: Vec<CareerHistory>,
    pub benefits: Vec<MusterOutBenefit>,
    pub trace: Vec<CareerState>,
}

impl CycleReport {
    fn exhausted() -> Self {
        Self {
            outcome: CycleOutcome::Exhausted,
            new_history: Vec::new(),
            benefits: Vec::new(),
            trace: Vec::new(),
        }
    }

    pub fn terms_served(&self) -> u32 {
        match &self.outcome {
            CycleOutcome::Served { terms, .. } => *terms,
            CycleOutcome::Exhausted => 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.outcome == CycleOutcome::Exhausted
    }
}

/// Resolve a forced enrollment target: a career key, or a career name whose
/// assignment is chosen at random
fn enrollment_target<'c>(
    ctx: &EngineContext<'c>,
    dice: &mut Dice,
    target: &str,
) -> Result<&'c CareerDefinition> {
    if let Some(career) = ctx.builder.career(target) {
        return Ok(career);
    }
    let assignments: Vec<&CareerDefinition> =
        ctx.builder.careers().iter().filter(|c| c.career == target).collect();
    dice.choose(&assignments)
        .copied()
        .ok_or_else(|| ConfigurationError::UnknownCareer(target.to_string()).into())
}

/// Pick the career for this cycle, or `None` when nothing will take the character
fn find_career<'c>(
    ctx: &EngineContext<'c>,
    character: &mut Character,
    dice: &mut Dice,
) -> Result<Option<&'c CareerDefinition>> {
    if let Some(target) = character.next_term.must_enroll.take() {
        let career = enrollment_target(ctx, dice, &target)?;
        tracing::info!("{} enrolls in {} without qualifying", character.name, career.key());
        return Ok(Some(career));
    }

    let candidates = ctx.builder.candidate_careers(character);
    let ordered = select_candidates(candidates, character, dice);
    let mut chosen = None;
    for career in ordered {
        let outcome = qualify(career, character, dice, false);
        tracing::info!("{} qualification for {}: {:?}", character.name, career.key(), outcome);
        if outcome.is_qualified() {
            chosen = Some(career);
            break;
        }
        character.add_history(character.age, format!("Failed to qualify for the {}.", career.display_name()));
    }
    character.next_term.qualification_dm = 0;
    if chosen.is_some() {
        return Ok(chosen);
    }

    if !character.long_term.drafted {
        character.long_term.drafted = true;
        if let Some(key) = ctx.builder.roll_draft(character, dice)? {
            let career = enrollment_target(ctx, dice, &key)?;
            tracing::info!("{} drafted into {}", character.name, career.key());
            character.add_history(character.age, format!("Drafted into the {}.", career.display_name()));
            return Ok(Some(career));
        }
    }
    Ok(None)
}

/// Run one career cycle: qualify (or be placed), serve terms until the
/// character leaves, then muster out.
pub fn run_cycle(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    policy: &mut dyn ContinuationPolicy,
) -> Result<CycleReport> {
    let Some(career) = find_career(ctx, character, dice)? else {
        tracing::warn!("{} has no career left to enter at age {}", character.name, character.age);
        return Ok(CycleReport::exhausted());
    };

    tracing::info!("{} begins a cycle in {} at age {}", character.name, career.key(), character.age);
    let history_start = character.career_history.len();
    let mut active = term::enter_career(ctx, character, dice, career)?;
    let mut benefits = Vec::new();
    let mut trace = Vec::new();
    let mut exit = ExitReason::Chose;
    let mut state = CareerState::Enlisted { term: 1 };

    loop {
        trace.push(state.clone());
        tracing::debug!("{} {:?}", character.name, state);
        state = match state {
            CareerState::Enlisted { term } => match term::serve_term(ctx, character, dice, &mut active)? {
                TermOutcome::Survived => CareerState::Event { term },
                TermOutcome::Mishap => CareerState::Mishap { term },
            },
            CareerState::Event { term } => {
                term::resolve_event(ctx, character, dice, &active)?;
                CareerState::Advancing { term }
            }
            CareerState::Mishap { .. } => CareerState::MusteringOut {
                reason: ExitReason::Mishap,
            },
            CareerState::Advancing { term } => {
                term::advance(ctx, character, dice, &mut active)?;
                term::record_term(ctx, character, &active);
                match term::continuation(character, &active, policy) {
                    Continuation::Continue => CareerState::Continuing { term },
                    Continuation::MusterOut { forced } => CareerState::MusteringOut {
                        reason: if forced { ExitReason::Forced } else { ExitReason::Chose },
                    },
                    Continuation::Transfer(career) => CareerState::Transferring { career },
                }
            }
            CareerState::Continuing { term } => CareerState::Enlisted { term: term + 1 },
            CareerState::Transferring { career } => CareerState::MusteringOut {
                reason: ExitReason::Transferred(career),
            },
            CareerState::MusteringOut { reason } => {
                benefits = muster_out(ctx, character, dice, career, active.rank);
                character.long_term.last_exited = Some(career.key().to_string());
                exit = reason;
                CareerState::Exited
            }
            CareerState::Exited => break,
        };
    }

    let new_history = character.career_history[history_start..].to_vec();
    let outcome = CycleOutcome::Served {
        career: career.key().to_string(),
        terms: new_history.len() as u32,
        exit,
    };
    tracing::info!("{} cycle ended: {:?}", character.name, outcome);

    Ok(CycleReport {
        outcome,
        new_history,
        benefits,
        trace,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{SpeciesCharacterBuilder, StandardBuilder};
    use crate::character::Attributes;
    use crate::core::config::EngineConfig;
    use crate::engine::policy::TermLimitPolicy;
    use crate::engine::qualify::qualification_dm;

    fn never(_: &Character, _: &CareerDefinition, _: u32) -> bool {
        false
    }

    #[test]
    fn test_forced_enrollment_bypasses_qualification() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let mut character = Character::new("Test", Attributes::default(), &config);
        character.next_term.must_enroll = Some("Prisoner".to_string());

        let mut dice = Dice::seeded(17);
        let mut policy = never;
        let report = run_cycle(&ctx, &mut character, &mut dice, &mut policy).unwrap();

        match report.outcome {
            CycleOutcome::Served { career, .. } => assert_eq!(career, "Prisoner"),
            CycleOutcome::Exhausted => panic!("forced enrollment must place the character"),
        }
        assert_eq!(report.trace.first(), Some(&CareerState::Enlisted { term: 1 }));
        assert_eq!(report.trace.last(), Some(&CareerState::Exited));
    }

    #[test]
    fn test_enrollment_by_career_name_picks_assignment() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let mut dice = Dice::scripted(vec![3]);
        let career = enrollment_target(&ctx, &mut dice, "Navy").unwrap();
        assert_eq!(career.key(), "Flight");

        assert!(matches!(
            enrollment_target(&ctx, &mut dice, "Pirate"),
            Err(crate::core::error::LifepathError::Configuration(ConfigurationError::UnknownCareer(_)))
        ));
    }

    #[test]
    fn test_exhausted_after_draft_is_spent() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let mut character = Character::new("Test", Attributes::uniform(2), &config);
        character.long_term.retired = true;
        character.long_term.drafted = true;

        let mut dice = Dice::scripted(vec![1]);
        let mut policy = TermLimitPolicy::new(3, 7, 46);
        let report = run_cycle(&ctx, &mut character, &mut dice, &mut policy).unwrap();

        assert!(report.is_exhausted());
        assert!(character.career_history.is_empty());
        assert_eq!(character.age, 18);
    }

    #[test]
    fn test_history_matches_terms_served() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);

        for seed in 0..40 {
            let mut character = Character::new("Test", Attributes::default(), &config);
            let mut dice = Dice::seeded(seed);
            let mut policy = TermLimitPolicy::new(3, 7, 46);
            let report = run_cycle(&ctx, &mut character, &mut dice, &mut policy).unwrap();

            assert_eq!(report.new_history.len() as u32, report.terms_served());
            assert_eq!(character.career_history.len(), report.new_history.len());
            for (i, entry) in report.new_history.iter().enumerate() {
                assert_eq!(entry.terms, i as u32 + 1, "seed {}", seed);
            }
        }
    }

    #[test]
    fn test_first_term_mishap_closes_the_career() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let mut character = Character::new("Test", Attributes::default(), &config);
        character.next_term.must_enroll = Some("Corporate".to_string());

        // Every face a 1: survival 2 fails against Soc 6, mishap row 1
        let mut dice = Dice::scripted(vec![1]);
        let mut policy = never;
        let report = run_cycle(&ctx, &mut character, &mut dice, &mut policy).unwrap();

        assert_eq!(
            report.outcome,
            CycleOutcome::Served {
                career: "Corporate".to_string(),
                terms: 0,
                exit: ExitReason::Mishap,
            }
        );
        assert!(character.career_history.is_empty());
        assert_eq!(character.long_term.last_exited.as_deref(), Some("Corporate"));
        assert_eq!(character.prior_career_count(), 1);

        let candidates = builder.candidate_careers(&character);
        assert!(!candidates.is_empty());
        assert!(candidates.iter().all(|c| c.key() != "Corporate"));

        // Int 7 gives DM 0; one career already entered
        let scientist = builder.career("Scientist").unwrap();
        assert_eq!(qualification_dm(scientist, &character), Some(-1));
    }
}
