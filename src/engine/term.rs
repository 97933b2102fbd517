//! The steps of a single career block: entry, then one pass per term
//!
//! Each step is a free function over the character and the active career so
//! the cycle state machine can call them one state at a time.

use crate::career::CareerDefinition;
use crate::character::{CareerHistory, Character, TermBenefits};
use crate::core::error::Result;
use crate::core::types::Attribute;
use crate::dice::Dice;
use crate::engine::context::EngineContext;
use crate::engine::interpret::{apply_effects, resolve_mishap, Scope};
use crate::engine::policy::ContinuationPolicy;
use crate::skills::{SkillTemplate, SkillTemplateCollection};

/// Did the character survive the term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOutcome {
    Survived,
    Mishap,
}

/// What happens after a recorded term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    MusterOut { forced: bool },
    Transfer(String),
}

/// The career a character is serving in and where they stand in it
#[derive(Debug, Clone)]
pub struct ActiveCareer<'c> {
    pub career: &'c CareerDefinition,
    pub rank: i32,
    pub commission_rank: i32,
    /// Terms served in this block so far
    pub terms: u32,
    pub title: Option<String>,
}

impl<'c> ActiveCareer<'c> {
    /// Start a block, resuming the last rank held in this career if it carries over
    pub fn start(career: &'c CareerDefinition, character: &Character) -> Self {
        let previous = career
            .rank_carryover
            .then(|| character.career_history.iter().rev().find(|h| h.career == career.career))
            .flatten();

        match previous {
            Some(entry) => Self {
                career,
                rank: entry.rank,
                commission_rank: entry.commission_rank,
                terms: 0,
                title: entry.title.clone(),
            },
            None => Self {
                career,
                rank: 0,
                commission_rank: 0,
                terms: 0,
                title: career.rank_entry(0).and_then(|r| r.title.clone()),
            },
        }
    }

    fn scope(&self, age: i32) -> Scope<'c> {
        Scope::new(self.career, age).at_rank(self.rank)
    }
}

/// Enter a career block and run basic training
pub fn enter_career<'c>(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    career: &'c CareerDefinition,
) -> Result<ActiveCareer<'c>> {
    let active = ActiveCareer::start(career, character);
    character.current_term = TermBenefits::default();
    character.add_history(character.age, format!("Became a {}.", career.display_name()));

    // Bare names stay bare at level 0
    let mut training: SkillTemplateCollection =
        career.basic_training.iter().map(|s| SkillTemplate::parse(s)).collect();
    ctx.builder.pre_career_events(character, dice, career, &mut training);

    if character.long_term.careers_entered == 0 {
        for template in training.iter() {
            character.skills.add(template, 0);
        }
    } else if let Some(template) = training.choose(dice) {
        character.skills.add(&template, 0);
        character.add_history(character.age, format!("Basic training in {}.", template));
    }
    character.long_term.careers_entered += 1;

    tracing::debug!(
        "{} entered {} at rank {}",
        character.name,
        career.key(),
        active.rank
    );
    Ok(active)
}

/// Roll on one of the career's skill tables
pub fn roll_skill_table(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    active: &ActiveCareer,
) -> Result<()> {
    let career = active.career;
    let tables = career.skill_tables(character.attribute(Attribute::Education));
    let Some(index) = dice.choose_index(tables.len()) else {
        return Ok(());
    };
    let (name, table) = tables[index];
    let (roll, row) = table.roll(dice);
    tracing::debug!("{} rolled {} on {} {}", character.name, roll, career.key(), name);
    apply_effects(ctx, character, dice, active.scope(character.age), row)
}

/// Begin a term: drain pending modifiers, take the term's skill roll, then roll survival.
///
/// On a failed survival roll the mishap is resolved here, the term's years
/// pass, and nothing is recorded.
pub fn serve_term(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    active: &mut ActiveCareer,
) -> Result<TermOutcome> {
    active.terms += 1;
    let next = std::mem::take(&mut character.next_term);
    character.current_term = TermBenefits::carried_from(&next, character.current_term.commission_attempted);

    roll_skill_table(ctx, character, dice, active)?;

    let survival = active.career.survival;
    let dm = character.modifier(survival.attribute) + character.current_term.survival_dm;
    if dice.roll_high(dm, survival.target) {
        return Ok(TermOutcome::Survived);
    }

    let age = character.age + dice.d(ctx.config.injury_age_die);
    tracing::debug!("{} failed survival in {} term {}", character.name, active.career.key(), active.terms);
    resolve_mishap(ctx, character, dice, active.scope(age))?;
    character.age += ctx.config.term_years;
    character.add_history(
        age,
        format!("Forced to leave the {} after a mishap.", active.career.display_name()),
    );
    Ok(TermOutcome::Mishap)
}

/// Roll and apply the term's event. Returns the 2d6 result.
pub fn resolve_event(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    active: &ActiveCareer,
) -> Result<i32> {
    let career = active.career;
    let (roll, row) = career.events.roll(dice);
    let age = character.age + dice.d(ctx.config.injury_age_die);
    tracing::debug!("{} event roll {} in {}", character.name, roll, career.key());

    if roll == 2 {
        resolve_mishap(ctx, character, dice, active.scope(age))?;
        character.next_term.muster_out = Some(false);
    }
    apply_effects(ctx, character, dice, active.scope(age), row)?;
    if roll == 12 {
        character.current_term.advancement_dm += ctx.config.overwhelming_advancement_dm;
    }
    Ok(roll)
}

/// Roll for promotion. Returns true when the character advanced a rank.
pub fn advance(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    active: &mut ActiveCareer,
) -> Result<bool> {
    let career = active.career;
    let Some(check) = career.advancement else {
        return Ok(false);
    };

    let natural = dice.d_n(2, 6);
    let dm = character.modifier(check.attribute) + character.current_term.advancement_dm;
    let promoted = natural + dm >= check.target;

    if promoted {
        active.rank += 1;
        let entry = career.rank_entry(active.rank);
        if let Some(title) = entry.and_then(|r| r.title.clone()) {
            active.title = Some(title);
        }
        let text = match &active.title {
            Some(title) => format!("Promoted to rank {}, {}.", active.rank, title),
            None => format!("Promoted to rank {}.", active.rank),
        };
        character.add_history(character.age, text);
        if let Some(entry) = entry {
            apply_effects(ctx, character, dice, active.scope(character.age), &entry.bonus)?;
        }
        roll_skill_table(ctx, character, dice, active)?;

        if let Some(rule) = &career.commission {
            if active.commission_rank == 0
                && active.rank >= rule.min_rank
                && !character.current_term.commission_attempted
            {
                character.current_term.commission_attempted = true;
                let dm = character.modifier(rule.check.attribute);
                if dice.roll_high(dm, rule.check.target) {
                    active.commission_rank = 1;
                    if rule.title.is_some() {
                        active.title = rule.title.clone();
                    }
                    character.add_history(character.age, format!("Commissioned in the {}.", career.career));
                }
            }
        }
    }

    if natural <= active.terms as i32 {
        character.next_term.muster_out.get_or_insert(true);
    } else if natural == 12 {
        character.next_term.muster_out.get_or_insert(false);
    }

    tracing::debug!(
        "{} advancement natural {} dm {} -> {}",
        character.name,
        natural,
        dm,
        if promoted { "promoted" } else { "held" }
    );
    Ok(promoted)
}

/// Close out a survived term: one benefit roll, the term's years, one history entry
pub fn record_term(ctx: &EngineContext, character: &mut Character, active: &ActiveCareer) {
    character.benefit_rolls += 1;
    character.age += ctx.config.term_years;
    let career = active.career;
    let mut entry = CareerHistory::new(
        &career.career,
        career.assignment.as_deref(),
        active.rank,
        active.commission_rank,
    );
    entry.terms = active.terms;
    entry.title = active.title.clone();
    character.career_history.push(entry);
}

/// Decide what follows a recorded term; overrides win over the policy
pub fn continuation(
    character: &Character,
    active: &ActiveCareer,
    policy: &mut dyn ContinuationPolicy,
) -> Continuation {
    if let Some(target) = &character.next_term.must_enroll {
        return Continuation::Transfer(target.clone());
    }
    match character.next_term.muster_out {
        Some(false) => Continuation::Continue,
        Some(true) => Continuation::MusterOut { forced: true },
        None if policy.should_continue(character, active.career, active.terms) => Continuation::Continue,
        None => Continuation::MusterOut { forced: false },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{SpeciesCharacterBuilder, StandardBuilder};
    use crate::career::{Effect, RollTable};
    use crate::character::Attributes;
    use crate::core::config::EngineConfig;

    fn setup() -> (StandardBuilder, EngineConfig) {
        (StandardBuilder::new().unwrap(), EngineConfig::default())
    }

    fn fresh(config: &EngineConfig) -> Character {
        Character::new("Test", Attributes::default(), config)
    }

    #[test]
    fn test_first_career_trains_all_six_at_zero() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Corporate").unwrap();
        let mut character = fresh(&config);
        let mut dice = Dice::seeded(2);

        enter_career(&ctx, &mut character, &mut dice, career).unwrap();

        assert_eq!(character.skills.len(), 6);
        assert!(character.skills.iter().all(|s| s.level == 0 && s.specialty.is_none()));
        assert_eq!(character.long_term.careers_entered, 1);
        assert_eq!(dice.draws(), 0);
    }

    #[test]
    fn test_later_career_trains_one() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Line/Crew").unwrap();
        let mut character = fresh(&config);
        character.long_term.careers_entered = 1;
        let mut dice = Dice::scripted(vec![2]);

        enter_career(&ctx, &mut character, &mut dice, career).unwrap();

        assert_eq!(character.skills.len(), 1);
        assert_eq!(character.skills.level_of(&SkillTemplate::new("Vacc Suit")), Some(0));
        assert_eq!(dice.draws(), 1);
    }

    #[test]
    fn test_rank_carryover_only_when_flagged() {
        let (builder, config) = setup();
        let mut character = fresh(&config);
        let mut entry = CareerHistory::new("Scholar", Some("Scientist"), 3, 0);
        entry.terms = 2;
        character.career_history.push(entry);
        let mut entry = CareerHistory::new("Navy", Some("Flight"), 2, 1);
        entry.terms = 1;
        character.career_history.push(entry);

        let scholar = builder.career("Physician").unwrap();
        assert_eq!(ActiveCareer::start(scholar, &character).rank, 3);

        let navy = builder.career("Flight").unwrap();
        let active = ActiveCareer::start(navy, &character);
        assert_eq!(active.rank, 0);
        assert_eq!(active.commission_rank, 0);
    }

    #[test]
    fn test_event_two_resolves_mishap_and_blocks_muster_out() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let mut career = builder.career("Worker").unwrap().clone();
        career.mishaps = RollTable::d6((1..=6).map(|n| vec![Effect::note(&format!("mishap {}", n))]).collect());
        let mut character = fresh(&config);
        let active = ActiveCareer::start(&career, &character);

        // event 1+1, age die 2, mishap row 3
        let mut dice = Dice::scripted(vec![1, 1, 2, 3]);
        let roll = resolve_event(&ctx, &mut character, &mut dice, &active).unwrap();

        assert_eq!(roll, 2);
        assert_eq!(character.next_term.muster_out, Some(false));
        assert_eq!(character.history.last().map(|h| h.text.as_str()), Some("mishap 3"));
        assert_eq!(character.history.last().map(|h| h.age), Some(20));
        assert_eq!(dice.draws(), 4);
    }

    #[test]
    fn test_event_twelve_guarantees_promotion() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let mut career = builder.career("Worker").unwrap().clone();
        career.events = RollTable::two_d6((2..=12).map(|n| vec![Effect::note(&format!("event {}", n))]).collect());
        let mut character = fresh(&config);
        let mut active = ActiveCareer::start(&career, &character);
        active.terms = 1;

        // event 6+6, age die, then a natural 3 on the advancement roll
        let mut dice = Dice::scripted(vec![6, 6, 1, 1, 2]);
        let roll = resolve_event(&ctx, &mut character, &mut dice, &active).unwrap();

        assert_eq!(roll, 12);
        assert_eq!(character.current_term.advancement_dm, config.overwhelming_advancement_dm);
        assert!(advance(&ctx, &mut character, &mut dice, &mut active).unwrap());
        assert_eq!(active.rank, 1);
    }

    #[test]
    fn test_injury_coverage_uses_current_rank() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let mut character = fresh(&config);
        let mut entry = CareerHistory::new("Navy", Some("Flight"), 5, 0);
        entry.terms = 1;
        character.career_history.push(entry);

        let career = builder.career("Corporate").unwrap();
        let active = ActiveCareer::start(career, &character);
        assert_eq!(active.rank, 0);

        // injury row 6 draws nothing more; medical 1+1 at rank 0
        let mut dice = Dice::scripted(vec![6, 1, 1]);
        let injury = [Effect::Injury { severe: false }];
        apply_effects(&ctx, &mut character, &mut dice, active.scope(22), &injury).unwrap();

        assert_eq!(character.injuries.len(), 1);
        assert_eq!(character.injuries[0].medical_coverage, 0);
        assert_eq!(dice.draws(), 3);
    }

    #[test]
    fn test_low_natural_advancement_forces_exit() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Wanderer").unwrap();
        let mut character = fresh(&config);
        let mut active = ActiveCareer::start(career, &character);
        active.terms = 2;

        let mut dice = Dice::scripted(vec![1, 1]);
        assert!(!advance(&ctx, &mut character, &mut dice, &mut active).unwrap());
        assert_eq!(character.next_term.muster_out, Some(true));
        assert_eq!(active.rank, 0);
    }

    #[test]
    fn test_promotion_offers_commission_once() {
        let (builder, config) = setup();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Line/Crew").unwrap();
        let mut character = fresh(&config);
        let mut active = ActiveCareer::start(career, &character);
        active.rank = 1;
        active.terms = 1;

        // advancement 6+5, skill table 1 row 1, commission 4+4
        let mut dice = Dice::scripted(vec![6, 5, 1, 1, 4, 4]);
        assert!(advance(&ctx, &mut character, &mut dice, &mut active).unwrap());

        assert_eq!(active.rank, 2);
        assert_eq!(active.commission_rank, 1);
        assert_eq!(active.title.as_deref(), Some("Ensign"));
        assert!(character.current_term.commission_attempted);
        assert_eq!(character.attribute(Attribute::Strength), 8);
        assert_eq!(character.skills.level_of(&SkillTemplate::new("Vacc Suit")), Some(1));
        assert_eq!(character.next_term.muster_out, None);
        assert_eq!(dice.draws(), 6);
    }

    #[test]
    fn test_overrides_beat_policy() {
        let (builder, config) = setup();
        let career = builder.career("Corporate").unwrap();
        let mut character = fresh(&config);
        let active = ActiveCareer::start(career, &character);
        let mut always = |_: &Character, _: &CareerDefinition, _: u32| true;

        assert_eq!(continuation(&character, &active, &mut always), Continuation::Continue);
        character.next_term.muster_out = Some(true);
        assert_eq!(
            continuation(&character, &active, &mut always),
            Continuation::MusterOut { forced: true }
        );
        character.next_term.must_enroll = Some("Prisoner".to_string());
        assert_eq!(
            continuation(&character, &active, &mut always),
            Continuation::Transfer("Prisoner".to_string())
        );
    }
}
