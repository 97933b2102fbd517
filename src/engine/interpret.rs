//! Effect interpreter
//!
//! Every table row in every career is a list of `Effect`s run through
//! `apply_effects`. Dice are drawn only where an effect calls for a choice:
//! a skill with a single candidate is granted without a roll.

use crate::career::{CareerDefinition, Effect, Modifier};
use crate::character::{Character, EnlistmentBonus};
use crate::core::error::Result;
use crate::dice::Dice;
use crate::engine::context::EngineContext;
use crate::skills::{SkillTemplate, SkillTemplateCollection};

/// Where a row is being resolved: the active career, the rank held in it,
/// and the age notes land at
#[derive(Debug, Clone, Copy)]
pub struct Scope<'c> {
    pub career: &'c CareerDefinition,
    pub rank: i32,
    pub age: i32,
}

impl<'c> Scope<'c> {
    /// A scope at rank 0
    pub fn new(career: &'c CareerDefinition, age: i32) -> Self {
        Self { career, rank: 0, age }
    }

    pub fn at_rank(self, rank: i32) -> Self {
        Self { rank, ..self }
    }
}

pub fn apply_effects(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    scope: Scope,
    effects: &[Effect],
) -> Result<()> {
    for effect in effects {
        apply_effect(ctx, character, dice, scope, effect)?;
    }
    Ok(())
}

fn apply_effect(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    scope: Scope,
    effect: &Effect,
) -> Result<()> {
    match effect {
        Effect::Note { text } => {
            let text = text.replace("{name}", &character.name);
            character.add_history(scope.age, text);
        }
        Effect::GainSkill { skill, level } => gain_skill(ctx, character, dice, skill, *level)?,
        Effect::IncreaseSkill { skill } => {
            let candidates = ctx.builder.catalog().resolve(skill)?;
            if let Some(template) = choose_template(dice, candidates) {
                character.skills.increase(&template);
            }
        }
        Effect::AddOneSkill { skills } => {
            add_one_skill(ctx, character, dice, skills)?;
        }
        Effect::IncreaseOneSkill { skills } => {
            increase_one_skill(ctx, character, dice, skills)?;
        }
        Effect::PickSkills { skill, count } => {
            let mut pool: SkillTemplateCollection =
                ctx.builder.catalog().resolve(skill)?.into_iter().collect();
            for _ in 0..*count {
                match pool.pick(dice) {
                    Some(template) => {
                        character.skills.increase(&template);
                    }
                    None => break,
                }
            }
        }
        Effect::AddRandomSkill => {
            add_one_random_skill(ctx, character, dice);
        }
        Effect::ImproveOwnedSkill => {
            character.skills.improve_random(dice);
        }
        Effect::Attribute { attribute, delta } => {
            character.adjust_attribute(*attribute, *delta, ctx.config);
        }
        Effect::Relationship { relation, count } => {
            let count = count.roll(dice);
            character.add_relationship(*relation, count);
        }
        Effect::AdvancementDm { dm } => character.current_term.advancement_dm += dm,
        Effect::NextSurvivalDm { dm } => character.next_term.survival_dm += dm,
        Effect::NextAdvancementDm { dm } => character.next_term.advancement_dm += dm,
        Effect::QualificationDm { dm } => character.next_term.qualification_dm += dm,
        Effect::BenefitRollDm { dm } => character.benefit_roll_dms.push(*dm),
        Effect::BenefitRolls { delta } => {
            character.benefit_rolls = (character.benefit_rolls + delta).max(0);
        }
        Effect::ResetBenefitRolls => character.benefit_rolls = 0,
        Effect::MusterOut { forced } => character.next_term.muster_out = Some(*forced),
        Effect::MustEnroll { career } => character.next_term.must_enroll = Some(career.clone()),
        Effect::Draft => {
            if let Some(key) = ctx.builder.roll_draft(character, dice)? {
                character.add_history(scope.age, format!("Drafted into {}.", key));
                character.next_term.must_enroll = Some(key);
            }
        }
        Effect::Injury { severe } => {
            let age = if *severe {
                scope.age + ctx.config.severe_injury_recovery_years
            } else {
                scope.age
            };
            ctx.builder.injury(character, dice, scope.career, scope.rank, *severe, age)?;
        }
        Effect::LifeEvent => {
            let effects = ctx.builder.life_event(character, dice, scope.age)?;
            apply_effects(ctx, character, dice, scope, &effects)?;
        }
        Effect::UnusualLifeEvent => {
            let effects = ctx.builder.unusual_life_event(character, dice, scope.age)?;
            apply_effects(ctx, character, dice, scope, &effects)?;
        }
        Effect::Mishap => {
            resolve_mishap(ctx, character, dice, scope)?;
        }
        Effect::EnlistmentBonus { career, assignment, dm } => {
            character.long_term.enlistment.push(EnlistmentBonus {
                career: career.clone(),
                assignment: assignment.clone(),
                dm: *dm,
            });
        }
        Effect::Check {
            modifier,
            target,
            success,
            failure,
        } => {
            let dm = match modifier {
                Modifier::None => 0,
                Modifier::Attribute(attribute) => character.modifier(*attribute),
                Modifier::BestSkill(names) => {
                    let names: Vec<&str> = names.iter().map(String::as_str).collect();
                    character.skills.best_skill_level(&names)
                }
            };
            let branch = if dice.roll_high(dm, *target) { success } else { failure };
            apply_effects(ctx, character, dice, scope, branch)?;
        }
        Effect::CoinFlip { heads, tails } => {
            let branch = if dice.next_bool() { heads } else { tails };
            apply_effects(ctx, character, dice, scope, branch)?;
        }
        Effect::OneOf { options } => {
            if let Some(i) = dice.choose_index(options.len()) {
                apply_effects(ctx, character, dice, scope, &options[i])?;
            }
        }
    }
    Ok(())
}

/// Roll the scope career's mishap table and apply the row at the scope's age
pub fn resolve_mishap(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    scope: Scope,
) -> Result<i32> {
    let (roll, row) = scope.career.mishaps.roll(dice);
    tracing::debug!("{} mishap roll {} at age {}", scope.career.key(), roll, scope.age);
    apply_effects(ctx, character, dice, scope, row)?;
    Ok(roll)
}

fn choose_template(dice: &mut Dice, mut candidates: Vec<SkillTemplate>) -> Option<SkillTemplate> {
    if candidates.len() <= 1 {
        return candidates.pop();
    }
    dice.choose(&candidates).cloned()
}

fn gain_skill(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    skill: &str,
    level: i32,
) -> Result<()> {
    let catalog = ctx.builder.catalog();
    if level == 0 {
        // Level 0 keeps a bare name bare: "Drive 0" covers every vehicle
        catalog.check_reference("skill grant", skill)?;
        character.skills.add(&SkillTemplate::parse(skill), 0);
        return Ok(());
    }
    if let Some(template) = choose_template(dice, catalog.resolve(skill)?) {
        character.skills.add(&template, level);
    }
    Ok(())
}

fn candidate_pool(ctx: &EngineContext, skills: &[String]) -> Result<SkillTemplateCollection> {
    let mut pool = SkillTemplateCollection::new();
    for skill in skills {
        pool.add_range(ctx.builder.catalog().resolve(skill)?);
    }
    Ok(pool)
}

/// Grant one of `skills` at level 1, skipping any already held at 1 or better.
///
/// Returns false, leaving the sheet untouched, when every candidate is
/// already held.
pub fn add_one_skill(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    skills: &[String],
) -> Result<bool> {
    let mut pool = candidate_pool(ctx, skills)?;
    pool.remove_overlap(&character.skills, 1);
    match pool.choose(dice) {
        Some(template) => {
            character.skills.add(&template, 1);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Raise one of `skills` by a level and return which one
pub fn increase_one_skill(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    skills: &[String],
) -> Result<Option<SkillTemplate>> {
    let pool = candidate_pool(ctx, skills)?;
    let chosen = pool.choose(dice);
    if let Some(template) = &chosen {
        character.skills.increase(template);
    }
    Ok(chosen)
}

/// Grant any skill from the builder's random pool at level 1
pub fn add_one_random_skill(ctx: &EngineContext, character: &mut Character, dice: &mut Dice) -> bool {
    let mut pool: SkillTemplateCollection = ctx.builder.random_skills(character).into_iter().collect();
    pool.remove_overlap(&character.skills, 1);
    match pool.choose(dice) {
        Some(template) => {
            character.skills.add(&template, 1);
            true
        }
        None => false,
    }
}
