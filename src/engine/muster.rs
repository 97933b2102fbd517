//! Mustering out
//!
//! Benefit rolls earned by terms plus a rank bonus are spent against the
//! career's cash and material columns. Each roll consumes at most one of the
//! character's one-shot benefit DMs.

use crate::career::CareerDefinition;
use crate::character::{Character, MusterOutBenefit};
use crate::dice::Dice;
use crate::engine::context::EngineContext;

/// Extra rolls for rank: 1-2 gives one, 3-4 two, 5 and up three
pub fn rank_bonus(rank: i32) -> i32 {
    match rank {
        r if r >= 5 => 3,
        3 | 4 => 2,
        1 | 2 => 1,
        _ => 0,
    }
}

/// Spend every benefit roll on `career`'s muster-out table
pub fn muster_out(
    ctx: &EngineContext,
    character: &mut Character,
    dice: &mut Dice,
    career: &CareerDefinition,
    rank: i32,
) -> Vec<MusterOutBenefit> {
    let rolls = character.benefit_rolls.max(0) + rank_bonus(rank);
    let table = &career.muster_out;
    let mut cash_rolls = 0;
    let mut results = Vec::new();

    for _ in 0..rolls {
        let dm = if character.benefit_roll_dms.is_empty() {
            0
        } else {
            character.benefit_roll_dms.remove(0)
        };
        let take_cash = cash_rolls < ctx.config.max_cash_rolls && dice.next_bool();
        let roll = (dice.d(6) + dm).clamp(1, 7);
        let row = (roll - 1) as usize;

        let benefit = if take_cash {
            cash_rolls += 1;
            let amount = table.cash.get(row).copied().unwrap_or(0);
            character.cash += amount;
            MusterOutBenefit {
                career: career.career.clone(),
                roll,
                dm,
                cash: Some(amount),
                benefit: None,
            }
        } else {
            MusterOutBenefit {
                career: career.career.clone(),
                roll,
                dm,
                cash: None,
                benefit: table.benefits.get(row).cloned(),
            }
        };
        results.push(benefit);
    }

    character.benefit_rolls = 0;
    character.benefit_roll_dms.clear();
    character.muster_out_benefits.extend(results.iter().cloned());
    character.add_history(
        character.age,
        format!("Mustered out of the {} with {} benefit rolls.", career.display_name(), rolls),
    );

    if character.completed_terms() >= ctx.config.retirement_terms {
        character.long_term.retired = true;
        character.add_history(character.age, "Retired.");
    }

    tracing::debug!("{} mustered out of {}: {} rolls", character.name, career.key(), rolls);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{SpeciesCharacterBuilder, StandardBuilder};
    use crate::character::{Attributes, CareerHistory};
    use crate::core::config::EngineConfig;

    #[test]
    fn test_rank_bonus_bands() {
        let bonuses: Vec<i32> = (0..=7).map(rank_bonus).collect();
        assert_eq!(bonuses, vec![0, 1, 1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_dms_are_one_shot_and_rows_clamp() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Barbarian").unwrap();
        let mut character = Character::new("Test", Attributes::default(), &config);
        character.benefit_rolls = 2;
        character.benefit_roll_dms = vec![4];

        // roll 1: benefit column, 6 + 4 clamps to 7; roll 2: cash, 1 + 0
        let mut dice = Dice::scripted(vec![2, 6, 1, 1]);
        let results = muster_out(&ctx, &mut character, &mut dice, career, 0);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].roll, 7);
        assert_eq!(results[0].dm, 4);
        assert_eq!(results[0].benefit.as_deref(), Some("Two Ship Shares"));
        assert_eq!(results[1].roll, 1);
        assert_eq!(results[1].dm, 0);
        assert_eq!(results[1].cash, Some(0));
        assert_eq!(character.benefit_rolls, 0);
        assert!(character.benefit_roll_dms.is_empty());
        assert_eq!(character.muster_out_benefits.len(), 2);
    }

    #[test]
    fn test_cash_rolls_are_capped() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Corporate").unwrap();
        let mut character = Character::new("Test", Attributes::default(), &config);
        character.benefit_rolls = 5;

        // Coin always says cash
        let mut dice = Dice::scripted(vec![1]);
        let results = muster_out(&ctx, &mut character, &mut dice, career, 0);

        assert_eq!(results.iter().filter(|r| r.cash.is_some()).count(), 3);
        assert_eq!(results.iter().filter(|r| r.benefit.is_some()).count(), 2);
    }

    #[test]
    fn test_long_service_retires() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let career = builder.career("Worker").unwrap();
        let mut character = Character::new("Test", Attributes::default(), &config);
        for term in 1..=5 {
            let mut entry = CareerHistory::new("Citizen", Some("Worker"), 0, 0);
            entry.terms = term;
            character.career_history.push(entry);
        }

        let mut dice = Dice::seeded(8);
        muster_out(&ctx, &mut character, &mut dice, career, 0);
        assert!(character.long_term.retired);
    }
}
