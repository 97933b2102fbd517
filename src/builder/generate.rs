use crate::character::{Attributes, Character};
use crate::core::config::GenerationOptions;
use crate::core::error::Result;
use crate::dice::Dice;
use crate::engine::{run_cycle, EngineContext, TermLimitPolicy};

/// Generate a full life: roll attributes, then run career cycles until the
/// term or age limit is reached or no career will take the character.
pub fn generate_character(ctx: &EngineContext, dice: &mut Dice, options: &GenerationOptions) -> Result<Character> {
    let attributes = Attributes::roll(dice);
    let mut character = Character::new(options.name.clone(), attributes, ctx.config);
    let mut policy = TermLimitPolicy::from_options(options);

    while character.completed_terms() < options.max_terms && character.age < options.max_age {
        let report = run_cycle(ctx, &mut character, dice, &mut policy)?;
        if report.is_exhausted() {
            break;
        }
    }

    ctx.builder.fixup_skills(&mut character, dice);
    tracing::info!(
        "Generated {}: {} terms, age {}",
        character.name,
        character.completed_terms(),
        character.age
    );
    Ok(character)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StandardBuilder;
    use crate::core::config::EngineConfig;

    #[test]
    fn test_generation_respects_limits() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let options = GenerationOptions::default();

        for seed in 0..25 {
            let mut dice = Dice::seeded(seed);
            let character = generate_character(&ctx, &mut dice, &options).unwrap();
            assert_eq!(character.benefit_rolls, 0, "seed {}", seed);
            assert!(character.age >= config.starting_age);

            // Term numbers restart at 1 with each career block
            let mut previous: Option<&crate::character::CareerHistory> = None;
            for entry in &character.career_history {
                match previous {
                    Some(prev) if entry.terms > 1 => {
                        assert_eq!(entry.terms, prev.terms + 1, "seed {}", seed);
                        assert_eq!(entry.short_name(), prev.short_name(), "seed {}", seed);
                    }
                    _ => assert_eq!(entry.terms, 1, "seed {}", seed),
                }
                previous = Some(entry);
            }
        }
    }

    #[test]
    fn test_same_seed_same_character() {
        let builder = StandardBuilder::new().unwrap();
        let config = EngineConfig::default();
        let ctx = EngineContext::new(&builder, &config);
        let options = GenerationOptions::default();

        let a = generate_character(&ctx, &mut Dice::seeded(42), &options).unwrap();
        let b = generate_character(&ctx, &mut Dice::seeded(42), &options).unwrap();
        assert_eq!(a, b);
    }
}
