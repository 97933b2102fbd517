//! Integration tests for careers loaded from TOML files
//!
//! A loaded career must validate on its own, join the built-in set without
//! clashing, and be reachable by the engine like any built-in career.

use std::path::PathBuf;

use lifepath::builder::{SpeciesCharacterBuilder, StandardBuilder};
use lifepath::career::{load_careers, parse_careers, Qualification};
use lifepath::character::{Attributes, Character};
use lifepath::core::{ConfigurationError, EngineConfig, LifepathError};
use lifepath::dice::Dice;
use lifepath::engine::{run_cycle, CycleOutcome, EngineContext, TermLimitPolicy};
use lifepath::skills::SkillCatalog;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn test_load_career_file() {
    let careers = load_careers(&fixture("hermit.toml"), &SkillCatalog::standard()).unwrap();
    assert_eq!(careers.len(), 1);
    assert_eq!(careers[0].key(), "Hermit");
    assert!(matches!(careers[0].qualification, Qualification::Roll { target: 6, .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_careers(&fixture("no_such_file.toml"), &SkillCatalog::standard());
    assert!(matches!(result, Err(LifepathError::Io(_))));
}

#[test]
fn test_loaded_career_joins_builder() {
    let extra = load_careers(&fixture("hermit.toml"), &SkillCatalog::standard()).unwrap();
    let builder = StandardBuilder::with_extra_careers(extra).unwrap();
    assert!(builder.career("Hermit").is_some());
    assert!(builder.career("Corporate").is_some());
}

#[test]
fn test_loaded_career_is_served() {
    let extra = load_careers(&fixture("hermit.toml"), &SkillCatalog::standard()).unwrap();
    let builder = StandardBuilder::with_extra_careers(extra).unwrap();
    let config = EngineConfig::default();
    let ctx = EngineContext::new(&builder, &config);

    let mut character = Character::new("Test", Attributes::default(), &config);
    character.next_term.must_enroll = Some("Hermit".to_string());
    let mut dice = Dice::seeded(12);
    let mut policy = TermLimitPolicy::new(2, 7, 46);

    let report = run_cycle(&ctx, &mut character, &mut dice, &mut policy).unwrap();
    match report.outcome {
        CycleOutcome::Served { career, .. } => assert_eq!(career, "Hermit"),
        CycleOutcome::Exhausted => panic!("forced enrollment cannot be exhausted"),
    }
    assert!(character.skills.get("Survival", None).is_some());
}

#[test]
fn test_duplicate_of_builtin_rejected() {
    let text = std::fs::read_to_string(fixture("hermit.toml"))
        .unwrap()
        .replace("career = \"Hermit\"", "career = \"Hermit\"\nassignment = \"Corporate\"");
    let extra = parse_careers(&text).unwrap();
    assert!(matches!(
        StandardBuilder::with_extra_careers(extra),
        Err(LifepathError::Configuration(ConfigurationError::DuplicateCareer(_)))
    ));
}
