//! Lifepath - Entry Point
//!
//! Generates one or more characters from a seed and prints them as JSON or
//! as a plain-text sheet.

use std::path::PathBuf;

use clap::Parser;
use rayon::prelude::*;

use lifepath::builder::{generate_character, StandardBuilder};
use lifepath::career::parse_careers;
use lifepath::character::Character;
use lifepath::core::{EngineConfig, GenerationOptions, Result};
use lifepath::dice::Dice;
use lifepath::engine::EngineContext;

/// Lifepath - career term character generator
#[derive(Parser, Debug)]
#[command(name = "lifepath")]
#[command(about = "Generate characters by running them through career terms")]
struct Args {
    /// Random seed; character i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Number of characters to generate
    #[arg(long, default_value_t = 1)]
    count: usize,

    /// Name written on the sheet
    #[arg(long, default_value = "Traveller")]
    name: String,

    /// Terms served in a career before choosing to leave
    #[arg(long, default_value_t = 3)]
    terms_per_career: u32,

    /// Maximum completed terms over a whole life
    #[arg(long, default_value_t = 7)]
    max_terms: usize,

    /// Output format: json or text
    #[arg(long, default_value = "json", value_parser = ["json", "text"])]
    format: String,

    /// Engine config TOML; missing keys keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra careers TOML, added to the built-in careers
    #[arg(long)]
    careers: Option<PathBuf>,

    /// Debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(if args.verbose { "lifepath=debug" } else { "lifepath=info" })
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Lifepath starting with seed {}", seed);

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let builder = match &args.careers {
        Some(path) => {
            let extra = parse_careers(&std::fs::read_to_string(path)?)?;
            tracing::info!("Loaded {} careers from {}", extra.len(), path.display());
            StandardBuilder::with_extra_careers(extra)?
        }
        None => StandardBuilder::new()?,
    };
    let ctx = EngineContext::new(&builder, &config);

    let characters = (0..args.count)
        .into_par_iter()
        .map(|i| {
            let options = GenerationOptions {
                name: if args.count > 1 {
                    format!("{} {}", args.name, i + 1)
                } else {
                    args.name.clone()
                },
                terms_per_career: args.terms_per_career,
                max_terms: args.max_terms,
                ..GenerationOptions::default()
            };
            let mut dice = Dice::seeded(seed.wrapping_add(i as u64));
            generate_character(&ctx, &mut dice, &options)
        })
        .collect::<Result<Vec<Character>>>()?;

    match args.format.as_str() {
        "text" => {
            for character in &characters {
                println!("{}", character);
            }
        }
        _ => {
            let json = match characters.as_slice() {
                [single] => serde_json::to_string_pretty(single)?,
                all => serde_json::to_string_pretty(all)?,
            };
            println!("{}", json);
        }
    }

    tracing::info!("Generated {} characters", characters.len());
    Ok(())
}
