//! Built-in careers for the standard human builder
//!
//! Each file holds one career's shared tables plus its assignments. The
//! content is deliberately a representative subset: enough careers to
//! exercise every engine path (automatic entry, forced enrollment,
//! commissions, rank carryover, medical plans).

mod citizen;
mod drifter;
mod navy;
mod prisoner;
mod scholar;

use crate::career::definition::{CareerDefinition, RankEntry};
use crate::career::effect::Effect;

/// All built-in careers in catalog order
pub fn standard_careers() -> Vec<CareerDefinition> {
    let mut careers = Vec::new();
    careers.extend(citizen::careers());
    careers.extend(scholar::careers());
    careers.extend(navy::careers());
    careers.extend(drifter::careers());
    careers.push(prisoner::career());
    careers
}

fn skills(names: [&str; 6]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn rank(rank: i32, title: Option<&str>, bonus: Vec<Effect>) -> RankEntry {
    RankEntry {
        rank,
        title: title.map(str::to_string),
        bonus,
    }
}
