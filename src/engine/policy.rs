//! When a character chooses to stay in a career
//!
//! The policy is only consulted when nothing in the term forced the
//! decision: a forced enrollment, a blocked muster-out or a forced exit
//! all take precedence.

use crate::career::CareerDefinition;
use crate::character::Character;
use crate::core::config::GenerationOptions;

pub trait ContinuationPolicy {
    /// `terms_in_career` counts the term just completed
    fn should_continue(&mut self, character: &Character, career: &CareerDefinition, terms_in_career: u32) -> bool;
}

impl<F> ContinuationPolicy for F
where
    F: FnMut(&Character, &CareerDefinition, u32) -> bool,
{
    fn should_continue(&mut self, character: &Character, career: &CareerDefinition, terms_in_career: u32) -> bool {
        self(character, career, terms_in_career)
    }
}

/// Serve a fixed number of terms per career within lifetime limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermLimitPolicy {
    pub terms_per_career: u32,
    pub max_terms: usize,
    pub max_age: i32,
}

impl TermLimitPolicy {
    pub fn new(terms_per_career: u32, max_terms: usize, max_age: i32) -> Self {
        Self {
            terms_per_career,
            max_terms,
            max_age,
        }
    }

    pub fn from_options(options: &GenerationOptions) -> Self {
        Self {
            terms_per_career: options.terms_per_career,
            max_terms: options.max_terms,
            max_age: options.max_age,
        }
    }
}

impl ContinuationPolicy for TermLimitPolicy {
    fn should_continue(&mut self, character: &Character, _career: &CareerDefinition, terms_in_career: u32) -> bool {
        terms_in_career < self.terms_per_career
            && character.completed_terms() < self.max_terms
            && character.age < self.max_age
    }
}
