//! Term orchestrator
//!
//! Drives a character through qualification, terms of service and mustering
//! out. The engine owns no state of its own: the builder and config arrive
//! in an `EngineContext`, the dice are supplied by the caller, and every
//! change lands on the `Character`.

pub mod context;
pub mod cycle;
pub mod interpret;
pub mod medical;
pub mod muster;
pub mod policy;
pub mod qualify;
pub mod term;

pub use context::EngineContext;
pub use cycle::{run_cycle, CareerState, CycleOutcome, CycleReport, ExitReason};
pub use interpret::{add_one_random_skill, add_one_skill, apply_effects, increase_one_skill, Scope};
pub use medical::medical_coverage;
pub use policy::{ContinuationPolicy, TermLimitPolicy};
pub use qualify::{qualify, QualifyOutcome};
pub use term::TermOutcome;
