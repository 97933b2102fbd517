//! Careers as data
//!
//! A career is a `CareerDefinition`: roll checks, effect tables, ranks and
//! muster-out columns. The built-in library and TOML files produce the same
//! type, and both pass through the same validation before a run starts.

pub mod definition;
pub mod effect;
pub mod library;
pub mod loader;
pub mod table;

pub use definition::{
    CareerDefinition, CommissionRule, MedicalPlan, MusterOutTable, Qualification, RankEntry, RollCheck,
};
pub use effect::{Amount, Effect, Modifier};
pub use library::standard_careers;
pub use loader::{load_careers, parse_careers, validate_careers};
pub use table::{RollTable, TableDie};
