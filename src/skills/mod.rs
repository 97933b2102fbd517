//! Skills and specializations
//!
//! A skill is a name with an optional specialization ("Pilot (Small Craft)").
//! Careers grant skills through transient template collections that are
//! filtered against what the character already knows, then rolled on.

pub mod catalog;
pub mod collection;
pub mod sheet;
pub mod template;

pub use catalog::SkillCatalog;
pub use collection::SkillTemplateCollection;
pub use sheet::{Skill, SkillSet};
pub use template::SkillTemplate;
