use std::fmt;

use serde::{Deserialize, Serialize};

/// A (skill, specialization) pair before it is applied to a character
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillTemplate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

impl SkillTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: None,
        }
    }

    pub fn with_specialty(name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialty: Some(specialty.into()),
        }
    }

    /// Parse table notation: `"Name"` or `"Name|Specialty"`
    pub fn parse(text: &str) -> Self {
        match text.split_once('|') {
            Some((name, specialty)) => Self::with_specialty(name.trim(), specialty.trim()),
            None => Self::new(text.trim()),
        }
    }

    pub fn matches(&self, name: &str, specialty: Option<&str>) -> bool {
        self.name == name && self.specialty.as_deref() == specialty
    }
}

impl fmt::Display for SkillTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.specialty {
            Some(specialty) => write!(f, "{} ({})", self.name, specialty),
            None => f.write_str(&self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_specialty_notation() {
        assert_eq!(
            SkillTemplate::parse("Pilot|Small Craft"),
            SkillTemplate::with_specialty("Pilot", "Small Craft")
        );
        assert_eq!(SkillTemplate::parse("Admin"), SkillTemplate::new("Admin"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SkillTemplate::with_specialty("Art", "Performer").to_string(), "Art (Performer)");
        assert_eq!(SkillTemplate::new("Medic").to_string(), "Medic");
    }
}
