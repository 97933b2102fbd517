//! Core type definitions used throughout the codebase

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six characteristics every character sheet carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Endurance,
    Intellect,
    Education,
    SocialStanding,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Endurance,
        Attribute::Intellect,
        Attribute::Education,
        Attribute::SocialStanding,
    ];

    /// The physical characteristics injuries are taken from
    pub const PHYSICAL: [Attribute; 3] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Endurance,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Dexterity => "Dex",
            Attribute::Endurance => "End",
            Attribute::Intellect => "Int",
            Attribute::Education => "Edu",
            Attribute::SocialStanding => "Soc",
        }
    }

    pub fn from_abbreviation(abbr: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.abbreviation().eq_ignore_ascii_case(abbr))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// The four kinds of people a character collects over a career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    Contact,
    Ally,
    Enemy,
    Rival,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviation_round_trip() {
        for attr in Attribute::ALL {
            assert_eq!(Attribute::from_abbreviation(attr.abbreviation()), Some(attr));
        }
        assert_eq!(Attribute::from_abbreviation("edu"), Some(Attribute::Education));
        assert_eq!(Attribute::from_abbreviation("Psi"), None);
    }
}
