//! Career history and the narrative log

use serde::{Deserialize, Serialize};

/// One completed term in a career/assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerHistory {
    pub career: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment: Option<String>,
    pub rank: i32,
    pub commission_rank: i32,
    /// Term number within this career block, starting at 1
    pub terms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl CareerHistory {
    pub fn new(career: &str, assignment: Option<&str>, rank: i32, commission_rank: i32) -> Self {
        Self {
            career: career.to_string(),
            assignment: assignment.map(str::to_string),
            rank,
            commission_rank,
            terms: 0,
            title: None,
        }
    }

    /// "Career (Assignment)", or the career alone
    pub fn long_name(&self) -> String {
        match &self.assignment {
            Some(assignment) => format!("{} ({})", self.career, assignment),
            None => self.career.clone(),
        }
    }

    /// The assignment if there is one, else the career
    pub fn short_name(&self) -> &str {
        self.assignment.as_deref().unwrap_or(&self.career)
    }
}

/// A dated line in the character's story
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub age: i32,
    pub text: String,
}

/// A recorded injury with what the employer paid toward treatment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjuryRecord {
    pub age: i32,
    pub severe: bool,
    pub description: String,
    /// Percentage of medical costs covered (0, 50, 75 or 100)
    pub medical_coverage: u8,
}

/// One muster-out roll and what it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusterOutBenefit {
    pub career: String,
    pub roll: i32,
    pub dm: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        let entry = CareerHistory::new("Navy", Some("Flight"), 2, 0);
        assert_eq!(entry.long_name(), "Navy (Flight)");
        assert_eq!(entry.short_name(), "Flight");

        let bare = CareerHistory::new("Prisoner", None, 0, 0);
        assert_eq!(bare.long_name(), "Prisoner");
        assert_eq!(bare.short_name(), "Prisoner");
    }
}
