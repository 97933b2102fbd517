use serde::{Deserialize, Serialize};

use crate::career::effect::Effect;
use crate::core::error::ConfigurationError;
use crate::dice::Dice;

/// The die a table is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableDie {
    #[serde(rename = "1d6")]
    D6,
    #[serde(rename = "2d6")]
    TwoD6,
}

impl TableDie {
    pub fn min(self) -> i32 {
        match self {
            TableDie::D6 => 1,
            TableDie::TwoD6 => 2,
        }
    }

    pub fn max(self) -> i32 {
        match self {
            TableDie::D6 => 6,
            TableDie::TwoD6 => 12,
        }
    }

    pub fn row_count(self) -> usize {
        (self.max() - self.min() + 1) as usize
    }

    pub fn roll(self, dice: &mut Dice) -> i32 {
        match self {
            TableDie::D6 => dice.d(6),
            TableDie::TwoD6 => dice.d_n(2, 6),
        }
    }
}

/// A table of effect rows keyed by a die roll
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollTable {
    pub die: TableDie,
    pub rows: Vec<Vec<Effect>>,
}

impl RollTable {
    pub fn d6(rows: Vec<Vec<Effect>>) -> Self {
        Self { die: TableDie::D6, rows }
    }

    pub fn two_d6(rows: Vec<Vec<Effect>>) -> Self {
        Self { die: TableDie::TwoD6, rows }
    }

    /// A 1d6 table where each row is a single effect
    pub fn d6_single(rows: [Effect; 6]) -> Self {
        Self::d6(rows.into_iter().map(|e| vec![e]).collect())
    }

    pub fn validate(&self, table: &str) -> Result<(), ConfigurationError> {
        if self.rows.len() != self.die.row_count() {
            return Err(ConfigurationError::MalformedRollTable {
                table: table.to_string(),
                reason: format!(
                    "{} rows for a {}..={} table",
                    self.rows.len(),
                    self.die.min(),
                    self.die.max()
                ),
            });
        }
        Ok(())
    }

    /// Effects for a result; results outside the die range clamp to the ends
    pub fn row(&self, roll: i32) -> &[Effect] {
        let clamped = roll.clamp(self.die.min(), self.die.max());
        self.rows
            .get((clamped - self.die.min()) as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Roll the table's die and return the result with its row
    pub fn roll(&self, dice: &mut Dice) -> (i32, &[Effect]) {
        let roll = self.die.roll(dice);
        (roll, self.row(roll))
    }

    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.rows.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_d6_rows_offset() {
        let rows = (2..=12).map(|n| vec![Effect::note(&n.to_string())]).collect();
        let table = RollTable::two_d6(rows);
        assert!(table.validate("events").is_ok());
        assert_eq!(table.row(2), &[Effect::note("2")]);
        assert_eq!(table.row(12), &[Effect::note("12")]);
    }

    #[test]
    fn test_wrong_row_count_rejected() {
        let table = RollTable::d6(vec![vec![]; 5]);
        assert!(matches!(
            table.validate("short"),
            Err(ConfigurationError::MalformedRollTable { .. })
        ));
    }

    #[test]
    fn test_roll_uses_table_die() {
        let table = RollTable::two_d6(vec![vec![]; 11]);
        let mut dice = Dice::scripted(vec![3, 4]);
        let (roll, _) = table.roll(&mut dice);
        assert_eq!(roll, 7);
        assert_eq!(dice.draws(), 2);
    }
}
