//! Cumulative frequency tables
//!
//! A table maps a single die range (d36, d216, ...) onto weighted entries.
//! Entry `i` wins when the roll is `<= cumulative[i]` and greater than every
//! earlier cumulative value.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigurationError;
use crate::dice::Dice;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable<T> {
    name: String,
    die_range: u32,
    entries: Vec<(u32, T)>,
}

impl<T> FrequencyTable<T> {
    /// Build from `(cumulative frequency, value)` pairs.
    ///
    /// Cumulative values must be strictly increasing, start at 1 or more and
    /// end exactly on `die_range`.
    pub fn new(
        name: impl Into<String>,
        die_range: u32,
        entries: Vec<(u32, T)>,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        let malformed = |reason: String| ConfigurationError::MalformedFrequencyTable {
            table: name.clone(),
            reason,
        };

        if entries.is_empty() {
            return Err(malformed("table has no entries".into()));
        }

        let mut previous = 0;
        for (cumulative, _) in &entries {
            if *cumulative <= previous {
                return Err(malformed(format!(
                    "cumulative frequency {} does not increase past {}",
                    cumulative, previous
                )));
            }
            previous = *cumulative;
        }

        if previous != die_range {
            return Err(malformed(format!(
                "frequencies end at {} but the die range is {}",
                previous, die_range
            )));
        }

        Ok(Self {
            name,
            die_range,
            entries,
        })
    }

    /// Build from `(weight, value)` pairs; weights are summed into cumulative form
    pub fn from_weights(
        name: impl Into<String>,
        die_range: u32,
        weights: Vec<(u32, T)>,
    ) -> Result<Self, ConfigurationError> {
        let mut running = 0;
        let entries = weights
            .into_iter()
            .map(|(weight, value)| {
                running += weight;
                (running, value)
            })
            .collect();
        Self::new(name, die_range, entries)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn die_range(&self) -> u32 {
        self.die_range
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry a given roll selects
    pub fn lookup(&self, roll: u32) -> Result<&T, ConfigurationError> {
        self.entries
            .iter()
            .find(|(cumulative, _)| *cumulative >= roll)
            .map(|(_, value)| value)
            .ok_or_else(|| ConfigurationError::SelectionOutOfRange {
                table: self.name.clone(),
                roll,
            })
    }

    /// Roll the table's die once and return the selected entry
    pub fn choose(&self, dice: &mut Dice) -> Result<&T, ConfigurationError> {
        let roll = dice.d(self.die_range) as u32;
        self.lookup(roll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyTable<&'static str> {
        FrequencyTable::new("sample", 36, vec![(6, "low"), (30, "mid"), (36, "high")]).unwrap()
    }

    #[test]
    fn test_lookup_boundaries() {
        let table = sample();
        assert_eq!(*table.lookup(1).unwrap(), "low");
        assert_eq!(*table.lookup(6).unwrap(), "low");
        assert_eq!(*table.lookup(7).unwrap(), "mid");
        assert_eq!(*table.lookup(30).unwrap(), "mid");
        assert_eq!(*table.lookup(36).unwrap(), "high");
    }

    #[test]
    fn test_roll_past_last_entry_is_error() {
        let table = sample();
        assert!(matches!(
            table.lookup(37),
            Err(ConfigurationError::SelectionOutOfRange { roll: 37, .. })
        ));
    }

    #[test]
    fn test_short_table_rejected() {
        let result = FrequencyTable::new("short", 216, vec![(100, 'a'), (200, 'b')]);
        assert!(matches!(
            result,
            Err(ConfigurationError::MalformedFrequencyTable { .. })
        ));
    }

    #[test]
    fn test_non_increasing_table_rejected() {
        let result = FrequencyTable::new("flat", 36, vec![(10, 'a'), (10, 'b'), (36, 'c')]);
        assert!(result.is_err());
    }

    #[test]
    fn test_weights_accumulate() {
        let table = FrequencyTable::from_weights("weights", 6, vec![(2, 'a'), (3, 'b'), (1, 'c')])
            .unwrap();
        assert_eq!(*table.lookup(2).unwrap(), 'a');
        assert_eq!(*table.lookup(5).unwrap(), 'b');
        assert_eq!(*table.lookup(6).unwrap(), 'c');
    }

    #[test]
    fn test_choose_uses_one_draw() {
        let table = sample();
        let mut dice = Dice::scripted(vec![20]);
        assert_eq!(*table.choose(&mut dice).unwrap(), "mid");
        assert_eq!(dice.draws(), 1);
    }
}
