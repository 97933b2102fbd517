use serde::{Deserialize, Serialize};

use crate::core::types::Attribute;
use crate::dice::Dice;

/// Die modifier for a characteristic value
///
/// 0 → -3, 1-2 → -2, 3-5 → -1, 6-8 → 0, 9-11 → +1, 12-14 → +2, 15+ → +3
pub fn attribute_modifier(value: i32) -> i32 {
    if value <= 0 {
        return -3;
    }
    (value / 3 - 2).min(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i32,
    pub dexterity: i32,
    pub endurance: i32,
    pub intellect: i32,
    pub education: i32,
    pub social_standing: i32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(7)
    }
}

impl Attributes {
    pub fn uniform(value: i32) -> Self {
        Self {
            strength: value,
            dexterity: value,
            endurance: value,
            intellect: value,
            education: value,
            social_standing: value,
        }
    }

    /// Roll 2d6 for each characteristic in sheet order
    pub fn roll(dice: &mut Dice) -> Self {
        Self {
            strength: dice.d_n(2, 6),
            dexterity: dice.d_n(2, 6),
            endurance: dice.d_n(2, 6),
            intellect: dice.d_n(2, 6),
            education: dice.d_n(2, 6),
            social_standing: dice.d_n(2, 6),
        }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Endurance => self.endurance,
            Attribute::Intellect => self.intellect,
            Attribute::Education => self.education,
            Attribute::SocialStanding => self.social_standing,
        }
    }

    fn slot(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Endurance => &mut self.endurance,
            Attribute::Intellect => &mut self.intellect,
            Attribute::Education => &mut self.education,
            Attribute::SocialStanding => &mut self.social_standing,
        }
    }

    /// Apply a delta, clamped into `[min, max]`. Returns the new value.
    pub fn adjust(&mut self, attribute: Attribute, delta: i32, min: i32, max: i32) -> i32 {
        let slot = self.slot(attribute);
        *slot = (*slot + delta).clamp(min, max);
        *slot
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        attribute_modifier(self.get(attribute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bands() {
        let expected = [
            (0, -3), (1, -2), (2, -2), (3, -1), (5, -1), (6, 0), (8, 0),
            (9, 1), (11, 1), (12, 2), (14, 2), (15, 3), (18, 3),
        ];
        for (value, dm) in expected {
            assert_eq!(attribute_modifier(value), dm, "value {}", value);
        }
    }

    #[test]
    fn test_adjust_clamps() {
        let mut attrs = Attributes::uniform(14);
        assert_eq!(attrs.adjust(Attribute::Education, 3, 0, 15), 15);
        assert_eq!(attrs.adjust(Attribute::Strength, -20, 0, 15), 0);
        assert_eq!(attrs.modifier(Attribute::Strength), -3);
    }
}
