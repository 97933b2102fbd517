use serde::{Deserialize, Serialize};

use crate::dice::Dice;
use crate::skills::{SkillSet, SkillTemplate};

/// Transient multiset of skill templates built for one decision point.
///
/// Duplicates are kept on purpose: a skill listed twice is twice as likely
/// to be chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTemplateCollection {
    entries: Vec<SkillTemplate>,
}

impl SkillTemplateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, template: SkillTemplate) {
        self.entries.push(template);
    }

    pub fn add_named(&mut self, name: &str, specialty: Option<&str>) {
        self.entries.push(SkillTemplate {
            name: name.to_string(),
            specialty: specialty.map(str::to_string),
        });
    }

    pub fn add_range<I: IntoIterator<Item = SkillTemplate>>(&mut self, templates: I) {
        self.entries.extend(templates);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillTemplate> {
        self.entries.iter()
    }

    pub fn contains(&self, template: &SkillTemplate) -> bool {
        self.entries.contains(template)
    }

    /// Drop every entry the character already holds at `min_level` or better
    pub fn remove_overlap(&mut self, skills: &SkillSet, min_level: i32) {
        self.entries
            .retain(|template| !skills.has_at_least(template, min_level));
    }

    /// Uniform choice; `None` when nothing is left to choose from
    pub fn choose(&self, dice: &mut Dice) -> Option<SkillTemplate> {
        dice.choose(&self.entries).cloned()
    }

    /// Remove and return one entry, so a second pick cannot repeat it
    pub fn pick(&mut self, dice: &mut Dice) -> Option<SkillTemplate> {
        dice.pick(&mut self.entries)
    }
}

impl FromIterator<SkillTemplate> for SkillTemplateCollection {
    fn from_iter<I: IntoIterator<Item = SkillTemplate>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
