//! The skills a character actually holds

use serde::{Deserialize, Serialize};

use crate::dice::Dice;
use crate::skills::SkillTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub level: i32,
}

impl Skill {
    pub fn template(&self) -> SkillTemplate {
        SkillTemplate {
            name: self.name.clone(),
            specialty: self.specialty.clone(),
        }
    }
}

/// Skills keyed by (name, specialization), kept in the order they were learned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<Skill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn get(&self, name: &str, specialty: Option<&str>) -> Option<&Skill> {
        self.skills
            .iter()
            .find(|s| s.name == name && s.specialty.as_deref() == specialty)
    }

    fn position(&self, template: &SkillTemplate) -> Option<usize> {
        self.skills
            .iter()
            .position(|s| template.matches(&s.name, s.specialty.as_deref()))
    }

    /// Level held in exactly this skill/specialization
    pub fn level_of(&self, template: &SkillTemplate) -> Option<i32> {
        self.position(template).map(|i| self.skills[i].level)
    }

    /// True if the exact skill/specialization is held at `min_level` or better
    pub fn has_at_least(&self, template: &SkillTemplate, min_level: i32) -> bool {
        self.level_of(template).is_some_and(|level| level >= min_level)
    }

    /// Gain a skill at `level`. A skill already held higher is left alone.
    pub fn add(&mut self, template: &SkillTemplate, level: i32) {
        match self.position(template) {
            Some(i) => {
                let skill = &mut self.skills[i];
                skill.level = skill.level.max(level);
            }
            None => self.skills.push(Skill {
                name: template.name.clone(),
                specialty: template.specialty.clone(),
                level,
            }),
        }
    }

    /// Raise a skill by one level; an unknown skill starts at 1
    pub fn increase(&mut self, template: &SkillTemplate) -> i32 {
        match self.position(template) {
            Some(i) => {
                self.skills[i].level += 1;
                self.skills[i].level
            }
            None => {
                self.add(template, 1);
                1
            }
        }
    }

    /// Highest level among any of the named skills, ignoring specialization
    pub fn best_skill_level(&self, names: &[&str]) -> i32 {
        self.skills
            .iter()
            .filter(|s| names.contains(&s.name.as_str()))
            .map(|s| s.level)
            .max()
            .unwrap_or(0)
    }

    /// Raise one held skill chosen uniformly; nothing happens with no skills
    pub fn improve_random(&mut self, dice: &mut Dice) -> Option<SkillTemplate> {
        let index = dice.choose_index(self.skills.len())?;
        let skill = &mut self.skills[index];
        skill.level += 1;
        Some(skill.template())
    }

    /// Keep only the skills `keep` accepts
    pub fn retain(&mut self, keep: impl FnMut(&Skill) -> bool) {
        self.skills.retain(keep);
    }
}
