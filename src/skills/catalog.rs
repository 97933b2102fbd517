//! Skill catalog - every skill a species' careers may reference
//!
//! The catalog is what turns a bare name like "Drive" into its concrete
//! specializations, and what rejects a table that names a skill nobody
//! defined.

use ahash::AHashMap;

use crate::core::error::ConfigurationError;
use crate::skills::SkillTemplate;

#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    /// (skill, specializations) in declaration order
    skills: Vec<(String, Vec<String>)>,
    index: AHashMap<String, usize>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a skill; an empty specialization list means it is used bare
    pub fn insert(&mut self, name: &str, specialties: &[&str]) {
        let specialties = specialties.iter().map(|s| s.to_string()).collect();
        match self.index.get(name) {
            Some(&i) => self.skills[i].1 = specialties,
            None => {
                self.index.insert(name.to_string(), self.skills.len());
                self.skills.push((name.to_string(), specialties));
            }
        }
    }

    pub fn with_skill(mut self, name: &str, specialties: &[&str]) -> Self {
        self.insert(name, specialties);
        self
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn specialties(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.skills[i].1.as_slice())
    }

    /// True when the skill is never held without a specialization
    pub fn always_specializes(&self, name: &str) -> bool {
        self.specialties(name).is_some_and(|s| !s.is_empty())
    }

    /// Expand a bare skill into its specializations, or itself if it has none
    pub fn specialties_for(&self, name: &str) -> Result<Vec<SkillTemplate>, ConfigurationError> {
        let specialties = self
            .specialties(name)
            .ok_or_else(|| ConfigurationError::UndefinedSkill {
                context: "skill catalog".to_string(),
                skill: name.to_string(),
            })?;

        if specialties.is_empty() {
            return Ok(vec![SkillTemplate::new(name)]);
        }

        Ok(specialties
            .iter()
            .map(|s| SkillTemplate::with_specialty(name, s.as_str()))
            .collect())
    }

    /// Resolve table notation (`"Name"` or `"Name|Specialty"`) into templates
    pub fn resolve(&self, text: &str) -> Result<Vec<SkillTemplate>, ConfigurationError> {
        let template = SkillTemplate::parse(text);
        match &template.specialty {
            Some(specialty) => {
                let known = self.specialties(&template.name).ok_or_else(|| {
                    ConfigurationError::UndefinedSkill {
                        context: "skill catalog".to_string(),
                        skill: template.name.clone(),
                    }
                })?;
                if !known.iter().any(|s| s == specialty) {
                    return Err(ConfigurationError::MissingSpecialization {
                        skill: template.name.clone(),
                        specialty: specialty.clone(),
                    });
                }
                Ok(vec![template])
            }
            None => self.specialties_for(&template.name),
        }
    }

    /// Check a table reference without expanding it, naming the table on failure
    pub fn check_reference(&self, context: &str, text: &str) -> Result<(), ConfigurationError> {
        self.resolve(text).map(|_| ()).map_err(|err| match err {
            ConfigurationError::UndefinedSkill { skill, .. } => ConfigurationError::UndefinedSkill {
                context: context.to_string(),
                skill,
            },
            other => other,
        })
    }

    /// Every skill a random grant may produce.
    ///
    /// Skills that need a specialization appear only specialized: "Art
    /// (Performer)" is included, bare "Art" is not.
    pub fn random_skills(&self) -> Vec<SkillTemplate> {
        self.skills
            .iter()
            .flat_map(|(name, specialties)| {
                if specialties.is_empty() {
                    vec![SkillTemplate::new(name.as_str())]
                } else {
                    specialties
                        .iter()
                        .map(|s| SkillTemplate::with_specialty(name.as_str(), s.as_str()))
                        .collect()
                }
            })
            .collect()
    }

    /// The skill list shared by human careers
    pub fn standard() -> Self {
        Self::new()
            .with_skill("Admin", &[])
            .with_skill("Advocate", &[])
            .with_skill("Animals", &["Handling", "Training", "Veterinary"])
            .with_skill("Art", &["Performer", "Holography", "Instrument", "Visual Media", "Write"])
            .with_skill("Astrogation", &[])
            .with_skill("Athletics", &["Dexterity", "Endurance", "Strength"])
            .with_skill("Broker", &[])
            .with_skill("Carouse", &[])
            .with_skill("Deception", &[])
            .with_skill("Diplomat", &[])
            .with_skill("Drive", &["Hovercraft", "Mole", "Track", "Walker", "Wheel"])
            .with_skill("Electronics", &["Comms", "Computers", "Remote Ops", "Sensors"])
            .with_skill("Engineer", &["M-drive", "J-drive", "Life Support", "Power"])
            .with_skill("Explosives", &[])
            .with_skill("Flyer", &["Airship", "Grav", "Ornithopter", "Rotor", "Wing"])
            .with_skill("Gambler", &[])
            .with_skill("Gunner", &["Turret", "Ortillery", "Screen", "Capital"])
            .with_skill("Gun Combat", &["Archaic", "Energy", "Slug"])
            .with_skill("Heavy Weapons", &["Artillery", "Man Portable", "Vehicle"])
            .with_skill("Investigate", &[])
            .with_skill("Jack-of-All-Trades", &[])
            .with_skill("Language", &["Anglic", "Vilani", "Zdetl", "Oynprith"])
            .with_skill("Leadership", &[])
            .with_skill("Mechanic", &[])
            .with_skill("Medic", &[])
            .with_skill("Melee", &["Unarmed", "Blade", "Bludgeon", "Natural"])
            .with_skill("Navigation", &[])
            .with_skill("Persuade", &[])
            .with_skill("Pilot", &["Small Craft", "Spacecraft", "Capital Ships"])
            .with_skill(
                "Profession",
                &["Belter", "Biologicals", "Civil Engineering", "Construction", "Hydroponics", "Polymers"],
            )
            .with_skill("Recon", &[])
            .with_skill(
                "Science",
                &[
                    "Archaeology", "Astronomy", "Biology", "Chemistry", "Cosmology", "Cybernetics",
                    "Economics", "Genetics", "History", "Linguistics", "Philosophy", "Physics",
                    "Planetology", "Psychology", "Robotics", "Sophontology", "Xenology",
                ],
            )
            .with_skill("Seafarer", &["Ocean Ships", "Personal", "Sail", "Submarine"])
            .with_skill("Stealth", &[])
            .with_skill("Steward", &[])
            .with_skill("Streetwise", &[])
            .with_skill("Survival", &[])
            .with_skill("Tactics", &["Military", "Naval"])
            .with_skill("Vacc Suit", &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialties_expand() {
        let catalog = SkillCatalog::standard();
        let drive = catalog.specialties_for("Drive").unwrap();
        assert_eq!(drive.len(), 5);
        assert!(drive.iter().all(|t| t.name == "Drive" && t.specialty.is_some()));
    }

    #[test]
    fn test_bare_skill_stays_bare() {
        let catalog = SkillCatalog::standard();
        assert_eq!(
            catalog.specialties_for("Admin").unwrap(),
            vec![SkillTemplate::new("Admin")]
        );
        assert!(!catalog.always_specializes("Admin"));
        assert!(catalog.always_specializes("Science"));
    }

    #[test]
    fn test_unknown_skill_is_configuration_error() {
        let catalog = SkillCatalog::standard();
        assert!(matches!(
            catalog.specialties_for("Basket Weaving"),
            Err(ConfigurationError::UndefinedSkill { .. })
        ));
    }

    #[test]
    fn test_missing_specialization() {
        let catalog = SkillCatalog::standard();
        assert!(catalog.resolve("Pilot|Small Craft").is_ok());
        assert!(matches!(
            catalog.resolve("Pilot|Broomstick"),
            Err(ConfigurationError::MissingSpecialization { .. })
        ));
    }

    #[test]
    fn test_random_skills_exclude_bare_specialized() {
        let catalog = SkillCatalog::standard();
        let random = catalog.random_skills();
        assert!(random.contains(&SkillTemplate::with_specialty("Art", "Performer")));
        assert!(!random.contains(&SkillTemplate::new("Art")));
        assert!(random.contains(&SkillTemplate::new("Admin")));
    }
}
