//! Shared tables every human career falls back on

use crate::career::{Amount, Effect, RollTable};
use crate::core::error::ConfigurationError;
use crate::core::types::RelationshipKind;
use crate::dice::FrequencyTable;
use crate::skills::SkillCatalog;

/// Attribute damage for one injury table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryLoss {
    /// 1d6 from one physical attribute, 2 from each of the others
    NearlyKilled,
    /// 1d6 from one physical attribute
    Severe,
    /// 2 from Strength or Dexterity
    MissingLimb,
    /// A fixed loss from one physical attribute
    Physical(i32),
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjuryRow {
    pub description: &'static str,
    pub loss: InjuryLoss,
}

/// 1d6 injury table; lower is worse
pub const INJURY_TABLE: [InjuryRow; 6] = [
    InjuryRow { description: "Nearly killed", loss: InjuryLoss::NearlyKilled },
    InjuryRow { description: "Severely injured", loss: InjuryLoss::Severe },
    InjuryRow { description: "Lost an eye or limb", loss: InjuryLoss::MissingLimb },
    InjuryRow { description: "Scarred", loss: InjuryLoss::Physical(2) },
    InjuryRow { description: "Injured", loss: InjuryLoss::Physical(1) },
    InjuryRow { description: "Lightly injured", loss: InjuryLoss::None },
];

/// Row for a 1d6 injury result, clamped to the table
pub fn injury_row(roll: i32) -> InjuryRow {
    INJURY_TABLE[(roll.clamp(1, 6) - 1) as usize]
}

/// 2d6 life events
pub fn life_events() -> RollTable {
    use RelationshipKind::*;

    RollTable::two_d6(vec![
        vec![Effect::note("Suffered a serious illness or injury."), Effect::Injury { severe: false }],
        vec![Effect::note("A birth or death touches {name}'s family.")],
        vec![Effect::coin(
            vec![Effect::note("A relationship ends badly."), Effect::relation(Rival, 1)],
            vec![Effect::note("A relationship ends in bitterness."), Effect::relation(Enemy, 1)],
        )],
        vec![Effect::note("An existing relationship deepens."), Effect::relation(Ally, 1)],
        vec![Effect::note("Began a new relationship."), Effect::relation(Ally, 1)],
        vec![Effect::note("Made new contacts."), Effect::relation(Contact, 1)],
        vec![Effect::coin(
            vec![Effect::note("Betrayed by a friend, who becomes a Rival."), Effect::relation(Rival, 1)],
            vec![Effect::note("Betrayed by a friend, who becomes an Enemy."), Effect::relation(Enemy, 1)],
        )],
        vec![Effect::note("Moved to another world."), Effect::QualificationDm { dm: 2 }],
        vec![Effect::note("Came into some good fortune."), Effect::BenefitRollDm { dm: 2 }],
        vec![Effect::coin(
            vec![Effect::note("Committed or was the victim of a crime."), Effect::BenefitRolls { delta: -1 }],
            vec![
                Effect::note("Convicted of a crime."),
                Effect::MustEnroll {
                    career: "Prisoner".to_string(),
                },
            ],
        )],
        vec![Effect::UnusualLifeEvent],
    ])
}

/// 1d6 unusual events. Row 1 is the psionics test, which the builder runs itself.
pub fn unusual_events() -> RollTable {
    RollTable::d6(vec![
        vec![],
        vec![
            Effect::note("Spent time among an alien race."),
            Effect::increase("Science"),
            Effect::relation(RelationshipKind::Contact, 1),
        ],
        vec![
            Effect::note("Came across a strange alien artefact."),
            Effect::BenefitRollDm { dm: 1 },
        ],
        vec![Effect::note("Something happened, but {name} cannot remember what.")],
        vec![
            Effect::note("Briefly met someone at the highest levels of government."),
            Effect::Relationship {
                relation: RelationshipKind::Contact,
                count: Amount::Fixed(1),
            },
        ],
        vec![
            Effect::note("Found a piece of technology far beyond the local standard."),
            Effect::BenefitRollDm { dm: 2 },
        ],
    ])
}

/// Draft board: Navy assignments, uniformly on 1d6
pub fn draft_table() -> Result<FrequencyTable<&'static str>, ConfigurationError> {
    FrequencyTable::from_weights(
        "draft",
        6,
        vec![(2, "Line/Crew"), (2, "Engineer/Gunner"), (2, "Flight")],
    )
}

/// Shared tables may not recurse into themselves or into a career mishap
pub fn validate_event_tables(
    life: &RollTable,
    unusual: &RollTable,
    catalog: &SkillCatalog,
) -> Result<(), ConfigurationError> {
    life.validate("life events")?;
    unusual.validate("unusual events")?;

    for (name, table, forbidden) in [
        ("life events", life, &[Effect::LifeEvent, Effect::Mishap][..]),
        (
            "unusual events",
            unusual,
            &[Effect::LifeEvent, Effect::UnusualLifeEvent, Effect::Mishap][..],
        ),
    ] {
        for effect in table.effects() {
            let mut recursive = false;
            effect.walk(&mut |e| recursive |= forbidden.contains(e));
            if recursive {
                return Err(ConfigurationError::MalformedRollTable {
                    table: name.to_string(),
                    reason: "rows may not roll another life event or a mishap".to_string(),
                });
            }
            for skill in effect.skill_references() {
                catalog.check_reference(name, skill)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_tables_validate() {
        let catalog = SkillCatalog::standard();
        assert!(validate_event_tables(&life_events(), &unusual_events(), &catalog).is_ok());
        assert_eq!(draft_table().unwrap().len(), 3);
    }

    #[test]
    fn test_recursive_unusual_event_rejected() {
        let catalog = SkillCatalog::standard();
        let mut unusual = unusual_events();
        unusual.rows[3] = vec![Effect::coin(vec![Effect::LifeEvent], vec![])];
        assert!(matches!(
            validate_event_tables(&life_events(), &unusual, &catalog),
            Err(ConfigurationError::MalformedRollTable { .. })
        ));
    }

    #[test]
    fn test_injury_row_clamps() {
        assert_eq!(injury_row(0).loss, InjuryLoss::NearlyKilled);
        assert_eq!(injury_row(9).loss, InjuryLoss::None);
        assert_eq!(injury_row(4).loss, InjuryLoss::Physical(2));
    }
}
