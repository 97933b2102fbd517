use super::{rank, skills};
use crate::career::definition::{
    CareerDefinition, MedicalPlan, MusterOutTable, Qualification, RankEntry, RollCheck,
};
use crate::career::effect::{Effect, Modifier};
use crate::career::table::RollTable;
use crate::core::types::{Attribute, RelationshipKind};

use Attribute::*;

pub(super) fn careers() -> Vec<CareerDefinition> {
    vec![
        drifter(
            "Barbarian",
            RollCheck::new(Endurance, 7),
            RollCheck::new(Strength, 7),
            ["Animals", "Carouse", "Melee|Blade", "Stealth", "Seafarer", "Survival"],
            vec![
                rank(1, None, vec![Effect::gain("Survival", 1)]),
                rank(2, Some("Warrior"), vec![Effect::gain("Melee|Blade", 1)]),
                rank(4, Some("Chieftain"), vec![Effect::gain("Leadership", 1)]),
                rank(6, Some("Warlord"), vec![]),
            ],
        ),
        drifter(
            "Wanderer",
            RollCheck::new(Endurance, 7),
            RollCheck::new(Intellect, 7),
            ["Drive", "Deception", "Recon", "Stealth", "Streetwise", "Survival"],
            vec![
                rank(1, None, vec![Effect::gain("Streetwise", 1)]),
                rank(3, None, vec![Effect::gain("Deception", 1)]),
            ],
        ),
        drifter(
            "Scavenger",
            RollCheck::new(Dexterity, 7),
            RollCheck::new(Endurance, 7),
            ["Pilot|Small Craft", "Mechanic", "Astrogation", "Vacc Suit", "Profession", "Gun Combat"],
            vec![
                rank(1, None, vec![Effect::gain("Vacc Suit", 1)]),
                rank(3, None, vec![Effect::increase_one(&["Profession|Belter", "Mechanic"])]),
            ],
        ),
    ]
}

fn drifter(
    assignment: &str,
    survival: RollCheck,
    advancement: RollCheck,
    assignment_skills: [&str; 6],
    ranks: Vec<RankEntry>,
) -> CareerDefinition {
    CareerDefinition {
        career: "Drifter".to_string(),
        assignment: Some(assignment.to_string()),
        qualification: Qualification::Automatic,
        survival,
        advancement: Some(advancement),
        commission: None,
        rank_carryover: false,
        advanced_education_min: None,
        // Drifters train in whatever their assignment teaches
        basic_training: skills(assignment_skills),
        service_skills: RollTable::d6_single([
            Effect::increase("Athletics"),
            Effect::increase("Melee|Unarmed"),
            Effect::increase("Recon"),
            Effect::increase("Streetwise"),
            Effect::increase("Stealth"),
            Effect::increase("Survival"),
        ]),
        personal_development: RollTable::d6_single([
            Effect::attribute(Strength, 1),
            Effect::attribute(Endurance, 1),
            Effect::attribute(Dexterity, 1),
            Effect::increase("Language"),
            Effect::increase("Profession"),
            Effect::increase("Jack-of-All-Trades"),
        ]),
        assignment_skills: RollTable::d6_single(assignment_skills.map(Effect::increase)),
        advanced_education: None,
        events: events(),
        mishaps: mishaps(),
        ranks,
        medical: MedicalPlan::None,
        muster_out: MusterOutTable::new(
            [0, 0, 1000, 2000, 3000, 4000, 8000],
            ["Contact", "Weapon", "Ally", "Weapon", "Edu +1", "Ship Share", "Two Ship Shares"],
        ),
    }
}

fn events() -> RollTable {
    RollTable::two_d6(vec![
        vec![],
        vec![
            Effect::note("Offered a job by a patron. Now owe the patron a favour."),
            Effect::MusterOut { forced: true },
            Effect::QualificationDm { dm: 4 },
        ],
        vec![Effect::increase_one(&["Jack-of-All-Trades", "Survival", "Streetwise", "Melee"])],
        vec![
            Effect::note("Found valuable salvage."),
            Effect::BenefitRollDm { dm: 1 },
        ],
        vec![Effect::UnusualLifeEvent],
        vec![Effect::LifeEvent],
        vec![
            Effect::check(
                Effect::best_skill(&["Melee", "Gun Combat", "Stealth"]),
                8,
                vec![Effect::note("Attacked by enemies that are easily defeated.")],
                vec![
                    Effect::note("Attacked by enemies and injured."),
                    Effect::Injury { severe: false },
                ],
            ),
            Effect::relation(RelationshipKind::Enemy, 1),
        ],
        vec![Effect::OneOf {
            options: vec![
                vec![
                    Effect::note("Attempted a risky adventure and was injured."),
                    Effect::Injury { severe: false },
                ],
                vec![
                    Effect::note("Attempted a risky adventure and was sent to prison."),
                    Effect::MustEnroll {
                        career: "Prisoner".to_string(),
                    },
                ],
                vec![Effect::note("Survived a risky adventure but gained nothing.")],
                vec![Effect::note("Survived a risky adventure but gained nothing.")],
                vec![
                    Effect::note("Attempted a risky adventure and was wildly successful."),
                    Effect::BenefitRollDm { dm: 4 },
                ],
                vec![
                    Effect::note("Attempted a risky adventure and was wildly successful."),
                    Effect::BenefitRollDm { dm: 4 },
                ],
            ],
        }],
        vec![Effect::ImproveOwnedSkill],
        vec![Effect::Draft, Effect::MusterOut { forced: true }],
        vec![Effect::note("A hard life pays off.")],
    ])
}

fn mishaps() -> RollTable {
    RollTable::d6(vec![
        vec![Effect::Injury { severe: true }],
        vec![Effect::Injury { severe: false }],
        vec![
            Effect::note("Ran afoul of a criminal gang, corrupt bureaucrat or other foe. Gain an Enemy."),
            Effect::relation(RelationshipKind::Enemy, 1),
        ],
        vec![
            Effect::note("Suffered from a life-threatening illness."),
            Effect::attribute(Endurance, -1),
        ],
        vec![
            Effect::note("Betrayed by a friend, who becomes a Rival."),
            Effect::relation(RelationshipKind::Rival, 1),
            Effect::check(
                Modifier::None,
                12,
                vec![Effect::MustEnroll {
                    career: "Prisoner".to_string(),
                }],
                vec![],
            ),
        ],
        vec![Effect::note("There is a gap in {name}'s memory.")],
    ])
}
