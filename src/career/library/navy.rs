use super::{rank, skills};
use crate::career::definition::{
    CareerDefinition, CommissionRule, MedicalPlan, MusterOutTable, Qualification, RankEntry, RollCheck,
};
use crate::career::effect::{Effect, Modifier};
use crate::career::table::RollTable;
use crate::core::types::{Attribute, RelationshipKind};

use Attribute::*;

pub(super) fn careers() -> Vec<CareerDefinition> {
    vec![
        navy(
            "Line/Crew",
            RollCheck::new(Intellect, 5),
            RollCheck::new(Education, 7),
            [
                Effect::increase("Electronics"),
                Effect::increase("Mechanic"),
                Effect::increase("Gun Combat"),
                Effect::increase("Flyer"),
                Effect::increase("Melee"),
                Effect::increase("Vacc Suit"),
            ],
        ),
        navy(
            "Engineer/Gunner",
            RollCheck::new(Intellect, 6),
            RollCheck::new(Education, 6),
            [
                Effect::increase("Engineer"),
                Effect::increase("Mechanic"),
                Effect::increase("Electronics"),
                Effect::increase("Engineer"),
                Effect::increase("Gunner"),
                Effect::increase("Flyer"),
            ],
        ),
        navy(
            "Flight",
            RollCheck::new(Dexterity, 7),
            RollCheck::new(Education, 5),
            [
                Effect::increase("Pilot"),
                Effect::increase("Flyer"),
                Effect::increase("Gunner"),
                Effect::increase("Pilot|Small Craft"),
                Effect::increase("Astrogation"),
                Effect::increase("Electronics"),
            ],
        ),
    ]
}

fn ranks() -> Vec<RankEntry> {
    vec![
        rank(0, Some("Crewman"), vec![]),
        rank(1, Some("Able Spacehand"), vec![Effect::gain("Mechanic", 1)]),
        rank(2, Some("Petty Officer, 3rd class"), vec![Effect::gain("Vacc Suit", 1)]),
        rank(3, Some("Petty Officer, 2nd class"), vec![]),
        rank(4, Some("Petty Officer, 1st class"), vec![Effect::attribute(Endurance, 1)]),
        rank(5, Some("Chief Petty Officer"), vec![]),
        rank(6, Some("Master Chief"), vec![]),
    ]
}

fn navy(
    assignment: &str,
    survival: RollCheck,
    advancement: RollCheck,
    assignment_skills: [Effect; 6],
) -> CareerDefinition {
    CareerDefinition {
        career: "Navy".to_string(),
        assignment: Some(assignment.to_string()),
        qualification: Qualification::Roll {
            attribute: Intellect,
            target: 6,
            dm: 0,
        },
        survival,
        advancement: Some(advancement),
        commission: Some(CommissionRule {
            min_rank: 2,
            check: RollCheck::new(SocialStanding, 8),
            title: Some("Ensign".to_string()),
        }),
        rank_carryover: false,
        advanced_education_min: Some(8),
        basic_training: skills(["Pilot", "Vacc Suit", "Athletics", "Gunner", "Mechanic", "Gun Combat"]),
        service_skills: RollTable::d6_single([
            Effect::increase("Pilot"),
            Effect::increase("Vacc Suit"),
            Effect::increase("Athletics"),
            Effect::increase("Gunner"),
            Effect::increase("Mechanic"),
            Effect::increase("Gun Combat"),
        ]),
        personal_development: RollTable::d6_single([
            Effect::attribute(Strength, 1),
            Effect::attribute(Dexterity, 1),
            Effect::attribute(Endurance, 1),
            Effect::attribute(Intellect, 1),
            Effect::attribute(Education, 1),
            Effect::attribute(SocialStanding, 1),
        ]),
        assignment_skills: RollTable::d6_single(assignment_skills),
        advanced_education: Some(RollTable::d6_single([
            Effect::increase("Electronics"),
            Effect::increase("Astrogation"),
            Effect::increase("Engineer"),
            Effect::increase("Drive"),
            Effect::increase("Navigation"),
            Effect::increase("Admin"),
        ])),
        events: events(),
        mishaps: mishaps(),
        ranks: ranks(),
        medical: MedicalPlan::RankBanded,
        muster_out: MusterOutTable::new(
            [1000, 5000, 5000, 10000, 20000, 50000, 50000],
            [
                "Personal Vehicle",
                "Int +1",
                "Edu +1",
                "Weapon",
                "TAS Membership",
                "Ship's Boat",
                "Soc +2",
            ],
        ),
    }
}

fn events() -> RollTable {
    RollTable::two_d6(vec![
        vec![],
        vec![Effect::coin(
            vec![
                Effect::note("Joined a gambling circle on board."),
                Effect::check(
                    Effect::best_skill(&["Gambler"]),
                    8,
                    vec![Effect::BenefitRolls { delta: 1 }],
                    vec![Effect::BenefitRolls { delta: -1 }],
                ),
            ],
            vec![Effect::note("Refused to join a gambling circle on board.")],
        )],
        vec![
            Effect::note("Given a special assignment or duty on board ship."),
            Effect::BenefitRollDm { dm: 1 },
        ],
        vec![
            Effect::note("Given advanced training in a specialist field."),
            Effect::check(
                Modifier::Attribute(Education),
                8,
                vec![Effect::add_one(&["Electronics", "Astrogation", "Engineer", "Drive", "Navigation", "Admin"])],
                vec![],
            ),
        ],
        vec![
            Effect::note("The vessel participates in a notable military engagement."),
            Effect::add_one(&["Electronics", "Engineer", "Gunner", "Pilot"]),
        ],
        vec![Effect::LifeEvent],
        vec![
            Effect::note("Given a diplomatic mission."),
            Effect::OneOf {
                options: vec![
                    vec![Effect::gain("Recon", 1)],
                    vec![Effect::gain("Diplomat", 1)],
                    vec![Effect::gain("Steward", 1)],
                    vec![Effect::relation(RelationshipKind::Contact, 1)],
                ],
            },
        ],
        vec![
            Effect::note("Foiled an attempted crime on board. Gain an Enemy."),
            Effect::relation(RelationshipKind::Enemy, 1),
            Effect::add_one(&["Electronics", "Navigation", "Investigate"]),
        ],
        vec![Effect::coin(
            vec![
                Effect::note("Abused a position for profit."),
                Effect::BenefitRollDm { dm: 1 },
            ],
            vec![
                Effect::note("Refused to abuse a position for profit."),
                Effect::AdvancementDm { dm: 2 },
            ],
        )],
        vec![
            Effect::note("The commanding officer takes an interest in {name}'s career."),
            Effect::OneOf {
                options: vec![vec![Effect::increase("Tactics|Naval")], vec![Effect::AdvancementDm { dm: 4 }]],
            },
        ],
        vec![Effect::note("Displayed heroism in battle, saving the whole ship.")],
    ])
}

fn mishaps() -> RollTable {
    RollTable::d6(vec![
        vec![Effect::Injury { severe: true }],
        vec![
            Effect::note("Placed in the frozen watch and revived improperly."),
            Effect::attribute(Endurance, -1),
        ],
        vec![
            Effect::note("During a battle, defeat or victory is blamed on {name}. Gain an Enemy."),
            Effect::relation(RelationshipKind::Enemy, 1),
        ],
        vec![
            Effect::note("Blamed for an accident that causes the death of several crew members."),
            Effect::check(
                Modifier::Attribute(SocialStanding),
                8,
                vec![Effect::QualificationDm { dm: 2 }],
                vec![Effect::relation(RelationshipKind::Rival, 1)],
            ),
        ],
        vec![
            Effect::note("Quarrelled with an officer or fellow crewman. Gain a Rival."),
            Effect::relation(RelationshipKind::Rival, 1),
        ],
        vec![Effect::Injury { severe: false }],
    ])
}
