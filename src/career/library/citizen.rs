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
        citizen(
            "Corporate",
            RollCheck::new(SocialStanding, 6),
            RollCheck::new(Intellect, 6),
            [
                Effect::increase("Advocate"),
                Effect::increase("Admin"),
                Effect::increase("Broker"),
                Effect::increase("Electronics|Computers"),
                Effect::increase("Diplomat"),
                Effect::increase("Leadership"),
            ],
            vec![
                rank(2, Some("Manager"), vec![Effect::gain("Admin", 1)]),
                rank(4, Some("Senior Manager"), vec![Effect::gain("Advocate", 1)]),
                rank(6, Some("Director"), vec![Effect::attribute(SocialStanding, 1)]),
            ],
        ),
        citizen(
            "Worker",
            RollCheck::new(Endurance, 4),
            RollCheck::new(Education, 8),
            [
                Effect::increase("Drive"),
                Effect::increase("Mechanic"),
                Effect::increase("Broker"),
                Effect::increase("Engineer"),
                Effect::increase("Profession"),
                Effect::increase("Science"),
            ],
            vec![
                rank(2, Some("Technician"), vec![Effect::increase("Profession")]),
                rank(4, Some("Craftsman"), vec![Effect::gain("Mechanic", 1)]),
                rank(6, Some("Master Technician"), vec![Effect::increase("Engineer")]),
            ],
        ),
        citizen(
            "Colonist",
            RollCheck::new(Intellect, 7),
            RollCheck::new(Endurance, 5),
            [
                Effect::increase("Animals"),
                Effect::increase("Athletics"),
                Effect::increase("Jack-of-All-Trades"),
                Effect::increase("Drive"),
                Effect::increase("Survival"),
                Effect::increase("Recon"),
            ],
            vec![
                rank(2, Some("Settler"), vec![Effect::gain("Survival", 1)]),
                rank(4, Some("Explorer"), vec![Effect::gain("Navigation", 1)]),
                rank(6, None, vec![Effect::increase("Gun Combat")]),
            ],
        ),
    ]
}

fn citizen(
    assignment: &str,
    survival: RollCheck,
    advancement: RollCheck,
    assignment_skills: [Effect; 6],
    ranks: Vec<RankEntry>,
) -> CareerDefinition {
    CareerDefinition {
        career: "Citizen".to_string(),
        assignment: Some(assignment.to_string()),
        qualification: Qualification::Roll {
            attribute: Education,
            target: 5,
            dm: 0,
        },
        survival,
        advancement: Some(advancement),
        commission: None,
        rank_carryover: false,
        advanced_education_min: Some(10),
        basic_training: skills(["Drive", "Flyer", "Streetwise", "Melee", "Steward", "Profession"]),
        service_skills: RollTable::d6_single([
            Effect::increase("Drive"),
            Effect::increase("Flyer"),
            Effect::increase("Streetwise"),
            Effect::increase("Melee"),
            Effect::increase("Steward"),
            Effect::increase("Profession"),
        ]),
        personal_development: RollTable::d6_single([
            Effect::attribute(Education, 1),
            Effect::attribute(Intellect, 1),
            Effect::increase("Carouse"),
            Effect::increase("Gambler"),
            Effect::increase("Drive"),
            Effect::increase("Jack-of-All-Trades"),
        ]),
        assignment_skills: RollTable::d6_single(assignment_skills),
        advanced_education: Some(RollTable::d6_single([
            Effect::increase("Art"),
            Effect::increase("Advocate"),
            Effect::increase("Diplomat"),
            Effect::increase("Language"),
            Effect::increase("Electronics|Computers"),
            Effect::increase("Medic"),
        ])),
        events: events(),
        mishaps: mishaps(),
        ranks,
        medical: MedicalPlan::RankBanded,
        muster_out: MusterOutTable::new(
            [2000, 5000, 10000, 10000, 10000, 50000, 100000],
            [
                "Ship Share",
                "Ally",
                "Int +1",
                "Edu +1",
                "Gun",
                "TAS Membership",
                "Two Ship Shares",
            ],
        ),
    }
}

fn events() -> RollTable {
    RollTable::two_d6(vec![
        vec![],
        vec![
            Effect::note("Political upheaval strikes your homeworld, and you are caught up in the revolution."),
            Effect::add_one(&["Advocate", "Persuade", "Explosives", "Streetwise"]),
            Effect::check(
                Modifier::None,
                8,
                vec![Effect::AdvancementDm { dm: 2 }],
                vec![Effect::NextSurvivalDm { dm: -2 }],
            ),
        ],
        vec![
            Effect::note("Spent time maintaining and using heavy vehicles."),
            Effect::increase_one(&["Mechanic", "Drive", "Electronics", "Flyer", "Engineer"]),
        ],
        vec![
            Effect::note("Your business expands, your corporation grows, or the colony thrives."),
            Effect::BenefitRollDm { dm: 1 },
        ],
        vec![
            Effect::note("Advanced training in a specialist field."),
            Effect::check(Modifier::Attribute(Education), 10, vec![Effect::AddRandomSkill], vec![]),
        ],
        vec![Effect::LifeEvent],
        vec![
            Effect::note("You learn something you should not have, which you can profit from illegally."),
            Effect::BenefitRollDm { dm: 1 },
            Effect::OneOf {
                options: vec![
                    vec![Effect::gain("Streetwise", 1)],
                    vec![Effect::gain("Deception", 1)],
                    vec![
                        Effect::note("Gain a criminal contact."),
                        Effect::relation(RelationshipKind::Contact, 1),
                    ],
                ],
            },
        ],
        vec![
            Effect::note("You are rewarded for your diligence or cunning."),
            Effect::AdvancementDm { dm: 2 },
        ],
        vec![
            Effect::note("You gain experience in a technical field as a computer operator or surveyor."),
            Effect::increase_one(&["Electronics", "Engineer"]),
        ],
        vec![
            Effect::note("You befriend a superior in the corporation or the colony."),
            Effect::OneOf {
                options: vec![vec![Effect::gain("Diplomat", 1)], vec![Effect::AdvancementDm { dm: 4 }]],
            },
        ],
        vec![Effect::note("You rise to a position of power in your colony or corporation.")],
    ])
}

fn mishaps() -> RollTable {
    RollTable::d6(vec![
        vec![Effect::Injury { severe: true }],
        vec![
            Effect::note("Life ruined by a criminal gang. Gain the gang as an Enemy."),
            Effect::relation(RelationshipKind::Enemy, 1),
        ],
        vec![
            Effect::note("Hard times caused by a lack of interstellar trade costs you your job."),
            Effect::attribute(SocialStanding, -1),
        ],
        vec![Effect::coin(
            vec![
                Effect::note("Co-operate with investigation by the planetary authorities. The business or colony is shut down."),
                Effect::QualificationDm { dm: 2 },
            ],
            vec![
                Effect::note("Refused to co-operate with investigation by the planetary authorities. Gain an Ally."),
                Effect::relation(RelationshipKind::Ally, 1),
            ],
        )],
        vec![
            Effect::note("A revolution, attack or other unusual event throws your life into chaos, forcing you to leave the planet."),
            Effect::check(Effect::best_skill(&["Streetwise"]), 8, vec![Effect::ImproveOwnedSkill], vec![]),
        ],
        vec![Effect::Injury { severe: false }],
    ])
}
