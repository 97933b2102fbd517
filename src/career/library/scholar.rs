use super::{rank, skills};
use crate::career::definition::{
    CareerDefinition, MedicalPlan, MusterOutTable, Qualification, RankEntry, RollCheck,
};
use crate::career::effect::{Amount, Effect, Modifier};
use crate::career::table::RollTable;
use crate::core::types::{Attribute, RelationshipKind};

use Attribute::*;

pub(super) fn careers() -> Vec<CareerDefinition> {
    vec![
        scholar(
            "Field Researcher",
            RollCheck::new(Endurance, 6),
            RollCheck::new(Intellect, 6),
            [
                Effect::increase("Electronics|Sensors"),
                Effect::increase("Vacc Suit"),
                Effect::increase("Navigation"),
                Effect::increase("Survival"),
                Effect::increase("Investigate"),
                Effect::increase("Science"),
            ],
        ),
        scholar(
            "Scientist",
            RollCheck::new(Education, 4),
            RollCheck::new(Intellect, 8),
            [
                Effect::increase("Admin"),
                Effect::increase("Engineer"),
                Effect::increase("Science"),
                Effect::increase("Science"),
                Effect::increase("Electronics"),
                Effect::increase("Science"),
            ],
        ),
        scholar(
            "Physician",
            RollCheck::new(Education, 4),
            RollCheck::new(Education, 8),
            [
                Effect::increase("Medic"),
                Effect::increase("Electronics"),
                Effect::increase("Investigate"),
                Effect::increase("Medic"),
                Effect::increase("Persuade"),
                Effect::increase("Science"),
            ],
        ),
    ]
}

fn ranks() -> Vec<RankEntry> {
    vec![
        rank(1, None, vec![Effect::increase("Science")]),
        rank(2, None, vec![Effect::gain("Electronics|Computers", 1)]),
        rank(3, None, vec![Effect::gain("Investigate", 1)]),
        rank(5, None, vec![Effect::gain("Admin", 1)]),
        rank(6, None, vec![Effect::attribute(SocialStanding, 1)]),
    ]
}

fn scholar(
    assignment: &str,
    survival: RollCheck,
    advancement: RollCheck,
    assignment_skills: [Effect; 6],
) -> CareerDefinition {
    CareerDefinition {
        career: "Scholar".to_string(),
        assignment: Some(assignment.to_string()),
        qualification: Qualification::Roll {
            attribute: Intellect,
            target: 5,
            dm: 0,
        },
        survival,
        advancement: Some(advancement),
        commission: None,
        rank_carryover: true,
        advanced_education_min: Some(10),
        basic_training: skills(["Drive", "Electronics", "Diplomat", "Medic", "Investigate", "Science"]),
        service_skills: RollTable::d6_single([
            Effect::increase("Drive"),
            Effect::increase("Electronics"),
            Effect::increase("Diplomat"),
            Effect::increase("Medic"),
            Effect::increase("Investigate"),
            Effect::increase("Science"),
        ]),
        personal_development: RollTable::d6_single([
            Effect::attribute(Intellect, 1),
            Effect::attribute(Education, 1),
            Effect::attribute(SocialStanding, 1),
            Effect::attribute(Dexterity, 1),
            Effect::attribute(Endurance, 1),
            Effect::increase("Language"),
        ]),
        assignment_skills: RollTable::d6_single(assignment_skills),
        advanced_education: Some(RollTable::d6_single([
            Effect::increase("Art"),
            Effect::increase("Advocate"),
            Effect::increase("Electronics"),
            Effect::increase("Language"),
            Effect::increase("Engineer"),
            Effect::increase("Science"),
        ])),
        events: events(),
        mishaps: mishaps(),
        ranks: ranks(),
        medical: MedicalPlan::RankBanded,
        muster_out: MusterOutTable::new(
            [5000, 10000, 20000, 30000, 40000, 60000, 100000],
            [
                "Int +1",
                "Edu +1",
                "Edu +2",
                "Ship Share",
                "Scientific Equipment",
                "Soc +1",
                "Scout Ship",
            ],
        ),
    }
}

fn events() -> RollTable {
    RollTable::two_d6(vec![
        vec![],
        vec![Effect::coin(
            vec![Effect::note("Refused to perform research that goes against {name}'s conscience.")],
            vec![
                Effect::note("Agreed to perform research that goes against {name}'s conscience."),
                Effect::Relationship {
                    relation: RelationshipKind::Enemy,
                    count: Amount::Dice { count: 1, sides: 3 },
                },
                Effect::BenefitRolls { delta: 1 },
                Effect::PickSkills {
                    skill: "Science".to_string(),
                    count: 2,
                },
            ],
        )],
        vec![
            Effect::note("Assigned to work on a secret project for a patron or organisation."),
            Effect::add_one(&["Medic", "Science", "Engineer", "Electronics", "Investigate"]),
        ],
        vec![
            Effect::note("Win a prestigious prize for {name}'s work."),
            Effect::BenefitRollDm { dm: 1 },
        ],
        vec![
            Effect::note("Advanced training in a specialist field."),
            Effect::check(Modifier::Attribute(Education), 8, vec![Effect::AddRandomSkill], vec![]),
        ],
        vec![Effect::LifeEvent],
        vec![Effect::coin(
            vec![Effect::check(
                Effect::best_skill(&["Deception", "Admin"]),
                8,
                vec![
                    Effect::note("Cheated in some fashion, advancing {name}'s career by stealing another's work."),
                    Effect::BenefitRollDm { dm: 2 },
                    Effect::ImproveOwnedSkill,
                    Effect::relation(RelationshipKind::Enemy, 1),
                ],
                vec![
                    Effect::note("Caught cheating in some fashion, stealing another's work."),
                    Effect::BenefitRolls { delta: -1 },
                    Effect::Mishap,
                    Effect::relation(RelationshipKind::Enemy, 1),
                ],
            )],
            vec![Effect::note("Refused to join a cheat.")],
        )],
        vec![
            Effect::note("Make a breakthrough in {name}'s field."),
            Effect::AdvancementDm { dm: 2 },
        ],
        vec![
            Effect::note("Entangled in a bureaucratic or legal morass that distracts {name} from research."),
            Effect::add_one(&["Admin", "Advocate", "Persuade", "Diplomat"]),
        ],
        vec![
            Effect::note("Work for an eccentric but brilliant mentor, who becomes an Ally."),
            Effect::relation(RelationshipKind::Ally, 1),
            Effect::OneOf {
                options: vec![vec![Effect::increase("Science")], vec![Effect::AdvancementDm { dm: 4 }]],
            },
        ],
        vec![Effect::note("Work leads to a considerable breakthrough.")],
    ])
}

fn mishaps() -> RollTable {
    RollTable::d6(vec![
        vec![Effect::Injury { severe: true }],
        vec![
            Effect::note("A disaster leaves several injured, and others blame {name}. Gain a Rival."),
            Effect::relation(RelationshipKind::Rival, 1),
            Effect::Injury { severe: false },
        ],
        vec![
            Effect::note("A disaster or war strikes."),
            Effect::check(
                Effect::best_skill(&["Stealth", "Deception"]),
                8,
                vec![],
                vec![Effect::Injury { severe: false }],
            ),
            Effect::coin(
                vec![
                    Effect::note("The planetary government interferes with the research. {name} continues working in secret."),
                    Effect::attribute(SocialStanding, -2),
                ],
                vec![
                    Effect::note("The planetary government interferes with the research. {name} continues openly and gains an Enemy."),
                    Effect::relation(RelationshipKind::Enemy, 1),
                ],
            ),
            Effect::increase("Science"),
        ],
        vec![
            Effect::note("An expedition or voyage goes wrong, leaving {name} stranded in the wilderness."),
            Effect::add_one(&["Survival", "Athletics|Dexterity", "Athletics|Endurance"]),
        ],
        vec![Effect::coin(
            vec![
                Effect::note("Work sabotaged by unknown parties. {name} salvages what can be saved and gives up."),
                Effect::BenefitRolls { delta: 1 },
            ],
            vec![
                Effect::note("Work sabotaged by unknown parties. {name} starts again from scratch."),
                Effect::ResetBenefitRolls,
            ],
        )],
        vec![
            Effect::note("A rival researcher blackens {name}'s name or steals the research. Gain a Rival."),
            Effect::relation(RelationshipKind::Rival, 1),
        ],
    ])
}
