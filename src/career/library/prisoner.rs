use super::{rank, skills};
use crate::career::definition::{CareerDefinition, MedicalPlan, MusterOutTable, Qualification, RollCheck};
use crate::career::effect::{Effect, Modifier};
use crate::career::table::RollTable;
use crate::core::types::{Attribute, RelationshipKind};

use Attribute::*;

/// Prison is never chosen; characters arrive through forced enrollment
pub(super) fn career() -> CareerDefinition {
    CareerDefinition {
        career: "Prisoner".to_string(),
        assignment: None,
        qualification: Qualification::Never,
        survival: RollCheck::new(Endurance, 7),
        advancement: Some(RollCheck::new(Strength, 7)),
        commission: None,
        rank_carryover: false,
        advanced_education_min: None,
        basic_training: skills(["Athletics", "Deception", "Melee", "Stealth", "Streetwise", "Survival"]),
        service_skills: RollTable::d6_single([
            Effect::increase("Athletics"),
            Effect::increase("Deception"),
            Effect::increase("Melee"),
            Effect::increase("Persuade"),
            Effect::increase("Stealth"),
            Effect::increase("Streetwise"),
        ]),
        personal_development: RollTable::d6_single([
            Effect::attribute(Strength, 1),
            Effect::increase("Melee|Unarmed"),
            Effect::attribute(Endurance, 1),
            Effect::increase("Jack-of-All-Trades"),
            Effect::attribute(Education, 1),
            Effect::increase("Gambler"),
        ]),
        assignment_skills: RollTable::d6_single([
            Effect::increase("Athletics"),
            Effect::increase("Mechanic"),
            Effect::increase("Advocate"),
            Effect::increase("Broker"),
            Effect::increase("Deception"),
            Effect::increase("Stealth"),
        ]),
        advanced_education: None,
        events: events(),
        mishaps: mishaps(),
        ranks: vec![
            rank(0, Some("Inmate"), vec![]),
            rank(1, None, vec![Effect::gain("Melee|Unarmed", 1)]),
            rank(2, Some("Trusty"), vec![Effect::gain("Persuade", 1)]),
            rank(4, Some("Fixer"), vec![Effect::gain("Streetwise", 1)]),
        ],
        medical: MedicalPlan::None,
        muster_out: MusterOutTable::new(
            [0, 0, 100, 200, 500, 1000, 1500],
            ["Contact", "Blade", "Ally", "Deception", "Streetwise", "Str +1", "Enemy"],
        ),
    }
}

fn events() -> RollTable {
    RollTable::two_d6(vec![
        vec![],
        vec![Effect::check(
            Effect::best_skill(&["Stealth", "Deception"]),
            10,
            vec![
                Effect::note("Escaped from prison."),
                Effect::MusterOut { forced: true },
            ],
            vec![
                Effect::note("Caught trying to escape."),
                Effect::NextAdvancementDm { dm: -2 },
            ],
        )],
        vec![
            Effect::note("Assigned to hard labour."),
            Effect::add_one(&["Athletics", "Mechanic", "Melee|Unarmed"]),
        ],
        vec![Effect::coin(
            vec![
                Effect::note("Joined a prison gang. Gain an Enemy."),
                Effect::add_one(&["Persuade", "Melee", "Deception"]),
                Effect::relation(RelationshipKind::Enemy, 1),
            ],
            vec![Effect::note("Refused to join a prison gang.")],
        )],
        vec![
            Effect::note("Took part in vocational training."),
            Effect::check(Modifier::Attribute(Education), 8, vec![Effect::AddRandomSkill], vec![]),
        ],
        vec![Effect::OneOf {
            options: vec![
                vec![Effect::note("Caught up in a riot."), Effect::Injury { severe: false }],
                vec![Effect::note("Made a friend inside."), Effect::relation(RelationshipKind::Contact, 1)],
                vec![Effect::note("Made an enemy of another inmate."), Effect::relation(RelationshipKind::Rival, 1)],
                vec![Effect::note("Transferred to another prison.")],
                vec![Effect::note("Served a quiet stretch.")],
                vec![Effect::LifeEvent],
            ],
        }],
        vec![
            Effect::note("A parole hearing goes well."),
            Effect::AdvancementDm { dm: 2 },
        ],
        vec![
            Effect::note("Hired a lawyer to work on an appeal."),
            Effect::check(Effect::best_skill(&["Advocate"]), 8, vec![Effect::AdvancementDm { dm: 2 }], vec![]),
        ],
        vec![
            Effect::note("Given special duty in the prison offices."),
            Effect::add_one(&["Admin", "Advocate", "Electronics|Computers", "Steward"]),
        ],
        vec![
            Effect::note("The warden takes an interest in {name}'s case."),
            Effect::AdvancementDm { dm: 2 },
        ],
        vec![Effect::note("Saved a guard's life during a riot.")],
    ])
}

fn mishaps() -> RollTable {
    RollTable::d6(vec![
        vec![Effect::Injury { severe: true }],
        vec![
            Effect::note("Accused of assaulting a guard. Gain an Enemy."),
            Effect::relation(RelationshipKind::Enemy, 1),
        ],
        vec![
            Effect::note("Persecuted by a prison gang. Gain an Enemy."),
            Effect::relation(RelationshipKind::Enemy, 1),
        ],
        vec![
            Effect::note("Worn down by years of hard labour."),
            Effect::attribute(Endurance, -1),
        ],
        vec![
            Effect::note("Fell out with a cellmate. Gain a Rival."),
            Effect::relation(RelationshipKind::Rival, 1),
        ],
        vec![Effect::Injury { severe: false }],
    ])
}
