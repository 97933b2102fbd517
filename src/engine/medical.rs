use crate::career::{CareerDefinition, MedicalPlan};
use crate::dice::Dice;

/// Percentage of injury treatment a career's employer pays.
///
/// `RankBanded` rolls 2d6 + the rank held in `career` right now; `None`
/// pays nothing and draws no dice.
pub fn medical_coverage(career: &CareerDefinition, rank: i32, dice: &mut Dice) -> u8 {
    match career.medical {
        MedicalPlan::None => 0,
        MedicalPlan::RankBanded => match dice.d_n(2, 6) + rank {
            roll if roll >= 12 => 100,
            roll if roll >= 8 => 75,
            roll if roll >= 4 => 50,
            _ => 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::standard_careers;

    fn career(plan: MedicalPlan) -> CareerDefinition {
        let mut career = standard_careers().remove(0);
        career.medical = plan;
        career
    }

    #[test]
    fn test_no_plan_draws_nothing() {
        let mut dice = Dice::seeded(4);
        assert_eq!(medical_coverage(&career(MedicalPlan::None), 3, &mut dice), 0);
        assert_eq!(dice.draws(), 0);
    }

    #[test]
    fn test_rank_banded_thresholds() {
        let plan = career(MedicalPlan::RankBanded);

        // (faces, expected) with rank 2 added
        for (faces, expected) in [([5, 5], 100), ([3, 3], 75), ([1, 1], 50)] {
            let mut dice = Dice::scripted(faces.to_vec());
            assert_eq!(medical_coverage(&plan, 2, &mut dice), expected);
        }

        let mut dice = Dice::scripted(vec![1, 1]);
        assert_eq!(medical_coverage(&plan, 0, &mut dice), 0);
    }
}
