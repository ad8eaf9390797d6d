use crate::core::round_half_up;
use crate::models::profile::{TrainingType, UserProfile};
use crate::models::response::{GoalTargets, MacroTargets, TargetGoal};

/// Fat loss targets never go below this many kcal.
pub const FAT_LOSS_CALORIE_FLOOR: i64 = 1200;

/// Protein never drops below this many g/kg of body weight.
pub const MIN_PROTEIN_PER_KG: f64 = 1.6;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARB: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

pub fn target_calories(tdee: i64, goal: TargetGoal) -> i64 {
    match goal {
        TargetGoal::FatLoss => round_half_up(tdee as f64 * 0.8).max(FAT_LOSS_CALORIE_FLOOR),
        TargetGoal::MuscleGain => round_half_up(tdee as f64 * 1.12),
        TargetGoal::Maintenance | TargetGoal::Recomposition => tdee,
    }
    .max(0)
}

fn base_protein_per_kg(goal: TargetGoal) -> f64 {
    match goal {
        TargetGoal::FatLoss | TargetGoal::MuscleGain => 2.2,
        TargetGoal::Recomposition => 2.4,
        TargetGoal::Maintenance => 2.0,
    }
}

fn protein_type_delta(training_type: &TrainingType) -> f64 {
    match training_type {
        TrainingType::Powerlifting | TrainingType::Crossfit => 0.2,
        TrainingType::Bodybuilding => 0.3,
        TrainingType::Running => -0.2,
        TrainingType::Cycling | TrainingType::Hiking => -0.1,
        TrainingType::Swimming
        | TrainingType::MartialArts
        | TrainingType::TeamSports
        | TrainingType::Climbing => 0.1,
        TrainingType::Yoga | TrainingType::Pilates => -0.3,
        TrainingType::Dancing | TrainingType::Other | TrainingType::Unknown(_) => 0.0,
    }
}

/// Grams of protein per kg for a goal, adjusted for primary training type,
/// sex and experience, floored at 1.6.
pub fn protein_per_kg(profile: &UserProfile, goal: TargetGoal) -> f64 {
    let training = &profile.training;
    let by_type = training.primary_type().map_or(0.0, protein_type_delta);
    let sex = if profile.is_male() { 0.1 } else { 0.0 };
    let experience = if training.training_experience_years > 5.0 {
        0.1
    } else {
        0.0
    };
    (base_protein_per_kg(goal) + by_type + sex + experience).max(MIN_PROTEIN_PER_KG)
}

/// Derive calorie and macro targets for one goal.
///
/// Fat takes the larger of 25% of calories and 0.5 g/kg; carbs take what is
/// left and go negative when protein and fat already exceed the calorie
/// target. Percentages are rounded independently, so they may miss 100 by one.
pub fn calculate_macro_targets(tdee: i64, profile: &UserProfile, goal: TargetGoal) -> MacroTargets {
    let calories = target_calories(tdee, goal);
    let calories_f = calories as f64;

    let protein_g = round_half_up(profile.weight_kg * protein_per_kg(profile, goal));
    let protein_kcal = protein_g as f64 * KCAL_PER_G_PROTEIN;

    let fat_kcal = (calories_f * 0.25).max(profile.weight_kg * 0.5 * KCAL_PER_G_FAT);
    let fat_g = round_half_up(fat_kcal / KCAL_PER_G_FAT);

    let carb_kcal = calories_f - protein_kcal - fat_kcal;
    let carb_g = round_half_up(carb_kcal / KCAL_PER_G_CARB);

    let percent = |kcal: f64| {
        if calories > 0 {
            round_half_up(kcal / calories_f * 100.0)
        } else {
            0
        }
    };

    MacroTargets {
        calories,
        protein_g,
        fat_g,
        carb_g,
        protein_percent: percent(protein_kcal),
        fat_percent: percent(fat_kcal),
        carb_percent: percent(carb_kcal),
    }
}

/// Targets for all four goals.
pub fn all_targets(tdee: i64, profile: &UserProfile) -> GoalTargets {
    let mut targets = GoalTargets::default();
    for goal in TargetGoal::ALL {
        targets.set(goal, calculate_macro_targets(tdee, profile, goal));
    }
    targets
}
