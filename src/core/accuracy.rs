use tracing::debug;

use crate::core::activity::{FREQUENCY_STEP, MAX_ACTIVITY_FACTOR, MIN_ACTIVITY_FACTOR, base_multiplier};
use crate::core::bmr::{assumed_body_fat, cunningham, katch_mcardle, lean_body_mass, mifflin_st_jeor};
use crate::core::targets::FAT_LOSS_CALORIE_FLOOR;
use crate::error::EngineError;
use crate::models::profile::UserProfile;
use crate::models::response::{BmrMethod, CalculationResponse, GoalTargets, MacroTargets, TargetGoal};
use crate::models::validation::ValidationResult;

pub const LOW_CONFIDENCE_WARNING: &str =
    "Low confidence score - consider providing more detailed information";
pub const LOW_FAT_LOSS_CALORIES_WARNING: &str =
    "Fat loss calories are very low - may not be sustainable";
pub const HIGH_PROTEIN_WARNING: &str =
    "Protein target is very high - ensure adequate hydration and fiber";
pub const AGE_WARNING: &str = "Consider consulting healthcare provider due to age";
pub const MEDICAL_WARNING: &str = "Medical conditions present - consult healthcare provider";
pub const NEGATIVE_CARBS_WARNING: &str =
    "Carbohydrate target is negative - protein and fat exceed calorie target";

pub const BODY_FAT_RECOMMENDATION: &str =
    "Consider getting body fat percentage measured for more accurate calculations";
pub const ROUTINE_RECOMMENDATION: &str =
    "Provide more detailed daily routine description for better accuracy";
pub const TRAINING_RECOMMENDATION: &str =
    "Provide more detailed training description for better accuracy";
pub const AI_MODE_RECOMMENDATION: &str = "Enable AI mode for more personalized recommendations";

/// (exclusive upper bound on percentage error, score); misses score 1.
const BMR_ERROR_BANDS: [(f64, f64); 9] = [
    (1.0, 10.0),
    (2.0, 9.0),
    (5.0, 8.0),
    (10.0, 7.0),
    (15.0, 6.0),
    (20.0, 5.0),
    (30.0, 4.0),
    (40.0, 3.0),
    (50.0, 2.0),
];

/// Coarser bands for TDEE; misses score 2.
const TDEE_ERROR_BANDS: [(f64, f64); 8] = [
    (5.0, 10.0),
    (10.0, 9.0),
    (15.0, 8.0),
    (20.0, 7.0),
    (25.0, 6.0),
    (30.0, 5.0),
    (40.0, 4.0),
    (50.0, 3.0),
];

/// Score assigned when the claimed method cannot be reproduced.
const INVALID_METHOD_SCORE: f64 = 0.0;
const OUT_OF_BOUNDS_TDEE_SCORE: f64 = 2.0;

const DETAILED_DESCRIPTION_CHARS: usize = 50;

/// Audit a response: recompute BMR, TDEE and macro expectations from the
/// profile alone and score the response against them.
pub fn validate_tdee_accuracy(profile: &UserProfile, response: &CalculationResponse) -> ValidationResult {
    let bmr_accuracy = bmr_accuracy(profile, response.bmr, &response.method_used);
    let tdee_accuracy = tdee_accuracy(profile, response.tdee, response.bmr);
    let macro_accuracy = macro_accuracy(profile, &response.targets);
    let overall_score = (bmr_accuracy + tdee_accuracy + macro_accuracy) / 3.0;

    debug!(
        overall_score,
        bmr_accuracy, tdee_accuracy, macro_accuracy, "response validated"
    );

    ValidationResult {
        overall_score,
        bmr_accuracy,
        tdee_accuracy,
        macro_accuracy,
        warnings: warnings(profile, response),
        recommendations: recommendations(profile, response),
    }
}

/// BMR the profile should produce under `method`. Cunningham reuses the
/// assumed body fat rather than anything measured.
pub fn expected_bmr(profile: &UserProfile, method: &BmrMethod) -> Result<f64, EngineError> {
    match method {
        BmrMethod::KatchMcardle => {
            let bf = profile.measured_body_fat().ok_or_else(|| {
                EngineError::InvalidMethodForProfile {
                    method: method.to_string(),
                }
            })?;
            Ok(katch_mcardle(lean_body_mass(profile.weight_kg, bf)))
        }
        BmrMethod::Cunningham => {
            let bf = assumed_body_fat(&profile.gender);
            Ok(cunningham(lean_body_mass(profile.weight_kg, bf)))
        }
        BmrMethod::MifflinStJeor => Ok(mifflin_st_jeor(profile)),
        BmrMethod::Unknown(name) => Err(EngineError::UnknownMethod {
            method: name.clone(),
        }),
    }
}

pub fn bmr_accuracy(profile: &UserProfile, calculated_bmr: i64, method: &BmrMethod) -> f64 {
    match expected_bmr(profile, method) {
        Ok(expected) if expected > 0.0 => {
            let error = percentage_error(calculated_bmr as f64, expected);
            band_score(error, &BMR_ERROR_BANDS, 1.0)
        }
        Ok(_) => INVALID_METHOD_SCORE,
        Err(e) => {
            debug!(error = %e, "bmr method cannot be checked");
            INVALID_METHOD_SCORE
        }
    }
}

/// Approximate activity factor: base level plus the training-frequency term
/// only. Deliberately coarser than the full composition.
pub fn expected_activity_factor(profile: &UserProfile) -> f64 {
    base_multiplier(&profile.lifestyle.job_activity_level)
        + profile.training.training_frequency_per_week * FREQUENCY_STEP
}

pub fn tdee_accuracy(profile: &UserProfile, calculated_tdee: i64, bmr: i64) -> f64 {
    let bmr = bmr as f64;
    let tdee = calculated_tdee as f64;
    if tdee < bmr * MIN_ACTIVITY_FACTOR || tdee > bmr * MAX_ACTIVITY_FACTOR {
        return OUT_OF_BOUNDS_TDEE_SCORE;
    }

    let expected = bmr * expected_activity_factor(profile);
    if expected <= 0.0 {
        return OUT_OF_BOUNDS_TDEE_SCORE;
    }
    band_score(percentage_error(tdee, expected), &TDEE_ERROR_BANDS, 2.0)
}

/// Mean plausibility score over the goals present; 0 when none are.
pub fn macro_accuracy(profile: &UserProfile, targets: &GoalTargets) -> f64 {
    let scores: Vec<f64> = targets
        .iter()
        .map(|(goal, target)| macro_target_score(profile, target, goal))
        .collect();
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// 3 points each for protein g/kg, fat % and carb % in their ideal band
/// (2 in the tolerable band, 1 otherwise), plus 1 for plausible calories.
pub fn macro_target_score(profile: &UserProfile, target: &MacroTargets, goal: TargetGoal) -> f64 {
    let protein_per_kg = target.protein_g as f64 / profile.weight_kg;
    let protein = tiered(protein_per_kg, (1.6, 3.0), (1.2, 3.5));
    let fat = tiered(target.fat_percent as f64, (20.0, 35.0), (15.0, 40.0));
    let carbs = tiered(target.carb_percent as f64, (45.0, 65.0), (35.0, 75.0));

    let (low, high) = plausible_calories(goal);
    let calories = if (low..=high).contains(&target.calories) {
        1.0
    } else {
        0.0
    };

    protein + fat + carbs + calories
}

fn plausible_calories(goal: TargetGoal) -> (i64, i64) {
    match goal {
        TargetGoal::FatLoss => (1200, 2500),
        TargetGoal::MuscleGain => (2000, 4000),
        TargetGoal::Maintenance => (1500, 3500),
        TargetGoal::Recomposition => (1500, 3000),
    }
}

fn tiered(value: f64, ideal: (f64, f64), tolerable: (f64, f64)) -> f64 {
    if value >= ideal.0 && value <= ideal.1 {
        3.0
    } else if value >= tolerable.0 && value <= tolerable.1 {
        2.0
    } else {
        1.0
    }
}

fn percentage_error(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected * 100.0
}

fn band_score(error: f64, bands: &[(f64, f64)], floor: f64) -> f64 {
    bands
        .iter()
        .find(|(limit, _)| error < *limit)
        .map_or(floor, |(_, score)| *score)
}

pub fn warnings(profile: &UserProfile, response: &CalculationResponse) -> Vec<String> {
    let targets = &response.targets;
    let fat_loss_too_low = targets
        .fat_loss
        .as_ref()
        .is_some_and(|t| t.calories < FAT_LOSS_CALORIE_FLOOR);
    let protein_too_high = targets
        .maintenance
        .as_ref()
        .is_some_and(|t| t.protein_g as f64 / profile.weight_kg > 2.8);
    let negative_carbs = targets.iter().any(|(_, t)| t.carb_g < 0);

    [
        (response.confidence_score < 6.0, LOW_CONFIDENCE_WARNING),
        (fat_loss_too_low, LOW_FAT_LOSS_CALORIES_WARNING),
        (protein_too_high, HIGH_PROTEIN_WARNING),
        (profile.age > 65, AGE_WARNING),
        (!profile.health.medical_conditions.is_empty(), MEDICAL_WARNING),
        (negative_carbs, NEGATIVE_CARBS_WARNING),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, warning)| warning.to_string())
    .collect()
}

pub fn recommendations(profile: &UserProfile, response: &CalculationResponse) -> Vec<String> {
    let too_short = |text: &str| text.chars().count() < DETAILED_DESCRIPTION_CHARS;

    [
        (profile.measured_body_fat().is_none(), BODY_FAT_RECOMMENDATION),
        (
            too_short(&profile.lifestyle.daily_routine_description),
            ROUTINE_RECOMMENDATION,
        ),
        (
            too_short(&profile.training.training_description),
            TRAINING_RECOMMENDATION,
        ),
        (response.ai_enhancements.is_none(), AI_MODE_RECOMMENDATION),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, recommendation)| recommendation.to_string())
    .collect()
}
