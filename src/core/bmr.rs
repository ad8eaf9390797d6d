use serde::Serialize;
use tracing::debug;

use crate::core::round_half_up;
use crate::models::profile::{Gender, TrainingType, UserProfile};
use crate::models::response::BmrMethod;

/// Years of training after which a lifter is assumed to carry more lean mass.
const EXPERIENCED_LIFTER_YEARS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmrEstimate {
    pub bmr: i64,
    pub method: BmrMethod,
}

/// Body fat assumed for Cunningham when nothing was measured.
pub fn assumed_body_fat(gender: &Gender) -> f64 {
    if *gender == Gender::Male { 15.0 } else { 25.0 }
}

pub fn lean_body_mass(weight_kg: f64, body_fat_percent: f64) -> f64 {
    weight_kg * (1.0 - body_fat_percent / 100.0)
}

pub fn katch_mcardle(lean_body_mass: f64) -> f64 {
    370.0 + 21.6 * lean_body_mass
}

pub fn cunningham(lean_body_mass: f64) -> f64 {
    500.0 + 22.0 * lean_body_mass
}

pub fn mifflin_st_jeor(profile: &UserProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age);
    if profile.is_male() {
        base + 5.0
    } else {
        base - 161.0
    }
}

/// Pick and apply a BMR formula, in priority order:
/// Katch-McArdle when body fat is measured within (0, 50), Cunningham for
/// strength athletes or lifters past three years, Mifflin-St Jeor otherwise.
pub fn calculate_bmr(profile: &UserProfile) -> BmrEstimate {
    let (raw, method) = if let Some(bf) = profile
        .body_fat_percent
        .filter(|bf| *bf > 0.0 && *bf < 50.0)
    {
        (
            katch_mcardle(lean_body_mass(profile.weight_kg, bf)),
            BmrMethod::KatchMcardle,
        )
    } else if uses_cunningham(profile) {
        let bf = assumed_body_fat(&profile.gender);
        (
            cunningham(lean_body_mass(profile.weight_kg, bf)),
            BmrMethod::Cunningham,
        )
    } else {
        (mifflin_st_jeor(profile), BmrMethod::MifflinStJeor)
    };

    let bmr = round_half_up(raw).max(1);
    debug!(bmr, method = %method, "bmr estimated");
    BmrEstimate { bmr, method }
}

fn uses_cunningham(profile: &UserProfile) -> bool {
    let training = &profile.training;
    training.includes(&TrainingType::Powerlifting)
        || training.includes(&TrainingType::Bodybuilding)
        || training.training_experience_years > EXPERIENCED_LIFTER_YEARS
}
