use serde::Serialize;
use tracing::debug;

use crate::core::round_half_up;
use crate::models::analysis::AiAnalysis;
use crate::models::profile::{
    ActivityLevel, CommuteType, FidgetingLevel, Health, HouseholdActivity, Intensity, JobType,
    Lifestyle, Posture, Rating, SleepQuality, Training, TrainingType, UserProfile,
};

pub const MIN_ACTIVITY_FACTOR: f64 = 1.1;
pub const MAX_ACTIVITY_FACTOR: f64 = 2.2;

/// Per-session-per-week contribution to the activity factor.
pub const FREQUENCY_STEP: f64 = 0.05;

/// The terms that make up an activity factor, before and after clamping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityBreakdown {
    pub base: f64,
    pub training: f64,
    pub neat: f64,
    pub health: f64,
    pub age: f64,
    pub analysis: f64,
    pub factor: f64,
}

/// Base multiplier for an occupational activity level.
pub fn base_multiplier(level: &ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
        ActivityLevel::Unknown(_) => 1.55,
    }
}

fn intensity_bonus(intensity: &Intensity) -> f64 {
    match intensity {
        Intensity::Low => 0.02,
        Intensity::Moderate => 0.05,
        Intensity::High => 0.08,
        Intensity::VeryHigh => 0.12,
        Intensity::Unknown(_) => 0.05,
    }
}

fn training_type_bonus(training_type: &TrainingType) -> f64 {
    match training_type {
        TrainingType::Powerlifting => 0.03,
        TrainingType::Bodybuilding => 0.02,
        TrainingType::Crossfit => 0.08,
        TrainingType::Running => 0.06,
        TrainingType::Cycling => 0.05,
        TrainingType::Swimming => 0.04,
        TrainingType::Yoga | TrainingType::Pilates => 0.01,
        TrainingType::MartialArts => 0.06,
        TrainingType::TeamSports => 0.05,
        TrainingType::Hiking => 0.04,
        TrainingType::Dancing => 0.03,
        TrainingType::Climbing => 0.05,
        TrainingType::Other | TrainingType::Unknown(_) => 0.03,
    }
}

/// Frequency, intensity and primary-type terms, minus a small efficiency
/// discount for athletes past five years.
pub fn training_adjustment(training: &Training) -> f64 {
    let frequency = training.training_frequency_per_week * FREQUENCY_STEP;
    let intensity = intensity_bonus(&training.training_intensity);
    let primary = training.primary_type().map_or(0.0, training_type_bonus);
    let efficiency = if training.training_experience_years > 5.0 {
        -0.02
    } else {
        0.0
    };
    frequency + intensity + primary + efficiency
}

/// Non-exercise activity: five independent lookups, zero on unknown keys.
pub fn neat_adjustment(lifestyle: &Lifestyle) -> f64 {
    let job = match lifestyle.job_type {
        JobType::DeskJob => -0.05,
        JobType::StandingJob => 0.02,
        JobType::PhysicalJob => 0.08,
        JobType::Mixed => 0.03,
        JobType::Unemployed => -0.02,
        JobType::Student => 0.01,
        JobType::Unknown(_) => 0.0,
    };
    let commute = match lifestyle.commute_type {
        CommuteType::Car => -0.02,
        CommuteType::PublicTransport => 0.01,
        CommuteType::Walking => 0.03,
        CommuteType::Cycling => 0.05,
        CommuteType::Remote => -0.01,
        CommuteType::Unknown(_) => 0.0,
    };
    let household = match lifestyle.household_activity_level {
        HouseholdActivity::Minimal => -0.02,
        HouseholdActivity::Light => 0.01,
        HouseholdActivity::Moderate => 0.03,
        HouseholdActivity::Active => 0.05,
        HouseholdActivity::Unknown(_) => 0.0,
    };
    let fidgeting = match lifestyle.fidgeting_level {
        FidgetingLevel::VeryStill => -0.03,
        FidgetingLevel::SomeFidgeting => 0.01,
        FidgetingLevel::ModerateFidgeting => 0.03,
        FidgetingLevel::LotsOfFidgeting => 0.05,
        FidgetingLevel::Unknown(_) => 0.0,
    };
    let posture = match lifestyle.standing_vs_sitting {
        Posture::MostlySitting => -0.03,
        Posture::Mixed => 0.01,
        Posture::MostlyStanding => 0.03,
        Posture::AlwaysMoving => 0.05,
        Posture::Unknown(_) => 0.0,
    };
    job + commute + household + fidgeting + posture
}

pub fn health_adjustment(health: &Health) -> f64 {
    let sleep_quality = match health.sleep_quality {
        SleepQuality::Poor => -0.05,
        SleepQuality::Fair => -0.02,
        SleepQuality::Good => 0.0,
        SleepQuality::Excellent => 0.02,
        SleepQuality::Unknown(_) => 0.0,
    };
    let sleep_hours = if health.sleep_hours_per_night < 6.0 {
        -0.03
    } else if health.sleep_hours_per_night > 8.0 {
        0.01
    } else {
        0.0
    };
    let stress = match health.stress_level {
        Rating::VeryLow => 0.02,
        Rating::Low => 0.01,
        Rating::Moderate => 0.0,
        Rating::High => -0.02,
        Rating::VeryHigh => -0.05,
        Rating::Unknown(_) => 0.0,
    };
    let thyroid = if health.thyroid_issues { -0.05 } else { 0.0 };
    let diabetes = if health.diabetes { -0.03 } else { 0.0 };
    sleep_quality + sleep_hours + stress + thyroid + diabetes
}

/// Youth bonus below 25; past 65 the larger reduction wins over the one past 50.
pub fn age_adjustment(age: u32) -> f64 {
    if age < 25 {
        0.02
    } else if age > 65 {
        -0.05
    } else if age > 50 {
        -0.03
    } else {
        0.0
    }
}

/// Compose the activity factor term by term. Terms are summed, then the
/// optional analysis nudge is added and the result clamped to [1.1, 2.2].
pub fn compose(profile: &UserProfile, analysis: Option<&AiAnalysis>) -> ActivityBreakdown {
    let base = base_multiplier(&profile.lifestyle.job_activity_level);
    let training = training_adjustment(&profile.training);
    let neat = neat_adjustment(&profile.lifestyle);
    let health = health_adjustment(&profile.health);
    let age = age_adjustment(profile.age);
    let analysis = analysis
        .map(|a| a.activity_factor_adjustment)
        .filter(|adj| adj.is_finite())
        .unwrap_or(0.0);

    let raw = base + training + neat + health + age + analysis;
    let factor = if raw.is_nan() {
        base.clamp(MIN_ACTIVITY_FACTOR, MAX_ACTIVITY_FACTOR)
    } else {
        raw.clamp(MIN_ACTIVITY_FACTOR, MAX_ACTIVITY_FACTOR)
    };

    let breakdown = ActivityBreakdown {
        base,
        training,
        neat,
        health,
        age,
        analysis,
        factor,
    };
    debug!(?breakdown, "activity factor composed");
    breakdown
}

/// TDEE in whole kcal. Rounding never carries it outside
/// [bmr * 1.1, bmr * 2.2].
pub fn tdee_from_factor(bmr: i64, factor: f64) -> i64 {
    let bmr = bmr as f64;
    let floor = (bmr * MIN_ACTIVITY_FACTOR).ceil() as i64;
    let cap = (bmr * MAX_ACTIVITY_FACTOR).floor() as i64;
    round_half_up(bmr * factor).clamp(floor, cap.max(floor))
}

pub fn calculate_activity_factor(profile: &UserProfile, analysis: Option<&AiAnalysis>) -> f64 {
    compose(profile, analysis).factor
}
