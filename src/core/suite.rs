use tracing::info;

use crate::core::accuracy::validate_tdee_accuracy;
use crate::core::calculate::{CalculateOptions, calculate};
use crate::models::profile::{
    ActivityLevel, AdherenceRisk, Behavioral, CommuteType, FidgetingLevel, Gender, Goal, Health,
    HouseholdActivity, Intensity, JobType, Lifestyle, MealFrequency, MealPrep, MealTiming, Posture,
    Rating, SleepQuality, SupportSystem, Training, TrainingType, UserProfile,
};
use crate::models::validation::{SuiteCase, ValidationSuite};

/// Run every canned profile through the engine, then audit the result.
/// A case passes when its overall score reaches `pass_threshold`.
pub fn run_suite(pass_threshold: f64) -> ValidationSuite {
    let options = CalculateOptions::default();

    let results: Vec<SuiteCase> = canned_profiles()
        .into_iter()
        .map(|(name, profile)| {
            let response = calculate(&profile, None, &options);
            let result = validate_tdee_accuracy(&profile, &response);
            SuiteCase {
                name: name.to_string(),
                passed: result.overall_score >= pass_threshold,
                result,
            }
        })
        .collect();

    let total_tests = results.len();
    let passed_tests = results.iter().filter(|c| c.passed).count();
    let average_score = if total_tests == 0 {
        0.0
    } else {
        results.iter().map(|c| c.result.overall_score).sum::<f64>() / total_tests as f64
    };

    info!(total_tests, passed_tests, average_score, "validation suite finished");

    ValidationSuite {
        total_tests,
        passed_tests,
        average_score,
        pass_threshold,
        results,
    }
}

/// The fixed battery of reference profiles.
pub fn canned_profiles() -> Vec<(&'static str, UserProfile)> {
    vec![
        ("desk_bound_lifter", desk_bound_lifter()),
        ("sedentary_student", sedentary_student()),
        ("measured_runner", measured_runner()),
        ("veteran_bodybuilder", veteran_bodybuilder()),
        ("older_yoga_practitioner", older_yoga_practitioner()),
    ]
}

fn desk_bound_lifter() -> UserProfile {
    UserProfile {
        name: "Test Male".to_string(),
        email: "test@example.com".to_string(),
        age: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        body_fat_percent: None,
        goal: Goal::Maintenance,
        lifestyle: Lifestyle {
            daily_routine_description: "Office worker, sits at desk most of the day".to_string(),
            job_type: JobType::DeskJob,
            job_activity_level: ActivityLevel::Sedentary,
            commute_type: CommuteType::Car,
            household_activity_level: HouseholdActivity::Light,
            fidgeting_level: FidgetingLevel::SomeFidgeting,
            standing_vs_sitting: Posture::MostlySitting,
        },
        training: Training {
            training_description: "Lifts weights 3x per week".to_string(),
            training_types: vec![TrainingType::Powerlifting],
            training_frequency_per_week: 3.0,
            training_duration_minutes: 60.0,
            training_intensity: Intensity::Moderate,
            training_experience_years: 2.0,
        },
        health: Health {
            sleep_hours_per_night: 7.0,
            sleep_quality: SleepQuality::Good,
            stress_level: Rating::Moderate,
            ..Health::default()
        },
        behavioral: Behavioral {
            meal_frequency: MealFrequency::Three,
            meal_timing_preference: MealTiming::Normal,
            meal_prep_frequency: MealPrep::Sometimes,
            adherence_risks: Vec::new(),
            motivation_level: Rating::High,
            support_system: SupportSystem::Moderate,
        },
    }
}

fn sedentary_student() -> UserProfile {
    UserProfile {
        name: "Test Female".to_string(),
        email: "student@example.com".to_string(),
        age: 25,
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 50.0,
        body_fat_percent: None,
        goal: Goal::FatLoss,
        lifestyle: Lifestyle {
            daily_routine_description: "Student, mostly sedentary".to_string(),
            job_type: JobType::Student,
            job_activity_level: ActivityLevel::Sedentary,
            commute_type: CommuteType::Walking,
            household_activity_level: HouseholdActivity::Minimal,
            fidgeting_level: FidgetingLevel::VeryStill,
            standing_vs_sitting: Posture::MostlySitting,
        },
        training: Training {
            training_description: "No regular training".to_string(),
            training_intensity: Intensity::Low,
            ..Training::default()
        },
        health: Health {
            sleep_hours_per_night: 5.0,
            sleep_quality: SleepQuality::Poor,
            stress_level: Rating::VeryHigh,
            medical_conditions: vec!["anxiety".to_string()],
            ..Health::default()
        },
        behavioral: Behavioral {
            meal_frequency: MealFrequency::OneToTwo,
            meal_timing_preference: MealTiming::Irregular,
            meal_prep_frequency: MealPrep::Never,
            adherence_risks: vec![AdherenceRisk::StressEating, AdherenceRisk::AllOrNothing],
            motivation_level: Rating::VeryLow,
            support_system: SupportSystem::NoSupport,
        },
    }
}

fn measured_runner() -> UserProfile {
    UserProfile {
        name: "Test Runner".to_string(),
        email: "runner@example.com".to_string(),
        age: 34,
        gender: Gender::Female,
        height_cm: 170.0,
        weight_kg: 62.0,
        body_fat_percent: Some(22.0),
        goal: Goal::Performance,
        lifestyle: Lifestyle {
            daily_routine_description:
                "Nurse on my feet most of the shift, walk to the hospital and cook most evenings"
                    .to_string(),
            job_type: JobType::StandingJob,
            job_activity_level: ActivityLevel::Light,
            commute_type: CommuteType::Walking,
            household_activity_level: HouseholdActivity::Moderate,
            fidgeting_level: FidgetingLevel::ModerateFidgeting,
            standing_vs_sitting: Posture::MostlyStanding,
        },
        training: Training {
            training_description:
                "Half marathon block: four runs a week including intervals and a long run"
                    .to_string(),
            training_types: vec![TrainingType::Running],
            training_frequency_per_week: 4.0,
            training_duration_minutes: 50.0,
            training_intensity: Intensity::High,
            training_experience_years: 3.0,
        },
        health: Health {
            sleep_hours_per_night: 8.0,
            sleep_quality: SleepQuality::Good,
            stress_level: Rating::Low,
            ..Health::default()
        },
        behavioral: Behavioral {
            meal_frequency: MealFrequency::FourToFive,
            meal_timing_preference: MealTiming::EarlyBird,
            meal_prep_frequency: MealPrep::Often,
            adherence_risks: vec![AdherenceRisk::SocialEating],
            motivation_level: Rating::High,
            support_system: SupportSystem::Strong,
        },
    }
}

fn veteran_bodybuilder() -> UserProfile {
    UserProfile {
        name: "Test Veteran".to_string(),
        email: "veteran@example.com".to_string(),
        age: 41,
        gender: Gender::Male,
        height_cm: 178.0,
        weight_kg: 92.0,
        body_fat_percent: None,
        goal: Goal::MuscleGain,
        lifestyle: Lifestyle {
            daily_routine_description: "Warehouse supervisor, mix of walking the floor and desk work"
                .to_string(),
            job_type: JobType::Mixed,
            job_activity_level: ActivityLevel::Moderate,
            commute_type: CommuteType::Car,
            household_activity_level: HouseholdActivity::Moderate,
            fidgeting_level: FidgetingLevel::SomeFidgeting,
            standing_vs_sitting: Posture::Mixed,
        },
        training: Training {
            training_description: "Bodybuilding split five days a week, twelve years of lifting"
                .to_string(),
            training_types: vec![TrainingType::Bodybuilding],
            training_frequency_per_week: 5.0,
            training_duration_minutes: 75.0,
            training_intensity: Intensity::High,
            training_experience_years: 12.0,
        },
        health: Health {
            sleep_hours_per_night: 7.0,
            sleep_quality: SleepQuality::Fair,
            stress_level: Rating::Moderate,
            ..Health::default()
        },
        behavioral: Behavioral {
            meal_frequency: MealFrequency::SixPlus,
            meal_timing_preference: MealTiming::Normal,
            meal_prep_frequency: MealPrep::Always,
            adherence_risks: Vec::new(),
            motivation_level: Rating::VeryHigh,
            support_system: SupportSystem::Moderate,
        },
    }
}

fn older_yoga_practitioner() -> UserProfile {
    UserProfile {
        name: "Test Senior".to_string(),
        email: "senior@example.com".to_string(),
        age: 68,
        gender: Gender::Female,
        height_cm: 160.0,
        weight_kg: 66.0,
        body_fat_percent: None,
        goal: Goal::Maintenance,
        lifestyle: Lifestyle {
            daily_routine_description: "Retired, gardening most mornings".to_string(),
            job_type: JobType::Unemployed,
            job_activity_level: ActivityLevel::Light,
            commute_type: CommuteType::Remote,
            household_activity_level: HouseholdActivity::Active,
            fidgeting_level: FidgetingLevel::SomeFidgeting,
            standing_vs_sitting: Posture::Mixed,
        },
        training: Training {
            training_description: "Gentle yoga twice a week".to_string(),
            training_types: vec![TrainingType::Yoga],
            training_frequency_per_week: 2.0,
            training_duration_minutes: 45.0,
            training_intensity: Intensity::Low,
            training_experience_years: 1.0,
        },
        health: Health {
            sleep_hours_per_night: 7.5,
            sleep_quality: SleepQuality::Good,
            stress_level: Rating::VeryLow,
            medical_conditions: vec!["hypertension".to_string()],
            ..Health::default()
        },
        behavioral: Behavioral {
            meal_frequency: MealFrequency::Three,
            meal_timing_preference: MealTiming::EarlyBird,
            meal_prep_frequency: MealPrep::Sometimes,
            adherence_risks: Vec::new(),
            motivation_level: Rating::Moderate,
            support_system: SupportSystem::Strong,
        },
    }
}
