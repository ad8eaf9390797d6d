#![allow(dead_code)]

use serde_json::{Value, json};
use tdeecalc::models::UserProfile;

/// Profile JSON for a 30 year old desk worker who powerlifts three times a week.
pub fn standard_male_json() -> Value {
    json!({
        "name": "Test Male",
        "email": "test@example.com",
        "age": 30,
        "gender": "male",
        "height_cm": 180,
        "weight_kg": 80,
        "goal": "maintenance",
        "lifestyle": {
            "daily_routine_description": "Office worker, sits at desk most of the day",
            "job_type": "desk_job",
            "job_activity_level": "sedentary",
            "commute_type": "car",
            "household_activity_level": "light",
            "fidgeting_level": "some_fidgeting",
            "standing_vs_sitting": "mostly_sitting"
        },
        "training": {
            "training_description": "Lifts weights 3x per week",
            "training_types": ["powerlifting"],
            "training_frequency_per_week": 3,
            "training_duration_minutes": 60,
            "training_intensity": "moderate",
            "training_experience_years": 2
        },
        "health": {
            "sleep_hours_per_night": 7,
            "sleep_quality": "good",
            "stress_level": "moderate",
            "medical_conditions": []
        },
        "behavioral": {
            "meal_frequency": "3_meals",
            "meal_timing_preference": "normal",
            "meal_prep_frequency": "sometimes",
            "adherence_risks": [],
            "motivation_level": "high",
            "support_system": "moderate"
        }
    })
}

/// Profile JSON for a light, sedentary student who barely trains and sleeps badly.
pub fn low_weight_female_json() -> Value {
    json!({
        "name": "Test Female",
        "email": "student@example.com",
        "age": 25,
        "gender": "female",
        "height_cm": 165,
        "weight_kg": 50,
        "goal": "fat_loss",
        "lifestyle": {
            "daily_routine_description": "Student, mostly sedentary",
            "job_type": "student",
            "job_activity_level": "sedentary",
            "commute_type": "walking",
            "household_activity_level": "minimal",
            "fidgeting_level": "very_still",
            "standing_vs_sitting": "mostly_sitting"
        },
        "training": {
            "training_description": "No regular training",
            "training_types": [],
            "training_frequency_per_week": 0,
            "training_duration_minutes": 0,
            "training_intensity": "low",
            "training_experience_years": 0
        },
        "health": {
            "sleep_hours_per_night": 5,
            "sleep_quality": "poor",
            "stress_level": "very_high",
            "medical_conditions": ["anxiety"]
        },
        "behavioral": {
            "meal_frequency": "1-2_meals",
            "meal_timing_preference": "irregular",
            "meal_prep_frequency": "never",
            "adherence_risks": ["stress_eating", "all_or_nothing"],
            "motivation_level": "very_low",
            "support_system": "none"
        }
    })
}

pub fn profile_from(value: Value) -> UserProfile {
    serde_json::from_value(value).unwrap()
}

pub fn standard_male() -> UserProfile {
    profile_from(standard_male_json())
}

pub fn low_weight_female() -> UserProfile {
    profile_from(low_weight_female_json())
}

/// Apply `edit` to a profile JSON before deserializing it.
pub fn with_edit(mut value: Value, edit: impl FnOnce(&mut Value)) -> UserProfile {
    edit(&mut value);
    profile_from(value)
}
