use crate::models::profile::{MealFrequency, MealTiming, TrainingType, UserProfile};
use crate::models::response::TimingRecommendations;

const HYDRATION: &str = "Drink 3-4 liters of water daily. Add electrolytes during intense training.";
const SLEEP_OPTIMIZATION: &str =
    "Avoid large meals 2-3 hours before bed. Consider a small protein snack if needed.";

/// Canned timing advice. Powerlifting is checked before running, running
/// before yoga, regardless of the order the types were listed in.
pub fn timing_recommendations(profile: &UserProfile) -> TimingRecommendations {
    let training = &profile.training;

    let (pre_workout, post_workout) = if training.includes(&TrainingType::Powerlifting) {
        (
            "Eat a light meal 2-3 hours before with carbs and protein. Consider caffeine 30-60 minutes before.",
            "Eat a meal with protein and carbs within 30 minutes. Consider a protein shake if meal is delayed.",
        )
    } else if training.includes(&TrainingType::Running) {
        (
            "Eat easily digestible carbs 1-2 hours before. Consider a banana or toast with honey.",
            "Eat carbs and protein within 30 minutes. Focus on replenishing glycogen stores.",
        )
    } else if training.includes(&TrainingType::Yoga) {
        (
            "Eat a light meal 2-3 hours before. Avoid heavy foods that might cause discomfort.",
            "Eat a balanced meal within 1-2 hours. Focus on whole foods and hydration.",
        )
    } else {
        (
            "Eat a small meal 1-2 hours before training with carbs and protein.",
            "Eat protein and carbs within 30-60 minutes after training.",
        )
    };

    let behavioral = &profile.behavioral;
    let meal_timing = if behavioral.meal_frequency == MealFrequency::SixPlus {
        "Eat 6+ smaller meals throughout the day to maintain energy levels."
    } else if behavioral.meal_timing_preference == MealTiming::NightOwl {
        "Eat your largest meal in the evening when you're most active and hungry."
    } else {
        "Eat 3-4 meals per day with consistent timing."
    };

    TimingRecommendations {
        pre_workout: pre_workout.to_string(),
        post_workout: post_workout.to_string(),
        meal_timing: meal_timing.to_string(),
        hydration: HYDRATION.to_string(),
        sleep_optimization: SLEEP_OPTIMIZATION.to_string(),
    }
}
