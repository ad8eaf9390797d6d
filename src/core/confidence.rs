use crate::models::analysis::AiAnalysis;
use crate::models::profile::UserProfile;

const BASE_SCORE: f64 = 7.0;
const DETAILED_DESCRIPTION_CHARS: usize = 50;

/// Heuristic 1-10 score for how complete the profile is.
pub fn confidence_score(profile: &UserProfile, analysis: Option<&AiAnalysis>) -> f64 {
    let body_fat = if profile.measured_body_fat().is_some() { 1.0 } else { 0.0 };
    let routine = detail_bonus(&profile.lifestyle.daily_routine_description);
    let training = detail_bonus(&profile.training.training_description);
    let analysed = if analysis.is_some() { 1.0 } else { 0.0 };
    let experience = if profile.training.training_experience_years > 2.0 {
        0.5
    } else {
        0.0
    };

    (BASE_SCORE + body_fat + routine + training + analysed + experience).clamp(1.0, 10.0)
}

fn detail_bonus(description: &str) -> f64 {
    if description.chars().count() > DETAILED_DESCRIPTION_CHARS {
        1.0
    } else {
        0.0
    }
}
