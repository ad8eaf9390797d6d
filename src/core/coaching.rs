use crate::core::round_half_up;
use crate::models::analysis::AiAnalysis;
use crate::models::profile::{AdherenceRisk, Goal, MealPrep, Rating, SleepQuality, SupportSystem, TrainingType, UserProfile};
use crate::models::response::{GoalTargets, MiniPlan};

/// Goal-templated coaching note. Also the fallback whenever a collaborator
/// fails to write one.
pub fn coach_note(profile: &UserProfile, tdee: i64) -> String {
    let name = if profile.name.trim().is_empty() {
        "there"
    } else {
        profile.name.trim()
    };

    match profile.goal {
        Goal::FatLoss => format!(
            "Hi {}! Your TDEE is {} calories, so for fat loss, aim for {} calories daily. Focus on high protein (2.2g/kg), resistance training 3-4x/week, and consistent sleep. Track progress weekly and adjust as needed. You've got this!",
            name,
            tdee,
            round_half_up(tdee as f64 * 0.8)
        ),
        Goal::MuscleGain => format!(
            "Hi {}! Your TDEE is {} calories, so for muscle gain, aim for {} calories daily. Prioritize protein (2.2g/kg), progressive overload, and adequate recovery. Expect 0.5-1lb gain per month. Let's build some muscle!",
            name,
            tdee,
            round_half_up(tdee as f64 * 1.12)
        ),
        Goal::Recomposition => format!(
            "Hi {}! Your TDEE is {} calories for body recomposition. Focus on high protein (2.4g/kg), strength training, and patience. This takes time but yields amazing results. Stay consistent and trust the process!",
            name, tdee
        ),
        _ => format!(
            "Hi {}! Your TDEE is {} calories for maintenance. Focus on consistent protein intake (2g/kg), regular exercise, and sustainable habits. Monitor weight trends and adjust calories by 100-200 if needed. Keep up the great work!",
            name, tdee
        ),
    }
}

/// Coaching note that folds the analysis scores into the goal template.
pub fn personalized_note(
    profile: &UserProfile,
    analysis: &AiAnalysis,
    tdee: i64,
    targets: &GoalTargets,
) -> String {
    let mut note = coach_note(profile, tdee);

    if let Some(maintenance) = &targets.maintenance {
        note.push_str(&format!(
            " Your daily protein anchor is {}g.",
            maintenance.protein_g
        ));
    }

    if analysis.adherence_score < 5.0 {
        note.push_str(" Start with one or two habits and build from there; consistency beats perfection.");
    } else if analysis.adherence_score >= 8.0 {
        note.push_str(" Your habits are a real strength, so push progression once the basics are locked in.");
    }

    if analysis.lifestyle_activity_score <= 3.0 {
        note.push_str(" Adding daily walks is the easiest way to lift your baseline activity.");
    }

    note
}

pub fn risk_flags(profile: &UserProfile, analysis: &AiAnalysis) -> Vec<String> {
    let health = &profile.health;
    let risks = &profile.behavioral.adherence_risks;

    [
        (
            analysis.adherence_score < 5.0,
            "Low adherence risk - focus on building sustainable habits",
        ),
        (
            matches!(health.stress_level, Rating::High | Rating::VeryHigh),
            "High stress levels may impact recovery and adherence",
        ),
        (
            health.sleep_hours_per_night < 6.0 || health.sleep_quality == SleepQuality::Poor,
            "Inadequate sleep may affect metabolism and recovery",
        ),
        (
            profile.goal == Goal::FatLoss && profile.weight_kg < 60.0,
            "Low body weight - ensure adequate calorie intake",
        ),
        (
            profile.training.training_frequency_per_week > 6.0,
            "High training volume - prioritize recovery and nutrition",
        ),
        (
            !health.medical_conditions.is_empty(),
            "Medical conditions present - consult healthcare provider",
        ),
        (
            risks.contains(&AdherenceRisk::WeekendBinges),
            "Weekend eating patterns may impact progress",
        ),
        (
            risks.contains(&AdherenceRisk::StressEating),
            "Stress eating may interfere with goals",
        ),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, flag)| flag.to_string())
    .collect()
}

pub fn success_strategies(profile: &UserProfile, analysis: &AiAnalysis) -> Vec<String> {
    let health = &profile.health;
    let behavioral = &profile.behavioral;

    [
        (
            analysis.adherence_score >= 8.0,
            "Strong adherence potential - focus on optimization and progression",
        ),
        (
            health.sleep_hours_per_night >= 7.0 && health.sleep_quality == SleepQuality::Good,
            "Excellent sleep foundation - leverage for recovery and metabolism",
        ),
        (
            matches!(health.stress_level, Rating::Low | Rating::VeryLow),
            "Low stress environment - ideal for consistent progress",
        ),
        (
            profile.training.training_experience_years > 3.0,
            "Training experience - focus on advanced techniques and optimization",
        ),
        (
            behavioral.support_system == SupportSystem::Strong,
            "Strong support system - leverage for accountability and motivation",
        ),
        (
            matches!(behavioral.meal_prep_frequency, MealPrep::Often | MealPrep::Always),
            "Meal prep experience - optimize for consistency and adherence",
        ),
    ]
    .into_iter()
    .filter(|(applies, _)| *applies)
    .map(|(_, strategy)| strategy.to_string())
    .collect()
}

/// Seven-day starter plan keyed on goal and current training frequency.
pub fn default_mini_plan(profile: &UserProfile) -> MiniPlan {
    let sessions = profile.training.training_frequency_per_week.clamp(0.0, 4.0);

    let (template, steps, protein_per_kg) = match profile.goal {
        Goal::FatLoss => ("Upper/Lower x2 + Cardio x2", "10-12k", 2.2),
        Goal::MuscleGain => ("Push/Pull/Legs x2", "6-8k", 2.2),
        _ => ("Full body x2-3", "8-10k", 2.0),
    };

    MiniPlan {
        weekly_sessions: sessions,
        training_template: template.to_string(),
        step_target: steps.to_string(),
        protein_minimum_g: round_half_up(profile.weight_kg * protein_per_kg),
        habits: vec![
            "Track food intake for 5 days".to_string(),
            "Hit protein target daily".to_string(),
            "Get 7+ hours of sleep".to_string(),
        ],
        weekly_focus: "Build consistency with tracking and training".to_string(),
        success_metrics: vec![
            "Hit protein target 5/7 days".to_string(),
            "Complete all planned workouts".to_string(),
            "Maintain sleep schedule".to_string(),
        ],
    }
}

/// Coarse macro emphasis for the training style.
pub fn macro_profile_hint(profile: &UserProfile) -> &'static str {
    let training = &profile.training;
    let has = |t: TrainingType| training.includes(&t);

    if has(TrainingType::Powerlifting) || has(TrainingType::Bodybuilding) {
        "higher_protein_strength_training"
    } else if has(TrainingType::Running) || has(TrainingType::Cycling) {
        "higher_carbs_endurance"
    } else if has(TrainingType::Crossfit) {
        "balanced_high_intensity"
    } else if has(TrainingType::Yoga) || has(TrainingType::Pilates) {
        "moderate_protein_flexibility"
    } else {
        "balanced_general_fitness"
    }
}
