//! Offline stand-in for the language-model profile analysis.
//!
//! Scores are built from the same profile fields the model is prompted with,
//! so a response produced without network access still carries a complete
//! analysis record.

use crate::core::bmr::mifflin_st_jeor;
use crate::core::coaching;
use crate::core::provider::AnalysisProvider;
use crate::error::EngineError;
use crate::models::analysis::AiAnalysis;
use crate::models::profile::{
    Behavioral, CommuteType, FidgetingLevel, HouseholdActivity, Intensity, JobType, Lifestyle,
    Rating, SupportSystem, Training, UserProfile,
};
use crate::models::response::{GoalTargets, MiniPlan};

pub fn lifestyle_score(lifestyle: &Lifestyle) -> f64 {
    let job = match lifestyle.job_type {
        JobType::DeskJob => 3.0,
        JobType::StandingJob | JobType::Student => 5.0,
        JobType::PhysicalJob => 8.0,
        JobType::Mixed => 6.0,
        JobType::Unemployed => 4.0,
        JobType::Unknown(_) => 5.0,
    };
    let commute = match lifestyle.commute_type {
        CommuteType::PublicTransport => 1.0,
        CommuteType::Walking => 3.0,
        CommuteType::Cycling => 4.0,
        CommuteType::Car | CommuteType::Remote | CommuteType::Unknown(_) => 0.0,
    };
    let household = match lifestyle.household_activity_level {
        HouseholdActivity::Light => 1.0,
        HouseholdActivity::Moderate => 2.0,
        HouseholdActivity::Active => 3.0,
        HouseholdActivity::Minimal | HouseholdActivity::Unknown(_) => 0.0,
    };
    let fidgeting = match lifestyle.fidgeting_level {
        FidgetingLevel::VeryStill => -1.0,
        FidgetingLevel::ModerateFidgeting => 1.0,
        FidgetingLevel::LotsOfFidgeting => 2.0,
        FidgetingLevel::SomeFidgeting | FidgetingLevel::Unknown(_) => 0.0,
    };

    let averaged = (5.0 + job) / 2.0;
    to_scale(averaged + commute + household + fidgeting)
}

pub fn training_score(training: &Training) -> f64 {
    let intensity = match training.training_intensity {
        Intensity::Low => 2.0,
        Intensity::Moderate | Intensity::Unknown(_) => 5.0,
        Intensity::High => 8.0,
        Intensity::VeryHigh => 10.0,
    };
    let volume = 5.0 + training.training_frequency_per_week * 0.5;
    let averaged = (volume + intensity) / 2.0;
    let experience = if training.training_experience_years > 5.0 {
        1.0
    } else {
        0.0
    };
    to_scale(averaged + experience)
}

pub fn adherence_score(behavioral: &Behavioral) -> f64 {
    let motivation = match behavioral.motivation_level {
        Rating::VeryLow => 2.0,
        Rating::Low => 4.0,
        Rating::Moderate | Rating::Unknown(_) => 6.0,
        Rating::High => 8.0,
        Rating::VeryHigh => 10.0,
    };
    let support = match behavioral.support_system {
        SupportSystem::Minimal => 1.0,
        SupportSystem::Moderate => 2.0,
        SupportSystem::Strong => 3.0,
        SupportSystem::NoSupport | SupportSystem::Unknown(_) => 0.0,
    };
    let averaged = (7.0 + motivation) / 2.0;
    let risks = behavioral.adherence_risks.len() as f64 * 0.5;
    to_scale(averaged - risks + support)
}

fn to_scale(score: f64) -> f64 {
    score.round().clamp(1.0, 10.0)
}

/// Deterministic analysis record for a profile.
pub fn fallback_analysis(profile: &UserProfile) -> AiAnalysis {
    let training = training_score(&profile.training);
    let risks: Vec<String> = profile
        .behavioral
        .adherence_risks
        .iter()
        .map(ToString::to_string)
        .collect();

    AiAnalysis {
        estimated_neat: 300.0,
        activity_factor_adjustment: 0.0,
        lifestyle_activity_score: lifestyle_score(&profile.lifestyle),
        training_intensity_score: training,
        training_volume_score: training,
        recovery_needs: "moderate".to_string(),
        estimated_metabolic_rate: mifflin_st_jeor(profile),
        metabolic_efficiency: "normal".to_string(),
        adaptation_risk: "moderate".to_string(),
        adherence_score: adherence_score(&profile.behavioral),
        risk_factors: risks.clone(),
        success_factors: vec![
            "Consistent tracking".to_string(),
            "Regular training".to_string(),
            "Adequate sleep".to_string(),
        ],
        recommended_approach: "Gradual implementation with focus on consistency".to_string(),
        key_focus_areas: vec![
            "Protein intake".to_string(),
            "Training consistency".to_string(),
            "Sleep quality".to_string(),
        ],
        potential_challenges: risks,
    }
}

/// Analysis collaborator that never leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAssessor;

impl AnalysisProvider for HeuristicAssessor {
    fn name(&self) -> &str {
        "heuristic-assessor"
    }

    fn analyze(&self, profile: &UserProfile) -> Result<AiAnalysis, EngineError> {
        Ok(fallback_analysis(profile))
    }

    fn coach_note(
        &self,
        profile: &UserProfile,
        analysis: &AiAnalysis,
        tdee: i64,
        targets: &GoalTargets,
    ) -> Result<String, EngineError> {
        Ok(coaching::personalized_note(profile, analysis, tdee, targets))
    }

    fn mini_plan(&self, profile: &UserProfile, _analysis: &AiAnalysis) -> Result<MiniPlan, EngineError> {
        Ok(coaching::default_mini_plan(profile))
    }
}
