use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

keyed_enum! {
    /// Which BMR formula produced the estimate.
    BmrMethod {
        KatchMcardle => "katch_mcardle",
        Cunningham => "cunningham",
        MifflinStJeor => "mifflin_st_jeor",
    }
}

/// The four goals every response carries targets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetGoal {
    Maintenance,
    FatLoss,
    MuscleGain,
    Recomposition,
}

impl TargetGoal {
    pub const ALL: [TargetGoal; 4] = [
        Self::Maintenance,
        Self::FatLoss,
        Self::MuscleGain,
        Self::Recomposition,
    ];
}

impl std::fmt::Display for TargetGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Maintenance => write!(f, "maintenance"),
            Self::FatLoss => write!(f, "fat_loss"),
            Self::MuscleGain => write!(f, "muscle_gain"),
            Self::Recomposition => write!(f, "recomposition"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub calories: i64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carb_g: i64,
    pub protein_percent: i64,
    pub fat_percent: i64,
    pub carb_percent: i64,
}

/// Per-goal targets. Responses read back from disk may omit goals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance: Option<MacroTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_loss: Option<MacroTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_gain: Option<MacroTargets>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recomposition: Option<MacroTargets>,
}

impl GoalTargets {
    pub fn get(&self, goal: TargetGoal) -> Option<&MacroTargets> {
        match goal {
            TargetGoal::Maintenance => self.maintenance.as_ref(),
            TargetGoal::FatLoss => self.fat_loss.as_ref(),
            TargetGoal::MuscleGain => self.muscle_gain.as_ref(),
            TargetGoal::Recomposition => self.recomposition.as_ref(),
        }
    }

    pub fn set(&mut self, goal: TargetGoal, targets: MacroTargets) {
        let slot = match goal {
            TargetGoal::Maintenance => &mut self.maintenance,
            TargetGoal::FatLoss => &mut self.fat_loss,
            TargetGoal::MuscleGain => &mut self.muscle_gain,
            TargetGoal::Recomposition => &mut self.recomposition,
        };
        *slot = Some(targets);
    }

    /// Present targets in maintenance, fat_loss, muscle_gain, recomposition order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetGoal, &MacroTargets)> {
        TargetGoal::ALL
            .into_iter()
            .filter_map(move |goal| self.get(goal).map(|t| (goal, t)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingRecommendations {
    pub pre_workout: String,
    pub post_workout: String,
    pub meal_timing: String,
    pub hydration: String,
    pub sleep_optimization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiEnhancements {
    pub adjusted_tdee: i64,
    pub activity_factor_adjustment: f64,
    pub recommended_deficit_percent: f64,
    pub macro_profile_hint: String,
    pub timing_recommendations: TimingRecommendations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiniPlan {
    pub weekly_sessions: f64,
    pub training_template: String,
    pub step_target: String,
    pub protein_minimum_g: i64,
    pub habits: Vec<String>,
    pub weekly_focus: String,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coaching {
    pub coach_note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_coach_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mini_plan: Option<MiniPlan>,
    pub risk_flags: Vec<String>,
    pub success_strategies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub bmr: i64,
    pub tdee: i64,
    pub method_used: BmrMethod,
    #[serde(default)]
    pub targets: GoalTargets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_enhancements: Option<AiEnhancements>,
    #[serde(default)]
    pub coaching: Coaching,
    pub confidence_score: f64,
    #[serde(default = "Utc::now")]
    pub calculation_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub version: String,
}
