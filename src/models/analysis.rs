use serde::{Deserialize, Serialize};

/// Largest activity-factor nudge accepted from an external analysis.
pub const MAX_ACTIVITY_ADJUSTMENT: f64 = 0.2;

const NEUTRAL_SCORE: f64 = 5.0;

/// Structured analysis produced outside the engine (an LLM or the offline
/// heuristic assessor). Treated as untrusted: see [`AiAnalysis::sanitized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiAnalysis {
    pub estimated_neat: f64,
    pub activity_factor_adjustment: f64,
    pub lifestyle_activity_score: f64,
    pub training_intensity_score: f64,
    pub training_volume_score: f64,
    pub recovery_needs: String,
    pub estimated_metabolic_rate: f64,
    pub metabolic_efficiency: String,
    pub adaptation_risk: String,
    pub adherence_score: f64,
    pub risk_factors: Vec<String>,
    pub success_factors: Vec<String>,
    pub recommended_approach: String,
    pub key_focus_areas: Vec<String>,
    pub potential_challenges: Vec<String>,
}

impl Default for AiAnalysis {
    fn default() -> Self {
        Self {
            estimated_neat: 300.0,
            activity_factor_adjustment: 0.0,
            lifestyle_activity_score: NEUTRAL_SCORE,
            training_intensity_score: NEUTRAL_SCORE,
            training_volume_score: NEUTRAL_SCORE,
            recovery_needs: "moderate".to_string(),
            estimated_metabolic_rate: 0.0,
            metabolic_efficiency: "normal".to_string(),
            adaptation_risk: "moderate".to_string(),
            adherence_score: NEUTRAL_SCORE,
            risk_factors: Vec::new(),
            success_factors: Vec::new(),
            recommended_approach: String::new(),
            key_focus_areas: Vec::new(),
            potential_challenges: Vec::new(),
        }
    }
}

impl AiAnalysis {
    /// Bound every number the engine consumes: the activity adjustment to
    /// +/-0.2 and each 1-10 score to its scale. Non-finite values fall back
    /// to the neutral default.
    pub fn sanitized(mut self) -> Self {
        self.activity_factor_adjustment = if self.activity_factor_adjustment.is_finite() {
            self.activity_factor_adjustment
                .clamp(-MAX_ACTIVITY_ADJUSTMENT, MAX_ACTIVITY_ADJUSTMENT)
        } else {
            0.0
        };
        self.lifestyle_activity_score = clamp_score(self.lifestyle_activity_score);
        self.training_intensity_score = clamp_score(self.training_intensity_score);
        self.training_volume_score = clamp_score(self.training_volume_score);
        self.adherence_score = clamp_score(self.adherence_score);
        if !self.estimated_neat.is_finite() || self.estimated_neat < 0.0 {
            self.estimated_neat = 0.0;
        }
        if !self.estimated_metabolic_rate.is_finite() || self.estimated_metabolic_rate < 0.0 {
            self.estimated_metabolic_rate = 0.0;
        }
        self
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(1.0, 10.0)
    } else {
        NEUTRAL_SCORE
    }
}
