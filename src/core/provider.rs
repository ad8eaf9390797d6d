use crate::error::EngineError;
use crate::models::analysis::AiAnalysis;
use crate::models::profile::UserProfile;
use crate::models::response::{GoalTargets, MiniPlan};

/// An external collaborator that analyses a profile and writes coaching.
///
/// Implementations may fail at any step; the calculation pipeline falls back
/// to deterministic defaults and never surfaces the failure to its caller.
pub trait AnalysisProvider {
    fn name(&self) -> &str;

    fn analyze(&self, profile: &UserProfile) -> Result<AiAnalysis, EngineError>;

    fn coach_note(
        &self,
        profile: &UserProfile,
        analysis: &AiAnalysis,
        tdee: i64,
        targets: &GoalTargets,
    ) -> Result<String, EngineError>;

    fn mini_plan(&self, profile: &UserProfile, analysis: &AiAnalysis) -> Result<MiniPlan, EngineError>;
}

/// An analysis record produced elsewhere (for example by a language model)
/// and handed to the engine as-is. It cannot write coaching.
#[derive(Debug, Clone)]
pub struct RecordedAnalysis {
    analysis: AiAnalysis,
}

impl RecordedAnalysis {
    pub fn new(analysis: AiAnalysis) -> Self {
        Self { analysis }
    }
}

impl AnalysisProvider for RecordedAnalysis {
    fn name(&self) -> &str {
        "recorded-analysis"
    }

    fn analyze(&self, _profile: &UserProfile) -> Result<AiAnalysis, EngineError> {
        Ok(self.analysis.clone())
    }

    fn coach_note(
        &self,
        _profile: &UserProfile,
        _analysis: &AiAnalysis,
        _tdee: i64,
        _targets: &GoalTargets,
    ) -> Result<String, EngineError> {
        Err(EngineError::Unavailable {
            provider: self.name().to_string(),
            capability: "coaching notes",
        })
    }

    fn mini_plan(&self, _profile: &UserProfile, _analysis: &AiAnalysis) -> Result<MiniPlan, EngineError> {
        Err(EngineError::Unavailable {
            provider: self.name().to_string(),
            capability: "mini plans",
        })
    }
}
