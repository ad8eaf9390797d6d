use chrono::Utc;
use tracing::{debug, warn};

use crate::core::activity::{compose, tdee_from_factor};
use crate::core::assessor::fallback_analysis;
use crate::core::bmr::calculate_bmr;
use crate::core::coaching;
use crate::core::confidence::confidence_score;
use crate::core::provider::AnalysisProvider;
use crate::core::targets::all_targets;
use crate::core::timing::timing_recommendations;
use crate::models::analysis::AiAnalysis;
use crate::models::profile::UserProfile;
use crate::models::response::{AiEnhancements, CalculationResponse, Coaching};

pub const RESPONSE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Deficit suggested alongside AI-enhanced responses.
const RECOMMENDED_DEFICIT: f64 = 0.2;

#[derive(Debug, Clone, Copy)]
pub struct CalculateOptions {
    pub ai_mode: bool,
    pub include_coaching: bool,
    pub include_mini_plan: bool,
}

impl Default for CalculateOptions {
    fn default() -> Self {
        Self {
            ai_mode: false,
            include_coaching: true,
            include_mini_plan: true,
        }
    }
}

/// Run the full engine for one profile.
///
/// The provider is consulted only in AI mode. Any provider failure is logged
/// and replaced with the local fallback; this function cannot fail.
pub fn calculate(
    profile: &UserProfile,
    provider: Option<&dyn AnalysisProvider>,
    options: &CalculateOptions,
) -> CalculationResponse {
    let estimate = calculate_bmr(profile);

    let provider = provider.filter(|_| options.ai_mode);
    let analysis = provider.map(|p| request_analysis(p, profile));

    let activity = compose(profile, analysis.as_ref());
    let tdee = tdee_from_factor(estimate.bmr, activity.factor);
    debug!(bmr = estimate.bmr, factor = activity.factor, tdee, "tdee calculated");

    let targets = all_targets(tdee, profile);

    let mut coaching_block = Coaching::default();
    if options.include_coaching {
        coaching_block.coach_note = coaching::coach_note(profile, tdee);

        if let (Some(provider), Some(analysis)) = (provider, analysis.as_ref()) {
            let note = provider
                .coach_note(profile, analysis, tdee, &targets)
                .unwrap_or_else(|e| {
                    warn!(provider = provider.name(), error = %e, "coaching note fell back to template");
                    coaching::coach_note(profile, tdee)
                });
            coaching_block.ai_coach_note = Some(note);
            coaching_block.risk_flags = coaching::risk_flags(profile, analysis);
            coaching_block.success_strategies = coaching::success_strategies(profile, analysis);

            if options.include_mini_plan {
                let plan = provider.mini_plan(profile, analysis).unwrap_or_else(|e| {
                    warn!(provider = provider.name(), error = %e, "mini plan fell back to default");
                    coaching::default_mini_plan(profile)
                });
                coaching_block.mini_plan = Some(plan);
            }
        }
    }

    let confidence_score = confidence_score(profile, analysis.as_ref());

    let ai_enhancements = analysis.as_ref().map(|a| AiEnhancements {
        adjusted_tdee: tdee,
        activity_factor_adjustment: a.activity_factor_adjustment,
        recommended_deficit_percent: RECOMMENDED_DEFICIT,
        macro_profile_hint: coaching::macro_profile_hint(profile).to_string(),
        timing_recommendations: timing_recommendations(profile),
    });

    CalculationResponse {
        bmr: estimate.bmr,
        tdee,
        method_used: estimate.method,
        targets,
        ai_enhancements,
        coaching: coaching_block,
        confidence_score,
        calculation_timestamp: Utc::now(),
        version: RESPONSE_VERSION.to_string(),
    }
}

fn request_analysis(provider: &dyn AnalysisProvider, profile: &UserProfile) -> AiAnalysis {
    match provider.analyze(profile) {
        Ok(analysis) => analysis.sanitized(),
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "analysis fell back to heuristic assessor");
            fallback_analysis(profile)
        }
    }
}
