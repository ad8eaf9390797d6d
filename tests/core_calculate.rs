mod common;

use serde_json::json;
use tdeecalc::core::assessor::HeuristicAssessor;
use tdeecalc::core::calculate::{CalculateOptions, RESPONSE_VERSION, calculate};
use tdeecalc::core::coaching;
use tdeecalc::core::confidence::confidence_score;
use tdeecalc::core::provider::{AnalysisProvider, RecordedAnalysis};
use tdeecalc::core::timing::timing_recommendations;
use tdeecalc::error::EngineError;
use tdeecalc::models::response::{GoalTargets, MiniPlan};
use tdeecalc::models::{AiAnalysis, BmrMethod, UserProfile};

/// Collaborator that fails every request.
struct Offline;

impl AnalysisProvider for Offline {
    fn name(&self) -> &str {
        "offline"
    }

    fn analyze(&self, _profile: &UserProfile) -> Result<AiAnalysis, EngineError> {
        Err(EngineError::Provider {
            provider: "offline".into(),
            message: "connection refused".into(),
        })
    }

    fn coach_note(
        &self,
        _profile: &UserProfile,
        _analysis: &AiAnalysis,
        _tdee: i64,
        _targets: &GoalTargets,
    ) -> Result<String, EngineError> {
        Err(EngineError::Provider {
            provider: "offline".into(),
            message: "connection refused".into(),
        })
    }

    fn mini_plan(&self, _profile: &UserProfile, _analysis: &AiAnalysis) -> Result<MiniPlan, EngineError> {
        Err(EngineError::Provider {
            provider: "offline".into(),
            message: "connection refused".into(),
        })
    }
}

fn ai_options() -> CalculateOptions {
    CalculateOptions {
        ai_mode: true,
        ..CalculateOptions::default()
    }
}

// ── pipeline ────────────────────────────────────────────────────────────────

#[test]
fn test_standard_male_response() {
    let profile = common::standard_male();
    let r = calculate(&profile, None, &CalculateOptions::default());

    assert_eq!(r.bmr, 1996);
    assert_eq!(r.tdee, 2695);
    assert_eq!(r.method_used, BmrMethod::Cunningham);
    assert_eq!(r.targets.iter().count(), 4);
    assert_eq!(r.targets.maintenance.as_ref().unwrap().protein_g, 184);
    assert!(r.ai_enhancements.is_none());
    assert_eq!(r.confidence_score, 7.0);
    assert_eq!(r.version, RESPONSE_VERSION);
    assert!(r.coaching.coach_note.contains("2695 calories"));
    assert!(r.coaching.ai_coach_note.is_none());
    assert!(r.coaching.mini_plan.is_none());
}

#[test]
fn test_low_weight_female_fat_loss_is_floored() {
    let r = calculate(&common::low_weight_female(), None, &CalculateOptions::default());
    assert_eq!(r.bmr, 1245);
    assert_eq!(r.tdee, 1370);

    let fat_loss = r.targets.fat_loss.as_ref().unwrap();
    assert_eq!(fat_loss.calories, 1200);
    assert_eq!(fat_loss.protein_g, 110);
    assert_eq!(fat_loss.fat_g, 33);
    assert_eq!(fat_loss.carb_g, 115);
}

#[test]
fn test_profile_is_not_mutated() {
    let profile = common::standard_male();
    let before = serde_json::to_value(&profile).unwrap();
    let _ = calculate(&profile, Some(&HeuristicAssessor), &ai_options());
    assert_eq!(serde_json::to_value(&profile).unwrap(), before);
}

#[test]
fn test_no_coaching_leaves_block_empty() {
    let options = CalculateOptions {
        include_coaching: false,
        ..ai_options()
    };
    let r = calculate(&common::standard_male(), Some(&HeuristicAssessor), &options);
    assert!(r.coaching.coach_note.is_empty());
    assert!(r.coaching.ai_coach_note.is_none());
    assert!(r.coaching.risk_flags.is_empty());
    assert!(r.ai_enhancements.is_some());
}

// ── collaborators ───────────────────────────────────────────────────────────

#[test]
fn test_provider_ignored_outside_ai_mode() {
    let r = calculate(
        &common::standard_male(),
        Some(&HeuristicAssessor),
        &CalculateOptions::default(),
    );
    assert!(r.ai_enhancements.is_none());
    assert_eq!(r.confidence_score, 7.0);
}

#[test]
fn test_heuristic_assessor_enhances_response() {
    let r = calculate(&common::standard_male(), Some(&HeuristicAssessor), &ai_options());
    assert_eq!(r.tdee, 2695);
    assert_eq!(r.confidence_score, 8.0);

    let ai = r.ai_enhancements.as_ref().unwrap();
    assert_eq!(ai.adjusted_tdee, 2695);
    assert_eq!(ai.activity_factor_adjustment, 0.0);
    assert_eq!(ai.recommended_deficit_percent, 0.2);
    assert_eq!(ai.macro_profile_hint, "higher_protein_strength_training");
    assert!(ai.timing_recommendations.pre_workout.contains("caffeine"));

    let note = r.coaching.ai_coach_note.as_ref().unwrap();
    assert!(note.contains("Your daily protein anchor is 184g."));
    assert!(r.coaching.mini_plan.is_some());
}

#[test]
fn test_failing_provider_falls_back_to_defaults() {
    let profile = common::standard_male();
    let r = calculate(&profile, Some(&Offline), &ai_options());

    assert_eq!(r.tdee, 2695);
    assert!(r.ai_enhancements.is_some());
    assert_eq!(
        r.coaching.ai_coach_note.as_deref(),
        Some(coaching::coach_note(&profile, 2695).as_str())
    );
    assert_eq!(r.coaching.mini_plan, Some(coaching::default_mini_plan(&profile)));
}

#[test]
fn test_recorded_analysis_is_sanitized() {
    let record = AiAnalysis {
        activity_factor_adjustment: 5.0,
        adherence_score: 42.0,
        ..AiAnalysis::default()
    };
    let provider = RecordedAnalysis::new(record);
    let r = calculate(&common::standard_male(), Some(&provider), &ai_options());

    // factor 1.35 + 0.2 cap
    assert_eq!(r.tdee, 3094);
    let ai = r.ai_enhancements.as_ref().unwrap();
    assert_eq!(ai.activity_factor_adjustment, 0.2);
    assert!(
        r.coaching
            .success_strategies
            .contains(&"Strong adherence potential - focus on optimization and progression".to_string())
    );
}

#[test]
fn test_recorded_analysis_cannot_coach() {
    let provider = RecordedAnalysis::new(AiAnalysis::default());
    let profile = common::standard_male();
    let err = provider.mini_plan(&profile, &AiAnalysis::default()).unwrap_err();
    assert_eq!(err.code(), "provider_error");

    let options = CalculateOptions {
        include_mini_plan: false,
        ..ai_options()
    };
    let r = calculate(&profile, Some(&provider), &options);
    assert!(r.coaching.ai_coach_note.is_some());
    assert!(r.coaching.mini_plan.is_none());
}

// ── timing / confidence / coaching ──────────────────────────────────────────

#[test]
fn test_mini_plan_keeps_fractional_frequency() {
    let twice_and_a_half = common::with_edit(common::standard_male_json(), |p| {
        p["training"]["training_frequency_per_week"] = json!(2.5);
    });
    assert_eq!(coaching::default_mini_plan(&twice_and_a_half).weekly_sessions, 2.5);

    let six = common::with_edit(common::standard_male_json(), |p| {
        p["training"]["training_frequency_per_week"] = json!(6);
    });
    assert_eq!(coaching::default_mini_plan(&six).weekly_sessions, 4.0);

    assert_eq!(coaching::default_mini_plan(&common::standard_male()).weekly_sessions, 3.0);
}

#[test]
fn test_timing_precedence() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["training"]["training_types"] = json!(["yoga", "running"]);
    });
    let timing = timing_recommendations(&profile);
    assert!(timing.pre_workout.contains("banana"));
    assert_eq!(timing.meal_timing, "Eat 3-4 meals per day with consistent timing.");

    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["training"]["training_types"] = json!(["swimming"]);
        p["behavioral"]["meal_timing_preference"] = json!("night_owl");
    });
    let timing = timing_recommendations(&profile);
    assert!(timing.pre_workout.starts_with("Eat a small meal 1-2 hours"));
    assert!(timing.meal_timing.contains("largest meal in the evening"));
}

#[test]
fn test_confidence_score_components() {
    let detailed = common::with_edit(common::standard_male_json(), |p| {
        p["body_fat_percent"] = json!(18);
        p["training"]["training_experience_years"] = json!(3);
        p["training"]["training_description"] =
            json!("Powerlifting three days a week, squat bench deadlift with accessories");
    });
    // 7 + 1 body fat + 1 training detail + 0.5 experience
    assert_eq!(confidence_score(&detailed, None), 9.5);
    // analysis pushes past the cap
    assert_eq!(confidence_score(&detailed, Some(&AiAnalysis::default())), 10.0);
}

#[test]
fn test_coach_note_templates_by_goal() {
    let fat_loss = common::with_edit(common::standard_male_json(), |p| {
        p["goal"] = json!("fat_loss");
    });
    assert!(coaching::coach_note(&fat_loss, 2500).contains("aim for 2000 calories"));

    let performance = common::with_edit(common::standard_male_json(), |p| {
        p["goal"] = json!("performance");
    });
    assert!(coaching::coach_note(&performance, 2500).contains("for maintenance"));
}

#[test]
fn test_risk_flags_for_struggling_student() {
    let profile = common::low_weight_female();
    let analysis = tdeecalc::core::assessor::fallback_analysis(&profile);
    let flags = coaching::risk_flags(&profile, &analysis);

    assert!(flags.contains(&"Low adherence risk - focus on building sustainable habits".to_string()));
    assert!(flags.contains(&"Low body weight - ensure adequate calorie intake".to_string()));
    assert!(flags.contains(&"Stress eating may interfere with goals".to_string()));
    assert!(!flags.contains(&"High training volume - prioritize recovery and nutrition".to_string()));
}

// ── invariants ──────────────────────────────────────────────────────────────

#[test]
fn test_tdee_stays_within_factor_bounds() {
    let mut profiles: Vec<UserProfile> = tdeecalc::core::suite::canned_profiles()
        .into_iter()
        .map(|(_, p)| p)
        .collect();
    profiles.push(common::with_edit(common::standard_male_json(), |p| {
        p["lifestyle"]["job_activity_level"] = json!("very_active");
        p["training"]["training_frequency_per_week"] = json!(20);
        p["training"]["training_intensity"] = json!("very_high");
    }));

    let extreme = RecordedAnalysis::new(AiAnalysis {
        activity_factor_adjustment: -3.0,
        ..AiAnalysis::default()
    });

    for profile in &profiles {
        for provider in [None, Some(&extreme as &dyn AnalysisProvider)] {
            let r = calculate(profile, provider, &ai_options());
            let bmr = r.bmr as f64;
            assert!(r.bmr > 0 && r.bmr < 5000);
            assert!(r.tdee as f64 >= bmr * 1.1, "{} below floor", profile.name);
            assert!(r.tdee as f64 <= bmr * 2.2, "{} above cap", profile.name);
        }
    }
}

#[test]
fn test_calculation_is_deterministic() {
    let profile = common::low_weight_female();
    let a = calculate(&profile, Some(&HeuristicAssessor), &ai_options());
    let b = calculate(&profile, Some(&HeuristicAssessor), &ai_options());
    assert_eq!(a.bmr, b.bmr);
    assert_eq!(a.tdee, b.tdee);
    assert_eq!(a.targets, b.targets);
    assert_eq!(a.coaching, b.coaching);
}

#[test]
fn test_clamped_tdee_rounds_inside_the_floor() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["weight_kg"] = json!(49.6);
    });
    let r = calculate(&profile, None, &CalculateOptions::default());

    assert_eq!(r.bmr, 1241);
    // 1241 * 1.1 = 1365.1
    assert_eq!(r.tdee, 1366);
    assert!(r.tdee as f64 >= r.bmr as f64 * 1.1);

    let result = tdeecalc::core::accuracy::validate_tdee_accuracy(&profile, &r);
    assert!(result.tdee_accuracy > 2.0);
    assert_eq!(result.tdee_accuracy, 9.0);
}
