mod common;

use serde_json::json;
use tdeecalc::core::assessor::{HeuristicAssessor, fallback_analysis};
use tdeecalc::core::calculate::{CalculateOptions, calculate};
use tdeecalc::core::suite::run_suite;
use tdeecalc::models::ValidationResult;
use tdeecalc::output::human::{
    format_analysis, format_response, format_suite, format_targets, format_validation,
};
use tdeecalc::output::{error, success};

// ─── envelopes ───────────────────────────────────────────────────────────────

#[test]
fn test_success_envelope_structure() {
    let data = json!({"tdee": 2695});
    let result = success("calculate", data.clone());

    assert_eq!(result["status"], "ok");
    assert_eq!(result["command"], "calculate");
    assert_eq!(result["data"], data);
    assert!(result["error"].is_null());
}

#[test]
fn test_error_envelope_structure() {
    let result = error("validate", "invalid_profile", "Name is required");

    assert_eq!(result["status"], "error");
    assert_eq!(result["command"], "validate");
    assert!(result["data"].is_null());
    assert_eq!(result["error"]["code"], "invalid_profile");
    assert_eq!(result["error"]["message"], "Name is required");
}

// ─── human ───────────────────────────────────────────────────────────────────

#[test]
fn test_format_targets_lists_every_goal() {
    let response = calculate(&common::standard_male(), None, &CalculateOptions::default());
    let table = format_targets(&response.targets);
    for goal in ["maintenance", "fat_loss", "muscle_gain", "recomposition"] {
        assert!(table.contains(goal), "missing {goal}");
    }
    assert!(table.contains("184g"));
}

#[test]
fn test_format_response_headline() {
    let options = CalculateOptions {
        ai_mode: true,
        ..CalculateOptions::default()
    };
    let response = calculate(&common::standard_male(), Some(&HeuristicAssessor), &options);
    let text = format_response(&response);

    assert!(text.starts_with("BMR: 1996 kcal (cunningham) | TDEE: 2695 kcal"));
    assert!(text.contains("macro profile: higher_protein_strength_training"));
    assert!(text.contains("This week:"));
}

#[test]
fn test_format_validation_lists_warnings() {
    let result = ValidationResult {
        overall_score: 6.5,
        bmr_accuracy: 7.0,
        tdee_accuracy: 6.0,
        macro_accuracy: 6.5,
        warnings: vec!["Medical conditions present - consult healthcare provider".into()],
        recommendations: vec!["Enable AI mode for more personalized recommendations".into()],
    };
    let text = format_validation(&result, 7.0);
    assert!(text.contains("6.50"));
    assert!(text.contains("Medical conditions present"));
    assert!(text.contains("-> Enable AI mode"));
}

#[test]
fn test_format_suite_summary() {
    let text = format_suite(&run_suite(0.0));
    assert!(text.contains("desk_bound_lifter"));
    assert!(text.contains("5/5 passed"));
}

#[test]
fn test_format_analysis() {
    let text = format_analysis(&fallback_analysis(&common::low_weight_female()));
    assert!(text.contains("adherence: 4/10"));
    assert!(text.contains("stress_eating"));
}
