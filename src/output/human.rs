use colored::Colorize;
use comfy_table::Table;

use crate::models::analysis::AiAnalysis;
use crate::models::response::{CalculationResponse, GoalTargets};
use crate::models::validation::{ValidationResult, ValidationSuite};

/// Macro targets for every goal as a table.
pub fn format_targets(targets: &GoalTargets) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "goal", "calories", "protein", "fat", "carbs", "P/F/C %",
    ]);
    for (goal, t) in targets.iter() {
        table.add_row(vec![
            goal.to_string(),
            t.calories.to_string(),
            format!("{}g", t.protein_g),
            format!("{}g", t.fat_g),
            format!("{}g", t.carb_g),
            format!("{}/{}/{}", t.protein_percent, t.fat_percent, t.carb_percent),
        ]);
    }
    table.to_string()
}

/// Pretty-print a calculation response.
pub fn format_response(r: &CalculationResponse) -> String {
    let mut out = format!(
        "BMR: {} kcal ({}) | TDEE: {} kcal | confidence: {:.1}/10\n\n",
        r.bmr, r.method_used, r.tdee, r.confidence_score
    );
    out.push_str(&format_targets(&r.targets));

    if let Some(ai) = &r.ai_enhancements {
        out.push_str(&format!(
            "\n\nAnalysis adjustment: {:+.2} | macro profile: {}",
            ai.activity_factor_adjustment, ai.macro_profile_hint
        ));
        let timing = &ai.timing_recommendations;
        out.push_str(&format!("\n  Pre-workout:  {}", timing.pre_workout));
        out.push_str(&format!("\n  Post-workout: {}", timing.post_workout));
        out.push_str(&format!("\n  Meals:        {}", timing.meal_timing));
    }

    let coaching = &r.coaching;
    if !coaching.coach_note.is_empty() {
        out.push_str(&format!("\n\n{}", coaching.coach_note));
    }
    if let Some(note) = &coaching.ai_coach_note {
        out.push_str(&format!("\n\n{}", note));
    }
    for flag in &coaching.risk_flags {
        out.push_str(&format!("\n{} {}", "!!".yellow().bold(), flag));
    }
    for strategy in &coaching.success_strategies {
        out.push_str(&format!("\n{} {}", "++".green(), strategy));
    }
    if let Some(plan) = &coaching.mini_plan {
        out.push_str(&format!(
            "\n\nThis week: {} sessions of {}, {} steps, {}g protein minimum",
            plan.weekly_sessions, plan.training_template, plan.step_target, plan.protein_minimum_g
        ));
        for habit in &plan.habits {
            out.push_str(&format!("\n  - {}", habit));
        }
    }

    out
}

fn score_label(score: f64, threshold: f64) -> String {
    let text = format!("{:.2}", score);
    if score >= threshold {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

/// Pretty-print a single accuracy audit.
pub fn format_validation(v: &ValidationResult, threshold: f64) -> String {
    let mut out = format!(
        "Overall: {}/10 (bmr {:.1}, tdee {:.1}, macros {:.1})",
        score_label(v.overall_score, threshold),
        v.bmr_accuracy,
        v.tdee_accuracy,
        v.macro_accuracy
    );
    for warning in &v.warnings {
        out.push_str(&format!("\n{} {}", "warning:".yellow().bold(), warning));
    }
    for rec in &v.recommendations {
        out.push_str(&format!("\n  -> {}", rec));
    }
    out
}

/// Pretty-print the canned-profile battery.
pub fn format_suite(s: &ValidationSuite) -> String {
    let mut table = Table::new();
    table.set_header(vec!["profile", "overall", "bmr", "tdee", "macros", "result"]);
    for case in &s.results {
        let verdict = if case.passed { "pass" } else { "FAIL" };
        table.add_row(vec![
            case.name.clone(),
            format!("{:.2}", case.result.overall_score),
            format!("{:.1}", case.result.bmr_accuracy),
            format!("{:.1}", case.result.tdee_accuracy),
            format!("{:.1}", case.result.macro_accuracy),
            verdict.to_string(),
        ]);
    }

    let summary = format!(
        "{}/{} passed (threshold {:.1}) | average {}",
        s.passed_tests,
        s.total_tests,
        s.pass_threshold,
        score_label(s.average_score, s.pass_threshold)
    );
    format!("{}\n{}", table, summary)
}

/// Pretty-print an analysis record.
pub fn format_analysis(a: &AiAnalysis) -> String {
    let mut out = format!(
        "Lifestyle activity: {:.0}/10 | training intensity: {:.0}/10 | adherence: {:.0}/10",
        a.lifestyle_activity_score, a.training_intensity_score, a.adherence_score
    );
    out.push_str(&format!(
        "\nEstimated NEAT: {:.0} kcal | metabolic rate: {:.0} kcal ({})",
        a.estimated_neat, a.estimated_metabolic_rate, a.metabolic_efficiency
    ));
    out.push_str(&format!("\nApproach: {}", a.recommended_approach));
    if !a.key_focus_areas.is_empty() {
        out.push_str(&format!("\nFocus: {}", a.key_focus_areas.join(", ")));
    }
    for risk in &a.risk_factors {
        out.push_str(&format!("\n{} {}", "!!".yellow().bold(), risk));
    }
    out
}
