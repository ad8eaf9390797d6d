mod common;

use serde_json::json;
use tdeecalc::core::bmr::{self, calculate_bmr};
use tdeecalc::models::BmrMethod;

// ── method selection ────────────────────────────────────────────────────────

#[test]
fn test_powerlifter_without_body_fat_uses_cunningham() {
    let estimate = calculate_bmr(&common::standard_male());
    assert_eq!(estimate.method, BmrMethod::Cunningham);
    // 500 + 22 * (80 * 0.85)
    assert_eq!(estimate.bmr, 1996);
}

#[test]
fn test_measured_body_fat_selects_katch_mcardle() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["body_fat_percent"] = json!(20);
    });
    let estimate = calculate_bmr(&profile);
    assert_eq!(estimate.method, BmrMethod::KatchMcardle);
    // 370 + 21.6 * 64 = 1752.4
    assert_eq!(estimate.bmr, 1752);
}

#[test]
fn test_body_fat_of_fifty_falls_through() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["body_fat_percent"] = json!(50);
    });
    assert_eq!(calculate_bmr(&profile).method, BmrMethod::Cunningham);
}

#[test]
fn test_zero_body_fat_falls_through() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["body_fat_percent"] = json!(0);
    });
    assert_eq!(calculate_bmr(&profile).method, BmrMethod::MifflinStJeor);
}

#[test]
fn test_experience_past_three_years_uses_cunningham() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["training"]["training_types"] = json!(["running"]);
        p["training"]["training_experience_years"] = json!(4);
    });
    let estimate = calculate_bmr(&profile);
    assert_eq!(estimate.method, BmrMethod::Cunningham);
    // 500 + 22 * (50 * 0.75) = 1325
    assert_eq!(estimate.bmr, 1325);
}

#[test]
fn test_exactly_three_years_is_not_enough() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["training"]["training_experience_years"] = json!(3);
    });
    assert_eq!(calculate_bmr(&profile).method, BmrMethod::MifflinStJeor);
}

#[test]
fn test_bodybuilding_anywhere_in_list_uses_cunningham() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["training"]["training_types"] = json!(["yoga", "bodybuilding"]);
    });
    assert_eq!(calculate_bmr(&profile).method, BmrMethod::Cunningham);
}

// ── formulas ────────────────────────────────────────────────────────────────

#[test]
fn test_mifflin_female() {
    let estimate = calculate_bmr(&common::low_weight_female());
    assert_eq!(estimate.method, BmrMethod::MifflinStJeor);
    // 500 + 1031.25 - 125 - 161
    assert_eq!(estimate.bmr, 1245);
}

#[test]
fn test_mifflin_other_gender_uses_female_constant() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["gender"] = json!("other");
    });
    assert_eq!(calculate_bmr(&profile).bmr, 1245);
}

#[test]
fn test_mifflin_male_offset() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["gender"] = json!("male");
    });
    assert!((bmr::mifflin_st_jeor(&profile) - 1411.25).abs() < 1e-9);
}

#[test]
fn test_assumed_body_fat_by_gender() {
    use tdeecalc::models::profile::Gender;
    assert_eq!(bmr::assumed_body_fat(&Gender::Male), 15.0);
    assert_eq!(bmr::assumed_body_fat(&Gender::Female), 25.0);
    assert_eq!(bmr::assumed_body_fat(&Gender::Other), 25.0);
}

#[test]
fn test_bmr_is_at_least_one() {
    let profile = common::with_edit(common::low_weight_female_json(), |p| {
        p["age"] = json!(100);
        p["weight_kg"] = json!(30);
        p["height_cm"] = json!(100);
    });
    // 300 + 625 - 500 - 161 = 264
    assert_eq!(calculate_bmr(&profile).bmr, 264);
    assert!(calculate_bmr(&profile).bmr >= 1);
}
