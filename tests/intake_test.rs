mod common;

use serde_json::json;
use tdeecalc::core::intake::validate_profile;
use tdeecalc::error::EngineError;

fn errors_for(profile: &tdeecalc::models::UserProfile) -> Vec<String> {
    match validate_profile(profile) {
        Ok(()) => Vec::new(),
        Err(EngineError::InvalidProfile { errors }) => errors,
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_reference_profiles_are_valid() {
    assert!(validate_profile(&common::standard_male()).is_ok());
    assert!(validate_profile(&common::low_weight_female()).is_ok());
}

#[test]
fn test_all_problems_are_collected() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["name"] = json!("  ");
        p["email"] = json!("not-an-email");
        p["age"] = json!(12);
        p["gender"] = json!("robot");
        p["height_cm"] = json!(260);
        p["weight_kg"] = json!(20);
        p["goal"] = json!("bulk");
        p["body_fat_percent"] = json!(60);
    });
    assert_eq!(
        errors_for(&profile),
        vec![
            "Name is required",
            "Valid email is required",
            "Age must be between 16 and 100",
            "Gender must be male, female, or other",
            "Height must be between 100 and 250 cm",
            "Weight must be between 30 and 300 kg",
            "Goal must be fat_loss, muscle_gain, maintenance, recomposition, or performance",
            "Body fat percentage must be between 3 and 50",
        ]
    );
}

#[test]
fn test_enum_keys_must_match_exactly() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["gender"] = json!("MALE");
        p["goal"] = json!(" fat_loss ");
    });
    assert_eq!(
        errors_for(&profile),
        vec![
            "Gender must be male, female, or other",
            "Goal must be fat_loss, muscle_gain, maintenance, recomposition, or performance",
        ]
    );
}

#[test]
fn test_boundaries_are_inclusive() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["age"] = json!(16);
        p["height_cm"] = json!(250);
        p["weight_kg"] = json!(30);
        p["body_fat_percent"] = json!(3);
    });
    assert!(validate_profile(&profile).is_ok());
}

#[test]
fn test_zero_body_fat_is_rejected() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["body_fat_percent"] = json!(0);
    });
    assert_eq!(
        errors_for(&profile),
        vec!["Body fat percentage must be between 3 and 50"]
    );
}

#[test]
fn test_invalid_profile_error_code() {
    let profile = common::with_edit(common::standard_male_json(), |p| {
        p["age"] = json!(101);
    });
    let err = validate_profile(&profile).unwrap_err();
    assert_eq!(err.code(), "invalid_profile");
    assert!(err.to_string().contains("Age must be between 16 and 100"));
}
