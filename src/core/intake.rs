use std::sync::LazyLock;

use regex::Regex;

use crate::error::EngineError;
use crate::models::profile::UserProfile;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Boundary checks run before a profile reaches the engine. Every problem is
/// collected so callers can report them together.
pub fn validate_profile(profile: &UserProfile) -> Result<(), EngineError> {
    let mut errors = Vec::new();

    if profile.name.trim().is_empty() {
        errors.push("Name is required");
    }
    if !is_valid_email(&profile.email) {
        errors.push("Valid email is required");
    }
    if !(16..=100).contains(&profile.age) {
        errors.push("Age must be between 16 and 100");
    }
    if !profile.gender.is_known() {
        errors.push("Gender must be male, female, or other");
    }
    if !(100.0..=250.0).contains(&profile.height_cm) {
        errors.push("Height must be between 100 and 250 cm");
    }
    if !(30.0..=300.0).contains(&profile.weight_kg) {
        errors.push("Weight must be between 30 and 300 kg");
    }
    if !profile.goal.is_known() {
        errors.push("Goal must be fat_loss, muscle_gain, maintenance, recomposition, or performance");
    }
    if let Some(bf) = profile.body_fat_percent {
        if !(3.0..=50.0).contains(&bf) {
            errors.push("Body fat percentage must be between 3 and 50");
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::InvalidProfile {
            errors: errors.into_iter().map(String::from).collect(),
        })
    }
}
