pub mod accuracy;
pub mod activity;
pub mod assessor;
pub mod bmr;
pub mod calculate;
pub mod coaching;
pub mod confidence;
pub mod intake;
pub mod provider;
pub mod suite;
pub mod targets;
pub mod timing;

/// Round to the nearest integer with halves going up, so negative carb
/// remainders round the same way positive ones do.
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
