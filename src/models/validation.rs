use serde::{Deserialize, Serialize};

/// Audit of one response against independently recomputed expectations.
/// Every score is on a 0-10 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub overall_score: f64,
    pub bmr_accuracy: f64,
    pub tdee_accuracy: f64,
    pub macro_accuracy: f64,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteCase {
    pub name: String,
    pub passed: bool,
    #[serde(flatten)]
    pub result: ValidationResult,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSuite {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub average_score: f64,
    pub pass_threshold: f64,
    pub results: Vec<SuiteCase>,
}
