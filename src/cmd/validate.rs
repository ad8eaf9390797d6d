use std::path::Path;

use anyhow::Result;

use tdeecalc::core::accuracy::validate_tdee_accuracy;
use tdeecalc::core::intake::validate_profile;
use tdeecalc::models::config::Config;
use tdeecalc::models::{CalculationResponse, UserProfile};
use tdeecalc::output;
use tdeecalc::output::human;

use super::read_json;

pub fn run(profile_path: &Path, response_path: &Path, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let profile: UserProfile = read_json(profile_path)?;
    validate_profile(&profile)?;
    let response: CalculationResponse = read_json(response_path)?;

    let result = validate_tdee_accuracy(&profile, &response);

    if human_flag {
        println!(
            "{}",
            human::format_validation(&result, config.validation.pass_threshold)
        );
    } else {
        let out = output::success("validate", serde_json::to_value(&result)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
