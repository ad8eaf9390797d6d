use std::path::Path;

use anyhow::Result;

use tdeecalc::core::assessor::HeuristicAssessor;
use tdeecalc::core::intake::validate_profile;
use tdeecalc::core::provider::AnalysisProvider;
use tdeecalc::models::UserProfile;
use tdeecalc::output;
use tdeecalc::output::human;

use super::read_json;

pub fn run(profile_path: &Path, human_flag: bool) -> Result<()> {
    let profile: UserProfile = read_json(profile_path)?;
    validate_profile(&profile)?;

    let analysis = HeuristicAssessor.analyze(&profile)?;

    if human_flag {
        println!("{}", human::format_analysis(&analysis));
    } else {
        let out = output::success("analyze", serde_json::to_value(&analysis)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
