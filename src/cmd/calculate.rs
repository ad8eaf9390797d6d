use std::path::Path;

use anyhow::Result;
use tracing::info;

use tdeecalc::core::assessor::HeuristicAssessor;
use tdeecalc::core::calculate::{CalculateOptions, calculate};
use tdeecalc::core::intake::validate_profile;
use tdeecalc::core::provider::{AnalysisProvider, RecordedAnalysis};
use tdeecalc::models::config::Config;
use tdeecalc::models::{AiAnalysis, UserProfile};
use tdeecalc::output;
use tdeecalc::output::human;

use super::read_json;

pub struct CalculateArgs<'a> {
    pub profile: &'a Path,
    pub analysis: Option<&'a Path>,
    pub ai: bool,
    pub no_coaching: bool,
    pub no_mini_plan: bool,
}

pub fn run(args: CalculateArgs<'_>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let profile: UserProfile = read_json(args.profile)?;
    validate_profile(&profile)?;

    let provider: Option<Box<dyn AnalysisProvider>> = match args.analysis {
        Some(path) => {
            let record: AiAnalysis = read_json(path)?;
            Some(Box::new(RecordedAnalysis::new(record)))
        }
        None if args.ai || config.analysis.ai_mode => Some(Box::new(HeuristicAssessor)),
        None => None,
    };

    let options = CalculateOptions {
        ai_mode: provider.is_some(),
        include_coaching: config.coaching.include_coaching && !args.no_coaching,
        include_mini_plan: config.coaching.include_mini_plan && !args.no_mini_plan,
    };
    if let Some(p) = &provider {
        info!(provider = p.name(), "analysis collaborator enabled");
    }

    let response = calculate(&profile, provider.as_deref(), &options);

    if human_flag {
        println!("{}", human::format_response(&response));
    } else {
        let out = output::success("calculate", serde_json::to_value(&response)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
