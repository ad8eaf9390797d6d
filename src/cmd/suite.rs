use anyhow::Result;

use tdeecalc::core::suite::run_suite;
use tdeecalc::models::config::Config;
use tdeecalc::output;
use tdeecalc::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let suite = run_suite(config.validation.pass_threshold);

    if human_flag {
        println!("{}", human::format_suite(&suite));
    } else {
        let out = output::success("suite", serde_json::to_value(&suite)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
