mod cli;
mod cmd;

use std::process;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use tdeecalc::error::EngineError;
use tdeecalc::models::config::Config;
use tdeecalc::output;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = command_name(&cli.command);
    let result = match cli.command {
        Commands::Init { force } => cmd::init::run(force, cli.human),
        Commands::Calculate {
            profile,
            analysis,
            ai,
            no_coaching,
            no_mini_plan,
        } => cmd::calculate::run(
            cmd::calculate::CalculateArgs {
                profile: &profile,
                analysis: analysis.as_deref(),
                ai,
                no_coaching,
                no_mini_plan,
            },
            cli.human,
        ),
        Commands::Validate { profile, response } => {
            cmd::validate::run(&profile, &response, cli.human)
        }
        Commands::Suite => cmd::suite::run(cli.human),
        Commands::Analyze { profile } => cmd::analyze::run(&profile, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        let code = e
            .downcast_ref::<EngineError>()
            .map(EngineError::code)
            .unwrap_or("general_error");
        let err = output::error(command, code, &format!("{:#}", e));
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Init { .. } => "init",
        Commands::Calculate { .. } => "calculate",
        Commands::Validate { .. } => "validate",
        Commands::Suite => "suite",
        Commands::Analyze { .. } => "analyze",
        Commands::Config { .. } => "config",
        Commands::Completions { .. } => "completions",
    }
}

/// Logs go to stderr so stdout stays a single JSON document.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "tdeecalc=debug" } else { "tdeecalc=warn" };
    let filter = if verbose {
        EnvFilter::new(default_directive)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
    };

    // A broken config is reported by the command itself.
    let json = Config::load().map(|c| c.logging.json).unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
