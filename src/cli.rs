use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "tdeecalc",
    version,
    about = "Energy expenditure and macro targets, with an accuracy audit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Log engine decisions to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Calculate BMR, TDEE and macro targets for a profile
    Calculate {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Externally produced analysis record (JSON); implies --ai
        #[arg(long)]
        analysis: Option<PathBuf>,

        /// Run the analysis collaborator
        #[arg(long)]
        ai: bool,

        /// Omit coaching notes
        #[arg(long)]
        no_coaching: bool,

        /// Omit the 7-day mini plan
        #[arg(long)]
        no_mini_plan: bool,
    },

    /// Audit a calculation response against a profile
    Validate {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Calculation response JSON file
        #[arg(long)]
        response: PathBuf,
    },

    /// Run the canned-profile validation suite
    Suite,

    /// Heuristic lifestyle analysis for a profile
    Analyze {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. validation.pass_threshold, coaching.include_mini_plan)
        key: String,
        /// Config value
        value: String,
    },
}
