use clap::builder::BoolishValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Draw the team structure of a GitHub organization
#[derive(Parser, Debug)]
#[command(name = "orgchart")]
#[command(version)]
#[command(
    about = "Draw the team structure of a GitHub organization",
    long_about = "Lists every member and team of a GitHub organization, works out which \
                  teams are subsets of other teams and who is in no team at all, and \
                  renders the result as a Graphviz DOT graph (or JSON)."
)]
pub struct Args {
    /// GitHub organization name
    #[arg(long, env = "GITHUB_ORG")]
    pub org: Option<String>,

    /// GitHub access token (needs read:org)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Draw teams only, without fetching their members
    ///
    /// `--hide-team-members=false` overrides a config file that enables it.
    #[arg(
        long,
        env = "HIDE_TEAM_MEMBERS",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub hide_team_members: Option<bool>,

    /// Output format: dot or json [default: dot]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, env = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./orgchart.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitHub REST API root [default: https://api.github.com]
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,

    /// Exit with code 1 when some members belong to no team
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub fail_on_orphans: Option<bool>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
