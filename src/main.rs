mod error;
mod freshness;
mod marker;
mod report;
mod scanner;
mod types;

use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use types::CheckConfig;

#[derive(Parser, Debug)]
#[command(version, about = "Fail when designated documentation files are missing or stale", long_about = None)]
struct Args {
    /// Directory the target paths are resolved against
    #[arg(long, short = 'r', default_value = ".")]
    root: PathBuf,

    /// Log which timestamp each target resolved to
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = CheckConfig {
        root: args.root,
        ..CheckConfig::default()
    };
    log::debug!(
        "Checking {} targets under {} (max age {}d)",
        config.targets.len(),
        config.root.display(),
        config.max_age_days
    );

    let violations = scanner::scan(&config, Utc::now())?;
    report::print_report(&violations);
    Ok(report::exit_code(&violations))
}
