mod assets;
mod cli;
mod config;
mod consts;
mod data;
mod discovery;
mod error;
mod pipeline;
mod render;
mod utils;

use chrono::{DateTime, Datelike, Utc};
use clap::Parser;

use cli::Cli;
use config::Settings;
use discovery::GitHubClient;
use pipeline::{BuildOptions, Collaborators};
use utils::{Chooser, Clock, FixedChooser, FixedClock, RandomChooser, SystemClock, log};

/// Reproducible-build override: freeze the clock and pick quotes by day of year
const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

fn source_date_epoch() -> Option<DateTime<Utc>> {
    let raw = std::env::var(SOURCE_DATE_EPOCH).ok()?;
    let secs: i64 = raw.trim().parse().ok()?;
    DateTime::<Utc>::from_timestamp(secs, 0)
}

fn main() {
    let cli = Cli::parse();
    log::set_verbose(cli.verbose);

    let settings = Settings::from_env();
    let client = GitHubClient::new(&settings.api_url, settings.token.clone());

    let (clock, chooser): (Box<dyn Clock>, Box<dyn Chooser>) = match source_date_epoch() {
        Some(now) => {
            log::detail(format!("{SOURCE_DATE_EPOCH} set, build frozen at {now}"));
            (
                Box::new(FixedClock(now)),
                Box::new(FixedChooser(now.ordinal() as usize)),
            )
        }
        None => (Box::new(SystemClock), Box::new(RandomChooser)),
    };

    let deps = Collaborators {
        clock: clock.as_ref(),
        chooser: chooser.as_ref(),
        source: &client,
    };

    if let Err(e) = pipeline::run(&settings, BuildOptions { dry_run: cli.dry_run }, &deps) {
        println!("{} FATAL: {e}", log::MARKER);
        std::process::exit(1);
    }
}
