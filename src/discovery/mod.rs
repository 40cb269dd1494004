//! Remote discovery
//!
//! Reads the public repository listing and events feed for one account.
//! Every failure degrades to an empty result; nothing here can abort a build.

mod activity;
mod provider;
mod snapshot;
mod vessel;

use chrono::{DateTime, Utc};
use std::path::Path;

use crate::consts::ISO_FORMAT;
use crate::utils::log;

pub(crate) use activity::{ActivitySummary, HEATLINE_DAYS};
pub(crate) use provider::{GitHubClient, RepoSource};
pub(crate) use snapshot::{Health, TelemetrySnapshot};
pub(crate) use vessel::{Vessel, collect_vessels};

/// Fresh results of one discovery pass
#[derive(Debug, Clone, Default)]
pub(crate) struct Discovery {
    pub(crate) vessels: Vec<Vessel>,
    /// Present only when the repository listing succeeded
    pub(crate) snapshot: Option<TelemetrySnapshot>,
    pub(crate) activity: ActivitySummary,
}

/// Fetch repositories and events for `username`.
///
/// When `snapshot_path` is given and the listing succeeded, the aggregate
/// snapshot is written there, replacing the previous one.
pub(crate) fn discover(
    source: &dyn RepoSource,
    username: &str,
    now: DateTime<Utc>,
    snapshot_path: Option<&Path>,
) -> Discovery {
    let (vessels, snapshot) = match source.list_repos(username) {
        Ok(repos) => {
            let vessels = collect_vessels(&repos, now);
            let snapshot =
                TelemetrySnapshot::from_vessels(&vessels, now.format(ISO_FORMAT).to_string());
            log::detail(format!(
                "Discovered {} vessels ({} forks skipped)",
                vessels.len(),
                repos.len() - vessels.len()
            ));
            if let Some(path) = snapshot_path {
                match snapshot.save(path) {
                    Ok(()) => log::detail(format!("Telemetry snapshot: {}", path.display())),
                    Err(e) => log::error(format!("Cannot write {}: {}", path.display(), e)),
                }
            }
            (vessels, Some(snapshot))
        }
        Err(e) => {
            log::discovery_error(&e);
            (Vec::new(), None)
        }
    };

    let activity = match source.list_events(username) {
        Ok(events) => ActivitySummary::from_events(&events, now),
        Err(e) => {
            log::discovery_error(&e);
            ActivitySummary::default()
        }
    };

    Discovery {
        vessels,
        snapshot,
        activity,
    }
}
