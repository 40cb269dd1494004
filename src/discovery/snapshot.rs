use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::vessel::Vessel;

/// Aggregate counts persisted after every successful discovery.
/// Last writer wins; there is no history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TelemetrySnapshot {
    #[serde(default)]
    pub(crate) total_issues: u64,
    #[serde(default)]
    pub(crate) total_stars: u64,
    #[serde(default)]
    pub(crate) repo_count: u64,
    #[serde(default)]
    pub(crate) last_audit: String,
}

impl TelemetrySnapshot {
    pub(crate) fn from_vessels(vessels: &[Vessel], last_audit: String) -> Self {
        Self {
            total_issues: vessels.iter().map(|v| v.open_issues_count).sum(),
            total_stars: vessels.iter().map(|v| v.stargazers_count).sum(),
            repo_count: vessels.len() as u64,
            last_audit,
        }
    }

    /// Whole-file overwrite of any previous snapshot
    pub(crate) fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())
    }
}

/// Coarse repository health from the open-issue count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Health {
    Optimal,
    Stable,
    Degraded,
}

const OPTIMAL_BELOW: u64 = 5;
const STABLE_BELOW: u64 = 20;

impl Health {
    pub(crate) fn from_open_issues(open_issues: u64) -> Self {
        if open_issues < OPTIMAL_BELOW {
            Health::Optimal
        } else if open_issues < STABLE_BELOW {
            Health::Stable
        } else {
            Health::Degraded
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Health::Optimal => "OPTIMAL",
            Health::Stable => "STABLE",
            Health::Degraded => "DEGRADED",
        }
    }
}
