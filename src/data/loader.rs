//! JSON input loading
//!
//! Inputs are best-effort: a missing or broken file degrades to an empty
//! object so the build always reaches the render phase.

use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::BuildPaths;
use crate::utils::log;

use super::types::{PortfolioItem, ProfileData, Quote, SecurityReport, Skill, TimelineEntry};
use crate::discovery::TelemetrySnapshot;

fn empty() -> Value {
    Value::Object(Map::new())
}

/// Read and parse one JSON file. Never fails; diagnostics only.
pub(crate) fn load_json(path: &Path) -> Value {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn(format!("{} not found, using defaults", path.display()));
            return empty();
        }
        Err(e) => {
            log::error(format!("Cannot read {}: {}", path.display(), e));
            return empty();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            log::error(format!("Invalid JSON in {}: {}", path.display(), e));
            empty()
        }
    }
}

/// Like `load_json`, but an absent file is expected and stays quiet
fn load_optional_json(path: &Path) -> Option<Value> {
    if !path.exists() {
        log::detail(format!("{} not present yet", path.display()));
        return None;
    }
    Some(load_json(path))
}

impl ProfileData {
    /// Phase 2: read every input and normalize it into canonical records
    pub(crate) fn load(paths: &BuildPaths) -> Self {
        let portfolio = PortfolioItem::normalize(&load_json(&paths.portfolio()));
        let skills = Skill::normalize(&load_json(&paths.skills()));
        let timeline = TimelineEntry::normalize(&load_json(&paths.timeline()));
        let quotes = Quote::normalize(&load_json(&paths.quotes()));

        let prior_telemetry = load_optional_json(&paths.telemetry_snapshot())
            .and_then(|v| serde_json::from_value::<TelemetrySnapshot>(v).ok());
        let security = load_optional_json(&paths.security_report())
            .and_then(|v| SecurityReport::from_value(&v));

        log::detail(format!("Portfolio Items: {}", portfolio.len()));
        log::detail(format!("Skills: {}", skills.len()));
        log::detail(format!("Timeline Entries: {}", timeline.len()));
        log::detail(format!("Quotes: {}", quotes.len()));

        Self {
            portfolio,
            skills,
            timeline,
            quotes,
            prior_telemetry,
            security,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_file_yields_empty_mapping() {
        let dir = tempfile::tempdir().expect("tempdir");
        let value = load_json(&dir.path().join("nope.json"));
        assert_eq!(value, json!({}));
    }

    #[test]
    fn malformed_file_yields_empty_mapping() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("skills.json");
        fs::write(&path, "{ \"skills\": [ {\"name\": ").expect("write");
        assert_eq!(load_json(&path), json!({}));
    }

    #[test]
    fn valid_file_is_parsed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("timeline.json");
        fs::write(&path, r#"[{"year": 2021, "technology": "Rust"}]"#).expect("write");
        assert_eq!(load_json(&path), json!([{"year": 2021, "technology": "Rust"}]));
    }

    #[test]
    fn load_with_no_inputs_degrades_to_empty_profile() {
        let dir = tempfile::tempdir().expect("tempdir");
        let data = ProfileData::load(&BuildPaths::under(dir.path()));
        assert!(data.portfolio.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.timeline.is_empty());
        assert!(data.quotes.is_empty());
        assert!(data.prior_telemetry.is_none());
        assert!(data.security.is_none());
    }

    #[test]
    fn load_reads_snapshot_and_security_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let dist = dir.path().join("dist");
        fs::create_dir_all(&dist).expect("mkdir");
        fs::write(
            dist.join("telemetry_data.json"),
            r#"{"total_issues": 3, "total_stars": 40, "repo_count": 7, "last_audit": "2026-01-01T00:00:00Z"}"#,
        )
        .expect("write snapshot");
        fs::write(
            dist.join("security-report.json"),
            r#"{"hygiene": "A+", "engine_version": "trivy/0.50", "vulnerabilities": {"critical": 0, "high": 1, "medium": 2}}"#,
        )
        .expect("write report");

        let data = ProfileData::load(&BuildPaths::under(dir.path()));
        let snapshot = data.prior_telemetry.expect("snapshot");
        assert_eq!(snapshot.repo_count, 7);
        assert_eq!(snapshot.total_stars, 40);
        let security = data.security.expect("security");
        assert_eq!(security.high, 1);
        assert!(security.is_alert());
    }
}
