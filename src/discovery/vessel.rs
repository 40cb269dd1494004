//! Repository records ("vessels")
//!
//! Consumers written against the GitHub API read the canonical keys, older
//! templates read the short ones. Every record carries both, always equal.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{ISO_FORMAT, UNKNOWN};

const ACTIVE_WINDOW_DAYS: i64 = 90;
const NO_DESCRIPTION: &str = "No description provided.";
const NO_LANGUAGE: &str = "Misc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum Freshness {
    Active,
    Stable,
}

impl Freshness {
    /// `ACTIVE` when updated fewer than 90 days before `now`
    pub(crate) fn classify(updated_at: &str, now: DateTime<Utc>) -> Self {
        match parse_github_time(updated_at) {
            Some(updated) if (now - updated).num_days() < ACTIVE_WINDOW_DAYS => Freshness::Active,
            _ => Freshness::Stable,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Freshness::Active => "ACTIVE",
            Freshness::Stable => "STABLE",
        }
    }
}

pub(crate) fn parse_github_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, ISO_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Vessel {
    pub(crate) name: String,
    pub(crate) desc: String,
    pub(crate) description: String,
    pub(crate) stars: u64,
    pub(crate) stargazers_count: u64,
    pub(crate) forks: u64,
    pub(crate) forks_count: u64,
    pub(crate) lang: String,
    pub(crate) language: String,
    pub(crate) url: String,
    pub(crate) html_url: String,
    pub(crate) status: Freshness,
    pub(crate) updated_at: String,
    pub(crate) open_issues_count: u64,
}

fn text(repo: &Value, key: &str) -> Option<String> {
    repo.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn count(repo: &Value, key: &str) -> u64 {
    repo.get(key).and_then(Value::as_u64).unwrap_or(0)
}

impl Vessel {
    /// Build from one raw API record; forks yield `None`
    pub(crate) fn from_repo(repo: &Value, now: DateTime<Utc>) -> Option<Self> {
        if repo.get("fork").and_then(Value::as_bool).unwrap_or(false) {
            return None;
        }

        let description = text(repo, "description").unwrap_or_else(|| NO_DESCRIPTION.to_string());
        let language = text(repo, "language").unwrap_or_else(|| NO_LANGUAGE.to_string());
        let html_url = text(repo, "html_url").unwrap_or_default();
        let stars = count(repo, "stargazers_count");
        let forks = count(repo, "forks_count");
        let updated_at = text(repo, "updated_at").unwrap_or_default();

        Some(Self {
            name: text(repo, "name").unwrap_or_else(|| UNKNOWN.to_string()),
            desc: description.clone(),
            description,
            stars,
            stargazers_count: stars,
            forks,
            forks_count: forks,
            lang: language.clone(),
            language,
            url: html_url.clone(),
            html_url,
            status: Freshness::classify(&updated_at, now),
            updated_at,
            open_issues_count: count(repo, "open_issues_count"),
        })
    }
}

/// Drop forks and convert the rest, keeping API order
pub(crate) fn collect_vessels(repos: &[Value], now: DateTime<Utc>) -> Vec<Vessel> {
    repos
        .iter()
        .filter_map(|repo| Vessel::from_repo(repo, now))
        .collect()
}
