use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use super::vessel::parse_github_time;

pub(crate) const HEATLINE_DAYS: usize = 14;
const VELOCITY_WINDOW_DAYS: i64 = 30;

/// Recent account activity derived from the public events feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActivitySummary {
    /// Commits pushed in the last 30 days; `None` when the feed was unavailable
    pub(crate) commits_30d: Option<u64>,
    /// Events per day, oldest first; the last slot is today
    pub(crate) daily: [u32; HEATLINE_DAYS],
}

impl Default for ActivitySummary {
    fn default() -> Self {
        Self {
            commits_30d: None,
            daily: [0; HEATLINE_DAYS],
        }
    }
}

impl ActivitySummary {
    pub(crate) fn from_events(events: &[Value], now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let velocity_cutoff = now - Duration::days(VELOCITY_WINDOW_DAYS);
        let mut commits = 0u64;
        let mut daily = [0u32; HEATLINE_DAYS];

        for event in events {
            let Some(created) = event
                .get("created_at")
                .and_then(Value::as_str)
                .and_then(parse_github_time)
            else {
                continue;
            };

            let delta = (today - created.date_naive()).num_days();
            if (0..HEATLINE_DAYS as i64).contains(&delta) {
                daily[HEATLINE_DAYS - 1 - delta as usize] += 1;
            }

            let is_push = event.get("type").and_then(Value::as_str) == Some("PushEvent");
            if is_push && created > velocity_cutoff {
                commits += event
                    .pointer("/payload/commits")
                    .and_then(Value::as_array)
                    .map_or(0, |c| c.len() as u64);
            }
        }

        Self {
            commits_30d: Some(commits),
            daily,
        }
    }

    pub(crate) fn velocity_label(&self) -> String {
        match self.commits_30d {
            Some(n) => format!("{n} commits/mo"),
            None => "ERR".to_string(),
        }
    }
}
