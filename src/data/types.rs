//! Canonical input records
//!
//! Source files disagree on shape (bare list, list under a key, or a dict of
//! category lists). Everything is normalized here into ordered `Vec`s so no
//! downstream consumer ever looks at raw JSON.

use serde_json::{Map, Value};

use crate::consts::{DEFAULT_QUOTE_AUTHOR, DEFAULT_QUOTE_TEXT, DEFAULT_SCORE, UNKNOWN};
use crate::discovery::TelemetrySnapshot;

/// The record list itself: a bare array, or the first array under one of `keys`
fn listed<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => keys.iter().find_map(|key| map.get(*key)?.as_array()),
        _ => None,
    }
}

fn records<'a>(value: &'a Value, keys: &[&str]) -> Vec<&'a Value> {
    listed(value, keys)
        .map(|items| items.iter().collect())
        .unwrap_or_default()
}

/// Like [`records`], but a dict of category lists is flattened in file order,
/// each record tagged with its category.
fn grouped_records<'a>(value: &'a Value, keys: &[&str]) -> Vec<(Option<&'a str>, &'a Value)> {
    if let Some(items) = listed(value, keys) {
        return items.iter().map(|item| (None, item)).collect();
    }
    match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(category, v)| Some((category.as_str(), v.as_array()?)))
            .flat_map(|(category, items)| items.iter().map(move |item| (Some(category), item)))
            .collect(),
        _ => Vec::new(),
    }
}

fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn int_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    let v = obj.get(key)?;
    v.as_i64().or_else(|| v.as_f64().map(|f| f.round() as i64))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Skill {
    pub(crate) name: String,
    pub(crate) score: i64,
    /// Group heading when the source file was a dict of category lists
    pub(crate) category: Option<String>,
}

impl Skill {
    pub(crate) fn new(name: &str, score: i64) -> Self {
        Self {
            name: name.to_string(),
            score,
            category: None,
        }
    }

    pub(crate) fn normalize(value: &Value) -> Vec<Self> {
        grouped_records(value, &["skills"])
            .into_iter()
            .filter_map(|(category, item)| Some((category, item.as_object()?)))
            .map(|(category, obj)| Self {
                name: str_field(obj, "name").unwrap_or_else(|| UNKNOWN.to_string()),
                // Category files carry a 0-10 `level` instead of a percentage
                score: int_field(obj, "score")
                    .or_else(|| int_field(obj, "level").map(|l| l * 10))
                    .unwrap_or(DEFAULT_SCORE),
                category: category.map(str::to_string),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TimelineEntry {
    pub(crate) year: i64,
    pub(crate) technology: String,
}

impl TimelineEntry {
    pub(crate) fn normalize(value: &Value) -> Vec<Self> {
        records(value, &["timeline", "entries"])
            .into_iter()
            .filter_map(Value::as_object)
            .map(|obj| Self {
                year: int_field(obj, "year").unwrap_or(2020),
                technology: str_field(obj, "technology").unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Quote {
    pub(crate) text: String,
    pub(crate) author: String,
}

impl Default for Quote {
    fn default() -> Self {
        Self {
            text: DEFAULT_QUOTE_TEXT.to_string(),
            author: DEFAULT_QUOTE_AUTHOR.to_string(),
        }
    }
}

impl Quote {
    pub(crate) fn normalize(value: &Value) -> Vec<Self> {
        records(value, &["quotes"])
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(Self {
                    text: text.clone(),
                    ..Self::default()
                }),
                Value::Object(obj) => {
                    let fallback = Self::default();
                    Some(Self {
                        text: str_field(obj, "text").unwrap_or(fallback.text),
                        author: str_field(obj, "author").unwrap_or(fallback.author),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PortfolioItem {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) link: String,
    pub(crate) stars: i64,
}

impl PortfolioItem {
    pub(crate) fn normalize(value: &Value) -> Vec<Self> {
        records(value, &["portfolio", "projects"])
            .into_iter()
            .filter_map(Value::as_object)
            .map(|obj| Self {
                name: str_field(obj, "name").unwrap_or_else(|| UNKNOWN.to_string()),
                description: str_field(obj, "description").unwrap_or_default(),
                link: str_field(obj, "link")
                    .or_else(|| str_field(obj, "url"))
                    .unwrap_or_else(|| "#".to_string()),
                stars: int_field(obj, "stars").unwrap_or(0),
            })
            .collect()
    }
}

/// Output of the external vulnerability scan, if one ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SecurityReport {
    pub(crate) hygiene: String,
    pub(crate) engine_version: String,
    pub(crate) critical: i64,
    pub(crate) high: i64,
    pub(crate) medium: i64,
}

impl SecurityReport {
    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let vulns = obj.get("vulnerabilities")?.as_object()?;
        Some(Self {
            hygiene: str_field(obj, "hygiene").unwrap_or_else(|| UNKNOWN.to_string()),
            engine_version: str_field(obj, "engine_version").unwrap_or_else(|| UNKNOWN.to_string()),
            critical: int_field(vulns, "critical").unwrap_or(0),
            high: int_field(vulns, "high").unwrap_or(0),
            medium: int_field(vulns, "medium").unwrap_or(0),
        })
    }

    pub(crate) fn is_alert(&self) -> bool {
        self.critical > 0 || self.high > 0
    }

    pub(crate) fn summary(&self) -> String {
        format!(
            "🛡️ SEC_AUDIT: {} | CRIT:{} HIGH:{} MED:{} | {}",
            self.hygiene, self.critical, self.high, self.medium, self.engine_version
        )
    }
}

/// Everything phase 2 hands to the generators. Read-only for the whole build.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProfileData {
    pub(crate) portfolio: Vec<PortfolioItem>,
    pub(crate) skills: Vec<Skill>,
    pub(crate) timeline: Vec<TimelineEntry>,
    pub(crate) quotes: Vec<Quote>,
    pub(crate) prior_telemetry: Option<TelemetrySnapshot>,
    pub(crate) security: Option<SecurityReport>,
}
