//! Token table for one build

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::assets::AssetGenerator;
use crate::config::Settings;
use crate::consts::{DATE_FORMAT, GIT_SHA_SENTINEL, ISO_FORMAT, UNKNOWN};
use crate::data::ProfileData;
use crate::discovery::{ActivitySummary, Health, TelemetrySnapshot, Vessel};

use super::manifest;

const BUILD_HASH_LEN: usize = 16;
const NO_TELEMETRY: &str = "—";

/// Token name → replacement text. Rebuilt from scratch every run.
#[derive(Debug, Clone, Default)]
pub(crate) struct HydrationContext {
    tokens: BTreeMap<String, String>,
}

impl HydrationContext {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(key.into(), value.into());
    }

    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.tokens.get(key).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }
}

/// Everything the context is derived from
pub(crate) struct ContextSources<'a> {
    pub(crate) settings: &'a Settings,
    pub(crate) data: &'a ProfileData,
    pub(crate) now: DateTime<Utc>,
    pub(crate) git_sha: Option<String>,
    pub(crate) vessels: &'a [Vessel],
    /// Fresh snapshot, or the prior one when discovery failed
    pub(crate) telemetry: Option<&'a TelemetrySnapshot>,
    pub(crate) activity: &'a ActivitySummary,
    pub(crate) assets: &'a [&'static dyn AssetGenerator],
}

/// First 16 hex chars of SHA-256 over the UTC calendar date.
/// Stable for a whole day, different across days.
pub(crate) fn build_hash(now: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(now.format(DATE_FORMAT).to_string().as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..BUILD_HASH_LEN].to_string()
}

/// `<img>` fragment for one asset, cache-busted by the build timestamp
pub(crate) fn image_tag(base: &str, asset: &dyn AssetGenerator, ts: i64) -> String {
    format!(
        r#"<img src="{base}/assets/{file}?v={ts}" width="{width}" alt="{alt}" />"#,
        file = asset.file_name(),
        width = asset.width(),
        alt = asset.alt(),
    )
}

pub(crate) fn ascii_divider() -> String {
    format!("\n```text\n[ ◈ {} ◈ ]\n```\n", "-".repeat(50))
}

impl HydrationContext {
    pub(crate) fn build(src: &ContextSources<'_>) -> Self {
        let s = src.settings;
        let now = src.now;
        let iso = now.format(ISO_FORMAT).to_string();
        let mut ctx = Self::default();

        ctx.insert("TIMESTAMP", iso.clone());
        ctx.insert("LAST_SYNC", now.format("%Y-%m-%d %H:%M:%S UTC").to_string());
        ctx.insert("DISPLAY_TIMESTAMP", now.format("%Y-%m-%d %H:%M UTC").to_string());
        ctx.insert("LAST_UPDATED", format!("<!-- LAST_UPDATED: {iso} -->"));
        ctx.insert("BUILD_HASH", build_hash(now));
        ctx.insert(
            "GIT_SHA",
            src.git_sha.clone().unwrap_or_else(|| GIT_SHA_SENTINEL.to_string()),
        );
        ctx.insert("GEN_VERSION", s.gen_version.as_str());
        ctx.insert("GLITCH_GLYPH", s.glyph.as_str());
        ctx.insert(
            "SECURITY_SUMMARY",
            src.data
                .security
                .as_ref()
                .map_or_else(|| "🛡️ SEC_AUDIT: PENDING".to_string(), |r| r.summary()),
        );

        ctx.insert("VESSEL_MANIFEST", manifest::vessel_table(src.vessels));
        ctx.insert("SKILL_BARS", manifest::skill_bars(&src.data.skills));
        ctx.insert("PORTFOLIO_TABLE", manifest::portfolio_table(&src.data.portfolio));

        match src.telemetry {
            Some(t) => {
                ctx.insert("REPO_COUNT", t.repo_count.to_string());
                ctx.insert("TOTAL_STARS", t.total_stars.to_string());
                ctx.insert("TOTAL_ISSUES", t.total_issues.to_string());
                ctx.insert("NET_HEALTH", Health::from_open_issues(t.total_issues).label());
            }
            None => {
                ctx.insert("REPO_COUNT", NO_TELEMETRY);
                ctx.insert("TOTAL_STARS", NO_TELEMETRY);
                ctx.insert("TOTAL_ISSUES", NO_TELEMETRY);
                ctx.insert("NET_HEALTH", UNKNOWN);
            }
        }
        ctx.insert("VELOCITY", src.activity.velocity_label());
        ctx.insert("ASCII_DIVIDER", ascii_divider());

        let ts = now.timestamp();
        for asset in src.assets {
            ctx.insert(asset.token(), image_tag(&s.asset_base_url, *asset, ts));
        }

        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::registry;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn build_hash_is_daily() {
        let morning = build_hash(at(2026, 3, 15, 1));
        let evening = build_hash(at(2026, 3, 15, 23));
        let tomorrow = build_hash(at(2026, 3, 16, 1));
        assert_eq!(morning, evening);
        assert_ne!(morning, tomorrow);
        assert_eq!(morning.len(), 16);
        assert!(morning.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn build_hash_known_value() {
        // sha256("2026-03-15")
        let expected = {
            let mut h = Sha256::new();
            h.update(b"2026-03-15");
            format!("{:x}", h.finalize())[..16].to_string()
        };
        assert_eq!(build_hash(at(2026, 3, 15, 12)), expected);
    }

    #[test]
    fn ascii_divider_shape() {
        let d = ascii_divider();
        assert!(d.starts_with("\n```text\n[ ◈ -"));
        assert!(d.ends_with("- ◈ ]\n```\n"));
        assert_eq!(d.matches('-').count(), 50);
    }

    fn sources<'a>(
        settings: &'a Settings,
        data: &'a ProfileData,
        telemetry: Option<&'a TelemetrySnapshot>,
        activity: &'a ActivitySummary,
        assets: &'a [&'static dyn AssetGenerator],
    ) -> ContextSources<'a> {
        ContextSources {
            settings,
            data,
            now: at(2026, 3, 15, 12),
            git_sha: None,
            vessels: &[],
            telemetry,
            activity,
            assets,
        }
    }

    #[test]
    fn context_covers_scalar_tokens() {
        let settings = Settings::defaults("/tmp/p");
        let data = ProfileData::default();
        let activity = ActivitySummary::default();
        let ctx = HydrationContext::build(&sources(&settings, &data, None, &activity, &[]));

        assert_eq!(ctx.get("TIMESTAMP"), Some("2026-03-15T12:00:00Z"));
        assert_eq!(ctx.get("LAST_SYNC"), Some("2026-03-15 12:00:00 UTC"));
        assert_eq!(ctx.get("DISPLAY_TIMESTAMP"), Some("2026-03-15 12:00 UTC"));
        assert_eq!(
            ctx.get("LAST_UPDATED"),
            Some("<!-- LAST_UPDATED: 2026-03-15T12:00:00Z -->")
        );
        assert_eq!(ctx.get("GIT_SHA"), Some("DEV-UNCOMMITTED"));
        assert_eq!(ctx.get("SECURITY_SUMMARY"), Some("🛡️ SEC_AUDIT: PENDING"));
        assert_eq!(ctx.get("NET_HEALTH"), Some("UNKNOWN"));
        assert_eq!(ctx.get("VELOCITY"), Some("ERR"));
        assert_eq!(
            ctx.get("VESSEL_MANIFEST"),
            Some("*[ ! ] No active vessels discovered in public grid.*")
        );
        assert!(ctx.get("HERO_ORBITAL").is_none());
    }

    #[test]
    fn context_uses_snapshot_and_assets() {
        let mut settings = Settings::defaults("/tmp/p");
        settings.asset_base_url = "https://raw.example.com/me/me/main".into();
        let data = ProfileData::default();
        let activity = ActivitySummary {
            commits_30d: Some(9),
            ..ActivitySummary::default()
        };
        let snapshot = TelemetrySnapshot {
            total_issues: 25,
            total_stars: 300,
            repo_count: 14,
            last_audit: String::new(),
        };
        let assets: Vec<_> = registry::all().collect();
        let ctx = HydrationContext::build(&sources(
            &settings,
            &data,
            Some(&snapshot),
            &activity,
            &assets,
        ));

        assert_eq!(ctx.get("REPO_COUNT"), Some("14"));
        assert_eq!(ctx.get("TOTAL_STARS"), Some("300"));
        assert_eq!(ctx.get("NET_HEALTH"), Some("DEGRADED"));
        assert_eq!(ctx.get("VELOCITY"), Some("9 commits/mo"));

        let ts = at(2026, 3, 15, 12).timestamp();
        assert_eq!(
            ctx.get("SKILL_MATRIX").map(str::to_string),
            Some(format!(
                r#"<img src="https://raw.example.com/me/me/main/assets/capability-matrix.svg?v={ts}" width="800" alt="Capability Matrix" />"#
            ))
        );
        assert!(ctx.get("HEATLINE").is_some());
    }
}
