use crate::consts::UNKNOWN;
use crate::discovery::{HEATLINE_DAYS, Health};
use crate::error::AssetError;

use super::{AssetGenerator, AssetInput, Stage};

/// Four-column dashboard: vessels, open issues, net health, velocity
pub(crate) struct TelemetryPanel;

impl AssetGenerator for TelemetryPanel {
    fn name(&self) -> &'static str {
        "telemetry-panel"
    }

    fn file_name(&self) -> &'static str {
        "telemetry-panel.svg"
    }

    fn token(&self) -> &'static str {
        "TELEMETRY_PANEL"
    }

    fn width(&self) -> u32 {
        800
    }

    fn alt(&self) -> &'static str {
        "Telemetry Dashboard"
    }

    fn stage(&self) -> Stage {
        Stage::Telemetry
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let (vessels, issues, health) = match input.telemetry {
            Some(s) => (
                s.repo_count.to_string(),
                s.total_issues.to_string(),
                Health::from_open_issues(s.total_issues).label(),
            ),
            None => ("—".to_string(), "—".to_string(), UNKNOWN),
        };
        let velocity = input
            .activity
            .map_or_else(|| "ERR".to_string(), |a| a.velocity_label());

        let columns = [
            (vessels.as_str(), "ACTIVE VESSELS", t.primary, 28),
            (issues.as_str(), "OPEN ISSUES", t.tertiary, 28),
            (health, "NET_HEALTH", t.warning, 24),
            (velocity.as_str(), "VELOCITY", "#ffffff", 20),
        ];
        let cells: String = columns
            .iter()
            .enumerate()
            .map(|(i, (value, label, color, size))| {
                let x = 100 + i * 200;
                format!(
                    r#"
    <text x="{x}" y="65" font-size="{size}" font-weight="bold" fill="{color}">{value}</text>
    <text x="{x}" y="90" font-size="10" fill="{muted}" letter-spacing="1">{label}</text>"#,
                    muted = t.muted,
                )
            })
            .collect();

        Ok(format!(
            r#"<svg width="800" height="120" viewBox="0 0 800 120" fill="none" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="grad-telemetry" x1="0" y1="0" x2="1" y2="0">
      <stop offset="0%" stop-color="{primary}"/>
      <stop offset="100%" stop-color="{secondary}"/>
    </linearGradient>
  </defs>
  <rect width="800" height="120" rx="12" fill="{background}" stroke="{border}" stroke-width="1"/>
  <line x1="200" y1="20" x2="200" y2="100" stroke="{border}"/>
  <line x1="400" y1="20" x2="400" y2="100" stroke="{border}"/>
  <line x1="600" y1="20" x2="600" y2="100" stroke="{border}"/>
  <g font-family="monospace" text-anchor="middle">{cells}
  </g>
  <rect x="20" y="108" width="760" height="4" rx="2" fill="{panel}"/>
  <rect x="20" y="108" width="700" height="4" rx="2" fill="url(#grad-telemetry)">
    <animate attributeName="width" from="0" to="700" dur="1.5s" fill="freeze"/>
  </rect>
</svg>"#,
            primary = t.primary,
            secondary = t.secondary,
            background = t.background,
            border = t.border,
            panel = t.panel,
        ))
    }
}

/// Fourteen-day activity histogram
pub(crate) struct Heatline;

impl Heatline {
    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 40.0;
}

impl AssetGenerator for Heatline {
    fn name(&self) -> &'static str {
        "heatline"
    }

    fn file_name(&self) -> &'static str {
        "activity-heatline.svg"
    }

    fn token(&self) -> &'static str {
        "HEATLINE"
    }

    fn width(&self) -> u32 {
        800
    }

    fn alt(&self) -> &'static str {
        "14 Day Activity"
    }

    fn stage(&self) -> Stage {
        Stage::Telemetry
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let daily = input.activity.map(|a| a.daily).unwrap_or([0; HEATLINE_DAYS]);
        let peak = daily.iter().copied().max().unwrap_or(0).max(1) as f64;
        let step = Self::WIDTH / HEATLINE_DAYS as f64;

        let bars: String = daily
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let ratio = count as f64 / peak;
                let h = ratio * (Self::HEIGHT - 15.0);
                format!(
                    r#"
  <rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" rx="2" class="bar" style="opacity: {o:.2}"/>"#,
                    x = i as f64 * step,
                    y = Self::HEIGHT - h - 10.0,
                    w = step - 4.0,
                    o = 0.2 + ratio * 0.8,
                )
            })
            .collect();

        Ok(format!(
            r#"<svg width="800" height="40" viewBox="0 0 800 40" xmlns="http://www.w3.org/2000/svg">
  <style>.bar {{ fill: {tertiary}; }} .label {{ font-family: monospace; font-size: 10px; fill: {muted}; }}</style>{bars}
  <text x="0" y="40" class="label">14D_ACTIVITY_TRANSIT</text>
  <text x="740" y="40" class="label">LIVE_SIGNAL</text>
</svg>"#,
            tertiary = t.tertiary,
            muted = t.muted,
        ))
    }
}
