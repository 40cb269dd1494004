use crate::consts::ISO_FORMAT;
use crate::data::SecurityReport;
use crate::error::AssetError;

use super::{AssetGenerator, AssetInput, escape_xml};

const SEVERITY_CRITICAL: &str = "#ef4444";
const SEVERITY_HIGH: &str = "#f97316";
const SEVERITY_MEDIUM: &str = "#eab308";

/// Audit certificate with vulnerability counts and signing time
pub(crate) struct SecurityPanel;

impl SecurityPanel {
    fn verdict(report: Option<&SecurityReport>) -> (&'static str, &'static str) {
        match report {
            None => ("PENDING", "AWAITING SCAN"),
            Some(r) if r.is_alert() => ("SECURITY ALERT", "FINDINGS DETECTED"),
            Some(r) if r.medium > 0 => ("SECURITY PASS", "MEDIUM FINDINGS"),
            Some(_) => ("SECURITY PASS", "NONE DETECTED"),
        }
    }
}

impl AssetGenerator for SecurityPanel {
    fn name(&self) -> &'static str {
        "security-panel"
    }

    fn file_name(&self) -> &'static str {
        "security-status.svg"
    }

    fn token(&self) -> &'static str {
        "SECURITY_PANEL"
    }

    fn width(&self) -> u32 {
        800
    }

    fn alt(&self) -> &'static str {
        "Security Telemetry"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let report = input.data.security.as_ref();
        let (badge, findings) = Self::verdict(report);
        let alert = report.is_some_and(SecurityReport::is_alert);
        let badge_color = if alert { t.alert } else if report.is_some() { t.tertiary } else { t.warning };

        let count = |f: fn(&SecurityReport) -> i64| report.map_or_else(|| "—".to_string(), |r| f(r).to_string());
        let critical = count(|r| r.critical);
        let high = count(|r| r.high);
        let medium = count(|r| r.medium);
        let engine = escape_xml(report.map_or("UNAVAILABLE", |r| r.engine_version.as_str()));
        let signed = input.now.format(ISO_FORMAT);

        Ok(format!(
            r##"<svg width="800" height="200" viewBox="0 0 800 200" fill="none" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <pattern id="stamp" x="0" y="0" width="20" height="20" patternUnits="userSpaceOnUse">
      <line x1="0" y1="20" x2="20" y2="0" stroke="{secondary}" stroke-width="0.5" stroke-opacity="0.05"/>
    </pattern>
  </defs>
  <rect x="2" y="2" width="796" height="196" rx="12" fill="{background}" stroke="{secondary}" stroke-width="2" stroke-dasharray="8 4" stroke-opacity="0.5"/>
  <rect width="800" height="200" rx="12" fill="url(#stamp)"/>
  <text x="30" y="40" font-family="sans-serif" font-size="20" font-weight="bold" fill="#ffffff"><tspan fill="{tertiary}">🛡</tspan> SECURITY TELEMETRY</text>
  <text x="30" y="60" font-family="monospace" font-size="12" fill="{muted}">AUDIT REPORT :: {engine}</text>
  <rect x="580" y="25" width="190" height="50" rx="8" fill="{badge_color}" fill-opacity="0.15" stroke="{badge_color}" stroke-width="1"/>
  <circle cx="600" cy="50" r="5" fill="{badge_color}"/>
  <text x="615" y="55" font-family="sans-serif" font-size="14" font-weight="bold" fill="#ffffff">{badge}</text>
  <g transform="translate(30, 85)" font-family="monospace" text-anchor="middle">
    <rect width="740" height="60" rx="8" fill="#000000" fill-opacity="0.3"/>
    <text x="120" y="30" font-size="24" font-weight="bold" fill="#ffffff">{critical}</text>
    <text x="120" y="50" font-size="10" fill="{SEVERITY_CRITICAL}">CRITICAL</text>
    <text x="370" y="30" font-size="24" font-weight="bold" fill="#ffffff">{high}</text>
    <text x="370" y="50" font-size="10" fill="{SEVERITY_HIGH}">HIGH</text>
    <text x="620" y="30" font-size="24" font-weight="bold" fill="#ffffff">{medium}</text>
    <text x="620" y="50" font-size="10" fill="{SEVERITY_MEDIUM}">MEDIUM</text>
  </g>
  <g font-family="monospace" font-size="11">
    <text x="30" y="165" fill="{muted}">VULNERABILITIES: <tspan fill="{badge_color}">{findings}</tspan></text>
    <text x="30" y="180" fill="{muted}">SIGN_TIMESTAMP: <tspan fill="#ffffff">{signed}</tspan></text>
    <text x="400" y="180" fill="{muted}">REPO_EXCURRENT: <tspan fill="{primary}">SYNCED</tspan></text>
  </g>
</svg>"##,
            background = t.background,
            primary = t.primary,
            secondary = t.secondary,
            tertiary = t.tertiary,
            muted = t.muted,
        ))
    }
}

/// Displacement-glitched glyph banner, louder when the audit raised an alert
pub(crate) struct GlitchSnake;

struct GlitchMode {
    primary: &'static str,
    accent: &'static str,
    speed: &'static str,
    scale: u32,
}

impl GlitchSnake {
    fn mode(alert: bool, accent: &'static str) -> GlitchMode {
        if alert {
            GlitchMode {
                primary: "#ff0000",
                accent: "#8b0000",
                speed: "0.05s",
                scale: 60,
            }
        } else {
            GlitchMode {
                primary: "#ffffff",
                accent,
                speed: "0.15s",
                scale: 30,
            }
        }
    }
}

impl AssetGenerator for GlitchSnake {
    fn name(&self) -> &'static str {
        "glitch-snake"
    }

    fn file_name(&self) -> &'static str {
        "glitch_snake.svg"
    }

    fn token(&self) -> &'static str {
        "GLITCH_SNAKE"
    }

    fn width(&self) -> u32 {
        1000
    }

    fn alt(&self) -> &'static str {
        "Glitch Glyph"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let alert = input.data.security.as_ref().is_some_and(SecurityReport::is_alert);
        let mode = Self::mode(alert, t.primary);
        let glyph = escape_xml(&input.settings.glyph);
        let rail = "─ ◈ ─ ".repeat(24);
        let wash = if alert {
            "\n  <rect width=\"1000\" height=\"200\" fill=\"red\" opacity=\"0.05\" filter=\"url(#f1)\"/>"
        } else {
            ""
        };

        Ok(format!(
            r##"<svg width="1000" height="200" viewBox="0 0 1000 200" xmlns="http://www.w3.org/2000/svg">
  <rect width="1000" height="200" fill="{background}"/>
  <defs>
    <filter id="f1">
      <feTurbulence type="fractalNoise" baseFrequency="0.01 0.4" numOctaves="2" result="warp">
        <animate attributeName="baseFrequency" values="0.01 0.4;0.1 0.3;0.01 0.4" dur="{speed}" repeatCount="indefinite"/>
      </feTurbulence>
      <feDisplacementMap xChannelSelector="R" yChannelSelector="G" scale="{scale}" in="SourceGraphic" in2="warp"/>
    </filter>
  </defs>
  <g opacity="0.4">
    <text x="0" y="180" font-family="monospace" font-size="14" fill="{accent}">🜂 {rail}
      <animateTransform attributeName="transform" type="translate" from="0 0" to="-200 0" dur="2s" repeatCount="indefinite"/>
    </text>
  </g>
  <g font-family="monospace" font-size="64" font-weight="bold" text-anchor="middle" dominant-baseline="middle">
    <text x="502" y="100" fill="#ff0000" opacity="0.8" filter="url(#f1)">{glyph}</text>
    <text x="498" y="100" fill="{accent}" opacity="0.8" filter="url(#f1)">{glyph}</text>
    <text x="500" y="100" fill="{primary}">{glyph}</text>
  </g>{wash}
</svg>"##,
            background = t.background,
            speed = mode.speed,
            scale = mode.scale,
            accent = mode.accent,
            primary = mode.primary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::input;
    use crate::config::Settings;
    use crate::data::ProfileData;

    fn report(critical: i64, high: i64) -> SecurityReport {
        SecurityReport {
            hygiene: "CLEAN".into(),
            engine_version: "QuantumSec/v1.0.9".into(),
            critical,
            high,
            medium: 2,
        }
    }

    #[test]
    fn panel_pending_without_report() {
        let data = ProfileData::default();
        let settings = Settings::defaults("/tmp/p");
        let svg = SecurityPanel.render(&input(&data, &settings)).unwrap();
        assert!(svg.contains("PENDING"));
        assert!(svg.contains("2026-03-15T12:30:00Z"));
    }

    #[test]
    fn panel_shows_counts() {
        let data = ProfileData {
            security: Some(report(1, 4)),
            ..ProfileData::default()
        };
        let settings = Settings::defaults("/tmp/p");
        let svg = SecurityPanel.render(&input(&data, &settings)).unwrap();
        assert!(svg.contains("SECURITY ALERT"));
        assert!(svg.contains(r##"fill="#ffffff">4</text>"##));
        assert!(svg.contains("QuantumSec/v1.0.9"));
    }

    #[test]
    fn glitch_enters_alert_mode_on_high_findings() {
        let settings = Settings::defaults("/tmp/p");

        let calm = ProfileData {
            security: Some(report(0, 0)),
            ..ProfileData::default()
        };
        let svg = GlitchSnake.render(&input(&calm, &settings)).unwrap();
        assert!(svg.contains(r#"dur="0.15s""#));
        assert!(svg.contains(r#"scale="30""#));
        assert!(!svg.contains(r#"fill="red""#));

        let hot = ProfileData {
            security: Some(report(0, 1)),
            ..ProfileData::default()
        };
        let svg = GlitchSnake.render(&input(&hot, &settings)).unwrap();
        assert!(svg.contains(r#"dur="0.05s""#));
        assert!(svg.contains(r#"scale="60""#));
        assert!(svg.contains(r##"<text x="500" y="100" fill="#ff0000">"##));
    }
}
