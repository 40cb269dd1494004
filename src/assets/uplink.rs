use crate::error::AssetError;

use super::{AssetGenerator, AssetInput, escape_xml};

/// Contact console with the configured handle and email
pub(crate) struct UplinkConsole;

impl AssetGenerator for UplinkConsole {
    fn name(&self) -> &'static str {
        "uplink-console"
    }

    fn file_name(&self) -> &'static str {
        "uplink-console.svg"
    }

    fn token(&self) -> &'static str {
        "UPLINK_CONSOLE"
    }

    fn width(&self) -> u32 {
        700
    }

    fn alt(&self) -> &'static str {
        "Uplink Console"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let s = input.settings;
        let username = escape_xml(&s.username);
        let email = escape_xml(&s.email);
        let glyph = escape_xml(&s.glyph);

        Ok(format!(
            r#"<svg width="700" height="200" viewBox="0 0 700 200" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="uplink-glow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="3" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
  </defs>
  <style>
    .uplink-bg {{ fill: {background}; }}
    .uplink-border {{ fill: none; stroke: {primary}; stroke-width: 2; stroke-opacity: 0.5; }}
    .uplink-header {{ font-family: 'SF Mono', monospace; font-size: 11px; fill: {primary}; letter-spacing: 2px; }}
    .uplink-label {{ font-family: 'SF Mono', monospace; font-size: 10px; fill: {muted}; }}
    .uplink-value {{ font-family: 'SF Mono', monospace; font-size: 12px; fill: {text}; }}
    .uplink-accent {{ font-family: 'SF Mono', monospace; font-size: 10px; fill: {secondary}; }}
    .uplink-footer {{ font-family: 'SF Mono', monospace; font-size: 9px; fill: {muted}; }}
    .signal {{ fill: {tertiary}; animation: signal-pulse 2s ease-in-out infinite; }}
    @keyframes signal-pulse {{ 0%,100% {{ opacity: 0.6; }} 50% {{ opacity: 1; }} }}
    .orbit-ring {{ fill: none; stroke: {primary}; stroke-width: 0.5; stroke-dasharray: 4 4; animation: orbit-spin 10s linear infinite; transform-origin: 350px 80px; }}
    @keyframes orbit-spin {{ to {{ transform: rotate(360deg); }} }}
    .corner-decor {{ fill: none; stroke: {secondary}; stroke-width: 1; stroke-opacity: 0.4; }}
    @media (prefers-color-scheme: light) {{ .uplink-bg {{ fill: {light_background}; }} .uplink-border {{ stroke: {light_accent}; }} .uplink-header {{ fill: {light_accent}; }} }}
    @media (prefers-reduced-motion: reduce) {{ .signal, .orbit-ring {{ animation: none; opacity: 0.7; }} }}
  </style>
  <rect class="uplink-bg" x="0" y="0" width="700" height="200" rx="8"/>
  <rect class="uplink-border" x="1" y="1" width="698" height="198" rx="8"/>
  <path class="corner-decor" d="M10,30 L10,10 L30,10"/>
  <path class="corner-decor" d="M670,10 L690,10 L690,30"/>
  <path class="corner-decor" d="M690,170 L690,190 L670,190"/>
  <path class="corner-decor" d="M30,190 L10,190 L10,170"/>
  <g transform="translate(350, 80)">
    <ellipse class="orbit-ring" cx="0" cy="0" rx="60" ry="20"/>
  </g>
  <g filter="url(#uplink-glow)">
    <text class="uplink-header" x="350" y="30" text-anchor="middle">◈ UPLINK CONSOLE ◈</text>
  </g>
  <g transform="translate(30, 60)">
    <circle class="signal" cx="0" cy="5" r="3"/>
    <text class="uplink-label" x="15" y="3">GITHUB</text>
    <text class="uplink-value" x="15" y="18">@{username}</text>
    <circle class="signal" cx="0" cy="45" r="3" style="animation-delay:0.5s"/>
    <text class="uplink-label" x="15" y="43">EMAIL</text>
    <text class="uplink-value" x="15" y="58">{email}</text>
  </g>
  <g transform="translate(430, 60)">
    <circle class="signal" cx="0" cy="5" r="3" style="animation-delay:1s"/>
    <text class="uplink-label" x="15" y="3">PROTOCOL</text>
    <text class="uplink-value" x="15" y="18">context · constraints</text>
    <circle class="signal" cx="0" cy="45" r="3" style="animation-delay:1.5s"/>
    <text class="uplink-label" x="15" y="43">IDEAL OUTCOME</text>
    <text class="uplink-accent" x="15" y="58">specify for engagement</text>
  </g>
  <line x1="30" y1="140" x2="670" y2="140" stroke="{border}" stroke-width="1" stroke-dasharray="2 4"/>
  <text class="uplink-footer" x="350" y="165" text-anchor="middle">{glyph} ∙ 🛰 CHANNEL ACTIVE</text>
  <text class="uplink-footer" x="350" y="185" text-anchor="middle">Send transmission → await entanglement</text>
</svg>"#,
            background = t.background,
            primary = t.primary,
            secondary = t.secondary,
            tertiary = t.tertiary,
            muted = t.muted,
            text = t.text,
            border = t.border,
            light_background = t.light_background,
            light_accent = t.light_accent,
        ))
    }
}
