use crate::error::AssetError;

use super::{AssetGenerator, AssetInput, escape_xml};

/// Orbital identity banner across the top of the profile
pub(crate) struct HeroOrbital;

impl AssetGenerator for HeroOrbital {
    fn name(&self) -> &'static str {
        "hero-orbital"
    }

    fn file_name(&self) -> &'static str {
        "hero_orbital.svg"
    }

    fn token(&self) -> &'static str {
        "HERO_ORBITAL"
    }

    fn width(&self) -> u32 {
        1000
    }

    fn alt(&self) -> &'static str {
        "Orbital Identity"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let copy = &input.settings.hero;
        let title = escape_xml(&copy.title);
        let subtitle = escape_xml(&copy.subtitle);
        let version = escape_xml(&copy.version_label);

        let grid: String = (1..=5)
            .map(|i| format!(r#"<line x1="0" y1="{y}" x2="1000" y2="{y}"/>"#, y = i * 30))
            .chain((1..=9).map(|i| format!(r#"<line x1="{x}" y1="0" x2="{x}" y2="180"/>"#, x = i * 100)))
            .collect();

        // (class, cx, cy, r, delay)
        let particles = [
            ("particle", 220, 90, 3.0, 0.0),
            ("particle-m", 280, 45, 2.0, 0.4),
            ("particle-g", 720, 135, 2.5, 0.8),
            ("particle", 780, 90, 3.0, 1.2),
            ("particle-m", 340, 135, 2.0, 1.6),
            ("particle-g", 660, 45, 2.5, 2.0),
        ];
        let particles: String = particles
            .iter()
            .map(|(class, cx, cy, r, delay)| {
                format!(
                    r#"
    <circle class="{class} pulse-dot" cx="{cx}" cy="{cy}" r="{r}" style="animation-delay:{delay}s"/>"#
                )
            })
            .collect();

        Ok(format!(
            r##"<svg width="1000" height="180" viewBox="0 0 1000 180" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <linearGradient id="orbit-grad" x1="0%" y1="0%" x2="100%" y2="0%">
      <stop offset="0%" stop-color="{primary}" stop-opacity="0"/>
      <stop offset="50%" stop-color="{primary}" stop-opacity="1"/>
      <stop offset="100%" stop-color="{secondary}" stop-opacity="0"/>
    </linearGradient>
    <linearGradient id="title-grad" x1="0%" y1="0%" x2="100%" y2="100%">
      <stop offset="0%" stop-color="{primary}"/>
      <stop offset="50%" stop-color="{secondary}"/>
      <stop offset="100%" stop-color="{tertiary}"/>
    </linearGradient>
    <filter id="glow-heavy" x="-100%" y="-100%" width="300%" height="300%">
      <feGaussianBlur stdDeviation="4" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
    <filter id="glow-soft" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="2" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
  </defs>
  <style>
    .bg {{ fill: {background}; }}
    .grid {{ stroke: {border}; stroke-width: 0.5; opacity: 0.3; }}
    .title-fancy {{ font-family: 'Playfair Display', 'Bodoni MT', Georgia, serif; font-weight: 900; font-style: italic; font-size: 52px; letter-spacing: 6px; fill: url(#title-grad); filter: url(#glow-heavy); }}
    .subtitle {{ font-family: 'SF Mono', 'Fira Code', monospace; font-size: 11px; letter-spacing: 4px; fill: {secondary}; }}
    .status {{ font-family: 'SF Mono', monospace; font-size: 9px; fill: {muted}; }}
    .orbit {{ fill: none; stroke-width: 1.5; opacity: 0.4; }}
    .orbit-1 {{ stroke: {primary}; animation: spin-orbit 20s linear infinite; transform-origin: 500px 90px; }}
    .orbit-2 {{ stroke: {secondary}; animation: spin-orbit 15s linear infinite reverse; transform-origin: 500px 90px; }}
    .orbit-3 {{ stroke: {tertiary}; animation: spin-orbit 25s linear infinite; transform-origin: 500px 90px; }}
    @keyframes spin-orbit {{ from {{ transform: rotate(0deg); }} to {{ transform: rotate(360deg); }} }}
    .particle {{ fill: {primary}; }}
    .particle-m {{ fill: {secondary}; }}
    .particle-g {{ fill: {tertiary}; }}
    .pulse-dot {{ animation: pulse-dot 2s ease-in-out infinite; }}
    @keyframes pulse-dot {{ 0%,100% {{ r: 3; opacity: 1; }} 50% {{ r: 5; opacity: 0.6; }} }}
    .scanline {{ fill: {primary}; opacity: 0.03; animation: scan 4s linear infinite; }}
    @keyframes scan {{ 0% {{ transform: translateY(-180px); }} 100% {{ transform: translateY(180px); }} }}
    .reveal {{ opacity: 0; animation: reveal 1.5s ease-out forwards; }}
    .reveal-1 {{ animation-delay: 0.3s; }}
    .reveal-2 {{ animation-delay: 0.8s; }}
    .reveal-3 {{ animation-delay: 1.3s; }}
    @keyframes reveal {{ to {{ opacity: 1; }} }}
    @media (prefers-color-scheme: light) {{ .bg {{ fill: {light_background}; }} .title-fancy {{ fill: {light_accent}; filter: none; }} }}
    @media (prefers-reduced-motion: reduce) {{ .orbit, .pulse-dot, .scanline, .reveal {{ animation: none; opacity: 1; }} }}
  </style>
  <rect class="bg" width="1000" height="180"/>
  <g class="grid">{grid}</g>
  <rect class="scanline" x="0" y="0" width="1000" height="3"/>
  <g transform="translate(500, 90)">
    <ellipse class="orbit orbit-1" cx="0" cy="0" rx="280" ry="60"/>
    <ellipse class="orbit orbit-2" cx="0" cy="0" rx="220" ry="45"/>
    <ellipse class="orbit orbit-3" cx="0" cy="0" rx="160" ry="30"/>
  </g>
  <g filter="url(#glow-soft)">{particles}
  </g>
  <g class="reveal reveal-1" filter="url(#glow-heavy)">
    <text class="title-fancy" x="500" y="100" text-anchor="middle">{title}</text>
  </g>
  <g class="reveal reveal-2">
    <text class="subtitle" x="500" y="125" text-anchor="middle">{subtitle}</text>
  </g>
  <g class="reveal reveal-3">
    <rect x="50" y="145" width="140" height="22" rx="4" fill="{background}" stroke="{primary}" stroke-width="1" opacity="0.8"/>
    <text class="status" x="60" y="160">◉ STATUS: ONLINE</text>
    <rect x="200" y="145" width="130" height="22" rx="4" fill="{background}" stroke="{secondary}" stroke-width="1" opacity="0.8"/>
    <text class="status" x="210" y="160">◈ SYNC: ACTIVE</text>
    <rect x="340" y="145" width="150" height="22" rx="4" fill="{background}" stroke="{tertiary}" stroke-width="1" opacity="0.8"/>
    <text class="status" x="350" y="160">⬡ MODE: QUANTUM</text>
  </g>
  <g class="reveal reveal-3" transform="translate(850, 150)">
    <rect x="0" y="0" width="120" height="22" rx="4" fill="{background}" stroke="{border}" stroke-width="1"/>
    <text class="status" x="10" y="15">{version}</text>
  </g>
  <line x1="0" y1="178" x2="1000" y2="178" stroke="{border}" stroke-width="2"/>
  <rect x="0" y="177" width="400" height="3" fill="url(#orbit-grad)">
    <animate attributeName="width" values="0;1000;0" dur="6s" repeatCount="indefinite"/>
  </rect>
</svg>"##,
            primary = t.primary,
            secondary = t.secondary,
            tertiary = t.tertiary,
            background = t.background,
            border = t.border,
            muted = t.muted,
            light_background = t.light_background,
            light_accent = t.light_accent,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::input;
    use crate::config::Settings;
    use crate::data::ProfileData;

    #[test]
    fn hero_uses_configured_copy() {
        let mut settings = Settings::defaults("/tmp/p");
        settings.hero.title = "OCTO & CO".into();
        settings.hero.version_label = "v12.0 // surface".into();
        let data = ProfileData::default();

        let svg = HeroOrbital.render(&input(&data, &settings)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("OCTO &amp; CO"));
        assert!(svg.contains("v12.0 // surface"));
        assert!(svg.contains("#00f3ff"));
    }
}
