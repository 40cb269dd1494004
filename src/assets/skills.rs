use std::f64::consts::PI;

use crate::data::Skill;
use crate::error::AssetError;

use super::{AssetGenerator, AssetInput, escape_xml};

const MAX_TILES: usize = 6;

/// Hex centers: one in the middle, two flanking pairs, one below
const HEX_CENTERS: [(i32, i32); MAX_TILES] = [
    (350, 175),
    (490, 95),
    (490, 195),
    (210, 95),
    (210, 195),
    (350, 275),
];

fn tiles(skills: &[Skill]) -> &[Skill] {
    &skills[..skills.len().min(MAX_TILES)]
}

/// Neon hexagon grid of the leading skills
pub(crate) struct SkillsGrid;

impl AssetGenerator for SkillsGrid {
    fn name(&self) -> &'static str {
        "skills-grid"
    }

    fn file_name(&self) -> &'static str {
        "skills-neon.svg"
    }

    fn token(&self) -> &'static str {
        "SKILLS_GRID"
    }

    fn width(&self) -> u32 {
        700
    }

    fn alt(&self) -> &'static str {
        "Skill Matrix"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let hexes: String = tiles(&input.data.skills)
            .iter()
            .zip(HEX_CENTERS)
            .enumerate()
            .map(|(i, (skill, (x, y)))| {
                let color = t.tier_color(skill.score);
                let pulse = 2.0 + i as f64 * 0.3;
                format!(
                    r#"
    <g transform="translate({x}, {y})" class="hex hex-{i}">
      <polygon points="0,-50 43,-25 43,25 0,50 -43,25 -43,-25" fill="none" stroke="{color}" stroke-width="2" opacity="0.6">
        <animate attributeName="opacity" values="0.6;0.9;0.6" dur="{pulse:.1}s" repeatCount="indefinite"/>
      </polygon>
      <polygon points="0,-45 38,-22 38,22 0,45 -38,22 -38,-22" fill="{background}" opacity="0.8"/>
      <text x="0" y="-5" text-anchor="middle" font-family="monospace" font-size="11" fill="{color}" font-weight="bold">{name}</text>
      <text x="0" y="15" text-anchor="middle" font-family="monospace" font-size="18" fill="{color}">{score}%</text>
    </g>"#,
                    background = t.background,
                    name = escape_xml(&skill.name),
                    score = skill.score,
                )
            })
            .collect();

        let delays: String = (1..MAX_TILES)
            .map(|i| format!("    .hex-{i} {{ animation-delay: {:.1}s; }}\n", i as f64 * 0.5))
            .collect();

        Ok(format!(
            r#"<svg width="700" height="350" viewBox="0 0 700 350" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="neon-glow">
      <feGaussianBlur stdDeviation="3" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
  </defs>
  <style>
    .bg {{ fill: {background}; }}
    .title {{ font-family: 'SF Mono', monospace; font-size: 14px; fill: {primary}; }}
    @keyframes float {{ 0%, 100% {{ transform: translateY(0); }} 50% {{ transform: translateY(-5px); }} }}
    .hex {{ animation: float 4s ease-in-out infinite; }}
{delays}    @media (prefers-reduced-motion: reduce) {{ .hex {{ animation: none; }} }}
  </style>
  <rect class="bg" width="700" height="350"/>
  <text class="title" x="350" y="35" text-anchor="middle">◈ SKILL_MATRIX // NEON_GRID</text>
  <line x1="100" y1="50" x2="600" y2="50" stroke="{border}" stroke-width="1"/>
  <g filter="url(#neon-glow)">{hexes}
  </g>
  <text x="350" y="340" text-anchor="middle" font-family="monospace" font-size="10" fill="{muted}">▲ proficiency analysis complete</text>
</svg>"#,
            background = t.background,
            primary = t.primary,
            border = t.border,
            muted = t.muted,
        ))
    }
}

/// Card grid, three per row, with score-scaled bars
pub(crate) struct CapabilityMatrix;

impl CapabilityMatrix {
    const PER_ROW: usize = 3;
    const BAR_WIDTH: f64 = 170.0;
}

impl AssetGenerator for CapabilityMatrix {
    fn name(&self) -> &'static str {
        "capability-matrix"
    }

    fn file_name(&self) -> &'static str {
        "capability-matrix.svg"
    }

    fn token(&self) -> &'static str {
        "SKILL_MATRIX"
    }

    fn width(&self) -> u32 {
        800
    }

    fn alt(&self) -> &'static str {
        "Capability Matrix"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let shown = tiles(&input.data.skills);
        let rows = shown.len().div_ceil(Self::PER_ROW).max(1);
        let height = rows * 105 + 15;

        let cards: String = shown
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let (row, col) = (i / Self::PER_ROW, i % Self::PER_ROW);
                let (x, y) = (col * 260 + 10, row * 105 + 10);
                let color = t.tier_color(skill.score);
                let bar = Self::BAR_WIDTH * skill.score.clamp(0, 100) as f64 / 100.0;
                let icon: String = skill.name.chars().take(2).collect::<String>().to_uppercase();
                // Alternate cards flicker
                let filter = if i % 2 == 0 { r#" filter="url(#flicker)""# } else { "" };
                format!(
                    r#"
  <g transform="translate({x},{y})"{filter}>
    <rect width="250" height="95" rx="12" fill="{background}" stroke="{border}" stroke-width="1"/>
    <rect x="10" y="10" width="40" height="40" rx="8" fill="{color}" fill-opacity="0.1"/>
    <text x="30" y="36" text-anchor="middle" font-family="monospace" font-size="14" font-weight="bold" fill="{color}">{icon}</text>
    <text x="60" y="30" font-family="sans-serif" font-size="16" font-weight="bold" fill="{text}">{name}</text>
    <text x="60" y="50" font-family="monospace" font-size="11" fill="{muted}">PROFICIENCY {score}%</text>
    <rect x="60" y="65" width="170" height="4" rx="2" fill="{panel}"/>
    <rect x="60" y="65" width="{bar:.1}" height="4" rx="2" fill="{color}" opacity="0.6"/>
  </g>"#,
                    background = t.background,
                    border = t.border,
                    text = t.text,
                    muted = t.muted,
                    panel = t.panel,
                    icon = escape_xml(&icon),
                    name = escape_xml(&skill.name),
                    score = skill.score,
                )
            })
            .collect();

        Ok(format!(
            r#"<svg width="800" height="{height}" viewBox="0 0 800 {height}" fill="none" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="flicker">
      <feMerge><feMergeNode in="SourceGraphic"/></feMerge>
      <animate attributeName="opacity" values="1;0.7;1;0.8;1" dur="0.15s" repeatCount="indefinite"/>
    </filter>
  </defs>{cards}
</svg>"#
        ))
    }
}

/// Polar radar of every skill. Needs a polygon, so at least three axes.
pub(crate) struct SkillsRadar;

impl SkillsRadar {
    const MIN_AXES: usize = 3;
    const CENTER: f64 = 200.0;
    const RADIUS: f64 = 140.0;

    fn point(index: usize, count: usize, fraction: f64) -> (f64, f64) {
        // Clockwise from twelve o'clock
        let angle = 2.0 * PI * index as f64 / count as f64 - PI / 2.0;
        (
            Self::CENTER + Self::RADIUS * fraction * angle.cos(),
            Self::CENTER + Self::RADIUS * fraction * angle.sin(),
        )
    }

    fn polygon(count: usize, fraction: impl Fn(usize) -> f64) -> String {
        (0..count)
            .map(|i| {
                let (x, y) = Self::point(i, count, fraction(i));
                format!("{x:.1},{y:.1}")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl AssetGenerator for SkillsRadar {
    fn name(&self) -> &'static str {
        "skills-radar"
    }

    fn file_name(&self) -> &'static str {
        "skills-radar.svg"
    }

    fn token(&self) -> &'static str {
        "SKILLS_RADAR"
    }

    fn width(&self) -> u32 {
        400
    }

    fn alt(&self) -> &'static str {
        "Skills Radar"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let skills = &input.data.skills;
        let n = skills.len();
        if n < Self::MIN_AXES {
            return Err(AssetError::InsufficientData {
                asset: self.name(),
                required: Self::MIN_AXES,
                found: n,
            });
        }

        let rings: String = [0.25, 0.5, 0.75, 1.0]
            .iter()
            .map(|f| {
                format!(
                    r#"
    <polygon points="{}" fill="none" stroke="{}" stroke-width="0.5"/>"#,
                    Self::polygon(n, |_| *f),
                    t.border
                )
            })
            .collect();

        let axes: String = skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let (x, y) = Self::point(i, n, 1.0);
                let (lx, ly) = Self::point(i, n, 1.18);
                format!(
                    r#"
    <line x1="{c}" y1="{c}" x2="{x:.1}" y2="{y:.1}" stroke="{border}" stroke-width="0.5"/>
    <text x="{lx:.1}" y="{ly:.1}" text-anchor="middle" dominant-baseline="middle" font-family="monospace" font-size="9" font-weight="bold" fill="{muted}">{label}</text>"#,
                    c = Self::CENTER,
                    border = t.border,
                    muted = t.muted,
                    label = escape_xml(&skill.name.to_uppercase()),
                )
            })
            .collect();

        let shape = Self::polygon(n, |i| skills[i].score.clamp(0, 100) as f64 / 100.0);

        Ok(format!(
            r#"<svg width="400" height="400" viewBox="0 0 400 400" xmlns="http://www.w3.org/2000/svg">
  <style>
    .radar {{ fill: {tertiary}; fill-opacity: 0.15; stroke: {tertiary}; stroke-width: 2; animation: breathe 4s ease-in-out infinite; transform-origin: 200px 200px; }}
    @keyframes breathe {{ 0%,100% {{ transform: scale(1); }} 50% {{ transform: scale(1.02); }} }}
    @media (prefers-reduced-motion: reduce) {{ .radar {{ animation: none; }} }}
  </style>
  <rect width="400" height="400" fill="{background}"/>
  <g>{rings}{axes}
  </g>
  <polygon class="radar" points="{shape}"/>
</svg>"#,
            tertiary = t.tertiary,
            background = t.background,
        ))
    }
}
