use crate::error::AssetError;

use super::{AssetGenerator, AssetInput, escape_xml};

/// Horizontal timeline; the most recent entry is highlighted
pub(crate) struct Timeline;

impl Timeline {
    const FIRST_X: usize = 80;
    const LAST_X: usize = 720;
    const MAX_STEP: usize = 100;
}

impl AssetGenerator for Timeline {
    fn name(&self) -> &'static str {
        "timeline"
    }

    fn file_name(&self) -> &'static str {
        "timeline-quantum.svg"
    }

    fn token(&self) -> &'static str {
        "TIMELINE"
    }

    fn width(&self) -> u32 {
        800
    }

    fn alt(&self) -> &'static str {
        "Timeline Evolution"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let entries = &input.data.timeline;
        // Squeeze spacing so long timelines stay inside the track
        let step = if entries.len() > 1 {
            ((Self::LAST_X - Self::FIRST_X) / (entries.len() - 1)).min(Self::MAX_STEP)
        } else {
            Self::MAX_STEP
        };

        let nodes: String = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let x = Self::FIRST_X + i * step;
                let color = if i + 1 == entries.len() { t.primary } else { t.tertiary };
                format!(
                    r#"
    <g class="timeline-node" opacity="0">
      <circle cx="{x}" cy="120" r="12" fill="{color}" filter="url(#glow)">
        <animate attributeName="r" values="12;14;12" dur="2s" repeatCount="indefinite" begin="{pulse:.1}s"/>
      </circle>
      <line x1="{x}" y1="132" x2="{x}" y2="180" stroke="{color}" stroke-width="2" stroke-dasharray="4,2"/>
      <text x="{x}" y="200" text-anchor="middle" font-family="monospace" font-size="12" fill="{color}">{year}</text>
      <text x="{x}" y="220" text-anchor="middle" font-family="monospace" font-size="10" fill="{text}">{tech}</text>
      <animate attributeName="opacity" values="0;1" dur="0.5s" fill="freeze" begin="{reveal:.1}s"/>
    </g>"#,
                    pulse = i as f64 * 0.3,
                    reveal = i as f64 * 0.2,
                    year = entry.year,
                    text = t.text,
                    tech = escape_xml(&entry.technology),
                )
            })
            .collect();

        Ok(format!(
            r#"<svg width="800" height="280" viewBox="0 0 800 280" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="glow">
      <feGaussianBlur stdDeviation="2" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
  </defs>
  <style>
    .bg {{ fill: {background}; }}
    @media (prefers-reduced-motion: reduce) {{ .timeline-node {{ opacity: 1; }} }}
  </style>
  <rect class="bg" width="800" height="280"/>
  <text x="400" y="40" text-anchor="middle" font-family="monospace" font-size="14" fill="{primary}">◈ TIMELINE_EVOLUTION // QUANTUM_TUNNEL</text>
  <line x1="60" y1="55" x2="740" y2="55" stroke="{border}" stroke-width="1"/>
  <g>
    <line x1="80" y1="120" x2="720" y2="120" stroke="{tertiary}" stroke-width="3" stroke-linecap="round">
      <animate attributeName="stroke-dasharray" values="0,1000;640,0" dur="2s" fill="freeze"/>
    </line>{nodes}
  </g>
  <text x="400" y="260" text-anchor="middle" font-family="monospace" font-size="10" fill="{muted}" opacity="0.3">~~⟨ψ|t⟩~~  time evolution operator  ~~⟨ψ|t⟩~~</text>
</svg>"#,
            background = t.background,
            primary = t.primary,
            tertiary = t.tertiary,
            border = t.border,
            muted = t.muted,
        ))
    }
}
