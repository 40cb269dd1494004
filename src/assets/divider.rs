use crate::error::AssetError;

use super::{AssetGenerator, AssetInput};

/// Seconds per waveform cycle at activity level `level` (0.0 to 1.0)
pub(crate) fn waveform_duration(level: f64) -> f64 {
    (3.0 - 2.5 * level.clamp(0.0, 1.0)).max(0.5)
}

/// Animated dashed section divider
pub(crate) struct FlowLine;

impl AssetGenerator for FlowLine {
    fn name(&self) -> &'static str {
        "flow-line"
    }

    fn file_name(&self) -> &'static str {
        "flow-line.svg"
    }

    fn token(&self) -> &'static str {
        "FLOW_LINE"
    }

    fn width(&self) -> u32 {
        1000
    }

    fn alt(&self) -> &'static str {
        "Flow Divider"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        Ok(format!(
            r#"<svg width="1000" height="20" viewBox="0 0 1000 20" xmlns="http://www.w3.org/2000/svg">
  <style>
    .flow-line {{ stroke: {primary}; stroke-width: 1; stroke-dasharray: 8 4; animation: flow 2s linear infinite; }}
    @keyframes flow {{ to {{ stroke-dashoffset: -24; }} }}
    @media (prefers-color-scheme: light) {{ .flow-line {{ stroke: {light_accent}; }} }}
    @media (prefers-reduced-motion: reduce) {{ .flow-line {{ animation: none; }} }}
  </style>
  <line class="flow-line" x1="0" y1="10" x2="1000" y2="10"/>
</svg>"#,
            primary = t.primary,
            light_accent = t.light_accent,
        ))
    }
}

/// Pulse waveform whose speed and color track the activity level
pub(crate) struct Waveform;

impl Waveform {
    const POINTS: usize = 50;
    const STEP: f64 = 20.0;
    const MID: f64 = 20.0;
}

impl AssetGenerator for Waveform {
    fn name(&self) -> &'static str {
        "waveform"
    }

    fn file_name(&self) -> &'static str {
        "divider-waveform.svg"
    }

    fn token(&self) -> &'static str {
        "WAVEFORM"
    }

    fn width(&self) -> u32 {
        1000
    }

    fn alt(&self) -> &'static str {
        "Activity Waveform"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let level = input.settings.activity_level.clamp(0.0, 1.0);
        let duration = waveform_duration(level);
        let color = if level >= 0.7 { t.tertiary } else { t.primary };
        let amplitude = 4.0 + 12.0 * level;

        let mut path = format!("M0,{:.1}", Self::MID);
        for i in 1..=Self::POINTS {
            let x = i as f64 * Self::STEP;
            // Every fifth point spikes; the rest ride a low sine ripple
            let y = if i % 5 == 0 {
                Self::MID - amplitude * if i % 10 == 0 { 1.0 } else { -0.6 }
            } else {
                Self::MID + (i as f64 * 0.9).sin() * amplitude * 0.2
            };
            path.push_str(&format!(" L{x:.1},{y:.1}"));
        }

        Ok(format!(
            r#"<svg width="1000" height="40" viewBox="0 0 1000 40" xmlns="http://www.w3.org/2000/svg">
  <style>
    .wave {{ fill: none; stroke: {color}; stroke-width: 1.5; stroke-dasharray: 1200; animation: trace {duration:.2}s linear infinite; }}
    .baseline {{ stroke: {border}; stroke-width: 0.5; }}
    @keyframes trace {{ from {{ stroke-dashoffset: 1200; }} to {{ stroke-dashoffset: 0; }} }}
    @media (prefers-color-scheme: light) {{ .wave {{ stroke: {light_accent}; }} }}
    @media (prefers-reduced-motion: reduce) {{ .wave {{ animation: none; stroke-dasharray: none; }} }}
  </style>
  <line class="baseline" x1="0" y1="20" x2="1000" y2="20"/>
  <path class="wave" d="{path}"/>
</svg>"#,
            border = t.border,
            light_accent = t.light_accent,
        ))
    }
}
