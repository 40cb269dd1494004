use crate::data::Quote;
use crate::error::AssetError;
use crate::utils::Chooser;

use super::{AssetGenerator, AssetInput, escape_xml};

/// Approximate advance of one 20px monospace character
const CHAR_WIDTH: i64 = 12;
const VIEW_WIDTH: i64 = 1200;

/// Pick one quote, or the operator axiom when there are none
pub(crate) fn pick_quote(quotes: &[Quote], chooser: &dyn Chooser) -> Quote {
    if quotes.is_empty() {
        return Quote::default();
    }
    let index = chooser.pick(quotes.len()).min(quotes.len() - 1);
    quotes[index].clone()
}

/// Scroll end offset for a banner line of `chars` characters
pub(crate) fn scroll_end(chars: usize) -> i64 {
    -(chars as i64 * CHAR_WIDTH + 200)
}

/// Axiom card with a single quote
pub(crate) struct AxiomQuote;

impl AssetGenerator for AxiomQuote {
    fn name(&self) -> &'static str {
        "axiom-quote"
    }

    fn file_name(&self) -> &'static str {
        "section_quote.svg"
    }

    fn token(&self) -> &'static str {
        "QUOTE"
    }

    fn width(&self) -> u32 {
        800
    }

    fn alt(&self) -> &'static str {
        "Axiom"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let quote = pick_quote(&input.data.quotes, input.chooser);
        let text = escape_xml(&quote.text);
        let author = escape_xml(&quote.author);
        let glyph = escape_xml(&input.settings.glyph);

        Ok(format!(
            r#"<svg width="800" height="140" viewBox="0 0 800 140" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <filter id="quote-glow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="2" result="blur"/>
      <feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
    </filter>
  </defs>
  <style>
    .quote-bg {{ fill: {background}; }}
    .quote-border {{ fill: none; stroke: {border}; stroke-width: 1; }}
    .quote-mark {{ font-family: Georgia, serif; font-size: 64px; fill: {primary}; opacity: 0.15; }}
    .quote-text {{ font-family: 'Playfair Display', Georgia, serif; font-size: 18px; font-style: italic; fill: {text_color}; }}
    .quote-author {{ font-family: 'SF Mono', monospace; font-size: 11px; fill: {muted}; letter-spacing: 2px; }}
    .quote-glyph {{ font-family: monospace; font-size: 10px; fill: {tertiary}; opacity: 0.6; }}
    .pulse-line {{ stroke: {primary}; stroke-width: 1; stroke-dasharray: 4 2; animation: pulse-line 2s ease-in-out infinite; }}
    @keyframes pulse-line {{ 0%,100% {{ opacity: 0.3; }} 50% {{ opacity: 0.7; }} }}
    .corner {{ fill: none; stroke: {secondary}; stroke-width: 1; stroke-opacity: 0.3; }}
    @media (prefers-color-scheme: light) {{ .quote-bg {{ fill: {light_background}; }} .quote-mark {{ fill: {light_accent}; }} .quote-text {{ fill: #24292f; }} }}
    @media (prefers-reduced-motion: reduce) {{ .pulse-line {{ animation: none; opacity: 0.5; }} }}
  </style>
  <rect class="quote-bg" x="0" y="0" width="800" height="140" rx="8"/>
  <rect class="quote-border" x="0.5" y="0.5" width="799" height="139" rx="8"/>
  <path class="corner" d="M15,35 L15,15 L35,15"/>
  <path class="corner" d="M765,15 L785,15 L785,35"/>
  <path class="corner" d="M785,105 L785,125 L765,125"/>
  <path class="corner" d="M35,125 L15,125 L15,105"/>
  <text class="quote-mark" x="30" y="70">“</text>
  <g filter="url(#quote-glow)">
    <text class="quote-text" x="400" y="60" text-anchor="middle">“{text}”</text>
  </g>
  <line class="pulse-line" x1="300" y1="80" x2="500" y2="80"/>
  <text class="quote-author" x="400" y="100" text-anchor="middle">— {glyph} ∙ {author}</text>
  <text class="quote-glyph" x="400" y="125" text-anchor="middle">◈ AXIOM ◈</text>
  <text class="quote-mark" x="750" y="100">”</text>
</svg>"#,
            background = t.background,
            border = t.border,
            primary = t.primary,
            secondary = t.secondary,
            tertiary = t.tertiary,
            muted = t.muted,
            text_color = t.text,
            light_background = t.light_background,
            light_accent = t.light_accent,
        ))
    }
}

/// Horizontally scrolling quote banner
pub(crate) struct SnakeQuote;

impl AssetGenerator for SnakeQuote {
    fn name(&self) -> &'static str {
        "snake-quote"
    }

    fn file_name(&self) -> &'static str {
        "snake-quote.svg"
    }

    fn token(&self) -> &'static str {
        "SNAKE_QUOTE"
    }

    fn width(&self) -> u32 {
        1200
    }

    fn alt(&self) -> &'static str {
        "System Philosophy"
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError> {
        let t = input.theme();
        let quote = pick_quote(&input.data.quotes, input.chooser);
        let line = format!("▸ “{}” — {}", quote.text, quote.author);
        let end_x = scroll_end(line.chars().count());
        let body = escape_xml(&format!("“{}” — {}", quote.text, quote.author));

        Ok(format!(
            r#"<svg fill="none" viewBox="0 0 {VIEW_WIDTH} 80" width="{VIEW_WIDTH}" height="80" xmlns="http://www.w3.org/2000/svg">
  <title>Rotating system philosophy quote</title>
  <defs>
    <style>
      .quote-container {{ font-family: 'JetBrains Mono', monospace; font-size: 20px; font-weight: 500; letter-spacing: 0.04em; }}
      @keyframes snake-scroll {{ from {{ transform: translateX({VIEW_WIDTH}px); }} to {{ transform: translateX({end_x}px); }} }}
      #snake-quote {{ animation: snake-scroll 40s linear infinite; will-change: transform; }}
      .accent {{ fill: {primary}; }}
      .quote {{ fill: {text}; }}
      @media (prefers-color-scheme: light) {{ .accent {{ fill: {light_accent}; }} .quote {{ fill: #24292f; }} }}
      @media (prefers-reduced-motion: reduce) {{ #snake-quote {{ animation: none; }} }}
    </style>
  </defs>
  <g id="snake-quote" class="quote-container">
    <text y="40" dominant-baseline="middle">
      <tspan class="accent">▸ </tspan>
      <tspan class="quote">{body}</tspan>
    </text>
  </g>
</svg>"#,
            primary = t.primary,
            text = t.text,
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
    use crate::utils::FixedChooser;

    fn quotes() -> Vec<Quote> {
        vec![
            Quote {
                text: "First".into(),
                author: "A".into(),
            },
            Quote {
                text: "Second".into(),
                author: "B".into(),
            },
        ]
    }

    #[test]
    fn pick_quote_defaults_when_empty() {
        let q = pick_quote(&[], &FixedChooser(3));
        assert_eq!(q, Quote::default());
    }

    #[test]
    fn pick_quote_uses_chooser() {
        assert_eq!(pick_quote(&quotes(), &FixedChooser(1)).text, "Second");
        assert_eq!(pick_quote(&quotes(), &FixedChooser(2)).text, "First");
    }

    #[test]
    fn scroll_end_tracks_length() {
        assert_eq!(scroll_end(0), -200);
        assert_eq!(scroll_end(10), -320);
    }

    #[test]
    fn axiom_card_renders_default_quote() {
        let data = ProfileData::default();
        let settings = Settings::defaults("/tmp/p");
        let svg = AxiomQuote.render(&input(&data, &settings)).unwrap();
        assert!(svg.contains("Complexity is debt"));
        assert!(svg.contains("Operator Axiom"));
    }

    #[test]
    fn snake_quote_end_offset_matches_text() {
        let data = ProfileData {
            quotes: vec![Quote {
                text: "Ship it".into(),
                author: "Ops".into(),
            }],
            ..ProfileData::default()
        };
        let settings = Settings::defaults("/tmp/p");
        let svg = SnakeQuote.render(&input(&data, &settings)).unwrap();

        // "▸ “Ship it” — Ops" is 17 characters
        assert!(svg.contains("translateX(-404px)"));
        assert!(svg.contains("Ship it"));
    }
}
