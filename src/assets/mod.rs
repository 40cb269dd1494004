//! SVG asset generators
//!
//! Each generator is a pure function of its `AssetInput`. Randomness and
//! wall-clock time only enter through the injected chooser and `now`.

mod divider;
mod hero;
mod quote;
pub(crate) mod registry;
mod security;
mod skills;
mod telemetry;
mod theme;
mod timeline;
mod uplink;

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::data::ProfileData;
use crate::discovery::{ActivitySummary, TelemetrySnapshot};
use crate::error::AssetError;
use crate::utils::Chooser;

pub(crate) use registry::generators;
pub(crate) use theme::{HeroCopy, Theme};

/// When in the build a generator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    /// Phase 3: needs only loaded data
    Generate,
    /// Phase 4: needs discovery results
    Telemetry,
}

pub(crate) struct AssetInput<'a> {
    pub(crate) data: &'a ProfileData,
    pub(crate) settings: &'a Settings,
    pub(crate) now: DateTime<Utc>,
    pub(crate) chooser: &'a dyn Chooser,
    /// Fresh snapshot if discovery succeeded, otherwise the prior one
    pub(crate) telemetry: Option<&'a TelemetrySnapshot>,
    pub(crate) activity: Option<&'a ActivitySummary>,
}

impl AssetInput<'_> {
    pub(crate) fn theme(&self) -> &Theme {
        &self.settings.theme
    }
}

/// One output SVG and how the README embeds it
pub(crate) trait AssetGenerator: Send + Sync {
    /// Short identifier for logs
    fn name(&self) -> &'static str;

    /// File name under the assets directory
    fn file_name(&self) -> &'static str;

    /// Template token that receives the `<img>` fragment
    fn token(&self) -> &'static str;

    /// Rendered width in the README
    fn width(&self) -> u32;

    fn alt(&self) -> &'static str;

    fn stage(&self) -> Stage {
        Stage::Generate
    }

    fn render(&self, input: &AssetInput<'_>) -> Result<String, AssetError>;
}

/// Escape text for use inside SVG markup
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
