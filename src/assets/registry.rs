//! Generator registry
//!
//! Holds every asset generator in output order. The README layout and the
//! verbose summary both follow this order.

use std::sync::LazyLock;

use super::divider::{FlowLine, Waveform};
use super::hero::HeroOrbital;
use super::quote::{AxiomQuote, SnakeQuote};
use super::security::{GlitchSnake, SecurityPanel};
use super::skills::{CapabilityMatrix, SkillsGrid, SkillsRadar};
use super::telemetry::{Heatline, TelemetryPanel};
use super::timeline::Timeline;
use super::uplink::UplinkConsole;
use super::{AssetGenerator, Stage};

pub(crate) type BoxedGenerator = Box<dyn AssetGenerator>;

/// All registered generators
static GENERATORS: LazyLock<Vec<BoxedGenerator>> = LazyLock::new(|| {
    vec![
        Box::new(HeroOrbital),
        Box::new(FlowLine),
        Box::new(Waveform),
        Box::new(UplinkConsole),
        Box::new(SkillsGrid),
        Box::new(CapabilityMatrix),
        Box::new(Timeline),
        Box::new(AxiomQuote),
        Box::new(SnakeQuote),
        Box::new(SecurityPanel),
        Box::new(GlitchSnake),
        Box::new(SkillsRadar),
        Box::new(TelemetryPanel),
        Box::new(Heatline),
    ]
});

/// Generators that run in `stage`, in registration order
pub(crate) fn generators(stage: Stage) -> Vec<&'static dyn AssetGenerator> {
    GENERATORS
        .iter()
        .filter(|g| g.stage() == stage)
        .map(|g| g.as_ref())
        .collect()
}

/// Every generator regardless of stage
pub(crate) fn all() -> impl Iterator<Item = &'static dyn AssetGenerator> {
    GENERATORS.iter().map(|g| g.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generate_stage_order_is_fixed() {
        let files: Vec<_> = generators(Stage::Generate)
            .iter()
            .map(|g| g.file_name())
            .collect();
        assert_eq!(
            files,
            [
                "hero_orbital.svg",
                "flow-line.svg",
                "divider-waveform.svg",
                "uplink-console.svg",
                "skills-neon.svg",
                "capability-matrix.svg",
                "timeline-quantum.svg",
                "section_quote.svg",
                "snake-quote.svg",
                "security-status.svg",
                "glitch_snake.svg",
                "skills-radar.svg",
            ]
        );
    }

    #[test]
    fn telemetry_stage_runs_after_discovery() {
        let files: Vec<_> = generators(Stage::Telemetry)
            .iter()
            .map(|g| g.file_name())
            .collect();
        assert_eq!(files, ["telemetry-panel.svg", "activity-heatline.svg"]);
    }

    #[test]
    fn tokens_and_files_are_unique() {
        let tokens: HashSet<_> = all().map(|g| g.token()).collect();
        let files: HashSet<_> = all().map(|g| g.file_name()).collect();
        assert_eq!(tokens.len(), all().count());
        assert_eq!(files.len(), all().count());
    }
}
