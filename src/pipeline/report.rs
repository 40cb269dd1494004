use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL};
use std::path::PathBuf;

use super::preflight::{ScriptOutcome, ScriptStatus};
use crate::assets::Stage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AssetStatus {
    /// Written to disk, size in bytes
    Written(usize),
    /// Rendered but not written (dry run)
    Rendered(usize),
    Failed(String),
}

#[derive(Debug, Clone)]
pub(crate) struct AssetOutcome {
    pub(crate) name: &'static str,
    pub(crate) file_name: &'static str,
    pub(crate) stage: Stage,
    pub(crate) status: AssetStatus,
}

/// What one build did
#[derive(Debug, Clone, Default)]
pub(crate) struct BuildReport {
    /// Empty on a dry run, where preflight never runs
    pub(crate) preflight: Vec<ScriptOutcome>,
    pub(crate) assets: Vec<AssetOutcome>,
    pub(crate) vessels: usize,
    pub(crate) tokens: usize,
    /// Set only when the README was actually written
    pub(crate) output: Option<PathBuf>,
    pub(crate) document_chars: usize,
}

impl BuildReport {
    pub(crate) fn failed_assets(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.assets
            .iter()
            .filter(|a| matches!(a.status, AssetStatus::Failed(_)))
    }

    #[cfg(test)]
    pub(crate) fn outcome(&self, file_name: &str) -> Option<&AssetOutcome> {
        self.assets.iter().find(|a| a.file_name == file_name)
    }
}

fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Generate => "generate",
        Stage::Telemetry => "telemetry",
    }
}

/// Verbose-mode asset summary
pub(crate) fn summary_table(report: &BuildReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Asset").add_attribute(Attribute::Bold),
        Cell::new("File").add_attribute(Attribute::Bold),
        Cell::new("Stage").add_attribute(Attribute::Bold),
        Cell::new("Result").add_attribute(Attribute::Bold),
    ]);

    for outcome in &report.preflight {
        let result = match &outcome.status {
            ScriptStatus::Skipped => Cell::new("not found").fg(Color::DarkGrey),
            ScriptStatus::Succeeded => Cell::new("ok").fg(Color::Green),
            ScriptStatus::Failed(reason) => Cell::new(reason).fg(Color::Red),
        };
        let file = outcome
            .script
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_else(|| outcome.script.display().to_string());
        table.add_row(vec![
            Cell::new("preflight"),
            Cell::new(file),
            Cell::new("preflight"),
            result.set_alignment(CellAlignment::Right),
        ]);
    }

    for asset in &report.assets {
        let result = match &asset.status {
            AssetStatus::Written(bytes) => Cell::new(format!("{bytes} B")).fg(Color::Green),
            AssetStatus::Rendered(bytes) => Cell::new(format!("{bytes} B (dry)")).fg(Color::Cyan),
            AssetStatus::Failed(reason) => Cell::new(reason).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(asset.name),
            Cell::new(asset.file_name),
            Cell::new(stage_label(asset.stage)),
            result.set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
