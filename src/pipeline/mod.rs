//! Hydration pipeline
//!
//! Preflight → Load → Generate → Discover → Render. Each phase runs once, in
//! order. Only the Render phase can fail the build.

mod preflight;
mod report;

use rayon::prelude::*;
use std::fs;
use std::path::Path;

use crate::assets::{AssetGenerator, AssetInput, Stage, generators, registry};
use crate::config::Settings;
use crate::consts::PREVIEW_CHARS;
use crate::data::ProfileData;
use crate::discovery::{self, RepoSource};
use crate::error::{AppError, AssetError};
use crate::render::{ContextSources, HydrationContext, preview, substitute};
use crate::utils::{Chooser, Clock, git, log};

pub(crate) use report::{AssetOutcome, AssetStatus, BuildReport, summary_table};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BuildOptions {
    /// Render everything but write nothing; print a README preview instead
    pub(crate) dry_run: bool,
}

/// Sources of time, randomness and remote data for one build
pub(crate) struct Collaborators<'a> {
    pub(crate) clock: &'a dyn Clock,
    pub(crate) chooser: &'a dyn Chooser,
    pub(crate) source: &'a dyn RepoSource,
}

pub(crate) fn run(
    settings: &Settings,
    options: BuildOptions,
    deps: &Collaborators<'_>,
) -> Result<BuildReport, AppError> {
    let paths = &settings.paths;
    let now = deps.clock.now();
    let mut report = BuildReport::default();

    log::banner(&format!("{} - README BUILDER", settings.gen_version));
    if options.dry_run {
        log::info("DRY RUN: nothing will be written");
    }

    // 1. Preflight
    if options.dry_run {
        log::detail("Preflight skipped in dry run");
    } else {
        report.preflight = preflight::run_scripts(&paths.root, &settings.preflight);
    }

    // 2. Load
    log::info("Loading data sources...");
    let data = ProfileData::load(paths);

    // 3. Generate
    log::info("Generating SVG assets...");
    let input = AssetInput {
        data: &data,
        settings,
        now,
        chooser: deps.chooser,
        telemetry: data.prior_telemetry.as_ref(),
        activity: None,
    };
    report
        .assets
        .extend(render_stage(Stage::Generate, &input, &paths.assets_dir, options.dry_run));

    // 4. Discover
    log::info(format!("Discovering vessels for {}...", settings.username));
    let snapshot_path = paths.telemetry_snapshot();
    let found = discovery::discover(
        deps.source,
        &settings.username,
        now,
        (!options.dry_run).then_some(snapshot_path.as_path()),
    );
    report.vessels = found.vessels.len();
    let telemetry = found.snapshot.as_ref().or(data.prior_telemetry.as_ref());
    if found.snapshot.is_none() && telemetry.is_some() {
        log::detail("Using prior telemetry snapshot");
    }

    let input = AssetInput {
        telemetry,
        activity: Some(&found.activity),
        ..input
    };
    report
        .assets
        .extend(render_stage(Stage::Telemetry, &input, &paths.assets_dir, options.dry_run));

    let assets: Vec<&'static dyn AssetGenerator> = registry::all().collect();
    let ctx = HydrationContext::build(&ContextSources {
        settings,
        data: &data,
        now,
        git_sha: git::short_sha(&paths.root),
        vessels: &found.vessels,
        telemetry,
        activity: &found.activity,
        assets: &assets,
    });
    report.tokens = ctx.len();
    log::detail(format!("Hydration context: {} tokens", ctx.len()));

    // 5. Render
    log::info("Rendering README...");
    let template = read_template(&paths.template)?;
    let document = substitute(&template, &ctx);
    report.document_chars = document.chars().count();

    if options.dry_run {
        log::banner("DRY RUN - README PREVIEW");
        println!("{}", preview(&document, PREVIEW_CHARS));
    } else {
        write_document(&paths.output, &document)?;
        log::info(format!("README written: {}", paths.output.display()));
        report.output = Some(paths.output.clone());
    }

    let failed = report.failed_assets().count();
    if failed > 0 {
        log::warn(format!("{failed} asset(s) failed, see above"));
    }
    log::info(format!(
        "Build complete: {} assets, {} vessels",
        report.assets.len() - failed,
        report.vessels
    ));
    if log::verbose_enabled() {
        println!("{}", summary_table(&report));
    }

    Ok(report)
}

/// Render one stage in parallel, then write results in registration order.
/// A failing generator is logged and recorded; its siblings are unaffected.
fn render_stage(
    stage: Stage,
    input: &AssetInput<'_>,
    assets_dir: &Path,
    dry_run: bool,
) -> Vec<AssetOutcome> {
    let rendered: Vec<_> = generators(stage)
        .par_iter()
        .map(|g| (*g, g.render(input)))
        .collect();

    rendered
        .into_iter()
        .map(|(generator, result)| {
            let status = match result.and_then(|svg| {
                if dry_run {
                    Ok(AssetStatus::Rendered(svg.len()))
                } else {
                    write_asset(assets_dir, generator.file_name(), &svg).map(AssetStatus::Written)
                }
            }) {
                Ok(status) => {
                    log::detail(format!("Generated: {}", generator.file_name()));
                    status
                }
                Err(e) => {
                    log::error(format!("{} failed: {}", generator.name(), e));
                    AssetStatus::Failed(e.to_string())
                }
            };
            AssetOutcome {
                name: generator.name(),
                file_name: generator.file_name(),
                stage,
                status,
            }
        })
        .collect()
}

fn write_asset(dir: &Path, file_name: &str, svg: &str) -> Result<usize, AssetError> {
    let path = dir.join(file_name);
    let written = fs::create_dir_all(dir).and_then(|()| fs::write(&path, svg));
    written.map_err(|source| AssetError::Write { path, source })?;
    Ok(svg.len())
}

fn read_template(path: &Path) -> Result<String, AppError> {
    if !path.is_file() {
        return Err(AppError::TemplateMissing {
            path: path.to_path_buf(),
        });
    }
    fs::read_to_string(path).map_err(|source| AppError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

fn write_document(path: &Path, document: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| AppError::OutputWrite {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, document).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
