use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

/// 2026-03-15T12:00:00Z
const FROZEN_EPOCH: &str = "1773576000";

const TEMPLATE: &str = "# {{GEN_VERSION}}\n\
{{HERO_ORBITAL}}\n\
Last sync: {{LAST_SYNC}}\n\
Build: {{BUILD_HASH}} / {{GIT_SHA}}\n\
{{SECURITY_SUMMARY}}\n\
{{VESSEL_MANIFEST}}\n\
Velocity: {{VELOCITY}}\n\
Keep: {{NOT_A_TOKEN}}\n";

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "surfacegen-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write test file");
}

fn seed_project(root: &Path) {
    write_file(&root.join("config").join("README.template.md"), TEMPLATE);
    write_file(
        &root.join("skills.json"),
        r#"{"skills": [{"name": "RUST", "score": 85}, {"name": "GO", "score": 72}, {"name": "SOLIDITY", "score": 60}]}"#,
    );
    write_file(
        &root.join("timeline.json"),
        r#"[{"year": 2022, "technology": "Go"}, {"year": 2024, "technology": "Rust"}]"#,
    );
    write_file(
        &root.join("portfolio.json"),
        r#"[{"name": "surface", "description": "Profile engine", "link": "https://example.com", "stars": 3}]"#,
    );
    write_file(
        &root.join("data").join("quotes.json"),
        r#"[{"text": "Ship small", "author": "Ops"}]"#,
    );
    // Keep preflight from picking up anything outside the temp tree
    write_file(&root.join("surfacegen.toml"), "preflight = []\n");
}

fn run_surfacegen(args: &[&str], root: &Path) -> (bool, String, String) {
    let bin = std::env::var("CARGO_BIN_EXE_surfacegen").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("surfacegen.exe");
        } else {
            path.push("surfacegen");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .current_dir(root)
        .env("SURFACEGEN_ROOT", root)
        // Closed local port: every network call fails fast
        .env("SURFACEGEN_API_URL", "http://127.0.0.1:9")
        .env("SOURCE_DATE_EPOCH", FROZEN_EPOCH)
        .env_remove("GITHUB_TOKEN")
        .output()
        .expect("run surfacegen");
    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn build_hydrates_readme_and_writes_assets() {
    let root = unique_temp_dir("build");
    seed_project(&root);

    let (ok, stdout, stderr) = run_surfacegen(&[], &root);
    assert!(ok, "stdout: {stdout}\nstderr: {stderr}");

    let readme = fs::read_to_string(root.join("README.md")).expect("README written");
    assert!(readme.starts_with("# QuantumProfileSurface/v10.0\n"));
    assert!(readme.contains(r#"<img src="./assets/hero_orbital.svg?v=1773576000" width="1000""#));
    assert!(readme.contains("Last sync: 2026-03-15 12:00:00 UTC"));
    assert!(readme.contains("🛡️ SEC_AUDIT: PENDING"));
    assert!(readme.contains("*[ ! ] No active vessels discovered in public grid.*"));
    assert!(readme.contains("Velocity: ERR"));
    assert!(readme.contains("Keep: {{NOT_A_TOKEN}}"));

    for file in [
        "hero_orbital.svg",
        "skills-neon.svg",
        "skills-radar.svg",
        "section_quote.svg",
        "telemetry-panel.svg",
        "activity-heatline.svg",
    ] {
        assert!(root.join("assets").join(file).exists(), "missing {file}");
    }
    assert!(stdout.contains("!! DISCOVERY_ERROR"));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn frozen_builds_are_reproducible() {
    let root = unique_temp_dir("repro");
    seed_project(&root);

    let (ok, _, stderr) = run_surfacegen(&[], &root);
    assert!(ok, "stderr: {stderr}");
    let first = fs::read_to_string(root.join("README.md")).expect("first README");
    let first_svg = fs::read_to_string(root.join("assets").join("snake-quote.svg")).expect("svg");

    let (ok, _, stderr) = run_surfacegen(&[], &root);
    assert!(ok, "stderr: {stderr}");
    assert_eq!(fs::read_to_string(root.join("README.md")).expect("second README"), first);
    assert_eq!(
        fs::read_to_string(root.join("assets").join("snake-quote.svg")).expect("svg"),
        first_svg
    );

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_template_fails_without_readme() {
    let root = unique_temp_dir("no-template");
    seed_project(&root);
    fs::remove_file(root.join("config").join("README.template.md")).expect("remove template");

    let (ok, stdout, _) = run_surfacegen(&[], &root);
    assert!(!ok);
    assert!(stdout.contains("◈ FATAL: Template not found"));
    assert!(!root.join("README.md").exists());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn dry_run_prints_preview_and_writes_nothing() {
    let root = unique_temp_dir("dry-run");
    seed_project(&root);

    let (ok, stdout, stderr) = run_surfacegen(&["--dry-run"], &root);
    assert!(ok, "stderr: {stderr}");
    assert!(stdout.contains("DRY RUN"));
    assert!(stdout.contains("# QuantumProfileSurface/v10.0"));
    assert!(!root.join("README.md").exists());
    assert!(!root.join("assets").exists());
    assert!(!root.join("dist").exists());

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn missing_data_files_still_build() {
    let root = unique_temp_dir("bare");
    write_file(&root.join("config").join("README.template.md"), "{{QUOTE}}\n{{SKILL_BARS}}\n");
    write_file(&root.join("surfacegen.toml"), "preflight = []\n");

    let (ok, stdout, stderr) = run_surfacegen(&["-v"], &root);
    assert!(ok, "stdout: {stdout}\nstderr: {stderr}");
    assert!(stdout.contains("WARNING"));
    // Radar needs three skills; its failure is reported, not fatal
    assert!(stdout.contains("skills-radar failed"));
    assert!(!root.join("assets").join("skills-radar.svg").exists());
    assert!(root.join("assets").join("section_quote.svg").exists());

    let readme = fs::read_to_string(root.join("README.md")).expect("README written");
    assert!(readme.contains("section_quote.svg"));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn config_file_overrides_copy_and_theme() {
    let root = unique_temp_dir("config");
    seed_project(&root);
    write_file(
        &root.join("surfacegen.toml"),
        "preflight = []\ngen_version = \"Surface/v12\"\ntheme = \"spectre\"\nasset_base_url = \"https://cdn.example.com/\"\n[hero]\ntitle = \"OCTO\"\n",
    );

    let (ok, _, stderr) = run_surfacegen(&[], &root);
    assert!(ok, "stderr: {stderr}");

    let readme = fs::read_to_string(root.join("README.md")).expect("README written");
    assert!(readme.starts_with("# Surface/v12\n"));
    assert!(readme.contains("https://cdn.example.com/assets/hero_orbital.svg"));
    let hero = fs::read_to_string(root.join("assets").join("hero_orbital.svg")).expect("hero");
    assert!(hero.contains("OCTO"));
    assert!(hero.contains("#58a6ff"));

    let _ = fs::remove_dir_all(&root);
}
