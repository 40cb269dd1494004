use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{HeroCopy, Theme};
use crate::consts::{DEFAULT_GEN_VERSION, DEFAULT_GLYPH};
use crate::utils::log;

pub(crate) const ROOT_ENV: &str = "SURFACEGEN_ROOT";
pub(crate) const API_URL_ENV: &str = "SURFACEGEN_API_URL";
pub(crate) const TOKEN_ENV: &str = "GITHUB_TOKEN";

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_USERNAME: &str = "popdeuxrem";

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigTheme {
    Quantum,
    Spectre,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ConfigHero {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) subtitle: Option<String>,
    #[serde(default)]
    pub(crate) version_label: Option<String>,
}

/// On-disk TOML configuration. Every key is optional.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) username: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) asset_base_url: Option<String>,
    #[serde(default)]
    pub(crate) gen_version: Option<String>,
    #[serde(default)]
    pub(crate) glyph: Option<String>,
    #[serde(default)]
    pub(crate) theme: Option<ConfigTheme>,
    #[serde(default)]
    pub(crate) activity_level: Option<f64>,
    #[serde(default)]
    pub(crate) preflight: Option<Vec<String>>,
    #[serde(default)]
    pub(crate) template: Option<String>,
    #[serde(default)]
    pub(crate) output: Option<String>,
    #[serde(default)]
    pub(crate) hero: ConfigHero,
}

impl Config {
    pub(crate) fn load(root: &Path) -> Self {
        for path in Self::get_config_paths(root) {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        log::detail(format!("Loaded config from {}", path.display()));
                        return config;
                    }
                    Err(e) => {
                        log::warn(format!("Failed to parse {}: {}", path.display(), e));
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths(root: &Path) -> Vec<PathBuf> {
        // 1. Project-local: <root>/surfacegen.toml
        let mut paths = vec![root.join("surfacegen.toml")];

        // 2. XDG config: ~/.config/surfacegen/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("surfacegen").join("config.toml"));
        }

        // 3. Platform config dir (Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("surfacegen").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 4. Home directory: ~/.surfacegen.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".surfacegen.toml"));
        }

        paths
    }
}

/// Every filesystem location the pipeline touches, resolved against one root
#[derive(Debug, Clone)]
pub(crate) struct BuildPaths {
    pub(crate) root: PathBuf,
    pub(crate) data_dir: PathBuf,
    pub(crate) assets_dir: PathBuf,
    pub(crate) dist_dir: PathBuf,
    pub(crate) template: PathBuf,
    pub(crate) output: PathBuf,
}

impl BuildPaths {
    pub(crate) fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            data_dir: root.join("data"),
            assets_dir: root.join("assets"),
            dist_dir: root.join("dist"),
            template: root.join("config").join("README.template.md"),
            output: root.join("README.md"),
            root,
        }
    }

    pub(crate) fn portfolio(&self) -> PathBuf {
        self.root.join("portfolio.json")
    }

    pub(crate) fn skills(&self) -> PathBuf {
        self.root.join("skills.json")
    }

    pub(crate) fn timeline(&self) -> PathBuf {
        self.root.join("timeline.json")
    }

    pub(crate) fn quotes(&self) -> PathBuf {
        self.data_dir.join("quotes.json")
    }

    pub(crate) fn telemetry_snapshot(&self) -> PathBuf {
        self.dist_dir.join("telemetry_data.json")
    }

    pub(crate) fn security_report(&self) -> PathBuf {
        self.dist_dir.join("security-report.json")
    }
}

/// Fully resolved build settings handed to the pipeline
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) paths: BuildPaths,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) api_url: String,
    pub(crate) token: Option<String>,
    pub(crate) asset_base_url: String,
    pub(crate) gen_version: String,
    pub(crate) glyph: String,
    pub(crate) theme: Theme,
    pub(crate) hero: HeroCopy,
    pub(crate) activity_level: f64,
    pub(crate) preflight: Vec<PathBuf>,
}

impl Settings {
    /// Defaults for a project rooted at `root`, ignoring config and environment
    pub(crate) fn defaults(root: impl Into<PathBuf>) -> Self {
        let username = DEFAULT_USERNAME.to_string();
        let paths = BuildPaths::under(root);
        Self {
            preflight: vec![
                paths.root.join("scripts").join("vuln_scan.sh"),
                paths.root.join("scripts").join("terminal_shot.sh"),
            ],
            paths,
            email: format!("{username}@gateway.net"),
            username,
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            asset_base_url: ".".to_string(),
            gen_version: DEFAULT_GEN_VERSION.to_string(),
            glyph: DEFAULT_GLYPH.to_string(),
            theme: Theme::quantum(),
            hero: HeroCopy::default(),
            activity_level: 0.8,
        }
    }

    /// Resolve from the environment, then layer the config file over defaults
    pub(crate) fn from_env() -> Self {
        let root = std::env::var_os(ROOT_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let mut settings = Self::defaults(&root).with_config(&Config::load(&root));

        if let Ok(url) = std::env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            settings.api_url = url.trim().trim_end_matches('/').to_string();
        }
        settings.token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty());

        settings
    }

    /// Merge config file values (config wins over built-in defaults)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if let Some(ref username) = config.username {
            self.username = username.clone();
            if config.email.is_none() {
                self.email = format!("{username}@gateway.net");
            }
        }
        if let Some(ref email) = config.email {
            self.email = email.clone();
        }
        if let Some(ref base) = config.asset_base_url {
            self.asset_base_url = base.trim_end_matches('/').to_string();
        }
        if let Some(ref version) = config.gen_version {
            self.gen_version = version.clone();
        }
        if let Some(ref glyph) = config.glyph {
            self.glyph = glyph.clone();
        }
        match config.theme {
            Some(ConfigTheme::Quantum) => self.theme = Theme::quantum(),
            Some(ConfigTheme::Spectre) => self.theme = Theme::spectre(),
            None => {}
        }
        if let Some(level) = config.activity_level {
            self.activity_level = level.clamp(0.0, 1.0);
        }
        if let Some(ref scripts) = config.preflight {
            self.preflight = scripts.iter().map(|s| self.paths.root.join(s)).collect();
        }
        if let Some(ref template) = config.template {
            self.paths.template = self.paths.root.join(template);
        }
        if let Some(ref output) = config.output {
            self.paths.output = self.paths.root.join(output);
        }

        if let Some(ref title) = config.hero.title {
            self.hero.title = title.clone();
        }
        if let Some(ref subtitle) = config.hero.subtitle {
            self.hero.subtitle = subtitle.clone();
        }
        if let Some(ref label) = config.hero.version_label {
            self.hero.version_label = label.clone();
        }

        self
    }
}
