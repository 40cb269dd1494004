/// Palette shared by every generator. Past surface versions differ only here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Theme {
    pub(crate) name: &'static str,
    pub(crate) background: &'static str,
    pub(crate) panel: &'static str,
    pub(crate) border: &'static str,
    pub(crate) muted: &'static str,
    pub(crate) text: &'static str,
    pub(crate) primary: &'static str,
    pub(crate) secondary: &'static str,
    pub(crate) tertiary: &'static str,
    pub(crate) warning: &'static str,
    pub(crate) alert: &'static str,
    pub(crate) light_background: &'static str,
    pub(crate) light_accent: &'static str,
}

impl Theme {
    pub(crate) fn quantum() -> Self {
        Self {
            name: "quantum",
            background: "#0d1117",
            panel: "#161b22",
            border: "#30363d",
            muted: "#8b949e",
            text: "#c9d1d9",
            primary: "#00f3ff",
            secondary: "#bc8cff",
            tertiary: "#00ff9d",
            warning: "#d29922",
            alert: "#ff0000",
            light_background: "#f6f8fa",
            light_accent: "#0969da",
        }
    }

    pub(crate) fn spectre() -> Self {
        Self {
            name: "spectre",
            primary: "#58a6ff",
            secondary: "#9d00ff",
            tertiary: "#4ade80",
            warning: "#fbbf24",
            ..Self::quantum()
        }
    }

    /// Score ≥ 80 → primary, ≥ 70 → secondary, anything lower → warning
    pub(crate) fn tier_color(&self, score: i64) -> &'static str {
        if score >= 80 {
            self.primary
        } else if score >= 70 {
            self.secondary
        } else {
            self.warning
        }
    }
}

/// Hero banner copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeroCopy {
    pub(crate) title: String,
    pub(crate) subtitle: String,
    pub(crate) version_label: String,
}

impl Default for HeroCopy {
    fn default() -> Self {
        Self {
            title: "𝓟𝓸𝓹𝓓𝓮𝓾𝔁𝓡𝓮𝓶".to_string(),
            subtitle: "PRINCIPAL SYSTEMS ARCHITECT".to_string(),
            version_label: "v10.0 // surface".to_string(),
        }
    }
}
