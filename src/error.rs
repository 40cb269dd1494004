use std::path::PathBuf;

use thiserror::Error;

/// Fatal build errors. Anything here aborts the run with a non-zero exit.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Template not found at {}", path.display())]
    TemplateMissing { path: PathBuf },

    #[error("Failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Per-generator failures. Logged and isolated, never fatal.
#[derive(Debug, Error)]
pub(crate) enum AssetError {
    #[error("{asset} needs at least {required} entries, got {found}")]
    InsufficientData {
        asset: &'static str,
        required: usize,
        found: usize,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Remote read failures. Always degrade to an empty result.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl From<ureq::Error> for FetchError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_template_missing() {
        let e = AppError::TemplateMissing {
            path: PathBuf::from("config/README.template.md"),
        };
        assert_eq!(
            e.to_string(),
            "Template not found at config/README.template.md"
        );
    }

    #[test]
    fn asset_error_display_insufficient() {
        let e = AssetError::InsufficientData {
            asset: "skills-radar",
            required: 3,
            found: 1,
        };
        assert_eq!(e.to_string(), "skills-radar needs at least 3 entries, got 1");
    }

    #[test]
    fn fetch_error_from_status_code() {
        let e: FetchError = ureq::Error::StatusCode(403).into();
        assert!(matches!(e, FetchError::Status(403)));
        assert_eq!(e.to_string(), "HTTP status 403");
    }
}
