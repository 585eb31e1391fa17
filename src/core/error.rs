use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the launcher.
/// Every module returns `Result<T, LauncherError>`.
///
/// Every variant is fatal to the launch in progress; nothing is retried.
/// Errors are returned up through each component boundary so the front end
/// (and tests) can see which stage failed.
#[derive(Debug, Error)]
pub enum LauncherError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Configuration ───────────────────────────────────
    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Profile / user selection ────────────────────────
    #[error("{0}")]
    Selection(String),

    // ── Dependency resolution ───────────────────────────
    #[error("invalid library coordinate: {0}")]
    InvalidCoordinate(String),

    // ── Native archive integrity ────────────────────────
    #[error("integrity violation for {path:?}: {detail}")]
    IntegrityViolation { path: PathBuf, detail: String },

    // ── Native archive extraction ───────────────────────
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to extract {entry} into {dest:?}: {source}")]
    Extraction {
        entry: String,
        dest: PathBuf,
        source: std::io::Error,
    },

    // ── Process spawning ────────────────────────────────
    #[error("failed to launch process: {0}")]
    LaunchFailure(String),
}

/// Convenience alias used throughout the crate.
pub type LauncherResult<T> = Result<T, LauncherError>;

impl From<std::io::Error> for LauncherError {
    fn from(source: std::io::Error) -> Self {
        LauncherError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
