use thiserror::Error;

use crate::logging::LoggingError;
use crate::panel::PanelId;

/// Unified result type for the layout engine.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Failures that abort a layout tick.
///
/// A panel that has not been materialized yet is not an error: the registry
/// creates it on first reference. Everything listed here propagates to the
/// caller of [`crate::Session::tick`] unchanged.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("panel `{0}` not found")]
    PanelNotFound(PanelId),
    #[error("panel `{0}` is not a popup")]
    NotAPopup(PanelId),
    #[error("unknown color `{0}`")]
    Color(String),
    #[error("surface error: {0}")]
    Surface(String),
    #[error("hook failed: {0}")]
    Hook(String),
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
