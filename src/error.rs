//! Error type shared by entry validation, layout and output.

use std::io;
use thiserror::Error;

/// Result type alias using [`LegendError`].
pub type Result<T> = std::result::Result<T, LegendError>;

/// Errors raised while building entries or producing legend output.
#[derive(Error, Debug)]
pub enum LegendError {
    /// A required attribute was not supplied (or could not be derived).
    #[error("the argument `{field}` is necessary for a {entry} entry and has to be set")]
    MissingField {
        entry: &'static str,
        field: &'static str,
    },

    /// `color` was given together with `facecolor` and/or `edgecolor`.
    #[error("`color` cannot be combined with `facecolor`/`edgecolor` on a {entry} entry")]
    ConflictingColors { entry: &'static str },

    /// A color string could not be resolved.
    #[error("invalid color {value:?} for `{field}`")]
    InvalidColor { field: &'static str, value: String },

    /// A numeric option is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("unknown marker {0:?}")]
    UnknownMarker(String),

    #[error("unknown line style {0:?}")]
    UnknownLineStyle(String),

    #[error("unknown font size {0:?}")]
    UnknownFontSize(String),

    /// Output extension that no backend handles.
    #[error("unsupported output format {0:?} (expected svg, png, jpg, jpeg or bmp)")]
    UnsupportedFormat(String),

    /// Error reported by a plotters backend.
    #[error("rendering failed: {0}")]
    Render(String),

    /// The native viewer could not be started.
    #[error("display failed: {0}")]
    Display(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid legend file: {0}")]
    Json(#[from] serde_json::Error),
}

impl LegendError {
    pub(crate) fn render<E: std::fmt::Debug>(e: E) -> Self {
        LegendError::Render(format!("{e:?}"))
    }
}
