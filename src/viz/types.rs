//! Public types for legend output.

use std::path::Path;

use crate::error::{LegendError, Result};

/// Output backends, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Vector output through `plotters-svg`.
    Svg,
    /// Raster output through `plotters-bitmap` (png, jpg, bmp).
    Bitmap,
}

impl OutputFormat {
    /// Infer the backend from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" | "jpg" | "jpeg" | "bmp" => Ok(OutputFormat::Bitmap),
            _ => Err(LegendError::UnsupportedFormat(ext)),
        }
    }
}

/// Options for [`crate::Legend::save_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SaveOptions {
    /// Resolution override; defaults to the figure's dpi.
    pub dpi: Option<f64>,
}

impl SaveOptions {
    pub fn dpi(dpi: f64) -> Self {
        Self { dpi: Some(dpi) }
    }
}
