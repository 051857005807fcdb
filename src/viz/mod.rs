//! Legend output: render a laid-out figure to **SVG**, bitmap files, an in-memory
//! RGB buffer, or a native window.

pub mod legend;
pub mod markers;
pub mod text;
pub mod types;
pub mod viewer;

pub use types::{OutputFormat, SaveOptions};

use std::path::Path;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use crate::error::{LegendError, Result};
use crate::fonts::ensure_fonts_registered;
use crate::layout::Figure;
use legend::draw_figure;

fn check_dpi(dpi: f64) -> Result<f64> {
    if dpi.is_finite() && dpi > 0.0 {
        Ok(dpi)
    } else {
        Err(LegendError::InvalidValue {
            field: "dpi",
            reason: format!("expected a positive number, got {dpi}"),
        })
    }
}

/// Bitmap text needs a registered font; fail early with a readable message.
fn require_bitmap_font(figure: &Figure) -> Result<()> {
    let has_text = figure
        .items
        .iter()
        .any(|i| i.lines.iter().any(|l| !l.is_empty()));
    if has_text && !ensure_fonts_registered(&figure.style.fontfamily) {
        return Err(LegendError::Render(format!(
            "no font available for bitmap text; set {} to a .ttf file",
            crate::fonts::FONT_ENV
        )));
    }
    Ok(())
}

/// Write `figure` to `out_path`; the backend is chosen from the extension.
pub fn save_figure<P: AsRef<Path>>(figure: &Figure, out_path: P, options: &SaveOptions) -> Result<()> {
    let out_path = out_path.as_ref();
    let format = OutputFormat::from_path(out_path)?;
    let dpi = check_dpi(options.dpi.unwrap_or(figure.dpi))?;
    let size = figure.size_px(dpi)?;

    match format {
        OutputFormat::Svg => {
            let root = SVGBackend::new(out_path, size).into_drawing_area();
            draw_figure(&root, figure, dpi)?;
            root.present().map_err(LegendError::render)?;
        }
        OutputFormat::Bitmap => {
            require_bitmap_font(figure)?;
            let root = BitMapBackend::new(out_path, size).into_drawing_area();
            draw_figure(&root, figure, dpi)?;
            root.present().map_err(LegendError::render)?;
        }
    }
    log::info!(
        "wrote legend ({}x{} px) to {}",
        size.0,
        size.1,
        out_path.display()
    );
    Ok(())
}

/// Render `figure` into a packed RGB buffer. Returns `(width, height, pixels)`.
pub fn render_rgb(figure: &Figure, dpi: f64) -> Result<(u32, u32, Vec<u8>)> {
    let dpi = check_dpi(dpi)?;
    require_bitmap_font(figure)?;
    let (w, h) = figure.size_px(dpi)?;
    let len = (w as usize)
        .checked_mul(h as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| LegendError::InvalidValue {
            field: "figsize",
            reason: format!("{w}x{h}px does not fit in memory"),
        })?;
    let mut buf = vec![0u8; len];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        draw_figure(&root, figure, dpi)?;
        root.present().map_err(LegendError::render)?;
    }
    Ok((w, h, buf))
}
