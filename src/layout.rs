//! Pure legend geometry: column split, frame size and per-entry boxes.
//!
//! All coordinates are in points (1/72 inch) with the origin at the figure's top-left
//! corner and `y` growing downwards. Rendering scales them by `dpi / 72`.

use crate::entries::Entry;
use crate::error::{LegendError, Result};
use crate::style::LegendStyle;
use crate::viz::text::{estimate_text_width_pt, split_label_lines};

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;
/// Default figure resolution.
pub const DEFAULT_DPI: f64 = 100.0;
/// Baseline-to-baseline distance of multi-line labels, relative to the font size.
pub const LINE_SPACING: f64 = 1.2;
/// Largest rendered width or height in pixels.
pub const MAX_SIDE_PX: u32 = 16_384;
/// Largest rendered area in pixels (64 megapixels).
pub const MAX_PIXELS: u64 = 1 << 26;

/// Axis-aligned box in points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPt {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl BoxPt {
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// One entry after layout.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedEntry {
    /// Insertion index.
    pub index: usize,
    pub column: usize,
    pub row: usize,
    /// Swatch area.
    pub handle: BoxPt,
    /// Label block; text is left-aligned at `label.x` and vertically centered.
    pub label: BoxPt,
    pub lines: Vec<String>,
    pub entry: Entry,
}

/// A laid-out legend figure, the result of [`crate::Legend::create`].
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    /// Legend frame (including border padding).
    pub frame: BoxPt,
    /// Entries in insertion order.
    pub items: Vec<PlacedEntry>,
    pub style: LegendStyle,
}

impl Figure {
    pub fn width_pt(&self) -> f64 {
        self.width_in * POINTS_PER_INCH
    }

    pub fn height_pt(&self) -> f64 {
        self.height_in * POINTS_PER_INCH
    }

    /// Pixel size at the given resolution (at least 1x1).
    ///
    /// Fails when either side exceeds [`MAX_SIDE_PX`] or the area exceeds [`MAX_PIXELS`].
    pub fn size_px(&self, dpi: f64) -> Result<(u32, u32)> {
        pixel_size(self.width_in, self.height_in, dpi)
    }

    /// Number of columns actually used (empty columns are dropped).
    pub fn columns(&self) -> usize {
        self.items.iter().map(|i| i.column + 1).max().unwrap_or(0)
    }

    /// Labels grouped by column, each column top to bottom.
    pub fn column_labels(&self) -> Vec<Vec<&str>> {
        let mut cols: Vec<Vec<&str>> = vec![Vec::new(); self.columns()];
        for item in &self.items {
            cols[item.column].push(item.entry.label());
        }
        cols
    }
}

/// Split `n` entries into at most `ncol` contiguous chunks; the first `n % ncol`
/// chunks get one extra entry and empty chunks are dropped.
///
/// Returns the chunk sizes, e.g. `column_sizes(5, 3) == [2, 2, 1]`.
pub fn column_sizes(n: usize, ncol: usize) -> Vec<usize> {
    let ncol = ncol.max(1);
    let base = n / ncol;
    let extra = n % ncol;
    (0..ncol)
        .map(|i| base + usize::from(i < extra))
        .filter(|&k| k > 0)
        .collect()
}

fn pixel_size(width_in: f64, height_in: f64, dpi: f64) -> Result<(u32, u32)> {
    let w = (width_in * dpi).round().max(1.0);
    let h = (height_in * dpi).round().max(1.0);
    let max = f64::from(MAX_SIDE_PX);
    let too_large = || LegendError::InvalidValue {
        field: "figsize",
        reason: format!(
            "{width_in:.2}x{height_in:.2}in at {dpi} dpi is {w}x{h}px, \
             above the {MAX_SIDE_PX}px / {MAX_PIXELS} pixel limit"
        ),
    };
    if !(w <= max && h <= max) {
        return Err(too_large());
    }
    let (w, h) = (w as u32, h as u32);
    match u64::from(w).checked_mul(u64::from(h)) {
        Some(area) if area <= MAX_PIXELS => Ok((w, h)),
        _ => Err(too_large()),
    }
}

fn check_figsize(figsize: Option<(f64, f64)>) -> Result<()> {
    if let Some((w, h)) = figsize
        && !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0)
    {
        return Err(LegendError::InvalidValue {
            field: "figsize",
            reason: format!("expected positive width and height in inches, got ({w}, {h})"),
        });
    }
    Ok(())
}

/// Lay out `entries` with `style`.
///
/// With `figsize` (inches) the legend is centered in a figure of that size. Without it
/// the figure is fitted to the legend: frame extent in inches plus `borderpad`
/// (taken as inches) on each axis.
pub fn layout(
    entries: &[Entry],
    style: &LegendStyle,
    figsize: Option<(f64, f64)>,
    dpi: f64,
) -> Result<Figure> {
    style.validate()?;
    check_figsize(figsize)?;
    if !(dpi.is_finite() && dpi > 0.0) {
        return Err(LegendError::InvalidValue {
            field: "dpi",
            reason: format!("expected a positive number, got {dpi}"),
        });
    }

    let fs = style.font_points();
    let pad = style.borderpad * fs;
    let handle_w = style.handlelength * fs;
    let handle_h = style.handleheight * fs;
    let text_pad = style.handletextpad * fs;
    let label_gap = style.labelspacing * fs;
    let col_gap = style.columnspacing * fs;
    let bold = style.fontweight.is_bold();

    // Pass 1: measure every entry (label block size, row height).
    struct Measured {
        lines: Vec<String>,
        text_w: f64,
        text_h: f64,
        row_h: f64,
    }
    let measured: Vec<Measured> = entries
        .iter()
        .map(|e| {
            let lines = split_label_lines(e.label());
            let text_w = lines
                .iter()
                .map(|l| estimate_text_width_pt(l, fs, bold))
                .fold(0.0, f64::max);
            let text_h = fs * (1.0 + (lines.len().max(1) - 1) as f64 * LINE_SPACING);
            let row_h = text_h.max(handle_h);
            Measured {
                lines,
                text_w,
                text_h,
                row_h,
            }
        })
        .collect();

    // Pass 2: column membership (column-major fill) and column extents.
    let sizes = column_sizes(entries.len(), style.ncol);
    let mut col_of = Vec::with_capacity(entries.len());
    for (ci, k) in sizes.iter().enumerate() {
        for row in 0..*k {
            col_of.push((ci, row));
        }
    }

    let mut col_w = vec![0.0_f64; sizes.len()];
    let mut col_h = vec![0.0_f64; sizes.len()];
    for (i, m) in measured.iter().enumerate() {
        let (ci, row) = col_of[i];
        col_w[ci] = col_w[ci].max(handle_w + text_pad + m.text_w);
        if row > 0 {
            col_h[ci] += label_gap;
        }
        col_h[ci] += m.row_h;
    }

    let inner_w = col_w.iter().sum::<f64>() + col_gap * sizes.len().saturating_sub(1) as f64;
    let inner_h = col_h.iter().cloned().fold(0.0, f64::max);
    let frame_w = inner_w + 2.0 * pad;
    let frame_h = inner_h + 2.0 * pad;

    let (fig_w_pt, fig_h_pt) = match figsize {
        Some((w, h)) => (w * POINTS_PER_INCH, h * POINTS_PER_INCH),
        None => (
            frame_w + style.borderpad * POINTS_PER_INCH,
            frame_h + style.borderpad * POINTS_PER_INCH,
        ),
    };

    let frame = BoxPt {
        x: (fig_w_pt - frame_w) / 2.0,
        y: (fig_h_pt - frame_h) / 2.0,
        w: frame_w,
        h: frame_h,
    };

    // Pass 3: place entries.
    let mut col_x = Vec::with_capacity(sizes.len());
    let mut acc = frame.x + pad;
    for w in &col_w {
        col_x.push(acc);
        acc += w + col_gap;
    }

    let mut items = Vec::with_capacity(entries.len());
    let mut cursor_y = vec![frame.y + pad; sizes.len()];
    for (i, (entry, m)) in entries.iter().zip(measured).enumerate() {
        let (ci, row) = col_of[i];
        let top = cursor_y[ci];
        let center_y = top + m.row_h / 2.0;
        let handle = BoxPt {
            x: col_x[ci],
            y: center_y - handle_h / 2.0,
            w: handle_w,
            h: handle_h,
        };
        let label = BoxPt {
            x: col_x[ci] + handle_w + text_pad,
            y: center_y - m.text_h / 2.0,
            w: m.text_w,
            h: m.text_h,
        };
        cursor_y[ci] = top + m.row_h + label_gap;
        items.push(PlacedEntry {
            index: i,
            column: ci,
            row,
            handle,
            label,
            lines: m.lines,
            entry: entry.clone(),
        });
    }

    let figure = Figure {
        width_in: fig_w_pt / POINTS_PER_INCH,
        height_in: fig_h_pt / POINTS_PER_INCH,
        dpi,
        frame,
        items,
        style: style.clone(),
    };
    let (w_px, h_px) = figure.size_px(dpi)?;

    log::debug!(
        "legend layout: {} entries in {} columns, frame {:.1}x{:.1}pt, figure {:.1}x{:.1}pt ({}x{}px)",
        figure.items.len(),
        sizes.len(),
        frame.w,
        frame.h,
        figure.width_pt(),
        figure.height_pt(),
        w_px,
        h_px
    );
    Ok(figure)
}
