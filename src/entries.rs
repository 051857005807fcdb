//! Legend entries: line, marker and rectangle swatches with a label.
//!
//! Entries are built through builders whose `build()` validates required fields
//! and resolves colors up front, so an [`Entry`] is always renderable.
//!
//! Face/edge color rules (marker and rectangle):
//! - only `facecolor` given: `edgecolor` mirrors it (and vice versa);
//! - neither given but `color` given: `color` is used for both;
//! - otherwise both must be given explicitly.
//!
//! ```
//! use legend_rs::entries::{LineEntry, MarkerEntry, RectangleEntry};
//!
//! let line = LineEntry::builder().label("Measured").color("r").build()?;
//! let marker = MarkerEntry::builder()
//!     .label("Samples")
//!     .marker("o")
//!     .facecolor("b")
//!     .edgecolor("g")
//!     .build()?;
//! let rect = RectangleEntry::builder().label("Range").color("#111111").build()?;
//! assert_eq!(line.label(), "Measured");
//! # let _ = (marker, rect);
//! # Ok::<(), legend_rs::LegendError>(())
//! ```

use std::str::FromStr;

use plotters::style::RGBAColor;
use serde::Deserialize;

use crate::color::parse_color;
use crate::error::{LegendError, Result};

/// Default line width in points.
pub const DEFAULT_LINE_WIDTH: f64 = 1.5;
/// Default marker size in points.
pub const DEFAULT_MARKER_SIZE: f64 = 6.0;
/// Default marker edge width in points.
pub const DEFAULT_MARKER_EDGE_WIDTH: f64 = 1.0;
/// Default rectangle edge width in points.
pub const DEFAULT_PATCH_LINE_WIDTH: f64 = 1.0;

/// Marker glyphs. Parsed from the usual one-character codes or spelled names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Point,
    Pixel,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
    ThinDiamond,
    Plus,
    X,
    Star,
    Pentagon,
    Hexagon,
}

impl FromStr for MarkerShape {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self> {
        let shape = match s.trim() {
            "o" | "circle" => MarkerShape::Circle,
            "." | "point" => MarkerShape::Point,
            "," | "pixel" => MarkerShape::Pixel,
            "s" | "square" => MarkerShape::Square,
            "^" | "triangle_up" | "triangle" => MarkerShape::TriangleUp,
            "v" | "triangle_down" => MarkerShape::TriangleDown,
            "<" | "triangle_left" => MarkerShape::TriangleLeft,
            ">" | "triangle_right" => MarkerShape::TriangleRight,
            "D" | "diamond" => MarkerShape::Diamond,
            "d" | "thin_diamond" => MarkerShape::ThinDiamond,
            "+" | "plus" => MarkerShape::Plus,
            "x" | "X" | "cross" => MarkerShape::X,
            "*" | "star" => MarkerShape::Star,
            "p" | "pentagon" => MarkerShape::Pentagon,
            "h" | "H" | "hexagon" => MarkerShape::Hexagon,
            other => return Err(LegendError::UnknownMarker(other.to_string())),
        };
        Ok(shape)
    }
}

impl MarkerShape {
    /// Stroke-only glyphs take their color from the edge color.
    pub fn is_unfilled(self) -> bool {
        matches!(self, MarkerShape::Plus | MarkerShape::X)
    }

    /// Size relative to the requested marker size (small glyphs are drawn smaller).
    pub fn size_factor(self) -> f64 {
        match self {
            MarkerShape::Point => 0.5,
            MarkerShape::Pixel => 0.2,
            MarkerShape::ThinDiamond => 0.8,
            _ => 1.0,
        }
    }
}

/// Line dash patterns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
}

impl FromStr for LineDash {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "-" | "solid" => Ok(LineDash::Solid),
            "--" | "dashed" => Ok(LineDash::Dash),
            ":" | "dotted" => Ok(LineDash::Dot),
            "-." | "dashdot" => Ok(LineDash::DashDot),
            other => Err(LegendError::UnknownLineStyle(other.to_string())),
        }
    }
}

impl LineDash {
    /// On/off segment lengths in units of the line width; `None` for solid.
    pub fn pattern(self) -> Option<&'static [f64]> {
        match self {
            LineDash::Solid => None,
            LineDash::Dash => Some(&[3.7, 1.6]),
            LineDash::Dot => Some(&[1.0, 1.65]),
            LineDash::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
        }
    }
}

/// A line sample, optionally with a marker in its middle.
///
/// A `linewidth` of zero draws only the marker.
#[derive(Clone, Debug, PartialEq)]
pub struct LineEntry {
    pub label: String,
    pub color: RGBAColor,
    pub linewidth: f64,
    pub linestyle: LineDash,
    pub marker: Option<MarkerShape>,
    pub markersize: f64,
    /// Marker fill; defaults to `color`.
    pub markerfacecolor: RGBAColor,
    /// Marker outline; defaults to `color`.
    pub markeredgecolor: RGBAColor,
    pub markeredgewidth: f64,
    pub alpha: Option<f64>,
}

/// A single marker; the line part is invisible.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerEntry {
    pub label: String,
    pub marker: MarkerShape,
    pub facecolor: RGBAColor,
    pub edgecolor: RGBAColor,
    pub markersize: f64,
    pub markeredgewidth: f64,
    pub alpha: Option<f64>,
}

/// A filled rectangle swatch.
#[derive(Clone, Debug, PartialEq)]
pub struct RectangleEntry {
    pub label: String,
    pub facecolor: RGBAColor,
    pub edgecolor: RGBAColor,
    pub linewidth: f64,
    pub alpha: Option<f64>,
}

/// One legend item.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Line(LineEntry),
    Marker(MarkerEntry),
    Rectangle(RectangleEntry),
}

impl Entry {
    pub fn label(&self) -> &str {
        match self {
            Entry::Line(e) => &e.label,
            Entry::Marker(e) => &e.label,
            Entry::Rectangle(e) => &e.label,
        }
    }

    /// Short kind name used in errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Line(_) => LINE,
            Entry::Marker(_) => MARKER,
            Entry::Rectangle(_) => RECTANGLE,
        }
    }
}

impl From<LineEntry> for Entry {
    fn from(e: LineEntry) -> Self {
        Entry::Line(e)
    }
}

impl From<MarkerEntry> for Entry {
    fn from(e: MarkerEntry) -> Self {
        Entry::Marker(e)
    }
}

impl From<RectangleEntry> for Entry {
    fn from(e: RectangleEntry) -> Self {
        Entry::Rectangle(e)
    }
}

const LINE: &str = "line";
const MARKER: &str = "marker";
const RECTANGLE: &str = "rectangle";

// ------------------------ Validation helpers ------------------------

fn require<T>(entry: &'static str, field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(LegendError::MissingField { entry, field })
}

fn require_label(entry: &'static str, label: Option<String>) -> Result<String> {
    match label {
        Some(l) if !l.trim().is_empty() => Ok(l),
        _ => Err(LegendError::MissingField {
            entry,
            field: "label",
        }),
    }
}

fn resolve(field: &'static str, value: &str) -> Result<RGBAColor> {
    parse_color(value).ok_or_else(|| LegendError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

fn check_size(field: &'static str, value: Option<f64>, default: f64) -> Result<f64> {
    match value {
        None => Ok(default),
        Some(v) if v.is_finite() && v >= 0.0 => Ok(v),
        Some(v) => Err(LegendError::InvalidValue {
            field,
            reason: format!("expected a finite, non-negative number, got {v}"),
        }),
    }
}

fn check_alpha(alpha: Option<f64>) -> Result<Option<f64>> {
    match alpha {
        Some(a) if !(0.0..=1.0).contains(&a) => Err(LegendError::InvalidValue {
            field: "alpha",
            reason: format!("expected a value in [0, 1], got {a}"),
        }),
        other => Ok(other),
    }
}

/// Apply the face/edge mirroring rules and resolve both colors.
fn resolve_face_edge(
    entry: &'static str,
    facecolor: Option<String>,
    edgecolor: Option<String>,
    color: Option<String>,
) -> Result<(RGBAColor, RGBAColor)> {
    let (face, edge) = match (facecolor, edgecolor, color) {
        (Some(_), _, Some(_)) | (_, Some(_), Some(_)) => {
            return Err(LegendError::ConflictingColors { entry });
        }
        (Some(f), None, None) => (Some(f.clone()), Some(f)),
        (None, Some(e), None) => (Some(e.clone()), Some(e)),
        (None, None, Some(c)) => (Some(c.clone()), Some(c)),
        (f, e, None) => (f, e),
    };
    let face = require(entry, "facecolor", face)?;
    let edge = require(entry, "edgecolor", edge)?;
    Ok((resolve("facecolor", &face)?, resolve("edgecolor", &edge)?))
}

// ------------------------ Builders ------------------------

/// Builder for [`LineEntry`]. Requires `label` and `color`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineEntryBuilder {
    label: Option<String>,
    color: Option<String>,
    linewidth: Option<f64>,
    linestyle: Option<String>,
    marker: Option<String>,
    markersize: Option<f64>,
    markerfacecolor: Option<String>,
    markeredgecolor: Option<String>,
    markeredgewidth: Option<f64>,
    alpha: Option<f64>,
}

impl LineEntry {
    pub fn builder() -> LineEntryBuilder {
        LineEntryBuilder::default()
    }
}

impl LineEntryBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, points: f64) -> Self {
        self.linewidth = Some(points);
        self
    }

    /// `-`, `--`, `:`, `-.` or `solid`/`dashed`/`dotted`/`dashdot`.
    pub fn linestyle(mut self, style: impl Into<String>) -> Self {
        self.linestyle = Some(style.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn markersize(mut self, points: f64) -> Self {
        self.markersize = Some(points);
        self
    }

    /// Marker fill, e.g. `"none"` for a hollow marker.
    pub fn markerfacecolor(mut self, color: impl Into<String>) -> Self {
        self.markerfacecolor = Some(color.into());
        self
    }

    pub fn markeredgecolor(mut self, color: impl Into<String>) -> Self {
        self.markeredgecolor = Some(color.into());
        self
    }

    pub fn markeredgewidth(mut self, points: f64) -> Self {
        self.markeredgewidth = Some(points);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn build(self) -> Result<Entry> {
        let label = require_label(LINE, self.label)?;
        let color = require(LINE, "color", self.color)?;
        let color = resolve("color", &color)?;
        let linestyle: LineDash = match self.linestyle {
            Some(s) => s.parse()?,
            None => LineDash::Solid,
        };
        let marker: Option<MarkerShape> = self.marker.map(|m| m.parse()).transpose()?;
        let markerfacecolor = match self.markerfacecolor {
            Some(c) => resolve("markerfacecolor", &c)?,
            None => color,
        };
        let markeredgecolor = match self.markeredgecolor {
            Some(c) => resolve("markeredgecolor", &c)?,
            None => color,
        };
        Ok(Entry::Line(LineEntry {
            label,
            color,
            linewidth: check_size("linewidth", self.linewidth, DEFAULT_LINE_WIDTH)?,
            linestyle,
            marker,
            markersize: check_size("markersize", self.markersize, DEFAULT_MARKER_SIZE)?,
            markerfacecolor,
            markeredgecolor,
            markeredgewidth: check_size(
                "markeredgewidth",
                self.markeredgewidth,
                DEFAULT_MARKER_EDGE_WIDTH,
            )?,
            alpha: check_alpha(self.alpha)?,
        }))
    }
}

/// Builder for [`MarkerEntry`]. Requires `label`, `marker` and a face/edge color.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerEntryBuilder {
    label: Option<String>,
    marker: Option<String>,
    facecolor: Option<String>,
    edgecolor: Option<String>,
    color: Option<String>,
    markersize: Option<f64>,
    markeredgewidth: Option<f64>,
    alpha: Option<f64>,
}

impl MarkerEntry {
    pub fn builder() -> MarkerEntryBuilder {
        MarkerEntryBuilder::default()
    }
}

impl MarkerEntryBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn facecolor(mut self, color: impl Into<String>) -> Self {
        self.facecolor = Some(color.into());
        self
    }

    pub fn edgecolor(mut self, color: impl Into<String>) -> Self {
        self.edgecolor = Some(color.into());
        self
    }

    /// Used for both face and edge when neither is set.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn markersize(mut self, points: f64) -> Self {
        self.markersize = Some(points);
        self
    }

    pub fn markeredgewidth(mut self, points: f64) -> Self {
        self.markeredgewidth = Some(points);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn build(self) -> Result<Entry> {
        let label = require_label(MARKER, self.label)?;
        let marker: MarkerShape = require(MARKER, "marker", self.marker)?.parse()?;
        let (facecolor, edgecolor) =
            resolve_face_edge(MARKER, self.facecolor, self.edgecolor, self.color)?;
        Ok(Entry::Marker(MarkerEntry {
            label,
            marker,
            facecolor,
            edgecolor,
            markersize: check_size("markersize", self.markersize, DEFAULT_MARKER_SIZE)?,
            markeredgewidth: check_size(
                "markeredgewidth",
                self.markeredgewidth,
                DEFAULT_MARKER_EDGE_WIDTH,
            )?,
            alpha: check_alpha(self.alpha)?,
        }))
    }
}

/// Builder for [`RectangleEntry`]. Requires `label` and a face/edge color.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RectangleEntryBuilder {
    label: Option<String>,
    facecolor: Option<String>,
    edgecolor: Option<String>,
    color: Option<String>,
    linewidth: Option<f64>,
    alpha: Option<f64>,
}

impl RectangleEntry {
    pub fn builder() -> RectangleEntryBuilder {
        RectangleEntryBuilder::default()
    }
}

impl RectangleEntryBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn facecolor(mut self, color: impl Into<String>) -> Self {
        self.facecolor = Some(color.into());
        self
    }

    pub fn edgecolor(mut self, color: impl Into<String>) -> Self {
        self.edgecolor = Some(color.into());
        self
    }

    /// Used for both face and edge when neither is set.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn linewidth(mut self, points: f64) -> Self {
        self.linewidth = Some(points);
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn build(self) -> Result<Entry> {
        let label = require_label(RECTANGLE, self.label)?;
        let (facecolor, edgecolor) =
            resolve_face_edge(RECTANGLE, self.facecolor, self.edgecolor, self.color)?;
        Ok(Entry::Rectangle(RectangleEntry {
            label,
            facecolor,
            edgecolor,
            linewidth: check_size("linewidth", self.linewidth, DEFAULT_PATCH_LINE_WIDTH)?,
            alpha: check_alpha(self.alpha)?,
        }))
    }
}
