//! Legend styling configuration.
//!
//! Spacing values are expressed in units of the legend font size, the same way
//! plotting libraries define `borderpad`, `labelspacing` and friends.

use std::fmt;
use std::str::FromStr;

use plotters::style::FontStyle;
use serde::{Deserialize, Deserializer};

use crate::error::{LegendError, Result};

/// Base font size in points that named sizes scale from.
pub const BASE_FONT_SIZE_PT: f64 = 10.0;

/// Font size, either absolute (points) or one of the named relative sizes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum FontSize {
    Points(f64),
    XxSmall,
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl FontSize {
    /// Resolved size in points.
    pub fn points(self) -> f64 {
        let scale = match self {
            FontSize::Points(pt) => return pt,
            FontSize::XxSmall => 0.579,
            FontSize::XSmall => 0.694,
            FontSize::Small => 0.833,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.2,
            FontSize::XLarge => 1.44,
            FontSize::XxLarge => 1.728,
        };
        BASE_FONT_SIZE_PT * scale
    }
}

impl FromStr for FontSize {
    type Err = LegendError;

    fn from_str(s: &str) -> Result<Self> {
        let size = match s.trim() {
            "xx-small" => FontSize::XxSmall,
            "x-small" => FontSize::XSmall,
            "small" => FontSize::Small,
            "medium" => FontSize::Medium,
            "large" => FontSize::Large,
            "x-large" => FontSize::XLarge,
            "xx-large" => FontSize::XxLarge,
            other => match other.parse::<f64>() {
                Ok(pt) if pt.is_finite() && pt > 0.0 => FontSize::Points(pt),
                _ => return Err(LegendError::UnknownFontSize(other.to_string())),
            },
        };
        Ok(size)
    }
}

impl<'de> Deserialize<'de> for FontSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Name(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Num(pt) if pt.is_finite() && pt > 0.0 => Ok(FontSize::Points(pt)),
            Raw::Num(pt) => Err(serde::de::Error::custom(format!(
                "font size must be positive, got {pt}"
            ))),
            Raw::Name(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Font weight: a keyword or a numeric weight (100..=900).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Numeric(u16),
}

impl FontWeight {
    pub fn is_bold(self) -> bool {
        match self {
            FontWeight::Normal => false,
            FontWeight::Bold => true,
            FontWeight::Numeric(w) => w >= 600,
        }
    }
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u16),
            Name(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Num(w) => Ok(FontWeight::Numeric(w)),
            Raw::Name(s) => match s.as_str() {
                "normal" | "regular" | "book" | "light" => Ok(FontWeight::Normal),
                "bold" | "semibold" | "demibold" | "heavy" | "black" | "extra bold" => {
                    Ok(FontWeight::Bold)
                }
                other => Err(serde::de::Error::custom(format!(
                    "unknown font weight {other:?}"
                ))),
            },
        }
    }
}

/// Upright or slanted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSlant {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl fmt::Display for TextSlant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TextSlant::Normal => "normal",
            TextSlant::Italic => "italic",
            TextSlant::Oblique => "oblique",
        };
        f.write_str(s)
    }
}

/// Styling of a standalone legend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    /// Number of columns; entries fill top to bottom, then left to right.
    pub ncol: usize,
    /// Draw the legend frame.
    pub border: bool,
    /// Round the frame corners.
    pub roundborder: bool,
    /// Draw a drop shadow behind the frame.
    pub shadow: bool,
    /// `sans-serif`, `serif`, `monospace` or a concrete family name.
    pub fontfamily: String,
    /// Ignored when `fontweight` is bold; a font face is either bold or slanted.
    pub fontstyle: TextSlant,
    pub fontweight: FontWeight,
    pub fontsize: FontSize,
    /// Whitespace inside the frame.
    pub borderpad: f64,
    /// Vertical space between entries.
    pub labelspacing: f64,
    /// Horizontal space between columns.
    pub columnspacing: f64,
    /// Length of the handle (swatch).
    pub handlelength: f64,
    /// Height of the handle.
    pub handleheight: f64,
    /// Gap between handle and label.
    pub handletextpad: f64,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            ncol: 1,
            border: true,
            roundborder: true,
            shadow: false,
            fontfamily: "sans-serif".to_string(),
            fontstyle: TextSlant::Normal,
            fontweight: FontWeight::Normal,
            fontsize: FontSize::Medium,
            borderpad: 0.4,
            labelspacing: 0.5,
            columnspacing: 2.0,
            handlelength: 2.0,
            handleheight: 0.7,
            handletextpad: 0.8,
        }
    }
}

impl LegendStyle {
    /// Check ranges that the layout relies on.
    pub fn validate(&self) -> Result<()> {
        if self.ncol == 0 {
            return Err(LegendError::InvalidValue {
                field: "ncol",
                reason: "at least one column is required".to_string(),
            });
        }
        let spacings = [
            ("borderpad", self.borderpad),
            ("labelspacing", self.labelspacing),
            ("columnspacing", self.columnspacing),
            ("handlelength", self.handlelength),
            ("handleheight", self.handleheight),
            ("handletextpad", self.handletextpad),
        ];
        for (field, v) in spacings {
            if !v.is_finite() || v < 0.0 {
                return Err(LegendError::InvalidValue {
                    field,
                    reason: format!("expected a finite, non-negative number, got {v}"),
                });
            }
        }
        Ok(())
    }

    /// Font size in points.
    pub fn font_points(&self) -> f64 {
        self.fontsize.points()
    }

    /// Font style key used for plotters' font lookup.
    pub fn plotters_font_style(&self) -> FontStyle {
        if self.fontweight.is_bold() {
            if self.fontstyle != TextSlant::Normal {
                log::debug!("bold font weight overrides fontstyle {}", self.fontstyle);
            }
            return FontStyle::Bold;
        }
        match self.fontstyle {
            TextSlant::Normal => FontStyle::Normal,
            TextSlant::Italic => FontStyle::Italic,
            TextSlant::Oblique => FontStyle::Oblique,
        }
    }
}
