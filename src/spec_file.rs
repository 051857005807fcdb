//! JSON legend descriptions, used by the `legend` binary.
//!
//! ```json
//! {
//!   "style": { "ncol": 2, "shadow": true, "fontsize": "large" },
//!   "figsize": [3.0, 1.5],
//!   "entries": [
//!     { "kind": "line", "label": "Measured", "color": "r", "linestyle": "--" },
//!     { "kind": "marker", "label": "Samples", "marker": "o", "facecolor": "b" },
//!     { "kind": "rectangle", "label": "Range", "color": "#111111" }
//!   ]
//! }
//! ```
//!
//! Entries go through the same builders as the library API, so a missing field
//! produces the same validation error.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::entries::{Entry, LineEntryBuilder, MarkerEntryBuilder, RectangleEntryBuilder};
use crate::error::Result;
use crate::legend::Legend;
use crate::style::LegendStyle;

/// One entry as written in a legend file.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntrySpec {
    Line(LineEntryBuilder),
    Marker(MarkerEntryBuilder),
    Rectangle(RectangleEntryBuilder),
}

impl EntrySpec {
    pub fn build(self) -> Result<Entry> {
        match self {
            EntrySpec::Line(b) => b.build(),
            EntrySpec::Marker(b) => b.build(),
            EntrySpec::Rectangle(b) => b.build(),
        }
    }
}

/// A whole legend file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LegendFile {
    #[serde(default)]
    pub style: LegendStyle,
    /// Figure size in inches; omitted means "fit to the legend".
    #[serde(default)]
    pub figsize: Option<(f64, f64)>,
    #[serde(default)]
    pub dpi: Option<f64>,
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

impl LegendFile {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(f))?)
    }

    /// Validate every entry and assemble a legend (not yet created).
    pub fn into_legend(self) -> Result<Legend> {
        self.style.validate()?;
        let mut legend = Legend::new(self.style);
        if let Some(dpi) = self.dpi {
            legend = legend.with_dpi(dpi);
        }
        for spec in self.entries {
            legend.add_entry(spec.build()?);
        }
        Ok(legend)
    }
}
