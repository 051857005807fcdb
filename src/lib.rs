//! legend_rs
//!
//! A lightweight Rust library for composing standalone legend graphics with
//! `plotters`, independent of any data plot. Pairs with the `legend` CLI.
//!
//! ### Features
//! - Line, marker and rectangle entries with validated, resolved colors
//! - Face/edge color mirroring and a generic `color` shortcut
//! - Multi-column legends filled column-major, in insertion order
//! - Frame, rounded corners, shadow, font and spacing options
//! - SVG/PNG/JPEG/BMP output and a native preview window
//!
//! ### Example
//! ```no_run
//! use legend_rs::{Legend, LegendStyle};
//! use legend_rs::entries::{LineEntry, RectangleEntry};
//!
//! let mut legend = Legend::new(LegendStyle { ncol: 2, ..LegendStyle::default() });
//! legend.add_entry(LineEntry::builder().label("Observed").color("C0").build()?);
//! legend.add_entry(RectangleEntry::builder().label("Forecast band").facecolor("#cccccc").build()?);
//! legend.create(None)?;
//! legend.save("legend.png")?;
//! # Ok::<(), legend_rs::LegendError>(())
//! ```

pub mod color;
pub mod entries;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod legend;
pub mod spec_file;
pub mod style;
pub mod viz;

pub use entries::{Entry, LineEntry, MarkerEntry, RectangleEntry};
pub use error::{LegendError, Result};
pub use layout::Figure;
pub use legend::Legend;
pub use style::LegendStyle;
pub use viz::SaveOptions;
