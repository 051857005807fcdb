//! The standalone legend container.

use std::path::Path;

use crate::entries::Entry;
use crate::error::Result;
use crate::layout::{DEFAULT_DPI, Figure, layout};
use crate::style::LegendStyle;
use crate::viz::{self, SaveOptions};

const NOT_CREATED: &str = "No legend exists that can be shown. Use `create` method.";

/// Customizable standalone legend.
///
/// Entries are displayed in the order they are added, filled top to bottom and then
/// left to right over `style.ncol` columns.
///
/// ```no_run
/// use legend_rs::{Legend, LegendStyle};
/// use legend_rs::entries::{LineEntry, MarkerEntry, RectangleEntry};
///
/// let mut legend = Legend::new(LegendStyle::default());
/// legend.add_entry(LineEntry::builder().label("Test Line").color("r").build()?);
/// legend.add_entry(
///     MarkerEntry::builder()
///         .label("Test Marker")
///         .marker("o")
///         .facecolor("b")
///         .edgecolor("g")
///         .build()?,
/// );
/// legend.add_entry(RectangleEntry::builder().label("Test Rect").color("#111111").build()?);
/// legend.create(Some((2.0, 2.0)))?;
/// legend.save("legend.svg")?;
/// # Ok::<(), legend_rs::LegendError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Legend {
    style: LegendStyle,
    entries: Vec<Entry>,
    dpi: f64,
    figure: Option<Figure>,
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(LegendStyle::default())
    }
}

impl Legend {
    pub fn new(style: LegendStyle) -> Self {
        Self {
            style,
            entries: Vec::new(),
            dpi: DEFAULT_DPI,
            figure: None,
        }
    }

    /// Figure resolution used by `create`, `show` and `save` (default 100).
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn style(&self) -> &LegendStyle {
        &self.style
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an entry; it is shown after all entries added before it.
    pub fn add_entry(&mut self, entry: impl Into<Entry>) {
        let entry = entry.into();
        log::debug!("adding {} entry {:?}", entry.kind(), entry.label());
        self.entries.push(entry);
    }

    /// Lay out all entries added so far into a figure.
    ///
    /// `figsize` is `(width, height)` in inches. Without it the figure is fitted tightly
    /// around the legend. Calling `create` again replaces the previous figure.
    pub fn create(&mut self, figsize: Option<(f64, f64)>) -> Result<&Figure> {
        let figure = layout(&self.entries, &self.style, figsize, self.dpi)?;
        Ok(self.figure.insert(figure))
    }

    /// The figure produced by the last `create`, if any.
    pub fn figure(&self) -> Option<&Figure> {
        self.figure.as_ref()
    }

    /// Open a window showing the legend. Warns and does nothing before `create`.
    pub fn show(&self) -> Result<()> {
        let Some(figure) = &self.figure else {
            log::warn!("{NOT_CREATED}");
            return Ok(());
        };
        let (w, h, rgb) = viz::render_rgb(figure, figure.dpi)?;
        viz::viewer::show_rgb("Legend", w, h, &rgb)
    }

    /// Save the legend to `filepath` (`svg`, `png`, `jpg`, `jpeg` or `bmp`).
    /// Warns and does nothing before `create`.
    pub fn save<P: AsRef<Path>>(&self, filepath: P) -> Result<()> {
        self.save_with(filepath, &SaveOptions::default())
    }

    /// Like [`Legend::save`] with output options such as a dpi override.
    pub fn save_with<P: AsRef<Path>>(&self, filepath: P, options: &SaveOptions) -> Result<()> {
        let Some(figure) = &self.figure else {
            log::warn!("{NOT_CREATED}");
            return Ok(());
        };
        viz::save_figure(figure, filepath, options)
    }

    /// Render to a packed RGB buffer `(width, height, pixels)`; `None` before `create`.
    pub fn render_rgb(&self) -> Result<Option<(u32, u32, Vec<u8>)>> {
        match &self.figure {
            Some(figure) => viz::render_rgb(figure, figure.dpi).map(Some),
            None => {
                log::warn!("{NOT_CREATED}");
                Ok(None)
            }
        }
    }
}
