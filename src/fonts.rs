//! Font registration for the `ab_glyph` text path.
//!
//! `ab_glyph` does not discover OS fonts, so a TrueType file is located once per
//! process and registered under the generic family names. SVG output writes the
//! family name into the file and does not need a registered font; bitmap output does.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::FontStyle;

/// Environment variable pointing at a `.ttf`/`.otf` file to use for labels.
pub const FONT_ENV: &str = "LEGEND_RS_FONT";

const GENERIC_FAMILIES: [&str; 3] = ["sans-serif", "serif", "monospace"];

const FONT_FILE_NAMES: [(&str, Option<&str>); 4] = [
    ("DejaVuSans.ttf", Some("DejaVuSans-Bold.ttf")),
    ("LiberationSans-Regular.ttf", Some("LiberationSans-Bold.ttf")),
    ("Arial.ttf", Some("Arial Bold.ttf")),
    ("arial.ttf", Some("arialbd.ttf")),
];

const SYSTEM_FONT_DIRS: [&str; 9] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
    "C:\\Windows\\Fonts",
];

struct FontData {
    regular: &'static [u8],
    bold: &'static [u8],
    source: PathBuf,
}

static FONT_DATA: OnceLock<Option<FontData>> = OnceLock::new();

fn leak_file(path: &Path) -> Option<&'static [u8]> {
    match std::fs::read(path) {
        Ok(bytes) => Some(Box::leak(bytes.into_boxed_slice())),
        Err(e) => {
            log::debug!("cannot read font {}: {e}", path.display());
            None
        }
    }
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut dirs_out: Vec<PathBuf> = Vec::new();
    if let Some(user) = dirs::font_dir() {
        dirs_out.push(user);
    }
    dirs_out.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));
    dirs_out
}

fn discover() -> Option<FontData> {
    if let Ok(path) = std::env::var(FONT_ENV) {
        let path = PathBuf::from(path);
        if let Some(regular) = leak_file(&path) {
            return Some(FontData {
                regular,
                bold: regular,
                source: path,
            });
        }
        log::warn!("{FONT_ENV} is set but {} could not be read", path.display());
    }

    for dir in candidate_dirs() {
        for (regular_name, bold_name) in FONT_FILE_NAMES {
            let path = dir.join(regular_name);
            if !path.is_file() {
                continue;
            }
            let Some(regular) = leak_file(&path) else {
                continue;
            };
            let bold = bold_name
                .map(|b| dir.join(b))
                .filter(|b| b.is_file())
                .and_then(|b| leak_file(&b))
                .unwrap_or(regular);
            return Some(FontData {
                regular,
                bold,
                source: path,
            });
        }
    }
    None
}

fn register_all_styles(family: &str, data: &FontData) {
    for (style, bytes) in [
        (FontStyle::Normal, data.regular),
        (FontStyle::Italic, data.regular),
        (FontStyle::Oblique, data.regular),
        (FontStyle::Bold, data.bold),
    ] {
        if plotters::style::register_font(family, style, bytes).is_err() {
            log::warn!(
                "font {} rejected for family {family:?}",
                data.source.display()
            );
            return;
        }
    }
}

/// Make sure a font is registered for the generic families and for `family`.
///
/// Safe to call many times; discovery only runs once. Returns `false` when no usable
/// font file was found, in which case bitmap text rendering will fail.
pub fn ensure_fonts_registered(family: &str) -> bool {
    let data = FONT_DATA.get_or_init(|| {
        let found = discover();
        match &found {
            Some(d) => {
                log::debug!("using font {}", d.source.display());
                for generic in GENERIC_FAMILIES {
                    register_all_styles(generic, d);
                }
            }
            None => log::warn!(
                "no TrueType font found; set {FONT_ENV} to render text into bitmap images"
            ),
        }
        found
    });

    match data {
        Some(d) => {
            if !GENERIC_FAMILIES.contains(&family) {
                register_all_styles(family, d);
            }
            true
        }
        None => false,
    }
}
