//! Color string resolution.
//!
//! Accepts everything `csscolorparser` understands (CSS names, `#rgb`, `#rrggbbaa`,
//! `rgb()`/`hsl()` functions) plus the shorthands commonly used in plotting code:
//! single letters (`r`, `k`, ...), cycle references (`C0`..`C9`), `tab:` names,
//! grey levels written as a number in `[0, 1]` (`"0.8"`) and `none`.

use plotters::style::{RGBAColor, RGBColor};

/// Default category cycle (`C0`..`C9`).
const CYCLE10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),  // blue   (#1F77B4)
    RGBColor(255, 127, 14),  // orange (#FF7F0E)
    RGBColor(44, 160, 44),   // green  (#2CA02C)
    RGBColor(214, 39, 40),   // red    (#D62728)
    RGBColor(148, 103, 189), // purple (#9467BD)
    RGBColor(140, 86, 75),   // brown  (#8C564B)
    RGBColor(227, 119, 194), // pink   (#E377C2)
    RGBColor(127, 127, 127), // gray   (#7F7F7F)
    RGBColor(188, 189, 34),  // olive  (#BCBD22)
    RGBColor(23, 190, 207),  // cyan   (#17BECF)
];

const CYCLE_NAMES: [&str; 10] = [
    "blue", "orange", "green", "red", "purple", "brown", "pink", "gray", "olive", "cyan",
];

/// Get a color from the default category cycle.
#[inline]
pub fn cycle_color(idx: usize) -> RGBAColor {
    let RGBColor(r, g, b) = CYCLE10[idx % CYCLE10.len()];
    RGBAColor(r, g, b, 1.0)
}

fn base_letter(c: &str) -> Option<RGBAColor> {
    let (r, g, b) = match c {
        "b" => (0, 0, 255),
        "g" => (0, 128, 0),
        "r" => (255, 0, 0),
        "c" => (0, 191, 191),
        "m" => (191, 0, 191),
        "y" => (191, 191, 0),
        "k" => (0, 0, 0),
        "w" => (255, 255, 255),
        _ => return None,
    };
    Some(RGBAColor(r, g, b, 1.0))
}

/// Resolve a color string to RGBA. Returns `None` when nothing recognizes it.
pub fn parse_color(value: &str) -> Option<RGBAColor> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }
    if let Some(c) = base_letter(s) {
        return Some(c);
    }
    if s.eq_ignore_ascii_case("none") {
        return Some(RGBAColor(0, 0, 0, 0.0));
    }
    if let Some(idx) = s.strip_prefix('C').and_then(|d| d.parse::<usize>().ok()) {
        return Some(cycle_color(idx));
    }
    if let Some(name) = s.strip_prefix("tab:") {
        let name = if name == "grey" { "gray" } else { name };
        return CYCLE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(cycle_color);
    }
    // Grey level, e.g. "0.8". Only plain decimals; "1e-1" style strings are not colors.
    if s.chars().all(|ch| ch.is_ascii_digit() || ch == '.') {
        let level: f64 = s.parse().ok()?;
        if !(0.0..=1.0).contains(&level) {
            return None;
        }
        let v = (level * 255.0).round() as u8;
        return Some(RGBAColor(v, v, v, 1.0));
    }

    let c = csscolorparser::parse(s).ok()?;
    let [r, g, b, a] = c.to_rgba8();
    Some(RGBAColor(r, g, b, f64::from(a) / 255.0))
}

/// Multiply the alpha channel, used for per-entry `alpha`.
pub fn with_alpha(color: RGBAColor, alpha: Option<f64>) -> RGBAColor {
    match alpha {
        Some(a) => RGBAColor(color.0, color.1, color.2, color.3 * a.clamp(0.0, 1.0)),
        None => color,
    }
}

/// Hex form (`#RRGGBB` or `#RRGGBBAA` when translucent), handy for logs and debugging.
pub fn to_hex(color: RGBAColor) -> String {
    let RGBAColor(r, g, b, a) = color;
    if a >= 1.0 {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        let a = (a.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}
