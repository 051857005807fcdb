//! Text measurement helpers.

/// Average advance of a glyph relative to the font size.
const AVG_ADVANCE: f64 = 0.60;
/// Extra width for bold faces.
const BOLD_WIDENING: f64 = 1.08;

/// Heuristic: estimate the width of a single line of text in points
/// (Plotters has no built-in text measuring without a loaded font).
pub fn estimate_text_width_pt(text: &str, font_pt: f64, bold: bool) -> f64 {
    let w = text.chars().count() as f64 * font_pt * AVG_ADVANCE;
    if bold { w * BOLD_WIDENING } else { w }
}

/// Split a label into display lines. Explicit `\n` breaks lines; a blank label yields
/// one empty line so the row still has a height.
pub fn split_label_lines(label: &str) -> Vec<String> {
    let lines: Vec<String> = label.lines().map(|l| l.trim_end().to_string()).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
