//! Drawing a laid-out [`Figure`] onto a plotters drawing area.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::markers::draw_marker;
use crate::color::{to_hex, with_alpha};
use crate::entries::{Entry, LineDash, LineEntry, MarkerEntry, RectangleEntry};
use crate::error::{LegendError, Result};
use crate::layout::{BoxPt, Figure, LINE_SPACING, POINTS_PER_INCH};

/// Frame face (white, slightly translucent).
const FRAME_FACE: RGBAColor = RGBAColor(255, 255, 255, 0.8);
/// Frame edge (grey level 0.8).
const FRAME_EDGE: RGBAColor = RGBAColor(204, 204, 204, 1.0);
const SHADOW: RGBAColor = RGBAColor(77, 77, 77, 0.5);
/// Shadow offset in points (right, down).
const SHADOW_OFFSET_PT: (f64, f64) = (2.0, 2.0);
/// Corner radius of the rounded frame, relative to the font size.
const ROUND_RADIUS: f64 = 0.2;
const FRAME_LINE_WIDTH_PT: f64 = 1.0;

/// Points to pixels at a given resolution.
#[derive(Clone, Copy, Debug)]
struct Scale(f64);

impl Scale {
    fn px(self, pt: f64) -> i32 {
        (pt * self.0).round() as i32
    }

    fn pxf(self, pt: f64) -> f64 {
        pt * self.0
    }

    /// Stroke width in whole pixels, never thinner than one pixel.
    fn stroke(self, pt: f64) -> u32 {
        (pt * self.0).round().max(1.0) as u32
    }

    fn rect(self, b: &BoxPt) -> [(i32, i32); 2] {
        [(self.px(b.x), self.px(b.y)), (self.px(b.right()), self.px(b.bottom()))]
    }
}

/// Rounded rectangle outline as a polygon (corner arcs approximated with short segments).
fn rounded_rect(b: &BoxPt, radius: f64, scale: Scale) -> Vec<(i32, i32)> {
    let r = radius.min(b.w / 2.0).min(b.h / 2.0).max(0.0);
    let corners = [
        (b.right() - r, b.y + r, -std::f64::consts::FRAC_PI_2),
        (b.right() - r, b.bottom() - r, 0.0),
        (b.x + r, b.bottom() - r, std::f64::consts::FRAC_PI_2),
        (b.x + r, b.y + r, std::f64::consts::PI),
    ];
    const STEPS: usize = 6;
    let mut pts = Vec::with_capacity(corners.len() * (STEPS + 1));
    for (cx, cy, start) in corners {
        for i in 0..=STEPS {
            let a = start + std::f64::consts::FRAC_PI_2 * i as f64 / STEPS as f64;
            pts.push((scale.px(cx + r * a.cos()), scale.px(cy + r * a.sin())));
        }
    }
    pts
}

fn frame_outline(b: &BoxPt, round: bool, font_pt: f64, scale: Scale) -> Vec<(i32, i32)> {
    if round {
        rounded_rect(b, ROUND_RADIUS * font_pt, scale)
    } else {
        let [(x0, y0), (x1, y1)] = scale.rect(b);
        vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
    }
}

fn draw_frame<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    scale: Scale,
) -> Result<()> {
    let style = &figure.style;
    if !style.border {
        return Ok(());
    }
    let fs = style.font_points();

    if style.shadow {
        let shadow_box = BoxPt {
            x: figure.frame.x + SHADOW_OFFSET_PT.0,
            y: figure.frame.y + SHADOW_OFFSET_PT.1,
            ..figure.frame
        };
        let pts = frame_outline(&shadow_box, style.roundborder, fs, scale);
        area.draw(&Polygon::new(pts, SHADOW.filled()))
            .map_err(LegendError::render)?;
    }

    let pts = frame_outline(&figure.frame, style.roundborder, fs, scale);
    area.draw(&Polygon::new(pts.clone(), FRAME_FACE.filled()))
        .map_err(LegendError::render)?;
    let mut closed = pts;
    if let Some(first) = closed.first().copied() {
        closed.push(first);
    }
    area.draw(&PathElement::new(
        closed,
        ShapeStyle {
            color: FRAME_EDGE,
            filled: false,
            stroke_width: scale.stroke(FRAME_LINE_WIDTH_PT),
        },
    ))
    .map_err(LegendError::render)?;
    Ok(())
}

/// Draw a horizontal line sample with the given dash pattern.
fn draw_line_sample<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (x0, x1, y): (f64, f64, f64),
    color: RGBAColor,
    width_pt: f64,
    dash: LineDash,
    scale: Scale,
) -> Result<()> {
    let style = ShapeStyle {
        color,
        filled: false,
        stroke_width: scale.stroke(width_pt),
    };
    let yp = scale.px(y);

    let Some(pattern) = dash.pattern() else {
        area.draw(&PathElement::new(
            vec![(scale.px(x0), yp), (scale.px(x1), yp)],
            style,
        ))
        .map_err(LegendError::render)?;
        return Ok(());
    };

    // Pattern lengths are multiples of the line width.
    let unit = width_pt.max(0.5);
    let mut x = x0;
    let mut i = 0;
    while x < x1 {
        let len = pattern[i % pattern.len()] * unit;
        let end = (x + len).min(x1);
        if i % 2 == 0 {
            area.draw(&PathElement::new(
                vec![(scale.px(x), yp), (scale.px(end), yp)],
                style,
            ))
            .map_err(LegendError::render)?;
        }
        x = end;
        i += 1;
    }
    Ok(())
}

fn draw_line_handle<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    handle: &BoxPt,
    e: &LineEntry,
    scale: Scale,
) -> Result<()> {
    let color = with_alpha(e.color, e.alpha);
    let (cx, cy) = handle.center();
    log::trace!("line handle {} width {}pt", to_hex(color), e.linewidth);
    // Zero width means marker only.
    if e.linewidth > 0.0 {
        draw_line_sample(
            area,
            (handle.x, handle.right(), cy),
            color,
            e.linewidth,
            e.linestyle,
            scale,
        )?;
    }
    if let Some(marker) = e.marker {
        draw_marker(
            area,
            marker,
            (scale.px(cx), scale.px(cy)),
            scale.pxf(e.markersize / 2.0),
            with_alpha(e.markerfacecolor, e.alpha),
            with_alpha(e.markeredgecolor, e.alpha),
            edge_px(e.markeredgewidth, scale),
        )?;
    }
    Ok(())
}

/// Marker outline width; zero disables the outline.
fn edge_px(width_pt: f64, scale: Scale) -> u32 {
    if width_pt > 0.0 {
        scale.stroke(width_pt)
    } else {
        0
    }
}

fn draw_marker_handle<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    handle: &BoxPt,
    e: &MarkerEntry,
    scale: Scale,
) -> Result<()> {
    let (cx, cy) = handle.center();
    log::trace!(
        "marker handle {:?} face {} edge {}",
        e.marker,
        to_hex(e.facecolor),
        to_hex(e.edgecolor)
    );
    draw_marker(
        area,
        e.marker,
        (scale.px(cx), scale.px(cy)),
        scale.pxf(e.markersize / 2.0),
        with_alpha(e.facecolor, e.alpha),
        with_alpha(e.edgecolor, e.alpha),
        edge_px(e.markeredgewidth, scale),
    )
}

fn draw_rectangle_handle<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    handle: &BoxPt,
    e: &RectangleEntry,
    scale: Scale,
) -> Result<()> {
    let corners = scale.rect(handle);
    area.draw(&Rectangle::new(
        corners,
        with_alpha(e.facecolor, e.alpha).filled(),
    ))
    .map_err(LegendError::render)?;
    if e.linewidth > 0.0 {
        area.draw(&Rectangle::new(
            corners,
            ShapeStyle {
                color: with_alpha(e.edgecolor, e.alpha),
                filled: false,
                stroke_width: scale.stroke(e.linewidth),
            },
        ))
        .map_err(LegendError::render)?;
    }
    Ok(())
}

/// Draw the whole figure: white background, frame, then every entry in insertion order.
pub fn draw_figure<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    figure: &Figure,
    dpi: f64,
) -> Result<()> {
    area.fill(&WHITE).map_err(LegendError::render)?;

    let scale = Scale(dpi / POINTS_PER_INCH);
    draw_frame(area, figure, scale)?;

    let style = &figure.style;
    let font_pt = style.font_points();
    let family = FontFamily::from(style.fontfamily.as_str());
    let label_style: TextStyle = TextStyle::from(FontDesc::new(
        family,
        scale.pxf(font_pt),
        style.plotters_font_style(),
    ))
    .pos(Pos::new(HPos::Left, VPos::Center))
    .color(&BLACK);

    for item in &figure.items {
        match &item.entry {
            Entry::Line(e) => draw_line_handle(area, &item.handle, e, scale)?,
            Entry::Marker(e) => draw_marker_handle(area, &item.handle, e, scale)?,
            Entry::Rectangle(e) => draw_rectangle_handle(area, &item.handle, e, scale)?,
        }

        for (i, line) in item.lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let center_y = item.label.y + font_pt / 2.0 + i as f64 * font_pt * LINE_SPACING;
            area.draw(&Text::new(
                line.as_str(),
                (scale.px(item.label.x), scale.px(center_y)),
                label_style.clone(),
            ))
            .map_err(LegendError::render)?;
        }
    }
    Ok(())
}
