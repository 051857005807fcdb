//! Marker glyphs drawn in pixel space.

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::entries::MarkerShape;
use crate::error::{LegendError, Result};

/// Regular polygon vertices around `(x, y)`, first vertex pointing up.
fn regular_polygon(x: i32, y: i32, r: f64, sides: usize, rotation: f64) -> Vec<(i32, i32)> {
    (0..sides)
        .map(|i| {
            let a = rotation - std::f64::consts::FRAC_PI_2
                + i as f64 * std::f64::consts::TAU / sides as f64;
            (
                x + (r * a.cos()).round() as i32,
                y + (r * a.sin()).round() as i32,
            )
        })
        .collect()
}

fn star(x: i32, y: i32, r: f64) -> Vec<(i32, i32)> {
    let inner = r * 0.381966;
    (0..10)
        .map(|i| {
            let rr = if i % 2 == 0 { r } else { inner };
            let a = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
            (
                x + (rr * a.cos()).round() as i32,
                y + (rr * a.sin()).round() as i32,
            )
        })
        .collect()
}

/// Outline of a filled marker as a polygon; `None` for circles and stroke-only glyphs.
fn outline(shape: MarkerShape, x: i32, y: i32, r: f64) -> Option<Vec<(i32, i32)>> {
    let s = r.round() as i32;
    let pts = match shape {
        MarkerShape::Square => vec![(x - s, y - s), (x + s, y - s), (x + s, y + s), (x - s, y + s)],
        MarkerShape::TriangleUp => vec![(x, y - s), (x - s, y + s), (x + s, y + s)],
        MarkerShape::TriangleDown => vec![(x, y + s), (x - s, y - s), (x + s, y - s)],
        MarkerShape::TriangleLeft => vec![(x - s, y), (x + s, y - s), (x + s, y + s)],
        MarkerShape::TriangleRight => vec![(x + s, y), (x - s, y - s), (x - s, y + s)],
        MarkerShape::Diamond => vec![(x, y - s), (x - s, y), (x, y + s), (x + s, y)],
        MarkerShape::ThinDiamond => {
            let half = (r * 0.6).round() as i32;
            vec![(x, y - s), (x - half, y), (x, y + s), (x + half, y)]
        }
        MarkerShape::Star => star(x, y, r),
        MarkerShape::Pentagon => regular_polygon(x, y, r, 5, 0.0),
        MarkerShape::Hexagon => regular_polygon(x, y, r, 6, 0.0),
        MarkerShape::Circle
        | MarkerShape::Point
        | MarkerShape::Pixel
        | MarkerShape::Plus
        | MarkerShape::X => return None,
    };
    Some(pts)
}

/// Draw one marker centered at `(x, y)` with radius `r` pixels.
pub fn draw_marker<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    shape: MarkerShape,
    (x, y): (i32, i32),
    r: f64,
    face: RGBAColor,
    edge: RGBAColor,
    edge_width: u32,
) -> Result<()> {
    let r = (r * shape.size_factor()).max(1.0);
    let edge_style = ShapeStyle {
        color: edge,
        filled: false,
        stroke_width: edge_width.max(1),
    };

    if shape.is_unfilled() {
        let s = r.round() as i32;
        let strokes = match shape {
            MarkerShape::Plus => [[(x - s, y), (x + s, y)], [(x, y - s), (x, y + s)]],
            _ => [[(x - s, y - s), (x + s, y + s)], [(x - s, y + s), (x + s, y - s)]],
        };
        for stroke in strokes {
            area.draw(&PathElement::new(stroke.to_vec(), edge_style))
                .map_err(LegendError::render)?;
        }
        return Ok(());
    }

    match outline(shape, x, y, r) {
        Some(points) => {
            area.draw(&Polygon::new(points.clone(), face.filled()))
                .map_err(LegendError::render)?;
            if edge_width > 0 {
                let mut closed = points;
                if let Some(first) = closed.first().copied() {
                    closed.push(first);
                }
                area.draw(&PathElement::new(closed, edge_style))
                    .map_err(LegendError::render)?;
            }
        }
        None => {
            let radius = r.round() as i32;
            area.draw(&Circle::new((x, y), radius, face.filled()))
                .map_err(LegendError::render)?;
            if edge_width > 0 {
                area.draw(&Circle::new((x, y), radius, edge_style))
                    .map_err(LegendError::render)?;
            }
        }
    }
    Ok(())
}
