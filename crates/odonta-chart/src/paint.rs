//! The painter contract and the chart walker.
//!
//! Both backends implement [`Painter`] and nothing else; every coordinate
//! they receive comes from the same layout and decomposition arithmetic.
//! Per tooth, primitives are emitted in a fixed z-order that is a
//! correctness contract: surface fills, then the cell outline and internal
//! diagonals, then the identifier label, then the condition overlay — an
//! extraction mark must stay visible regardless of the fills under it.

use kurbo::{Circle, Point, Rect, Size};

use odonta_core::models::chart::{Chart, ConditionState, ToothRecord};

use crate::layout::{ChartLayout, Shape, ToothAnchor};
use crate::palette::{self, Color};
use crate::surfaces::surface_regions;

// Drawing constants, as factors of the cell size so that scaling the layout
// scales the whole rendition.
const OUTLINE_WIDTH: f64 = 0.045;
const DIAGONAL_WIDTH: f64 = 0.03;
const OVERLAY_WIDTH: f64 = 0.09;
const LABEL_SIZE: f64 = 0.34;
const LABEL_NUDGE_SQUARE: f64 = 0.36;
const LABEL_NUDGE_CIRCLE: f64 = 0.46;
const CROWN_RADIUS: f64 = 0.65;
const MISSING_HALF_SPAN: f64 = 0.62;

/// Drawing primitives shared by the interactive canvas and the document
/// exporter. Coordinates are y-down; `draw_text` anchors the horizontal
/// center of the string's baseline at `anchor`.
pub trait Painter {
    fn fill_polygon(&mut self, points: &[Point], color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);
    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64);
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64);
    fn draw_text(&mut self, text: &str, anchor: Point, size: f64, color: Color);
}

/// Render the whole chart through `painter`, walking every visible catalog
/// tooth in registry order. Teeth without a record render as blank cells.
pub fn paint_chart(chart: &Chart, layout: &ChartLayout, painter: &mut impl Painter) {
    let blank = ToothRecord::default();
    for anchor in layout.anchors() {
        let record = chart.get(anchor.tooth).unwrap_or(&blank);
        paint_tooth(&anchor, record, layout.params().cell, painter);
    }

    let stray = chart.iter().filter(|(id, _)| !id.is_valid()).count();
    if stray > 0 {
        debug_assert!(false, "{stray} chart entries outside the dentition catalog");
        tracing::warn!(count = stray, "skipped chart entries outside the dentition catalog");
    }
}

fn paint_tooth(anchor: &ToothAnchor, record: &ToothRecord, cell: f64, painter: &mut impl Painter) {
    let c = anchor.center;
    let half = cell / 2.0;

    // 1. Surface fills. A missing tooth suppresses them entirely.
    if record.condition != ConditionState::Missing {
        for region in surface_regions(c, cell) {
            if let Some(color) = palette::surface_fill(record.surfaces.get(region.surface)) {
                painter.fill_polygon(&region.polygon, color);
            }
        }
    }

    // 2. Outline and internal diagonals.
    let tl = Point::new(c.x - half, c.y - half);
    let tr = Point::new(c.x + half, c.y - half);
    let br = Point::new(c.x + half, c.y + half);
    let bl = Point::new(c.x - half, c.y + half);
    match anchor.shape {
        Shape::Square => {
            painter.stroke_rect(
                Rect::from_center_size(c, Size::new(cell, cell)),
                palette::OUTLINE,
                cell * OUTLINE_WIDTH,
            );
            painter.draw_line(tl, br, palette::OUTLINE, cell * DIAGONAL_WIDTH);
            painter.draw_line(tr, bl, palette::OUTLINE, cell * DIAGONAL_WIDTH);
        }
        Shape::Circle => {
            painter.stroke_circle(Circle::new(c, half), palette::OUTLINE, cell * OUTLINE_WIDTH);
            // The X spans the inscribed square so its ends meet the ring.
            let d = half * std::f64::consts::FRAC_1_SQRT_2;
            painter.draw_line(
                Point::new(c.x - d, c.y - d),
                Point::new(c.x + d, c.y + d),
                palette::OUTLINE,
                cell * DIAGONAL_WIDTH,
            );
            painter.draw_line(
                Point::new(c.x + d, c.y - d),
                Point::new(c.x - d, c.y + d),
                palette::OUTLINE,
                cell * DIAGONAL_WIDTH,
            );
        }
    }

    // 3. Identifier label, under the cell; circles sit lower to clear the
    // ring.
    let nudge = match anchor.shape {
        Shape::Square => LABEL_NUDGE_SQUARE,
        Shape::Circle => LABEL_NUDGE_CIRCLE,
    };
    painter.draw_text(
        &anchor.tooth.to_string(),
        Point::new(c.x, c.y + half + cell * nudge),
        cell * LABEL_SIZE,
        palette::LABEL,
    );

    // 4. Condition overlay, always on top.
    match record.condition {
        ConditionState::None => {}
        ConditionState::Extraction => {
            painter.draw_line(tl, br, palette::EXTRACTION_MARK, cell * OVERLAY_WIDTH);
            painter.draw_line(tr, bl, palette::EXTRACTION_MARK, cell * OVERLAY_WIDTH);
        }
        ConditionState::Crown => {
            painter.stroke_circle(
                Circle::new(c, cell * CROWN_RADIUS),
                palette::CROWN_RING,
                cell * OVERLAY_WIDTH,
            );
        }
        ConditionState::Missing => {
            painter.draw_line(
                Point::new(c.x - cell * MISSING_HALF_SPAN, c.y),
                Point::new(c.x + cell * MISSING_HALF_SPAN, c.y),
                palette::MISSING_MARK,
                cell * OVERLAY_WIDTH,
            );
        }
    }
}
