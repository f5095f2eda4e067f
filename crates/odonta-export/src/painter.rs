//! A [`Painter`] that targets one printpdf layer.
//!
//! The engine draws in a y-down millimetre space anchored at the page's
//! top-left; PDF user space is y-up from the bottom-left, so every
//! coordinate is flipped against the page height on the way out. Stroke
//! widths arrive in millimetres and become points.

use kurbo::{Circle, Point, Rect};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    IndirectFontRef, Line, Mm, PdfLayerReference, Polygon, Pt, Rgb, calculate_points_for_circle,
};

use odonta_chart::paint::Painter;
use odonta_chart::palette::Color;

pub(crate) const MM_PER_PT: f64 = 25.4 / 72.0;
/// Average digit advance in Helvetica, as a fraction of the font size.
/// Labels and table cells are centered with this estimate.
const HELVETICA_ADVANCE: f64 = 0.556;

// printpdf's unit scalars changed width across releases; funnel every
// conversion through these helpers so the cast lives in one place.
pub(crate) fn mm(v: f64) -> Mm {
    Mm(v as _)
}

fn pt(v: f64) -> Pt {
    Pt(v as _)
}

pub struct PdfPainter<'a> {
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    page_height: f64,
}

impl<'a> PdfPainter<'a> {
    pub fn new(layer: PdfLayerReference, font: &'a IndirectFontRef, page_height: f64) -> Self {
        Self {
            layer,
            font,
            page_height,
        }
    }

    fn point(&self, p: Point) -> printpdf::Point {
        printpdf::Point::new(mm(p.x), mm(self.page_height - p.y))
    }

    fn set_stroke(&self, color: Color, width: f64) {
        let (r, g, b) = color.to_unit();
        self.layer
            .set_outline_color(printpdf::Color::Rgb(Rgb::new(r as _, g as _, b as _, None)));
        self.layer.set_outline_thickness((width / MM_PER_PT) as _);
    }
}

impl Painter for PdfPainter<'_> {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let (r, g, b) = color.to_unit();
        self.layer
            .set_fill_color(printpdf::Color::Rgb(Rgb::new(r as _, g as _, b as _, None)));
        self.layer.add_polygon(Polygon {
            rings: vec![points.iter().map(|&p| (self.point(p), false)).collect()],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.set_stroke(color, width);
        let corners = [
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
        self.layer.add_line(Line {
            points: corners.iter().map(|&p| (self.point(p), false)).collect(),
            is_closed: true,
        });
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        self.set_stroke(color, width);
        let center = self.point(circle.center);
        let points =
            calculate_points_for_circle(pt(circle.radius / MM_PER_PT), center.x, center.y);
        self.layer.add_line(Line {
            points,
            is_closed: true,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.set_stroke(color, width);
        self.layer.add_line(Line {
            points: vec![(self.point(from), false), (self.point(to), false)],
            is_closed: false,
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, size: f64, color: Color) {
        let (r, g, b) = color.to_unit();
        self.layer
            .set_fill_color(printpdf::Color::Rgb(Rgb::new(r as _, g as _, b as _, None)));
        let size_pt = size / MM_PER_PT;
        let estimated_width = HELVETICA_ADVANCE * size * text.chars().count() as f64;
        self.layer.use_text(
            text,
            size_pt as _,
            mm(anchor.x - estimated_width / 2.0),
            mm(self.page_height - anchor.y),
            self.font,
        );
    }
}
