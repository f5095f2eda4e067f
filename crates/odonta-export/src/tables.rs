//! Ruled tables drawn through the painter primitives, so the document's
//! tabular sections use the same backend contract as the chart itself.

use kurbo::Point;

use odonta_chart::paint::Painter;
use odonta_chart::palette;

const RULE_WIDTH: f64 = 0.2;
const CELL_PADDING: f64 = 1.6;

/// Geometry of one table. `origin` is the top-left corner in the engine's
/// y-down space.
#[derive(Debug, Clone)]
pub struct TableSpec<'a> {
    pub origin: Point,
    pub col_widths: &'a [f64],
    pub row_height: f64,
    pub text_size: f64,
}

impl TableSpec<'_> {
    pub fn width(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    pub fn height(&self, row_count: usize) -> f64 {
        self.row_height * row_count as f64
    }
}

/// Draw a ruled table. `rows` includes the header row, if any; every row is
/// clipped to the column count.
pub fn draw_table(painter: &mut impl Painter, spec: &TableSpec<'_>, rows: &[Vec<String>]) {
    let width = spec.width();
    let height = spec.height(rows.len());

    for i in 0..=rows.len() {
        let y = spec.origin.y + i as f64 * spec.row_height;
        painter.draw_line(
            Point::new(spec.origin.x, y),
            Point::new(spec.origin.x + width, y),
            palette::OUTLINE,
            RULE_WIDTH,
        );
    }
    let mut x = spec.origin.x;
    painter.draw_line(
        Point::new(x, spec.origin.y),
        Point::new(x, spec.origin.y + height),
        palette::OUTLINE,
        RULE_WIDTH,
    );
    for col_width in spec.col_widths {
        x += col_width;
        painter.draw_line(
            Point::new(x, spec.origin.y),
            Point::new(x, spec.origin.y + height),
            palette::OUTLINE,
            RULE_WIDTH,
        );
    }

    for (i, row) in rows.iter().enumerate() {
        let baseline = spec.origin.y + (i + 1) as f64 * spec.row_height - CELL_PADDING;
        let mut cell_x = spec.origin.x;
        for (cell, col_width) in row.iter().zip(spec.col_widths) {
            painter.draw_text(
                cell,
                Point::new(cell_x + col_width / 2.0, baseline),
                spec.text_size,
                palette::LABEL,
            );
            cell_x += col_width;
        }
    }
}
