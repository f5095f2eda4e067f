//! Tooth cell placement.
//!
//! Quadrants converge at a vertical midline: tooth index 0 (the central
//! incisor) sits nearest the gap and positions step outward at a fixed
//! pitch of `cell + gap`. Rows are fixed offsets from a shared baseline,
//! top to bottom: permanent upper, deciduous upper, deciduous lower,
//! permanent lower. Deciduous quadrants are shifted outward by
//! `deciduous_inset` so their five cells nest inside the horizontal span of
//! their eight-tooth permanent counterpart.

use kurbo::Point;

use odonta_core::dentition::{self, Dentition, Jaw, Quadrant, Side, ToothId};

/// Row bands in vertical order. Single-dentition views keep these slots
/// fixed and simply omit the filtered rows.
pub(crate) const ROWS: [(Dentition, Jaw); 4] = [
    (Dentition::Permanent, Jaw::Upper),
    (Dentition::Deciduous, Jaw::Upper),
    (Dentition::Deciduous, Jaw::Lower),
    (Dentition::Permanent, Jaw::Lower),
];

/// Which dentition layers a view renders and hit-tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DentitionView {
    #[default]
    Both,
    Permanent,
    Deciduous,
}

impl DentitionView {
    pub fn includes(self, dentition: Dentition) -> bool {
        match self {
            Self::Both => true,
            Self::Permanent => dentition == Dentition::Permanent,
            Self::Deciduous => dentition == Dentition::Deciduous,
        }
    }
}

/// Cell shape. Decided by the registry alone — a deciduous tooth is always
/// a circle and a permanent tooth always a square, independent of the
/// record's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Square,
    Circle,
}

/// All lengths are in the drawing surface's units (pixels on the canvas,
/// millimetres on a page). `scaled` multiplies every length by one factor,
/// which is the only difference between the two backends' geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Side length (square) or diameter (circle) of one tooth cell.
    pub cell: f64,
    /// Horizontal spacing between adjacent cells in a quadrant.
    pub gap: f64,
    /// Clear width separating the viewer-left and viewer-right halves.
    pub midline_gap: f64,
    /// Vertical pitch between row centers.
    pub row_gap: f64,
    /// Extra outward shift applied to deciduous quadrants.
    pub deciduous_inset: f64,
    /// Top-left of the chart region; `origin.y` is the first row's center.
    pub origin: Point,
    /// Total width of the chart region; the midline halves it.
    pub width: f64,
    pub view: DentitionView,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            cell: 32.0,
            gap: 6.0,
            midline_gap: 28.0,
            row_gap: 48.0,
            deciduous_inset: 38.0,
            origin: Point::new(0.0, 28.0),
            width: 640.0,
            view: DentitionView::Both,
        }
    }
}

impl LayoutParams {
    /// Scale every length by `factor`, preserving all proportions.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.cell *= factor;
        self.gap *= factor;
        self.midline_gap *= factor;
        self.row_gap *= factor;
        self.deciduous_inset *= factor;
        self.origin = Point::new(self.origin.x * factor, self.origin.y * factor);
        self.width *= factor;
        self
    }

    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_view(mut self, view: DentitionView) -> Self {
        self.view = view;
        self
    }

    /// Vertical extent from the first row's center down past the bottom
    /// row's labels.
    pub fn content_height(&self) -> f64 {
        3.0 * self.row_gap + 1.4 * self.cell
    }
}

/// Placement of one tooth cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothAnchor {
    pub tooth: ToothId,
    pub center: Point,
    pub shape: Shape,
}

/// Deterministic cell placement for a parameter set. Construction is cheap;
/// all positions are derived arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct ChartLayout {
    params: LayoutParams,
}

impl ChartLayout {
    pub fn new(params: LayoutParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn midline(&self) -> f64 {
        self.params.origin.x + self.params.width / 2.0
    }

    /// The anchor for a tooth, or `None` when the id is outside the catalog
    /// or its dentition is filtered out by the current view.
    pub fn anchor(&self, tooth: ToothId) -> Option<ToothAnchor> {
        let (quadrant, index) = dentition::locate(tooth)?;
        if !self.params.view.includes(quadrant.dentition) {
            return None;
        }
        Some(self.place(quadrant, index, tooth))
    }

    /// Anchors for every visible tooth, in registry order.
    pub fn anchors(&self) -> impl Iterator<Item = ToothAnchor> + '_ {
        dentition::QUADRANTS
            .iter()
            .filter(|q| self.params.view.includes(q.dentition))
            .flat_map(move |q| {
                q.teeth
                    .iter()
                    .enumerate()
                    .map(move |(i, &tooth)| self.place(q, i, tooth))
            })
    }

    pub(crate) fn row_y(&self, row: usize) -> f64 {
        self.params.origin.y + row as f64 * self.params.row_gap
    }

    pub(crate) fn quadrant_inset(&self, dentition: Dentition) -> f64 {
        match dentition {
            Dentition::Permanent => 0.0,
            Dentition::Deciduous => self.params.deciduous_inset,
        }
    }

    fn place(&self, quadrant: &Quadrant, index: usize, tooth: ToothId) -> ToothAnchor {
        let p = &self.params;
        let offset = p.midline_gap / 2.0
            + self.quadrant_inset(quadrant.dentition)
            + index as f64 * (p.cell + p.gap)
            + p.cell / 2.0;
        let x = match quadrant.side {
            Side::Left => self.midline() - offset,
            Side::Right => self.midline() + offset,
        };
        let row = ROWS
            .iter()
            .position(|&(d, j)| d == quadrant.dentition && j == quadrant.jaw)
            .expect("every quadrant has a row band");
        let shape = match quadrant.dentition {
            Dentition::Permanent => Shape::Square,
            Dentition::Deciduous => Shape::Circle,
        };
        ToothAnchor {
            tooth,
            center: Point::new(x, self.row_y(row)),
            shape,
        }
    }
}
