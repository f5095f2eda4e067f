//! Pointer → (tooth, surface), the exact inverse of the layout and
//! decomposition arithmetic.
//!
//! Any constant used here is read from the same [`LayoutParams`] the
//! renderer used; there is deliberately no second copy of the geometry to
//! drift out of sync.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use odonta_core::dentition::{QUADRANTS, Side, ToothId};
use odonta_core::models::chart::Surface;

use crate::layout::{ChartLayout, LayoutParams, ROWS, Shape};
use crate::surfaces::surface_at;

/// A resolved pointer position on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Hit {
    pub tooth: ToothId,
    pub surface: Surface,
}

impl ChartLayout {
    /// Resolve a pointer coordinate to the tooth cell and surface under it,
    /// or `None` outside every cell (the midline gap, the inter-cell gaps,
    /// the area beyond a quadrant, and the corners a circular cell does not
    /// cover all miss).
    pub fn hit_test(&self, point: Point) -> Option<Hit> {
        let p: &LayoutParams = self.params();
        let half = p.cell / 2.0;

        // Row band: rows are spaced further apart than a cell is tall, so
        // at most one band contains the pointer.
        let &(dentition, jaw) = ROWS
            .iter()
            .enumerate()
            .filter(|&(_, &(d, _))| p.view.includes(d))
            .find(|&(row, _)| (point.y - self.row_y(row)).abs() <= half)
            .map(|(_, band)| band)?;

        let side = if point.x < self.midline() {
            Side::Left
        } else {
            Side::Right
        };
        let quadrant = QUADRANTS
            .iter()
            .find(|q| q.dentition == dentition && q.jaw == jaw && q.side == side)?;

        // Invert the linear spacing: distance from the quadrant's inner
        // edge, snapped to the nearest cell index, then re-checked against
        // that cell's actual span to reject points in a gap.
        let pitch = p.cell + p.gap;
        let distance =
            (point.x - self.midline()).abs() - p.midline_gap / 2.0 - self.quadrant_inset(dentition);
        if distance < 0.0 {
            return None;
        }
        let index = ((distance - half) / pitch).round().max(0.0) as usize;
        if index >= quadrant.teeth.len() {
            return None;
        }
        let center_distance = half + index as f64 * pitch;
        if (distance - center_distance).abs() > half {
            return None;
        }

        let tooth = quadrant.teeth[index];
        let anchor = self.anchor(tooth)?;
        if anchor.shape == Shape::Circle && (point - anchor.center).hypot() > half {
            return None;
        }

        let surface = surface_at(anchor.center, p.cell, point)?;
        Some(Hit { tooth, surface })
    }
}
