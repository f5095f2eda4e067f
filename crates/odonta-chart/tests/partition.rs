//! Partition completeness of the five-region decomposition, by sampled
//! point coverage: every point inside the cell classifies to exactly one
//! region, and the central square takes precedence over the triangles.

use kurbo::Point;

use odonta_chart::surfaces::{polygon_contains, surface_at, surface_regions};
use odonta_core::models::chart::Surface;

const CELL: f64 = 32.0;

/// An off-grid sample step so no sample lands exactly on a region
/// boundary, where classification is precedence-defined.
const STEP: f64 = 0.7321;

fn center() -> Point {
    Point::new(100.0, 100.0)
}

#[test]
fn every_interior_point_classifies_to_exactly_one_region() {
    let c = center();
    let half = CELL / 2.0;
    let regions = surface_regions(c, CELL);
    let mut samples = 0;
    let mut dx = -half + STEP;
    while dx < half {
        let mut dy = -half + STEP;
        while dy < half {
            // Points on the diagonals sit on a shared edge, where
            // classification is precedence-defined; sample off them.
            if (dx.abs() - dy.abs()).abs() < 1e-6 {
                dy += STEP;
                continue;
            }
            let point = Point::new(c.x + dx, c.y + dy);
            let classified = surface_at(c, CELL, point);
            assert!(classified.is_some(), "no gap at {point:?}");

            // Ignoring precedence, the point must lie in the center square
            // or in exactly one triangle.
            let in_center = polygon_contains(&regions[4].polygon, point);
            let triangle_hits = regions[..4]
                .iter()
                .filter(|r| polygon_contains(&r.polygon, point))
                .count();
            if in_center {
                assert_eq!(classified, Some(Surface::Center));
            } else {
                assert_eq!(triangle_hits, 1, "overlap or gap at {point:?}");
            }
            samples += 1;
            dy += STEP;
        }
        dx += STEP;
    }
    assert!(samples > 1500, "the sample grid must actually cover the cell");
}

#[test]
fn the_center_square_takes_precedence_over_the_triangles() {
    let c = center();
    // A point inside the central square also lies inside at least one
    // corner triangle; classification must still say center.
    let point = Point::new(c.x + 1.0, c.y - 2.0);
    let regions = surface_regions(c, CELL);
    assert!(polygon_contains(&regions[4].polygon, point));
    assert!(
        regions[..4]
            .iter()
            .any(|r| polygon_contains(&r.polygon, point))
    );
    assert_eq!(surface_at(c, CELL, point), Some(Surface::Center));
}

#[test]
fn points_outside_the_cell_do_not_classify() {
    let c = center();
    let half = CELL / 2.0;
    for point in [
        Point::new(c.x - half - 0.5, c.y),
        Point::new(c.x, c.y + half + 0.5),
        Point::new(c.x + half + 3.0, c.y - half - 3.0),
    ] {
        assert_eq!(surface_at(c, CELL, point), None);
    }
}

#[test]
fn regions_are_emitted_in_paint_order_with_center_last() {
    let regions = surface_regions(center(), CELL);
    let order: Vec<Surface> = regions.iter().map(|r| r.surface).collect();
    assert_eq!(
        order,
        vec![
            Surface::Top,
            Surface::Right,
            Surface::Bottom,
            Surface::Left,
            Surface::Center
        ]
    );
    assert_eq!(regions[4].polygon.len(), 4, "the center region is a square");
    assert!(
        regions[..4].iter().all(|r| r.polygon.len() == 3),
        "the four directional regions are triangles"
    );
}

#[test]
fn the_center_square_is_inset_a_quarter_cell() {
    let c = center();
    let regions = surface_regions(c, CELL);
    for p in &regions[4].polygon {
        assert!(((p.x - c.x).abs() - CELL / 4.0).abs() < 1e-9);
        assert!(((p.y - c.y).abs() - CELL / 4.0).abs() < 1e-9);
    }
}
