//! Five-region decomposition of a tooth cell.
//!
//! The cell's bounding square is partitioned by its diagonals into four
//! corner-to-center triangles (top, right, bottom, left) plus a central
//! square with half-extent `cell / 4`. Painting and hit-testing both
//! consume the polygons produced here — there is exactly one source of
//! truth for the partition, so the two cannot drift apart.
//!
//! The triangles geometrically overlap the central square; the partition is
//! resolved by precedence. Painting lists `Center` last so its fill covers
//! the triangle tips, and [`surface_at`] tests `Center` first.

use kurbo::Point;

use odonta_core::models::chart::Surface;

/// One region of the partition with its filled outline.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceRegion {
    pub surface: Surface,
    pub polygon: Vec<Point>,
}

/// The five regions in paint order: the four triangles, then `Center`.
///
/// Coordinates are in the engine's y-down space, so `Top` is the triangle
/// with the smaller y values.
pub fn surface_regions(center: Point, cell: f64) -> [SurfaceRegion; 5] {
    let h = cell / 2.0;
    let q = cell / 4.0;
    let tl = Point::new(center.x - h, center.y - h);
    let tr = Point::new(center.x + h, center.y - h);
    let br = Point::new(center.x + h, center.y + h);
    let bl = Point::new(center.x - h, center.y + h);

    [
        SurfaceRegion {
            surface: Surface::Top,
            polygon: vec![tl, tr, center],
        },
        SurfaceRegion {
            surface: Surface::Right,
            polygon: vec![tr, br, center],
        },
        SurfaceRegion {
            surface: Surface::Bottom,
            polygon: vec![br, bl, center],
        },
        SurfaceRegion {
            surface: Surface::Left,
            polygon: vec![bl, tl, center],
        },
        SurfaceRegion {
            surface: Surface::Center,
            polygon: vec![
                Point::new(center.x - q, center.y - q),
                Point::new(center.x + q, center.y - q),
                Point::new(center.x + q, center.y + q),
                Point::new(center.x - q, center.y + q),
            ],
        },
    ]
}

/// Classify a point against the partition, central square first. `None`
/// when the point is outside the cell's bounding square.
pub fn surface_at(center: Point, cell: f64, point: Point) -> Option<Surface> {
    let regions = surface_regions(center, cell);
    let (triangles, center_region) = regions.split_at(4);
    if polygon_contains(&center_region[0].polygon, point) {
        return Some(Surface::Center);
    }
    triangles
        .iter()
        .find(|region| polygon_contains(&region.polygon, point))
        .map(|region| region.surface)
}

/// Point-in-convex-polygon via edge cross-product signs. Boundary points
/// count as inside, which keeps adjacent regions seam-free: a point on a
/// shared edge classifies to whichever region is tested first.
pub fn polygon_contains(polygon: &[Point], point: Point) -> bool {
    let mut sign = 0.0_f64;
    for (i, &a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let cross = (b - a).cross(point - a);
        if cross != 0.0 {
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
    }
    true
}
