//! The hit-test inverter against the layout it inverts. Divergence between
//! the constants used for drawing and for hit-testing is the defect class
//! these tests exist to catch.

use kurbo::Point;

use odonta_chart::layout::{ChartLayout, DentitionView, LayoutParams};
use odonta_core::dentition::{ToothId, all_tooth_ids};
use odonta_core::models::chart::Surface;

fn layout() -> ChartLayout {
    ChartLayout::new(LayoutParams::default())
}

#[test]
fn every_anchor_round_trips_to_its_own_tooth() {
    let layout = layout();
    for id in all_tooth_ids() {
        let anchor = layout.anchor(id).expect("catalog tooth has an anchor");
        let hit = layout
            .hit_test(anchor.center)
            .unwrap_or_else(|| panic!("anchor of tooth {id} must hit"));
        assert_eq!(hit.tooth, id);
        assert_eq!(hit.surface, Surface::Center, "cell centers are the center surface");
    }
}

#[test]
fn points_off_center_resolve_to_the_matching_surface() {
    let layout = layout();
    let cell = layout.params().cell;
    let center = layout.anchor(ToothId(16)).unwrap().center;
    let cases = [
        (Point::new(center.x, center.y - 0.4 * cell), Surface::Top),
        (Point::new(center.x + 0.4 * cell, center.y), Surface::Right),
        (Point::new(center.x, center.y + 0.4 * cell), Surface::Bottom),
        (Point::new(center.x - 0.4 * cell, center.y), Surface::Left),
        (center, Surface::Center),
    ];
    for (point, expected) in cases {
        let hit = layout.hit_test(point).expect("inside the cell");
        assert_eq!(hit.tooth, ToothId(16));
        assert_eq!(hit.surface, expected);
    }
}

#[test]
fn the_midline_gap_does_not_hit() {
    let layout = layout();
    let y = layout.anchor(ToothId(11)).unwrap().center.y;
    assert!(layout.hit_test(Point::new(layout.midline(), y)).is_none());
}

#[test]
fn inter_cell_gaps_do_not_hit() {
    let layout = layout();
    let params = *layout.params();
    let a = layout.anchor(ToothId(11)).unwrap().center;
    let b = layout.anchor(ToothId(12)).unwrap().center;
    let between = Point::new((a.x + b.x) / 2.0, a.y);
    assert!(
        layout.hit_test(between).is_none(),
        "midpoint between adjacent cells lies in the {}-unit gap",
        params.gap
    );
}

#[test]
fn beyond_the_outermost_tooth_does_not_hit() {
    let layout = layout();
    let cell = layout.params().cell;
    let outer = layout.anchor(ToothId(18)).unwrap().center;
    let past = Point::new(outer.x - cell, outer.y);
    assert!(layout.hit_test(past).is_none());
}

#[test]
fn between_rows_does_not_hit() {
    let layout = layout();
    let upper = layout.anchor(ToothId(16)).unwrap().center;
    let lower = layout.anchor(ToothId(55)).unwrap().center.y;
    let between = Point::new(upper.x, (upper.y + lower) / 2.0);
    assert!(layout.hit_test(between).is_none());
}

#[test]
fn circle_cells_reject_their_bounding_square_corners() {
    let layout = layout();
    let cell = layout.params().cell;
    let center = layout.anchor(ToothId(55)).unwrap().center;
    let corner = Point::new(center.x + 0.48 * cell, center.y - 0.48 * cell);
    assert!(
        layout.hit_test(corner).is_none(),
        "the corner of a deciduous cell lies outside its circle"
    );
    assert!(layout.hit_test(center).is_some());
}

#[test]
fn square_cells_accept_their_corners() {
    let layout = layout();
    let cell = layout.params().cell;
    let center = layout.anchor(ToothId(16)).unwrap().center;
    let near_corner = Point::new(center.x + 0.48 * cell, center.y - 0.48 * cell);
    let hit = layout.hit_test(near_corner).expect("square corners are part of the cell");
    assert_eq!(hit.tooth, ToothId(16));
}

#[test]
fn filtered_dentitions_are_not_hit_testable() {
    let both = layout();
    let permanent_only =
        ChartLayout::new(LayoutParams::default().with_view(DentitionView::Permanent));
    let deciduous_center = both.anchor(ToothId(55)).unwrap().center;
    assert!(both.hit_test(deciduous_center).is_some());
    assert!(permanent_only.hit_test(deciduous_center).is_none());
}

#[test]
fn round_trip_survives_scaling() {
    let scaled = ChartLayout::new(LayoutParams::default().scaled(174.0 / 640.0));
    for id in all_tooth_ids() {
        let anchor = scaled.anchor(id).unwrap();
        let hit = scaled.hit_test(anchor.center).expect("scaled anchors still hit");
        assert_eq!(hit.tooth, id);
    }
}
