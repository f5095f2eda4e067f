//! The derived-total invariant of the CPO / ceo indices: `total` always
//! equals the sum of its count fields, after any mutation and after any
//! decode.

use odonta_core::models::indices::{CeoField, CeoIndex, CpoField, CpoIndex};

#[test]
fn total_is_derived_on_construction() {
    let index = CpoIndex::new(3, 2, 1);
    assert_eq!(index.total, 6);
}

#[test]
fn setting_one_field_recomputes_total_and_leaves_the_rest() {
    let mut index = CpoIndex::new(3, 2, 1);
    index.set(CpoField::C, 5);
    assert_eq!(index.c, 5);
    assert_eq!(index.p, 2);
    assert_eq!(index.o, 1);
    assert_eq!(index.total, 8);
}

#[test]
fn negative_input_is_coerced_to_zero() {
    let mut index = CpoIndex::new(3, 2, 1);
    index.set(CpoField::P, -4);
    assert_eq!(index.p, 0);
    assert_eq!(index.total, 4);
}

#[test]
fn decoding_repairs_a_stale_total() {
    let index: CpoIndex = serde_json::from_str(r#"{"c":3,"p":2,"o":1,"total":99}"#).unwrap();
    assert_eq!(index.total, 6);
}

#[test]
fn decoding_tolerates_missing_fields() {
    let index: CpoIndex = serde_json::from_str(r#"{"c":4}"#).unwrap();
    assert_eq!(index.total, 4);
}

#[test]
fn ceo_behaves_like_cpo() {
    let mut index = CeoIndex::new(1, 1, 1);
    assert_eq!(index.total, 3);
    index.set(CeoField::E, 0);
    assert_eq!(index.total, 2);
    let decoded: CeoIndex = serde_json::from_str(r#"{"c":2,"e":2,"o":2,"total":0}"#).unwrap();
    assert_eq!(decoded.total, 6);
}

#[test]
fn round_trip_preserves_counts() {
    let index = CpoIndex::new(7, 0, 2);
    let json = serde_json::to_string(&index).unwrap();
    let decoded: CpoIndex = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, index);
}
