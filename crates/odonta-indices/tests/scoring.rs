//! Hygiene aggregation: string coercion and field-wise sextant totals.

use odonta_core::models::hygiene::{HygieneField, HygieneTable};
use odonta_indices::{HygieneTotals, coerce_score, hygiene_totals};

#[test]
fn coercion_parses_integers_and_zeroes_everything_else() {
    assert_eq!(coerce_score("2"), 2);
    assert_eq!(coerce_score(" 3 "), 3);
    assert_eq!(coerce_score(""), 0);
    assert_eq!(coerce_score("n/a"), 0);
    assert_eq!(coerce_score("2.5"), 0, "only whole numbers count");
    assert_eq!(coerce_score("-2"), 0, "negative entries are guarded to zero");
}

#[test]
fn an_empty_table_totals_to_zero() {
    assert_eq!(hygiene_totals(&HygieneTable::empty()), HygieneTotals::default());
}

#[test]
fn totals_are_field_wise_sums_across_all_six_rows() {
    let mut table = HygieneTable::empty();
    table.set(0, HygieneField::Placa, "2".to_string()).unwrap();
    table.set(0, HygieneField::Calculo, "1".to_string()).unwrap();
    table.set(0, HygieneField::Gingivitis, "0".to_string()).unwrap();
    table.set(1, HygieneField::Placa, "1".to_string()).unwrap();
    table.set(2, HygieneField::Placa, "3".to_string()).unwrap();
    table.set(3, HygieneField::Calculo, "2".to_string()).unwrap();
    table.set(4, HygieneField::Gingivitis, "1".to_string()).unwrap();
    table.set(5, HygieneField::Placa, "x".to_string()).unwrap();

    let totals = hygiene_totals(&table);
    assert_eq!(
        totals,
        HygieneTotals {
            placa: 6,
            calculo: 3,
            gingivitis: 1,
        }
    );
}

#[test]
fn setting_a_seventh_row_is_rejected() {
    let mut table = HygieneTable::empty();
    assert!(table.set(6, HygieneField::Placa, "1".to_string()).is_err());
}

#[test]
fn totals_ignore_malformed_entries_instead_of_failing() {
    let mut table = HygieneTable::empty();
    table.set(0, HygieneField::Placa, "two".to_string()).unwrap();
    table.set(1, HygieneField::Placa, "2".to_string()).unwrap();
    assert_eq!(hygiene_totals(&table).placa, 2);
}
