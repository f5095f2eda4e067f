//! Export smoke tests: a populated record always yields a PDF byte stream,
//! and a corrupt signature payload degrades to a document without the
//! image rather than a failure.

use jiff::civil::date;
use uuid::Uuid;

use odonta_core::dentition::ToothId;
use odonta_core::models::chart::{ConditionState, Surface, SurfaceState};
use odonta_core::models::hygiene::HygieneField;
use odonta_core::models::indices::{CpoField, CpoIndex};
use odonta_core::models::record::{ChartDocument, ClinicalRecord, RecordHeader};
use odonta_export::{DocumentStyles, generate_pdf};

// A 1×1 PNG, the smallest payload the decoder accepts.
const TINY_PNG_B64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

fn sample_record() -> ClinicalRecord {
    let mut odontogram = ChartDocument::new();
    odontogram
        .chart
        .set_surface(ToothId(16), Surface::Top, SurfaceState::Pathology);
    odontogram
        .chart
        .set_surface(ToothId(24), Surface::Center, SurfaceState::Treatment);
    odontogram
        .chart
        .toggle_condition(ToothId(11), ConditionState::Extraction);
    odontogram
        .chart
        .toggle_condition(ToothId(75), ConditionState::Crown);
    odontogram
        .hygiene
        .set(0, HygieneField::Placa, "2".to_string())
        .unwrap();
    odontogram.cpo = CpoIndex::new(3, 2, 1);
    odontogram.cpo.set(CpoField::C, 5);

    ClinicalRecord {
        header: RecordHeader {
            id: Uuid::new_v4(),
            patient_label: "Expediente 0144".to_string(),
            date: date(2026, 3, 14),
        },
        odontogram,
        signature_png: None,
    }
}

fn assert_is_pdf(bytes: &[u8]) {
    assert!(bytes.len() > 1000, "a two-page document has real content");
    assert!(bytes.starts_with(b"%PDF"), "the byte stream is a PDF");
}

#[test]
fn a_populated_record_exports() {
    let bytes = generate_pdf(&sample_record(), &DocumentStyles::default()).expect("export");
    assert_is_pdf(&bytes);
}

#[test]
fn an_empty_record_exports() {
    let record = ClinicalRecord {
        header: RecordHeader {
            id: Uuid::new_v4(),
            patient_label: String::new(),
            date: date(2026, 1, 2),
        },
        odontogram: ChartDocument::new(),
        signature_png: None,
    };
    let bytes = generate_pdf(&record, &DocumentStyles::default()).expect("export");
    assert_is_pdf(&bytes);
}

#[test]
fn a_signature_image_is_embedded_when_decodable() {
    let mut record = sample_record();
    record.signature_png = Some(format!("data:image/png;base64,{TINY_PNG_B64}"));
    let bytes = generate_pdf(&record, &DocumentStyles::default()).expect("export");
    assert_is_pdf(&bytes);
}

#[test]
fn a_corrupt_signature_does_not_lose_the_document() {
    let mut record = sample_record();
    record.signature_png = Some("not base64 at all %%%".to_string());
    let bytes = generate_pdf(&record, &DocumentStyles::default())
        .expect("export must survive a bad signature payload");
    assert_is_pdf(&bytes);

    record.signature_png = Some(format!("data:image/png;base64,{}", "AAAA"));
    let bytes = generate_pdf(&record, &DocumentStyles::default())
        .expect("export must survive an undecodable image");
    assert_is_pdf(&bytes);
}

#[test]
fn the_exporter_reads_a_snapshot_without_mutating_it() {
    let record = sample_record();
    let before = record.clone();
    let _ = generate_pdf(&record, &DocumentStyles::default()).expect("export");
    assert_eq!(record, before);
}
