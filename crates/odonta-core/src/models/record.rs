use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::chart::Chart;
use super::hygiene::HygieneTable;
use super::indices::{CeoIndex, CpoIndex};

/// Patient identity as the engine sees it: an opaque label for header text.
/// Patient management lives outside this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordHeader {
    pub id: Uuid,
    pub patient_label: String,
    pub date: jiff::civil::Date,
}

/// The chart sub-document of the clinical form: the odontogram plus its
/// auxiliary score tables. This is the unit the engine owns; the rest of
/// the multi-section form stays with its external owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChartDocument {
    #[serde(default)]
    pub chart: Chart,
    #[serde(default)]
    pub hygiene: HygieneTable,
    #[serde(default)]
    pub cpo: CpoIndex,
    #[serde(default)]
    pub ceo: CeoIndex,
}

impl ChartDocument {
    pub fn new() -> Self {
        Self {
            chart: Chart::new(),
            hygiene: HygieneTable::empty(),
            cpo: CpoIndex::default(),
            ceo: CeoIndex::default(),
        }
    }
}

impl Default for ChartDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the document exporter consumes: header, chart document, and
/// an optional base64-encoded PNG signature captured by the external form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalRecord {
    pub header: RecordHeader,
    #[serde(default)]
    pub odontogram: ChartDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_png: Option<String>,
}
