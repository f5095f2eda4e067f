use serde::{Deserialize, Serialize};
use ts_rs::TS;

use odonta_core::models::hygiene::HygieneTable;
use odonta_core::models::record::ChartDocument;

/// Field-wise sums across the six sextant rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HygieneTotals {
    pub placa: u32,
    pub calculo: u32,
    pub gingivitis: u32,
}

/// Coerce a free-form score entry to a non-negative integer.
///
/// The table is entered as text; anything that does not parse as an integer
/// counts as 0, and negative entries are guarded to 0.
pub fn coerce_score(raw: &str) -> u32 {
    raw.trim().parse::<i64>().map_or(0, |n| n.max(0) as u32)
}

/// Sum each hygiene field across all six sextant rows.
pub fn hygiene_totals(table: &HygieneTable) -> HygieneTotals {
    table
        .rows()
        .iter()
        .fold(HygieneTotals::default(), |mut acc, row| {
            acc.placa += coerce_score(&row.placa);
            acc.calculo += coerce_score(&row.calculo);
            acc.gingivitis += coerce_score(&row.gingivitis);
            acc
        })
}

/// Re-derive every stored total in the document. Decoding already repairs
/// totals; this exists for callers that mutate index fields directly.
pub fn recompute_document(document: &mut ChartDocument) {
    document.cpo.recompute();
    document.ceo.recompute();
}
