//! odonta-indices
//!
//! Aggregate clinical indices derived from the chart document's score
//! tables. Pure functions — no I/O, no geometry. Scoring rules live here,
//! apart from the record envelope in `odonta-core`.

pub mod scoring;

pub use scoring::{HygieneTotals, coerce_score, hygiene_totals, recompute_document};
