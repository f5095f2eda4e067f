//! odonta-export
//!
//! The document backend: print-accurate PDF generation for the clinical
//! record's chart sub-document. The chart region is rendered by the same
//! engine as the interactive canvas — same walker, same constants, one
//! scale factor — through a [`Painter`](odonta_chart::paint::Painter) that
//! targets a PDF layer. The exporter only ever reads the record.

pub mod error;
pub mod painter;
pub mod pdf;
pub mod styles;
pub mod tables;

pub use error::ExportError;
pub use pdf::generate_pdf;
pub use styles::DocumentStyles;
