//! odonta-core
//!
//! Pure domain types and the dentition registry. No I/O, no geometry —
//! this is the shared vocabulary of the Odonta system.

pub mod dentition;
pub mod error;
pub mod models;
