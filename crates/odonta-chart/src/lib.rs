//! odonta-chart
//!
//! The odontogram geometry engine: tooth layout, five-surface
//! decomposition, the painter primitive contract both renderer backends
//! implement, and the hit-test inverse of the same geometry.
//!
//! Everything here is pure and deterministic: identical layout parameters
//! always yield identical coordinates, which is what keeps the interactive
//! canvas and the exported document geometrically consistent, and what the
//! hit-test inverter relies on for correctness.

pub mod hit;
pub mod layout;
pub mod paint;
pub mod palette;
pub mod surfaces;
