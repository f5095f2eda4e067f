//! The explicit state → color table.
//!
//! Clinical meaning never travels as a color name or a free-text match;
//! both backends look colors up here and nowhere else. Legend: pathology
//! is red, treatment is blue; overlay marks reuse the legend color of the
//! state they express (extraction/missing read as pathology, a crown reads
//! as completed treatment); chrome is near-black.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use odonta_core::models::chart::SurfaceState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components as 0.0–1.0 for backends with unit color spaces.
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

pub const PATHOLOGY: Color = Color::rgb(0xc6, 0x28, 0x28);
pub const TREATMENT: Color = Color::rgb(0x15, 0x65, 0xc0);
pub const OUTLINE: Color = Color::rgb(0x26, 0x32, 0x38);
pub const LABEL: Color = OUTLINE;
pub const EXTRACTION_MARK: Color = PATHOLOGY;
pub const CROWN_RING: Color = TREATMENT;
pub const MISSING_MARK: Color = PATHOLOGY;

/// Fill for a surface state; `Empty` draws nothing and lets the background
/// show through.
pub fn surface_fill(state: SurfaceState) -> Option<Color> {
    match state {
        SurfaceState::Empty => None,
        SurfaceState::Pathology => Some(PATHOLOGY),
        SurfaceState::Treatment => Some(TREATMENT),
    }
}
