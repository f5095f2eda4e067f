//! The dentition registry: the closed FDI catalog of tooth identifiers,
//! their grouping into quadrants, and the fixed sextant anchor table.
//!
//! This is authoritative, ordered, static data. Quadrant order and the
//! in-quadrant tooth order (central incisor first, proceeding away from the
//! dental midline) determine drawing positions, so reordering these tables
//! is a breaking change for any persisted layout expectations.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An FDI two-digit tooth code (`11`–`48` permanent, `51`–`85` deciduous).
///
/// The catalog is closed: 32 permanent and 20 deciduous identifiers. A value
/// outside the catalog is a programming error at mutation sites and is
/// skipped (never rendered, never fatal) on document paths.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct ToothId(pub u8);

impl ToothId {
    /// Quadrant digit, `1`–`8` for catalog members.
    pub fn quadrant_digit(self) -> u8 {
        self.0 / 10
    }

    /// Position within the quadrant, `1` = central incisor.
    pub fn position(self) -> u8 {
        self.0 % 10
    }

    pub fn is_deciduous(self) -> bool {
        (5..=8).contains(&self.quadrant_digit())
    }

    /// Catalog membership check.
    pub fn is_valid(self) -> bool {
        let q = self.quadrant_digit();
        let p = self.position();
        match q {
            1..=4 => (1..=8).contains(&p),
            5..=8 => (1..=5).contains(&p),
            _ => false,
        }
    }
}

impl fmt::Display for ToothId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dentition {
    Permanent,
    Deciduous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Jaw {
    Upper,
    Lower,
}

/// Horizontal half of the chart as drawn (the patient's right appears on the
/// viewer's left; these are viewer-side names).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Side {
    Left,
    Right,
}

/// An ordered anatomical grouping of teeth. `teeth` is listed central
/// incisor first; drawing proceeds outward from the midline.
#[derive(Debug, Clone, Copy)]
pub struct Quadrant {
    pub dentition: Dentition,
    pub jaw: Jaw,
    pub side: Side,
    pub teeth: &'static [ToothId],
}

const fn t(n: u8) -> ToothId {
    ToothId(n)
}

/// All eight quadrants in registry order: row by row (permanent upper,
/// deciduous upper, deciduous lower, permanent lower), viewer-left before
/// viewer-right within a row.
pub static QUADRANTS: [Quadrant; 8] = [
    Quadrant {
        dentition: Dentition::Permanent,
        jaw: Jaw::Upper,
        side: Side::Left,
        teeth: &[t(11), t(12), t(13), t(14), t(15), t(16), t(17), t(18)],
    },
    Quadrant {
        dentition: Dentition::Permanent,
        jaw: Jaw::Upper,
        side: Side::Right,
        teeth: &[t(21), t(22), t(23), t(24), t(25), t(26), t(27), t(28)],
    },
    Quadrant {
        dentition: Dentition::Deciduous,
        jaw: Jaw::Upper,
        side: Side::Left,
        teeth: &[t(51), t(52), t(53), t(54), t(55)],
    },
    Quadrant {
        dentition: Dentition::Deciduous,
        jaw: Jaw::Upper,
        side: Side::Right,
        teeth: &[t(61), t(62), t(63), t(64), t(65)],
    },
    Quadrant {
        dentition: Dentition::Deciduous,
        jaw: Jaw::Lower,
        side: Side::Left,
        teeth: &[t(81), t(82), t(83), t(84), t(85)],
    },
    Quadrant {
        dentition: Dentition::Deciduous,
        jaw: Jaw::Lower,
        side: Side::Right,
        teeth: &[t(71), t(72), t(73), t(74), t(75)],
    },
    Quadrant {
        dentition: Dentition::Permanent,
        jaw: Jaw::Lower,
        side: Side::Left,
        teeth: &[t(41), t(42), t(43), t(44), t(45), t(46), t(47), t(48)],
    },
    Quadrant {
        dentition: Dentition::Permanent,
        jaw: Jaw::Lower,
        side: Side::Right,
        teeth: &[t(31), t(32), t(33), t(34), t(35), t(36), t(37), t(38)],
    },
];

/// Anchor teeth for the six hygiene sextants, in form order.
pub static SEXTANT_ANCHORS: [[ToothId; 3]; 6] = [
    [t(16), t(17), t(55)],
    [t(11), t(21), t(51)],
    [t(26), t(27), t(65)],
    [t(36), t(37), t(75)],
    [t(31), t(41), t(71)],
    [t(46), t(47), t(85)],
];

/// Quadrants of one dentition, in registry order.
pub fn quadrants_for(dentition: Dentition) -> impl Iterator<Item = &'static Quadrant> {
    QUADRANTS.iter().filter(move |q| q.dentition == dentition)
}

/// Every catalog tooth id, in registry order (52 ids).
pub fn all_tooth_ids() -> impl Iterator<Item = ToothId> {
    QUADRANTS.iter().flat_map(|q| q.teeth.iter().copied())
}

/// The quadrant containing `tooth` and its index within it (0 = central
/// incisor). `None` for ids outside the catalog.
pub fn locate(tooth: ToothId) -> Option<(&'static Quadrant, usize)> {
    QUADRANTS.iter().find_map(|q| {
        q.teeth
            .iter()
            .position(|&candidate| candidate == tooth)
            .map(|i| (q, i))
    })
}
