//! CPO / ceo summary indices: manually entered counts with a derived total.
//!
//! `total` is never a source of truth. Setters recompute it, and decoding
//! recomputes it too, so a stale persisted total is repaired on load.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CpoField {
    C,
    P,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CeoField {
    C,
    E,
    O,
}

/// Permanent-dentition index: decayed / lost / filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(from = "CpoParts")]
#[ts(export)]
pub struct CpoIndex {
    pub c: u32,
    pub p: u32,
    pub o: u32,
    pub total: u32,
}

impl CpoIndex {
    pub fn new(c: u32, p: u32, o: u32) -> Self {
        Self {
            c,
            p,
            o,
            total: c + p + o,
        }
    }

    /// Set one count (negative input coerces to 0) and recompute the total.
    pub fn set(&mut self, field: CpoField, value: i64) {
        let value = value.max(0) as u32;
        match field {
            CpoField::C => self.c = value,
            CpoField::P => self.p = value,
            CpoField::O => self.o = value,
        }
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.total = self.c + self.p + self.o;
    }
}

#[derive(Deserialize)]
struct CpoParts {
    #[serde(default)]
    c: u32,
    #[serde(default)]
    p: u32,
    #[serde(default)]
    o: u32,
    // A persisted total is ignored; it is derived.
    #[serde(default)]
    #[allow(dead_code)]
    total: u32,
}

impl From<CpoParts> for CpoIndex {
    fn from(parts: CpoParts) -> Self {
        Self::new(parts.c, parts.p, parts.o)
    }
}

/// Deciduous-dentition index: decayed / extraction-indicated / filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(from = "CeoParts")]
#[ts(export)]
pub struct CeoIndex {
    pub c: u32,
    pub e: u32,
    pub o: u32,
    pub total: u32,
}

impl CeoIndex {
    pub fn new(c: u32, e: u32, o: u32) -> Self {
        Self {
            c,
            e,
            o,
            total: c + e + o,
        }
    }

    pub fn set(&mut self, field: CeoField, value: i64) {
        let value = value.max(0) as u32;
        match field {
            CeoField::C => self.c = value,
            CeoField::E => self.e = value,
            CeoField::O => self.o = value,
        }
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.total = self.c + self.e + self.o;
    }
}

#[derive(Deserialize)]
struct CeoParts {
    #[serde(default)]
    c: u32,
    #[serde(default)]
    e: u32,
    #[serde(default)]
    o: u32,
    #[serde(default)]
    #[allow(dead_code)]
    total: u32,
}

impl From<CeoParts> for CeoIndex {
    fn from(parts: CeoParts) -> Self {
        Self::new(parts.c, parts.e, parts.o)
    }
}
