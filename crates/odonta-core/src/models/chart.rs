//! The per-patient tooth chart: a sparse map from tooth id to findings.
//!
//! Absence and emptiness are the same clinical statement. A `ToothRecord`
//! with nothing set must be indistinguishable from a missing entry, so every
//! mutation path prunes records that end up blank.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dentition::ToothId;

/// Clinical state of one tooth surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SurfaceState {
    #[default]
    Empty,
    Pathology,
    Treatment,
}

impl SurfaceState {
    /// Decode a persisted value. Unrecognized strings collapse to `Empty`:
    /// a malformed record must still render (and export) as a blank surface.
    pub fn from_name(name: &str) -> Self {
        match name {
            "pathology" => Self::Pathology,
            "treatment" => Self::Treatment,
            _ => Self::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The click-to-cycle successor: empty → pathology → treatment → empty.
    pub fn next(self) -> Self {
        match self {
            Self::Empty => Self::Pathology,
            Self::Pathology => Self::Treatment,
            Self::Treatment => Self::Empty,
        }
    }
}

impl<'de> Deserialize<'de> for SurfaceState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Exclusive whole-tooth overlay state.
///
/// `Extraction` and `Missing` are deliberately separate variants even though
/// their renderings are closely related: extraction marks a tooth that is
/// still charted (fills stay visible under the mark), missing suppresses the
/// surface fills entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConditionState {
    #[default]
    None,
    Extraction,
    Crown,
    Missing,
}

impl ConditionState {
    /// Decode a persisted value; unrecognized strings collapse to `None`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "extraction" => Self::Extraction,
            "crown" => Self::Crown,
            "missing" => Self::Missing,
            _ => Self::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<'de> Deserialize<'de> for ConditionState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// One of the five clinically distinguished faces of a tooth cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Surface {
    Top,
    Right,
    Bottom,
    Left,
    Center,
}

impl Surface {
    pub const ALL: [Surface; 5] = [
        Surface::Top,
        Surface::Right,
        Surface::Bottom,
        Surface::Left,
        Surface::Center,
    ];
}

/// The five named surface slots of one tooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SurfaceSet {
    #[serde(default, skip_serializing_if = "SurfaceState::is_empty")]
    pub top: SurfaceState,
    #[serde(default, skip_serializing_if = "SurfaceState::is_empty")]
    pub right: SurfaceState,
    #[serde(default, skip_serializing_if = "SurfaceState::is_empty")]
    pub bottom: SurfaceState,
    #[serde(default, skip_serializing_if = "SurfaceState::is_empty")]
    pub left: SurfaceState,
    #[serde(default, skip_serializing_if = "SurfaceState::is_empty")]
    pub center: SurfaceState,
}

impl SurfaceSet {
    pub fn get(&self, surface: Surface) -> SurfaceState {
        match surface {
            Surface::Top => self.top,
            Surface::Right => self.right,
            Surface::Bottom => self.bottom,
            Surface::Left => self.left,
            Surface::Center => self.center,
        }
    }

    pub fn set(&mut self, surface: Surface, state: SurfaceState) {
        *self.slot_mut(surface) = state;
    }

    pub fn cycle(&mut self, surface: Surface) -> SurfaceState {
        let slot = self.slot_mut(surface);
        *slot = slot.next();
        *slot
    }

    pub fn is_empty(&self) -> bool {
        Surface::ALL.iter().all(|&s| self.get(s).is_empty())
    }

    fn slot_mut(&mut self, surface: Surface) -> &mut SurfaceState {
        match surface {
            Surface::Top => &mut self.top,
            Surface::Right => &mut self.right,
            Surface::Bottom => &mut self.bottom,
            Surface::Left => &mut self.left,
            Surface::Center => &mut self.center,
        }
    }
}

/// Periodontal recession, recorded as entered (numeric or ordinal text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Recession {
    Number(f64),
    Text(String),
}

/// Findings for one tooth. Every field is optional and independently set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ToothRecord {
    #[serde(default, skip_serializing_if = "SurfaceSet::is_empty")]
    pub surfaces: SurfaceSet,
    #[serde(default, skip_serializing_if = "ConditionState::is_none")]
    pub condition: ConditionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobility: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recession: Option<Recession>,
}

impl ToothRecord {
    pub fn is_blank(&self) -> bool {
        self.surfaces.is_empty()
            && self.condition.is_none()
            && self.mobility.is_none()
            && self.recession.is_none()
    }
}

/// Sparse per-patient chart, keyed across both dentitions simultaneously.
///
/// Unset teeth render as blank cells; blank records are pruned so the
/// persisted form never distinguishes "never touched" from "cycled back to
/// empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Chart(BTreeMap<ToothId, ToothRecord>);

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tooth: ToothId) -> Option<&ToothRecord> {
        self.0.get(&tooth)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ToothId, &ToothRecord)> {
        self.0.iter().map(|(&id, rec)| (id, rec))
    }

    pub fn set_surface(&mut self, tooth: ToothId, surface: Surface, state: SurfaceState) {
        self.with_record(tooth, |rec| rec.surfaces.set(surface, state));
    }

    /// Advance one surface through empty → pathology → treatment → empty and
    /// return the new state.
    pub fn cycle_surface(&mut self, tooth: ToothId, surface: Surface) -> SurfaceState {
        let mut next = SurfaceState::Empty;
        self.with_record(tooth, |rec| next = rec.surfaces.cycle(surface));
        next
    }

    /// Set the condition, or clear it when it is already `state`.
    pub fn toggle_condition(&mut self, tooth: ToothId, state: ConditionState) -> ConditionState {
        let mut applied = ConditionState::None;
        self.with_record(tooth, |rec| {
            rec.condition = if rec.condition == state {
                ConditionState::None
            } else {
                state
            };
            applied = rec.condition;
        });
        applied
    }

    /// Mobility grade, clamped to the 0–3 ordinal scale.
    pub fn set_mobility(&mut self, tooth: ToothId, grade: Option<u8>) {
        self.with_record(tooth, |rec| rec.mobility = grade.map(|g| g.min(3)));
    }

    pub fn set_recession(&mut self, tooth: ToothId, recession: Option<Recession>) {
        self.with_record(tooth, |rec| rec.recession = recession);
    }

    /// Drop entries that are blank or outside the dentition catalog (a
    /// malformed persisted chart must not block rendering the rest).
    /// Returns how many entries were removed.
    pub fn retain_catalog(&mut self) -> usize {
        let before = self.0.len();
        self.0.retain(|id, rec| id.is_valid() && !rec.is_blank());
        before - self.0.len()
    }

    fn with_record<F: FnOnce(&mut ToothRecord)>(&mut self, tooth: ToothId, f: F) {
        debug_assert!(
            tooth.is_valid(),
            "tooth id {tooth} is not in the dentition catalog"
        );
        if !tooth.is_valid() {
            return;
        }
        let rec = self.0.entry(tooth).or_default();
        f(rec);
        if self.0.get(&tooth).is_some_and(ToothRecord::is_blank) {
            self.0.remove(&tooth);
        }
    }
}
