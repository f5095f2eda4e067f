//! The simplified oral hygiene table: six fixed sextant rows, each anchored
//! to three catalog teeth, scored as free-form text and coerced to integers
//! only at aggregation time.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::dentition::{SEXTANT_ANCHORS, ToothId};
use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HygieneField {
    Placa,
    Calculo,
    Gingivitis,
}

/// One sextant row. The anchor teeth are data (they round-trip with the
/// form), seeded from the registry's sextant table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HygieneRow {
    pub pieces: [ToothId; 3],
    #[serde(default)]
    pub placa: String,
    #[serde(default)]
    pub calculo: String,
    #[serde(default)]
    pub gingivitis: String,
}

impl HygieneRow {
    pub fn get(&self, field: HygieneField) -> &str {
        match field {
            HygieneField::Placa => &self.placa,
            HygieneField::Calculo => &self.calculo,
            HygieneField::Gingivitis => &self.gingivitis,
        }
    }

    pub fn set(&mut self, field: HygieneField, value: String) {
        match field {
            HygieneField::Placa => self.placa = value,
            HygieneField::Calculo => self.calculo = value,
            HygieneField::Gingivitis => self.gingivitis = value,
        }
    }
}

/// The full six-row table, aligned to [`SEXTANT_ANCHORS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct HygieneTable(pub [HygieneRow; 6]);

impl HygieneTable {
    /// An empty table seeded with the registry's sextant anchors.
    pub fn empty() -> Self {
        Self(SEXTANT_ANCHORS.map(|pieces| HygieneRow {
            pieces,
            placa: String::new(),
            calculo: String::new(),
            gingivitis: String::new(),
        }))
    }

    pub fn rows(&self) -> &[HygieneRow; 6] {
        &self.0
    }

    pub fn set(
        &mut self,
        row: usize,
        field: HygieneField,
        value: String,
    ) -> Result<(), CoreError> {
        let row = self
            .0
            .get_mut(row)
            .ok_or(CoreError::HygieneRowOutOfRange(row))?;
        row.set(field, value);
        Ok(())
    }
}

impl Default for HygieneTable {
    fn default() -> Self {
        Self::empty()
    }
}
