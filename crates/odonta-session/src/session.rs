//! Session state behind the desktop command surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use odonta_chart::hit::Hit;
use odonta_chart::layout::{ChartLayout, LayoutParams};
use odonta_chart::paint::paint_chart;
use odonta_core::dentition::ToothId;
use odonta_core::models::chart::{Chart, ConditionState, Recession};
use odonta_core::models::hygiene::HygieneField;
use odonta_core::models::indices::{CeoField, CpoField};
use odonta_core::models::record::ChartDocument;
use odonta_indices::{HygieneTotals, hygiene_totals};

use crate::error::SessionError;
use crate::scene::{DisplayList, ScenePainter};

/// What a pointer-down on the chart does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "tool", content = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum Tool {
    /// Cycle the clicked surface: empty → pathology → treatment → empty.
    #[default]
    CycleSurface,
    /// Toggle the clicked tooth's condition to/from the given state.
    Condition(ConditionState),
}

/// One open chart: the single editor of its document for the session's
/// lifetime. All operations are synchronous; the document is only ever
/// observed between them.
#[derive(Debug)]
pub struct ChartSession {
    document: ChartDocument,
    layout: ChartLayout,
    tool: Tool,
}

impl ChartSession {
    pub fn new(document: ChartDocument, params: LayoutParams) -> Self {
        Self {
            document,
            layout: ChartLayout::new(params),
            tool: Tool::default(),
        }
    }

    pub fn open(params: LayoutParams) -> Self {
        Self::new(ChartDocument::new(), params)
    }

    pub fn document(&self) -> &ChartDocument {
        &self.document
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Render the current document to a display list for the canvas.
    pub fn scene(&self) -> DisplayList {
        let params = self.layout.params();
        let mut painter = ScenePainter::new(
            params.origin.x + params.width,
            params.origin.y + params.content_height(),
        );
        paint_chart(&self.document.chart, &self.layout, &mut painter);
        painter.finish()
    }

    /// Resolve a pointer-down and apply the active tool. Misses (gaps,
    /// margins, the midline) return `None` and mutate nothing.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<Hit> {
        let hit = self.layout.hit_test(Point::new(x, y))?;
        match self.tool {
            Tool::CycleSurface => {
                self.document.chart.cycle_surface(hit.tooth, hit.surface);
            }
            Tool::Condition(state) => {
                self.document.chart.toggle_condition(hit.tooth, state);
            }
        }
        Some(hit)
    }

    pub fn set_mobility(&mut self, tooth: ToothId, grade: Option<u8>) {
        self.document.chart.set_mobility(tooth, grade);
    }

    pub fn set_recession(&mut self, tooth: ToothId, recession: Option<Recession>) {
        self.document.chart.set_recession(tooth, recession);
    }

    pub fn set_hygiene_score(
        &mut self,
        row: usize,
        field: HygieneField,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.document.hygiene.set(row, field, value.into())?;
        Ok(())
    }

    pub fn hygiene_totals(&self) -> HygieneTotals {
        hygiene_totals(&self.document.hygiene)
    }

    /// Set one CPO count; the total is rederived before this returns.
    pub fn set_cpo(&mut self, field: CpoField, value: i64) -> u32 {
        self.document.cpo.set(field, value);
        self.document.cpo.total
    }

    /// Set one ceo count; the total is rederived before this returns.
    pub fn set_ceo(&mut self, field: CeoField, value: i64) -> u32 {
        self.document.ceo.set(field, value);
        self.document.ceo.total
    }

    /// The opaque JSON blob the external form/storage layer persists.
    pub fn document_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(&self.document)?)
    }

    /// The chart sub-map alone, for callers that store it as its own field.
    pub fn chart_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string(&self.document.chart)?)
    }

    /// Replace only the chart, keeping the score tables.
    pub fn load_chart_json(&mut self, json: &str) -> Result<(), SessionError> {
        let mut chart: Chart = serde_json::from_str(json)?;
        let dropped = chart.retain_catalog();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped persisted chart entries outside the catalog");
        }
        self.document.chart = chart;
        Ok(())
    }

    /// Replace the session's document from a persisted blob. Entries
    /// outside the dentition catalog are dropped (and logged), never fatal.
    pub fn load_document_json(&mut self, json: &str) -> Result<(), SessionError> {
        let mut document: ChartDocument = serde_json::from_str(json)?;
        let dropped = document.chart.retain_catalog();
        if dropped > 0 {
            tracing::warn!(dropped, "dropped persisted chart entries outside the catalog");
        }
        self.document = document;
        Ok(())
    }
}
