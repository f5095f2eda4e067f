//! The display list: the engine's primitives captured as data.
//!
//! `ScenePainter` is the interactive backend's [`Painter`]; it records each
//! primitive call in emit order. The frontend canvas replays the list
//! top-to-bottom, which preserves the renderer's z-order contract (fills
//! under chrome under overlays) across the serialization boundary.

use kurbo::{Circle, Point, Rect};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use odonta_chart::paint::Painter;
use odonta_chart::palette::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "op", rename_all = "snake_case")]
#[ts(export)]
pub enum DrawCommand {
    FillPolygon {
        points: Vec<[f64; 2]>,
        color: Color,
    },
    StrokeRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        stroke_width: f64,
    },
    StrokeCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        stroke_width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        stroke_width: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        size: f64,
        color: Color,
    },
}

/// One frame's worth of primitives plus the canvas extent they assume.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayList {
    pub width: f64,
    pub height: f64,
    pub commands: Vec<DrawCommand>,
}

/// Records primitive calls into a [`DisplayList`].
#[derive(Debug, Default)]
pub struct ScenePainter {
    list: DisplayList,
}

impl ScenePainter {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            list: DisplayList {
                width,
                height,
                commands: Vec::new(),
            },
        }
    }

    pub fn finish(self) -> DisplayList {
        self.list
    }
}

impl Painter for ScenePainter {
    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.list.commands.push(DrawCommand::FillPolygon {
            points: points.iter().map(|p| [p.x, p.y]).collect(),
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.list.commands.push(DrawCommand::StrokeRect {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
            color,
            stroke_width: width,
        });
    }

    fn stroke_circle(&mut self, circle: Circle, color: Color, width: f64) {
        self.list.commands.push(DrawCommand::StrokeCircle {
            cx: circle.center.x,
            cy: circle.center.y,
            radius: circle.radius,
            color,
            stroke_width: width,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f64) {
        self.list.commands.push(DrawCommand::Line {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
            color,
            stroke_width: width,
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, size: f64, color: Color) {
        self.list.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: anchor.x,
            y: anchor.y,
            size,
            color,
        });
    }
}
