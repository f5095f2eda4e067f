//! odonta-session
//!
//! The interactive backend: an editing session owning one chart document.
//! Pointer events come in, are resolved by the engine's hit-test inverter,
//! and mutate the chart (click-to-cycle surfaces, condition toggling,
//! score-table entry with eager total recomputation). Rendering goes out
//! as a serialized display list the desktop canvas replays verbatim, so the
//! frontend never re-derives any geometry.

pub mod error;
pub mod scene;
pub mod session;

pub use error::SessionError;
pub use scene::{DisplayList, DrawCommand, ScenePainter};
pub use session::{ChartSession, Tool};
