//! Floor-plan layout editor
//!
//! `geometry` and `arrange` are pure arithmetic, `state` holds the canvas
//! model, and `controller` runs the server round-trips around it.

pub mod arrange;
pub mod controller;
pub mod geometry;
pub mod state;

pub use arrange::{DEFAULT_COLUMNS, arrange};
pub use controller::{ActionOutcome, EditorStore, LayoutEditor};
pub use geometry::{CanvasBounds, GridSettings, Point, place_tile, snap_to_grid};
pub use state::{DragState, EditorState};
