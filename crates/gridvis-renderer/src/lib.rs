//! # GridVis Renderer
//!
//! Composes overlays (info panels, tables, bar graphs, cost heat-maps,
//! connected road networks, layout previews) out of the primitive calls a
//! host [`gridvis_core::Canvas`] accepts.
//!
//! [`RecordingCanvas`] is a complete in-memory host: it keeps every draw
//! call as a JSON-serializable [`DrawCommand`] and implements the road
//! connect-pass.

pub mod overlays;
pub mod panels;
pub mod recording;
pub mod renderer;

pub use overlays::HeatmapOptions;
pub use panels::{column_widths, BarGraph, PanelContent, Progress};
pub use recording::{DrawCommand, RecordedCommand, RecordingCanvas, RecordingSurface};
pub use renderer::Renderer;
