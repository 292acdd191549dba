//! # GridVis I/O
//!
//! JSON readers and writers for layout templates (tier keys `"1"`..`"8"`
//! next to a `data.anchor` block) and for the renderer's text metrics.

pub mod error;
pub mod settings;
pub mod template;

pub use error::LoadError;
pub use settings::{load_config, read_config, save_config};
pub use template::{load_template, parse_template, read_template, save_template, template_to_json};
