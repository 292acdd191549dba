//! # GridVis Core
//!
//! Data model for grid overlays: grid positions and anchors, the all-optional
//! style record, the heat ramp, the 50×50 cost grid, placement maps and tiered
//! layout templates, plus the `Canvas`/`Surface` traits a host implements to
//! receive primitive draw calls.

pub mod color;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod style;
pub mod surface;

pub use color::{rgb_to_hex, Color};
pub use config::RenderConfig;
pub use geometry::{Anchor, Coord, GridPos, Point, RegionName};
pub use grid::{CostGrid, CostLookup, GridError, GRID_SIZE};
pub use layout::{LayoutTemplate, PlacementMap, Tier, TierLayout, ROAD};
pub use style::{Align, DashStyle, Style};
pub use surface::{Canvas, Surface};
