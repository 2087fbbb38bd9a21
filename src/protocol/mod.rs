//! Typed values that cross the bridge boundary.
//!
//! Everything here serializes with lower-camel-case keys in both directions,
//! matching the engine's own conventions.

mod decoration;
mod options;
mod types;

pub use decoration::{Decoration, DecorationOptions, Stickiness, StyleRule};
pub use options::{EditTracking, EditorConfig, LineNumbers, Theme};
pub use types::{Position, Range, ViewState};
