//! Kestrel - a typed command bridge for an embedded script-driven editor
//!
//! The editor engine (a Monaco-style component hosted in a web view) is an
//! opaque box that accepts script text and returns serialized results. This
//! crate sits between it and the native application:
//!
//! - `bridge` - the typed command schema, script rendering, argument codec,
//!   and the channel that drives the engine
//! - `commands` - command groups (text, font, theme, line numbers, options,
//!   raw script) built over the channel
//! - `editor` - the document registry, active-document coordination with
//!   view-state persistence, and the top-level [`Editor`] facade
//! - `overlay` - named decoration and style collections layered onto the
//!   rendered editor surface
//!
//! The embedding application implements [`ScriptHost`] over its web view and
//! hands it to [`Editor::from_host`]; everything else goes through typed
//! calls.

pub mod bridge;
pub mod commands;
pub mod editor;
pub mod error;
pub mod overlay;
pub mod protocol;
pub mod report;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::{EngineCommands, ScriptChannel, ScriptHost};
pub use editor::{ActiveDocumentChange, Document, Editor};
pub use error::{BridgeError, Result};
pub use protocol::{
    Decoration, DecorationOptions, EditTracking, EditorConfig, LineNumbers, Position, Range,
    Stickiness, StyleRule, Theme, ViewState,
};
