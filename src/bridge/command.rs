//! The fixed request schema of the bridge.
//!
//! One variant per operation the bridge can ask of the engine. Command
//! groups construct these; only [`script`](super::script) knows how each
//! variant becomes engine script text. Test doubles implement
//! [`EngineCommands`](super::EngineCommands) directly against this schema
//! and never see generated script.

use crate::protocol::{Decoration, EditTracking, LineNumbers, Range, StyleRule, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Model lifecycle. Only the document registry and the active-document
    // coordinator issue these.
    CreateModel {
        content: String,
        language: String,
    },
    DisposeModel {
        uri: String,
    },
    SetActiveModel {
        uri: Option<String>,
    },
    ModelIds,

    // Text.
    GetText {
        uri: String,
    },
    SetText {
        uri: String,
        text: String,
    },
    EofPosition {
        uri: String,
    },
    Insert {
        uri: String,
        text: String,
        range: Range,
        tracking: EditTracking,
    },

    // View state of the currently attached model.
    SaveViewState,
    RestoreViewState {
        state: ViewState,
    },

    // Configuration.
    GetConfiguration,
    GetFontSize,
    SetFontSize {
        size: u32,
    },
    GetFontFamily,
    SetFontFamily {
        family: String,
    },
    GetLineNumbers,
    SetLineNumbers {
        mode: LineNumbers,
    },
    SetReadOnly {
        read_only: bool,
    },
    SetGlyphMargin {
        visible: bool,
    },

    // Theme.
    GetTheme,
    SetTheme {
        id: String,
    },

    // Named decoration collections. Only the decoration overlay issues
    // these.
    CreateDecorationCollection {
        name: String,
    },
    ClearDecorationCollection {
        name: String,
    },
    AppendDecorations {
        name: String,
        decorations: Vec<Decoration>,
    },

    // Named style collections. Only the style overlay issues these.
    CreateStyleCollection {
        name: String,
    },
    CreateStyleRule {
        collection: String,
        rule: StyleRule,
    },
    ClearStyleCollection {
        name: String,
    },
    DeleteStyleCollection {
        name: String,
    },
    DeleteAllStyleCollections,

    /// Escape hatch: an arbitrary script executed verbatim, no argument
    /// encoding. The caller owns well-formedness.
    Raw {
        script: String,
    },
}
