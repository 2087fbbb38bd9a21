use serde::{Deserialize, Serialize};

/// A (line, column) pair, 1-based on both axes.
///
/// 1-based indexing matches the embedded engine's convention and must be
/// preserved exactly; an off-by-one here corrupts displayed selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub line_number: u64,
    pub column: u64,
}

impl Position {
    pub fn new(line_number: u64, column: u64) -> Self {
        Self {
            line_number,
            column,
        }
    }
}

impl Default for Position {
    /// Start of the document.
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A 1-based text range. Defaults to a zero-width range at (1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Range {
    pub start_line_number: u64,
    pub start_column: u64,
    pub end_line_number: u64,
    pub end_column: u64,
}

impl Range {
    pub fn new(
        start_line_number: u64,
        start_column: u64,
        end_line_number: u64,
        end_column: u64,
    ) -> Self {
        Self {
            start_line_number,
            start_column,
            end_line_number,
            end_column,
        }
    }

    /// A zero-width range collapsed onto `position`. Used for insertions:
    /// a collapsed range at EOF appends, a collapsed default range prepends.
    pub fn collapsed(position: Position) -> Self {
        Self {
            start_line_number: position.line_number,
            start_column: position.column,
            end_line_number: position.line_number,
            end_column: position.column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_line_number == self.end_line_number && self.start_column == self.end_column
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::collapsed(Position::default())
    }
}

impl From<Position> for Range {
    fn from(position: Position) -> Self {
        Self::collapsed(position)
    }
}

/// An opaque engine-produced snapshot of cursor/scroll/fold state for one
/// document. Captured when a document stops being active and re-submitted
/// verbatim when it becomes active again; never inspected by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewState(pub(crate) serde_json::Value);

impl ViewState {
    pub fn into_raw(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for ViewState {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
