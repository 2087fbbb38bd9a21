//! Document text operations.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::Result;
use crate::protocol::{EditTracking, Position, Range};

/// Text operations address engine models by URI directly, without
/// consulting the document registry. A URI the engine no longer knows
/// (a closed document, say) therefore surfaces as the engine's own
/// failure, [`BridgeError::Engine`](crate::error::BridgeError::Engine);
/// [`InvalidDocumentReference`](crate::error::BridgeError::InvalidDocumentReference)
/// is produced by the registry-mediated paths on
/// [`Editor`](crate::editor::Editor).
pub struct TextCommands {
    context: BridgeContext,
    tracking: EditTracking,
}

impl TextCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self {
            context,
            tracking: EditTracking::default(),
        }
    }

    /// Whether inserts contribute a stop to the engine's undo history.
    /// Defaults to [`EditTracking::Untracked`].
    pub fn set_tracking(&mut self, tracking: EditTracking) {
        self.tracking = tracking;
    }

    pub fn tracking(&self) -> EditTracking {
        self.tracking
    }

    pub async fn get(&self, uri: &str) -> Result<String> {
        let raw = self
            .context
            .execute(&Command::GetText {
                uri: uri.to_string(),
            })
            .await?;
        codec::decode(&raw)
    }

    pub async fn set(&self, uri: &str, text: &str) -> Result<()> {
        self.context
            .run(&Command::SetText {
                uri: uri.to_string(),
                text: text.to_string(),
            })
            .await
    }

    /// The position immediately following the last character.
    pub async fn eof_position(&self, uri: &str) -> Result<Position> {
        let raw = self
            .context
            .execute(&Command::EofPosition {
                uri: uri.to_string(),
            })
            .await?;
        codec::decode(&raw)
    }

    /// Replace `range` with `text` as a single edit operation.
    pub async fn insert(&self, uri: &str, text: &str, range: Range) -> Result<()> {
        self.context
            .run(&Command::Insert {
                uri: uri.to_string(),
                text: text.to_string(),
                range,
                tracking: self.tracking,
            })
            .await
    }

    /// Insert at the position immediately following the last character.
    pub async fn append(&self, uri: &str, text: &str) -> Result<()> {
        let eof = self.eof_position(uri).await?;
        self.insert(uri, text, Range::collapsed(eof)).await
    }

    /// Insert at the start of the document.
    pub async fn prepend(&self, uri: &str, text: &str) -> Result<()> {
        self.insert(uri, text, Range::default()).await
    }
}
