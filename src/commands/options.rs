//! Read-only flag, glyph margin, and the full configuration snapshot.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::Result;
use crate::protocol::EditorConfig;

pub struct OptionCommands {
    context: BridgeContext,
}

impl OptionCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// The slice of the engine configuration the bridge models.
    pub async fn configuration(&self) -> Result<EditorConfig> {
        let raw = self.context.execute(&Command::GetConfiguration).await?;
        codec::decode(&raw)
    }

    pub async fn set_read_only(&self, read_only: bool) -> Result<()> {
        self.context.run(&Command::SetReadOnly { read_only }).await
    }

    pub async fn set_glyph_margin(&self, visible: bool) -> Result<()> {
        self.context.run(&Command::SetGlyphMargin { visible }).await
    }
}
