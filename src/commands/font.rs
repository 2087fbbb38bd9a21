//! Font configuration.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::Result;

pub struct FontCommands {
    context: BridgeContext,
}

impl FontCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    pub async fn size(&self) -> Result<u32> {
        let raw = self.context.execute(&Command::GetFontSize).await?;
        codec::decode(&raw)
    }

    pub async fn set_size(&self, size: u32) -> Result<()> {
        self.context.run(&Command::SetFontSize { size }).await
    }

    pub async fn family(&self) -> Result<String> {
        let raw = self.context.execute(&Command::GetFontFamily).await?;
        codec::decode(&raw)
    }

    pub async fn set_family(&self, family: &str) -> Result<()> {
        self.context
            .run(&Command::SetFontFamily {
                family: family.to_string(),
            })
            .await
    }
}
