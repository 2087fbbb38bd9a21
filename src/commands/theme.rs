//! Editor color theme.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::Result;
use crate::protocol::Theme;

pub struct ThemeCommands {
    context: BridgeContext,
}

impl ThemeCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    pub async fn get(&self) -> Result<Theme> {
        let raw = self.context.execute(&Command::GetTheme).await?;
        let id: String = codec::decode(&raw)?;
        Ok(Theme::from_engine_id(&id))
    }

    pub async fn set(&self, theme: &Theme) -> Result<()> {
        self.context
            .run(&Command::SetTheme {
                id: theme.engine_id().to_string(),
            })
            .await
    }

    pub async fn set_dark(&self) -> Result<()> {
        self.set(&Theme::Dark).await
    }

    pub async fn set_light(&self) -> Result<()> {
        self.set(&Theme::Light).await
    }
}
