//! Line-number display mode.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::Result;
use crate::protocol::LineNumbers;

pub struct LineNumberCommands {
    context: BridgeContext,
}

impl LineNumberCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// The engine's current mode. Out-of-set values decode to
    /// [`LineNumbers::Unrecognized`] with an anomaly report; use
    /// [`LineNumbers::as_bool`] for the safe two-valued view.
    pub async fn get(&self) -> Result<LineNumbers> {
        let raw = self.context.execute(&Command::GetLineNumbers).await?;
        codec::decode(&raw)
    }

    pub async fn set(&self, visible: bool) -> Result<()> {
        self.context
            .run(&Command::SetLineNumbers {
                mode: LineNumbers::from(visible),
            })
            .await
    }
}
