//! Raw script execution: the diagnostic escape hatch.
//!
//! No argument encoding is applied; the caller is fully responsible for the
//! script's well-formedness.

use super::BridgeContext;
use crate::bridge::Command;
use crate::error::Result;

pub struct ScriptCommands {
    context: BridgeContext,
}

impl ScriptCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Execute `script` and return the engine's raw serialized result.
    pub async fn eval(&self, script: &str) -> Result<String> {
        self.context
            .execute(&Command::Raw {
                script: script.to_string(),
            })
            .await
    }

    /// Execute `script`, discarding any result.
    pub async fn run(&self, script: &str) -> Result<()> {
        self.context
            .run(&Command::Raw {
                script: script.to_string(),
            })
            .await
    }
}
