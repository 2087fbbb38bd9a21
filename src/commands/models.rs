//! Engine-side model lifecycle.
//!
//! Crate-internal: only the document registry and the active-document
//! coordinator may create, dispose, or attach models. Everyone else
//! references documents by URI through the registry.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::{BridgeError, Result};

pub(crate) struct ModelCommands {
    context: BridgeContext,
}

impl ModelCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Create an engine-side model and return its engine-assigned URI.
    ///
    /// An engine that is not fully ready historically answered with a null
    /// or empty identifier instead of failing; that silent mode is mapped
    /// to a loud [`BridgeError::EngineNotReady`] here.
    pub(crate) async fn create(&self, content: &str, language: &str) -> Result<String> {
        let raw = self
            .context
            .execute(&Command::CreateModel {
                content: content.to_string(),
                language: language.to_string(),
            })
            .await?;
        if codec::is_null(&raw) {
            return Err(BridgeError::EngineNotReady);
        }
        let uri: String = codec::decode(&raw)?;
        if uri.is_empty() {
            return Err(BridgeError::EngineNotReady);
        }
        Ok(uri)
    }

    pub(crate) async fn dispose(&self, uri: &str) -> Result<()> {
        self.context
            .run(&Command::DisposeModel {
                uri: uri.to_string(),
            })
            .await
    }

    /// Attach a model to the editor instance, or detach with `None`.
    pub(crate) async fn set_active(&self, uri: Option<&str>) -> Result<()> {
        self.context
            .run(&Command::SetActiveModel {
                uri: uri.map(str::to_string),
            })
            .await
    }

    /// URIs of every model the engine currently holds, in engine order.
    pub(crate) async fn ids(&self) -> Result<Vec<String>> {
        let raw = self.context.execute(&Command::ModelIds).await?;
        codec::decode(&raw)
    }
}
