//! The execution channel into the embedded engine.
//!
//! Two seams live here. [`ScriptHost`] is what the embedding application
//! implements over its web view: initialize the engine, evaluate script
//! text, return the serialized result. [`EngineCommands`] is what the rest
//! of the crate consumes: execute a typed [`Command`]. [`ScriptChannel`]
//! connects the two, guaranteeing the engine is initialized exactly once
//! before the first evaluation.
//!
//! The channel does not serialize unrelated concurrent calls; callers that
//! need ordering (view-state save before model switch, engine disposal
//! before registry removal) await each call before issuing the next. No
//! cancellation and no timeout: a call runs to completion or to an engine
//! error.

use futures::future::BoxFuture;
use tokio::sync::OnceCell;

use super::command::Command;
use super::script;
use crate::error::Result;

/// The embedding application's side of the bridge: a handle onto the web
/// view (or whatever process hosts the engine).
pub trait ScriptHost: Send + Sync {
    /// Bring the engine up. Called lazily, awaited to completion exactly
    /// once for the lifetime of the channel; must be safe to call on an
    /// already-running engine.
    fn initialize(&self) -> BoxFuture<'_, Result<()>>;

    /// Evaluate script text in the engine and return the raw serialized
    /// result (`"null"` for statements without a value).
    fn eval<'a>(&'a self, script: &'a str) -> BoxFuture<'a, Result<String>>;
}

/// Typed command execution. The seam the command groups are built on and
/// the one test doubles implement.
pub trait EngineCommands: Send + Sync {
    /// Execute a command and return the engine's raw serialized result.
    fn execute<'a>(&'a self, command: &'a Command) -> BoxFuture<'a, Result<String>>;

    /// Fire-and-forget variant: the result, if any, is discarded.
    fn run<'a>(&'a self, command: &'a Command) -> BoxFuture<'a, Result<()>> {
        Box::pin(async move {
            self.execute(command).await?;
            Ok(())
        })
    }
}

/// The production [`EngineCommands`]: renders commands to script and drives
/// them through a [`ScriptHost`].
pub struct ScriptChannel<H> {
    host: H,
    ready: OnceCell<()>,
}

impl<H: ScriptHost> ScriptChannel<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            ready: OnceCell::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    /// Idempotent readiness check preceding every call. The first caller
    /// awaits the host's initialization; everyone after that passes
    /// straight through.
    async fn ensure_ready(&self) -> Result<()> {
        self.ready
            .get_or_try_init(|| self.host.initialize())
            .await?;
        Ok(())
    }
}

impl<H: ScriptHost> EngineCommands for ScriptChannel<H> {
    fn execute<'a>(&'a self, command: &'a Command) -> BoxFuture<'a, Result<String>> {
        Box::pin(async move {
            self.ensure_ready().await?;
            let script = script::render(command)?;
            tracing::debug!(script, "engine script");
            let raw = self.host.eval(&script).await?;
            tracing::trace!(result = raw, "engine result");
            Ok(raw)
        })
    }
}
