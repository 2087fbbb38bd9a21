//! The active-document state machine.
//!
//! At most one document is attached to the editor instance. Switching is
//! order-sensitive: the outgoing document's view state is captured before
//! the engine model changes, and the incoming document's stored state is
//! reapplied after - reversing either half loses state or applies stale
//! state.
//!
//! Every completed transition is broadcast as an [`ActiveDocumentChange`].
//! The engine drops decoration collections on every model change, so
//! subscribers that layer decorations re-create them in response to this
//! notification (see [`DecorationOverlay`](crate::overlay::DecorationOverlay));
//! the bridge never re-creates them implicitly.

use tokio::sync::broadcast;

use super::DocumentRegistry;
use crate::commands::{ModelCommands, ViewCommands};
use crate::error::Result;

/// Emitted after the engine has switched models and any stored view state
/// has been reapplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocumentChange {
    pub previous: Option<String>,
    pub current: Option<String>,
}

pub(crate) struct ActiveDocumentCoordinator {
    active: Option<String>,
    changes: broadcast::Sender<ActiveDocumentChange>,
}

impl ActiveDocumentCoordinator {
    pub(crate) fn new() -> Self {
        let (changes, _) = broadcast::channel(16);
        Self {
            active: None,
            changes,
        }
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<ActiveDocumentChange> {
        self.changes.subscribe()
    }

    /// Make `uri` the active document.
    ///
    /// Save-outgoing, switch, restore-incoming, in that order, each awaited
    /// before the next. Re-selecting the already-active document is a
    /// no-op. A document that has never been active gets no restore call.
    pub(crate) async fn select(
        &mut self,
        registry: &mut DocumentRegistry,
        models: &ModelCommands,
        view: &ViewCommands,
        uri: &str,
    ) -> Result<()> {
        registry.get(uri)?;
        if self.active.as_deref() == Some(uri) {
            return Ok(());
        }

        if let Some(outgoing) = self.active.clone() {
            let state = view.save().await?;
            if let Ok(doc) = registry.get_mut(&outgoing) {
                doc.set_view_state(state);
            }
        }

        models.set_active(Some(uri)).await?;
        // The engine has switched: record it now, so a restore failure
        // below cannot leave later saves attributed to the old document.
        let previous = self.active.replace(uri.to_string());

        if let Some(state) = registry.get(uri)?.view_state().cloned() {
            view.restore(&state).await?;
        }

        self.emit(previous, Some(uri.to_string()));
        Ok(())
    }

    /// Detach the engine model and transition to no-active-document.
    pub(crate) async fn clear(&mut self, models: &ModelCommands) -> Result<()> {
        models.set_active(None).await?;
        if let Some(previous) = self.active.take() {
            self.emit(Some(previous), None);
        }
        Ok(())
    }

    /// The active document was deleted. The engine detaches a disposed
    /// model itself, so only the local state transitions.
    pub(crate) fn note_closed(&mut self, uri: &str) {
        if self.active.as_deref() == Some(uri) {
            let previous = self.active.take();
            self.emit(previous, None);
        }
    }

    fn emit(&self, previous: Option<String>, current: Option<String>) {
        // Nobody listening is fine.
        let _ = self.changes.send(ActiveDocumentChange { previous, current });
    }
}
