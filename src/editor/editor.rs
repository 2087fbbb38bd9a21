//! The top-level bridge facade.

use std::sync::Arc;

use tokio::sync::broadcast;

use super::{ActiveDocumentChange, ActiveDocumentCoordinator, Document, DocumentRegistry};
use crate::bridge::{EngineCommands, ScriptChannel, ScriptHost};
use crate::commands::{
    BridgeContext, FontCommands, LineNumberCommands, ModelCommands, OptionCommands,
    ScriptCommands, TextCommands, ThemeCommands, ViewCommands,
};
use crate::error::Result;
use crate::overlay::{DecorationOverlay, StyleOverlay};

/// The embedded editor, seen from the native application.
///
/// Owns the registry of open documents, the active-document coordinator,
/// the command groups, and the overlay managers - one root component, one
/// execution context driving the bridge. Document lifecycle and selection
/// go through the methods here; everything else through the group
/// accessors.
pub struct Editor {
    text: TextCommands,
    font: FontCommands,
    theme: ThemeCommands,
    line_numbers: LineNumberCommands,
    options: OptionCommands,
    script: ScriptCommands,
    models: ModelCommands,
    view: ViewCommands,
    decorations: DecorationOverlay,
    styles: StyleOverlay,
    registry: DocumentRegistry,
    active: ActiveDocumentCoordinator,
}

impl Editor {
    pub fn new(engine: Arc<dyn EngineCommands>) -> Self {
        let context = BridgeContext::new(engine);
        Self {
            text: TextCommands::new(context.clone()),
            font: FontCommands::new(context.clone()),
            theme: ThemeCommands::new(context.clone()),
            line_numbers: LineNumberCommands::new(context.clone()),
            options: OptionCommands::new(context.clone()),
            script: ScriptCommands::new(context.clone()),
            models: ModelCommands::new(context.clone()),
            view: ViewCommands::new(context.clone()),
            decorations: DecorationOverlay::new(context.clone()),
            styles: StyleOverlay::new(context),
            registry: DocumentRegistry::new(),
            active: ActiveDocumentCoordinator::new(),
        }
    }

    /// Wire the bridge onto the embedding application's engine view.
    pub fn from_host<H: ScriptHost + 'static>(host: H) -> Self {
        Self::new(Arc::new(ScriptChannel::new(host)))
    }

    // Command groups.

    pub fn text(&self) -> &TextCommands {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut TextCommands {
        &mut self.text
    }

    pub fn font(&self) -> &FontCommands {
        &self.font
    }

    pub fn theme(&self) -> &ThemeCommands {
        &self.theme
    }

    pub fn line_numbers(&self) -> &LineNumberCommands {
        &self.line_numbers
    }

    pub fn options(&self) -> &OptionCommands {
        &self.options
    }

    /// The raw-script escape hatch.
    pub fn script(&self) -> &ScriptCommands {
        &self.script
    }

    pub fn decorations(&mut self) -> &mut DecorationOverlay {
        &mut self.decorations
    }

    pub fn styles(&mut self) -> &mut StyleOverlay {
        &mut self.styles
    }

    // Documents.

    /// Create a document: the engine model first, the registry entry only
    /// once the engine has confirmed and assigned a URI.
    pub async fn create_document(
        &mut self,
        name: &str,
        content: &str,
        language: &str,
    ) -> Result<&Document> {
        let uri = self.models.create(content, language).await?;
        if let Err(rejected) = self
            .registry
            .insert(Document::new(name, uri.clone(), language))
        {
            // The model exists engine-side but will never be reachable
            // through the registry; dispose it rather than leak it.
            if let Err(dispose) = self.models.dispose(&uri).await {
                tracing::warn!(uri, error = %dispose, "failed to dispose unregistered model");
            }
            return Err(rejected);
        }
        tracing::debug!(name, uri, "document created");
        self.registry.get(&uri)
    }

    /// Close a document. The engine model is disposed before the registry
    /// entry goes away, so no entry ever points at a disposed model.
    pub async fn close_document(&mut self, uri: &str) -> Result<()> {
        self.registry.get(uri)?;
        self.models.dispose(uri).await?;
        self.registry.remove(uri)?;
        self.active.note_closed(uri);
        tracing::debug!(uri, "document closed");
        Ok(())
    }

    /// Make `uri` the active document, persisting the outgoing document's
    /// view state and restoring the incoming one's.
    pub async fn select_document(&mut self, uri: &str) -> Result<()> {
        self.active
            .select(&mut self.registry, &self.models, &self.view, uri)
            .await
    }

    /// Detach whatever document is active.
    pub async fn clear_active(&mut self) -> Result<()> {
        self.active.clear(&self.models).await
    }

    pub fn documents(&self) -> &[Document] {
        self.registry.documents()
    }

    pub fn document(&self, uri: &str) -> Result<&Document> {
        self.registry.get(uri)
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.active
            .current()
            .and_then(|uri| self.registry.get(uri).ok())
    }

    /// Notifications for every completed active-document transition.
    /// Subscribers that keep decorations visible re-create them from here.
    pub fn subscribe(&self) -> broadcast::Receiver<ActiveDocumentChange> {
        self.active.subscribe()
    }

    /// URIs of every model the engine currently holds; registry order and
    /// engine order match when the two are in sync.
    pub async fn engine_model_ids(&self) -> Result<Vec<String>> {
        self.models.ids().await
    }

    /// Close every document and delete all engine-side style collections.
    /// Closing the active document implicitly detaches it.
    pub async fn shutdown(&mut self) -> Result<()> {
        while let Some(uri) = self.registry.first_uri() {
            self.close_document(&uri).await?;
        }
        self.styles.delete_all().await?;
        tracing::debug!("bridge shut down");
        Ok(())
    }
}
