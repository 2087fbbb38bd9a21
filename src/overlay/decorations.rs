//! Named decoration collections.
//!
//! The engine clears decoration collections implicitly whenever the active
//! document changes. Persistence across a switch is therefore an explicit
//! caller responsibility: subscribe to the editor's
//! [`ActiveDocumentChange`](crate::editor::ActiveDocumentChange)
//! notifications and call [`DecorationOverlay::rebuild_all`] when one
//! arrives. The overlay keeps a local mirror of everything appended so the
//! rebuild needs no caller-side bookkeeping.

use std::collections::BTreeMap;

use crate::bridge::Command;
use crate::commands::BridgeContext;
use crate::error::Result;
use crate::protocol::Decoration;

pub struct DecorationOverlay {
    context: BridgeContext,
    /// Local mirror of each collection's intended contents.
    collections: BTreeMap<String, Vec<Decoration>>,
}

impl DecorationOverlay {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self {
            context,
            collections: BTreeMap::new(),
        }
    }

    /// Create (or reset) the named collection, engine-side and locally.
    /// The collection is empty afterwards regardless of prior contents.
    pub async fn create_collection(&mut self, name: &str) -> Result<()> {
        self.context
            .run(&Command::CreateDecorationCollection {
                name: name.to_string(),
            })
            .await?;
        self.collections.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Empty the named collection without deleting it.
    pub async fn clear_collection(&mut self, name: &str) -> Result<()> {
        self.context
            .run(&Command::ClearDecorationCollection {
                name: name.to_string(),
            })
            .await?;
        if let Some(contents) = self.collections.get_mut(name) {
            contents.clear();
        }
        Ok(())
    }

    /// Append decorations to the named collection, creating it first if it
    /// does not exist yet.
    pub async fn append(&mut self, name: &str, decorations: Vec<Decoration>) -> Result<()> {
        if !self.collections.contains_key(name) {
            self.create_collection(name).await?;
        }
        self.context
            .run(&Command::AppendDecorations {
                name: name.to_string(),
                decorations: decorations.clone(),
            })
            .await?;
        self.collections
            .get_mut(name)
            .expect("collection was just created")
            .extend(decorations);
        Ok(())
    }

    /// The locally mirrored contents of a collection.
    pub fn contents(&self, name: &str) -> Option<&[Decoration]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    /// Re-create every collection engine-side from the local mirror. The
    /// subscriber reaction to an active-document change.
    pub async fn rebuild_all(&self) -> Result<()> {
        for (name, decorations) in &self.collections {
            self.context
                .run(&Command::CreateDecorationCollection { name: name.clone() })
                .await?;
            if !decorations.is_empty() {
                self.context
                    .run(&Command::AppendDecorations {
                        name: name.clone(),
                        decorations: decorations.clone(),
                    })
                    .await?;
            }
        }
        Ok(())
    }
}
