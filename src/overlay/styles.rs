//! Named style-sheet collections.
//!
//! Style collections are independent of document switches but are
//! engine-owned: anything not deleted leaks an engine-side style sheet for
//! the lifetime of the engine instance, which is why
//! [`Editor::shutdown`](crate::editor::Editor::shutdown) calls
//! [`StyleOverlay::delete_all`].

use std::collections::BTreeSet;

use crate::bridge::Command;
use crate::commands::BridgeContext;
use crate::error::Result;
use crate::protocol::StyleRule;

pub struct StyleOverlay {
    context: BridgeContext,
    collections: BTreeSet<String>,
}

impl StyleOverlay {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self {
            context,
            collections: BTreeSet::new(),
        }
    }

    pub async fn create_collection(&mut self, name: &str) -> Result<()> {
        self.context
            .run(&Command::CreateStyleCollection {
                name: name.to_string(),
            })
            .await?;
        self.collections.insert(name.to_string());
        Ok(())
    }

    /// Add one CSS rule to a collection, creating the collection first if
    /// needed.
    pub async fn create_rule(&mut self, collection: &str, rule: StyleRule) -> Result<()> {
        if !self.collections.contains(collection) {
            self.create_collection(collection).await?;
        }
        self.context
            .run(&Command::CreateStyleRule {
                collection: collection.to_string(),
                rule,
            })
            .await
    }

    /// Remove every rule from a collection without deleting it.
    pub async fn clear_collection(&mut self, name: &str) -> Result<()> {
        self.context
            .run(&Command::ClearStyleCollection {
                name: name.to_string(),
            })
            .await
    }

    /// Delete a collection and its engine-side style sheet.
    pub async fn delete_collection(&mut self, name: &str) -> Result<()> {
        self.context
            .run(&Command::DeleteStyleCollection {
                name: name.to_string(),
            })
            .await?;
        self.collections.remove(name);
        Ok(())
    }

    /// Delete every collection. Shutdown cleanup.
    pub async fn delete_all(&mut self) -> Result<()> {
        self.context.run(&Command::DeleteAllStyleCollections).await?;
        self.collections.clear();
        Ok(())
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.iter().map(String::as_str)
    }
}
