//! Command groups: cohesive sets of typed operations over one engine
//! concern each, all built from a shared [`BridgeContext`].
//!
//! The context is handed to every group at construction by the root
//! [`Editor`](crate::editor::Editor) - there is no ambient or static
//! engine handle anywhere.

use std::sync::Arc;

use crate::bridge::{Command, EngineCommands};
use crate::error::Result;

mod font;
mod line_numbers;
mod models;
mod options;
mod raw;
mod text;
mod theme;
mod view;

pub use font::FontCommands;
pub use line_numbers::LineNumberCommands;
pub(crate) use models::ModelCommands;
pub use options::OptionCommands;
pub use raw::ScriptCommands;
pub use text::TextCommands;
pub use theme::ThemeCommands;
pub(crate) use view::ViewCommands;

/// Shared handle onto the engine channel. Cheap to clone; one per command
/// group.
#[derive(Clone)]
pub struct BridgeContext {
    engine: Arc<dyn EngineCommands>,
}

impl BridgeContext {
    pub fn new(engine: Arc<dyn EngineCommands>) -> Self {
        Self { engine }
    }

    pub(crate) async fn execute(&self, command: &Command) -> Result<String> {
        self.engine.execute(command).await
    }

    pub(crate) async fn run(&self, command: &Command) -> Result<()> {
        self.engine.run(command).await
    }
}
