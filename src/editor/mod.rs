//! Open documents, the registry that owns them, active-document
//! coordination with view-state persistence, and the top-level [`Editor`]
//! facade the embedding application talks to.

mod active;
mod document;
mod editor;
mod registry;

pub use active::ActiveDocumentChange;
pub(crate) use active::ActiveDocumentCoordinator;
pub use document::Document;
pub use editor::Editor;
pub(crate) use registry::DocumentRegistry;
