use crate::protocol::ViewState;

/// An open document: a display name plus the engine-assigned model URI.
///
/// A `Document` only ever exists with a URI - construction happens after
/// the engine confirms model creation, so a half-created document is never
/// observable - and the URI is immutable from then on.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    uri: String,
    language: String,
    view_state: Option<ViewState>,
}

impl Document {
    pub(crate) fn new(name: impl Into<String>, uri: String, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri,
            language: language.into(),
            view_state: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The view state captured the last time this document stopped being
    /// active. `None` for a document that has never been active.
    pub fn view_state(&self) -> Option<&ViewState> {
        self.view_state.as_ref()
    }

    pub(crate) fn set_view_state(&mut self, state: Option<ViewState>) {
        self.view_state = state;
    }
}
