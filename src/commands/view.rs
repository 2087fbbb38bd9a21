//! Save/restore of the attached model's view state.
//!
//! Crate-internal: sequencing around model switches is owned by the
//! active-document coordinator, and calling these out of order is exactly
//! the bug that loses cursor and scroll positions.

use super::BridgeContext;
use crate::bridge::Command;
use crate::bridge::codec;
use crate::error::Result;
use crate::protocol::ViewState;

pub(crate) struct ViewCommands {
    context: BridgeContext,
}

impl ViewCommands {
    pub(crate) fn new(context: BridgeContext) -> Self {
        Self { context }
    }

    /// Capture the view state of the currently attached model. `None` when
    /// no model is attached.
    pub(crate) async fn save(&self) -> Result<Option<ViewState>> {
        let raw = self.context.execute(&Command::SaveViewState).await?;
        if codec::is_null(&raw) {
            return Ok(None);
        }
        let blob: serde_json::Value = codec::decode(&raw)?;
        Ok(Some(ViewState::from(blob)))
    }

    /// Reapply a previously captured blob, verbatim.
    pub(crate) async fn restore(&self, state: &ViewState) -> Result<()> {
        self.context
            .run(&Command::RestoreViewState {
                state: state.clone(),
            })
            .await
    }
}
