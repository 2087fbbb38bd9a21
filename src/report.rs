//! Last-resort failure presentation for the embedding application.
//!
//! The host's top-level handler funnels every unhandled failure through
//! here: cancellation signals are swallowed, everything else is reduced to
//! its innermost cause for the user while the full chain goes to the log.

use std::error::Error;

use crate::error::BridgeError;

/// Walk to the innermost cause of an error chain.
pub fn innermost<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current
}

/// True when the chain contains a cooperative-cancellation marker.
pub fn is_cancellation(err: &(dyn Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if matches!(e.downcast_ref::<BridgeError>(), Some(BridgeError::Cancelled)) {
            return true;
        }
        current = e.source();
    }
    false
}

/// Produce the user-facing message for an unhandled failure, or `None` when
/// the failure is a cancellation and should be swallowed silently.
pub fn describe(err: &(dyn Error + 'static)) -> Option<String> {
    if is_cancellation(err) {
        return None;
    }

    let mut chain = Vec::new();
    let mut current = Some(err);
    while let Some(e) = current {
        chain.push(e.to_string());
        current = e.source();
    }
    tracing::debug!(chain = ?chain, "unhandled failure");

    Some(innermost(err).to_string())
}
