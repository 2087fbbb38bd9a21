//! Bridge failure taxonomy.
//!
//! Script execution against a stateful engine is not safely idempotent, so
//! nothing here is retried automatically; every failure surfaces to the
//! caller of the operation that produced it.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    /// An operation was issued before the embedded engine confirmed
    /// readiness. Historically this surfaced as a silently invalid model
    /// identifier; it is now a loud failure.
    #[error("editor engine is not ready")]
    EngineNotReady,

    /// The engine's raw result could not be decoded into the expected
    /// shape. Indicates engine/bridge version skew, never coerced silently.
    #[error("could not decode engine result as {expected}: {raw:?}")]
    ProtocolMismatch {
        expected: &'static str,
        raw: String,
        #[source]
        source: serde_json::Error,
    },

    /// The engine reported a value outside a closed enumeration. Only
    /// raised by strict accessors; lenient decoding represents the value
    /// instead (see [`LineNumbers::Unrecognized`]).
    ///
    /// [`LineNumbers::Unrecognized`]: crate::protocol::LineNumbers::Unrecognized
    #[error("unrecognized {field} value reported by engine: {value:?}")]
    UnknownEnumerationValue { field: &'static str, value: String },

    /// An operation referenced a document whose URI is unknown to the
    /// registry or already disposed.
    #[error("no open document with uri {uri:?}")]
    InvalidDocumentReference { uri: String },

    /// The engine handed out a URI the registry already holds.
    #[error("document uri {uri:?} is already registered")]
    DuplicateDocument { uri: String },

    /// A typed argument could not be encoded as a script literal.
    #[error("could not encode script argument")]
    Encode(#[source] serde_json::Error),

    /// The script host failed to evaluate a script (engine crash, detached
    /// web view, script exception).
    #[error("engine call failed: {0}")]
    Engine(String),

    /// Cooperative cancellation. Treated as a non-error by the top-level
    /// reporting path (see [`crate::report`]).
    #[error("operation cancelled")]
    Cancelled,
}
