use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::BridgeError;

/// Line-number display mode, as reported by the engine.
///
/// The engine's configuration key is a closed two-valued set from the
/// bridge's point of view, but the engine may in principle report modes
/// outside it (relative numbering, custom render functions). Those decode
/// to [`LineNumbers::Unrecognized`] carrying the raw value instead of
/// failing, so an engine-side behavior change is representable rather than
/// asserted away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineNumbers {
    On,
    Off,
    /// A value outside the recognized set, kept verbatim.
    Unrecognized(String),
}

impl LineNumbers {
    /// Lenient conversion from the engine's raw value. Out-of-set values
    /// are reported as an anomaly and carried, never dropped.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "on" => Self::On,
            "off" => Self::Off,
            other => {
                tracing::warn!(value = other, "unrecognized lineNumbers mode from engine");
                Self::Unrecognized(other.to_string())
            }
        }
    }

    /// Safe-default mapping: anything that is not `on` displays as off.
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::On)
    }

    /// Strict accessor for callers that want an out-of-set value to be a
    /// hard failure instead of the `false` fallback.
    pub fn known(&self) -> Result<bool, BridgeError> {
        match self {
            Self::On => Ok(true),
            Self::Off => Ok(false),
            Self::Unrecognized(raw) => Err(BridgeError::UnknownEnumerationValue {
                field: "lineNumbers",
                value: raw.clone(),
            }),
        }
    }

    pub fn as_engine_value(&self) -> &str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<bool> for LineNumbers {
    fn from(enabled: bool) -> Self {
        if enabled { Self::On } else { Self::Off }
    }
}

impl Default for LineNumbers {
    /// The engine ships with line numbers on.
    fn default() -> Self {
        Self::On
    }
}

impl Serialize for LineNumbers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_engine_value())
    }
}

impl<'de> Deserialize<'de> for LineNumbers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // The engine reports this key as a string; anything else is still
        // carried as unrecognized rather than failing the whole decode.
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some(raw) => Self::from_raw(raw),
            None => {
                tracing::warn!(?value, "non-string lineNumbers mode from engine");
                Self::Unrecognized(value.to_string())
            }
        })
    }
}

/// Editor color theme. The engine ships a light and a dark theme; anything
/// else is addressed by its registered id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    Custom(String),
}

impl Theme {
    pub fn engine_id(&self) -> &str {
        match self {
            Self::Light => "vs",
            Self::Dark => "vs-dark",
            Self::Custom(id) => id,
        }
    }

    pub fn from_engine_id(id: &str) -> Self {
        match id {
            "vs" => Self::Light,
            "vs-dark" => Self::Dark,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// Whether bridge-issued edits contribute a stop to the engine's undo
/// history. `Untracked` keeps programmatic inserts out of the user's
/// undo/redo expectations and is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTracking {
    Tracked,
    #[default]
    Untracked,
}

/// The slice of the engine configuration the bridge models. Unknown keys in
/// the engine's (much larger) configuration object are ignored on decode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub line_numbers: LineNumbers,
    pub read_only: bool,
    pub glyph_margin: bool,
}
