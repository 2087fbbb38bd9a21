use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use super::Range;

/// How a decorated range grows when text is typed at its edges.
///
/// Crosses the boundary as the engine's numeric enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stickiness {
    #[default]
    AlwaysGrowsWhenTypingAtEdges,
    NeverGrowsWhenTypingAtEdges,
    GrowsOnlyWhenTypingBefore,
    GrowsOnlyWhenTypingAfter,
}

impl Stickiness {
    fn as_engine_value(self) -> u8 {
        match self {
            Self::AlwaysGrowsWhenTypingAtEdges => 0,
            Self::NeverGrowsWhenTypingAtEdges => 1,
            Self::GrowsOnlyWhenTypingBefore => 2,
            Self::GrowsOnlyWhenTypingAfter => 3,
        }
    }
}

impl Serialize for Stickiness {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_engine_value())
    }
}

impl<'de> Deserialize<'de> for Stickiness {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Self::AlwaysGrowsWhenTypingAtEdges),
            1 => Ok(Self::NeverGrowsWhenTypingAtEdges),
            2 => Ok(Self::GrowsOnlyWhenTypingBefore),
            3 => Ok(Self::GrowsOnlyWhenTypingAfter),
            other => Err(de::Error::custom(format!(
                "unknown stickiness value {other}"
            ))),
        }
    }
}

/// Rendering options for one decoration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecorationOptions {
    /// Class applied in the glyph margin next to the decorated lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_margin_class_name: Option<String>,
    /// Class applied to the line-number cell of the decorated lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number_class_name: Option<String>,
    /// Class applied to the decorated text itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_class_name: Option<String>,
    /// Markdown shown when hovering the decorated range.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "markdown::serialize",
        deserialize_with = "markdown::deserialize"
    )]
    pub hover_message: Option<String>,
    pub stickiness: Stickiness,
}

/// The engine expects hover markdown wrapped as `{ "value": ... }`.
mod markdown {
    use serde::de::Deserializer;
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Serializer};

    pub fn serialize<S: Serializer>(
        message: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("MarkdownString", 1)?;
        record.serialize_field("value", message.as_deref().unwrap_or_default())?;
        record.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        #[derive(Deserialize)]
        struct MarkdownString {
            value: String,
        }
        Ok(Option::<MarkdownString>::deserialize(deserializer)?.map(|m| m.value))
    }
}

/// A visual annotation anchored to a range within a document.
///
/// Decorations live in named, engine-owned collections and do not survive
/// an active-document switch; see
/// [`DecorationOverlay`](crate::overlay::DecorationOverlay).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decoration {
    pub range: Range,
    pub options: DecorationOptions,
}

impl Decoration {
    pub fn new(range: Range, options: DecorationOptions) -> Self {
        Self { range, options }
    }
}

/// One CSS rule inside a named style collection: selector class name plus a
/// property/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    pub class_name: String,
    pub property: String,
    pub value: String,
}

impl StyleRule {
    pub fn new(
        class_name: impl Into<String>,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            property: property.into(),
            value: value.into(),
        }
    }

    /// The rule as CSS text, ready for the engine-side style sheet.
    pub fn css_text(&self) -> String {
        format!(".{} {{ {}: {}; }}", self.class_name, self.property, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_serialize_with_engine_key_names() {
        let options = DecorationOptions {
            glyph_margin_class_name: Some("warning-glyph".to_string()),
            hover_message: Some("**careful**".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["glyphMarginClassName"], "warning-glyph");
        assert_eq!(json["hoverMessage"]["value"], "**careful**");
        assert_eq!(json["stickiness"], 0);
        assert!(json.get("inlineClassName").is_none());
    }

    #[test]
    fn stickiness_round_trips_numeric_values() {
        let json = serde_json::to_string(&Stickiness::GrowsOnlyWhenTypingAfter).unwrap();
        assert_eq!(json, "3");
        let back: Stickiness = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stickiness::GrowsOnlyWhenTypingAfter);
    }

    #[test]
    fn style_rule_renders_css_text() {
        let rule = StyleRule::new("match-highlight", "background-color", "#705020");
        assert_eq!(
            rule.css_text(),
            ".match-highlight { background-color: #705020; }"
        );
    }
}
