// src/model/text.rs
//! The v3 rich-text wire format.
//!
//! Text is an array of spans, each span `[text]` or `[text, decorations]`.
//! A decoration is itself an array: `["b"]`, `["a", "https://…"]`,
//! `["h", "red_background"]`, `["‣", [["u", user-id]]]`.

use serde::de::{Error as DeError, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A run of styled text, as stored in `properties.title` and friends.
pub type RichText = Vec<TextSpan>;

/// One run of text plus the decorations applied to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextSpan {
    pub text: String,
    pub decorations: Vec<Decoration>,
}

impl TextSpan {
    /// A span with no decorations.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            decorations: Vec::new(),
        }
    }
}

/// A single inline decoration.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    Bold,
    Italic,
    Strikethrough,
    Code,
    /// `["a", url]`
    Link(String),
    /// `["h", color-or-background-name]`
    Highlight(String),
    /// `["‣", target]` — inline user/page mention, payload kept verbatim.
    Mention(Value),
    /// A decoration tag this client does not recognize, kept verbatim.
    Other(Vec<Value>),
}

impl Serialize for TextSpan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = if self.decorations.is_empty() { 1 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.text)?;
        if !self.decorations.is_empty() {
            seq.serialize_element(&self.decorations)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for TextSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpanVisitor;

        impl<'de> Visitor<'de> for SpanVisitor {
            type Value = TextSpan;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a rich text span: [text] or [text, decorations]")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let text = seq
                    .next_element::<String>()?
                    .ok_or_else(|| A::Error::invalid_length(0, &self))?;
                let decorations = seq
                    .next_element::<Vec<Decoration>>()?
                    .unwrap_or_default();
                Ok(TextSpan { text, decorations })
            }
        }

        deserializer.deserialize_seq(SpanVisitor)
    }
}

impl Serialize for Decoration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        fn tagged<S: Serializer>(
            serializer: S,
            tag: &str,
            arg: Option<&Value>,
        ) -> Result<S::Ok, S::Error> {
            let len = if arg.is_some() { 2 } else { 1 };
            let mut seq = serializer.serialize_seq(Some(len))?;
            seq.serialize_element(tag)?;
            if let Some(arg) = arg {
                seq.serialize_element(arg)?;
            }
            seq.end()
        }

        match self {
            Decoration::Bold => tagged(serializer, "b", None),
            Decoration::Italic => tagged(serializer, "i", None),
            Decoration::Strikethrough => tagged(serializer, "s", None),
            Decoration::Code => tagged(serializer, "c", None),
            Decoration::Link(url) => tagged(serializer, "a", Some(&Value::from(url.as_str()))),
            Decoration::Highlight(color) => {
                tagged(serializer, "h", Some(&Value::from(color.as_str())))
            }
            Decoration::Mention(target) => tagged(serializer, "\u{2023}", Some(target)),
            Decoration::Other(parts) => parts.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Decoration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = Vec::<Value>::deserialize(deserializer)?;
        let tag = parts.first().and_then(Value::as_str).unwrap_or_default();
        let arg = parts.get(1);
        Ok(match (tag, arg) {
            ("b", _) => Decoration::Bold,
            ("i", _) => Decoration::Italic,
            ("s", _) => Decoration::Strikethrough,
            ("c", _) => Decoration::Code,
            ("a", Some(url)) => Decoration::Link(url.as_str().unwrap_or_default().to_string()),
            ("h", Some(color)) => {
                Decoration::Highlight(color.as_str().unwrap_or_default().to_string())
            }
            ("\u{2023}", Some(target)) => Decoration::Mention(target.clone()),
            _ => Decoration::Other(parts),
        })
    }
}

/// Concatenates the plain text of a rich-text run, ignoring decorations.
pub fn plain_text(spans: &[TextSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_wire_spans() {
        let spans: RichText = serde_json::from_value(json!([
            ["Hello ", [["b"], ["a", "https://example.com"]]],
            ["world"]
        ]))
        .unwrap();

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Hello ");
        assert_eq!(
            spans[0].decorations,
            vec![
                Decoration::Bold,
                Decoration::Link("https://example.com".to_string())
            ]
        );
        assert_eq!(spans[1], TextSpan::plain("world"));
        assert_eq!(plain_text(&spans), "Hello world");
    }

    #[test]
    fn test_unknown_decorations_survive_round_trips() {
        let wire = json!([["x", [["z9", {"weird": true}]]]]);
        let spans: RichText = serde_json::from_value(wire.clone()).unwrap();
        assert!(matches!(spans[0].decorations[0], Decoration::Other(_)));
        assert_eq!(serde_json::to_value(&spans).unwrap(), wire);
    }

    #[test]
    fn test_plain_span_serializes_without_decoration_slot() {
        let wire = serde_json::to_value(vec![TextSpan::plain("Done")]).unwrap();
        assert_eq!(wire, json!([["Done"]]));
    }
}
