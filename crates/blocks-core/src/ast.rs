//! Strapi block tree
//!
//! This module defines the nodes of the CMS rich-text block format as it
//! arrives over the wire. Every node is tagged by its JSON `type` field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A top-level rich-text block
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentNode {
    /// Heading with an unclamped level
    Heading {
        level: u32,
        #[serde(default, deserialize_with = "lenient_seq")]
        children: Vec<InlineChild>,
    },

    /// Paragraph containing text and links
    Paragraph {
        #[serde(default, deserialize_with = "lenient_seq")]
        children: Vec<InlineChild>,
    },

    /// List (ordered or unordered)
    List {
        #[serde(default)]
        format: ListFormat,
        #[serde(default, rename = "children", deserialize_with = "lenient_seq")]
        items: Vec<ListItem>,
    },

    /// Image; its children are carried but never rendered
    Image {
        image: ImageData,
        #[serde(default, deserialize_with = "lenient_seq")]
        children: Vec<TextChild>,
    },

    /// Block quote
    Quote {
        #[serde(default, deserialize_with = "lenient_seq")]
        children: Vec<InlineChild>,
    },

    /// Link; only rendered when it appears inside a paragraph
    Link(LinkNode),

    /// Any block type this crate does not know about
    #[serde(other)]
    Unknown,
}

impl ContentNode {
    /// Decode a single block, falling back to [`ContentNode::Unknown`] when
    /// the value does not match any known shape.
    pub fn from_value(value: &Value) -> Self {
        ContentNode::deserialize(value).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "undecodable block, rendering as empty");
            ContentNode::Unknown
        })
    }
}

/// Decode a JSON block array element by element.
///
/// A malformed element only drops itself; a value that is not an array
/// yields no blocks at all.
pub fn parse_blocks(value: &Value) -> Vec<ContentNode> {
    match value.as_array() {
        Some(items) => items.iter().map(ContentNode::from_value).collect(),
        None => {
            tracing::debug!("block payload is not an array");
            Vec::new()
        }
    }
}

/// List numbering style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ListFormat {
    Ordered,
    /// Anything that is not `"ordered"`, including `null`
    #[default]
    Unordered,
}

impl From<Value> for ListFormat {
    fn from(format: Value) -> Self {
        if format.as_str() == Some("ordered") {
            ListFormat::Ordered
        } else {
            ListFormat::Unordered
        }
    }
}

/// A list entry (`"list-item"` on the wire)
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ListItem {
    #[serde(default, deserialize_with = "lenient_seq")]
    pub children: Vec<InlineChild>,
}

impl ListItem {
    pub fn new(children: Vec<InlineChild>) -> Self {
        Self { children }
    }
}

/// Image descriptor as delivered by the media library
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alternative_text: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A run of text with its formatting flags
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bold: bool,
}

/// A hyperlink wrapping text runs
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct LinkNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_seq")]
    pub children: Vec<TextChild>,
}

/// Child of a link or image: text only, so links never nest
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum TextChild {
    Text(TextNode),
    #[serde(other)]
    #[default]
    Unknown,
}

impl TextChild {
    /// Plain, unformatted text
    pub fn plain(text: impl Into<String>) -> Self {
        TextChild::Text(TextNode {
            text: text.into(),
            bold: false,
        })
    }

    /// Bold text
    pub fn bold(text: impl Into<String>) -> Self {
        TextChild::Text(TextNode {
            text: text.into(),
            bold: true,
        })
    }
}

/// Child of a paragraph, heading, list item or quote: text or a link
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InlineChild {
    Text(TextNode),
    Link(LinkNode),
    #[serde(other)]
    #[default]
    Unknown,
}

impl InlineChild {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineChild::Text(TextNode {
            text: text.into(),
            bold: false,
        })
    }

    pub fn bold(text: impl Into<String>) -> Self {
        InlineChild::Text(TextNode {
            text: text.into(),
            bold: true,
        })
    }

    pub fn link(url: impl Into<String>, children: Vec<TextChild>) -> Self {
        InlineChild::Link(LinkNode {
            url: url.into(),
            children,
        })
    }
}

// The CMS sends `null` for unset optional strings and flags.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Children decode one by one: a bad element becomes `T::default()` and a
// non-array value becomes an empty sequence, leaving the parent intact.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::debug!(value = %other, "children are not an array");
            return Ok(Vec::new());
        }
    };

    Ok(items
        .iter()
        .map(|item| {
            T::deserialize(item).unwrap_or_else(|err| {
                tracing::debug!(error = %err, "undecodable child, rendering as empty");
                T::default()
            })
        })
        .collect())
}
