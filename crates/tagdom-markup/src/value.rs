//! Interpolated value kinds and their transformation rules.
//!
//! Every value that can appear in a template is classified into one of the
//! [`Value`] kinds at the call boundary (via `From` conversions or explicit
//! constructors) and then transformed by an exhaustive match. There is no
//! dynamic inspection past that point and no failure path: shapes without a
//! dedicated rule fall back to generic JSON serialization.

use crate::escape::{escape_attribute_value, escape_text};
use crate::markup::Markup;

/// An interpolated template value, classified by kind.
///
/// Dispatch priority is fixed by the match order in [`Value::transform`]:
/// live-node kinds first, then trusted markup, then the refined type rules.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Raw text. Escaped for text context when transformed.
    Text(String),
    /// Markup already known to be safe. Emitted verbatim, never re-escaped.
    Safe(Markup),
    /// A list of values, transformed member-wise and concatenated with no
    /// separator. Enables lists of strings or of nested templates.
    List(Vec<Value>),
    /// An attribute map, rendered as space-joined `key="escaped-value"`
    /// pairs in insertion order.
    AttrMap(Vec<(String, String)>),
    /// The serialized outer markup of a live DOM node. Trusted verbatim;
    /// the serialization is produced by the DOM adapter, not by a caller.
    Element(String),
    /// An ordered collection of live DOM nodes (for example a query
    /// result), transformed member-wise and concatenated.
    NodeCollection(Vec<Value>),
    /// An absent value. Renders as the empty string.
    Empty,
    /// Anything else: numbers, booleans, null, and unrecognized shapes.
    /// Stringified via generic JSON serialization.
    Other(serde_json::Value),
}

impl Value {
    /// Build an attribute-map value from key/value pairs.
    ///
    /// Pair order is preserved through to the rendered output.
    pub fn attrs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::AttrMap(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Transform this value into its string representation.
    ///
    /// This is the single dispatch point for all interpolation: escape,
    /// join, stringify, or pass through unescaped, depending on the kind.
    #[must_use]
    pub fn transform(&self) -> String {
        match self {
            // A live node's serialized markup is trusted as-is.
            Self::Element(html) => html.clone(),
            // Collections and lists concatenate with no separator.
            Self::NodeCollection(members) | Self::List(members) => {
                members.iter().map(Self::transform).collect()
            }
            Self::Safe(markup) => markup.as_str().to_string(),
            Self::Text(text) => escape_text(text),
            Self::AttrMap(pairs) => pairs
                .iter()
                .map(|(key, value)| format!("{key}=\"{}\"", escape_attribute_value(value)))
                .collect::<Vec<_>>()
                .join(" "),
            Self::Empty => String::new(),
            // Numbers and booleans take their literal form, null renders as
            // the text "null", unrecognized shapes as their JSON
            // serialization. No further escaping is applied to this output.
            Self::Other(json) => json.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<Markup> for Value {
    fn from(markup: Markup) -> Self {
        Self::Safe(markup)
    }
}

impl From<&Markup> for Value {
    fn from(markup: &Markup) -> Self {
        Self::Safe(markup.clone())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Other(serde_json::Value::from(flag))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::Other(json)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(members: Vec<T>) -> Self {
        Self::List(members.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Self::Other(serde_json::Value::from(number))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_is_exhaustive_over_every_kind() {
        assert_eq!(Value::from("<x>").transform(), "&lt;x&gt;");
        assert_eq!(Value::from(Markup::trusted("<x>")).transform(), "<x>");
        assert_eq!(Value::from(vec!["a", "b"]).transform(), "ab");
        assert_eq!(Value::attrs([("id", "a")]).transform(), "id=\"a\"");
        assert_eq!(Value::Element("<br>".to_string()).transform(), "<br>");
        assert_eq!(Value::from(Option::<&str>::None).transform(), "");
        assert_eq!(Value::from(serde_json::Value::Null).transform(), "null");
        assert_eq!(Value::from(10).transform(), "10");
    }
}
