//! Wire types for the todo API.
//!
//! The JSON field for the record text is `todo`, so the Rust field is renamed
//! to `text` to avoid `todo.todo` at every call site.

use std::fmt;

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

/// A single todo record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    #[serde(rename = "todo")]
    pub text: String,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Request payload for create and update.
///
/// Decoding is structural only:
/// - a `null` payload, a missing `todo` field and `"todo": null` all leave the
///   text empty;
/// - a repeated `todo` key takes the last non-null value;
/// - the key matches `todo` ignoring ASCII case;
/// - `id` and any other field are ignored.
///
/// Anything that is neither an object nor `null` is an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoInput {
    pub text: String,
}

impl<'de> Deserialize<'de> for TodoInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TodoInputVisitor)
    }
}

struct TodoInputVisitor;

impl<'de> Visitor<'de> for TodoInputVisitor {
    type Value = TodoInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a todo object or null")
    }

    fn visit_unit<E>(self) -> Result<TodoInput, E> {
        Ok(TodoInput::default())
    }

    fn visit_none<E>(self) -> Result<TodoInput, E> {
        Ok(TodoInput::default())
    }

    fn visit_map<A>(self, mut map: A) -> Result<TodoInput, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = TodoInput::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("todo") {
                // null leaves whatever an earlier key set
                if let Some(text) = map.next_value::<Option<String>>()? {
                    input.text = text;
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(input)
    }
}

/// Query string accepted by `GET /todo`.
#[derive(Debug, Default)]
pub struct ListParams {
    pub reverse: Option<String>,
}

impl ListParams {
    /// Build from decoded query pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            reverse: pairs
                .iter()
                .find(|(key, _)| key == "reverse")
                .map(|(_, value)| value.clone()),
        }
    }

    /// Only the exact value `true` reverses the listing.
    pub fn is_reversed(&self) -> bool {
        self.reverse.as_deref() == Some("true")
    }
}
