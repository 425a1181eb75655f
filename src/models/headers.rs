//! Ordered header multimap.
//!
//! Headers are kept as an ordered list of name-to-values entries so that
//! serialized records preserve the order the messages carried. Lookup is
//! case-sensitive and exact; the history stores what it observed without
//! normalizing.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// An ordered multimap of header names to value lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    /// Creates an empty header collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under a header name, appending to an existing entry.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(entry, _)| *entry == name) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// The values recorded under a header name, if any.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns true if a header with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(entry, _)| entry == name)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no headers are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Extracts headers from untyped JSON, dropping what does not fit.
    ///
    /// A string value becomes a single-value entry. An array value is
    /// filtered to its string elements and dropped entirely when none
    /// remain. Values of any other type are dropped silently; extraction
    /// never fails.
    pub fn extract(value: &Value) -> Self {
        let mut headers = Self::new();

        let Some(object) = value.as_object() else {
            return headers;
        };

        for (name, value) in object {
            match value {
                Value::String(value) => {
                    headers.entries.push((name.clone(), vec![value.clone()]));
                }
                Value::Array(values) => {
                    let strings: Vec<String> = values
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect();
                    if !strings.is_empty() {
                        headers.entries.push((name.clone(), strings));
                    }
                }
                _ => {}
            }
        }

        headers
    }
}

impl Serialize for Headers {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, values) in &self.entries {
            map.serialize_entry(name, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of header names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut object = Map::new();
                while let Some((name, value)) = access.next_entry::<String, Value>()? {
                    object.insert(name, value);
                }
                Ok(Headers::extract(&Value::Object(object)))
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}
