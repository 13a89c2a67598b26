// SPDX-License-Identifier: MPL-2.0
//! Translation bundles fetched from the backend.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Nested key-to-string mapping for one display language.
///
/// Keys are addressed with dots: `actions.moreInfo` walks the `actions`
/// object and reads its `moreInfo` entry. A bundle is always replaced as a
/// whole when the language changes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle(Map<String, Value>);

impl TranslationBundle {
    /// Creates an empty bundle (every lookup misses).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a dotted key.
    ///
    /// Returns `None` when a path segment is absent, when the path ends on a
    /// nested object instead of a string, or when the string is empty.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut value = self.0.get(segments.next()?)?;
        for segment in segments {
            value = value.as_object()?.get(segment)?;
        }
        value.as_str().filter(|s| !s.is_empty())
    }

    /// Returns `true` if the bundle has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Value> for TranslationBundle {
    type Error = Value;

    /// Only JSON objects are bundles; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
