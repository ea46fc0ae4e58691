use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single tab. Compared by value, never by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabValue(String);

impl TabValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabValue {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TabValue {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TabValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
