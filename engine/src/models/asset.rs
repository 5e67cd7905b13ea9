//! Asset identifiers produced by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a pre-rendered scenery image.
///
/// Identifiers are the file stems of the rendered asset set (for
/// example `A_spring_day` or `incity_night_cyan`). The engine only
/// produces them; the presentation layer owns the lookup and the
/// fallback policy for missing files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
