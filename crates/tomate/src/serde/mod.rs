//! Serde support for compiled patterns
//!
//! A `CompiledPattern` is serialized as its source text and deserialized by
//! compiling that text again. `MatchResult` and `Span` derive their impls.

use ::serde::de::{self, Deserialize, Deserializer};
use ::serde::ser::{Serialize, Serializer};

use crate::pattern::{CompiledPattern, compile};

impl Serialize for CompiledPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

impl<'de> Deserialize<'de> for CompiledPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        compile(&source).map_err(de::Error::custom)
    }
}

/// Compile a pattern from a JSON string literal
pub fn pattern_from_json_str(json: &str) -> Result<CompiledPattern, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Serialize any match result or pattern to a JSON string
pub fn to_json_string<T: Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| e.to_string())
}
