#![deny(missing_docs)]

//! # Scalar Mapping
//!
//! Fixed table from host primitive shapes to TypeScript primitive spellings.
//! Anything unrecognized degrades to `any` rather than failing.

use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The recognized primitive shapes of the host data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarType {
    /// Textual data.
    Text,
    /// Integral numbers.
    Integer,
    /// Floating point numbers.
    Real,
    /// Booleans.
    Boolean,
    /// The null / none unit value.
    Null,
    /// Explicitly untyped data.
    Any,
    /// A list with no declared element type.
    UntypedList,
    /// A map with no declared key/value types.
    UntypedMap,
}

impl ScalarType {
    /// The TypeScript spelling for this scalar.
    pub fn spelling(&self) -> &'static str {
        match self {
            ScalarType::Text => "string",
            ScalarType::Integer => "number",
            ScalarType::Real => "number",
            ScalarType::Boolean => "boolean",
            ScalarType::Null => "null",
            ScalarType::Any => "any",
            ScalarType::UntypedList => "Array<any>",
            ScalarType::UntypedMap => "Record<string, any>",
        }
    }

    /// Maps a loose host spelling to a scalar, falling back to `Any`.
    ///
    /// Accepts both the canonical camelCase names and common host-side
    /// aliases (`str`, `int`, `float`, `bool`, `none`, `dict`, ...).
    pub fn from_name(name: &str) -> ScalarType {
        match name.to_ascii_lowercase().as_str() {
            "text" | "str" | "string" => ScalarType::Text,
            "integer" | "int" => ScalarType::Integer,
            "real" | "float" | "double" | "number" => ScalarType::Real,
            "boolean" | "bool" => ScalarType::Boolean,
            "null" | "none" => ScalarType::Null,
            "any" => ScalarType::Any,
            "untypedlist" | "untyped_list" | "list" => ScalarType::UntypedList,
            "untypedmap" | "untyped_map" | "dict" | "map" => ScalarType::UntypedMap,
            _ => ScalarType::Any,
        }
    }
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spelling())
    }
}

/// Deserializes via [`ScalarType::from_name`] so JSON-declared models get
/// the same unrecognized-shape fallback as everything else.
impl<'de> Deserialize<'de> for ScalarType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        if name.is_empty() {
            return Err(D::Error::custom("scalar name must not be empty"));
        }
        Ok(ScalarType::from_name(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_table() {
        let cases = vec![
            (ScalarType::Text, "string"),
            (ScalarType::Integer, "number"),
            (ScalarType::Real, "number"),
            (ScalarType::Boolean, "boolean"),
            (ScalarType::Null, "null"),
            (ScalarType::Any, "any"),
            (ScalarType::UntypedList, "Array<any>"),
            (ScalarType::UntypedMap, "Record<string, any>"),
        ];

        for (scalar, expected) in cases {
            assert_eq!(scalar.spelling(), expected);
            assert_eq!(format!("{}", scalar), expected);
        }
    }

    #[test]
    fn test_from_name_aliases() {
        assert_eq!(ScalarType::from_name("str"), ScalarType::Text);
        assert_eq!(ScalarType::from_name("int"), ScalarType::Integer);
        assert_eq!(ScalarType::from_name("Float"), ScalarType::Real);
        assert_eq!(ScalarType::from_name("none"), ScalarType::Null);
        assert_eq!(ScalarType::from_name("dict"), ScalarType::UntypedMap);
    }

    #[test]
    fn test_from_name_fallback() {
        // Unrecognized shapes degrade, they never fail
        assert_eq!(ScalarType::from_name("complex128"), ScalarType::Any);
        assert_eq!(ScalarType::from_name("Widget"), ScalarType::Any);
    }

    #[test]
    fn test_deserialize_loose() {
        let s: ScalarType = serde_json::from_str("\"int\"").unwrap();
        assert_eq!(s, ScalarType::Integer);

        let unknown: ScalarType = serde_json::from_str("\"mystery\"").unwrap();
        assert_eq!(unknown, ScalarType::Any);

        assert!(serde_json::from_str::<ScalarType>("\"\"").is_err());
    }
}
