#![deny(missing_docs)]

//! # Type Descriptors
//!
//! The static schema consumed by the generator. Descriptors are built once
//! from the host model's declarations (or loaded from JSON); the renderer
//! never inspects live host objects.

use crate::error::GenResult;
use crate::scalar::ScalarType;
use serde::{Deserialize, Serialize};

/// A single field of a record: name plus declared type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared by the host model.
    pub name: String,
    /// Declared field type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl FieldDescriptor {
    /// Creates a field from a name and type.
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        FieldDescriptor {
            name: name.into(),
            ty,
        }
    }
}

/// A named record type with ordered fields.
///
/// `type_params` lists the declared type-parameter names for generic
/// records; it is empty for plain records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDescriptor {
    /// Declared record name.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Declared type-parameter names, empty for non-generic records.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
}

impl RecordDescriptor {
    /// Creates a non-generic record with the given fields.
    pub fn new(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        RecordDescriptor {
            name: name.into(),
            fields,
            type_params: Vec::new(),
        }
    }

    /// Creates a generic record with declared type parameters.
    pub fn generic(
        name: impl Into<String>,
        type_params: Vec<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        RecordDescriptor {
            name: name.into(),
            fields,
            type_params,
        }
    }
}

/// The tagged union of type shapes the generator understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeDescriptor {
    /// A primitive shape, mapped through the scalar table.
    Scalar(ScalarType),
    /// A named record.
    Record(RecordDescriptor),
    /// A list of a single element type. Composes recursively.
    Collection(Box<TypeDescriptor>),
    /// A value that may be null; semantically `inner | null`.
    Optional(Box<TypeDescriptor>),
    /// Ordered alternatives; order is visible in the output.
    Union(Vec<TypeDescriptor>),
    /// A generic record bound to concrete argument types.
    GenericInstance {
        /// The generic origin record.
        origin: RecordDescriptor,
        /// Concrete arguments, positionally matching `origin.type_params`.
        args: Vec<TypeDescriptor>,
    },
    /// An unbound placeholder; only valid inside a generic record's own
    /// field declarations.
    GenericParameter(String),
}

impl TypeDescriptor {
    /// Shorthand for a record type.
    pub fn record(record: RecordDescriptor) -> Self {
        TypeDescriptor::Record(record)
    }

    /// Shorthand for a list of `element`.
    pub fn list(element: TypeDescriptor) -> Self {
        TypeDescriptor::Collection(Box::new(element))
    }

    /// Shorthand for `inner | null`.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Optional(Box::new(inner))
    }

    /// Shorthand for a generic instantiation.
    pub fn instance(origin: RecordDescriptor, args: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::GenericInstance { origin, args }
    }
}

/// Loads a batch of type descriptors from a JSON array.
///
/// Scalar spellings in the JSON follow the loose-name fallback of
/// [`ScalarType::from_name`]; structural errors in the document itself are
/// reported, not degraded.
pub fn load_batch(json: &str) -> GenResult<Vec<TypeDescriptor>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_model_loading() {
        // A model declared in JSON: { id: string, tags: string[] | null }
        let json = r#"
        {
            "name": "Item",
            "fields": [
                { "name": "id", "type": { "scalar": "str" } },
                {
                    "name": "tags",
                    "type": { "optional": { "collection": { "scalar": "text" } } }
                }
            ]
        }
        "#;

        let record: RecordDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Item");
        assert!(record.type_params.is_empty());
        assert_eq!(record.fields[0].ty, TypeDescriptor::Scalar(ScalarType::Text));
        assert_eq!(
            record.fields[1].ty,
            TypeDescriptor::optional(TypeDescriptor::list(TypeDescriptor::Scalar(
                ScalarType::Text
            )))
        );
    }

    #[test]
    fn test_serialize_field_type_key() {
        let field = FieldDescriptor::new("id", TypeDescriptor::Scalar(ScalarType::Integer));
        let json = serde_json::to_value(&field).unwrap();
        // The wire key is `type`, not the Rust field name `ty`
        assert_eq!(json["type"]["scalar"], "integer");
    }

    #[test]
    fn test_load_batch_reports_structural_errors() {
        let err = load_batch("{ not a batch").unwrap_err();
        assert!(matches!(err, crate::error::GenError::Model(_)));
    }

    #[test]
    fn test_generic_declaration() {
        let record = RecordDescriptor::generic(
            "Envelope",
            vec!["T".into()],
            vec![FieldDescriptor::new(
                "payload",
                TypeDescriptor::GenericParameter("T".into()),
            )],
        );
        assert_eq!(record.type_params, vec!["T".to_string()]);
    }
}
