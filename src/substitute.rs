#![deny(missing_docs)]

//! # Generic Substitution
//!
//! Builds explicit parameter bindings for generic instantiations and
//! rewrites field types against them. The binding lives only for one
//! substitution pass; it is never persisted.

use crate::descriptor::{FieldDescriptor, RecordDescriptor, TypeDescriptor};
use crate::error::{GenError, GenResult};
use crate::naming::synthesized_name;
use std::collections::HashMap;

/// One instantiation's parameter-name -> concrete-type mapping.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    entries: HashMap<String, TypeDescriptor>,
}

impl Binding {
    /// Looks up the concrete type bound to a parameter name.
    pub fn get(&self, param: &str) -> Option<&TypeDescriptor> {
        self.entries.get(param)
    }
}

/// Pairs a generic origin's declared parameters with concrete arguments.
///
/// Fails with [`GenError::ArityMismatch`] when the counts differ; a binding
/// is never built partially.
pub fn bind(origin: &RecordDescriptor, args: &[TypeDescriptor]) -> GenResult<Binding> {
    if origin.type_params.len() != args.len() {
        return Err(GenError::ArityMismatch {
            origin: origin.name.clone(),
            expected: origin.type_params.len(),
            found: args.len(),
        });
    }

    let entries = origin
        .type_params
        .iter()
        .cloned()
        .zip(args.iter().cloned())
        .collect();
    Ok(Binding { entries })
}

/// Structure-preserving rewrite of a type against a binding.
///
/// Bound `GenericParameter`s are replaced by their concrete types; compound
/// shapes recurse with the same binding; all other shapes (records
/// included) pass through unchanged.
pub fn substitute(ty: &TypeDescriptor, binding: &Binding) -> TypeDescriptor {
    match ty {
        TypeDescriptor::GenericParameter(param) => match binding.get(param) {
            Some(concrete) => concrete.clone(),
            None => ty.clone(),
        },
        TypeDescriptor::Collection(element) => {
            TypeDescriptor::Collection(Box::new(substitute(element, binding)))
        }
        TypeDescriptor::Optional(inner) => {
            TypeDescriptor::Optional(Box::new(substitute(inner, binding)))
        }
        TypeDescriptor::Union(alternatives) => TypeDescriptor::Union(
            alternatives
                .iter()
                .map(|alt| substitute(alt, binding))
                .collect(),
        ),
        TypeDescriptor::GenericInstance { origin, args } => TypeDescriptor::GenericInstance {
            origin: origin.clone(),
            args: args.iter().map(|arg| substitute(arg, binding)).collect(),
        },
        other => other.clone(),
    }
}

/// Materializes a generic instantiation as a standalone record: synthesized
/// name, fields substituted, no remaining type parameters.
pub fn instantiate(origin: &RecordDescriptor, args: &[TypeDescriptor]) -> GenResult<RecordDescriptor> {
    let binding = bind(origin, args)?;
    let fields = origin
        .fields
        .iter()
        .map(|field| FieldDescriptor::new(field.name.clone(), substitute(&field.ty, &binding)))
        .collect();

    Ok(RecordDescriptor::new(synthesized_name(origin, args), fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::ScalarType;

    fn envelope() -> RecordDescriptor {
        RecordDescriptor::generic(
            "Envelope",
            vec!["T".into()],
            vec![
                FieldDescriptor::new("ok", TypeDescriptor::Scalar(ScalarType::Boolean)),
                FieldDescriptor::new(
                    "payload",
                    TypeDescriptor::optional(TypeDescriptor::GenericParameter("T".into())),
                ),
            ],
        )
    }

    #[test]
    fn test_bind_positional() {
        let origin = RecordDescriptor::generic("Pair", vec!["A".into(), "B".into()], vec![]);
        let binding = bind(
            &origin,
            &[
                TypeDescriptor::Scalar(ScalarType::Text),
                TypeDescriptor::Scalar(ScalarType::Integer),
            ],
        )
        .unwrap();

        assert_eq!(
            binding.get("A"),
            Some(&TypeDescriptor::Scalar(ScalarType::Text))
        );
        assert_eq!(
            binding.get("B"),
            Some(&TypeDescriptor::Scalar(ScalarType::Integer))
        );
    }

    #[test]
    fn test_bind_arity_mismatch() {
        let err = bind(&envelope(), &[]).unwrap_err();
        match err {
            GenError::ArityMismatch {
                origin,
                expected,
                found,
            } => {
                assert_eq!(origin, "Envelope");
                assert_eq!(expected, 1);
                assert_eq!(found, 0);
            }
            other => panic!("expected ArityMismatch, got {}", other),
        }
    }

    #[test]
    fn test_substitute_recurses_compounds() {
        let binding = bind(&envelope(), &[TypeDescriptor::Scalar(ScalarType::Text)]).unwrap();

        // T[] | null -> string[] | null
        let ty = TypeDescriptor::optional(TypeDescriptor::list(TypeDescriptor::GenericParameter(
            "T".into(),
        )));
        let rewritten = substitute(&ty, &binding);
        assert_eq!(
            rewritten,
            TypeDescriptor::optional(TypeDescriptor::list(TypeDescriptor::Scalar(
                ScalarType::Text
            )))
        );
    }

    #[test]
    fn test_substitute_leaves_unbound_params() {
        let binding = Binding::default();
        let ty = TypeDescriptor::GenericParameter("U".into());
        assert_eq!(substitute(&ty, &binding), ty);
    }

    #[test]
    fn test_instantiate() {
        let record = instantiate(&envelope(), &[TypeDescriptor::Scalar(ScalarType::Text)]).unwrap();
        assert_eq!(record.name, "StringEnvelope");
        assert!(record.type_params.is_empty());
        assert_eq!(
            record.fields[1].ty,
            TypeDescriptor::optional(TypeDescriptor::Scalar(ScalarType::Text))
        );
    }
}
