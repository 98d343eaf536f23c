#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Helpers for deriving interface display names, including the synthesized
//! names of generic instantiations (`Exit` + `ResponseModel` ->
//! `ExitResponseModel`).

use crate::descriptor::{RecordDescriptor, TypeDescriptor};
use heck::ToUpperCamelCase;

/// Derives the display name of a type for naming purposes.
///
/// Records use their declared name, generic instantiations their
/// synthesized name. Non-record shapes fall back to an UpperCamelCase
/// rendering of their structure so synthesis stays total.
pub fn type_display_name(ty: &TypeDescriptor) -> String {
    match ty {
        TypeDescriptor::Record(record) => record.name.clone(),
        TypeDescriptor::GenericInstance { origin, args } => synthesized_name(origin, args),
        TypeDescriptor::Scalar(scalar) => scalar.spelling().to_upper_camel_case(),
        TypeDescriptor::Collection(element) => format!("{}Array", type_display_name(element)),
        TypeDescriptor::Optional(inner) => type_display_name(inner),
        TypeDescriptor::Union(alternatives) => alternatives
            .iter()
            .map(type_display_name)
            .collect::<Vec<_>>()
            .join(""),
        TypeDescriptor::GenericParameter(param) => param.clone(),
    }
}

/// Synthesizes the standalone interface name for a generic instantiation:
/// the argument names concatenated in order, followed by the origin name.
pub fn synthesized_name(origin: &RecordDescriptor, args: &[TypeDescriptor]) -> String {
    let mut name = String::new();
    for arg in args {
        name.push_str(&type_display_name(arg));
    }
    name.push_str(&origin.name);
    name
}
