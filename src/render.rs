#![deny(missing_docs)]

//! # Type Rendering
//!
//! Recursive-descent conversion from a type descriptor to TypeScript type
//! text. Pure function of its inputs: the exportable set decides reference
//! vs. inline at every nesting level, and a path-scoped visited set turns
//! cyclic inline expansion into a reported error instead of a stack
//! overflow.

use crate::descriptor::{FieldDescriptor, TypeDescriptor};
use crate::error::{GenError, GenResult};
use crate::registry::ExportableSet;
use crate::scalar::ScalarType;
use crate::substitute::{bind, substitute};

/// Fixed 4-column indentation unit, applied per nesting level.
pub const INDENT_UNIT: &str = "    ";

/// Renders a type descriptor as TypeScript type text.
///
/// `indent` is the nesting level at which the type appears; inline object
/// literals indent their fields one level deeper and close at `indent`.
pub fn render_type(
    ty: &TypeDescriptor,
    exportable: &ExportableSet,
    indent: usize,
) -> GenResult<String> {
    let mut expansion_path = Vec::new();
    render_inner(ty, exportable, indent, &mut expansion_path)
}

fn render_inner(
    ty: &TypeDescriptor,
    exportable: &ExportableSet,
    indent: usize,
    path: &mut Vec<String>,
) -> GenResult<String> {
    match ty {
        TypeDescriptor::Scalar(scalar) => Ok(scalar.spelling().to_string()),

        TypeDescriptor::Record(record) => {
            if exportable.contains(&record.name) {
                Ok(record.name.clone())
            } else {
                render_object_literal(&record.name, &record.fields, exportable, indent, path)
            }
        }

        TypeDescriptor::Collection(element) => {
            let rendered = render_inner(element, exportable, indent, path)?;
            // `[]` lands directly after the closing brace of an inlined
            // element, and composes for nested collections (T[][]).
            Ok(format!("{}[]", rendered))
        }

        TypeDescriptor::Optional(inner) => match inner.as_ref() {
            // Flatten optional-of-union: a | b | null, never (a | b) | null
            TypeDescriptor::Union(alternatives) => {
                let mut parts = Vec::with_capacity(alternatives.len() + 1);
                for alt in alternatives {
                    parts.push(render_inner(alt, exportable, indent, path)?);
                }
                parts.push("null".to_string());
                Ok(parts.join(" | "))
            }
            single => {
                let rendered = render_inner(single, exportable, indent, path)?;
                Ok(format!("{} | null", rendered))
            }
        },

        TypeDescriptor::Union(alternatives) => {
            let mut parts = Vec::with_capacity(alternatives.len());
            for alt in alternatives {
                parts.push(render_inner(alt, exportable, indent, path)?);
            }
            Ok(parts.join(" | "))
        }

        TypeDescriptor::GenericInstance { origin, args } => {
            // Arity is validated before the exportable decision; a
            // malformed instantiation never binds partially.
            let binding = bind(origin, args)?;

            if exportable.contains(&origin.name) {
                let mut rendered_args = Vec::with_capacity(args.len());
                for arg in args {
                    rendered_args.push(render_inner(arg, exportable, indent, path)?);
                }
                Ok(format!("{}<{}>", origin.name, rendered_args.join(", ")))
            } else {
                let fields: Vec<FieldDescriptor> = origin
                    .fields
                    .iter()
                    .map(|field| {
                        FieldDescriptor::new(field.name.clone(), substitute(&field.ty, &binding))
                    })
                    .collect();
                render_object_literal(&origin.name, &fields, exportable, indent, path)
            }
        }

        // Unbound parameter outside its origin: degrade, do not abort
        TypeDescriptor::GenericParameter(_) => Ok(ScalarType::Any.spelling().to_string()),
    }
}

/// Renders a record's fields as an anonymous object literal.
///
/// `name` identifies the record on the expansion path; re-entering a name
/// already on the path is a cycle through non-exportable types.
fn render_object_literal(
    name: &str,
    fields: &[FieldDescriptor],
    exportable: &ExportableSet,
    indent: usize,
    path: &mut Vec<String>,
) -> GenResult<String> {
    if path.iter().any(|visited| visited == name) {
        let mut cycle = path.join(" -> ");
        cycle.push_str(" -> ");
        cycle.push_str(name);
        return Err(GenError::CyclicType {
            name: name.to_string(),
            cycle,
        });
    }
    path.push(name.to_string());

    let field_indent = INDENT_UNIT.repeat(indent + 1);
    let closing_indent = INDENT_UNIT.repeat(indent);

    let mut out = String::from("{\n");
    for field in fields {
        let rendered = render_inner(&field.ty, exportable, indent + 1, path)?;
        out.push_str(&format!("{}{}: {};\n", field_indent, field.name, rendered));
    }
    out.push_str(&closing_indent);
    out.push('}');

    path.pop();
    Ok(out)
}
