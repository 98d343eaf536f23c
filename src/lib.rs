#![deny(missing_docs)]

//! # tsgen
//!
//! Translates a typed record model into TypeScript interface declarations,
//! so a server-side data model and its client-side consumers stay
//! type-synchronized without hand duplication.

/// Shared error types.
pub mod error;

/// The static type descriptor model.
pub mod descriptor;

/// Scalar mapping table (host primitives -> TypeScript spellings).
pub mod scalar;

/// Interface naming, including synthesized instantiation names.
pub mod naming;

/// Generic parameter binding and substitution.
pub mod substitute;

/// The exportable-set registry.
pub mod registry;

/// Recursive type-to-text rendering.
pub mod render;

/// Batch interface emission.
pub mod emitter;

/// TypeScript function declaration assembly.
pub mod function_gen;

pub use descriptor::{load_batch, FieldDescriptor, RecordDescriptor, TypeDescriptor};
pub use emitter::generate_interfaces;
pub use error::{GenError, GenResult};
pub use function_gen::generate_function;
pub use naming::{synthesized_name, type_display_name};
pub use registry::ExportableSet;
pub use render::render_type;
pub use scalar::ScalarType;
pub use substitute::{bind, instantiate, substitute, Binding};
