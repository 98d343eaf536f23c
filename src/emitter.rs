#![deny(missing_docs)]

//! # Interface Emission
//!
//! Orchestrates a batch of record types into one `interface` block per
//! distinct display name. The exportable set is built once from the whole
//! batch, so a type referenced anywhere in the batch is referenceable
//! regardless of its position in the input list.

use crate::descriptor::{RecordDescriptor, TypeDescriptor};
use crate::error::{GenError, GenResult};
use crate::naming::type_display_name;
use crate::registry::ExportableSet;
use crate::render::{render_type, INDENT_UNIT};
use crate::substitute::instantiate;
use indexmap::IndexMap;

/// Rendered interface blocks for one emit call, keyed by display name.
///
/// First-seen wins: a name is recorded at most once and keeps the position
/// of its first occurrence.
#[derive(Debug, Default)]
struct ProcessedCache {
    blocks: IndexMap<String, String>,
}

impl ProcessedCache {
    fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    fn record(&mut self, name: String, block: String) {
        self.blocks.entry(name).or_insert(block);
    }

    /// Concatenates all blocks in first-seen order, one blank line apart.
    fn combined(&self) -> String {
        self.blocks
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Generates TypeScript interface declarations for an ordered batch of
/// record types and generic instantiations.
///
/// Every name declared anywhere in the batch is treated as referenceable
/// when rendering fields; a display name requested twice emits exactly one
/// block, at its first position. Entries that are neither records nor
/// generic instances are rejected.
pub fn generate_interfaces(batch: &[TypeDescriptor]) -> GenResult<String> {
    let exportable = ExportableSet::from_batch(batch)?;
    let mut cache = ProcessedCache::default();

    for entry in batch {
        let record = resolve_entry(entry)?;
        if cache.contains(&record.name) {
            continue;
        }

        let block = emit_interface(&record, &exportable)?;
        cache.record(record.name, block);
    }

    Ok(cache.combined())
}

/// Resolves a batch entry to the standalone record it declares.
fn resolve_entry(entry: &TypeDescriptor) -> GenResult<RecordDescriptor> {
    match entry {
        TypeDescriptor::Record(record) => Ok(record.clone()),
        TypeDescriptor::GenericInstance { origin, args } => instantiate(origin, args),
        other => Err(GenError::General(format!(
            "batch entries must be records or generic instances, got `{}`",
            type_display_name(other)
        ))),
    }
}

/// Assembles one `interface Name { ... }` block, fields at indent level 1.
fn emit_interface(record: &RecordDescriptor, exportable: &ExportableSet) -> GenResult<String> {
    let mut block = format!("interface {} {{\n", record.name);
    for field in &record.fields {
        let rendered = render_type(&field.ty, exportable, 1)?;
        block.push_str(&format!("{}{}: {};\n", INDENT_UNIT, field.name, rendered));
    }
    block.push_str("}\n");
    Ok(block)
}
