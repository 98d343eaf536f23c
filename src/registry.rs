#![deny(missing_docs)]

//! # Exportable Set
//!
//! The caller-chosen registry of record names eligible to be referenced by
//! name instead of inlined. Membership is by name string only; registering
//! two distinct types under one name is a reported collision, never a
//! silent overwrite.

use crate::descriptor::{RecordDescriptor, TypeDescriptor};
use crate::error::{GenError, GenResult};
use crate::substitute::instantiate;
use indexmap::IndexMap;

/// Registry of referenceable record types, keyed by display name.
#[derive(Debug, Clone, Default)]
pub struct ExportableSet {
    records: IndexMap<String, RecordDescriptor>,
}

impl ExportableSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record under its declared name.
    ///
    /// Re-registering an identical descriptor is a no-op; a different
    /// descriptor under an existing name fails with
    /// [`GenError::NameCollision`].
    pub fn insert(&mut self, record: RecordDescriptor) -> GenResult<()> {
        match self.records.get(&record.name) {
            Some(existing) if *existing == record => Ok(()),
            Some(_) => Err(GenError::NameCollision { name: record.name }),
            None => {
                self.records.insert(record.name.clone(), record);
                Ok(())
            }
        }
    }

    /// Whether a name is referenceable.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Looks up the descriptor registered under a name.
    pub fn get(&self, name: &str) -> Option<&RecordDescriptor> {
        self.records.get(name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds the set for a whole batch up front.
    ///
    /// Plain records register their declared name. Generic instances
    /// register both the synthesized instantiation name and the origin's
    /// own name, so self-references inside the origin's fields still
    /// resolve. Entries of any other shape are ignored here; the emitter
    /// rejects them itself.
    pub fn from_batch(batch: &[TypeDescriptor]) -> GenResult<ExportableSet> {
        let mut set = ExportableSet::new();
        for entry in batch {
            match entry {
                TypeDescriptor::Record(record) => set.insert(record.clone())?,
                TypeDescriptor::GenericInstance { origin, args } => {
                    set.insert(origin.clone())?;
                    set.insert(instantiate(origin, args)?)?;
                }
                _ => {}
            }
        }
        Ok(set)
    }
}
