use super::{field_mapper::MapperKey, FieldDecl, FieldMapper, TypeDescriptor};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, OnceLock, RwLock},
};

type Key = (TypeId, MapperKey);

#[derive(Default)]
struct Entry {
    descriptor: OnceLock<Arc<TypeDescriptor>>,
}

fn cache() -> &'static RwLock<HashMap<Key, Arc<Entry>>> {
    static CACHE: OnceLock<RwLock<HashMap<Key, Arc<Entry>>>> = OnceLock::new();
    CACHE.get_or_init(Default::default)
}

/// Returns the descriptor for a record type under `mapper`, building it on
/// first use.
///
/// Concurrent calls for the same key wait for a single build and receive the
/// same `Arc`. The map lock is only held while looking up or inserting the
/// entry, never while building.
///
/// Entries live for the rest of the process. Custom mappers are keyed by
/// their name, so the number of entries is bounded by the record types and
/// mapper names in use.
pub fn resolve(
    type_id: TypeId,
    type_name: &'static str,
    decls: &[FieldDecl],
    mapper: &FieldMapper,
) -> Arc<TypeDescriptor> {
    let key = (type_id, mapper.key());

    let entry = {
        let read = cache().read().unwrap_or_else(|e| e.into_inner());
        read.get(&key).cloned()
    };

    let entry = match entry {
        Some(entry) => entry,
        None => {
            let mut write = cache().write().unwrap_or_else(|e| e.into_inner());
            write
                .entry(key)
                .or_default()
                .clone()
        }
    };

    entry
        .descriptor
        .get_or_init(|| {
            let descriptor = TypeDescriptor::build(type_name, decls, mapper);

            log::debug!(
                "built record descriptor; type={type_name} mapper={:?} fields={} tags={}",
                mapper,
                descriptor.len(),
                descriptor.tags().count(),
            );

            Arc::new(descriptor)
        })
        .clone()
}
