use crate::Record;

use sqlrecord_core::{
    schema::{self, FieldDecl, TypeDescriptor},
    FieldMapper,
};
use std::{
    any::{Any, TypeId},
    sync::Arc,
};

/// Type-erased handle to a record type.
///
/// Keeps `Mapper` non-generic while still letting it recover the concrete
/// record from a `&dyn Any`.
#[derive(Clone, Copy)]
pub(super) struct RecordType {
    pub(super) type_id: TypeId,
    pub(super) type_name: &'static str,
    pub(super) decls: &'static [FieldDecl],
    pub(super) downcast_ref: fn(&dyn Any) -> Option<&dyn Record>,
    pub(super) downcast_mut: fn(&mut dyn Any) -> Option<&mut dyn Record>,
}

impl RecordType {
    pub(super) fn of<T: Record>() -> RecordType {
        RecordType {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            decls: T::fields(),
            downcast_ref: downcast_ref::<T>,
            downcast_mut: downcast_mut::<T>,
        }
    }

    pub(super) fn resolve(&self, field_mapper: &FieldMapper) -> Arc<TypeDescriptor> {
        schema::resolve(self.type_id, self.type_name, self.decls, field_mapper)
    }
}

fn downcast_ref<T: Record>(record: &dyn Any) -> Option<&dyn Record> {
    record.downcast_ref::<T>().map(|record| record as &dyn Record)
}

fn downcast_mut<T: Record>(record: &mut dyn Any) -> Option<&mut dyn Record> {
    record
        .downcast_mut::<T>()
        .map(|record| record as &mut dyn Record)
}
