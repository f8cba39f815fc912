mod record_type;
use record_type::RecordType;

mod statement;

use crate::{Record, Scan};

use sqlrecord_core::{
    schema::{FieldDescriptor, TaggedView, TypeDescriptor},
    FieldMapper, Value,
};
use sqlrecord_sql::Flavor;
use std::{
    any::Any,
    sync::{Arc, OnceLock},
};

/// Builds statements and scan targets for one record type.
///
/// A mapper is a cheap value: configuration methods return a new mapper and
/// leave the receiver untouched. Field metadata is shared through the
/// process-wide descriptor cache.
#[derive(Clone)]
pub struct Mapper {
    /// Bound record type. `None` for [`Mapper::empty`].
    record: Option<RecordType>,

    /// Parsed field metadata for `record` under `field_mapper`
    descriptor: Arc<TypeDescriptor>,

    field_mapper: FieldMapper,

    /// Tag used by the operations without an explicit tag
    tag: Arc<str>,

    flavor: Flavor,
}

impl Mapper {
    /// Creates a mapper bound to `T` with the default flavor, the identity
    /// field mapper and the empty tag.
    pub fn new<T: Record>() -> Mapper {
        let record = RecordType::of::<T>();
        let field_mapper = FieldMapper::default();

        Mapper {
            descriptor: record.resolve(&field_mapper),
            record: Some(record),
            field_mapper,
            tag: Arc::from(""),
            flavor: Flavor::default(),
        }
    }

    /// Creates a mapper bound to the type of `sample`.
    pub fn of<T: Record>(_sample: &T) -> Mapper {
        Mapper::new::<T>()
    }

    /// A mapper with no fields that matches no record.
    pub fn empty() -> Mapper {
        static EMPTY: OnceLock<Arc<TypeDescriptor>> = OnceLock::new();

        Mapper {
            record: None,
            descriptor: EMPTY
                .get_or_init(|| Arc::new(TypeDescriptor::empty("")))
                .clone(),
            field_mapper: FieldMapper::default(),
            tag: Arc::from(""),
            flavor: Flavor::default(),
        }
    }

    pub fn for_flavor(&self, flavor: Flavor) -> Mapper {
        Mapper {
            flavor,
            ..self.clone()
        }
    }

    /// Returns a mapper that derives column names with `field_mapper`.
    /// Explicit `db` annotations still take precedence.
    pub fn with_field_mapper(&self, field_mapper: FieldMapper) -> Mapper {
        let descriptor = match &self.record {
            Some(record) => record.resolve(&field_mapper),
            None => self.descriptor.clone(),
        };

        Mapper {
            descriptor,
            field_mapper,
            ..self.clone()
        }
    }

    /// Returns a mapper whose untagged operations use `tag`.
    pub fn with_tag(&self, tag: &str) -> Mapper {
        Mapper {
            tag: Arc::from(tag),
            ..self.clone()
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn field_mapper(&self) -> &FieldMapper {
        &self.field_mapper
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Name of the bound record type, if any.
    pub fn type_name(&self) -> Option<&'static str> {
        self.record.as_ref().map(|record| record.type_name)
    }

    /// Write-alias names of the default tag's fields.
    pub fn columns(&self) -> Vec<String> {
        self.columns_for_tag(&self.tag)
    }

    /// Write-alias names of `tag`'s fields in declaration order: the
    /// `fieldas` alias when one is declared, otherwise the column name.
    /// Unquoted. Empty if the tag is unknown to the record type.
    pub fn columns_for_tag(&self, tag: &str) -> Vec<String> {
        let Some(view) = self.view(tag) else {
            return vec![];
        };

        view.for_write()
            .iter()
            .map(|field| field.alias().to_string())
            .collect()
    }

    /// Scan targets for every field of the default tag.
    pub fn addr<'a>(&self, record: &'a mut dyn Any) -> Option<Vec<&'a mut dyn Scan>> {
        self.addr_for_tag(&self.tag, record)
    }

    /// Scan targets for every field of `tag`, in view order.
    ///
    /// Returns `None` if the tag is unknown or `record` is not the bound type.
    pub fn addr_for_tag<'a>(
        &self,
        tag: &str,
        record: &'a mut dyn Any,
    ) -> Option<Vec<&'a mut dyn Scan>> {
        let indices: Vec<_> = self
            .view(tag)?
            .for_read()
            .iter()
            .map(|field| field.index())
            .collect();

        self.scan_targets(&indices, record)
    }

    /// Scan targets for an explicit column list, in the caller's order.
    ///
    /// Names are looked up in the default tag's view by column name or alias.
    /// Returns `None` if any name is unknown or repeated, or if `record` is
    /// not the bound type.
    pub fn addr_with_cols<'a, S: AsRef<str>>(
        &self,
        cols: &[S],
        record: &'a mut dyn Any,
    ) -> Option<Vec<&'a mut dyn Scan>> {
        let Some(fields) = self.view(&self.tag)?.cols(cols) else {
            log::trace!("unknown column requested; type={}", self.descriptor.type_name());
            return None;
        };

        let indices: Vec<_> = fields.iter().map(|field| field.index()).collect();
        self.scan_targets(&indices, record)
    }

    /// Field values of the default tag.
    pub fn values(&self, record: &dyn Any) -> Option<Vec<Value>> {
        self.values_for_tag(&self.tag, record)
    }

    /// Snapshot of every field of `tag`, in view order.
    pub fn values_for_tag(&self, tag: &str, record: &dyn Any) -> Option<Vec<Value>> {
        let view = self.view(tag)?;
        let record = self.downcast_ref(record)?;

        Some(
            view.for_write()
                .iter()
                .map(|field| record.field_value(field.index()))
                .collect(),
        )
    }

    fn scan_targets<'a>(
        &self,
        indices: &[usize],
        record: &'a mut dyn Any,
    ) -> Option<Vec<&'a mut dyn Scan>> {
        let record = self.downcast_mut(record)?;
        let mut targets: Vec<Option<&'a mut dyn Scan>> =
            record.scan_targets().into_iter().map(Some).collect();

        // A target can only be handed out once.
        indices
            .iter()
            .map(|&index| targets.get_mut(index)?.take())
            .collect()
    }

    fn view(&self, tag: &str) -> Option<&TaggedView> {
        let view = self.descriptor.tag(tag);

        if view.is_none() {
            log::trace!(
                "tag not declared on record type; type={} tag={tag:?}",
                self.descriptor.type_name()
            );
        }

        view
    }

    fn downcast_ref<'a>(&self, record: &'a dyn Any) -> Option<&'a dyn Record> {
        let found = self
            .record
            .as_ref()
            .and_then(|bound| (bound.downcast_ref)(record));

        if found.is_none() {
            log::trace!(
                "record type mismatch; expected={}",
                self.descriptor.type_name()
            );
        }

        found
    }

    fn downcast_mut<'a>(&self, record: &'a mut dyn Any) -> Option<&'a mut dyn Record> {
        let found = match &self.record {
            Some(bound) => (bound.downcast_mut)(record),
            None => None,
        };

        if found.is_none() {
            log::trace!(
                "record type mismatch; expected={}",
                self.descriptor.type_name()
            );
        }

        found
    }

    /// Column reference for statements, quoted when the field asks for it.
    fn quoted_column(&self, field: &FieldDescriptor) -> String {
        if field.quote_requested() {
            self.flavor.quote(field.column_name())
        } else {
            field.column_name().to_string()
        }
    }
}

impl Default for Mapper {
    fn default() -> Mapper {
        Mapper::empty()
    }
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("type", &self.descriptor.type_name())
            .field("fields", &self.descriptor.len())
            .field("tag", &self.tag)
            .field("flavor", &self.flavor)
            .field("field_mapper", &self.field_mapper)
            .finish()
    }
}
