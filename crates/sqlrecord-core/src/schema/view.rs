use super::FieldDescriptor;

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

/// The fields of a type selected by one tag, in declaration order.
///
/// Read (SELECT, scan) and write (INSERT, UPDATE) projections are the same
/// list: no field is read-only or write-only by tag. Per-operation options
/// such as `omitempty` decide the rest.
#[derive(Debug, Clone, Default)]
pub struct TaggedView {
    fields: Vec<Arc<FieldDescriptor>>,

    /// Column name and alias → position in `fields`. Only used for lookups;
    /// an alias never hides a field.
    by_column: HashMap<String, usize>,
}

impl TaggedView {
    /// Builds a view from candidate fields. A column name already taken by
    /// an earlier field is skipped.
    pub(crate) fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Arc<FieldDescriptor>>) -> Self {
        let mut view = TaggedView::default();
        let mut columns = HashSet::new();

        for field in fields {
            if !columns.insert(field.column_name()) {
                continue;
            }

            view.fields.push(field.clone());
        }

        // Column names take precedence over aliases in `cols` lookups.
        for (pos, field) in view.fields.iter().enumerate() {
            view.by_column.insert(field.column_name().to_string(), pos);
        }
        for (pos, field) in view.fields.iter().enumerate() {
            view.by_column.entry(field.alias().to_string()).or_insert(pos);
        }

        view
    }

    /// Fields used when reading rows into a record.
    pub fn for_read(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields
    }

    /// Fields used when writing a record into a statement.
    pub fn for_write(&self) -> &[Arc<FieldDescriptor>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves the fields for an explicit column list, keeping the caller's
    /// order. Returns `None` if any name matches neither a column nor an
    /// alias in this view.
    pub fn cols<S: AsRef<str>>(&self, names: &[S]) -> Option<Vec<&Arc<FieldDescriptor>>> {
        names
            .iter()
            .map(|name| {
                self.by_column
                    .get(name.as_ref())
                    .map(|&pos| &self.fields[pos])
            })
            .collect()
    }
}
