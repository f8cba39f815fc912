use super::Mapper;

use sqlrecord_core::{FieldDescriptor, Value};
use sqlrecord_sql::{DeleteBuilder, InsertBuilder, InsertVerb, SelectBuilder, UpdateBuilder};
use std::any::Any;

impl Mapper {
    /// `SELECT` of the default tag's fields from `table`.
    pub fn select_from(&self, table: &str) -> SelectBuilder {
        self.select_from_for_tag(table, &self.tag)
    }

    /// `SELECT` listing `table.column` for every field of `tag`.
    ///
    /// Quoted fields are quoted with the flavor's identifier quote and aliased
    /// fields get `AS alias`. An unknown tag selects `*`.
    pub fn select_from_for_tag(&self, table: &str, tag: &str) -> SelectBuilder {
        let mut builder = self.flavor.select_builder();
        builder.from(table);

        match self.view(tag) {
            Some(view) => {
                builder.select(
                    view.for_read()
                        .iter()
                        .map(|field| self.select_column(table, field)),
                );
            }
            None => {
                builder.select(["*"]);
            }
        }

        builder
    }

    /// `UPDATE` of the default tag's fields.
    pub fn update(&self, table: &str, record: &dyn Any) -> UpdateBuilder {
        self.update_for_tag(table, &self.tag, record)
    }

    /// `UPDATE table SET ...` for every field of `tag`, skipping empty fields
    /// whose `omitempty` applies to `tag`.
    ///
    /// The `WHERE` clause is left to the caller. An unknown tag or a record of
    /// the wrong type yields a builder with no assignments.
    pub fn update_for_tag(&self, table: &str, tag: &str, record: &dyn Any) -> UpdateBuilder {
        let mut builder = self.flavor.update_builder();
        builder.update(table);

        let Some(view) = self.view(tag) else {
            return builder;
        };

        let Some(record) = self.downcast_ref(record) else {
            return builder;
        };

        for field in view.for_write() {
            let index = field.index();

            if field.should_omit_empty(tag) && record.is_empty_field(index) {
                continue;
            }

            builder.set(self.quoted_column(field), record.field_value(index));
        }

        builder
    }

    /// `INSERT INTO` of the default tag's fields.
    pub fn insert_into<'a>(
        &self,
        table: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        self.insert_for_tag(InsertVerb::Insert, table, &self.tag, records)
    }

    /// `INSERT INTO` of `tag`'s fields, one row per record of the bound type.
    ///
    /// Records of other types are skipped. A column whose `omitempty` applies
    /// to `tag` is left out when it is empty in every row; otherwise its empty
    /// cells are written as `NULL`.
    pub fn insert_into_for_tag<'a>(
        &self,
        table: &str,
        tag: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        self.insert_for_tag(InsertVerb::Insert, table, tag, records)
    }

    pub fn insert_ignore_into<'a>(
        &self,
        table: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        self.insert_for_tag(InsertVerb::InsertIgnore, table, &self.tag, records)
    }

    /// Like [`Mapper::insert_into_for_tag`] with the flavor's ignore verb.
    pub fn insert_ignore_into_for_tag<'a>(
        &self,
        table: &str,
        tag: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        self.insert_for_tag(InsertVerb::InsertIgnore, table, tag, records)
    }

    pub fn replace_into<'a>(
        &self,
        table: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        self.insert_for_tag(InsertVerb::Replace, table, &self.tag, records)
    }

    /// Like [`Mapper::insert_into_for_tag`] with `REPLACE INTO`.
    pub fn replace_into_for_tag<'a>(
        &self,
        table: &str,
        tag: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        self.insert_for_tag(InsertVerb::Replace, table, tag, records)
    }

    pub fn delete_from(&self, table: &str) -> DeleteBuilder {
        let mut builder = self.flavor.delete_builder();
        builder.delete_from(table);
        builder
    }

    fn insert_for_tag<'a>(
        &self,
        verb: InsertVerb,
        table: &str,
        tag: &str,
        records: impl IntoIterator<Item = &'a dyn Any>,
    ) -> InsertBuilder {
        let mut builder = self.flavor.insert_builder(verb);
        builder.into_table(table);

        let Some(view) = self.view(tag) else {
            return builder;
        };

        let mut dropped = 0;
        let records: Vec<_> = records
            .into_iter()
            .filter_map(|record| {
                let found = self
                    .record
                    .as_ref()
                    .and_then(|bound| (bound.downcast_ref)(record));
                if found.is_none() {
                    dropped += 1;
                }
                found
            })
            .collect();

        if dropped > 0 {
            log::trace!(
                "skipped records of another type; expected={} skipped={dropped}",
                self.descriptor.type_name()
            );
        }

        let fields = view.for_write();

        if records.is_empty() {
            builder.cols(fields.iter().map(|field| self.quoted_column(field)));
            return builder;
        }

        let mut columns = Vec::with_capacity(fields.len());
        let mut rows = vec![Vec::with_capacity(fields.len()); records.len()];

        for field in fields {
            let index = field.index();
            let omit_empty = field.should_omit_empty(tag);

            if omit_empty && records.iter().all(|record| record.is_empty_field(index)) {
                continue;
            }

            columns.push(self.quoted_column(field));

            for (row, record) in rows.iter_mut().zip(&records) {
                let value = if omit_empty && record.is_empty_field(index) {
                    Value::Null
                } else {
                    record.field_value(index)
                };
                row.push(value);
            }
        }

        builder.cols(columns);
        for row in rows {
            builder.values(row);
        }

        builder
    }

    fn select_column(&self, table: &str, field: &FieldDescriptor) -> String {
        let column = format!("{table}.{}", self.quoted_column(field));

        if field.has_alias() {
            format!("{column} AS {}", field.alias())
        } else {
            column
        }
    }
}
