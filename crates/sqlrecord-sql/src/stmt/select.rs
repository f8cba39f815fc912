use super::Filter;
use crate::{serializer::Serializer, Flavor};

use sqlrecord_core::Value;

#[derive(Debug, Clone)]
pub struct SelectBuilder {
    pub(crate) flavor: Flavor,
    pub(crate) columns: Vec<String>,
    pub(crate) table: String,
    pub(crate) filters: Vec<Filter>,
}

impl SelectBuilder {
    pub fn new(flavor: Flavor) -> SelectBuilder {
        SelectBuilder {
            flavor,
            columns: vec![],
            table: String::new(),
            filters: vec![],
        }
    }

    /// Replaces the projected columns.
    pub fn select<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// Adds a `column = value` condition, joined to earlier ones with `AND`.
    pub fn where_eq(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        Serializer::new(self.flavor).serialize(self)
    }
}
