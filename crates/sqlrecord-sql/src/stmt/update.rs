use super::Filter;
use crate::{serializer::Serializer, Flavor};

use sqlrecord_core::Value;

#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    pub(crate) flavor: Flavor,
    pub(crate) table: String,
    pub(crate) assignments: Vec<(String, Value)>,
    pub(crate) filters: Vec<Filter>,
}

impl UpdateBuilder {
    pub fn new(flavor: Flavor) -> UpdateBuilder {
        UpdateBuilder {
            flavor,
            table: String::new(),
            assignments: vec![],
            filters: vec![],
        }
    }

    pub fn update(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// Adds a `column = value` assignment.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.assignments.push((column.into(), value.into()));
        self
    }

    pub fn where_eq(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn assignments(&self) -> &[(String, Value)] {
        &self.assignments
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        Serializer::new(self.flavor).serialize(self)
    }
}
