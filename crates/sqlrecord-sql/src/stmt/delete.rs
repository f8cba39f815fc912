use super::Filter;
use crate::{serializer::Serializer, Flavor};

use sqlrecord_core::Value;

#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    pub(crate) flavor: Flavor,
    pub(crate) table: String,
    pub(crate) filters: Vec<Filter>,
}

impl DeleteBuilder {
    pub fn new(flavor: Flavor) -> DeleteBuilder {
        DeleteBuilder {
            flavor,
            table: String::new(),
            filters: vec![],
        }
    }

    pub fn delete_from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
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

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        Serializer::new(self.flavor).serialize(self)
    }
}
