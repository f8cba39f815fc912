use crate::{serializer::Serializer, Flavor};

use sqlrecord_core::Value;

/// Verb an INSERT statement starts with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum InsertVerb {
    /// `INSERT INTO`
    #[default]
    Insert,

    /// Insert, skipping rows that conflict with existing ones
    InsertIgnore,

    /// `REPLACE INTO`
    Replace,
}

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    pub(crate) flavor: Flavor,
    pub(crate) verb: InsertVerb,
    pub(crate) table: String,
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<Value>>,
}

impl InsertBuilder {
    pub fn new(flavor: Flavor, verb: InsertVerb) -> InsertBuilder {
        InsertBuilder {
            flavor,
            verb,
            table: String::new(),
            columns: vec![],
            rows: vec![],
        }
    }

    pub fn into_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// Replaces the column list.
    pub fn cols<I>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends one row of values.
    pub fn values<I>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn verb(&self) -> InsertVerb {
        self.verb
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        Serializer::new(self.flavor).serialize(self)
    }
}
