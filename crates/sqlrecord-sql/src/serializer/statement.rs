use super::{And, Comma, Formatter, Serialize, Serializer, ToSql};

use crate::{
    stmt::{DeleteBuilder, Filter, InsertBuilder, InsertVerb, SelectBuilder, UpdateBuilder},
    Flavor,
};
use sqlrecord_core::Value;

impl ToSql for &Filter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = &self.column;
        let value = &self.value;
        fmt!(f, column " = " value);
    }
}

struct Where<'a>(&'a [Filter]);

impl ToSql for Where<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.0.is_empty() {
            fmt!(f, " WHERE " And(self.0));
        }
    }
}

struct Row<'a>(&'a [Value]);

impl ToSql for Row<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "(" Comma(self.0) ")");
    }
}

struct Assignment<'a>(&'a (String, Value));

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let (column, value) = self.0;
        fmt!(f, column " = " value);
    }
}

fn with_formatter(
    serializer: &Serializer,
    dst: &mut String,
    params: &mut Vec<Value>,
    body: impl FnOnce(&mut Formatter<'_>),
) {
    let mut f = Formatter {
        serializer,
        dst,
        params,
    };
    body(&mut f);
}

impl Serialize for SelectBuilder {
    fn serialize_into(&self, serializer: &Serializer, dst: &mut String, params: &mut Vec<Value>) {
        with_formatter(serializer, dst, params, |f| {
            if self.columns.is_empty() {
                fmt!(f, "SELECT *");
            } else {
                fmt!(f, "SELECT " Comma(&self.columns));
            }

            if !self.table.is_empty() {
                let table = &self.table;
                fmt!(f, " FROM " table);
            }

            fmt!(f, Where(&self.filters));
        });
    }
}

impl Serialize for InsertBuilder {
    fn serialize_into(&self, serializer: &Serializer, dst: &mut String, params: &mut Vec<Value>) {
        with_formatter(serializer, dst, params, |f| {
            let flavor = f.serializer.flavor;

            let verb = match (self.verb, flavor) {
                (InsertVerb::InsertIgnore, Flavor::Mysql) => "INSERT IGNORE INTO ",
                (InsertVerb::InsertIgnore, Flavor::Sqlite) => "INSERT OR IGNORE INTO ",
                (InsertVerb::Replace, Flavor::Mysql | Flavor::Sqlite) => "REPLACE INTO ",
                // PostgreSQL has no REPLACE; ignore is expressed with ON CONFLICT.
                _ => "INSERT INTO ",
            };

            let table = &self.table;
            fmt!(f, verb table);

            if !self.columns.is_empty() {
                fmt!(f, " (" Comma(&self.columns) ")");
            }

            if !self.rows.is_empty() {
                fmt!(f, " VALUES " Comma(self.rows.iter().map(|row| Row(row))));
            }

            if self.verb == InsertVerb::InsertIgnore && flavor == Flavor::Postgresql {
                fmt!(f, " ON CONFLICT DO NOTHING");
            }
        });
    }
}

impl Serialize for UpdateBuilder {
    fn serialize_into(&self, serializer: &Serializer, dst: &mut String, params: &mut Vec<Value>) {
        with_formatter(serializer, dst, params, |f| {
            let table = &self.table;
            fmt!(f, "UPDATE " table);

            if !self.assignments.is_empty() {
                fmt!(f, " SET " Comma(self.assignments.iter().map(Assignment)));
            }

            fmt!(f, Where(&self.filters));
        });
    }
}

impl Serialize for DeleteBuilder {
    fn serialize_into(&self, serializer: &Serializer, dst: &mut String, params: &mut Vec<Value>) {
        with_formatter(serializer, dst, params, |f| {
            let table = &self.table;
            fmt!(f, "DELETE FROM " table Where(&self.filters));
        });
    }
}
