use super::{Formatter, ToSql};

use crate::Flavor;
use sqlrecord_core::Value;

/// 1-based position of a bound parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Formatter<'_> {
    fn push_param(&mut self, value: &Value) -> Placeholder {
        self.params.push(value.clone());
        Placeholder(self.params.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => {
                f.dst.push('$');
                f.dst.push_str(&self.0.to_string());
            }
            Flavor::Sqlite => {
                f.dst.push('?');
                f.dst.push_str(&self.0.to_string());
            }
        }
    }
}

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let placeholder = f.push_param(self);
        fmt!(f, placeholder);
    }
}
