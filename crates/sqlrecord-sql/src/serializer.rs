//! Renders builders to SQL text and a parameter list.

#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma};

mod params;
pub use params::Placeholder;

mod statement;

use crate::Flavor;
use sqlrecord_core::Value;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut Vec<Value>,
}

/// Implemented by statements the serializer knows how to render.
pub trait Serialize {
    #[doc(hidden)]
    fn serialize_into(&self, serializer: &Serializer, dst: &mut String, params: &mut Vec<Value>);
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Returns the SQL text and the values bound to its placeholders, in
    /// placeholder order.
    pub fn serialize(&self, stmt: &impl Serialize) -> (String, Vec<Value>) {
        let mut sql = String::new();
        let mut params = vec![];
        stmt.serialize_into(self, &mut sql, &mut params);
        (sql, params)
    }
}
