//! Maps annotated record types to SQL statement builders.
//!
//! Derive [`Record`] on a struct, bind a [`Mapper`] to it, and use the mapper
//! to produce `SELECT`, `INSERT`, `UPDATE` and `DELETE` builders or to collect
//! scan targets for loading a row back into a value.

extern crate self as sqlrecord;

mod mapper;
pub use mapper::Mapper;

mod primitive;
pub use primitive::Primitive;

mod record;
pub use record::{scan_row, Record, Scan};

pub mod schema {
    pub use sqlrecord_core::schema::*;
}

pub mod sql {
    pub use sqlrecord_sql::*;
}

pub use sqlrecord_core::{Error, FieldMapper, Result, Value};
pub use sqlrecord_macros::Record;
pub use sqlrecord_sql::{
    DeleteBuilder, Flavor, InsertBuilder, InsertVerb, SelectBuilder, UpdateBuilder,
};

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Primitive, Record, Scan};
    pub use sqlrecord_core::{schema::FieldDecl, Value};
}
