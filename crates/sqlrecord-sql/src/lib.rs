mod flavor;
pub use flavor::Flavor;

pub mod serializer;

pub mod stmt;
pub use stmt::{DeleteBuilder, InsertBuilder, InsertVerb, SelectBuilder, UpdateBuilder};

pub use sqlrecord_core::Value;
