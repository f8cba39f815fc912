mod error;
pub use error::Error;

pub mod schema;
pub use schema::{FieldDescriptor, FieldMapper, TaggedView, TypeDescriptor};

pub mod stmt;
pub use stmt::Value;

/// A Result type alias that uses sqlrecord's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
