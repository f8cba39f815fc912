mod error;
pub(crate) use error::Errors;

mod field;
pub(crate) use field::Field;

mod record;
pub(crate) use record::Record;
