use crate::Primitive;

use sqlrecord_core::{schema::FieldDecl, Error, Result, Value};
use std::any::Any;

/// A struct whose fields map to table columns.
///
/// Implemented by `#[derive(Record)]`. Field indices follow the order of
/// [`Record::fields`].
pub trait Record: Any {
    /// Raw field declarations in declaration order.
    fn fields() -> &'static [FieldDecl]
    where
        Self: Sized;

    /// Current value of the field at `index`. Optional fields are
    /// dereferenced; `None` becomes [`Value::Null`].
    fn field_value(&self, index: usize) -> Value;

    /// Returns `true` when the field at `index` holds its zero value.
    fn is_empty_field(&self, index: usize) -> bool;

    /// One scan target per declared field, in declaration order.
    fn scan_targets(&mut self) -> Vec<&mut dyn Scan>;
}

/// A destination a single column value can be loaded into.
pub trait Scan {
    fn scan(&mut self, value: Value) -> Result<()>;
}

impl<T: Primitive> Scan for T {
    fn scan(&mut self, value: Value) -> Result<()> {
        *self = T::load(value)?;
        Ok(())
    }
}

/// Loads one row of values into `targets`, pairing them by position.
///
/// Fails before touching any target if the lengths differ. Stops at the first
/// value that cannot be converted; targets before it keep their new value.
pub fn scan_row(targets: Vec<&mut dyn Scan>, row: Vec<Value>) -> Result<()> {
    if targets.len() != row.len() {
        return Err(Error::invalid_record_count(format!(
            "{} scan targets, {} values",
            targets.len(),
            row.len()
        )));
    }

    for (position, (target, value)) in targets.into_iter().zip(row).enumerate() {
        target
            .scan(value)
            .map_err(|err| err.context(sqlrecord_core::err!("column {position}")))?;
    }

    Ok(())
}
