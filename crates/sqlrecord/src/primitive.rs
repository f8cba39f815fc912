use sqlrecord_core::{Error, Result, Value};

/// A field type that maps to a single column.
pub trait Primitive: Sized {
    /// Converts the field into the cell handed to statement builders.
    fn to_value(&self) -> Value;

    /// Returns `true` for the type's zero value. Drives `omitempty`.
    fn is_empty_value(&self) -> bool;

    /// Loads the field from a scanned cell.
    fn load(value: Value) -> Result<Self>;
}

impl Primitive for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn is_empty_value(&self) -> bool {
        !*self
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // Drivers without a boolean type report 0 / 1.
            Value::I64(v) => Ok(v != 0),
            Value::U64(v) => Ok(v != 0),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

macro_rules! impl_primitive_int {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }

                fn is_empty_value(&self) -> bool {
                    *self == 0
                }

                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$ty>::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::I64(v), stringify!($ty))),
                        Value::U64(v) => <$ty>::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::U64(v), stringify!($ty))),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_primitive_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Primitive for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn is_empty_value(&self) -> bool {
        self.to_bits() == 0
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            Value::U64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl Primitive for f32 {
    fn to_value(&self) -> Value {
        Value::F64(f64::from(*self))
    }

    fn is_empty_value(&self) -> bool {
        self.to_bits() == 0
    }

    fn load(value: Value) -> Result<Self> {
        f64::load(value).map(|v| v as f32)
    }
}

impl Primitive for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => Ok(String::from_utf8(v)?),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl Primitive for Vec<u8> {
    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }
}
