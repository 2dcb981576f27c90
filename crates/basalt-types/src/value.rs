use std::fmt;

use crate::data_type::DataType;

/// Runtime representation of a single cell value, tagged by element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i32),
    Bigint(i64),
    Real(f32),
    Double(f64),
    Varchar(String),
}

impl Value {
    /// Get the element kind of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Integer(_) => DataType::Integer,
            Value::Bigint(_) => DataType::Bigint,
            Value::Real(_) => DataType::Real,
            Value::Double(_) => DataType::Double,
            Value::Varchar(_) => DataType::Varchar,
        }
    }

    /// Check whether this value can be stored in a column of the given kind.
    ///
    /// Exact kind matches are always accepted; integers additionally widen
    /// to `Bigint` and `Double`, and reals widen to `Double`.
    pub fn is_compatible_with(&self, data_type: DataType) -> bool {
        match (self, data_type) {
            (Value::Integer(_), DataType::Integer | DataType::Bigint | DataType::Double) => true,
            (Value::Bigint(_), DataType::Bigint) => true,
            (Value::Real(_), DataType::Real | DataType::Double) => true,
            (Value::Double(_), DataType::Double) => true,
            (Value::Varchar(_), DataType::Varchar) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Bigint(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Varchar(v) => write!(f, "{}", v),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Bigint(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Real(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Varchar(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Varchar(v.to_string())
    }
}

/// Errors raised when converting a [`Value`] to a native type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    CastError { from: DataType, to: DataType },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::CastError { from, to } => {
                write!(f, "Cannot cast {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for TypeError {}
