use std::fmt;

/// Element kinds a column can be declared with.
///
/// Every column carries exactly one kind, fixed at table-definition time.
/// The native representations are `i32`, `i64`, `f32`, `f64` and `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Integer,
    Bigint,
    Real,
    Double,
    Varchar,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataType::Integer => "int",
            DataType::Bigint => "long",
            DataType::Real => "float",
            DataType::Double => "double",
            DataType::Varchar => "string",
        };
        write!(f, "{}", name)
    }
}

/// Resolves a [`DataType`] to its native Rust type.
///
/// Binds the native type to the given identifier and evaluates the body once,
/// so code generic over the element kind is written a single time:
///
/// ```rust,ignore
/// let pos_list = with_native_type!(table.column_type(column_id)?, |T| {
///     let search_value = T::from_value(&value)?;
///     scan_table::<T>(&table, column_id, scan_type, &search_value)?
/// });
/// ```
#[macro_export]
macro_rules! with_native_type {
    ($data_type:expr, |$t:ident| $body:block) => {
        match $data_type {
            $crate::DataType::Integer => {
                type $t = i32;
                $body
            }
            $crate::DataType::Bigint => {
                type $t = i64;
                $body
            }
            $crate::DataType::Real => {
                type $t = f32;
                $body
            }
            $crate::DataType::Double => {
                type $t = f64;
                $body
            }
            $crate::DataType::Varchar => {
                type $t = ::std::string::String;
                $body
            }
        }
    };
}
