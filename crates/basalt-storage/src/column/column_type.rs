use std::cmp::Ordering;

use basalt_types::{DataType, TypeError, Value};

use super::dictionary_column::Dictionary;
use super::value_column::ValueColumn;

/// Native Rust type backing one element kind.
///
/// Connects a native type to its [`DataType`] tag, its casts from and to
/// [`Value`], its total order, and the typed projections out of the
/// kind-tagged column payloads. The five implementations are generated by
/// `impl_column_type!` below; scans and compression are written once,
/// generic over this trait.
pub trait ColumnType: Clone + PartialEq + std::fmt::Debug {
    const DATA_TYPE: DataType;

    /// Cast a runtime-tagged value to this type. Fails when the value's
    /// kind is incompatible (see [`Value::is_compatible_with`]).
    fn from_value(value: &Value) -> Result<Self, TypeError>;

    fn into_value(self) -> Value;

    /// Total order used for dictionary sorting, binary search and scan
    /// comparisons. Floats order by `total_cmp`.
    fn compare(&self, other: &Self) -> Ordering;

    fn values(column: &ValueColumn) -> Option<&Vec<Self>>;

    fn values_mut(column: &mut ValueColumn) -> Option<&mut Vec<Self>>;

    fn dictionary(dictionary: &Dictionary) -> Option<&Vec<Self>>;

    fn into_dictionary(values: Vec<Self>) -> Dictionary;
}

macro_rules! impl_column_type {
    ($native:ty, $variant:ident, |$a:ident, $b:ident| $cmp:expr, |$value:ident| $cast:expr) => {
        impl ColumnType for $native {
            const DATA_TYPE: DataType = DataType::$variant;

            fn from_value($value: &Value) -> Result<Self, TypeError> {
                $cast
            }

            fn into_value(self) -> Value {
                Value::$variant(self)
            }

            fn compare(&self, other: &Self) -> Ordering {
                let ($a, $b) = (self, other);
                $cmp
            }

            fn values(column: &ValueColumn) -> Option<&Vec<Self>> {
                match column {
                    ValueColumn::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn values_mut(column: &mut ValueColumn) -> Option<&mut Vec<Self>> {
                match column {
                    ValueColumn::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn dictionary(dictionary: &Dictionary) -> Option<&Vec<Self>> {
                match dictionary {
                    Dictionary::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn into_dictionary(values: Vec<Self>) -> Dictionary {
                Dictionary::$variant(values)
            }
        }
    };
}

impl_column_type!(i32, Integer, |a, b| a.cmp(b), |value| match value {
    Value::Integer(v) => Ok(*v),
    other => Err(TypeError::CastError { from: other.data_type(), to: DataType::Integer }),
});

impl_column_type!(i64, Bigint, |a, b| a.cmp(b), |value| match value {
    Value::Integer(v) => Ok(i64::from(*v)),
    Value::Bigint(v) => Ok(*v),
    other => Err(TypeError::CastError { from: other.data_type(), to: DataType::Bigint }),
});

impl_column_type!(f32, Real, |a, b| a.total_cmp(b), |value| match value {
    Value::Real(v) => Ok(*v),
    other => Err(TypeError::CastError { from: other.data_type(), to: DataType::Real }),
});

impl_column_type!(f64, Double, |a, b| a.total_cmp(b), |value| match value {
    Value::Integer(v) => Ok(f64::from(*v)),
    Value::Real(v) => Ok(f64::from(*v)),
    Value::Double(v) => Ok(*v),
    other => Err(TypeError::CastError { from: other.data_type(), to: DataType::Double }),
});

impl_column_type!(String, Varchar, |a, b| a.cmp(b), |value| match value {
    Value::Varchar(v) => Ok(v.clone()),
    other => Err(TypeError::CastError { from: other.data_type(), to: DataType::Varchar }),
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_exact_and_widening() {
        assert_eq!(i32::from_value(&Value::Integer(4)).unwrap(), 4);
        assert_eq!(i64::from_value(&Value::Integer(4)).unwrap(), 4);
        assert_eq!(i64::from_value(&Value::Bigint(4)).unwrap(), 4);
        assert_eq!(f64::from_value(&Value::Integer(4)).unwrap(), 4.0);
        assert_eq!(f64::from_value(&Value::Real(0.5)).unwrap(), 0.5);
        assert_eq!(
            String::from_value(&Value::Varchar("Steve".to_string())).unwrap(),
            "Steve"
        );
    }

    #[test]
    fn test_from_value_rejects_incompatible_kinds() {
        assert_eq!(
            i32::from_value(&Value::Varchar("4".to_string())).unwrap_err(),
            TypeError::CastError { from: DataType::Varchar, to: DataType::Integer }
        );
        assert_eq!(
            i32::from_value(&Value::Bigint(4)).unwrap_err(),
            TypeError::CastError { from: DataType::Bigint, to: DataType::Integer }
        );
        assert_eq!(
            f32::from_value(&Value::Double(0.5)).unwrap_err(),
            TypeError::CastError { from: DataType::Double, to: DataType::Real }
        );
    }

    #[test]
    fn test_compare_is_a_total_order_on_floats() {
        assert_eq!(1.5f64.compare(&2.5), Ordering::Less);
        assert_eq!(f64::NAN.compare(&f64::NAN), Ordering::Equal);
        // -0.0 and 0.0 are distinct under the total order.
        assert_eq!((-0.0f64).compare(&0.0), Ordering::Less);
    }

    #[test]
    fn test_typed_projection() {
        let column = ValueColumn::Integer(vec![1, 2, 3]);
        assert_eq!(i32::values(&column), Some(&vec![1, 2, 3]));
        assert_eq!(i64::values(&column), None);
    }
}
