use basalt_types::{DataType, Value};

use super::column_type::ColumnType;
use crate::error::StorageError;

/// Growable column storing its values directly, one typed vector per
/// element kind.
#[derive(Debug, Clone)]
pub enum ValueColumn {
    Integer(Vec<i32>),
    Bigint(Vec<i64>),
    Real(Vec<f32>),
    Double(Vec<f64>),
    Varchar(Vec<String>),
}

impl ValueColumn {
    /// Create an empty column of the given element kind.
    pub fn new(data_type: DataType) -> Self {
        match data_type {
            DataType::Integer => ValueColumn::Integer(Vec::new()),
            DataType::Bigint => ValueColumn::Bigint(Vec::new()),
            DataType::Real => ValueColumn::Real(Vec::new()),
            DataType::Double => ValueColumn::Double(Vec::new()),
            DataType::Varchar => ValueColumn::Varchar(Vec::new()),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            ValueColumn::Integer(values) => values.len(),
            ValueColumn::Bigint(values) => values.len(),
            ValueColumn::Real(values) => values.len(),
            ValueColumn::Double(values) => values.len(),
            ValueColumn::Varchar(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match self {
            ValueColumn::Integer(_) => DataType::Integer,
            ValueColumn::Bigint(_) => DataType::Bigint,
            ValueColumn::Real(_) => DataType::Real,
            ValueColumn::Double(_) => DataType::Double,
            ValueColumn::Varchar(_) => DataType::Varchar,
        }
    }

    /// Cast and append a value. Fails when the value's kind is incompatible
    /// with the column's element kind.
    pub fn append(&mut self, value: &Value) -> Result<(), StorageError> {
        match self {
            ValueColumn::Integer(values) => values.push(i32::from_value(value)?),
            ValueColumn::Bigint(values) => values.push(i64::from_value(value)?),
            ValueColumn::Real(values) => values.push(f32::from_value(value)?),
            ValueColumn::Double(values) => values.push(f64::from_value(value)?),
            ValueColumn::Varchar(values) => values.push(String::from_value(value)?),
        }
        Ok(())
    }

    /// Return the value at a row position.
    pub fn element_at(&self, i: usize) -> Result<Value, StorageError> {
        let out_of_bounds = StorageError::RowIndexOutOfBounds { index: i };
        match self {
            ValueColumn::Integer(values) => {
                values.get(i).map(|v| Value::Integer(*v)).ok_or(out_of_bounds)
            }
            ValueColumn::Bigint(values) => {
                values.get(i).map(|v| Value::Bigint(*v)).ok_or(out_of_bounds)
            }
            ValueColumn::Real(values) => {
                values.get(i).map(|v| Value::Real(*v)).ok_or(out_of_bounds)
            }
            ValueColumn::Double(values) => {
                values.get(i).map(|v| Value::Double(*v)).ok_or(out_of_bounds)
            }
            ValueColumn::Varchar(values) => {
                values.get(i).map(|v| Value::Varchar(v.clone())).ok_or(out_of_bounds)
            }
        }
    }

    /// Typed view of the backing vector, or `None` when `T` does not match
    /// the column's element kind.
    pub fn values<T: ColumnType>(&self) -> Option<&Vec<T>> {
        T::values(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_read() {
        let mut column = ValueColumn::new(DataType::Integer);
        assert!(column.is_empty());

        column.append(&Value::Integer(4)).unwrap();
        column.append(&Value::Integer(7)).unwrap();

        assert_eq!(column.len(), 2);
        assert_eq!(column.element_at(0).unwrap(), Value::Integer(4));
        assert_eq!(column.element_at(1).unwrap(), Value::Integer(7));
        assert_eq!(column.element_at(2).unwrap_err(), StorageError::RowIndexOutOfBounds { index: 2 });
    }

    #[test]
    fn test_append_rejects_wrong_kind() {
        let mut column = ValueColumn::new(DataType::Integer);
        let result = column.append(&Value::Varchar("4".to_string()));
        assert_eq!(
            result.unwrap_err(),
            StorageError::CastError { from: DataType::Varchar, to: DataType::Integer }
        );
        assert!(column.is_empty());
    }

    #[test]
    fn test_append_widens_integers_into_bigint() {
        let mut column = ValueColumn::new(DataType::Bigint);
        column.append(&Value::Integer(4)).unwrap();
        assert_eq!(column.element_at(0).unwrap(), Value::Bigint(4));
    }

    #[test]
    fn test_typed_values_projection() {
        let mut column = ValueColumn::new(DataType::Varchar);
        column.append(&Value::Varchar("Bill".to_string())).unwrap();

        let values: &Vec<String> = column.values().unwrap();
        assert_eq!(values, &vec!["Bill".to_string()]);
        assert!(column.values::<i32>().is_none());
    }
}
