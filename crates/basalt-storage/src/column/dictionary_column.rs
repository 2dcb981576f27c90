use std::cmp::Ordering;

use basalt_types::{with_native_type, DataType, Value, ValueId, INVALID_VALUE_ID};

use super::column_type::ColumnType;
use super::value_column::ValueColumn;
use crate::attribute_vector::AttributeVector;
use crate::error::StorageError;

/// Sorted, deduplicated dictionary payload, one typed vector per element
/// kind. The vector is strictly increasing under [`ColumnType::compare`].
#[derive(Debug, Clone)]
pub enum Dictionary {
    Integer(Vec<i32>),
    Bigint(Vec<i64>),
    Real(Vec<f32>),
    Double(Vec<f64>),
    Varchar(Vec<String>),
}

impl Dictionary {
    /// Number of distinct values.
    pub fn len(&self) -> usize {
        match self {
            Dictionary::Integer(values) => values.len(),
            Dictionary::Bigint(values) => values.len(),
            Dictionary::Real(values) => values.len(),
            Dictionary::Double(values) => values.len(),
            Dictionary::Varchar(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Dictionary::Integer(_) => DataType::Integer,
            Dictionary::Bigint(_) => DataType::Bigint,
            Dictionary::Real(_) => DataType::Real,
            Dictionary::Double(_) => DataType::Double,
            Dictionary::Varchar(_) => DataType::Varchar,
        }
    }

    /// Return the dictionary entry at `index` as a tagged value.
    pub fn value_at(&self, index: usize) -> Option<Value> {
        match self {
            Dictionary::Integer(values) => values.get(index).map(|v| Value::Integer(*v)),
            Dictionary::Bigint(values) => values.get(index).map(|v| Value::Bigint(*v)),
            Dictionary::Real(values) => values.get(index).map(|v| Value::Real(*v)),
            Dictionary::Double(values) => values.get(index).map(|v| Value::Double(*v)),
            Dictionary::Varchar(values) => values.get(index).map(|v| Value::Varchar(v.clone())),
        }
    }
}

/// Immutable column storing each row as an index into a sorted dictionary
/// of its distinct values.
#[derive(Debug, Clone)]
pub struct DictionaryColumn {
    dictionary: Dictionary,
    attribute_vector: AttributeVector,
}

impl DictionaryColumn {
    /// Build a dictionary column from a value column of the same element
    /// kind: deduplicate into a sorted dictionary, pick the narrowest
    /// attribute-vector width that fits, and encode every row by binary
    /// search.
    pub fn compress(column: &ValueColumn) -> Result<Self, StorageError> {
        match column {
            ValueColumn::Integer(values) => Self::compress_typed(values),
            ValueColumn::Bigint(values) => Self::compress_typed(values),
            ValueColumn::Real(values) => Self::compress_typed(values),
            ValueColumn::Double(values) => Self::compress_typed(values),
            ValueColumn::Varchar(values) => Self::compress_typed(values),
        }
    }

    fn compress_typed<T: ColumnType>(values: &[T]) -> Result<Self, StorageError> {
        let mut dictionary: Vec<T> = values.to_vec();
        dictionary.sort_by(|a, b| a.compare(b));
        dictionary.dedup_by(|a, b| a.compare(b) == Ordering::Equal);

        let mut attribute_vector = AttributeVector::for_dictionary(dictionary.len(), values.len())?;
        for (index, value) in values.iter().enumerate() {
            // Every value is present exactly once, so the partition point is
            // its value id.
            let value_id = dictionary.partition_point(|entry| entry.compare(value) == Ordering::Less);
            attribute_vector.set(index, value_id as ValueId)?;
        }

        Ok(DictionaryColumn { dictionary: T::into_dictionary(dictionary), attribute_vector })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.attribute_vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> DataType {
        self.dictionary.data_type()
    }

    /// Immutable view of the sorted distinct values.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Read-only handle to the per-row value ids.
    pub fn attribute_vector(&self) -> &AttributeVector {
        &self.attribute_vector
    }

    /// Number of dictionary entries.
    pub fn unique_values_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Return the value represented by a value id. Fails on out-of-range
    /// ids, including `INVALID_VALUE_ID`.
    pub fn value_by_value_id(&self, value_id: ValueId) -> Result<Value, StorageError> {
        self.dictionary
            .value_at(value_id as usize)
            .ok_or(StorageError::ValueIdOutOfBounds { value_id })
    }

    /// Typed decode of the value at a row position. One id lookup plus one
    /// dictionary access per call; scans stay on the attribute vector
    /// instead.
    pub fn get<T: ColumnType>(&self, i: usize) -> Result<T, StorageError> {
        let value_id = self
            .attribute_vector
            .get(i)
            .ok_or(StorageError::RowIndexOutOfBounds { index: i })?;
        let dictionary = self.typed_dictionary::<T>()?;
        dictionary
            .get(value_id as usize)
            .cloned()
            .ok_or(StorageError::ValueIdOutOfBounds { value_id })
    }

    /// Return the value at a row position as a tagged value.
    pub fn element_at(&self, i: usize) -> Result<Value, StorageError> {
        let value_id = self
            .attribute_vector
            .get(i)
            .ok_or(StorageError::RowIndexOutOfBounds { index: i })?;
        self.value_by_value_id(value_id)
    }

    /// Smallest value id whose value is `>= value`, or `INVALID_VALUE_ID`
    /// if every dictionary entry is smaller.
    pub fn lower_bound<T: ColumnType>(&self, value: &T) -> Result<ValueId, StorageError> {
        let dictionary = self.typed_dictionary::<T>()?;
        let index = dictionary.partition_point(|entry| entry.compare(value) == Ordering::Less);
        if index == dictionary.len() {
            Ok(INVALID_VALUE_ID)
        } else {
            Ok(index as ValueId)
        }
    }

    /// Smallest value id whose value is `> value`, or `INVALID_VALUE_ID`
    /// if every dictionary entry is smaller or equal.
    pub fn upper_bound<T: ColumnType>(&self, value: &T) -> Result<ValueId, StorageError> {
        let dictionary = self.typed_dictionary::<T>()?;
        let index = dictionary.partition_point(|entry| entry.compare(value) != Ordering::Greater);
        if index == dictionary.len() {
            Ok(INVALID_VALUE_ID)
        } else {
            Ok(index as ValueId)
        }
    }

    /// Same as [`Self::lower_bound`], but accepts a tagged value.
    pub fn lower_bound_value(&self, value: &Value) -> Result<ValueId, StorageError> {
        with_native_type!(self.data_type(), |T| {
            let typed = T::from_value(value)?;
            self.lower_bound(&typed)
        })
    }

    /// Same as [`Self::upper_bound`], but accepts a tagged value.
    pub fn upper_bound_value(&self, value: &Value) -> Result<ValueId, StorageError> {
        with_native_type!(self.data_type(), |T| {
            let typed = T::from_value(value)?;
            self.upper_bound(&typed)
        })
    }

    fn typed_dictionary<T: ColumnType>(&self) -> Result<&Vec<T>, StorageError> {
        T::dictionary(&self.dictionary)
            .ok_or(StorageError::CastError { from: self.data_type(), to: T::DATA_TYPE })
    }
}
