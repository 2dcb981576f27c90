//! Fit-width storage for dictionary value ids.

use basalt_types::ValueId;

use crate::error::StorageError;

/// A sequence of value ids stored at 1, 2 or 4 bytes per entry.
///
/// The width is fixed at construction to the narrowest that fits the
/// dictionary cardinality; the top code of each width is reserved for
/// `INVALID_VALUE_ID` and never indexes a dictionary entry. The raw typed
/// vectors are exposed so scans can compare ids without per-element
/// widening.
#[derive(Debug, Clone)]
pub enum AttributeVector {
    Byte(Vec<u8>),
    Short(Vec<u16>),
    Word(Vec<u32>),
}

impl AttributeVector {
    /// Create a zero-filled vector of `len` entries at the narrowest width
    /// whose id space holds `dictionary_size` entries plus the reserved
    /// sentinel code.
    pub fn for_dictionary(dictionary_size: usize, len: usize) -> Result<Self, StorageError> {
        if dictionary_size < u8::MAX as usize {
            Ok(AttributeVector::Byte(vec![0; len]))
        } else if dictionary_size < u16::MAX as usize {
            Ok(AttributeVector::Short(vec![0; len]))
        } else if dictionary_size < u32::MAX as usize {
            Ok(AttributeVector::Word(vec![0; len]))
        } else {
            Err(StorageError::DictionaryTooLarge { unique_values: dictionary_size })
        }
    }

    /// Get the value id at position `i`.
    pub fn get(&self, i: usize) -> Option<ValueId> {
        match self {
            AttributeVector::Byte(values) => values.get(i).map(|v| ValueId::from(*v)),
            AttributeVector::Short(values) => values.get(i).map(|v| ValueId::from(*v)),
            AttributeVector::Word(values) => values.get(i).copied(),
        }
    }

    /// Store a value id at position `i`. The id is narrowed to the vector's
    /// width; the builder guarantees it fits.
    pub fn set(&mut self, i: usize, value_id: ValueId) -> Result<(), StorageError> {
        match self {
            AttributeVector::Byte(values) => {
                let slot =
                    values.get_mut(i).ok_or(StorageError::RowIndexOutOfBounds { index: i })?;
                *slot = value_id as u8;
            }
            AttributeVector::Short(values) => {
                let slot =
                    values.get_mut(i).ok_or(StorageError::RowIndexOutOfBounds { index: i })?;
                *slot = value_id as u16;
            }
            AttributeVector::Word(values) => {
                let slot =
                    values.get_mut(i).ok_or(StorageError::RowIndexOutOfBounds { index: i })?;
                *slot = value_id;
            }
        }
        Ok(())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            AttributeVector::Byte(values) => values.len(),
            AttributeVector::Short(values) => values.len(),
            AttributeVector::Word(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry width in bytes: 1, 2 or 4.
    pub fn width(&self) -> u8 {
        match self {
            AttributeVector::Byte(_) => 1,
            AttributeVector::Short(_) => 2,
            AttributeVector::Word(_) => 4,
        }
    }
}
