use crate::{with_native_type, DataType, RowId, Value, INVALID_VALUE_ID};

#[test]
fn test_value_data_type() {
    assert_eq!(Value::Integer(1).data_type(), DataType::Integer);
    assert_eq!(Value::Bigint(1).data_type(), DataType::Bigint);
    assert_eq!(Value::Real(1.0).data_type(), DataType::Real);
    assert_eq!(Value::Double(1.0).data_type(), DataType::Double);
    assert_eq!(Value::Varchar("a".to_string()).data_type(), DataType::Varchar);
}

#[test]
fn test_value_compatibility() {
    // Exact matches
    assert!(Value::Integer(1).is_compatible_with(DataType::Integer));
    assert!(Value::Varchar("a".to_string()).is_compatible_with(DataType::Varchar));

    // Widening
    assert!(Value::Integer(1).is_compatible_with(DataType::Bigint));
    assert!(Value::Integer(1).is_compatible_with(DataType::Double));
    assert!(Value::Real(1.0).is_compatible_with(DataType::Double));

    // Rejected conversions
    assert!(!Value::Bigint(1).is_compatible_with(DataType::Integer));
    assert!(!Value::Double(1.0).is_compatible_with(DataType::Real));
    assert!(!Value::Varchar("1".to_string()).is_compatible_with(DataType::Integer));
    assert!(!Value::Integer(1).is_compatible_with(DataType::Varchar));
}

#[test]
fn test_value_from_conversions() {
    assert_eq!(Value::from(4), Value::Integer(4));
    assert_eq!(Value::from(4i64), Value::Bigint(4));
    assert_eq!(Value::from("Hello"), Value::Varchar("Hello".to_string()));
    assert_eq!(Value::from(2.5f64), Value::Double(2.5));
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Integer(42).to_string(), "42");
    assert_eq!(Value::Varchar("Bill".to_string()).to_string(), "Bill");
}

#[test]
fn test_data_type_display() {
    assert_eq!(DataType::Integer.to_string(), "int");
    assert_eq!(DataType::Bigint.to_string(), "long");
    assert_eq!(DataType::Real.to_string(), "float");
    assert_eq!(DataType::Double.to_string(), "double");
    assert_eq!(DataType::Varchar.to_string(), "string");
}

#[test]
fn test_row_id_equality() {
    assert_eq!(RowId::new(0, 3), RowId::new(0, 3));
    assert_ne!(RowId::new(0, 3), RowId::new(1, 3));
    assert_ne!(RowId::new(0, 3), RowId::new(0, 4));
}

#[test]
fn test_invalid_value_id_survives_narrowing() {
    // The sentinel is the top code at every attribute-vector width.
    assert_eq!(INVALID_VALUE_ID as u8, u8::MAX);
    assert_eq!(INVALID_VALUE_ID as u16, u16::MAX);
}

#[test]
fn test_with_native_type_resolution() {
    fn native_name(data_type: DataType) -> &'static str {
        with_native_type!(data_type, |T| { std::any::type_name::<T>() })
    }

    assert_eq!(native_name(DataType::Integer), "i32");
    assert_eq!(native_name(DataType::Bigint), "i64");
    assert_eq!(native_name(DataType::Real), "f32");
    assert_eq!(native_name(DataType::Double), "f64");
    assert_eq!(native_name(DataType::Varchar), "alloc::string::String");
}
