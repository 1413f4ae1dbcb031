// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The kind- and type-enforcing property container.

use crate::descriptor::{PropertyDescriptor, PropertyKind};
use crate::error::RecordError;
use crate::value::{Value, ValueType};
use std::collections::HashMap;
use std::sync::Arc;

/// The backing value of a property, shaped by its kind.
///
/// The shape always matches the descriptor's kind; `set_raw_value` rejects
/// a value of the wrong shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A single scalar value; `Value::Null` is the empty state.
    Simple(Value),
    /// An ordered, resizable sequence.
    Indexed(Vec<Value>),
    /// A mapping with unique string keys.
    Mapped(HashMap<String, Value>),
}

impl PropertyValue {
    /// The kind this shape corresponds to.
    pub fn kind(&self) -> PropertyKind {
        match self {
            Self::Simple(_) => PropertyKind::Simple,
            Self::Indexed(_) => PropertyKind::Indexed,
            Self::Mapped(_) => PropertyKind::Mapped,
        }
    }

    /// The empty state for a kind.
    pub fn empty(kind: PropertyKind) -> Self {
        match kind {
            PropertyKind::Simple => Self::Simple(Value::Null),
            PropertyKind::Indexed => Self::Indexed(Vec::new()),
            PropertyKind::Mapped => Self::Mapped(HashMap::new()),
        }
    }
}

/// A mutable container bound to one descriptor.
///
/// Every mutating operation checks the property's kind and the written
/// value's type before touching the stored value, so a failed call leaves
/// the property unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    descriptor: Arc<PropertyDescriptor>,
    value: PropertyValue,
}

impl Property {
    /// Construct a property in its kind's empty state.
    pub fn new(descriptor: Arc<PropertyDescriptor>) -> Self {
        let value = PropertyValue::empty(descriptor.kind());
        Self { descriptor, value }
    }

    /// The name of this property.
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// The kind of this property.
    pub fn kind(&self) -> PropertyKind {
        self.descriptor.kind()
    }

    /// The declared type of values stored in this property.
    pub fn value_type(&self) -> ValueType {
        self.descriptor.value_type()
    }

    /// The descriptor this property is bound to.
    pub fn descriptor(&self) -> &Arc<PropertyDescriptor> {
        &self.descriptor
    }

    fn check_kind(&self, expected: &'static [PropertyKind]) -> Result<(), RecordError> {
        let actual = self.descriptor.kind();
        if expected.contains(&actual) {
            return Ok(());
        }
        Err(RecordError::InvalidKind {
            property: self.descriptor.name().to_string(),
            actual,
            expected,
        })
    }

    fn check_type(&self, value: &Value) -> Result<(), RecordError> {
        let ty = self.descriptor.value_type();
        if ty.accepts(value) {
            return Ok(());
        }
        Err(RecordError::TypeMismatch {
            expected: ty.canonical_name().to_string(),
            got: value.type_name().to_string(),
        })
    }

    fn check_types<'a>(&self, values: impl Iterator<Item = &'a Value>) -> Result<(), RecordError> {
        for value in values {
            self.check_type(value)?;
        }
        Ok(())
    }

    // Panics are unreachable: check_kind guarantees the matching shape.
    fn sequence(&self) -> &Vec<Value> {
        match &self.value {
            PropertyValue::Indexed(seq) => seq,
            _ => unreachable!("indexed property holds a sequence"),
        }
    }

    fn sequence_mut(&mut self) -> &mut Vec<Value> {
        match &mut self.value {
            PropertyValue::Indexed(seq) => seq,
            _ => unreachable!("indexed property holds a sequence"),
        }
    }

    fn mapping(&self) -> &HashMap<String, Value> {
        match &self.value {
            PropertyValue::Mapped(map) => map,
            _ => unreachable!("mapped property holds a mapping"),
        }
    }

    fn mapping_mut(&mut self) -> &mut HashMap<String, Value> {
        match &mut self.value {
            PropertyValue::Mapped(map) => map,
            _ => unreachable!("mapped property holds a mapping"),
        }
    }

    fn check_index(&self, index: usize, bound: usize) -> Result<(), RecordError> {
        if index >= bound {
            return Err(RecordError::OutOfRange {
                index,
                size: self.sequence().len(),
            });
        }
        Ok(())
    }

    /// Get the value of this simple property.
    pub fn simple_value(&self) -> Result<&Value, RecordError> {
        self.check_kind(&[PropertyKind::Simple])?;
        match &self.value {
            PropertyValue::Simple(value) => Ok(value),
            _ => unreachable!("simple property holds a scalar"),
        }
    }

    /// Set the value of this simple property.
    ///
    /// Null is rejected when the declared type is a primitive.
    pub fn set_simple_value(&mut self, value: Value) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Simple])?;
        if value.is_null() && self.descriptor.value_type().is_primitive() {
            return Err(RecordError::NullNotAllowed(
                self.descriptor.name().to_string(),
            ));
        }
        self.check_type(&value)?;
        self.value = PropertyValue::Simple(value);
        Ok(())
    }

    /// Get the whole sequence of this indexed property.
    pub fn indexed_value(&self) -> Result<&[Value], RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        Ok(self.sequence())
    }

    /// Replace the whole sequence of this indexed property.
    ///
    /// Every element is type-checked before the sequence is replaced.
    pub fn set_indexed_value(&mut self, values: Vec<Value>) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        self.check_types(values.iter())?;
        self.value = PropertyValue::Indexed(values);
        Ok(())
    }

    /// Get the element at `index`.
    pub fn get_element(&self, index: usize) -> Result<&Value, RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        self.check_index(index, self.sequence().len())?;
        Ok(&self.sequence()[index])
    }

    /// Replace the element at `index`.
    pub fn set_element(&mut self, index: usize, value: Value) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        self.check_type(&value)?;
        self.check_index(index, self.sequence().len())?;
        self.sequence_mut()[index] = value;
        Ok(())
    }

    /// Insert a value at `index`, shifting subsequent elements right.
    ///
    /// `index` may equal the current size, in which case this appends.
    pub fn insert_element(&mut self, index: usize, value: Value) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        self.check_type(&value)?;
        self.check_index(index, self.sequence().len() + 1)?;
        self.sequence_mut().insert(index, value);
        Ok(())
    }

    /// Append a value to the end of the sequence.
    pub fn push_element(&mut self, value: Value) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        self.check_type(&value)?;
        self.sequence_mut().push(value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting subsequent
    /// elements left.
    pub fn remove_element(&mut self, index: usize) -> Result<Value, RecordError> {
        self.check_kind(&[PropertyKind::Indexed])?;
        self.check_index(index, self.sequence().len())?;
        Ok(self.sequence_mut().remove(index))
    }

    /// Get the whole mapping of this mapped property.
    pub fn mapped_value(&self) -> Result<&HashMap<String, Value>, RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        Ok(self.mapping())
    }

    /// Replace the whole mapping of this mapped property.
    ///
    /// Every entry value is type-checked before the mapping is replaced.
    pub fn set_mapped_value(&mut self, map: HashMap<String, Value>) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        self.check_types(map.values())?;
        self.value = PropertyValue::Mapped(map);
        Ok(())
    }

    /// Get the value under `key`, or `None` if the key is absent.
    pub fn get_entry(&self, key: &str) -> Result<Option<&Value>, RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        Ok(self.mapping().get(key))
    }

    /// Set the value under `key`.
    pub fn set_entry(&mut self, key: impl Into<String>, value: Value) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        self.check_type(&value)?;
        self.mapping_mut().insert(key.into(), value);
        Ok(())
    }

    /// Tests whether the mapping contains `key`.
    pub fn contains_key(&self, key: &str) -> Result<bool, RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        Ok(self.mapping().contains_key(key))
    }

    /// The keys of the mapping, in no particular order.
    pub fn keys(&self) -> Result<Vec<&str>, RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        Ok(self.mapping().keys().map(String::as_str).collect())
    }

    /// Remove and return the value under `key`, or `None` if absent.
    pub fn remove_entry(&mut self, key: &str) -> Result<Option<Value>, RecordError> {
        self.check_kind(&[PropertyKind::Mapped])?;
        Ok(self.mapping_mut().remove(key))
    }

    /// The number of values in this indexed or mapped property.
    pub fn size(&self) -> Result<usize, RecordError> {
        self.check_kind(&[PropertyKind::Indexed, PropertyKind::Mapped])?;
        Ok(match &self.value {
            PropertyValue::Indexed(seq) => seq.len(),
            PropertyValue::Mapped(map) => map.len(),
            PropertyValue::Simple(_) => unreachable!(),
        })
    }

    /// Remove every value of this indexed or mapped property.
    pub fn clear(&mut self) -> Result<(), RecordError> {
        self.check_kind(&[PropertyKind::Indexed, PropertyKind::Mapped])?;
        match &mut self.value {
            PropertyValue::Indexed(seq) => seq.clear(),
            PropertyValue::Mapped(map) => map.clear(),
            PropertyValue::Simple(_) => unreachable!(),
        }
        Ok(())
    }

    /// Untyped access to the whole backing value.
    pub fn raw_value(&self) -> &PropertyValue {
        &self.value
    }

    /// Replace the whole backing value without element type checks.
    ///
    /// The incoming shape must match the property's kind.
    pub fn set_raw_value(&mut self, value: PropertyValue) -> Result<(), RecordError> {
        let kind = self.descriptor.kind();
        if value.kind() != kind {
            return Err(RecordError::TypeMismatch {
                expected: format!("{kind} value"),
                got: format!("{} value", value.kind()),
            });
        }
        self.value = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(ty: ValueType) -> Property {
        Property::new(Arc::new(PropertyDescriptor::new("prop", ty).unwrap()))
    }

    fn indexed(ty: ValueType) -> Property {
        Property::new(Arc::new(
            PropertyDescriptor::with_kind("prop", ty, PropertyKind::Indexed).unwrap(),
        ))
    }

    fn mapped(ty: ValueType) -> Property {
        Property::new(Arc::new(
            PropertyDescriptor::with_kind("prop", ty, PropertyKind::Mapped).unwrap(),
        ))
    }

    #[test]
    fn test_empty_states() {
        assert_eq!(simple(ValueType::String).simple_value().unwrap(), &Value::Null);
        assert!(indexed(ValueType::I32).indexed_value().unwrap().is_empty());
        assert!(mapped(ValueType::I32).mapped_value().unwrap().is_empty());
    }

    #[test]
    fn test_simple_set_get() {
        let mut prop = simple(ValueType::String);
        prop.set_simple_value("hello".into()).unwrap();
        assert_eq!(prop.simple_value().unwrap().as_str(), Some("hello"));

        // nullable type accepts null again
        prop.set_simple_value(Value::Null).unwrap();
        assert!(prop.simple_value().unwrap().is_null());
    }

    #[test]
    fn test_simple_type_mismatch() {
        let mut prop = simple(ValueType::I32);
        prop.set_simple_value(1i32.into()).unwrap();
        let err = prop.set_simple_value("x".into()).unwrap_err();
        assert!(matches!(err, RecordError::TypeMismatch { .. }));
        // failed call left the value unchanged
        assert_eq!(prop.simple_value().unwrap().as_i32(), Some(1));
    }

    #[test]
    fn test_simple_primitive_rejects_null() {
        let mut prop = simple(ValueType::I32);
        let err = prop.set_simple_value(Value::Null).unwrap_err();
        assert!(matches!(err, RecordError::NullNotAllowed(name) if name == "prop"));
    }

    #[test]
    fn test_any_accepts_everything() {
        let mut prop = simple(ValueType::Any);
        prop.set_simple_value(true.into()).unwrap();
        prop.set_simple_value(3.5f64.into()).unwrap();
        prop.set_simple_value("x".into()).unwrap();
    }

    #[test]
    fn test_kind_gating() {
        let mut prop = simple(ValueType::I32);
        let err = prop.push_element(1i32.into()).unwrap_err();
        match err {
            RecordError::InvalidKind {
                property,
                actual,
                expected,
            } => {
                assert_eq!(property, "prop");
                assert_eq!(actual, PropertyKind::Simple);
                assert_eq!(expected, &[PropertyKind::Indexed]);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            indexed(ValueType::I32).simple_value(),
            Err(RecordError::InvalidKind { .. })
        ));
        assert!(matches!(
            mapped(ValueType::I32).indexed_value(),
            Err(RecordError::InvalidKind { .. })
        ));
        assert!(matches!(
            simple(ValueType::I32).size(),
            Err(RecordError::InvalidKind { .. })
        ));
    }

    #[test]
    fn test_indexed_operations() {
        let mut prop = indexed(ValueType::I32);
        prop.push_element(1i32.into()).unwrap();
        prop.insert_element(0, 2i32.into()).unwrap();
        assert_eq!(
            prop.indexed_value().unwrap(),
            &[Value::I32(2), Value::I32(1)]
        );

        prop.set_element(1, 3i32.into()).unwrap();
        assert_eq!(prop.get_element(1).unwrap().as_i32(), Some(3));
        assert_eq!(prop.size().unwrap(), 2);

        let removed = prop.remove_element(0).unwrap();
        assert_eq!(removed.as_i32(), Some(2));
        assert_eq!(prop.indexed_value().unwrap(), &[Value::I32(3)]);
    }

    #[test]
    fn test_indexed_append_at_size() {
        let mut prop = indexed(ValueType::I32);
        prop.insert_element(0, 1i32.into()).unwrap();
        prop.insert_element(1, 2i32.into()).unwrap();
        assert_eq!(prop.size().unwrap(), 2);
    }

    #[test]
    fn test_indexed_type_mismatch_leaves_sequence_unchanged() {
        let mut prop = indexed(ValueType::I32);
        prop.push_element(1i32.into()).unwrap();
        assert!(matches!(
            prop.push_element("x".into()),
            Err(RecordError::TypeMismatch { .. })
        ));
        assert!(matches!(
            prop.set_element(0, "x".into()),
            Err(RecordError::TypeMismatch { .. })
        ));
        assert!(matches!(
            prop.set_indexed_value(vec![1i32.into(), "x".into()]),
            Err(RecordError::TypeMismatch { .. })
        ));
        assert_eq!(prop.indexed_value().unwrap(), &[Value::I32(1)]);
    }

    #[test]
    fn test_indexed_out_of_range() {
        let mut prop = indexed(ValueType::I32);
        prop.push_element(1i32.into()).unwrap();

        let err = prop.get_element(1).unwrap_err();
        assert!(matches!(err, RecordError::OutOfRange { index: 1, size: 1 }));
        assert!(matches!(
            prop.set_element(1, 2i32.into()),
            Err(RecordError::OutOfRange { .. })
        ));
        assert!(matches!(
            prop.insert_element(2, 2i32.into()),
            Err(RecordError::OutOfRange { .. })
        ));
        assert!(matches!(
            prop.remove_element(1),
            Err(RecordError::OutOfRange { .. })
        ));
        assert_eq!(prop.indexed_value().unwrap(), &[Value::I32(1)]);
    }

    #[test]
    fn test_indexed_null_elements_allowed() {
        let mut prop = indexed(ValueType::I32);
        prop.push_element(Value::Null).unwrap();
        prop.set_indexed_value(vec![Value::Null, 1i32.into()]).unwrap();
        assert_eq!(prop.size().unwrap(), 2);
    }

    #[test]
    fn test_mapped_operations() {
        let mut prop = mapped(ValueType::String);
        prop.set_entry("k", "v".into()).unwrap();
        assert!(prop.contains_key("k").unwrap());
        assert_eq!(prop.keys().unwrap(), vec!["k"]);
        assert_eq!(prop.get_entry("k").unwrap().unwrap().as_str(), Some("v"));
        assert_eq!(prop.get_entry("missing").unwrap(), None);

        let removed = prop.remove_entry("k").unwrap();
        assert_eq!(removed, Some(Value::String("v".into())));
        assert!(!prop.contains_key("k").unwrap());
        assert_eq!(prop.remove_entry("k").unwrap(), None);
    }

    #[test]
    fn test_mapped_type_mismatch_leaves_mapping_unchanged() {
        let mut prop = mapped(ValueType::I32);
        prop.set_entry("a", 1i32.into()).unwrap();
        assert!(matches!(
            prop.set_entry("b", "x".into()),
            Err(RecordError::TypeMismatch { .. })
        ));
        let mut bad = HashMap::new();
        bad.insert("c".to_string(), Value::String("x".into()));
        assert!(matches!(
            prop.set_mapped_value(bad),
            Err(RecordError::TypeMismatch { .. })
        ));
        assert_eq!(prop.size().unwrap(), 1);
        assert!(prop.contains_key("a").unwrap());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut prop = indexed(ValueType::I32);
        prop.clear().unwrap();
        assert_eq!(prop.size().unwrap(), 0);
        prop.clear().unwrap();
        assert_eq!(prop.size().unwrap(), 0);

        let mut prop = mapped(ValueType::I32);
        prop.clear().unwrap();
        prop.clear().unwrap();
        assert_eq!(prop.size().unwrap(), 0);
    }

    #[test]
    fn test_raw_value_shape_check() {
        let mut prop = indexed(ValueType::I32);
        prop.set_raw_value(PropertyValue::Indexed(vec![1i32.into()]))
            .unwrap();
        assert_eq!(prop.size().unwrap(), 1);

        let err = prop
            .set_raw_value(PropertyValue::Simple(Value::Null))
            .unwrap_err();
        assert!(matches!(err, RecordError::TypeMismatch { .. }));
        assert_eq!(prop.size().unwrap(), 1);

        let mut prop = simple(ValueType::String);
        assert!(prop
            .set_raw_value(PropertyValue::Mapped(HashMap::new()))
            .is_err());
        prop.set_raw_value(PropertyValue::Simple("x".into())).unwrap();
        assert_eq!(prop.simple_value().unwrap().as_str(), Some("x"));
    }
}
