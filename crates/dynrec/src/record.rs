// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Records: name-indexed instances of a record class.

use crate::class::RecordClass;
use crate::error::RecordError;
use crate::property::Property;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The contract of a record instance: one property per descriptor of its
/// class, addressed by property name.
///
/// Every accessor first resolves the name to a property, failing with
/// [`RecordError::PropertyNotExist`] when absent, then delegates to the
/// matching [`Property`] operation, which enforces kind and type rules.
pub trait Record: fmt::Debug {
    /// The class this record was constructed from.
    fn record_class(&self) -> &Arc<RecordClass>;

    /// The property with the given name, or `None` if absent.
    fn property(&self, name: &str) -> Option<&Property>;

    /// Mutable access to the property with the given name.
    fn property_mut(&mut self, name: &str) -> Option<&mut Property>;

    /// The property with the given name, or a property-not-exists error.
    fn require_property(&self, name: &str) -> Result<&Property, RecordError> {
        self.property(name)
            .ok_or_else(|| RecordError::PropertyNotExist(name.to_string()))
    }

    /// Mutable variant of [`Record::require_property`].
    fn require_property_mut(&mut self, name: &str) -> Result<&mut Property, RecordError> {
        self.property_mut(name)
            .ok_or_else(|| RecordError::PropertyNotExist(name.to_string()))
    }

    /// Get the value of a simple property.
    fn get(&self, name: &str) -> Result<&Value, RecordError> {
        self.require_property(name)?.simple_value()
    }

    /// Set the value of a simple property.
    fn set(&mut self, name: &str, value: Value) -> Result<(), RecordError> {
        self.require_property_mut(name)?.set_simple_value(value)
    }

    /// Get the element at `index` of an indexed property.
    fn get_at(&self, name: &str, index: usize) -> Result<&Value, RecordError> {
        self.require_property(name)?.get_element(index)
    }

    /// Replace the element at `index` of an indexed property.
    fn set_at(&mut self, name: &str, index: usize, value: Value) -> Result<(), RecordError> {
        self.require_property_mut(name)?.set_element(index, value)
    }

    /// Insert a value at `index` of an indexed property.
    fn insert_at(&mut self, name: &str, index: usize, value: Value) -> Result<(), RecordError> {
        self.require_property_mut(name)?.insert_element(index, value)
    }

    /// Append a value to an indexed property.
    fn append(&mut self, name: &str, value: Value) -> Result<(), RecordError> {
        self.require_property_mut(name)?.push_element(value)
    }

    /// Remove and return the element at `index` of an indexed property.
    fn remove_at(&mut self, name: &str, index: usize) -> Result<Value, RecordError> {
        self.require_property_mut(name)?.remove_element(index)
    }

    /// The keys of a mapped property.
    fn keys(&self, name: &str) -> Result<Vec<String>, RecordError> {
        let keys = self.require_property(name)?.keys()?;
        Ok(keys.into_iter().map(str::to_string).collect())
    }

    /// Tests whether a mapped property contains `key`.
    fn contains_key(&self, name: &str, key: &str) -> Result<bool, RecordError> {
        self.require_property(name)?.contains_key(key)
    }

    /// Get the value under `key` of a mapped property.
    fn get_key(&self, name: &str, key: &str) -> Result<Option<&Value>, RecordError> {
        self.require_property(name)?.get_entry(key)
    }

    /// Set the value under `key` of a mapped property.
    fn set_key(&mut self, name: &str, key: &str, value: Value) -> Result<(), RecordError> {
        self.require_property_mut(name)?.set_entry(key, value)
    }

    /// Remove and return the value under `key` of a mapped property.
    fn remove_key(&mut self, name: &str, key: &str) -> Result<Option<Value>, RecordError> {
        self.require_property_mut(name)?.remove_entry(key)
    }

    /// The number of values in an indexed or mapped property.
    fn size(&self, name: &str) -> Result<usize, RecordError> {
        self.require_property(name)?.size()
    }

    /// Remove every value of an indexed or mapped property.
    fn clear(&mut self, name: &str) -> Result<(), RecordError> {
        self.require_property_mut(name)?.clear()
    }
}

/// The default record implementation.
///
/// Materializes one property per descriptor at construction; the property
/// set never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicRecord {
    class: Arc<RecordClass>,
    properties: HashMap<String, Property>,
}

impl DynamicRecord {
    /// Construct a record of the given class, all properties empty.
    pub fn new(class: Arc<RecordClass>) -> Self {
        let mut properties = HashMap::with_capacity(class.property_descriptors().len());
        for descriptor in class.property_descriptors() {
            let property = Property::new(Arc::clone(descriptor));
            properties.insert(property.name().to_string(), property);
        }
        Self { class, properties }
    }
}

impl Record for DynamicRecord {
    fn record_class(&self) -> &Arc<RecordClass> {
        &self.class
    }

    fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties.get_mut(name)
    }
}
