// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record classes: named aggregates of property descriptors with an
//! instantiation capability.

use crate::descriptor::PropertyDescriptor;
use crate::error::RecordError;
use crate::record::{DynamicRecord, Record};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Name of the built-in default record type.
pub const DEFAULT_RECORD_TYPE: &str = "dynamic-record";

/// Factory producing a new record bound to the given class.
///
/// A failure is reported by the class as a construction error.
pub type RecordFactory = Arc<
    dyn Fn(Arc<RecordClass>) -> Result<Box<dyn Record>, Box<dyn std::error::Error + Send + Sync>>
        + Send
        + Sync,
>;

#[derive(Clone)]
enum RecordTypeKind {
    Concrete(RecordFactory),
    Abstract,
    Interface,
}

/// A named instance type: the capability a record class uses to construct
/// new records.
///
/// Concrete types carry a factory closure, resolved once when the class is
/// built. Abstract and interface types exist so that misconfigured classes
/// fail the same way the two-stage contract requires: interfaces are
/// rejected when the class is constructed, abstract types pass that check
/// and fail constructor resolution. Equality and hashing are by name.
#[derive(Clone)]
pub struct RecordType {
    name: String,
    kind: RecordTypeKind,
}

impl RecordType {
    /// A concrete record type with the given constructor.
    pub fn concrete(name: impl Into<String>, factory: RecordFactory) -> Self {
        Self {
            name: name.into(),
            kind: RecordTypeKind::Concrete(factory),
        }
    }

    /// A named abstract type. Not constructible.
    pub fn abstract_type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RecordTypeKind::Abstract,
        }
    }

    /// A named interface type. Rejected as an instance type.
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RecordTypeKind::Interface,
        }
    }

    /// The built-in default record type, constructing [`DynamicRecord`].
    pub fn dynamic() -> Self {
        Self::concrete(
            DEFAULT_RECORD_TYPE,
            Arc::new(|class| Ok(Box::new(DynamicRecord::new(class)) as Box<dyn Record>)),
        )
    }

    /// The name of this record type.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, RecordTypeKind::Interface)
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, RecordTypeKind::Abstract)
    }

    pub fn is_concrete(&self) -> bool {
        matches!(self.kind, RecordTypeKind::Concrete(_))
    }

    /// The constructor of this type, if it has one.
    pub fn constructor(&self) -> Option<&RecordFactory> {
        match &self.kind {
            RecordTypeKind::Concrete(factory) => Some(factory),
            _ => None,
        }
    }
}

impl Default for RecordType {
    fn default() -> Self {
        Self::dynamic()
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            RecordTypeKind::Concrete(_) => "concrete",
            RecordTypeKind::Abstract => "abstract",
            RecordTypeKind::Interface => "interface",
        };
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for RecordType {}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A named, immutable aggregate of property descriptors plus the capability
/// to construct records of that class.
///
/// Built once at configuration time and shared (behind an [`Arc`]) by every
/// record it creates. The descriptor sequence keeps duplicates in order,
/// while the name lookup collapses them with the last occurrence winning.
pub struct RecordClass {
    name: String,
    record_type: RecordType,
    descriptors: Vec<Arc<PropertyDescriptor>>,
    lookup: HashMap<String, Arc<PropertyDescriptor>>,
    constructor: RecordFactory,
}

impl RecordClass {
    /// Construct a record class using the default record type.
    pub fn new(
        name: impl Into<String>,
        descriptors: Vec<PropertyDescriptor>,
    ) -> Result<Self, RecordError> {
        Self::with_type(name, descriptors, RecordType::dynamic())
    }

    /// Construct a record class with an explicit instance type.
    ///
    /// The instance type's constructor is resolved eagerly: an interface
    /// type or a type without a matching constructor is rejected here, not
    /// when the first record is built.
    pub fn with_type(
        name: impl Into<String>,
        descriptors: Vec<PropertyDescriptor>,
        record_type: RecordType,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if record_type.is_interface() {
            return Err(RecordError::InterfaceRecordType(
                record_type.name().to_string(),
            ));
        }
        let constructor = record_type
            .constructor()
            .cloned()
            .ok_or_else(|| RecordError::NoMatchingConstructor(record_type.name().to_string()))?;

        let descriptors: Vec<Arc<PropertyDescriptor>> =
            descriptors.into_iter().map(Arc::new).collect();
        let mut lookup = HashMap::with_capacity(descriptors.len());
        for descriptor in &descriptors {
            lookup.insert(descriptor.name().to_string(), Arc::clone(descriptor));
        }
        log::debug!(
            "record class '{}' resolved type '{}' with {} properties",
            name,
            record_type.name(),
            descriptors.len()
        );
        Ok(Self {
            name,
            record_type,
            descriptors,
            lookup,
            constructor,
        })
    }

    /// The name of this record class.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The instance type records of this class are constructed from.
    pub fn record_type(&self) -> &RecordType {
        &self.record_type
    }

    /// Tests whether this class has a property with the given name.
    pub fn has_property(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Gets the descriptor of the property with the given name.
    pub fn property_descriptor(&self, name: &str) -> Option<&Arc<PropertyDescriptor>> {
        self.lookup.get(name)
    }

    /// The descriptors of this class, in declaration order.
    ///
    /// Duplicate names are preserved here even though the name lookup keeps
    /// only the last occurrence.
    pub fn property_descriptors(&self) -> &[Arc<PropertyDescriptor>] {
        &self.descriptors
    }

    /// Construct a new record of this class.
    ///
    /// The returned record holds this class by reference, so
    /// `Arc::ptr_eq(record.record_class(), class)` holds.
    pub fn new_instance(self: &Arc<Self>) -> Result<Box<dyn Record>, RecordError> {
        (self.constructor)(Arc::clone(self)).map_err(|source| RecordError::ConstructionFailed {
            type_name: self.record_type.name().to_string(),
            source,
        })
    }
}

impl fmt::Debug for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordClass")
            .field("name", &self.name)
            .field("record_type", &self.record_type)
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

impl PartialEq for RecordClass {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.record_type == other.record_type
            && self.descriptors == other.descriptors
    }
}

impl Eq for RecordClass {}

impl Hash for RecordClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.record_type.hash(state);
        self.descriptors.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PropertyKind;
    use crate::value::{Value, ValueType};

    fn descriptors() -> Vec<PropertyDescriptor> {
        vec![
            PropertyDescriptor::new("a", ValueType::String).unwrap(),
            PropertyDescriptor::with_kind("b", ValueType::I32, PropertyKind::Indexed).unwrap(),
        ]
    }

    #[test]
    fn test_queries() {
        let class = RecordClass::new("test", descriptors()).unwrap();
        assert_eq!(class.name(), "test");
        assert_eq!(class.record_type().name(), DEFAULT_RECORD_TYPE);
        assert!(class.has_property("a"));
        assert!(class.has_property("b"));
        assert!(!class.has_property("c"));
        assert_eq!(class.property_descriptors().len(), 2);
        assert_eq!(
            class.property_descriptor("b").unwrap().kind(),
            PropertyKind::Indexed
        );
        assert!(class.property_descriptor("c").is_none());
    }

    #[test]
    fn test_empty_class() {
        let class = RecordClass::new("empty", Vec::new()).unwrap();
        assert!(class.property_descriptors().is_empty());
        assert!(!class.has_property("a"));
    }

    #[test]
    fn test_duplicate_names_shadow_lookup_keep_sequence() {
        let class = RecordClass::new(
            "dup",
            vec![
                PropertyDescriptor::new("p", ValueType::String).unwrap(),
                PropertyDescriptor::new("q", ValueType::Bool).unwrap(),
                PropertyDescriptor::new("p", ValueType::I32).unwrap(),
            ],
        )
        .unwrap();
        // raw sequence keeps both occurrences in order
        assert_eq!(class.property_descriptors().len(), 3);
        assert_eq!(class.property_descriptors()[0].value_type(), ValueType::String);
        assert_eq!(class.property_descriptors()[2].value_type(), ValueType::I32);
        // lookup keeps the last occurrence
        assert_eq!(
            class.property_descriptor("p").unwrap().value_type(),
            ValueType::I32
        );
    }

    #[test]
    fn test_interface_type_rejected_at_construction() {
        let err = RecordClass::with_type("test", descriptors(), RecordType::interface("Record"))
            .unwrap_err();
        assert!(matches!(err, RecordError::InterfaceRecordType(name) if name == "Record"));
    }

    #[test]
    fn test_abstract_type_fails_constructor_resolution() {
        let err = RecordClass::with_type(
            "test",
            descriptors(),
            RecordType::abstract_type("AbstractRecord"),
        )
        .unwrap_err();
        assert!(
            matches!(err, RecordError::NoMatchingConstructor(name) if name == "AbstractRecord")
        );
    }

    #[test]
    fn test_new_instance_identity() {
        let class = Arc::new(RecordClass::new("test", descriptors()).unwrap());
        let record = class.new_instance().unwrap();
        assert!(Arc::ptr_eq(record.record_class(), &class));
        assert_eq!(record.get("a").unwrap(), &Value::Null);
    }

    #[test]
    fn test_failing_factory_reports_construction_error() {
        let failing: RecordFactory = Arc::new(|_| Err("boom".into()));
        let class = Arc::new(
            RecordClass::with_type(
                "test",
                Vec::new(),
                RecordType::concrete("failing-record", failing),
            )
            .unwrap(),
        );
        let err = class.new_instance().unwrap_err();
        assert!(
            matches!(err, RecordError::ConstructionFailed { type_name, .. }
                if type_name == "failing-record")
        );
    }

    #[test]
    fn test_custom_concrete_factory() {
        let factory: RecordFactory =
            Arc::new(|class| Ok(Box::new(DynamicRecord::new(class)) as Box<dyn Record>));
        let class = Arc::new(
            RecordClass::with_type("test", descriptors(), RecordType::concrete("my-record", factory))
                .unwrap(),
        );
        let record = class.new_instance().unwrap();
        assert!(record.record_class().has_property("a"));
    }

    #[test]
    fn test_structural_equality() {
        let a = RecordClass::new("test", descriptors()).unwrap();
        let b = RecordClass::new("test", descriptors()).unwrap();
        assert_eq!(a, b);

        let c = RecordClass::new("other", descriptors()).unwrap();
        assert_ne!(a, c);

        let d = RecordClass::new("test", Vec::new()).unwrap();
        assert_ne!(a, d);
    }

    #[test]
    fn test_record_type_equality_is_by_name() {
        assert_eq!(RecordType::dynamic(), RecordType::dynamic());
        assert_eq!(
            RecordType::abstract_type("t"),
            RecordType::abstract_type("t")
        );
        assert_ne!(RecordType::dynamic(), RecordType::interface("other"));
    }
}
