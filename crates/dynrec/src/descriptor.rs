// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Property descriptors: immutable metadata for one named property.

use crate::error::RecordError;
use crate::value::ValueType;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// The kind of a property: how its value is shaped and accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyKind {
    /// A single scalar value.
    #[default]
    Simple,
    /// An ordered sequence of values, accessed by integer position.
    Indexed,
    /// A key-to-value mapping, accessed by string key.
    Mapped,
}

impl PropertyKind {
    /// Parse the lowercase kind name used by the codec.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "simple" => Some(Self::Simple),
            "indexed" => Some(Self::Indexed),
            "mapped" => Some(Self::Mapped),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Simple => "simple",
            Self::Indexed => "indexed",
            Self::Mapped => "mapped",
        })
    }
}

/// Immutable metadata describing one property: name, value type and kind.
///
/// Descriptors are created once and shared by reference across every record
/// built from the same class. Equality is structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyDescriptor {
    name: String,
    value_type: ValueType,
    kind: PropertyKind,
}

impl PropertyDescriptor {
    /// Construct a simple property descriptor.
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Result<Self, RecordError> {
        Self::with_kind(name, value_type, PropertyKind::Simple)
    }

    /// Construct a property descriptor of the given kind.
    pub fn with_kind(
        name: impl Into<String>,
        value_type: ValueType,
        kind: PropertyKind,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(RecordError::InvalidPropertyName(name));
        }
        Ok(Self {
            name,
            value_type,
            kind,
        })
    }

    /// Tests whether a name is a valid property name.
    ///
    /// A valid name starts with an ASCII alphabetic character or an
    /// underscore, followed by zero or more alphabetic characters, digits,
    /// underscores, or hyphens:
    ///
    /// ```text
    /// name ::= [A-Za-z_][A-Za-z_0-9-]*
    /// ```
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    /// The name of this property.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type of values stored in this property.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// The kind of this property.
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Tests whether this is a simple property.
    pub fn is_simple(&self) -> bool {
        self.kind == PropertyKind::Simple
    }

    /// Tests whether this is an indexed property.
    pub fn is_indexed(&self) -> bool {
        self.kind == PropertyKind::Indexed
    }

    /// Tests whether this is a mapped property.
    pub fn is_mapped(&self) -> bool {
        self.kind == PropertyKind::Mapped
    }
}

/// A name-keyed collection of property descriptors.
#[derive(Debug, Clone, Default)]
pub struct DescriptorMap {
    map: HashMap<String, Arc<PropertyDescriptor>>,
}

impl DescriptorMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Tests whether the map contains a descriptor with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Gets the descriptor with the given name.
    pub fn get(&self, name: &str) -> Option<&Arc<PropertyDescriptor>> {
        self.map.get(name)
    }

    /// Adds a descriptor, replacing any earlier entry with the same name.
    pub fn add(&mut self, descriptor: Arc<PropertyDescriptor>) {
        self.map.insert(descriptor.name().to_string(), descriptor);
    }

    /// Adds a simple descriptor built from a name and value type.
    pub fn add_simple(
        &mut self,
        name: impl Into<String>,
        value_type: ValueType,
    ) -> Result<(), RecordError> {
        self.add(Arc::new(PropertyDescriptor::new(name, value_type)?));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["a", "abc", "_prop2", "prop-3", "prop_4", "A1-b_2", "_"] {
            assert!(PropertyDescriptor::is_valid_name(name), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "1abc", "-abc", "a.b", "a b", "a%b", "pr\u{e9}nom"] {
            assert!(!PropertyDescriptor::is_valid_name(name), "{name:?}");
        }
    }

    #[test]
    fn test_construction_rejects_invalid_name() {
        let err = PropertyDescriptor::new("9lives", ValueType::String).unwrap_err();
        assert!(matches!(err, RecordError::InvalidPropertyName(name) if name == "9lives"));

        assert!(PropertyDescriptor::new("", ValueType::String).is_err());
    }

    #[test]
    fn test_default_kind_is_simple() {
        let desc = PropertyDescriptor::new("prop1", ValueType::String).unwrap();
        assert_eq!(desc.kind(), PropertyKind::Simple);
        assert!(desc.is_simple());
        assert!(!desc.is_indexed());
        assert!(!desc.is_mapped());
    }

    #[test]
    fn test_structural_equality() {
        let a = PropertyDescriptor::with_kind("p", ValueType::I32, PropertyKind::Indexed).unwrap();
        let b = PropertyDescriptor::with_kind("p", ValueType::I32, PropertyKind::Indexed).unwrap();
        let c = PropertyDescriptor::with_kind("p", ValueType::I32, PropertyKind::Mapped).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_kind_name_round_trip() {
        for kind in [
            PropertyKind::Simple,
            PropertyKind::Indexed,
            PropertyKind::Mapped,
        ] {
            assert_eq!(PropertyKind::parse(&kind.to_string()), Some(kind));
        }
        assert_eq!(PropertyKind::parse("SIMPLE"), None);
    }

    #[test]
    fn test_descriptor_map() {
        let mut map = DescriptorMap::new();
        assert!(map.is_empty());

        map.add_simple("age", ValueType::I32).unwrap();
        map.add(Arc::new(
            PropertyDescriptor::with_kind("tags", ValueType::String, PropertyKind::Indexed)
                .unwrap(),
        ));
        assert_eq!(map.len(), 2);
        assert!(map.contains("age"));
        assert_eq!(map.get("age").unwrap().value_type(), ValueType::I32);

        // same name replaces the earlier entry
        map.add_simple("age", ValueType::I64).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("age").unwrap().value_type(), ValueType::I64);
    }
}
