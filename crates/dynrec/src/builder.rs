// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for record classes.

use crate::class::{RecordClass, RecordType};
use crate::descriptor::{PropertyDescriptor, PropertyKind};
use crate::error::RecordError;
use crate::value::ValueType;

/// Builder for creating [`RecordClass`] instances.
///
/// Name validation happens in [`RecordClassBuilder::build`], so the fluent
/// chain stays unwrapped.
#[derive(Debug)]
pub struct RecordClassBuilder {
    name: String,
    record_type: RecordType,
    properties: Vec<(String, ValueType, PropertyKind)>,
}

impl RecordClassBuilder {
    /// Create a new builder for a record class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type: RecordType::dynamic(),
            properties: Vec::new(),
        }
    }

    /// Add a simple property.
    pub fn property(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.properties.push((name.into(), ty, PropertyKind::Simple));
        self
    }

    /// Add an indexed property.
    pub fn indexed(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.properties
            .push((name.into(), ty, PropertyKind::Indexed));
        self
    }

    /// Add a mapped property.
    pub fn mapped(mut self, name: impl Into<String>, ty: ValueType) -> Self {
        self.properties.push((name.into(), ty, PropertyKind::Mapped));
        self
    }

    /// Use an explicit instance type instead of the default record type.
    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    /// Build the record class.
    pub fn build(self) -> Result<RecordClass, RecordError> {
        let mut descriptors = Vec::with_capacity(self.properties.len());
        for (name, ty, kind) in self.properties {
            descriptors.push(PropertyDescriptor::with_kind(name, ty, kind)?);
        }
        RecordClass::with_type(self.name, descriptors, self.record_type)
    }
}
