// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for the record model.

use crate::descriptor::PropertyKind;
use thiserror::Error;

/// Errors raised by the property model.
///
/// All failures are local and synchronous: they are raised at the offending
/// call and never deferred or retried. A failed mutating call leaves the
/// property value unchanged.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A property name does not match `[A-Za-z_][A-Za-z_0-9-]*`.
    #[error("invalid property name: '{0}'")]
    InvalidPropertyName(String),

    /// A record class was given an interface as its instance type.
    #[error("record type '{0}' is an interface, not a concrete type")]
    InterfaceRecordType(String),

    /// The instance type has no constructor taking a record class reference.
    #[error("record type '{0}' does not have a matching constructor")]
    NoMatchingConstructor(String),

    /// Name-indexed access for a name absent from the record class.
    #[error("the property '{0}' does not exist")]
    PropertyNotExist(String),

    /// An operation was invoked against a property of the wrong kind.
    #[error("operation on property '{property}' requires kind {expected:?}, but it is {actual}")]
    InvalidKind {
        property: String,
        actual: PropertyKind,
        expected: &'static [PropertyKind],
    },

    /// A written value is not assignable to the property's declared type.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    /// Null written to a simple property backed by a primitive type.
    #[error("property '{0}' does not accept null values")]
    NullNotAllowed(String),

    /// Index outside the valid bound of an indexed property.
    #[error("index out of range: {index} >= {size}")]
    OutOfRange { index: usize, size: usize },

    /// The instance factory failed while constructing a record.
    #[error("failed to construct record of type '{type_name}': {source}")]
    ConstructionFailed {
        type_name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
