// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XML codec for record classes and property descriptors.
//!
//! The codec owns all symbol resolution: value types are rendered through
//! the [`TypeAliasRegistry`] handed in at construction (preferring a
//! registered alias over the canonical type name), and instance types are
//! resolved through the codec's record-type table. The core model never
//! parses type names itself.
//!
//! The element shape:
//!
//! ```xml
//! <record-class>
//!   <name>user</name>
//!   <record>dynamic-record</record>
//!   <properties>
//!     <property>
//!       <name>age</name>
//!       <type>int</type>
//!       <kind>simple</kind>
//!     </property>
//!   </properties>
//! </record-class>
//! ```
//!
//! `<record>` defaults to the built-in record type and `<kind>` to
//! `simple` when omitted.

mod reader;
mod writer;

use crate::class::RecordType;
use crate::error::RecordError;
use crate::registry::TypeAliasRegistry;
use crate::value::ValueType;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by the XML codec.
#[derive(Debug, Error)]
pub enum XmlError {
    #[error("failed to parse XML: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("missing <{0}> element")]
    MissingElement(&'static str),

    #[error("unknown value type name: '{0}'")]
    UnknownType(String),

    #[error("unknown property kind: '{0}'")]
    UnknownKind(String),

    #[error("unknown record type: '{0}'")]
    UnknownRecordType(String),

    #[error(transparent)]
    Model(#[from] RecordError),

    #[error("failed to read XML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Marshals and unmarshals record classes and property descriptors.
///
/// Borrows the alias registry for value-type symbol resolution; record
/// types for `<record>` resolution are registered on the codec itself,
/// seeded with the built-in default type.
pub struct XmlCodec<'a> {
    aliases: &'a TypeAliasRegistry,
    record_types: HashMap<String, RecordType>,
}

impl<'a> XmlCodec<'a> {
    /// Create a codec resolving value types through `aliases`.
    pub fn new(aliases: &'a TypeAliasRegistry) -> Self {
        let mut record_types = HashMap::new();
        let dynamic = RecordType::dynamic();
        record_types.insert(dynamic.name().to_string(), dynamic);
        Self {
            aliases,
            record_types,
        }
    }

    /// Register a record type for `<record>` resolution.
    pub fn register_record_type(&mut self, record_type: RecordType) {
        self.record_types
            .insert(record_type.name().to_string(), record_type);
    }

    fn type_name(&self, ty: ValueType) -> String {
        self.aliases
            .get_alias(ty)
            .unwrap_or_else(|| ty.canonical_name().to_string())
    }

    fn resolve_type(&self, name: &str) -> Result<ValueType, XmlError> {
        self.aliases
            .get_type(name)
            .or_else(|| ValueType::parse(name))
            .ok_or_else(|| XmlError::UnknownType(name.to_string()))
    }

    fn resolve_record_type(&self, name: &str) -> Result<RecordType, XmlError> {
        self.record_types
            .get(name)
            .cloned()
            .ok_or_else(|| XmlError::UnknownRecordType(name.to_string()))
    }
}
