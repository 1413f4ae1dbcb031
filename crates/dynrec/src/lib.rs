// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Uniform reflective property model.
//!
//! Describes an object's set of named, typed properties and gets/sets/
//! iterates them generically, without compile-time knowledge of the
//! concrete shape. Heterogeneous records (rows, documents, DTOs) become
//! schema-described containers.
//!
//! # Features
//!
//! - **PropertyDescriptor**: immutable metadata (name, value type, kind)
//! - **RecordClass**: named descriptor aggregate with an instance factory
//! - **DynamicRecord**: one kind- and type-checked property per descriptor
//! - **Builder API**: fluent interface for building record classes
//! - **XML codec**: marshal/unmarshal classes through a type alias registry
//!   (default `xml` feature)
//!
//! # Example
//!
//! ```rust
//! use dynrec::{Record, RecordClassBuilder, ValueType};
//! use std::sync::Arc;
//!
//! // Describe a record class at runtime
//! let class = Arc::new(
//!     RecordClassBuilder::new("sensor")
//!         .property("location", ValueType::String)
//!         .indexed("readings", ValueType::F64)
//!         .build()?,
//! );
//!
//! // Create an instance and access properties by name
//! let mut record = class.new_instance()?;
//! record.set("location", "rooftop".into())?;
//! record.append("readings", 23.5f64.into())?;
//!
//! assert_eq!(record.get("location")?.as_str(), Some("rooftop"));
//! assert_eq!(record.size("readings")?, 1);
//! // Writes of the wrong type are rejected
//! assert!(record.append("readings", "warm".into()).is_err());
//! # Ok::<(), dynrec::RecordError>(())
//! ```

pub mod builder;
pub mod class;
pub mod descriptor;
pub mod error;
pub mod property;
pub mod record;
pub mod registry;
pub mod value;
#[cfg(feature = "xml")]
pub mod xml;

pub use builder::RecordClassBuilder;
pub use class::{RecordClass, RecordFactory, RecordType, DEFAULT_RECORD_TYPE};
pub use descriptor::{DescriptorMap, PropertyDescriptor, PropertyKind};
pub use error::RecordError;
pub use property::{Property, PropertyValue};
pub use record::{DynamicRecord, Record};
pub use registry::TypeAliasRegistry;
pub use value::{Value, ValueType};
#[cfg(feature = "xml")]
pub use xml::{XmlCodec, XmlError};
