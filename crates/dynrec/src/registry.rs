// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Bidirectional alias registry for value types.
//!
//! The registry is an explicit object handed to the codec rather than
//! process-global state, so lifecycle and test isolation stay in the
//! caller's hands. Registration overwrites unconditionally in both
//! directions: alias-to-type and type-to-alias are both last-write-wins.

use crate::value::ValueType;
use parking_lot::Mutex;
use std::collections::HashMap;

#[derive(Default)]
struct Maps {
    alias_to_type: HashMap<String, ValueType>,
    type_to_alias: HashMap<ValueType, String>,
}

impl Maps {
    fn register(&mut self, alias: String, ty: ValueType) {
        log::info!("register type alias '{}' <==> '{}'", alias, ty);
        self.alias_to_type.insert(alias.clone(), ty);
        self.type_to_alias.insert(ty, alias);
    }
}

/// Registry of short symbolic names for value types.
///
/// Consumed by the textual codec when rendering and parsing type
/// identifiers; the core model never reads it. All access is serialized
/// behind a single lock.
pub struct TypeAliasRegistry {
    maps: Mutex<Maps>,
}

impl TypeAliasRegistry {
    /// A registry pre-populated with the built-in aliases.
    pub fn new() -> Self {
        let registry = Self::empty();
        {
            let mut maps = registry.maps.lock();
            maps.register("boolean".into(), ValueType::Bool);
            maps.register("byte".into(), ValueType::I8);
            maps.register("short".into(), ValueType::I16);
            maps.register("int".into(), ValueType::I32);
            maps.register("long".into(), ValueType::I64);
            maps.register("float".into(), ValueType::F32);
            maps.register("double".into(), ValueType::F64);
            maps.register("char".into(), ValueType::Char);
            maps.register("string".into(), ValueType::String);
            maps.register("object".into(), ValueType::Any);
            maps.register("record".into(), ValueType::Record);
        }
        registry
    }

    /// A registry with no aliases at all.
    pub fn empty() -> Self {
        Self {
            maps: Mutex::new(Maps::default()),
        }
    }

    /// Register an alias for a type, overwriting in both directions.
    pub fn register(&self, alias: impl Into<String>, ty: ValueType) {
        self.maps.lock().register(alias.into(), ty);
    }

    /// The registered alias of a type, or `None`.
    pub fn get_alias(&self, ty: ValueType) -> Option<String> {
        log::debug!("getting alias for type '{}'", ty);
        self.maps.lock().type_to_alias.get(&ty).cloned()
    }

    /// The registered type for an alias, or `None`.
    pub fn get_type(&self, alias: &str) -> Option<ValueType> {
        log::debug!("getting type for alias '{}'", alias);
        self.maps.lock().alias_to_type.get(alias).copied()
    }
}

impl Default for TypeAliasRegistry {
    fn default() -> Self {
        Self::new()
    }
}
