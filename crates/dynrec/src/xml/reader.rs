// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unmarshalling from XML text.

use super::{XmlCodec, XmlError};
use crate::class::RecordClass;
use crate::descriptor::{PropertyDescriptor, PropertyKind};
use roxmltree::{Document, Node};
use std::fs;
use std::path::Path;

fn child<'a, 'input>(node: &Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}

fn child_text<'a>(node: &Node<'a, '_>, name: &str) -> Option<&'a str> {
    child(node, name).map(|n| n.text().unwrap_or("").trim())
}

impl XmlCodec<'_> {
    /// Parse a record class from XML text.
    pub fn parse_class(&self, xml: &str) -> Result<RecordClass, XmlError> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        if root.tag_name().name() != "record-class" {
            return Err(XmlError::MissingElement("record-class"));
        }

        let name = child_text(&root, "name").ok_or(XmlError::MissingElement("name"))?;
        let record_type = match child_text(&root, "record") {
            Some(type_name) => self.resolve_record_type(type_name)?,
            None => self.resolve_record_type(crate::class::DEFAULT_RECORD_TYPE)?,
        };

        let properties = child(&root, "properties").ok_or(XmlError::MissingElement("properties"))?;
        let mut descriptors = Vec::new();
        for node in properties
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "property")
        {
            descriptors.push(self.parse_descriptor_node(&node)?);
        }

        log::debug!(
            "parsed record class '{}' with {} properties",
            name,
            descriptors.len()
        );
        Ok(RecordClass::with_type(name, descriptors, record_type)?)
    }

    /// Parse a single property descriptor from XML text.
    pub fn parse_descriptor(&self, xml: &str) -> Result<PropertyDescriptor, XmlError> {
        let doc = Document::parse(xml)?;
        let root = doc.root_element();
        if root.tag_name().name() != "property" {
            return Err(XmlError::MissingElement("property"));
        }
        self.parse_descriptor_node(&root)
    }

    /// Load a record class from an XML file.
    pub fn load_class_from_file<P: AsRef<Path>>(&self, path: P) -> Result<RecordClass, XmlError> {
        let xml = fs::read_to_string(path)?;
        self.parse_class(&xml)
    }

    fn parse_descriptor_node(&self, node: &Node<'_, '_>) -> Result<PropertyDescriptor, XmlError> {
        let name = child_text(node, "name").ok_or(XmlError::MissingElement("name"))?;
        let type_name = child_text(node, "type").ok_or(XmlError::MissingElement("type"))?;
        let value_type = self.resolve_type(type_name)?;
        let kind = match child_text(node, "kind") {
            Some(kind_name) => PropertyKind::parse(kind_name)
                .ok_or_else(|| XmlError::UnknownKind(kind_name.to_string()))?,
            None => PropertyKind::Simple,
        };
        Ok(PropertyDescriptor::with_kind(name, value_type, kind)?)
    }
}
