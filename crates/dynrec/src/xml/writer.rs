// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Marshalling to XML text.

use super::XmlCodec;
use crate::class::RecordClass;
use crate::descriptor::PropertyDescriptor;
use std::fmt::Write;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl XmlCodec<'_> {
    /// Render a record class as XML.
    pub fn class_to_xml(&self, class: &RecordClass) -> String {
        let mut out = String::new();
        out.push_str("<record-class>\n");
        let _ = writeln!(out, "  <name>{}</name>", escape(class.name()));
        let _ = writeln!(
            out,
            "  <record>{}</record>",
            escape(class.record_type().name())
        );
        if class.property_descriptors().is_empty() {
            out.push_str("  <properties/>\n");
        } else {
            out.push_str("  <properties>\n");
            for descriptor in class.property_descriptors() {
                self.write_descriptor(&mut out, descriptor, "    ");
            }
            out.push_str("  </properties>\n");
        }
        out.push_str("</record-class>\n");
        out
    }

    /// Render a single property descriptor as XML.
    pub fn descriptor_to_xml(&self, descriptor: &PropertyDescriptor) -> String {
        let mut out = String::new();
        self.write_descriptor(&mut out, descriptor, "");
        out
    }

    fn write_descriptor(&self, out: &mut String, descriptor: &PropertyDescriptor, indent: &str) {
        let _ = writeln!(out, "{indent}<property>");
        let _ = writeln!(out, "{indent}  <name>{}</name>", escape(descriptor.name()));
        let _ = writeln!(
            out,
            "{indent}  <type>{}</type>",
            escape(&self.type_name(descriptor.value_type()))
        );
        let _ = writeln!(out, "{indent}  <kind>{}</kind>", descriptor.kind());
        let _ = writeln!(out, "{indent}</property>");
    }
}
