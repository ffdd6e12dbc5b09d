/// Relationship-related objects for OPC packages.
///
/// This module provides the relationship collection written next to each part
/// (`_rels/*.rels`). Only internal relationships are needed for presentations.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use crate::ooxml::opc::packuri::PackURI;

/// A single relationship from a source part to a target part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    r_id: String,

    /// Relationship type URI
    reltype: String,

    /// Target reference relative to the source part's base URI
    target_ref: String,
}

impl Relationship {
    /// Get the relationship ID.
    #[inline]
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }
}

/// Collection of relationships from a single source.
///
/// Relationship IDs are allocated sequentially (`rId1`, `rId2`, ...) in the
/// order relationships are added, and written back in that order.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Base URI for computing relative target references
    base_uri: String,

    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create a new empty relationships collection.
    ///
    /// # Arguments
    /// * `base_uri` - Base URI of the source part (e.g. "/ppt/slides")
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.to_string(),
            rels: Vec::new(),
        }
    }

    /// Add a relationship to `target` and return its newly allocated rId.
    pub fn add(&mut self, reltype: &str, target: &PackURI) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target_ref: target.relative_ref(&self.base_uri),
        });
        r_id
    }

    /// Get the number of relationships.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Check if there are no relationships.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Iterate over relationships in rId order.
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.rels.iter()
    }

    /// Serialize relationships to XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(r#"<Relationships xmlns=""#);
        xml.push_str(namespace::OPC_RELATIONSHIPS);
        xml.push_str(r#"">"#);

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            ));
        }

        xml.push_str("</Relationships>");

        xml
    }
}
