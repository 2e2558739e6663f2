//! Provider schema types
//!
//! Describes the attributes a provider accepts so the host can validate
//! configuration and mask sensitive values in its own output.

use serde::Serialize;
use std::collections::BTreeMap;

/// Type of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// UTF-8 string
    String,
}

/// Schema of a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Value type
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    /// Human-readable description shown by the host
    pub description: String,
    /// Whether the attribute may be omitted
    pub optional: bool,
    /// Whether the host must mask the value in its output
    pub sensitive: bool,
}

impl Attribute {
    /// An optional, non-sensitive string attribute
    pub fn optional_string(description: impl Into<String>) -> Self {
        Self {
            attribute_type: AttributeType::String,
            description: description.into(),
            optional: true,
            sensitive: false,
        }
    }

    /// Mark the attribute as sensitive
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Schema of the provider configuration block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProviderSchema {
    attributes: BTreeMap<String, Attribute>,
}

impl ProviderSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute (builder style)
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// All attributes, sorted by name
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes.iter().map(|(name, attr)| (name.as_str(), attr))
    }

    /// Whether the named attribute is sensitive
    pub fn is_sensitive(&self, name: &str) -> bool {
        self.attribute(name).is_some_and(|attr| attr.sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder() {
        let schema = ProviderSchema::new()
            .with_attribute("token", Attribute::optional_string("Token").sensitive())
            .with_attribute("url", Attribute::optional_string("URL"));

        assert!(schema.is_sensitive("token"));
        assert!(!schema.is_sensitive("url"));
        assert!(!schema.is_sensitive("missing"));

        let names: Vec<_> = schema.attributes().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["token", "url"]);
    }

    #[test]
    fn test_schema_serializes_type() {
        let schema = ProviderSchema::new().with_attribute("url", Attribute::optional_string("URL"));

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["attributes"]["url"]["type"], "string");
        assert_eq!(json["attributes"]["url"]["optional"], true);
    }
}
