//! Attribute schema declaration

use serde::Serialize;

/// One attribute of a data source schema
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub computed: bool,
    pub sensitive: bool,
}

impl Attribute {
    /// A required input attribute
    pub fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: true,
            computed: false,
            sensitive: false,
        }
    }

    /// An attribute computed by the data source
    pub fn computed(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            computed: true,
            sensitive: false,
        }
    }

    /// Mark the attribute value as sensitive (never shown by the host)
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Schema of a provider or data source
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new(description: &'static str) -> Self {
        Self {
            description,
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}
