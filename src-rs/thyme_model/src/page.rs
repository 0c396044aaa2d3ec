//! Pages declare a URL and the elements found on it.

use crate::{identifier::Identifier, identifier_collection::IdentifierCollection, name::ElementName};

/// A page imported by a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    url: String,
    elements: IdentifierCollection,
}

impl Page {
    /// Creates a new page.
    #[must_use]
    pub const fn new(url: String, elements: IdentifierCollection) -> Self {
        Self { url, elements }
    }

    /// Returns the URL of the page.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the elements declared on the page.
    #[must_use]
    pub const fn elements(&self) -> &IdentifierCollection {
        &self.elements
    }

    /// Looks up an element declared on the page.
    #[must_use]
    pub fn element(&self, name: &ElementName) -> Option<&Identifier> {
        self.elements.get(name)
    }
}
