//! Named identifiers declared on a page or a step.

use indexmap::IndexMap;

use crate::{
    identifier::{ElementIdentifier, Identifier},
    name::ElementName,
};

/// An insertion-ordered mapping of names to identifiers.
///
/// Inserting a name that is already present replaces the earlier
/// identifier but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierCollection {
    identifiers: IndexMap<ElementName, Identifier>,
}

impl IdentifierCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an identifier under the given name, naming the identifier.
    pub fn insert(&mut self, name: ElementName, identifier: Identifier) {
        let identifier = identifier.with_name(name.clone());
        self.identifiers.insert(name, identifier);
    }

    /// Returns a copy of this collection with the given identifier added.
    #[must_use]
    pub fn with_identifier(mut self, name: ElementName, identifier: Identifier) -> Self {
        self.insert(name, identifier);
        self
    }

    /// Returns a collection holding the identifiers of `self` followed by
    /// those of `other`, where `other` wins on conflicting names.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        let mut merged = self.clone();

        for (name, identifier) in &other.identifiers {
            merged.identifiers.insert(name.clone(), identifier.clone());
        }

        merged
    }

    /// Looks up the identifier declared under a name.
    #[must_use]
    pub fn get(&self, name: &ElementName) -> Option<&Identifier> {
        self.identifiers.get(name)
    }

    /// Looks up a concrete element identifier declared under a name.
    ///
    /// Names bound to anything other than an element identifier are not
    /// visible through this lookup.
    #[must_use]
    pub fn element(&self, name: &ElementName) -> Option<&ElementIdentifier> {
        self.get(name).and_then(Identifier::as_element)
    }

    /// Returns whether a name is declared.
    #[must_use]
    pub fn contains(&self, name: &ElementName) -> bool {
        self.identifiers.contains_key(name)
    }

    /// Iterates over the declared identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementName, &Identifier)> {
        self.identifiers.iter()
    }

    /// Returns the number of declared identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    /// Returns whether no identifiers are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }
}

impl FromIterator<(ElementName, Identifier)> for IdentifierCollection {
    fn from_iter<I: IntoIterator<Item = (ElementName, Identifier)>>(iter: I) -> Self {
        let mut collection = Self::new();

        for (name, identifier) in iter {
            collection.insert(name, identifier);
        }

        collection
    }
}

impl<'a> IntoIterator for &'a IdentifierCollection {
    type Item = (&'a ElementName, &'a Identifier);
    type IntoIter = indexmap::map::Iter<'a, ElementName, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.identifiers.iter()
    }
}
