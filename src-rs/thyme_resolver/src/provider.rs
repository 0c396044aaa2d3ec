//! Lookup tables the resolvers dereference imports against.
//!
//! Providers are populated before resolution starts. A provider can know a
//! name without being able to supply its entity, for example when the file
//! behind an import could not be read; such entries are reported as
//! [`LookupError::NonRetrievable`] rather than [`LookupError::Unknown`].

use std::hash::Hash;

use indexmap::IndexMap;
use thyme_model::{
    DataProviderName, DataSetCollection, Page, PageImportName, StepDefinition, StepImportName,
};

/// Why a provider could not supply an entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The provider has no entry for the name.
    Unknown,
    /// The provider has an entry for the name but could not materialise it.
    NonRetrievable {
        /// Why the entity could not be materialised
        reason: String,
    },
}

/// Supplies the pages imported by a test.
pub trait PageProvider {
    /// Finds the page imported under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no page is imported under the name or the page
    /// could not be loaded.
    fn find_page(&self, name: &PageImportName) -> Result<&Page, LookupError>;
}

/// Supplies the steps imported by a test.
pub trait StepProvider {
    /// Finds the step imported under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no step is imported under the name or the step
    /// could not be loaded.
    fn find_step(&self, name: &StepImportName) -> Result<&StepDefinition, LookupError>;
}

/// Supplies the data sets imported by a test.
pub trait DataSetProvider {
    /// Finds the data sets imported under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if no data provider is imported under the name or
    /// its data sets could not be loaded.
    fn find_data_sets(&self, name: &DataProviderName) -> Result<&DataSetCollection, LookupError>;
}

/// The providers a single test is resolved against.
#[derive(Clone, Copy)]
pub struct Providers<'p> {
    pages: &'p dyn PageProvider,
    steps: &'p dyn StepProvider,
    data_sets: &'p dyn DataSetProvider,
}

impl<'p> Providers<'p> {
    /// Bundles the providers of a test.
    #[must_use]
    pub const fn new(
        pages: &'p dyn PageProvider,
        steps: &'p dyn StepProvider,
        data_sets: &'p dyn DataSetProvider,
    ) -> Self {
        Self {
            pages,
            steps,
            data_sets,
        }
    }

    /// Returns the page provider.
    #[must_use]
    pub const fn pages(&self) -> &'p dyn PageProvider {
        self.pages
    }

    /// Returns the step provider.
    #[must_use]
    pub const fn steps(&self) -> &'p dyn StepProvider {
        self.steps
    }

    /// Returns the data set provider.
    #[must_use]
    pub const fn data_sets(&self) -> &'p dyn DataSetProvider {
        self.data_sets
    }
}

/// A provider that knows no names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProvider;

static EMPTY_PROVIDER: EmptyProvider = EmptyProvider;

impl EmptyProvider {
    /// Returns providers that know no pages, steps or data sets.
    #[must_use]
    pub fn providers() -> Providers<'static> {
        Providers::new(&EMPTY_PROVIDER, &EMPTY_PROVIDER, &EMPTY_PROVIDER)
    }
}

impl PageProvider for EmptyProvider {
    fn find_page(&self, _name: &PageImportName) -> Result<&Page, LookupError> {
        Err(LookupError::Unknown)
    }
}

impl StepProvider for EmptyProvider {
    fn find_step(&self, _name: &StepImportName) -> Result<&StepDefinition, LookupError> {
        Err(LookupError::Unknown)
    }
}

impl DataSetProvider for EmptyProvider {
    fn find_data_sets(&self, _name: &DataProviderName) -> Result<&DataSetCollection, LookupError> {
        Err(LookupError::Unknown)
    }
}

/// A provider backed by a map populated ahead of resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulatedProvider<K: Hash + Eq, T> {
    entries: IndexMap<K, Result<T, String>>,
}

impl<K: Hash + Eq, T> PopulatedProvider<K, T> {
    /// Creates a provider with no entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Registers an entity under a name.
    pub fn insert(&mut self, name: K, entity: T) {
        self.entries.insert(name, Ok(entity));
    }

    /// Registers a name whose entity could not be materialised.
    pub fn insert_non_retrievable(&mut self, name: K, reason: impl Into<String>) {
        self.entries.insert(name, Err(reason.into()));
    }

    /// Returns a copy of this provider with an entity registered.
    #[must_use]
    pub fn with_entry(mut self, name: K, entity: T) -> Self {
        self.insert(name, entity);
        self
    }

    /// Returns a copy of this provider with a non-retrievable name registered.
    #[must_use]
    pub fn with_non_retrievable(mut self, name: K, reason: impl Into<String>) -> Self {
        self.insert_non_retrievable(name, reason);
        self
    }

    /// Looks up the entity registered under a name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not registered or was registered as
    /// non-retrievable.
    pub fn find(&self, name: &K) -> Result<&T, LookupError> {
        match self.entries.get(name) {
            Some(Ok(entity)) => Ok(entity),
            Some(Err(reason)) => Err(LookupError::NonRetrievable {
                reason: reason.clone(),
            }),
            None => Err(LookupError::Unknown),
        }
    }
}

impl<K: Hash + Eq, T> Default for PopulatedProvider<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl PageProvider for PopulatedProvider<PageImportName, Page> {
    fn find_page(&self, name: &PageImportName) -> Result<&Page, LookupError> {
        self.find(name)
    }
}

impl StepProvider for PopulatedProvider<StepImportName, StepDefinition> {
    fn find_step(&self, name: &StepImportName) -> Result<&StepDefinition, LookupError> {
        self.find(name)
    }
}

impl DataSetProvider for PopulatedProvider<DataProviderName, DataSetCollection> {
    fn find_data_sets(&self, name: &DataProviderName) -> Result<&DataSetCollection, LookupError> {
        self.find(name)
    }
}

#[cfg(test)]
mod tests {
    use thyme_model::IdentifierCollection;

    use super::*;

    #[test]
    fn populated_provider_distinguishes_unknown_from_non_retrievable() {
        let pages = PopulatedProvider::new()
            .with_entry(
                PageImportName::new("home"),
                Page::new("https://example.com".to_string(), IdentifierCollection::new()),
            )
            .with_non_retrievable(PageImportName::new("broken"), "file not found");

        assert_eq!(
            pages.find_page(&PageImportName::new("home")).map(Page::url),
            Ok("https://example.com")
        );
        assert_eq!(
            pages.find_page(&PageImportName::new("broken")),
            Err(LookupError::NonRetrievable {
                reason: "file not found".to_string()
            })
        );
        assert_eq!(
            pages.find_page(&PageImportName::new("missing")),
            Err(LookupError::Unknown)
        );
    }

    #[test]
    fn empty_provider_knows_nothing() {
        let providers = EmptyProvider::providers();

        assert_eq!(
            providers.steps().find_step(&StepImportName::new("s")),
            Err(LookupError::Unknown)
        );
    }
}
