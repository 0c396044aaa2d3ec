//! Eager loading of the documents a test imports.
//!
//! Every import is read when the test is loaded. An import that cannot be
//! read, deserialized or parsed is still registered, as non-retrievable, so
//! that only tests which use it fail to resolve.

use std::{fmt, fs, path::Path};

use serde::de::DeserializeOwned;
use thyme_model::{
    DataProviderName, DataSetCollection, Page, PageImportName, StepDefinition, StepImportName,
};
use thyme_resolver::{PopulatedProvider, Providers};
use tracing::{debug, warn};

use crate::{
    builder::{build_data_sets, build_page, build_step},
    document::{DataProviderDocument, ImportsDocument, PageDocument, StepDocument},
    path::resolve_import_path,
};

/// The pages, steps and data providers imported by a test document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    pages: PopulatedProvider<PageImportName, Page>,
    steps: PopulatedProvider<StepImportName, StepDefinition>,
    data_sets: PopulatedProvider<DataProviderName, DataSetCollection>,
}

impl Imports {
    pub(crate) fn load(test_path: &Path, document: &ImportsDocument) -> Self {
        let mut imports = Self::default();

        for (name, import) in &document.pages {
            let loaded = load_document(test_path, import, |page: PageDocument| {
                build_page(&page).map_err(|error| error.to_string())
            });
            register(&mut imports.pages, PageImportName::new(name), import, loaded);
        }

        for (name, import) in &document.steps {
            let loaded = load_document(test_path, import, |step: StepDocument| {
                build_step(&step).map_err(|error| error.to_string())
            });
            register(&mut imports.steps, StepImportName::new(name), import, loaded);
        }

        for (name, import) in &document.data_providers {
            let loaded = load_document(test_path, import, |data_sets: DataProviderDocument| {
                Ok(build_data_sets(&data_sets))
            });
            register(&mut imports.data_sets, DataProviderName::new(name), import, loaded);
        }

        imports
    }

    /// Returns providers over the imports.
    #[must_use]
    pub fn providers(&self) -> Providers<'_> {
        Providers::new(&self.pages, &self.steps, &self.data_sets)
    }

    /// Returns the imported pages.
    #[must_use]
    pub const fn pages(&self) -> &PopulatedProvider<PageImportName, Page> {
        &self.pages
    }

    /// Returns the imported steps.
    #[must_use]
    pub const fn steps(&self) -> &PopulatedProvider<StepImportName, StepDefinition> {
        &self.steps
    }

    /// Returns the imported data providers.
    #[must_use]
    pub const fn data_sets(&self) -> &PopulatedProvider<DataProviderName, DataSetCollection> {
        &self.data_sets
    }
}

/// Reads, deserializes and builds an imported document.
///
/// The error is the reason the import is not retrievable.
fn load_document<D, T>(
    test_path: &Path,
    import: &str,
    build: impl FnOnce(D) -> Result<T, String>,
) -> Result<T, String>
where
    D: DeserializeOwned,
{
    let path = resolve_import_path(test_path, import);

    let source = fs::read_to_string(&path)
        .map_err(|error| format!("could not read `{}`: {error}", path.display()))?;

    let document: D = serde_yaml::from_str(&source)
        .map_err(|error| format!("`{}` is not a valid document: {error}", path.display()))?;

    build(document).map_err(|reason| format!("`{}`: {reason}", path.display()))
}

fn register<K, T>(
    provider: &mut PopulatedProvider<K, T>,
    name: K,
    import: &str,
    loaded: Result<T, String>,
) where
    K: std::hash::Hash + Eq + fmt::Display,
{
    match loaded {
        Ok(entity) => {
            debug!(name = %name, path = import, "registered import");
            provider.insert(name, entity);
        }
        Err(reason) => {
            warn!(name = %name, path = import, reason = %reason, "import is not retrievable");
            provider.insert_non_retrievable(name, reason);
        }
    }
}
