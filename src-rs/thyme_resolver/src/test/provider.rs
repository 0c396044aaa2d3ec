//! Canned providers for resolver tests.

use thyme_model::{
    DataProviderName, DataSetCollection, Page, PageImportName, StepDefinition, StepImportName,
};

use crate::provider::{PopulatedProvider, Providers};

#[derive(Default)]
pub struct TestProviders {
    pages: PopulatedProvider<PageImportName, Page>,
    steps: PopulatedProvider<StepImportName, StepDefinition>,
    data_sets: PopulatedProvider<DataProviderName, DataSetCollection>,
}

impl TestProviders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, name: &str, page: Page) -> Self {
        self.pages.insert(PageImportName::new(name), page);
        self
    }

    pub fn with_step(mut self, name: &str, step: StepDefinition) -> Self {
        self.steps.insert(StepImportName::new(name), step);
        self
    }

    pub fn with_data_sets(mut self, name: &str, data_sets: DataSetCollection) -> Self {
        self.data_sets.insert(DataProviderName::new(name), data_sets);
        self
    }

    pub fn providers(&self) -> Providers<'_> {
        Providers::new(&self.pages, &self.steps, &self.data_sets)
    }
}
