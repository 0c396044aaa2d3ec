//! Provider lookups mapped onto resolution errors.

use thyme_model::{
    DataProviderName, DataSetCollection, Page, PageImportName, StepDefinition, StepImportName,
};

use crate::{
    error::ResolutionError,
    provider::{DataSetProvider, LookupError, PageProvider, StepProvider},
};

pub fn find_page<'p>(
    import_name: &PageImportName,
    pages: &'p dyn PageProvider,
) -> Result<&'p Page, ResolutionError> {
    pages.find_page(import_name).map_err(|error| match error {
        LookupError::Unknown => ResolutionError::unknown_page(import_name.clone()),
        LookupError::NonRetrievable { reason } => {
            ResolutionError::non_retrievable_page(import_name.clone(), reason)
        }
    })
}

pub fn find_step<'p>(
    import_name: &StepImportName,
    steps: &'p dyn StepProvider,
) -> Result<&'p StepDefinition, ResolutionError> {
    steps.find_step(import_name).map_err(|error| match error {
        LookupError::Unknown => ResolutionError::unknown_step(import_name.clone()),
        LookupError::NonRetrievable { reason } => {
            ResolutionError::non_retrievable_step(import_name.clone(), reason)
        }
    })
}

pub fn find_data_sets<'p>(
    import_name: &DataProviderName,
    data_sets: &'p dyn DataSetProvider,
) -> Result<&'p DataSetCollection, ResolutionError> {
    data_sets.find_data_sets(import_name).map_err(|error| match error {
        LookupError::Unknown => ResolutionError::unknown_data_provider(import_name.clone()),
        LookupError::NonRetrievable { reason } => {
            ResolutionError::non_retrievable_data_provider(import_name.clone(), reason)
        }
    })
}
