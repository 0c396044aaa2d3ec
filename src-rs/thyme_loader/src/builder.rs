//! Turns documents into unresolved model values.

use indexmap::IndexMap;
use thyme_model::{
    Configuration, DataProviderName, DataSet, DataSetCollection, ElementName,
    IdentifierCollection, Page, PendingImportStep, Step, StepDefinition, StepImportName, StepName,
    Test, TestName,
};
use thyme_parser::{
    error::ParseError, parse_action, parse_assertion, parse_identifier_with_elements, parse_page,
};

use crate::document::{DataDocument, DataProviderDocument, PageDocument, StepDocument, TestDocument};

/// A statement of a step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepParseError {
    pub step: StepName,
    pub error: ParseError,
}

/// Builds a step, leaving its imports pending.
///
/// Elements are declared in document order, so an element may only use an
/// earlier one as its parent.
pub fn build_step(document: &StepDocument) -> Result<StepDefinition, ParseError> {
    let mut identifiers = IdentifierCollection::new();
    for (name, source) in &document.elements {
        let name = ElementName::new(name);
        let identifier = parse_identifier_with_elements(source, &identifiers)
            .map_err(|error| error.in_element(name.clone()))?;
        identifiers.insert(name, identifier);
    }

    let actions = document
        .actions
        .iter()
        .map(|source| parse_action(source, &identifiers))
        .collect::<Result<Vec<_>, _>>()?;

    let assertions = document
        .assertions
        .iter()
        .map(|source| parse_assertion(source, &identifiers))
        .collect::<Result<Vec<_>, _>>()?;

    let mut step = Step::new(actions, assertions).with_identifiers(identifiers);
    if let Some(DataDocument::Inline(data_sets)) = &document.data {
        step = step.with_data_sets(build_data_sets(data_sets));
    }

    let mut pending = PendingImportStep::new(step);
    if let Some(import_name) = &document.import_name {
        pending = pending.with_import_name(StepImportName::new(import_name));
    }
    if let Some(DataDocument::Import(provider_name)) = &document.data {
        pending = pending.with_data_provider_import_name(DataProviderName::new(provider_name));
    }

    Ok(pending.collapse())
}

/// Builds a page.
pub fn build_page(document: &PageDocument) -> Result<Page, ParseError> {
    parse_page(document.url.trim(), &document.elements)
}

/// Builds the data sets of a data provider or of inline step data.
pub fn build_data_sets(document: &DataProviderDocument) -> DataSetCollection {
    document
        .iter()
        .map(|(name, parameters)| {
            let parameters = parameters
                .iter()
                .map(|(key, value)| (key.clone(), value.to_string()))
                .collect();
            DataSet::new(name, parameters)
        })
        .collect()
}

/// Builds the tests described by a test document.
///
/// A document naming several browsers yields one test per browser when
/// `expand_browsers` is set, otherwise a single test for the first browser.
pub fn build_tests(
    name: &str,
    document: &TestDocument,
    expand_browsers: bool,
) -> Result<Vec<Test>, StepParseError> {
    let mut steps = IndexMap::new();
    for (step_name, step_document) in &document.steps {
        let step_name = StepName::new(step_name);
        let step = build_step(step_document).map_err(|error| StepParseError {
            step: step_name.clone(),
            error,
        })?;
        steps.insert(step_name, step);
    }

    let mut browsers = document.config.all_browsers();
    if browsers.is_empty() {
        browsers.push(String::new());
    }
    if !expand_browsers {
        browsers.truncate(1);
    }

    let url = document.config.url.trim();

    Ok(browsers
        .into_iter()
        .map(|browser| {
            Test::new(
                TestName::new(name),
                Configuration::new(browser, url),
                steps.clone(),
            )
        })
        .collect())
}
