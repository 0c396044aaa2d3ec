//! Configuration resolution.

use thyme_model::{Configuration, PageImportName};

use crate::{error::ResolutionError, provider::PageProvider, resolver::lookup::find_page};

const PAGE_URL_PROPERTY: &str = "url";

/// Replaces a `<page>.url` start URL with the URL of the page.
///
/// Any other URL is kept as written.
///
/// # Errors
///
/// Returns an error if the URL names a page that cannot be found.
pub fn resolve_configuration(
    configuration: &Configuration,
    pages: &dyn PageProvider,
) -> Result<Configuration, ResolutionError> {
    match page_url_reference(configuration.url()) {
        Some(import_name) => {
            let page = find_page(&import_name, pages)?;
            Ok(configuration.clone().with_url(page.url()))
        }
        None => Ok(configuration.clone()),
    }
}

/// Returns the page import name if `url` has the form `<page>.url`.
pub fn page_url_reference(url: &str) -> Option<PageImportName> {
    let (import_name, property) = url.trim().split_once('.')?;

    let is_page_reference = property == PAGE_URL_PROPERTY
        && !import_name.is_empty()
        && !import_name.starts_with('$')
        && !import_name.contains([':', '/', ' ']);

    is_page_reference.then(|| PageImportName::new(import_name))
}
