//! Builds pages from their declared URL and elements.

use thyme_model::{ElementName, Identifier, IdentifierCollection, Page};

use crate::{
    error::{ParseError, ParseErrorReason},
    parse_identifier_with_elements,
};

/// Builds a page, parsing its elements in declaration order.
///
/// An element may only use an earlier element as its parent, so parent
/// chains are acyclic by construction.
pub fn page<I, N, S>(url: impl Into<String>, elements: I) -> Result<Page, ParseError>
where
    I: IntoIterator<Item = (N, S)>,
    N: AsRef<str>,
    S: AsRef<str>,
{
    let mut collection = IdentifierCollection::new();

    for (name, selector) in elements {
        let name = ElementName::new(name);
        let selector = selector.as_ref();

        let identifier = parse_identifier_with_elements(selector, &collection)
            .map_err(|error| error.in_element(name.clone()))?;

        if !matches!(identifier, Identifier::Element(_)) {
            let error = ParseError::new(selector, 0, ParseErrorReason::ExpectedSelector);
            return Err(error.in_element(name));
        }

        collection.insert(name, identifier);
    }

    Ok(Page::new(url.into(), collection))
}
