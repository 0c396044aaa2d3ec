//! Parser for the Thyme browser test language
//!
//! Test, step and page documents are YAML; this crate parses the statements
//! inside them. Each statement is a single line:
//!
//! ```text
//! click "{{ form }} .submit"
//! set $elements.email to $data.email
//! $page.title is "Welcome"
//! ```
//!
//! Statements are parsed against the identifiers declared so far so that a
//! `{{ parent }}` prefix can be checked immediately.

use thyme_model::{Action, Assertion, Identifier, IdentifierCollection, Page, Value};

mod action;
mod assertion;
pub mod error;
mod identifier;
mod page;
mod util;
mod value;

use error::ParseError;
use util::{Span, end_of_statement};

/// Parses an identifier that may not refer to a parent element.
///
/// # Errors
///
/// Returns an error if a quoted selector is malformed or names a parent.
pub fn parse_identifier(source: &str) -> Result<Identifier, ParseError> {
    parse_identifier_with_elements(source, &IdentifierCollection::new())
}

/// Parses an identifier, resolving `{{ parent }}` prefixes against `elements`.
///
/// Unquoted text that is not a parameter or a property is taken as a page
/// element reference as a whole; it is checked when the test is resolved.
///
/// # Errors
///
/// Returns an error if a quoted selector is malformed, has an invalid
/// position, names an undeclared parent, or is followed by other text.
pub fn parse_identifier_with_elements(
    source: &str,
    elements: &IdentifierCollection,
) -> Result<Identifier, ParseError> {
    let trimmed = source.trim();

    if trimmed.starts_with('"') {
        let leading_whitespace = source.len() - source.trim_start().len();
        let (input, _) = nom::Input::take_split(&Span::new(source), leading_whitespace);
        let (rest, identifier) = identifier::identifier(input, elements)
            .map_err(|error| ParseError::from_nom(source, error))?;
        end_of_statement(rest).map_err(|error| ParseError::from_nom(source, error))?;
        Ok(identifier)
    } else {
        Ok(identifier::reference_identifier(trimmed))
    }
}

/// Parses a value. Values never fail to parse.
#[must_use]
pub fn parse_value(source: &str) -> Value {
    value::value(source)
}

/// Parses an action statement.
///
/// # Errors
///
/// Returns an error if the identifier of an interaction or input action is
/// malformed, if `set` has no `to`, or if text follows an interaction.
pub fn parse_action(source: &str, elements: &IdentifierCollection) -> Result<Action, ParseError> {
    action::action(Span::new(source), elements)
        .map(|(_, action)| action)
        .map_err(|error| ParseError::from_nom(source, error))
}

/// Parses an assertion statement.
///
/// # Errors
///
/// Returns an error if the identifier is malformed, the comparison is
/// missing or unknown, or the value does not match the comparison.
pub fn parse_assertion(
    source: &str,
    elements: &IdentifierCollection,
) -> Result<Assertion, ParseError> {
    assertion::assertion(Span::new(source), elements)
        .map(|(_, assertion)| assertion)
        .map_err(|error| ParseError::from_nom(source, error))
}

/// Builds a page from its URL and its elements in declaration order.
///
/// # Errors
///
/// Returns an error if an element is not a quoted selector or uses a parent
/// that is not declared before it.
pub fn parse_page<I, N, S>(url: impl Into<String>, elements: I) -> Result<Page, ParseError>
where
    I: IntoIterator<Item = (N, S)>,
    N: AsRef<str>,
    S: AsRef<str>,
{
    page::page(url, elements)
}
