//! Value resolution.
//!
//! Values go through the same three passes as identifiers. Data parameters
//! are left alone: data is substituted when the test runs.

use thyme_model::{IdentifierCollection, Value};

use crate::{
    error::ResolutionError,
    provider::PageProvider,
    resolver::identifier::{page_element, step_attribute, step_element},
};

/// Resolves every reference a value may hold.
///
/// # Errors
///
/// Returns an error if a page, page element or step element cannot be
/// found, or a reference is malformed.
pub fn resolve_value(
    value: &Value,
    pages: &dyn PageProvider,
    elements: &IdentifierCollection,
) -> Result<Value, ResolutionError> {
    match value {
        Value::PageElementReference(reference) => {
            page_element(reference, pages).map(Value::Element)
        }
        Value::ElementParameter(name) => step_element(name, elements).map(Value::Element),
        Value::AttributeParameter(property) => {
            step_attribute(property, elements).map(Value::Attribute)
        }
        Value::Literal(_)
        | Value::DataParameter(_)
        | Value::PageProperty(_)
        | Value::BrowserProperty(_)
        | Value::Element(_)
        | Value::Attribute(_) => Ok(value.clone()),
    }
}
