//! Identifier resolution.
//!
//! Each function removes one kind of indirection and returns every other
//! identifier unchanged. They are applied in a fixed order: page element
//! references first, since only they can turn a bare reference into a named
//! element, then element parameters, then attribute parameters.

use thyme_model::{
    AttributeIdentifier, AttributeName, ElementIdentifier, ElementName, Identifier,
    IdentifierCollection, PageElementReference,
};
use tracing::trace;

use crate::{
    error::{ATTRIBUTE_PARAMETER_SYNTAX, PAGE_ELEMENT_REFERENCE_SYNTAX, ResolutionError},
    provider::PageProvider,
    resolver::lookup::find_page,
};

/// Resolves every reference an identifier may hold.
///
/// # Errors
///
/// Returns an error if a page, page element or step element cannot be
/// found, or a reference is malformed.
pub fn resolve_identifier(
    identifier: &Identifier,
    pages: &dyn PageProvider,
    elements: &IdentifierCollection,
) -> Result<Identifier, ResolutionError> {
    let identifier = resolve_page_element_reference(identifier, pages)?;
    let identifier = resolve_element_parameter(&identifier, elements)?;
    resolve_attribute_parameter(&identifier, elements)
}

/// Replaces a page element reference with the element the page declares.
///
/// # Errors
///
/// Returns an error if the reference is malformed or the page or element
/// cannot be found.
pub fn resolve_page_element_reference(
    identifier: &Identifier,
    pages: &dyn PageProvider,
) -> Result<Identifier, ResolutionError> {
    match identifier {
        Identifier::PageElementReference(reference) => {
            page_element(reference, pages).map(Identifier::Element)
        }
        Identifier::Element(_)
        | Identifier::Attribute(_)
        | Identifier::ElementParameter(_)
        | Identifier::AttributeParameter(_)
        | Identifier::PageProperty(_)
        | Identifier::BrowserProperty(_)
        | Identifier::Empty => Ok(identifier.clone()),
    }
}

/// Replaces `$elements.<name>` with the element declared under the name.
///
/// # Errors
///
/// Returns an error if no element is declared under the name.
pub fn resolve_element_parameter(
    identifier: &Identifier,
    elements: &IdentifierCollection,
) -> Result<Identifier, ResolutionError> {
    match identifier {
        Identifier::ElementParameter(name) => step_element(name, elements).map(Identifier::Element),
        Identifier::Element(_)
        | Identifier::Attribute(_)
        | Identifier::AttributeParameter(_)
        | Identifier::PageElementReference(_)
        | Identifier::PageProperty(_)
        | Identifier::BrowserProperty(_)
        | Identifier::Empty => Ok(identifier.clone()),
    }
}

/// Replaces `$elements.<name>.<attribute>` with an attribute of the element
/// declared under the name.
///
/// # Errors
///
/// Returns an error if the property has no attribute part or no element is
/// declared under the name.
pub fn resolve_attribute_parameter(
    identifier: &Identifier,
    elements: &IdentifierCollection,
) -> Result<Identifier, ResolutionError> {
    match identifier {
        Identifier::AttributeParameter(property) => {
            step_attribute(property, elements).map(Identifier::Attribute)
        }
        Identifier::Element(_)
        | Identifier::Attribute(_)
        | Identifier::ElementParameter(_)
        | Identifier::PageElementReference(_)
        | Identifier::PageProperty(_)
        | Identifier::BrowserProperty(_)
        | Identifier::Empty => Ok(identifier.clone()),
    }
}

/// Looks up the element a page element reference points at.
///
/// The element is named after the reference's alias, or after the element
/// name on the page if the reference has no alias.
pub fn page_element(
    reference: &PageElementReference,
    pages: &dyn PageProvider,
) -> Result<ElementIdentifier, ResolutionError> {
    let (import_name, element_name) = reference.parts().ok_or_else(|| {
        ResolutionError::malformed_reference(
            reference.reference().to_string(),
            PAGE_ELEMENT_REFERENCE_SYNTAX,
        )
    })?;

    let page = find_page(&import_name, pages)?;

    let Some(element) = page.elements().element(&element_name) else {
        return Err(ResolutionError::unknown_page_element(
            import_name,
            element_name,
        ));
    };

    trace!(reference = %reference, "resolved page element reference");

    let name = reference.alias().cloned().unwrap_or(element_name);
    Ok(element.clone().with_name(name))
}

/// Looks up an element declared on the current step.
pub fn step_element(
    name: &ElementName,
    elements: &IdentifierCollection,
) -> Result<ElementIdentifier, ResolutionError> {
    elements
        .element(name)
        .cloned()
        .ok_or_else(|| ResolutionError::unknown_element(name.clone()))
}

/// Looks up an attribute of an element declared on the current step.
///
/// `property` is split at its first `.` into the element name and the
/// attribute name.
pub fn step_attribute(
    property: &str,
    elements: &IdentifierCollection,
) -> Result<AttributeIdentifier, ResolutionError> {
    let Some((element_name, attribute_name)) = property.split_once('.') else {
        return Err(ResolutionError::malformed_reference(
            format!("$elements.{property}"),
            ATTRIBUTE_PARAMETER_SYNTAX,
        ));
    };

    let element = step_element(&ElementName::new(element_name), elements)?;
    Ok(AttributeIdentifier::new(
        element,
        AttributeName::new(attribute_name),
    ))
}

#[cfg(test)]
mod tests {
    use thyme_model::{Page, PageImportName};

    use super::*;
    use crate::{
        error::ResolutionErrorKind,
        provider::PopulatedProvider,
        test::{
            assert_resolution_error,
            construct::{PageBuilder, css, page_reference},
        },
    };

    fn login_pages() -> PopulatedProvider<PageImportName, Page> {
        PopulatedProvider::new()
            .with_entry(
                PageImportName::new("login"),
                PageBuilder::new("https://example.com/login")
                    .with_element("form", css("form.login"))
                    .with_element("submit", css(".submit"))
                    .build(),
            )
            .with_non_retrievable(PageImportName::new("broken"), "invalid yaml")
    }

    fn step_elements() -> IdentifierCollection {
        IdentifierCollection::new()
            .with_identifier(ElementName::new("field"), css(".field").into())
            .with_identifier(ElementName::new("heading"), page_reference("login.elements.form"))
    }

    #[test]
    fn page_element_reference_yields_the_page_identifier_named_after_the_element() {
        let resolved = resolve_page_element_reference(
            &page_reference("login.elements.submit"),
            &login_pages(),
        )
        .expect("reference should resolve");

        assert_eq!(
            resolved,
            css(".submit").with_name(ElementName::new("submit")).into()
        );
    }

    #[test]
    fn aliased_page_element_reference_takes_the_alias() {
        let reference = page_reference("login.elements.submit").with_name(ElementName::new("go"));

        let resolved = resolve_page_element_reference(&reference, &login_pages())
            .expect("reference should resolve");

        assert_eq!(resolved.name(), Some(&ElementName::new("go")));
    }

    #[test]
    fn page_element_reference_failures() {
        let pages = login_pages();

        assert_resolution_error!(
            resolve_page_element_reference(&page_reference("home.elements.title"), &pages),
            ResolutionErrorKind::UnknownPage { import_name } if import_name.as_str() == "home"
        );
        assert_resolution_error!(
            resolve_page_element_reference(&page_reference("broken.elements.title"), &pages),
            ResolutionErrorKind::NonRetrievablePage { reason, .. } if reason == "invalid yaml"
        );
        assert_resolution_error!(
            resolve_page_element_reference(&page_reference("login.elements.title"), &pages),
            ResolutionErrorKind::UnknownPageElement { element_name, .. }
                if element_name.as_str() == "title"
        );
        assert_resolution_error!(
            resolve_page_element_reference(&page_reference(".form .submit"), &pages),
            ResolutionErrorKind::MalformedReference { reference, .. }
                if reference == ".form .submit"
        );
    }

    #[test]
    fn element_parameter_yields_the_declared_element() {
        let resolved = resolve_element_parameter(
            &Identifier::ElementParameter(ElementName::new("field")),
            &step_elements(),
        )
        .expect("parameter should resolve");

        assert_eq!(resolved, css(".field").with_name(ElementName::new("field")).into());
    }

    #[test]
    fn element_parameter_must_be_declared_as_an_element() {
        for name in ["missing", "heading"] {
            assert_resolution_error!(
                resolve_element_parameter(
                    &Identifier::ElementParameter(ElementName::new(name)),
                    &step_elements()
                ),
                ResolutionErrorKind::UnknownElement { element_name }
                    if element_name.as_str() == name
            );
        }
    }

    #[test]
    fn attribute_parameter_splits_at_the_first_dot() {
        let resolved = resolve_attribute_parameter(
            &Identifier::AttributeParameter("field.data.id".to_string()),
            &step_elements(),
        )
        .expect("parameter should resolve");

        assert_eq!(
            resolved,
            Identifier::Attribute(AttributeIdentifier::new(
                css(".field").with_name(ElementName::new("field")),
                AttributeName::new("data.id"),
            ))
        );
    }

    #[test]
    fn attribute_parameter_without_attribute_is_malformed() {
        assert_resolution_error!(
            resolve_attribute_parameter(
                &Identifier::AttributeParameter("field".to_string()),
                &step_elements()
            ),
            ResolutionErrorKind::MalformedReference { reference, .. }
                if reference == "$elements.field"
        );
    }

    #[test]
    fn resolved_identifiers_are_unchanged() {
        let pages = login_pages();
        let elements = step_elements();

        for identifier in [
            css(".x").into(),
            Identifier::PageProperty("url".to_string()),
            Identifier::BrowserProperty("size".to_string()),
            Identifier::Empty,
        ] {
            assert_eq!(resolve_identifier(&identifier, &pages, &elements), Ok(identifier));
        }
    }
}
