//! Values supply the operand of an input action or an assertion.

use std::fmt;

use crate::{
    identifier::{AttributeIdentifier, ElementIdentifier, PageElementReference},
    name::ElementName,
};

/// The operand of an input action or a value comparison.
///
/// Before resolution a value may be any of the reference forms. After
/// resolution it is a [`Value::Literal`], a [`Value::DataParameter`] (data
/// is substituted when the test runs), a page or browser property, or one of
/// the resolved element forms [`Value::Element`] and [`Value::Attribute`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A literal string.
    Literal(String),
    /// `$data.<key>`
    DataParameter(String),
    /// `$elements.<name>`
    ElementParameter(ElementName),
    /// `$elements.<name>.<attribute>`, kept as the raw `<name>.<attribute>` property.
    AttributeParameter(String),
    /// `<import_name>.elements.<element_name>`
    PageElementReference(PageElementReference),
    /// `$page.<property>`
    PageProperty(String),
    /// `$browser.<property>`
    BrowserProperty(String),
    /// The text of a resolved element.
    Element(ElementIdentifier),
    /// An attribute of a resolved element.
    Attribute(AttributeIdentifier),
}

impl Value {
    /// Creates a literal value.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Returns whether this value still refers to something that must be resolved.
    #[must_use]
    pub const fn requires_resolution(&self) -> bool {
        matches!(
            self,
            Self::ElementParameter(_) | Self::AttributeParameter(_) | Self::PageElementReference(_)
        )
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "\"{}\"", value.replace('"', "\\\"")),
            Self::DataParameter(key) => write!(f, "$data.{key}"),
            Self::ElementParameter(name) => write!(f, "$elements.{name}"),
            Self::AttributeParameter(property) => write!(f, "$elements.{property}"),
            Self::PageElementReference(reference) => write!(f, "{reference}"),
            Self::PageProperty(property) => write!(f, "$page.{property}"),
            Self::BrowserProperty(property) => write!(f, "$browser.{property}"),
            Self::Element(element) => write!(f, "{element}"),
            Self::Attribute(attribute) => write!(f, "{attribute}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_display_escapes_quotes() {
        let value = Value::literal("say \"hi\"");

        assert_eq!(value.to_string(), r#""say \"hi\"""#);
    }

    #[test]
    fn only_references_require_resolution() {
        assert!(Value::ElementParameter(ElementName::new("field")).requires_resolution());
        assert!(Value::AttributeParameter("field.value".to_string()).requires_resolution());
        assert!(!Value::DataParameter("key".to_string()).requires_resolution());
        assert!(!Value::Element(ElementIdentifier::css(".field")).requires_resolution());
    }
}
