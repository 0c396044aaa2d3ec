//! Identifiers locate the subject of an action or assertion.
//!
//! An identifier is either a concrete element locator (a CSS selector or an
//! XPath expression), or one of several references that must be resolved
//! before the test can run.

use std::fmt;

use crate::name::{AttributeName, ElementName, PageImportName};

/// A 1-based match index. Negative positions count from the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position(i32);

impl Position {
    /// The first matching element.
    pub const FIRST: Self = Self(1);
    /// The last matching element.
    pub const LAST: Self = Self(-1);

    /// Creates a position, returning `None` for the meaningless position 0.
    #[must_use]
    pub const fn new(ordinal: i32) -> Option<Self> {
        if ordinal == 0 { None } else { Some(Self(ordinal)) }
    }

    /// Returns the ordinal value of this position.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self.0
    }
}

/// The selector language used by an element identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Locator {
    /// A CSS selector, such as `.form .submit`.
    Css(String),
    /// An XPath expression, such as `//input[@type="submit"]`.
    XPath(String),
}

impl Locator {
    /// Returns the raw selector text.
    #[must_use]
    pub fn selector(&self) -> &str {
        match self {
            Self::Css(selector) | Self::XPath(selector) => selector,
        }
    }
}

/// A concrete element identifier.
///
/// An element may be scoped to a parent element, in which case it is only
/// searched for within the element matched by its parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementIdentifier {
    locator: Locator,
    position: Option<Position>,
    name: Option<ElementName>,
    parent: Option<Box<ElementIdentifier>>,
}

impl ElementIdentifier {
    /// Creates an unnamed, unscoped identifier matching the first element.
    #[must_use]
    pub const fn new(locator: Locator) -> Self {
        Self {
            locator,
            position: None,
            name: None,
            parent: None,
        }
    }

    /// Shorthand for an identifier using a CSS selector.
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Locator::Css(selector.into()))
    }

    /// Shorthand for an identifier using an XPath expression.
    #[must_use]
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::new(Locator::XPath(expression.into()))
    }

    /// Returns a copy of this identifier with the given position.
    #[must_use]
    pub fn with_position(self, position: Position) -> Self {
        Self {
            position: Some(position),
            ..self
        }
    }

    /// Returns a copy of this identifier with the given name.
    #[must_use]
    pub fn with_name(self, name: ElementName) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    /// Returns a copy of this identifier scoped to the given parent.
    #[must_use]
    pub fn with_parent(self, parent: Self) -> Self {
        Self {
            parent: Some(Box::new(parent)),
            ..self
        }
    }

    /// Returns the locator of this identifier.
    #[must_use]
    pub const fn locator(&self) -> &Locator {
        &self.locator
    }

    /// Returns the explicit position, if one was given.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }

    /// Returns the name of this identifier, if it has one.
    #[must_use]
    pub const fn name(&self) -> Option<&ElementName> {
        self.name.as_ref()
    }

    /// Returns the parent identifier, if this identifier is scoped.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}

impl fmt::Display for ElementIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent_prefix = self
            .parent
            .as_ref()
            .and_then(|parent| parent.name())
            .map(|name| format!("{{{{ {name} }}}} "))
            .unwrap_or_default();

        write!(f, "\"{parent_prefix}{}\"", self.locator.selector())?;

        match self.position {
            Some(position) => write!(f, ":{}", position.ordinal()),
            None => Ok(()),
        }
    }
}

/// An attribute read from a resolved element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributeIdentifier {
    element: ElementIdentifier,
    attribute: AttributeName,
}

impl AttributeIdentifier {
    /// Creates a new attribute identifier.
    #[must_use]
    pub const fn new(element: ElementIdentifier, attribute: AttributeName) -> Self {
        Self { element, attribute }
    }

    /// Returns the element the attribute is read from.
    #[must_use]
    pub const fn element(&self) -> &ElementIdentifier {
        &self.element
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn attribute(&self) -> &AttributeName {
        &self.attribute
    }
}

impl fmt::Display for AttributeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element, self.attribute)
    }
}

/// A reference to an element declared on an imported page.
///
/// The reference text is kept as written; [`PageElementReference::parts`]
/// only succeeds when it has the form `<import_name>.elements.<element_name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageElementReference {
    reference: String,
    alias: Option<ElementName>,
}

impl PageElementReference {
    const ELEMENTS_SEGMENT: &'static str = "elements";

    /// Creates a new, unaliased page element reference.
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            alias: None,
        }
    }

    /// Returns a copy of this reference carrying a local name.
    #[must_use]
    pub fn with_alias(self, alias: ElementName) -> Self {
        Self {
            alias: Some(alias),
            ..self
        }
    }

    /// Returns the reference text as written.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the local name of the reference, if it has one.
    #[must_use]
    pub const fn alias(&self) -> Option<&ElementName> {
        self.alias.as_ref()
    }

    /// Returns whether the reference text is well formed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.parts().is_some()
    }

    /// Splits the reference into its page import name and element name.
    #[must_use]
    pub fn parts(&self) -> Option<(PageImportName, ElementName)> {
        let mut segments = self.reference.split('.');

        let import_name = segments.next()?;
        let elements = segments.next()?;
        let element_name = segments.next()?;

        let is_well_formed = segments.next().is_none()
            && elements == Self::ELEMENTS_SEGMENT
            && is_reference_segment(import_name)
            && is_reference_segment(element_name);

        is_well_formed.then(|| (PageImportName::new(import_name), ElementName::new(element_name)))
    }
}

fn is_reference_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('$')
        && !segment.chars().any(char::is_whitespace)
        && !segment.contains('"')
}

impl fmt::Display for PageElementReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reference)
    }
}

/// The subject of an action or assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// A concrete element locator.
    Element(ElementIdentifier),
    /// An attribute of a concrete element.
    Attribute(AttributeIdentifier),
    /// `$elements.<name>`: an element declared on the current step.
    ElementParameter(ElementName),
    /// `$elements.<name>.<attribute>`: the raw `<name>.<attribute>` property.
    AttributeParameter(String),
    /// `<import_name>.elements.<element_name>`: an element declared on a page.
    PageElementReference(PageElementReference),
    /// `$page.<property>`
    PageProperty(String),
    /// `$browser.<property>`
    BrowserProperty(String),
    /// No identifier was given.
    Empty,
}

impl Identifier {
    /// Returns the name under which this identifier can be addressed, if any.
    #[must_use]
    pub fn name(&self) -> Option<&ElementName> {
        match self {
            Self::Element(element) => element.name(),
            Self::PageElementReference(reference) => reference.alias(),
            Self::Attribute(_)
            | Self::ElementParameter(_)
            | Self::AttributeParameter(_)
            | Self::PageProperty(_)
            | Self::BrowserProperty(_)
            | Self::Empty => None,
        }
    }

    /// Returns a copy of this identifier addressable under the given name.
    ///
    /// Only element identifiers and page element references can be named;
    /// other identifiers are returned unchanged.
    #[must_use]
    pub fn with_name(self, name: ElementName) -> Self {
        match self {
            Self::Element(element) => Self::Element(element.with_name(name)),
            Self::PageElementReference(reference) => {
                Self::PageElementReference(reference.with_alias(name))
            }
            other @ (Self::Attribute(_)
            | Self::ElementParameter(_)
            | Self::AttributeParameter(_)
            | Self::PageProperty(_)
            | Self::BrowserProperty(_)
            | Self::Empty) => other,
        }
    }

    /// Returns the element identifier, if this is a concrete element.
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementIdentifier> {
        match self {
            Self::Element(element) => Some(element),
            Self::Attribute(_)
            | Self::ElementParameter(_)
            | Self::AttributeParameter(_)
            | Self::PageElementReference(_)
            | Self::PageProperty(_)
            | Self::BrowserProperty(_)
            | Self::Empty => None,
        }
    }

    /// Returns whether this identifier still refers to something that must be resolved.
    #[must_use]
    pub const fn requires_resolution(&self) -> bool {
        matches!(
            self,
            Self::ElementParameter(_) | Self::AttributeParameter(_) | Self::PageElementReference(_)
        )
    }

    /// Returns whether no identifier was given.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<ElementIdentifier> for Identifier {
    fn from(element: ElementIdentifier) -> Self {
        Self::Element(element)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(element) => write!(f, "{element}"),
            Self::Attribute(attribute) => write!(f, "{attribute}"),
            Self::ElementParameter(name) => write!(f, "$elements.{name}"),
            Self::AttributeParameter(property) => write!(f, "$elements.{property}"),
            Self::PageElementReference(reference) => write!(f, "{reference}"),
            Self::PageProperty(property) => write!(f, "$page.{property}"),
            Self::BrowserProperty(property) => write!(f, "$browser.{property}"),
            Self::Empty => Ok(()),
        }
    }
}
