//! Parsers for element identifiers and the references that stand in for them.
//!
//! A concrete identifier is a quoted CSS selector or XPath expression:
//!
//! ```text
//! "{{ parent }} .selector":position.attribute
//! ```
//!
//! The parent prefix, the position suffix and the attribute suffix are all
//! optional. The closing quote is the first quote followed by whitespace, a
//! `:`, an attribute suffix or the end of the statement, so selectors may
//! contain quotes of their own (`"input[name="email"]"`).

use nom::{
    Input as _, Parser as _,
    bytes::complete::{tag, take_till, take_while1},
    character::complete::{char, space0, space1},
    combinator::opt,
    sequence::{delimited, preceded, terminated},
};
use thyme_model::{
    AttributeIdentifier, AttributeName, ElementIdentifier, ElementName, Identifier,
    IdentifierCollection, Locator, PageElementReference, Position,
};

use crate::{
    error::ParseErrorReason,
    util::{Result, Span, TokenError, failure},
};

/// Parses an identifier at the start of a statement.
///
/// Unquoted identifiers end at the first whitespace.
pub fn identifier<'a>(input: Span<'a>, elements: &IdentifierCollection) -> Result<'a, Identifier> {
    if input.fragment().starts_with('"') {
        quoted_identifier(input, elements)
    } else {
        let (rest, word) = take_till(char::is_whitespace).parse(input)?;
        Ok((rest, reference_identifier(word.fragment())))
    }
}

/// Classifies an unquoted identifier.
pub fn reference_identifier(word: &str) -> Identifier {
    if word.is_empty() {
        Identifier::Empty
    } else if let Some(property) = word.strip_prefix("$elements.") {
        if property.contains('.') {
            Identifier::AttributeParameter(property.to_string())
        } else {
            Identifier::ElementParameter(ElementName::new(property))
        }
    } else if let Some(property) = word.strip_prefix("$page.") {
        Identifier::PageProperty(property.to_string())
    } else if let Some(property) = word.strip_prefix("$browser.") {
        Identifier::BrowserProperty(property.to_string())
    } else {
        Identifier::PageElementReference(PageElementReference::new(word))
    }
}

fn quoted_identifier<'a>(
    input: Span<'a>,
    elements: &IdentifierCollection,
) -> Result<'a, Identifier> {
    let (rest, selector) = quoted_selector(input)?;
    let (rest, position) = opt(preceded(char(':'), position)).parse(rest)?;
    let (rest, attribute) = opt(preceded(char('.'), attribute_name)).parse(rest)?;

    let (selector, parent) = opt(parent_prefix).parse(selector)?;
    let parent = match parent {
        Some(parent_name) => Some(parent_element(parent_name, elements)?),
        None => None,
    };

    let mut element = ElementIdentifier::new(locator(selector.fragment()));
    if let Some(position) = position {
        element = element.with_position(position);
    }
    if let Some(parent) = parent {
        element = element.with_parent(parent);
    }

    let identifier = match attribute {
        Some(attribute) => Identifier::Attribute(AttributeIdentifier::new(
            element,
            AttributeName::new(attribute.fragment()),
        )),
        None => Identifier::Element(element),
    };

    Ok((rest, identifier))
}

fn locator(selector: &str) -> Locator {
    if selector.starts_with('/') || selector.starts_with("(/") {
        Locator::XPath(selector.to_string())
    } else {
        Locator::Css(selector.to_string())
    }
}

/// Parses `"selector"`, returning the selector without its quotes.
fn quoted_selector(input: Span<'_>) -> Result<'_, Span<'_>> {
    let (after_quote, _) = char('"').parse(input)?;

    match find_closing_quote(after_quote.fragment()) {
        Some(index) => {
            let (rest, selector) = after_quote.take_split(index);
            let (rest, _) = char('"').parse(rest)?;
            Ok((rest, selector))
        }
        None => failure(input, ParseErrorReason::UnterminatedSelector),
    }
}

fn find_closing_quote(text: &str) -> Option<usize> {
    text.char_indices()
        .filter(|&(_, c)| c == '"')
        .map(|(index, _)| index)
        .find(|&index| is_identifier_end(&text[index + 1..]))
}

fn is_identifier_end(after_quote: &str) -> bool {
    match after_quote.chars().next() {
        None | Some(':') => true,
        Some(c) if c.is_whitespace() => true,
        Some('.') => {
            let attribute = after_quote[1..]
                .split(char::is_whitespace)
                .next()
                .unwrap_or_default();
            !attribute.is_empty() && attribute.chars().all(is_attribute_char)
        }
        Some(_) => false,
    }
}

fn is_attribute_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

fn attribute_name(input: Span<'_>) -> Result<'_, Span<'_>> {
    take_while1(is_attribute_char).parse(input)
}

fn position(input: Span<'_>) -> Result<'_, Position> {
    let (rest, token) = take_till(|c: char| c.is_whitespace() || c == '.').parse(input)?;

    let ordinal = match *token.fragment() {
        "first" => Some(Position::FIRST.ordinal()),
        "last" => Some(Position::LAST.ordinal()),
        other => other.parse::<i32>().ok(),
    };

    match ordinal.and_then(Position::new) {
        Some(position) => Ok((rest, position)),
        None => failure(token, ParseErrorReason::InvalidPosition(token.fragment().to_string())),
    }
}

/// Parses `{{ name }} ` at the start of a selector, returning the name.
fn parent_prefix(input: Span<'_>) -> Result<'_, Span<'_>> {
    terminated(
        delimited(
            (tag("{{"), space0),
            take_while1(|c: char| c != '}' && !c.is_whitespace()),
            (space0, tag("}}")),
        ),
        space1,
    )
    .parse(input)
}

fn parent_element(
    parent_name: Span<'_>,
    elements: &IdentifierCollection,
) -> std::result::Result<ElementIdentifier, nom::Err<TokenError>> {
    let name = ElementName::new(parent_name.fragment());

    elements.element(&name).cloned().ok_or_else(|| {
        nom::Err::Failure(TokenError::new(
            parent_name,
            ParseErrorReason::UnknownParentElement(name),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Identifier {
        let (rest, identifier) = identifier(Span::new(text), &IdentifierCollection::new())
            .expect("identifier should parse");
        assert!(rest.fragment().trim().is_empty(), "unparsed `{}`", rest.fragment());
        identifier
    }

    fn parse_error(text: &str, elements: &IdentifierCollection) -> ParseErrorReason {
        match identifier(Span::new(text), elements) {
            Err(nom::Err::Failure(error)) => error.reason,
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn css_selector() {
        assert_eq!(parse("\".form .submit\""), ElementIdentifier::css(".form .submit").into());
    }

    #[test]
    fn xpath_expression() {
        assert_eq!(parse("\"//input[@type]\""), ElementIdentifier::xpath("//input[@type]").into());
        assert_eq!(
            parse("\"(//li)[2]\""),
            ElementIdentifier::xpath("(//li)[2]").into()
        );
    }

    #[test]
    fn selector_containing_quotes() {
        assert_eq!(
            parse("\"input[name=\"email\"]\""),
            ElementIdentifier::css("input[name=\"email\"]").into()
        );
    }

    #[test]
    fn positions() {
        assert_eq!(
            parse("\".item\":3"),
            ElementIdentifier::css(".item")
                .with_position(Position::new(3).expect("non-zero"))
                .into()
        );
        assert_eq!(
            parse("\".item\":-2"),
            ElementIdentifier::css(".item")
                .with_position(Position::new(-2).expect("non-zero"))
                .into()
        );
        assert_eq!(
            parse("\".item\":first"),
            ElementIdentifier::css(".item").with_position(Position::FIRST).into()
        );
        assert_eq!(
            parse("\".item\":last"),
            ElementIdentifier::css(".item").with_position(Position::LAST).into()
        );
    }

    #[test]
    fn invalid_positions_are_rejected() {
        let elements = IdentifierCollection::new();

        assert_eq!(
            parse_error("\".item\":0", &elements),
            ParseErrorReason::InvalidPosition("0".to_string())
        );
        assert_eq!(
            parse_error("\".item\":middle", &elements),
            ParseErrorReason::InvalidPosition("middle".to_string())
        );
    }

    #[test]
    fn attribute_of_selector() {
        assert_eq!(
            parse("\".link\":2.href"),
            Identifier::Attribute(AttributeIdentifier::new(
                ElementIdentifier::css(".link").with_position(Position::new(2).expect("non-zero")),
                AttributeName::new("href"),
            ))
        );
    }

    #[test]
    fn parent_prefix_uses_declared_element() {
        let form = ElementIdentifier::css("form").with_name(ElementName::new("form"));
        let elements = IdentifierCollection::new()
            .with_identifier(ElementName::new("form"), form.clone().into());

        let (_, identifier) = identifier(Span::new("\"{{ form }} .submit\""), &elements)
            .expect("identifier should parse");

        assert_eq!(identifier, ElementIdentifier::css(".submit").with_parent(form).into());
    }

    #[test]
    fn unknown_parent_is_rejected() {
        assert_eq!(
            parse_error("\"{{ form }} .submit\"", &IdentifierCollection::new()),
            ParseErrorReason::UnknownParentElement(ElementName::new("form"))
        );
    }

    #[test]
    fn unterminated_selector_is_rejected() {
        assert_eq!(
            parse_error("\".submit", &IdentifierCollection::new()),
            ParseErrorReason::UnterminatedSelector
        );
    }

    #[test]
    fn references_and_parameters() {
        assert_eq!(
            parse("$elements.field"),
            Identifier::ElementParameter(ElementName::new("field"))
        );
        assert_eq!(
            parse("$elements.field.value"),
            Identifier::AttributeParameter("field.value".to_string())
        );
        assert_eq!(parse("$page.url"), Identifier::PageProperty("url".to_string()));
        assert_eq!(parse("$browser.size"), Identifier::BrowserProperty("size".to_string()));
        assert_eq!(
            parse("login.elements.submit"),
            Identifier::PageElementReference(PageElementReference::new("login.elements.submit"))
        );
        assert_eq!(parse(""), Identifier::Empty);
    }

    #[test]
    fn unquoted_identifier_stops_at_whitespace() {
        let (rest, identifier) =
            identifier(Span::new("$elements.field to \"x\""), &IdentifierCollection::new())
                .expect("identifier should parse");

        assert_eq!(identifier, Identifier::ElementParameter(ElementName::new("field")));
        assert_eq!(*rest.fragment(), " to \"x\"");
    }
}
