//! Parser for the statements in the `assertions` list of a step.

use nom::{
    Parser as _,
    bytes::complete::take_till,
    character::complete::space0,
};
use thyme_model::{Assertion, Comparison, IdentifierCollection};

use crate::{
    error::ParseErrorReason,
    identifier::identifier,
    util::{Result, Span, failure},
    value::value,
};

/// Parses `<identifier> <comparison> [<value>]`.
pub fn assertion<'a>(input: Span<'a>, elements: &IdentifierCollection) -> Result<'a, Assertion> {
    let source = input.fragment().trim().to_string();

    let (rest, _) = space0.parse(input)?;
    let (rest, identifier) = identifier(rest, elements)?;
    let (rest, _) = space0.parse(rest)?;

    if rest.fragment().is_empty() {
        return failure(rest, ParseErrorReason::MissingComparison);
    }

    let (rest, keyword) = take_till(char::is_whitespace).parse(rest)?;
    let Some(comparison) = Comparison::from_keyword(keyword.fragment()) else {
        return failure(
            keyword,
            ParseErrorReason::UnknownComparison(keyword.fragment().to_string()),
        );
    };

    let (rest, _) = space0.parse(rest)?;
    let value_text = rest.fragment().trim_end();

    let expected = match (comparison.requires_value(), value_text.is_empty()) {
        (true, true) => return failure(rest, ParseErrorReason::MissingValue(comparison)),
        (false, false) => {
            return failure(rest, ParseErrorReason::UnexpectedText(value_text.to_string()));
        }
        (true, false) => Some(value(value_text)),
        (false, true) => None,
    };

    let (rest, _) = nom::Input::take_split(&rest, rest.fragment().len());
    Ok((rest, Assertion::new(source, identifier, comparison, expected)))
}

#[cfg(test)]
mod tests {
    use thyme_model::{ElementIdentifier, ElementName, Identifier, Value};

    use super::*;

    fn parse(text: &str) -> Assertion {
        let (_, assertion) = assertion(Span::new(text), &IdentifierCollection::new())
            .expect("assertion should parse");
        assertion
    }

    fn parse_error(text: &str) -> (usize, ParseErrorReason) {
        match assertion(Span::new(text), &IdentifierCollection::new()) {
            Err(nom::Err::Failure(error)) => (error.offset, error.reason),
            other => panic!("expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn existence_assertion() {
        assert_eq!(
            parse("\".banner\" exists"),
            Assertion::new(
                "\".banner\" exists",
                ElementIdentifier::css(".banner").into(),
                Comparison::Exists,
                None
            )
        );
    }

    #[test]
    fn value_assertion() {
        assert_eq!(
            parse("$page.title is \"Welcome\""),
            Assertion::new(
                "$page.title is \"Welcome\"",
                Identifier::PageProperty("title".to_string()),
                Comparison::Is,
                Some(Value::literal("Welcome"))
            )
        );
    }

    #[test]
    fn attribute_parameter_subject() {
        let assertion = parse("$elements.field.value matches \"/^a/\"");

        assert_eq!(
            assertion.identifier(),
            &Identifier::AttributeParameter("field.value".to_string())
        );
        assert_eq!(assertion.value(), Some(&Value::literal("/^a/")));
    }

    #[test]
    fn value_may_reference_an_element() {
        let assertion = parse("\".total\" is $elements.expected");

        assert_eq!(
            assertion.value(),
            Some(&Value::ElementParameter(ElementName::new("expected")))
        );
    }

    #[test]
    fn missing_comparison() {
        assert_eq!(parse_error("\".banner\""), (9, ParseErrorReason::MissingComparison));
    }

    #[test]
    fn unknown_comparison() {
        assert_eq!(
            parse_error("\".banner\" equals \"x\""),
            (10, ParseErrorReason::UnknownComparison("equals".to_string()))
        );
    }

    #[test]
    fn missing_value() {
        assert_eq!(
            parse_error("\".banner\" includes"),
            (18, ParseErrorReason::MissingValue(Comparison::Includes))
        );
    }

    #[test]
    fn existence_takes_no_value() {
        assert_eq!(
            parse_error("\".banner\" not-exists \"x\""),
            (21, ParseErrorReason::UnexpectedText("\"x\"".to_string()))
        );
    }
}
