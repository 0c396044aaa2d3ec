//! Parsers for the values given to input actions and assertions.

use nom::{
    IResult, Parser as _,
    branch::alt,
    bytes::complete::{escaped_transform, is_not, tag},
    character::complete::char,
    combinator::{all_consuming, opt, value as replace_with},
    sequence::delimited,
};
use thyme_model::{ElementName, PageElementReference, Value};

/// Classifies the text of a value.
///
/// Values never fail to parse: anything that is not a quoted literal, a
/// parameter, a property or a well formed page element reference is a bare
/// literal.
pub fn value(text: &str) -> Value {
    let text = text.trim();

    if let Ok((_, literal)) = quoted_literal(text) {
        Value::Literal(literal)
    } else if let Some(key) = text.strip_prefix("$data.") {
        Value::DataParameter(key.to_string())
    } else if let Some(property) = text.strip_prefix("$elements.") {
        if property.contains('.') {
            Value::AttributeParameter(property.to_string())
        } else {
            Value::ElementParameter(ElementName::new(property))
        }
    } else if let Some(property) = text.strip_prefix("$page.") {
        Value::PageProperty(property.to_string())
    } else if let Some(property) = text.strip_prefix("$browser.") {
        Value::BrowserProperty(property.to_string())
    } else {
        let reference = PageElementReference::new(text);
        if reference.is_valid() {
            Value::PageElementReference(reference)
        } else {
            Value::Literal(text.to_string())
        }
    }
}

/// Parses `"text"`, where `\"` and `\\` are escapes.
fn quoted_literal(input: &str) -> IResult<&str, String> {
    all_consuming(delimited(
        char('"'),
        opt(escaped_transform(
            is_not("\\\""),
            '\\',
            alt((replace_with("\"", tag("\"")), replace_with("\\", tag("\\")))),
        )),
        char('"'),
    ))
    .map(Option::unwrap_or_default)
    .parse(input)
}
