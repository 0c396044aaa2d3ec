//! Parser for the statements in the `actions` list of a step.

use nom::{
    Parser as _,
    bytes::complete::{tag, take_till},
    character::complete::{space0, space1},
};
use thyme_model::{
    Action, IdentifierCollection, InputAction, InteractionAction, InteractionType, NavigationType,
};

use crate::{
    error::ParseErrorReason,
    identifier::identifier,
    util::{Result, Span, end_of_statement, failure},
    value::value,
};

/// Parses an action statement.
///
/// Unknown keywords produce [`Action::Unrecognised`] rather than an error.
pub fn action<'a>(input: Span<'a>, elements: &IdentifierCollection) -> Result<'a, Action> {
    let source = input.fragment().trim().to_string();

    let (rest, _) = space0.parse(input)?;
    let (rest, keyword) = take_till(char::is_whitespace).parse(rest)?;
    let (arguments, _) = space0.parse(rest)?;

    match *keyword.fragment() {
        "click" => interaction(arguments, source, InteractionType::Click, elements),
        "submit" => interaction(arguments, source, InteractionType::Submit, elements),
        "wait-for" => interaction(arguments, source, InteractionType::WaitFor, elements),
        "set" => input_action(arguments, source, elements),
        "wait" => {
            let duration = arguments.fragment().trim().to_string();
            let (rest, _) = end_of_line(arguments);
            Ok((rest, Action::Wait { source, duration }))
        }
        "reload" => navigation(arguments, source, NavigationType::Reload),
        "back" => navigation(arguments, source, NavigationType::Back),
        "forward" => navigation(arguments, source, NavigationType::Forward),
        _ => {
            let (rest, _) = end_of_line(arguments);
            Ok((rest, Action::Unrecognised { source }))
        }
    }
}

fn interaction<'a>(
    input: Span<'a>,
    source: String,
    interaction: InteractionType,
    elements: &IdentifierCollection,
) -> Result<'a, Action> {
    let (rest, identifier) = identifier(input, elements)?;
    let (rest, ()) = end_of_statement(rest)?;

    let action = InteractionAction::new(source, interaction, identifier);
    Ok((rest, action.into()))
}

/// Parses `<identifier> to <value>`.
fn input_action<'a>(
    input: Span<'a>,
    source: String,
    elements: &IdentifierCollection,
) -> Result<'a, Action> {
    let (rest, identifier) = identifier(input, elements)?;

    let to_keyword: Result<'_, (Span<'_>, Span<'_>)> = (space1, tag("to")).parse(rest);
    let Ok((rest, _)) = to_keyword else {
        return failure(rest, ParseErrorReason::ExpectedKeyword("to"));
    };

    let (rest, value_text) = end_of_line(rest);
    let action = InputAction::new(source, identifier, value(value_text.fragment()));

    Ok((rest, action.into()))
}

fn navigation(input: Span<'_>, source: String, navigation: NavigationType) -> Result<'_, Action> {
    let (rest, trailing) = end_of_line(input);

    if trailing.fragment().trim().is_empty() {
        Ok((rest, Action::NoArguments { source, navigation }))
    } else {
        Ok((rest, Action::Unrecognised { source }))
    }
}

/// Splits off everything that remains of the statement.
fn end_of_line(input: Span<'_>) -> (Span<'_>, Span<'_>) {
    nom::Input::take_split(&input, input.fragment().len())
}

#[cfg(test)]
mod tests {
    use thyme_model::{ElementIdentifier, ElementName, Identifier, Value};

    use super::*;

    fn parse(text: &str) -> Action {
        let (_, action) =
            action(Span::new(text), &IdentifierCollection::new()).expect("action should parse");
        action
    }

    #[test]
    fn interactions() {
        assert_eq!(
            parse("click \".submit\""),
            InteractionAction::new(
                "click \".submit\"",
                InteractionType::Click,
                ElementIdentifier::css(".submit").into()
            )
            .into()
        );
        assert_eq!(
            parse("wait-for $elements.spinner"),
            InteractionAction::new(
                "wait-for $elements.spinner",
                InteractionType::WaitFor,
                Identifier::ElementParameter(ElementName::new("spinner"))
            )
            .into()
        );
    }

    #[test]
    fn interaction_without_identifier_has_empty_identifier() {
        assert_eq!(parse("submit").identifier(), Some(&Identifier::Empty));
    }

    #[test]
    fn input_action() {
        assert_eq!(
            parse("set $elements.field to $data.key1"),
            InputAction::new(
                "set $elements.field to $data.key1",
                Identifier::ElementParameter(ElementName::new("field")),
                Value::DataParameter("key1".to_string()),
            )
            .into()
        );
    }

    #[test]
    fn input_action_with_quoted_selector_and_literal() {
        let action = parse("set \".search input\" to \"thyme to go\"");

        assert_eq!(
            action.identifier(),
            Some(&ElementIdentifier::css(".search input").into())
        );
        assert_eq!(action.value(), Some(&Value::literal("thyme to go")));
    }

    #[test]
    fn input_action_requires_to() {
        let result = action(Span::new("set $elements.field \"x\""), &IdentifierCollection::new());

        let Err(nom::Err::Failure(error)) = result else {
            panic!("expected a failure, got {result:?}");
        };
        assert_eq!(error.reason, ParseErrorReason::ExpectedKeyword("to"));
        assert_eq!(error.offset, 19);
    }

    #[test]
    fn input_action_with_to_after_extra_spaces() {
        let action = parse("set $elements.field   to \"x\"");

        assert_eq!(
            action.identifier(),
            Some(&Identifier::ElementParameter(ElementName::new("field")))
        );
        assert_eq!(action.value(), Some(&Value::literal("x")));
    }

    #[test]
    fn wait_and_navigation() {
        assert_eq!(
            parse("wait 500"),
            Action::Wait {
                source: "wait 500".to_string(),
                duration: "500".to_string()
            }
        );
        assert_eq!(
            parse("reload"),
            Action::NoArguments {
                source: "reload".to_string(),
                navigation: NavigationType::Reload
            }
        );
    }

    #[test]
    fn unknown_statements_are_unrecognised() {
        assert_eq!(
            parse("scroll down"),
            Action::Unrecognised {
                source: "scroll down".to_string()
            }
        );
        assert_eq!(
            parse("back twice"),
            Action::Unrecognised {
                source: "back twice".to_string()
            }
        );
    }

    #[test]
    fn trailing_text_after_interaction_is_rejected() {
        let result = action(Span::new("click \".a\" now"), &IdentifierCollection::new());

        let Err(nom::Err::Failure(error)) = result else {
            panic!("expected a failure, got {result:?}");
        };
        assert_eq!(error.reason, ParseErrorReason::UnexpectedText("now".to_string()));
        assert_eq!(error.offset, 11);
    }
}
