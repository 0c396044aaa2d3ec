//! Action and assertion resolution.

use thyme_model::{Action, Assertion, Identifier, IdentifierCollection};

use crate::{
    error::ResolutionError,
    provider::PageProvider,
    resolver::{identifier::resolve_identifier, value::resolve_value},
};

/// Resolves the identifier and value of an action.
///
/// Actions without an identifier are returned unchanged.
///
/// # Errors
///
/// Returns an error if the identifier or the value cannot be resolved.
pub fn resolve_action(
    action: &Action,
    pages: &dyn PageProvider,
    elements: &IdentifierCollection,
) -> Result<Action, ResolutionError> {
    match action {
        Action::Interaction(interaction) => {
            let identifier = resolve_identifier(interaction.identifier(), pages, elements)?;
            Ok(interaction.clone().with_identifier(identifier).into())
        }
        Action::Input(input) => {
            let identifier = resolve_identifier(input.identifier(), pages, elements)?;
            let value = resolve_value(input.value(), pages, elements)?;
            Ok(input
                .clone()
                .with_identifier(identifier)
                .with_value(value)
                .into())
        }
        Action::Wait { .. } | Action::NoArguments { .. } | Action::Unrecognised { .. } => {
            Ok(action.clone())
        }
    }
}

/// Resolves the subject and expected value of an assertion.
///
/// # Errors
///
/// Returns an error if the subject or the value cannot be resolved.
pub fn resolve_assertion(
    assertion: &Assertion,
    pages: &dyn PageProvider,
    elements: &IdentifierCollection,
) -> Result<Assertion, ResolutionError> {
    let identifier: Identifier = resolve_identifier(assertion.identifier(), pages, elements)?;
    let resolved = assertion.clone().with_identifier(identifier);

    match assertion.value() {
        Some(value) => Ok(resolved.with_value(resolve_value(value, pages, elements)?)),
        None => Ok(resolved),
    }
}

#[cfg(test)]
mod tests {
    use thyme_model::{
        AttributeIdentifier, AttributeName, Comparison, ElementName, InputAction,
        InteractionAction, InteractionType, NavigationType, Value,
    };

    use super::*;
    use crate::{
        error::ResolutionErrorKind,
        provider::EmptyProvider,
        test::{assert_resolution_error, construct::css},
    };

    fn elements() -> IdentifierCollection {
        IdentifierCollection::new()
            .with_identifier(ElementName::new("field"), css(".field").into())
            .with_identifier(ElementName::new("button"), css("button").into())
    }

    fn field() -> Identifier {
        css(".field").with_name(ElementName::new("field")).into()
    }

    #[test]
    fn input_action_resolves_identifier_and_keeps_data_parameter() {
        let action: Action = InputAction::new(
            "set $elements.field to $data.key1",
            Identifier::ElementParameter(ElementName::new("field")),
            Value::DataParameter("key1".to_string()),
        )
        .into();

        let resolved = resolve_action(&action, &EmptyProvider, &elements())
            .expect("action should resolve");

        assert_eq!(resolved.identifier(), Some(&field()));
        assert_eq!(resolved.value(), Some(&Value::DataParameter("key1".to_string())));
        assert_eq!(resolved.source(), "set $elements.field to $data.key1");
    }

    #[test]
    fn input_value_may_reference_an_element() {
        let action: Action = InputAction::new(
            "set $elements.field to $elements.button",
            Identifier::ElementParameter(ElementName::new("field")),
            Value::ElementParameter(ElementName::new("button")),
        )
        .into();

        let resolved = resolve_action(&action, &EmptyProvider, &elements())
            .expect("action should resolve");

        assert_eq!(
            resolved.value(),
            Some(&Value::Element(css("button").with_name(ElementName::new("button"))))
        );
    }

    #[test]
    fn interaction_with_unknown_element_fails() {
        let action: Action = InteractionAction::new(
            "click $elements.missing",
            InteractionType::Click,
            Identifier::ElementParameter(ElementName::new("missing")),
        )
        .into();

        assert_resolution_error!(
            resolve_action(&action, &EmptyProvider, &elements()),
            ResolutionErrorKind::UnknownElement { .. }
        );
    }

    #[test]
    fn navigation_passes_through() {
        let action = Action::NoArguments {
            source: "reload".to_string(),
            navigation: NavigationType::Reload,
        };

        assert_eq!(resolve_action(&action, &EmptyProvider, &elements()), Ok(action));
    }

    #[test]
    fn assertion_on_attribute_parameter() {
        let assertion = Assertion::new(
            "$elements.field.value is \"x\"",
            Identifier::AttributeParameter("field.value".to_string()),
            Comparison::Is,
            Some(Value::literal("x")),
        );

        let resolved = resolve_assertion(&assertion, &EmptyProvider, &elements())
            .expect("assertion should resolve");

        assert_eq!(
            resolved.identifier(),
            &Identifier::Attribute(AttributeIdentifier::new(
                css(".field").with_name(ElementName::new("field")),
                AttributeName::new("value"),
            ))
        );
        assert_eq!(resolved.value(), Some(&Value::literal("x")));
    }

    #[test]
    fn assertion_without_value_keeps_none() {
        let assertion = Assertion::new(
            "$elements.button exists",
            Identifier::ElementParameter(ElementName::new("button")),
            Comparison::Exists,
            None,
        );

        let resolved = resolve_assertion(&assertion, &EmptyProvider, &elements())
            .expect("assertion should resolve");

        assert_eq!(resolved.value(), None);
        assert_eq!(resolved.comparison(), Comparison::Exists);
    }
}
