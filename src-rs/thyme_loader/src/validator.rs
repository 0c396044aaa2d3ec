//! Checks that a resolved test can be run.

use std::fmt;

use thyme_model::{Action, Identifier, StepDefinition, StepName, Test, Value};
use thyme_resolver::page_url_reference;
use tracing::debug;

/// The outcome of validating a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// The test can be run.
    Valid,
    /// The test cannot be run, for the first reason found.
    Invalid(InvalidReason),
}

impl Validity {
    /// Returns whether the test can be run.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Why a resolved test cannot be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    /// The configuration names no browser.
    EmptyBrowser,
    /// The configuration has no url.
    EmptyUrl,
    /// The configuration url still refers to a page.
    UnresolvedUrl {
        /// The url as written
        url: String,
    },
    /// The test has no steps.
    NoSteps,
    /// A step has neither actions nor assertions.
    EmptyStep {
        /// The empty step
        step: StepName,
    },
    /// A step still has imports waiting to be resolved.
    UnresolvedStep {
        /// The unresolved step
        step: StepName,
    },
    /// An action statement is not a known action.
    UnrecognisedAction {
        /// The step holding the action
        step: StepName,
        /// The action statement
        source: String,
    },
    /// An interaction or input action has no identifier.
    MissingIdentifier {
        /// The step holding the action
        step: StepName,
        /// The action statement
        source: String,
    },
    /// A `wait` action has no duration.
    MissingDuration {
        /// The step holding the action
        step: StepName,
        /// The action statement
        source: String,
    },
    /// A statement still refers to an element parameter or a page element.
    UnresolvedReference {
        /// The step holding the statement
        step: StepName,
        /// The statement
        source: String,
    },
    /// An assertion with a value comparison has no value.
    MissingValue {
        /// The step holding the assertion
        step: StepName,
        /// The assertion statement
        source: String,
    },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBrowser => write!(f, "the test does not name a browser"),
            Self::EmptyUrl => write!(f, "the test does not have a url"),
            Self::UnresolvedUrl { url } => {
                write!(f, "the test url `{url}` still refers to a page")
            }
            Self::NoSteps => write!(f, "the test has no steps"),
            Self::EmptyStep { step } => {
                write!(f, "step `{step}` has no actions and no assertions")
            }
            Self::UnresolvedStep { step } => {
                write!(f, "step `{step}` still has unresolved imports")
            }
            Self::UnrecognisedAction { step, source } => {
                write!(f, "unrecognised action `{source}` in step `{step}`")
            }
            Self::MissingIdentifier { step, source } => {
                write!(f, "action `{source}` in step `{step}` has no identifier")
            }
            Self::MissingDuration { step, source } => {
                write!(f, "action `{source}` in step `{step}` has no duration")
            }
            Self::UnresolvedReference { step, source } => {
                write!(f, "`{source}` in step `{step}` has an unresolved reference")
            }
            Self::MissingValue { step, source } => {
                write!(f, "assertion `{source}` in step `{step}` has no value")
            }
        }
    }
}

/// Checks that a resolved test can be run.
///
/// The configuration is checked first, then each step in order. Only the
/// first problem found is reported.
#[must_use]
pub fn validate_test(test: &Test) -> Validity {
    let validity = match check_test(test) {
        Ok(()) => Validity::Valid,
        Err(reason) => Validity::Invalid(reason),
    };

    debug!(test = %test.name(), valid = validity.is_valid(), "validated test");

    validity
}

fn check_test(test: &Test) -> Result<(), InvalidReason> {
    let configuration = test.configuration();

    if configuration.browser().trim().is_empty() {
        return Err(InvalidReason::EmptyBrowser);
    }

    let url = configuration.url().trim();
    if url.is_empty() {
        return Err(InvalidReason::EmptyUrl);
    }
    if page_url_reference(url).is_some() {
        return Err(InvalidReason::UnresolvedUrl {
            url: url.to_string(),
        });
    }

    if test.steps().is_empty() {
        return Err(InvalidReason::NoSteps);
    }

    for (name, definition) in test.steps() {
        check_step(name, definition)?;
    }

    Ok(())
}

fn check_step(name: &StepName, definition: &StepDefinition) -> Result<(), InvalidReason> {
    let Some(step) = definition.as_plain() else {
        return Err(InvalidReason::UnresolvedStep { step: name.clone() });
    };

    if step.is_empty() {
        return Err(InvalidReason::EmptyStep { step: name.clone() });
    }

    for action in step.actions() {
        check_action(name, action)?;
    }

    for assertion in step.assertions() {
        if assertion.identifier().requires_resolution()
            || assertion.value().is_some_and(Value::requires_resolution)
        {
            return Err(InvalidReason::UnresolvedReference {
                step: name.clone(),
                source: assertion.source().to_string(),
            });
        }
        if assertion.comparison().requires_value() && assertion.value().is_none() {
            return Err(InvalidReason::MissingValue {
                step: name.clone(),
                source: assertion.source().to_string(),
            });
        }
    }

    Ok(())
}

fn check_action(step: &StepName, action: &Action) -> Result<(), InvalidReason> {
    let source = || action.source().to_string();

    if action.identifier().is_some_and(Identifier::requires_resolution)
        || action.value().is_some_and(Value::requires_resolution)
    {
        return Err(InvalidReason::UnresolvedReference {
            step: step.clone(),
            source: source(),
        });
    }

    match action {
        Action::Unrecognised { .. } => Err(InvalidReason::UnrecognisedAction {
            step: step.clone(),
            source: source(),
        }),
        Action::Interaction(interaction) if interaction.identifier().is_empty() => {
            Err(InvalidReason::MissingIdentifier {
                step: step.clone(),
                source: source(),
            })
        }
        Action::Input(input) if input.identifier().is_empty() => {
            Err(InvalidReason::MissingIdentifier {
                step: step.clone(),
                source: source(),
            })
        }
        Action::Wait { duration, .. } if duration.trim().is_empty() => {
            Err(InvalidReason::MissingDuration {
                step: step.clone(),
                source: source(),
            })
        }
        Action::Interaction(_)
        | Action::Input(_)
        | Action::Wait { .. }
        | Action::NoArguments { .. } => Ok(()),
    }
}
