//! Actions performed against the browser.

use std::fmt;

use crate::{identifier::Identifier, value::Value};

/// The interaction performed by an [`InteractionAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionType {
    /// `click <identifier>`
    Click,
    /// `submit <identifier>`
    Submit,
    /// `wait-for <identifier>`
    WaitFor,
}

impl InteractionType {
    /// Returns the keyword that introduces this interaction.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
            Self::WaitFor => "wait-for",
        }
    }
}

/// The navigation performed by an argument-less action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationType {
    /// `reload`
    Reload,
    /// `back`
    Back,
    /// `forward`
    Forward,
}

impl NavigationType {
    /// Returns the keyword for this navigation.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Reload => "reload",
            Self::Back => "back",
            Self::Forward => "forward",
        }
    }
}

/// An action acting on a single element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractionAction {
    source: String,
    interaction: InteractionType,
    identifier: Identifier,
}

impl InteractionAction {
    /// Creates a new interaction action.
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        interaction: InteractionType,
        identifier: Identifier,
    ) -> Self {
        Self {
            source: source.into(),
            interaction,
            identifier,
        }
    }

    /// Returns the interaction performed.
    #[must_use]
    pub const fn interaction(&self) -> InteractionType {
        self.interaction
    }

    /// Returns the element interacted with.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Returns a copy of this action acting on a different element.
    #[must_use]
    pub fn with_identifier(self, identifier: Identifier) -> Self {
        Self { identifier, ..self }
    }
}

/// `set <identifier> to <value>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputAction {
    source: String,
    identifier: Identifier,
    value: Value,
}

impl InputAction {
    /// Creates a new input action.
    #[must_use]
    pub fn new(source: impl Into<String>, identifier: Identifier, value: Value) -> Self {
        Self {
            source: source.into(),
            identifier,
            value,
        }
    }

    /// Returns the element the value is entered into.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Returns the value entered.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns a copy of this action entering into a different element.
    #[must_use]
    pub fn with_identifier(self, identifier: Identifier) -> Self {
        Self { identifier, ..self }
    }

    /// Returns a copy of this action entering a different value.
    #[must_use]
    pub fn with_value(self, value: Value) -> Self {
        Self { value, ..self }
    }
}

/// A single statement in the `actions` list of a step.
///
/// Every action keeps the statement it was parsed from so that diagnostics
/// can point at it after resolution has rewritten its identifier or value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// `click`, `submit` or `wait-for` an element.
    Interaction(InteractionAction),
    /// `set` an element to a value.
    Input(InputAction),
    /// `wait <duration>`
    Wait {
        /// The statement as written.
        source: String,
        /// The raw duration, either milliseconds or a `$data` parameter.
        duration: String,
    },
    /// `reload`, `back` or `forward`
    NoArguments {
        /// The statement as written.
        source: String,
        /// The navigation performed.
        navigation: NavigationType,
    },
    /// A statement that is not a known action.
    Unrecognised {
        /// The statement as written.
        source: String,
    },
}

impl Action {
    /// Returns the statement this action was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Interaction(action) => &action.source,
            Self::Input(action) => &action.source,
            Self::Wait { source, .. }
            | Self::NoArguments { source, .. }
            | Self::Unrecognised { source } => source,
        }
    }

    /// Returns the identifier of an interaction or input action.
    #[must_use]
    pub const fn identifier(&self) -> Option<&Identifier> {
        match self {
            Self::Interaction(action) => Some(action.identifier()),
            Self::Input(action) => Some(action.identifier()),
            Self::Wait { .. } | Self::NoArguments { .. } | Self::Unrecognised { .. } => None,
        }
    }

    /// Returns the value of an input action.
    #[must_use]
    pub const fn value(&self) -> Option<&Value> {
        match self {
            Self::Input(action) => Some(action.value()),
            Self::Interaction(_)
            | Self::Wait { .. }
            | Self::NoArguments { .. }
            | Self::Unrecognised { .. } => None,
        }
    }
}

impl From<InteractionAction> for Action {
    fn from(action: InteractionAction) -> Self {
        Self::Interaction(action)
    }
}

impl From<InputAction> for Action {
    fn from(action: InputAction) -> Self {
        Self::Input(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interaction(action) => {
                write!(f, "{} {}", action.interaction.keyword(), action.identifier)
            }
            Self::Input(action) => write!(f, "set {} to {}", action.identifier, action.value),
            Self::Wait { duration, .. } => write!(f, "wait {duration}"),
            Self::NoArguments { navigation, .. } => f.write_str(navigation.keyword()),
            Self::Unrecognised { source } => f.write_str(source),
        }
    }
}
