//! Steps and the imports they may still be waiting on.

use crate::{
    action::Action,
    assertion::Assertion,
    data_set::DataSetCollection,
    identifier_collection::IdentifierCollection,
    name::{DataProviderName, StepImportName},
};

/// An ordered group of actions and assertions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    actions: Vec<Action>,
    assertions: Vec<Assertion>,
    identifiers: IdentifierCollection,
    data_sets: Option<DataSetCollection>,
}

impl Step {
    /// Creates a step with the given actions and assertions.
    #[must_use]
    pub fn new(actions: Vec<Action>, assertions: Vec<Assertion>) -> Self {
        Self {
            actions,
            assertions,
            identifiers: IdentifierCollection::new(),
            data_sets: None,
        }
    }

    /// Returns the actions of this step in execution order.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the assertions of this step in execution order.
    #[must_use]
    pub fn assertions(&self) -> &[Assertion] {
        &self.assertions
    }

    /// Returns the named identifiers declared on this step.
    #[must_use]
    pub const fn identifiers(&self) -> &IdentifierCollection {
        &self.identifiers
    }

    /// Returns the data sets this step runs with, if any.
    #[must_use]
    pub const fn data_sets(&self) -> Option<&DataSetCollection> {
        self.data_sets.as_ref()
    }

    /// Returns whether the step has neither actions nor assertions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.assertions.is_empty()
    }

    /// Returns a copy of this step with different actions.
    #[must_use]
    pub fn with_actions(self, actions: Vec<Action>) -> Self {
        Self { actions, ..self }
    }

    /// Returns a copy of this step with different assertions.
    #[must_use]
    pub fn with_assertions(self, assertions: Vec<Assertion>) -> Self {
        Self { assertions, ..self }
    }

    /// Returns a copy of this step with different named identifiers.
    #[must_use]
    pub fn with_identifiers(self, identifiers: IdentifierCollection) -> Self {
        Self {
            identifiers,
            ..self
        }
    }

    /// Returns a copy of this step running with the given data sets.
    #[must_use]
    pub fn with_data_sets(self, data_sets: DataSetCollection) -> Self {
        Self {
            data_sets: Some(data_sets),
            ..self
        }
    }
}

/// A step that imports another step, a data provider, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingImportStep {
    step: Step,
    import_name: Option<StepImportName>,
    data_provider_import_name: Option<DataProviderName>,
}

impl PendingImportStep {
    /// Wraps a step that does not import anything yet.
    #[must_use]
    pub const fn new(step: Step) -> Self {
        Self {
            step,
            import_name: None,
            data_provider_import_name: None,
        }
    }

    /// Returns the step holding this step's own content.
    #[must_use]
    pub const fn step(&self) -> &Step {
        &self.step
    }

    /// Returns the name of the imported step, if one is still pending.
    #[must_use]
    pub const fn import_name(&self) -> Option<&StepImportName> {
        self.import_name.as_ref()
    }

    /// Returns the name of the imported data provider, if one is still pending.
    #[must_use]
    pub const fn data_provider_import_name(&self) -> Option<&DataProviderName> {
        self.data_provider_import_name.as_ref()
    }

    /// Returns a copy of this pending step with different content.
    #[must_use]
    pub fn with_step(self, step: Step) -> Self {
        Self { step, ..self }
    }

    /// Returns a copy of this step importing the named step.
    #[must_use]
    pub fn with_import_name(self, import_name: StepImportName) -> Self {
        Self {
            import_name: Some(import_name),
            ..self
        }
    }

    /// Returns a copy of this step importing the named data provider.
    #[must_use]
    pub fn with_data_provider_import_name(
        self,
        data_provider_import_name: DataProviderName,
    ) -> Self {
        Self {
            data_provider_import_name: Some(data_provider_import_name),
            ..self
        }
    }

    /// Returns a copy of this step with the step import cleared.
    #[must_use]
    pub fn without_import_name(self) -> Self {
        Self {
            import_name: None,
            ..self
        }
    }

    /// Returns a copy of this step with the data provider import cleared.
    #[must_use]
    pub fn without_data_provider_import_name(self) -> Self {
        Self {
            data_provider_import_name: None,
            ..self
        }
    }

    /// Turns this step into a plain step once no imports remain.
    ///
    /// A step still waiting on an import stays pending.
    #[must_use]
    pub fn collapse(self) -> StepDefinition {
        if self.import_name.is_none() && self.data_provider_import_name.is_none() {
            StepDefinition::Plain(self.step)
        } else {
            StepDefinition::PendingImport(self)
        }
    }
}

/// A step as declared in a test or step document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepDefinition {
    /// A step with no outstanding imports.
    Plain(Step),
    /// A step still waiting on a step import or a data provider import.
    PendingImport(PendingImportStep),
}

impl StepDefinition {
    /// Returns the step holding this definition's own content.
    #[must_use]
    pub const fn step(&self) -> &Step {
        match self {
            Self::Plain(step) => step,
            Self::PendingImport(pending) => pending.step(),
        }
    }

    /// Consumes the definition, returning the step holding its own content.
    ///
    /// Imports that are still pending are dropped.
    #[must_use]
    pub fn into_step(self) -> Step {
        match self {
            Self::Plain(step) => step,
            Self::PendingImport(pending) => pending.step,
        }
    }

    /// Returns the plain step if no imports remain.
    #[must_use]
    pub const fn as_plain(&self) -> Option<&Step> {
        match self {
            Self::Plain(step) => Some(step),
            Self::PendingImport(_) => None,
        }
    }
}

impl From<Step> for StepDefinition {
    fn from(step: Step) -> Self {
        Self::Plain(step)
    }
}

impl From<PendingImportStep> for StepDefinition {
    fn from(pending: PendingImportStep) -> Self {
        pending.collapse()
    }
}
