//! Error types for resolution.
//!
//! Resolvers report the narrowest [`ResolutionErrorKind`] without knowing
//! where they were called from. Each enclosing resolver then appends a
//! [`ResolutionContext`] entry as the error passes through it, so that the
//! error reaching the caller reads from the statement outward to the suite.

use std::fmt;

use thyme_model::{DataProviderName, ElementName, PageImportName, StepImportName};
use thyme_shared::error::{AsThymeError, Context};

mod context;
mod kind;

pub use context::ResolutionContext;
pub use kind::{ATTRIBUTE_PARAMETER_SYNTAX, PAGE_ELEMENT_REFERENCE_SYNTAX, ResolutionErrorKind};

/// An error that occurred while resolving a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionError {
    kind: ResolutionErrorKind,
    context: Vec<ResolutionContext>,
}

impl ResolutionError {
    /// Creates an error with an empty context trail.
    #[must_use]
    pub const fn new(kind: ResolutionErrorKind) -> Self {
        Self {
            kind,
            context: Vec::new(),
        }
    }

    /// Creates an error for a page that is not imported.
    #[must_use]
    pub const fn unknown_page(import_name: PageImportName) -> Self {
        Self::new(ResolutionErrorKind::UnknownPage { import_name })
    }

    /// Creates an error for a page that could not be loaded.
    #[must_use]
    pub const fn non_retrievable_page(import_name: PageImportName, reason: String) -> Self {
        Self::new(ResolutionErrorKind::NonRetrievablePage {
            import_name,
            reason,
        })
    }

    /// Creates an error for an element a page does not declare.
    #[must_use]
    pub const fn unknown_page_element(
        import_name: PageImportName,
        element_name: ElementName,
    ) -> Self {
        Self::new(ResolutionErrorKind::UnknownPageElement {
            import_name,
            element_name,
        })
    }

    /// Creates an error for an element a step does not declare.
    #[must_use]
    pub const fn unknown_element(element_name: ElementName) -> Self {
        Self::new(ResolutionErrorKind::UnknownElement { element_name })
    }

    /// Creates an error for a step that is not imported.
    #[must_use]
    pub const fn unknown_step(import_name: StepImportName) -> Self {
        Self::new(ResolutionErrorKind::UnknownStep { import_name })
    }

    /// Creates an error for a step that could not be loaded.
    #[must_use]
    pub const fn non_retrievable_step(import_name: StepImportName, reason: String) -> Self {
        Self::new(ResolutionErrorKind::NonRetrievableStep {
            import_name,
            reason,
        })
    }

    /// Creates an error for a data provider that is not imported.
    #[must_use]
    pub const fn unknown_data_provider(import_name: DataProviderName) -> Self {
        Self::new(ResolutionErrorKind::UnknownDataProvider { import_name })
    }

    /// Creates an error for a data provider that could not be loaded.
    #[must_use]
    pub const fn non_retrievable_data_provider(
        import_name: DataProviderName,
        reason: String,
    ) -> Self {
        Self::new(ResolutionErrorKind::NonRetrievableDataProvider {
            import_name,
            reason,
        })
    }

    /// Creates an error for a step import chain that contains a cycle.
    #[must_use]
    pub const fn circular_step_import(
        import_name: StepImportName,
        cycle: Vec<StepImportName>,
    ) -> Self {
        Self::new(ResolutionErrorKind::CircularStepImport { import_name, cycle })
    }

    /// Creates an error for a reference that does not match its syntax.
    #[must_use]
    pub const fn malformed_reference(reference: String, expected: &'static str) -> Self {
        Self::new(ResolutionErrorKind::MalformedReference {
            reference,
            expected,
        })
    }

    /// Creates an error for a step import chain that is too long.
    #[must_use]
    pub const fn import_depth_exceeded(import_name: StepImportName, max_depth: usize) -> Self {
        Self::new(ResolutionErrorKind::ImportDepthExceeded {
            import_name,
            max_depth,
        })
    }

    /// Returns a copy of this error with another entry appended to its trail.
    #[must_use]
    pub fn with_context(mut self, context: ResolutionContext) -> Self {
        self.context.push(context);
        self
    }

    /// Returns the kind of failure.
    #[must_use]
    pub const fn kind(&self) -> &ResolutionErrorKind {
        &self.kind
    }

    /// Returns the context trail, innermost entry first.
    #[must_use]
    pub fn trail(&self) -> &[ResolutionContext] {
        &self.context
    }
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ResolutionError {}

impl AsThymeError for ResolutionError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        let trail = self
            .context
            .iter()
            .map(|context| Context::Note(context.to_string()));

        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "only a few kinds carry extra detail"
        )]
        let detail = match &self.kind {
            ResolutionErrorKind::CircularStepImport { cycle, .. } => {
                let chain = cycle
                    .iter()
                    .map(StepImportName::as_str)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                vec![Context::Note(format!("import chain: {chain}"))]
            }
            ResolutionErrorKind::MalformedReference { expected, .. } => {
                vec![Context::Help(format!("expected a reference of the form `{expected}`"))]
            }
            ResolutionErrorKind::UnknownPage { .. } => vec![Context::Help(
                "pages are declared under `imports.pages`".to_string(),
            )],
            ResolutionErrorKind::UnknownStep { .. } => vec![Context::Help(
                "steps are declared under `imports.steps`".to_string(),
            )],
            ResolutionErrorKind::UnknownDataProvider { .. } => vec![Context::Help(
                "data providers are declared under `imports.data_providers`".to_string(),
            )],
            _ => vec![],
        };

        trail.chain(detail).collect()
    }
}

#[cfg(test)]
mod tests {
    use thyme_model::{StepName, TestName};

    use super::*;

    #[test]
    fn context_reads_from_statement_outward() {
        let error = ResolutionError::unknown_element(ElementName::new("field"))
            .with_context(ResolutionContext::Statement("click $elements.field".to_string()))
            .with_context(ResolutionContext::Step(StepName::new("fill in")))
            .with_context(ResolutionContext::Test(TestName::new("login.yml")));

        assert_eq!(error.message(), "unknown element `field`");
        assert_eq!(
            error.context(),
            vec![
                Context::Note("in statement `click $elements.field`".to_string()),
                Context::Note("in step `fill in`".to_string()),
                Context::Note("in test `login.yml`".to_string()),
            ]
        );
    }

    #[test]
    fn circular_import_lists_the_chain() {
        let error = ResolutionError::circular_step_import(
            StepImportName::new("a"),
            vec![
                StepImportName::new("a"),
                StepImportName::new("b"),
                StepImportName::new("a"),
            ],
        );

        assert_eq!(error.message(), "circular import of step `a`");
        assert_eq!(
            error.context(),
            vec![Context::Note("import chain: a -> b -> a".to_string())]
        );
    }
}
