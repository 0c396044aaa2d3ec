use std::fmt;

use thyme_model::{DataProviderName, ElementName, PageImportName, StepImportName};

/// Syntax of a page element reference, used in diagnostics.
pub const PAGE_ELEMENT_REFERENCE_SYNTAX: &str = "<page>.elements.<element>";
/// Syntax of an attribute parameter, used in diagnostics.
pub const ATTRIBUTE_PARAMETER_SYNTAX: &str = "$elements.<element>.<attribute>";

/// The kinds of failure a resolver can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionErrorKind {
    /// No page is imported under the name
    UnknownPage {
        /// The page import name
        import_name: PageImportName,
    },
    /// A page is imported under the name but could not be loaded
    NonRetrievablePage {
        /// The page import name
        import_name: PageImportName,
        /// Why the page could not be loaded
        reason: String,
    },
    /// The page does not declare the element
    UnknownPageElement {
        /// The page import name
        import_name: PageImportName,
        /// The element name
        element_name: ElementName,
    },
    /// The step does not declare the element
    UnknownElement {
        /// The element name
        element_name: ElementName,
    },
    /// No step is imported under the name
    UnknownStep {
        /// The step import name
        import_name: StepImportName,
    },
    /// A step is imported under the name but could not be loaded
    NonRetrievableStep {
        /// The step import name
        import_name: StepImportName,
        /// Why the step could not be loaded
        reason: String,
    },
    /// No data provider is imported under the name
    UnknownDataProvider {
        /// The data provider import name
        import_name: DataProviderName,
    },
    /// A data provider is imported under the name but could not be loaded
    NonRetrievableDataProvider {
        /// The data provider import name
        import_name: DataProviderName,
        /// Why the data provider could not be loaded
        reason: String,
    },
    /// A step import chain leads back to one of its own links
    CircularStepImport {
        /// The step import name that was seen twice
        import_name: StepImportName,
        /// The import chain, from the first occurrence to the repetition
        cycle: Vec<StepImportName>,
    },
    /// A reference does not match its syntax
    MalformedReference {
        /// The reference as written
        reference: String,
        /// The syntax the reference should follow
        expected: &'static str,
    },
    /// A step import chain is too long to be followed
    ImportDepthExceeded {
        /// The step import name at which the limit was reached
        import_name: StepImportName,
        /// The depth limit
        max_depth: usize,
    },
}

impl fmt::Display for ResolutionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPage { import_name } => write!(f, "unknown page `{import_name}`"),
            Self::NonRetrievablePage { import_name, reason } => {
                write!(f, "page `{import_name}` could not be retrieved: {reason}")
            }
            Self::UnknownPageElement {
                import_name,
                element_name,
            } => write!(f, "page `{import_name}` has no element `{element_name}`"),
            Self::UnknownElement { element_name } => write!(f, "unknown element `{element_name}`"),
            Self::UnknownStep { import_name } => write!(f, "unknown step `{import_name}`"),
            Self::NonRetrievableStep { import_name, reason } => {
                write!(f, "step `{import_name}` could not be retrieved: {reason}")
            }
            Self::UnknownDataProvider { import_name } => {
                write!(f, "unknown data provider `{import_name}`")
            }
            Self::NonRetrievableDataProvider {
                import_name,
                reason,
            } => write!(
                f,
                "data provider `{import_name}` could not be retrieved: {reason}"
            ),
            Self::CircularStepImport { import_name, .. } => {
                write!(f, "circular import of step `{import_name}`")
            }
            Self::MalformedReference { reference, .. } => {
                write!(f, "malformed reference `{reference}`")
            }
            Self::ImportDepthExceeded {
                import_name,
                max_depth,
            } => write!(
                f,
                "step import chain is deeper than {max_depth} imports at `{import_name}`"
            ),
        }
    }
}
