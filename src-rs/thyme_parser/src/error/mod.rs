//! Error handling for the Thyme statement parser.

use std::fmt;

use thyme_model::{Comparison, ElementName};
use thyme_shared::error::{AsThymeError, Context, ErrorLocation};

mod reason;
pub use reason::ParseErrorReason;

use crate::util::{Span, TokenError};

/// An error that occurred while parsing a statement or a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    statement: String,
    offset: usize,
    reason: ParseErrorReason,
    element: Option<ElementName>,
}

impl ParseError {
    /// Creates a new error at a byte offset within the statement.
    #[must_use]
    pub fn new(statement: impl Into<String>, offset: usize, reason: ParseErrorReason) -> Self {
        Self {
            statement: statement.into(),
            offset,
            reason,
            element: None,
        }
    }

    pub(crate) fn from_token_error(statement: &str, error: TokenError) -> Self {
        Self::new(statement, error.offset, error.reason)
    }

    pub(crate) fn from_nom(statement: &str, error: nom::Err<TokenError>) -> Self {
        match error {
            nom::Err::Error(error) | nom::Err::Failure(error) => {
                Self::from_token_error(statement, error)
            }
            // statement parsers only use complete combinators
            nom::Err::Incomplete(_) => Self::new(
                statement,
                statement.len(),
                ParseErrorReason::NomError(nom::error::ErrorKind::Complete),
            ),
        }
    }

    /// Returns a copy of this error attributed to a declared element.
    #[must_use]
    pub fn in_element(self, element: ElementName) -> Self {
        Self {
            element: Some(element),
            ..self
        }
    }

    /// Returns the statement that failed to parse.
    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Returns the byte offset of the error within the statement.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the reason for the error.
    #[must_use]
    pub const fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    /// Returns the element being declared when the error occurred, if any.
    #[must_use]
    pub const fn element(&self) -> Option<&ElementName> {
        self.element.as_ref()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl AsThymeError for ParseError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        let mut context = vec![Context::Note(format!("in statement `{}`", self.statement))];

        if let Some(element) = &self.element {
            context.push(Context::Note(format!("in element `{element}`")));
        }

        #[expect(
            clippy::wildcard_enum_match_arm,
            reason = "only a few reasons have a suggestion"
        )]
        match &self.reason {
            ParseErrorReason::UnknownComparison(_) | ParseErrorReason::MissingComparison => {
                let comparisons = Comparison::ALL
                    .iter()
                    .map(|comparison| format!("`{comparison}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                context.push(Context::Help(format!("comparisons are {comparisons}")));
            }
            ParseErrorReason::InvalidPosition(_) => context.push(Context::Help(
                "positions are non-zero integers, `first` or `last`".to_string(),
            )),
            ParseErrorReason::UnknownParentElement(_) => context.push(Context::Help(
                "a parent element must be declared before the elements that use it".to_string(),
            )),
            _ => {}
        }

        context
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let statement_start = source.find(self.statement.as_str())?;
        Some(ErrorLocation::from_source_and_offset(
            source,
            statement_start + self.offset,
        ))
    }
}

impl<'a> nom::error::ParseError<Span<'a>> for TokenError {
    fn from_error_kind(input: Span<'a>, kind: nom::error::ErrorKind) -> Self {
        Self::new(input, ParseErrorReason::NomError(kind))
    }

    fn append(_input: Span<'a>, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_location_points_into_the_document() {
        let document = "actions:\n  - click \".button\":zero\n";
        let error = ParseError::new(
            "click \".button\":zero",
            16,
            ParseErrorReason::InvalidPosition("zero".to_string()),
        );

        let location = error.error_location(document).expect("statement is in the document");

        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 21);
    }

    #[test]
    fn context_names_statement_and_element() {
        let error = ParseError::new(
            "\"{{ form }} .submit\"",
            4,
            ParseErrorReason::UnknownParentElement(ElementName::new("form")),
        )
        .in_element(ElementName::new("submit"));

        let context = error.context();

        assert_eq!(
            context[0],
            Context::Note("in statement `\"{{ form }} .submit\"`".to_string())
        );
        assert_eq!(context[1], Context::Note("in element `submit`".to_string()));
        assert!(matches!(context[2], Context::Help(_)));
    }
}
