//! Reasons a statement or a page element can fail to parse.

use std::fmt;

use thyme_model::{Comparison, ElementName};

/// The different kinds of errors that can occur while parsing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorReason {
    /// A quoted selector has no closing quote
    UnterminatedSelector,
    /// A `:position` suffix is not an integer, `first` or `last`, or is 0
    InvalidPosition(String),
    /// A `{{ parent }}` prefix names an element that has not been declared
    UnknownParentElement(ElementName),
    /// A page element is not a quoted selector
    ExpectedSelector,
    /// A required keyword is missing, such as `to` in `set`
    ExpectedKeyword(&'static str),
    /// An assertion has no comparison
    MissingComparison,
    /// An assertion uses a word that is not a comparison
    UnknownComparison(String),
    /// A value comparison has no expected value
    MissingValue(Comparison),
    /// Text follows a complete statement
    UnexpectedText(String),
    /// A low-level nom parsing error
    NomError(nom::error::ErrorKind),
}

impl fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedSelector => write!(f, "unterminated selector"),
            Self::InvalidPosition(position) => write!(f, "invalid position `{position}`"),
            Self::UnknownParentElement(name) => write!(f, "unknown parent element `{name}`"),
            Self::ExpectedSelector => write!(f, "expected a quoted selector"),
            Self::ExpectedKeyword(keyword) => write!(f, "expected `{keyword}`"),
            Self::MissingComparison => write!(f, "assertion is missing a comparison"),
            Self::UnknownComparison(comparison) => write!(f, "unknown comparison `{comparison}`"),
            Self::MissingValue(comparison) => {
                write!(f, "`{comparison}` assertion is missing a value")
            }
            Self::UnexpectedText(text) => write!(f, "unexpected `{text}`"),
            Self::NomError(kind) => write!(f, "malformed statement ({})", kind.description()),
        }
    }
}
