//! Errors produced while loading tests and test suites.

use std::{fmt, io, path::PathBuf};

use thyme_model::{StepName, TestName};
use thyme_parser::error::ParseError;
use thyme_resolver::ResolutionError;
use thyme_shared::error::{AsThymeError, Context, ErrorLocation};

use crate::validator::InvalidReason;

/// An error that stopped a test or a test suite from loading.
///
/// Every variant names the document it was found in so that it can be
/// reported against that document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// A document could not be read.
    Io {
        /// The document that could not be read
        path: PathBuf,
        /// The kind of I/O failure
        kind: io::ErrorKind,
        /// The I/O error message
        message: String,
    },
    /// A document is not valid YAML or does not have the expected shape.
    Yaml {
        /// The malformed document
        path: PathBuf,
        /// The YAML error message
        message: String,
        /// Byte offset of the error in the document, when known
        offset: Option<usize>,
    },
    /// A test document is empty.
    EmptyTest {
        /// The empty document
        path: PathBuf,
    },
    /// A statement or element of a test could not be parsed.
    Parse {
        /// The test document
        path: PathBuf,
        /// The step holding the statement
        step: StepName,
        /// The parse error
        error: ParseError,
    },
    /// A test could not be resolved.
    Resolution {
        /// The test document
        path: PathBuf,
        /// The resolution error, with its context trail
        error: ResolutionError,
    },
    /// A resolved test cannot be run.
    Invalid {
        /// The test document
        path: PathBuf,
        /// The invalid test
        test: TestName,
        /// The browser of the invalid test
        browser: String,
        /// Why the test cannot be run
        reason: InvalidReason,
    },
    /// A test suite lists a test that does not exist.
    UnknownTest {
        /// The test path as resolved against the suite
        path: PathBuf,
        /// The test suite listing the test
        suite: PathBuf,
    },
}

impl LoadError {
    /// Creates an error for a document that could not be read.
    #[must_use]
    pub fn io(path: PathBuf, error: &io::Error) -> Self {
        Self::Io {
            path,
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    /// Creates an error for a malformed YAML document.
    #[must_use]
    pub fn yaml(path: PathBuf, error: &serde_yaml::Error) -> Self {
        Self::Yaml {
            path,
            message: error.to_string(),
            offset: error.location().map(|location| location.index()),
        }
    }

    /// Creates an error for an empty test document.
    #[must_use]
    pub const fn empty_test(path: PathBuf) -> Self {
        Self::EmptyTest { path }
    }

    /// Creates an error for a statement that could not be parsed.
    #[must_use]
    pub const fn parse(path: PathBuf, step: StepName, error: ParseError) -> Self {
        Self::Parse { path, step, error }
    }

    /// Creates an error for a test that could not be resolved.
    #[must_use]
    pub const fn resolution(path: PathBuf, error: ResolutionError) -> Self {
        Self::Resolution { path, error }
    }

    /// Creates an error for a test that cannot be run.
    #[must_use]
    pub const fn invalid(
        path: PathBuf,
        test: TestName,
        browser: String,
        reason: InvalidReason,
    ) -> Self {
        Self::Invalid {
            path,
            test,
            browser,
            reason,
        }
    }

    /// Creates an error for a test listed by a suite that does not exist.
    #[must_use]
    pub const fn unknown_test(path: PathBuf, suite: PathBuf) -> Self {
        Self::UnknownTest { path, suite }
    }

    /// Returns the document the error was found in.
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. }
            | Self::Yaml { path, .. }
            | Self::EmptyTest { path }
            | Self::Parse { path, .. }
            | Self::Resolution { path, .. }
            | Self::Invalid { path, .. }
            | Self::UnknownTest { path, .. } => path,
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message, .. } => {
                write!(f, "could not read `{}`: {message}", path.display())
            }
            Self::Yaml { message, .. } => write!(f, "invalid document: {message}"),
            Self::EmptyTest { path } => write!(f, "test `{}` is empty", path.display()),
            Self::Parse { error, .. } => write!(f, "{error}"),
            Self::Resolution { error, .. } => write!(f, "{error}"),
            Self::Invalid { reason, .. } => write!(f, "invalid test: {reason}"),
            Self::UnknownTest { path, .. } => {
                write!(f, "test `{}` does not exist", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl AsThymeError for LoadError {
    fn message(&self) -> String {
        self.to_string()
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Io { .. } | Self::Yaml { .. } | Self::EmptyTest { .. } => vec![],
            Self::Parse { step, error, .. } => {
                let mut context = error.context();
                context.push(Context::Note(format!("in step `{step}`")));
                context
            }
            Self::Resolution { error, .. } => error.context(),
            Self::Invalid { test, browser, .. } => {
                let mut context = vec![Context::Note(format!("in test `{test}`"))];
                if !browser.is_empty() {
                    context.push(Context::Note(format!("with browser `{browser}`")));
                }
                context
            }
            Self::UnknownTest { suite, .. } => vec![Context::Note(format!(
                "listed by test suite `{}`",
                suite.display()
            ))],
        }
    }

    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        match self {
            Self::Yaml { offset, .. } => {
                offset.map(|offset| ErrorLocation::from_source_and_offset(source, offset))
            }
            Self::Parse { error, .. } => error.error_location(source),
            Self::Io { .. }
            | Self::EmptyTest { .. }
            | Self::Resolution { .. }
            | Self::Invalid { .. }
            | Self::UnknownTest { .. } => None,
        }
    }
}
