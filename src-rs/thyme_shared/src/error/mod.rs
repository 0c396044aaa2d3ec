//! Errors for the Thyme browser test language

mod context;
mod location;
mod traits;

use std::path::PathBuf;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsThymeError;

/// Unified error representation for Thyme
///
/// This struct represents errors in a format suitable for display to users.
/// It includes the path of the document where the error occurred, a
/// human-readable message, optional source location information and the
/// context trail attached while the error travelled outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThymeError {
    path: PathBuf,
    message: String,
    location: Option<ErrorLocation>,
    context: Vec<Context>,
}

impl ThymeError {
    /// Creates a new `ThymeError` from an error that implements `AsThymeError`
    ///
    /// This constructor creates an error without source location information.
    /// Use `from_error_with_source` if the document contents are available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thyme_shared::error::{ThymeError, AsThymeError};
    /// use std::path::PathBuf;
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsThymeError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("unknown step `sign in`".to_string());
    /// let thyme_error = ThymeError::from_error(&error, PathBuf::from("login.yml"));
    ///
    /// assert_eq!(thyme_error.message(), "unknown step `sign in`");
    /// ```
    pub fn from_error(error: &impl AsThymeError, path: PathBuf) -> Self {
        Self {
            path,
            message: error.message(),
            location: None,
            context: error.context(),
        }
    }

    /// Creates a new `ThymeError` from an error with source code for location tracking
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thyme_shared::error::{ThymeError, AsThymeError, ErrorLocation};
    /// use std::path::PathBuf;
    ///
    /// struct PositionalError {
    ///     offset: usize,
    /// }
    ///
    /// impl AsThymeError for PositionalError {
    ///     fn message(&self) -> String {
    ///         "unexpected mapping".to_string()
    ///     }
    ///
    ///     fn error_location(&self, source: &str) -> Option<ErrorLocation> {
    ///         Some(ErrorLocation::from_source_and_offset(source, self.offset))
    ///     }
    /// }
    ///
    /// let error = PositionalError { offset: 5 };
    /// let source = "url: {";
    /// let thyme_error =
    ///     ThymeError::from_error_with_source(&error, PathBuf::from("page.yml"), source);
    ///
    /// assert_eq!(thyme_error.location().map(ErrorLocation::column), Some(6));
    /// ```
    pub fn from_error_with_source(error: &impl AsThymeError, path: PathBuf, source: &str) -> Self {
        Self {
            path,
            message: error.message(),
            location: error.error_location(source),
            context: error.context(),
        }
    }

    /// Creates a new `ThymeError` with optional source code for location tracking
    pub fn from_error_with_optional_source(
        error: &impl AsThymeError,
        path: PathBuf,
        source: Option<&str>,
    ) -> Self {
        match source {
            Some(source) => Self::from_error_with_source(error, path, source),
            None => Self::from_error(error, path),
        }
    }

    /// Returns the path to the document where the error occurred
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the optional source location information
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the context information, innermost entry first
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
