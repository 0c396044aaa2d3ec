use crate::error::{Context, ErrorLocation};

/// Trait for types that can be converted to Thyme error messages.
///
/// This trait provides a standardized interface for error types to expose
/// their error message and associated context.
pub trait AsThymeError {
    /// Returns the primary error message.
    ///
    /// This should be a concise, user-friendly description of what went wrong.
    fn message(&self) -> String;

    /// Returns additional context information about the error.
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error in the source document.
    ///
    /// The default implementation has no location information.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
