/// Represents different types of contextual information that can be associated with errors.
///
/// The `Context` enum provides a way to attach additional information to error messages,
/// helping users understand where an error occurred and how to resolve it.
///
/// # Examples
///
/// ```rust
/// use thyme_shared::error::Context;
///
/// // Adding a note to provide additional context
/// let note = Context::Note("in step `open the login form`".to_string());
///
/// // Adding help text to suggest a solution
/// let help = Context::Help("declare the page under `imports.pages`".to_string());
///
/// let contexts = vec![note, help];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information or context about the error.
    ///
    /// Notes describe where the error happened, for example the test, step
    /// and statement that were being resolved.
    Note(String),

    /// Helpful suggestions for resolving the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thyme_shared::error::Context;
    ///
    /// let help = Context::Help("element references look like `page.elements.name`".to_string());
    /// ```
    Help(String),
}

impl Context {
    /// Returns the label used when rendering this context entry.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Note(_) => "note",
            Self::Help(_) => "help",
        }
    }

    /// Returns the text of this context entry.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Note(text) | Self::Help(text) => text,
        }
    }
}
