/// Source location information for error reporting
///
/// Line and column numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// Character offset from the beginning of the source document
    offset: usize,
    /// Line number where the error occurred (1-indexed)
    line: usize,
    /// Column number where the error occurred (1-indexed)
    column: usize,
    /// Optional length of the error span in characters
    length: Option<usize>,
    /// The source line content where the error occurred
    line_source: String,
}

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // the offset may point just past the last character, for example
        // when a document ends unexpectedly
        let offset = offset.min(source.len());

        // find the start of the line containing the offset; the beginning
        // of the document is assumed if there is no earlier newline
        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);

        // tabs are rendered as 4 spaces, so they count for 3 extra columns
        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();

        let column = offset - line_start + 1 + num_tabs * 3;
        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        let line_source = source
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .replace('\t', "    ");

        Self {
            offset,
            line,
            column,
            length: length.filter(|length| *length > 0),
            line_source,
        }
    }

    /// Creates a new error location from source content and offset
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a new error location from source content and span
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Returns the character offset from the beginning of the source document
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number where the error occurred (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number where the error occurred (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the error span in characters
    #[must_use]
    pub fn length(&self) -> usize {
        // if no length is provided, assume a single character
        self.length.unwrap_or(1)
    }

    /// Returns the source line content where the error occurred
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}
