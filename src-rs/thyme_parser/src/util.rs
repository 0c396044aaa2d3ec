use nom::IResult;
use nom_locate::LocatedSpan;

use crate::error::ParseErrorReason;

/// A span of a statement being parsed, tracking its byte offset.
pub type Span<'a> = LocatedSpan<&'a str>;

/// Result type shared by all statement parsers.
pub type Result<'a, O> = IResult<Span<'a>, O, TokenError>;

/// The error produced by the statement parsers before it is attached to its statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenError {
    pub offset: usize,
    pub reason: ParseErrorReason,
}

impl TokenError {
    pub fn new(input: Span<'_>, reason: ParseErrorReason) -> Self {
        Self {
            offset: input.location_offset(),
            reason,
        }
    }
}

/// Fails without backtracking at the given input.
pub fn failure<O>(input: Span<'_>, reason: ParseErrorReason) -> Result<'_, O> {
    Err(nom::Err::Failure(TokenError::new(input, reason)))
}

/// Succeeds if only whitespace remains, otherwise fails with the remaining text.
pub fn end_of_statement(input: Span<'_>) -> Result<'_, ()> {
    let remaining = input.fragment().trim();

    if remaining.is_empty() {
        Ok((input, ()))
    } else {
        let start = input.fragment().len() - input.fragment().trim_start().len();
        let (at_text, _) = nom::Input::take_split(&input, start);
        failure(at_text, ParseErrorReason::UnexpectedText(remaining.to_string()))
    }
}
