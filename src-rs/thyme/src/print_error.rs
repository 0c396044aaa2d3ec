//! Error message formatting
//!
//! ```text
//! error: unknown element `submit`
//!  --> tests/login.yml
//!   = note: in statement `click $elements.submit`
//!   = note: in step `sign in`
//!   = note: in test `tests/login.yml`
//! ```

use std::path::Path;

use anstream::eprintln;
use owo_colors::{OwoColorize, Style};
use thyme_shared::error::{Context, ErrorLocation, ThymeError};

use crate::stylesheet;

/// Prints a formatted error message to stderr
pub fn print(error: &ThymeError, print_debug: bool) {
    if print_debug {
        eprintln!("{error:?}");
    } else {
        let error_string = error_to_string(error);
        eprintln!("{error_string}");
    }
}

/// Converts an error to a formatted string representation
fn error_to_string(error: &ThymeError) -> String {
    let message_line = get_message_line("error", stylesheet::ERROR_COLOR, error.message());
    let location_line = get_location_line(error.path(), error.location());

    // the margin lines up with the line number of the source excerpt
    let margin = error
        .location()
        .map_or_else(|| " ".to_string(), |location| get_margin(location.line()));

    let mut lines = vec![message_line, location_line];
    lines.extend(
        error
            .location()
            .map(|location| get_source_lines(location, &margin, stylesheet::ERROR_COLOR)),
    );
    lines.extend(get_context_lines(error.context(), &margin));

    lines.join("\n")
}

/// Formats a message line with a colored prefix
fn get_message_line(kind: &str, kind_color: Style, message: &str) -> String {
    // <kind>: <message>
    let kind_str = kind_color.style(kind);
    let message_line = format!("{kind_str}: {message}");

    message_line.bold().to_string()
}

/// Formats the location information line
fn get_location_line(path: &Path, location: Option<&ErrorLocation>) -> String {
    //  --> <path>
    // OR
    //  --> <path>:<line>:<column>
    let arrow = stylesheet::SOURCE_ANNOTATION.style("-->");
    let path = path.display();

    location.map_or_else(
        || format!(" {arrow} {path}"),
        |location| format!(" {arrow} {path}:{}:{}", location.line(), location.column()),
    )
}

/// Returns blank padding as wide as the line number
fn get_margin(line: usize) -> String {
    let margin_width = line.ilog10() + 1;
    " ".repeat(margin_width as usize)
}

/// Formats the source excerpt with the error highlighted
fn get_source_lines(location: &ErrorLocation, margin: &str, highlight_color: Style) -> String {
    //   |
    // 4 |     - set ".name" "ada"
    //   |                   ^
    let line = location.line();
    let bar = stylesheet::SOURCE_ANNOTATION.style("|");
    let line_label = stylesheet::SOURCE_ANNOTATION.style(line.to_string());

    let pointer_indent = " ".repeat(location.column() - 1);
    let pointer = highlight_color.bold().style("^");
    let pointer_rest = highlight_color.bold().style("-".repeat(location.length() - 1));

    let blank_line = format!("{margin} {bar} ");
    let source_line = format!("{line_label} {bar} {}", location.line_source());
    let pointer_line = format!("{margin} {bar} {pointer_indent}{pointer}{pointer_rest}");

    [blank_line, source_line, pointer_line].join("\n")
}

/// Formats one `= note:` or `= help:` line per context entry
fn get_context_lines(context: &[Context], margin: &str) -> Vec<String> {
    context
        .iter()
        .map(|context| {
            let color = match context {
                Context::Note(_) => stylesheet::NOTE_COLOR,
                Context::Help(_) => stylesheet::HELP_COLOR,
            };
            let equals = color.bold().style("=");
            let message = get_message_line(context.label(), color, context.text());
            format!("{margin} {equals} {message}")
        })
        .collect()
}
