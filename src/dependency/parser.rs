//! Parsing support for the `A,B->C` dependency notation

use super::error::ParseDependencyError;
use super::FunctionalDependency;
use lalrpop_util::ParseError;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/dependency/fd.rs"));
}

/// Parse exactly one dependency
pub(super) fn parse_dependency(
    input: &str,
) -> Result<FunctionalDependency, ParseDependencyError> {
    parser_impl::DependencyParser::new()
        .parse(input)
        .map_err(|e| syntax_error(input, e))
}

/// Parse a `;`-separated list of dependencies (possibly empty)
pub(super) fn parse_dependencies(
    input: &str,
) -> Result<Vec<FunctionalDependency>, ParseDependencyError> {
    parser_impl::DependenciesParser::new()
        .parse(input)
        .map_err(|e| syntax_error(input, e))
}

fn syntax_error<T: std::fmt::Display, E: std::fmt::Display>(
    input: &str,
    error: ParseError<usize, T, E>,
) -> ParseDependencyError {
    if let Some(position) = statement_without_arrow(input) {
        return ParseDependencyError::MissingArrow {
            input: Arc::from(input),
            position,
        };
    }
    ParseDependencyError::InvalidSyntax {
        message: Arc::from(error.to_string().as_str()),
        input: Arc::from(input),
        position: error_position(&error),
    }
}

/// Byte offset of the first `;`-separated statement that has attributes but no `->`
///
/// Quoted names are skipped, so a `;` or `->` inside quotes does not count.
fn statement_without_arrow(input: &str) -> Option<usize> {
    let mut first: Option<usize> = None;
    let mut has_arrow = false;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut chars = input.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if in_quotes {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_quotes = false,
                _ => {}
            }
            continue;
        }
        match c {
            ';' => {
                if first.is_some() && !has_arrow {
                    return first;
                }
                first = None;
                has_arrow = false;
            }
            '-' if chars.peek().map(|&(_, next)| next) == Some('>') => {
                chars.next();
                has_arrow = true;
            }
            ',' => {}
            _ if c.is_whitespace() => {}
            _ => {
                in_quotes = c == '"';
                first.get_or_insert(i);
            }
        }
    }

    if has_arrow {
        None
    } else {
        first
    }
}

/// Undo the `\"` and `\\` escapes of a quoted attribute name
pub(super) fn unescape(quoted: &str) -> String {
    let mut name = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            name.extend(chars.next());
        } else {
            name.push(c);
        }
    }
    name
}

/// Byte offset of the offending token, when lalrpop reports one
fn error_position<T, E>(error: &ParseError<usize, T, E>) -> Option<usize> {
    match error {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
