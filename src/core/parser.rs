// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Command line and mode name parsing
//!
//! This module handles:
//! - Splitting a command line into arguments (`input "*" events toggle`)
//! - Single and double quoted arguments containing whitespace
//! - Comment and blank lines
//! - Send-events mode names, strict and case-insensitive
//!
//! # Architecture
//! The parser uses nom combinators for composable, type-safe parsing.
//! It only structures text; nothing here touches devices or configs.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, value},
    sequence::delimited,
    IResult, Parser,
};
use std::str::FromStr;
use thiserror::Error;

use crate::core::types::SendEventsMode;

/// Parse errors with column context
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unterminated quote starting at column {column}")]
    UnterminatedQuote { column: usize },

    #[error("Parse error at column {column}: {message}")]
    InvalidSyntax { column: usize, message: String },

    #[error("Invalid send-events mode '{0}'")]
    InvalidMode(String),
}

/// Split a command line into arguments
///
/// Arguments are separated by whitespace. A segment wrapped in double or
/// single quotes is one argument with the quotes removed, so identifiers
/// containing spaces can be written as `"Logitech USB Receiver"`.
/// Blank lines and `#` comments produce no arguments.
///
/// # Example
/// ```
/// use input_send_events::core::parser::split_args;
///
/// let args = split_args(r#"input "*" events toggle enabled disabled"#)?;
/// assert_eq!(args, vec!["input", "*", "events", "toggle", "enabled", "disabled"]);
/// # Ok::<(), input_send_events::core::parser::ParseError>(())
/// ```
pub fn split_args(line: &str) -> Result<Vec<String>, ParseError> {
    let body = line.trim_end();
    let mut rest = body.trim_start();

    if rest.is_empty() || rest.starts_with('#') {
        return Ok(Vec::new());
    }

    let mut args = Vec::new();

    while !rest.is_empty() {
        let column = body.len() - rest.len() + 1;

        match parse_arg(rest) {
            Ok((remaining, arg)) => {
                args.push(arg.to_string());
                rest = remaining.trim_start();
            }
            Err(e) => {
                if rest.starts_with(['"', '\'']) {
                    return Err(ParseError::UnterminatedQuote { column });
                }
                return Err(ParseError::InvalidSyntax {
                    column,
                    message: format!("{:?}", e),
                });
            }
        }
    }

    Ok(args)
}

/// Parse a single argument: quoted or bare
pub fn parse_arg(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
        take_while1(|c: char| !c.is_whitespace() && c != '"' && c != '\''),
    ))
    .parse(input)
}

/// Parse a send-events mode name (case-sensitive)
///
/// Accepts exactly `enabled`, `disabled_on_external_mouse` or `disabled`.
/// Anything else yields `None`, which callers report as a user error.
pub fn parse_mode(name: &str) -> Option<SendEventsMode> {
    all_consuming(mode_name).parse(name).ok().map(|(_, mode)| mode)
}

/// Parse a send-events mode name, ignoring ASCII case
pub fn parse_mode_ignore_case(name: &str) -> Option<SendEventsMode> {
    all_consuming(mode_name_no_case)
        .parse(name)
        .ok()
        .map(|(_, mode)| mode)
}

/// Mode name combinator. `disabled_on_external_mouse` must be tried before
/// `disabled`, which is its prefix.
fn mode_name(input: &str) -> IResult<&str, SendEventsMode> {
    alt((
        value(
            SendEventsMode::DisabledOnExternalMouse,
            tag("disabled_on_external_mouse"),
        ),
        value(SendEventsMode::Disabled, tag("disabled")),
        value(SendEventsMode::Enabled, tag("enabled")),
    ))
    .parse(input)
}

fn mode_name_no_case(input: &str) -> IResult<&str, SendEventsMode> {
    alt((
        value(
            SendEventsMode::DisabledOnExternalMouse,
            tag_no_case("disabled_on_external_mouse"),
        ),
        value(SendEventsMode::Disabled, tag_no_case("disabled")),
        value(SendEventsMode::Enabled, tag_no_case("enabled")),
    ))
    .parse(input)
}

impl FromStr for SendEventsMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mode(s).ok_or_else(|| ParseError::InvalidMode(s.to_string()))
    }
}
