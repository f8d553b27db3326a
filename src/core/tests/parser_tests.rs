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

//! Parser module tests
//!
//! Tests for parsing command lines and mode names:
//! - Whitespace splitting, quoting and comments
//! - Unterminated quotes
//! - Strict and case-insensitive mode names

use crate::core::parser::*;
use crate::core::types::SendEventsMode;

#[test]
fn test_split_simple_line() {
    let args = split_args("input 1:1:Touchpad events toggle").unwrap();
    assert_eq!(args, vec!["input", "1:1:Touchpad", "events", "toggle"]);
}

#[test]
fn test_split_collapses_whitespace() {
    let args = split_args("  input\t*   events  enabled  ").unwrap();
    assert_eq!(args, vec!["input", "*", "events", "enabled"]);
}

#[test]
fn test_split_quoted_arguments() {
    let args = split_args(r#"input "Logitech USB Receiver" events disabled"#).unwrap();
    assert_eq!(args[1], "Logitech USB Receiver");

    let args = split_args("input '*' events toggle").unwrap();
    assert_eq!(args[1], "*");

    let args = split_args(r#"input "" events toggle"#).unwrap();
    assert_eq!(args[1], "");
}

#[test]
fn test_split_blank_and_comment_lines() {
    assert!(split_args("").unwrap().is_empty());
    assert!(split_args("   ").unwrap().is_empty());
    assert!(split_args("# input * events disabled").unwrap().is_empty());
}

#[test]
fn test_split_unterminated_quote() {
    let result = split_args(r#"input "Logitech events disabled"#);
    assert_eq!(result, Err(ParseError::UnterminatedQuote { column: 7 }));
}

#[test]
fn test_parse_arg_bare_and_quoted() {
    assert_eq!(parse_arg("toggle enabled").unwrap(), (" enabled", "toggle"));
    assert_eq!(parse_arg(r#""a b" c"#).unwrap(), (" c", "a b"));
}

#[test]
fn test_parse_mode_canonical_names() {
    for mode in SendEventsMode::ALL {
        assert_eq!(parse_mode(&mode.to_string()), Some(mode));
    }
}

#[test]
fn test_parse_mode_rejects_other_input() {
    assert_eq!(parse_mode("bogus_mode"), None);
    assert_eq!(parse_mode(""), None);
    assert_eq!(parse_mode("Enabled"), None);
    assert_eq!(parse_mode("disabled_on"), None);
    assert_eq!(parse_mode("disabledx"), None);
    assert_eq!(parse_mode(" enabled"), None);
}

#[test]
fn test_parse_mode_ignore_case() {
    assert_eq!(parse_mode_ignore_case("ENABLED"), Some(SendEventsMode::Enabled));
    assert_eq!(parse_mode_ignore_case("Disabled"), Some(SendEventsMode::Disabled));
    assert_eq!(
        parse_mode_ignore_case("Disabled_On_External_Mouse"),
        Some(SendEventsMode::DisabledOnExternalMouse)
    );
    assert_eq!(parse_mode_ignore_case("toggle"), None);
}

#[test]
fn test_mode_from_str() {
    assert_eq!("disabled".parse::<SendEventsMode>(), Ok(SendEventsMode::Disabled));
    assert_eq!(
        "off".parse::<SendEventsMode>(),
        Err(ParseError::InvalidMode("off".to_string()))
    );
}
