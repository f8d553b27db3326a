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

//! Argument validation shared by command handlers
//!
//! Everything here runs before a handler changes any state, so a bad
//! argument anywhere in the list leaves configs untouched.

use crate::commands::error::{CommandError, Expected};
use crate::core::parser::parse_mode;
use crate::core::types::SendEventsMode;

/// Checks the argument count of `command`.
pub fn check_arg_count(command: &str, args: &[&str], expected: Expected) -> Result<(), CommandError> {
    if expected.accepts(args.len()) {
        Ok(())
    } else {
        Err(CommandError::Arity {
            command: command.to_string(),
            expected,
            got: args.len(),
        })
    }
}

/// Parses every `toggle` argument as a mode name (case-sensitive).
///
/// Fails on the first argument that isn't a mode name.
pub fn validate_toggle_modes(args: &[&str]) -> Result<Vec<SendEventsMode>, CommandError> {
    args.iter()
        .map(|arg| parse_mode(arg).ok_or_else(|| CommandError::InvalidModeName(arg.to_string())))
        .collect()
}
