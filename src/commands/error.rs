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

use std::fmt;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::parser::ParseError;

/// How many arguments a command accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expected {
    AtLeast(usize),
    AtMost(usize),
    Exactly(usize),
}

impl Expected {
    /// Checks `count` against the bound.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Expected::AtLeast(n) => count >= n,
            Expected::AtMost(n) => count <= n,
            Expected::Exactly(n) => count == n,
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (bound, n) = match self {
            Expected::AtLeast(n) => ("at least", n),
            Expected::AtMost(n) => ("at most", n),
            Expected::Exactly(n) => ("exactly", n),
        };
        write!(f, "{} {} argument{}", bound, n, if *n == 1 { "" } else { "s" })
    }
}

/// Whether a failed command was malformed or could not be carried out.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommandStatus {
    /// Well-formed command that could not run
    Failure,
    /// Malformed command
    Invalid,
}

/// Errors returned by command handlers.
///
/// None of these abort configuration processing; the caller reports them
/// and moves on to the next command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Too few or too many arguments.
    #[error("Invalid {command} command (expected {expected}, got {got})")]
    Arity {
        command: String,
        expected: Expected,
        got: usize,
    },

    /// No `input <identifier>` block surrounds the command.
    #[error("No input device defined.")]
    MissingTarget,

    /// Unrecognised action, or an action not allowed in this context.
    #[error("{0}")]
    InvalidSyntax(String),

    /// A `toggle` argument is not a send-events mode name.
    #[error("Invalid toggle mode {0}")]
    InvalidModeName(String),

    /// Top-level command other than `input`.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// `input` subcommand with no handler.
    #[error("Unknown/invalid command '{0}'")]
    UnknownSubcommand(String),

    /// The command line could not be split into arguments.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The staged config could not be stored.
    #[error(transparent)]
    Store(#[from] ConfigError),
}

impl CommandError {
    pub fn status(&self) -> CommandStatus {
        match self {
            CommandError::MissingTarget | CommandError::Store(_) => CommandStatus::Failure,
            _ => CommandStatus::Invalid,
        }
    }
}
