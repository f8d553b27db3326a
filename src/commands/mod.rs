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

//! src/commands/mod.rs
//!
//! Command handlers
//!
//! This module turns command lines into staged configs:
//! - `input`: selects the target device and dispatches a subcommand
//! - `events`: sets or toggles the target's send-events mode
//! - Argument validation shared by handlers
//!
//! Handlers return structured errors and never print.

pub mod error;
pub mod events;
pub mod input;
pub mod validator;

pub use error::{CommandError, CommandStatus, Expected};
pub use events::{events, toggle_send_events, toggle_wildcard_send_events};
pub use input::{input, run_command, run_script, ScriptFailure};

#[cfg(test)]
mod tests;
