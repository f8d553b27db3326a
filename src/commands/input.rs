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

//! The `input` command and script runner
//!
//! ```text
//! input <identifier> <subcommand> [args...]
//! ```
//!
//! Each `input` command targets a fresh config for `<identifier>`, hands
//! it to the subcommand handler and stores it when the handler succeeds
//! and left a mode set on it.

use tracing::debug;

use crate::commands::error::{CommandError, Expected};
use crate::commands::events::events;
use crate::commands::validator::check_arg_count;
use crate::config::{ConfigStore, HandlerContext};
use crate::core::parser::split_args;
use crate::devices::DeviceRegistry;

/// Signature shared by `input` subcommand handlers.
pub type Handler = fn(
    &[&str],
    &mut HandlerContext,
    &dyn DeviceRegistry,
    &mut dyn ConfigStore,
) -> Result<(), CommandError>;

/// Registered `input` subcommands.
const INPUT_HANDLERS: &[(&str, Handler)] = &[("events", events)];

/// A script line that failed.
#[derive(Debug)]
pub struct ScriptFailure {
    /// 1-based line number
    pub line: usize,
    pub error: CommandError,
}

/// Runs one command line.
///
/// Blank and comment lines succeed without doing anything.
///
/// # Example
/// ```
/// use input_send_events::commands::run_command;
/// use input_send_events::config::{HandlerContext, InputConfigStore};
/// use input_send_events::core::SendEventsMode;
/// use input_send_events::devices::{DeviceList, DeviceSnapshot};
///
/// let devices = DeviceList::new(vec![DeviceSnapshot::new(
///     "1:1:Touchpad",
///     SendEventsMode::Enabled,
///     &[SendEventsMode::Disabled],
/// )])?;
/// let mut store = InputConfigStore::new();
/// let mut ctx = HandlerContext::new();
///
/// run_command("input 1:1:Touchpad events disabled", &mut ctx, &devices, &mut store)?;
/// assert_eq!(
///     store.get("1:1:Touchpad").and_then(|c| c.send_events),
///     Some(SendEventsMode::Disabled)
/// );
/// # Ok::<(), input_send_events::commands::CommandError>(())
/// ```
pub fn run_command(
    line: &str,
    ctx: &mut HandlerContext,
    registry: &dyn DeviceRegistry,
    store: &mut dyn ConfigStore,
) -> Result<(), CommandError> {
    let args = split_args(line)?;
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let Some((command, rest)) = args.split_first() else {
        return Ok(());
    };

    if command.eq_ignore_ascii_case("input") {
        input(rest, ctx, registry, store)
    } else {
        Err(CommandError::UnknownCommand(command.to_string()))
    }
}

/// Handles `input <identifier> <subcommand> [args...]`.
pub fn input(
    args: &[&str],
    ctx: &mut HandlerContext,
    registry: &dyn DeviceRegistry,
    store: &mut dyn ConfigStore,
) -> Result<(), CommandError> {
    check_arg_count("input", args, Expected::AtLeast(2))?;

    let (identifier, subcommand, sub_args) = (args[0], args[1], &args[2..]);

    let handler = INPUT_HANDLERS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(subcommand))
        .map(|(_, handler)| *handler)
        .ok_or_else(|| CommandError::UnknownSubcommand(subcommand.to_string()))?;

    ctx.begin_input(identifier);
    let result = handler(sub_args, ctx, registry, store);
    let config = ctx.take_input();
    result?;

    // An unset config has nothing to merge
    match config {
        Some(config) if config.send_events.is_some() => {
            debug!(%config, "storing input config");
            store.store(config)?;
        }
        Some(config) => debug!(%config, "nothing to store"),
        None => {}
    }

    Ok(())
}

/// Runs every line of a config script, as read at startup.
///
/// Failing lines are collected; the remaining lines still run.
pub fn run_script(
    script: &str,
    registry: &dyn DeviceRegistry,
    store: &mut dyn ConfigStore,
) -> Vec<ScriptFailure> {
    let mut ctx = HandlerContext::reading();
    let mut failures = Vec::new();

    for (index, line) in script.lines().enumerate() {
        if let Err(error) = run_command(line, &mut ctx, registry, store) {
            failures.push(ScriptFailure {
                line: index + 1,
                error,
            });
        }
    }

    failures
}
