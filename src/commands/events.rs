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

//! The `events` input subcommand
//!
//! ```text
//! events <enabled|disabled|disabled_on_external_mouse>
//! events toggle [<mode> ...]
//! ```
//!
//! Setting a mode stages it on the target config as-is. `toggle` reads the
//! device's live mode and stages the next one: without arguments it cycles
//! through whatever the device supports, with arguments it cycles through
//! the given list. `toggle` is interactive only and is rejected while a
//! config file is being read.
//!
//! For the wildcard target, every device gets its own staged config and the
//! wildcard's mode is reset to unset afterwards, so merging the wildcard
//! later cannot overwrite the per-device results.

use tracing::{debug, warn};

use crate::commands::error::{CommandError, Expected};
use crate::commands::validator::{check_arg_count, validate_toggle_modes};
use crate::config::{ConfigStore, HandlerContext};
use crate::core::parser::parse_mode_ignore_case;
use crate::core::toggle::{toggle_select, toggle_supported};
use crate::core::types::{InputConfig, SendEventsMode};
use crate::devices::{DeviceRegistry, InputDevice};

const EXPECTED_WHILE_READING: &str =
    "Expected 'events <enabled|disabled|disabled_on_external_mouse>'";
const EXPECTED_ANY: &str =
    "Expected 'events <enabled|disabled|disabled_on_external_mouse|toggle>'";

/// Handles `events <args>` for the current target config.
///
/// # Errors
///
/// - `CommandError::Arity` without arguments
/// - `CommandError::MissingTarget` outside an `input` block
/// - `CommandError::InvalidSyntax` for an unknown action, or `toggle`
///   while reading config
/// - `CommandError::InvalidModeName` for a bad `toggle` argument, before
///   anything is staged
///
/// A target identifier that matches no device is not an error; the target
/// config is left unset and nothing gets staged for it.
pub fn events(
    args: &[&str],
    ctx: &mut HandlerContext,
    registry: &dyn DeviceRegistry,
    store: &mut dyn ConfigStore,
) -> Result<(), CommandError> {
    check_arg_count("events", args, Expected::AtLeast(1))?;

    let reading = ctx.reading;
    let config = ctx.input_config.as_mut().ok_or(CommandError::MissingTarget)?;

    let (action, modes) = (args[0], &args[1..]);

    if let Some(mode) = parse_mode_ignore_case(action) {
        if config.is_wildcard() || registry.find(&config.identifier).is_some() {
            config.send_events = Some(mode);
        } else {
            debug!(identifier = %config.identifier, "no such device, mode not staged");
        }
        return Ok(());
    }

    if reading {
        return Err(CommandError::InvalidSyntax(EXPECTED_WHILE_READING.to_string()));
    }

    if !action.eq_ignore_ascii_case("toggle") {
        return Err(CommandError::InvalidSyntax(EXPECTED_ANY.to_string()));
    }

    let candidates = validate_toggle_modes(modes)?;

    if config.is_wildcard() {
        toggle_wildcard_send_events(registry, store, &candidates);
        config.send_events = None;
    } else {
        toggle_send_events(config, registry, &candidates);
    }

    Ok(())
}

/// Stages the toggled mode of the device named by `config`.
///
/// Does nothing if no device has that identifier, or if the device has no
/// send-events control.
pub fn toggle_send_events(
    config: &mut InputConfig,
    registry: &dyn DeviceRegistry,
    candidates: &[SendEventsMode],
) {
    let Some(device) = registry.find(&config.identifier) else {
        debug!(identifier = %config.identifier, "no such device, toggle skipped");
        return;
    };

    if let Some(mode) = next_mode(device, candidates) {
        config.send_events = Some(mode);
    }
}

/// Stages a toggled config for every device with send-events control.
///
/// Stops at the first config the store refuses; configs already staged
/// stay staged. Returns the number of configs staged.
pub fn toggle_wildcard_send_events(
    registry: &dyn DeviceRegistry,
    store: &mut dyn ConfigStore,
    candidates: &[SendEventsMode],
) -> usize {
    let mut staged = 0;

    for device in registry.devices() {
        let Some(mode) = next_mode(device, candidates) else {
            continue;
        };

        let mut config = InputConfig::new(device.identifier());
        config.send_events = Some(mode);

        if let Err(e) = store.store(config) {
            warn!(identifier = device.identifier(), error = %e, "wildcard toggle stopped early");
            break;
        }
        staged += 1;
    }

    staged
}

/// Computes the mode a toggle moves `device` to.
///
/// `None` if the device has no send-events control. An empty candidate
/// list means cycling through the device's supported modes.
fn next_mode(device: &dyn InputDevice, candidates: &[SendEventsMode]) -> Option<SendEventsMode> {
    let Some(state) = device.send_events() else {
        debug!(identifier = device.identifier(), "no send-events control, toggle skipped");
        return None;
    };

    let next = toggle_select(state.current, candidates)
        .unwrap_or_else(|| toggle_supported(state.current, state.supported));

    debug!(
        identifier = device.identifier(),
        current = %state.current,
        next = %next,
        "toggled send-events mode"
    );

    Some(next)
}
