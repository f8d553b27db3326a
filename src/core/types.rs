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

//! src/core/types.rs
//!
//! Core type definitions for send-events configuration
//!
//! This module defines the fundamental types used throughout the crate:
//! - `SendEventsMode`: Whether a device emits events (enabled, disabled, ...)
//! - `SupportedModes`: The set of modes a physical device can be put in
//! - `InputConfig`: A staged, per-device configuration awaiting merge
//!
//! The wildcard identifier `"*"` is only ever recognised through
//! [`is_wildcard`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier that selects every input device.
pub const WILDCARD: &str = "*";

/// Returns true if `identifier` is the match-all wildcard.
pub fn is_wildcard(identifier: &str) -> bool {
    identifier == WILDCARD
}

/// Send-events mode of an input device
///
/// Modes cycle in a fixed order:
/// `Enabled → DisabledOnExternalMouse → Disabled → Enabled`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendEventsMode {
    /// Device sends events normally
    Enabled,
    /// Device is suspended while an external pointer device is plugged in
    DisabledOnExternalMouse,
    /// Device sends no events at all
    Disabled,
}

impl SendEventsMode {
    /// All concrete modes in cycle order.
    pub const ALL: [SendEventsMode; 3] = [
        SendEventsMode::Enabled,
        SendEventsMode::DisabledOnExternalMouse,
        SendEventsMode::Disabled,
    ];

    /// Successor in the fixed cycle.
    pub fn next(self) -> Self {
        match self {
            SendEventsMode::Enabled => SendEventsMode::DisabledOnExternalMouse,
            SendEventsMode::DisabledOnExternalMouse => SendEventsMode::Disabled,
            SendEventsMode::Disabled => SendEventsMode::Enabled,
        }
    }

    /// Canonical lowercase name, as accepted by the `events` command.
    pub fn name(self) -> &'static str {
        match self {
            SendEventsMode::Enabled => "enabled",
            SendEventsMode::DisabledOnExternalMouse => "disabled_on_external_mouse",
            SendEventsMode::Disabled => "disabled",
        }
    }
}

impl fmt::Display for SendEventsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

bitflags! {
    /// Modes a device driver reports as supported.
    ///
    /// Bit values match the driver-level send-events constants. `Enabled`
    /// has no bit: every device supports it.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct SupportedModes: u32 {
        const DISABLED = 1;
        const DISABLED_ON_EXTERNAL_MOUSE = 2;
    }
}

impl SupportedModes {
    /// Checks whether the device can be switched into `mode`.
    pub fn supports(self, mode: SendEventsMode) -> bool {
        match mode {
            SendEventsMode::Enabled => true,
            SendEventsMode::DisabledOnExternalMouse => {
                self.contains(SupportedModes::DISABLED_ON_EXTERNAL_MOUSE)
            }
            SendEventsMode::Disabled => self.contains(SupportedModes::DISABLED),
        }
    }

    /// Builds a set from a list of modes. `Enabled` contributes nothing.
    pub fn from_modes<I: IntoIterator<Item = SendEventsMode>>(modes: I) -> Self {
        modes.into_iter().fold(SupportedModes::empty(), |set, mode| {
            set | match mode {
                SendEventsMode::Enabled => SupportedModes::empty(),
                SendEventsMode::DisabledOnExternalMouse => {
                    SupportedModes::DISABLED_ON_EXTERNAL_MOUSE
                }
                SendEventsMode::Disabled => SupportedModes::DISABLED,
            }
        })
    }

    /// Lists every supported mode in cycle order, `Enabled` first.
    pub fn modes(self) -> Vec<SendEventsMode> {
        SendEventsMode::ALL
            .into_iter()
            .filter(|mode| self.supports(*mode))
            .collect()
    }
}

/// A staged input configuration for one device (or the wildcard)
///
/// Created fresh for each command, filled in by a handler and then handed
/// to a config store, which merges it over whatever was staged before.
/// A field left as `None` means "no change requested".
///
/// # Example
/// ```
/// use input_send_events::core::{InputConfig, SendEventsMode};
///
/// let mut config = InputConfig::new("1267:12377:ELAN1300:00_04F3:3059_Touchpad");
/// assert_eq!(config.send_events, None);
///
/// config.send_events = Some(SendEventsMode::Disabled);
/// assert_eq!(format!("{}", config), "input 1267:12377:ELAN1300:00_04F3:3059_Touchpad events disabled");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InputConfig {
    /// Device identifier, or `"*"` for every device
    pub identifier: String,

    /// Mode to apply; `None` leaves the device's mode alone
    pub send_events: Option<SendEventsMode>,
}

impl InputConfig {
    /// Creates an empty config for `identifier`.
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            send_events: None,
        }
    }

    /// Returns true if this config targets every device.
    pub fn is_wildcard(&self) -> bool {
        is_wildcard(&self.identifier)
    }

    /// Overlays the fields set on `other` onto `self`.
    pub fn merge(&mut self, other: &InputConfig) {
        if other.send_events.is_some() {
            self.send_events = other.send_events;
        }
    }
}

impl fmt::Display for InputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.send_events {
            Some(mode) => write!(f, "input {} events {}", self.identifier, mode),
            None => write!(f, "input {} (unset)", self.identifier),
        }
    }
}
