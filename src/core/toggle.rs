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

//! src/core/toggle.rs
//!
//! Send-events mode toggling
//!
//! Two strategies compute a device's next mode:
//! - [`toggle_supported`]: walks the fixed mode cycle, skipping modes the
//!   device cannot enter
//! - [`toggle_select`]: walks a user-supplied list of modes, ignoring what
//!   the device supports
//!
//! Both are pure functions. Whether a device can be queried at all is the
//! caller's concern.

use crate::core::types::{SendEventsMode, SupportedModes};

/// Advances `current` to the next mode the device supports.
///
/// Tries each successor of `current` in cycle order. `Enabled` is always
/// supported, so the search ends there at the latest; at most three modes
/// are examined.
///
/// # Example
/// ```
/// use input_send_events::core::{toggle_supported, SendEventsMode, SupportedModes};
///
/// let next = toggle_supported(SendEventsMode::Enabled, SupportedModes::DISABLED);
/// assert_eq!(next, SendEventsMode::Disabled);
/// ```
pub fn toggle_supported(current: SendEventsMode, supported: SupportedModes) -> SendEventsMode {
    let mut candidate = current.next();
    for _ in 0..SendEventsMode::ALL.len() {
        if supported.supports(candidate) {
            return candidate;
        }
        candidate = candidate.next();
    }
    SendEventsMode::Enabled
}

/// Picks the entry after `current` in `candidates`, wrapping at the end.
///
/// Only the first occurrence of `current` counts. If `current` is not in
/// the list, the first candidate is returned. Returns `None` only for an
/// empty list.
///
/// # Example
/// ```
/// use input_send_events::core::{toggle_select, SendEventsMode};
///
/// let list = [SendEventsMode::Enabled, SendEventsMode::Disabled];
/// assert_eq!(toggle_select(SendEventsMode::Disabled, &list), Some(SendEventsMode::Enabled));
/// ```
pub fn toggle_select(current: SendEventsMode, candidates: &[SendEventsMode]) -> Option<SendEventsMode> {
    if candidates.is_empty() {
        return None;
    }

    let index = candidates
        .iter()
        .position(|mode| *mode == current)
        .map_or(0, |found| found + 1);

    Some(candidates[index % candidates.len()])
}
