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

//! Staged input configuration.
//!
//! Handlers never touch devices directly. They fill in [`InputConfig`]
//! values which end up in a [`ConfigStore`], to be merged and applied
//! later by whoever owns the devices. Key points:
//!
//! - **Merge on store**: storing a config for a known identifier only
//!   overrides the fields that are set on the new config
//! - **Wildcard propagation**: a stored wildcard config is merged into
//!   every device config staged so far
//! - **Handler context**: the target config of the running command plus the
//!   "reading startup config" flag
//!
//! # Example
//!
//! ```
//! use input_send_events::config::{ConfigStore, InputConfigStore};
//! use input_send_events::core::{InputConfig, SendEventsMode};
//!
//! let mut store = InputConfigStore::new();
//!
//! let mut touchpad = InputConfig::new("1:1:Touchpad");
//! touchpad.send_events = Some(SendEventsMode::Disabled);
//! store.store(touchpad)?;
//!
//! // An unset field never clobbers a staged one
//! store.store(InputConfig::new("1:1:Touchpad"))?;
//! assert_eq!(store.get("1:1:Touchpad").and_then(|c| c.send_events), Some(SendEventsMode::Disabled));
//! # Ok::<(), input_send_events::config::ConfigError>(())
//! ```

pub mod error;

pub use error::ConfigError;

use crate::core::types::InputConfig;

/// Destination for staged per-device configs.
pub trait ConfigStore {
    /// Takes ownership of `config`, merging it over any config already
    /// staged for the same identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be staged; the caller decides
    /// whether to keep going.
    fn store(&mut self, config: InputConfig) -> Result<(), ConfigError>;
}

/// In-memory config store.
///
/// Keeps configs in the order their identifiers were first staged. A
/// wildcard config is also merged into every device config already staged.
#[derive(Clone, Debug, Default)]
pub struct InputConfigStore {
    configs: Vec<InputConfig>,
    capacity: Option<usize>,
}

impl InputConfigStore {
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that holds at most `capacity` distinct identifiers.
    ///
    /// Merging into an identifier that is already staged always succeeds.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            configs: Vec::new(),
            capacity: Some(capacity),
        }
    }

    /// Looks up the config staged for `identifier`.
    pub fn get(&self, identifier: &str) -> Option<&InputConfig> {
        self.configs.iter().find(|c| c.identifier == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputConfig> {
        self.configs.iter()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

impl ConfigStore for InputConfigStore {
    fn store(&mut self, config: InputConfig) -> Result<(), ConfigError> {
        let position = self
            .configs
            .iter()
            .position(|c| c.identifier == config.identifier);

        if let (None, Some(capacity)) = (position, self.capacity) {
            if self.configs.len() >= capacity {
                return Err(ConfigError::StoreFull(capacity));
            }
        }

        if config.is_wildcard() {
            for existing in self.configs.iter_mut().filter(|c| !c.is_wildcard()) {
                existing.merge(&config);
            }
        }

        match position {
            Some(index) => {
                self.configs[index].merge(&config);
                tracing::trace!(identifier = %config.identifier, "merged input config");
            }
            None => {
                tracing::trace!(identifier = %config.identifier, "staged new input config");
                self.configs.push(config);
            }
        }

        Ok(())
    }
}

/// State shared with the handler of the command being run.
#[derive(Clone, Debug, Default)]
pub struct HandlerContext {
    /// Config the surrounding `input <identifier>` block is building
    pub input_config: Option<InputConfig>,

    /// True while configuration is read from a startup or batch source
    pub reading: bool,
}

impl HandlerContext {
    /// Context for interactive commands.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for commands read from a config file.
    pub fn reading() -> Self {
        Self {
            input_config: None,
            reading: true,
        }
    }

    /// Makes a fresh config for `identifier` the command's target.
    pub fn begin_input(&mut self, identifier: &str) {
        self.input_config = Some(InputConfig::new(identifier));
    }

    /// Releases the target config, if any.
    pub fn take_input(&mut self) -> Option<InputConfig> {
        self.input_config.take()
    }
}

#[cfg(test)]
mod tests;
