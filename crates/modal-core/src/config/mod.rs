//! # Configuration System
//!
//! Hierarchical TOML configuration for modal.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.modal/config.toml` (global user preferences)
//! 3. **Project config** - `./.modal/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.modal/config.toml
//! [callbacks]
//! policy = "clear_on_fire"
//!
//! [confirm]
//! grant_text = "Proceed"
//! deny_text = "Back"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use modal_core::config::ModalConfig;
//! use modal_core::ConfirmController;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ModalConfig::load_hierarchy()?;
//!     let confirm = ConfirmController::with_policy(config.callback_policy())
//!         .with_labels(config.confirm_labels());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{CallbackConfig, ConfirmConfig, ModalConfig};
pub use validation::validate_config;

use crate::controller::{CallbackPolicy, ConfirmLabels};
use crate::errors::ConfigError;

impl ModalConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate_config(self)
    }

    /// Callback policy controllers should be built with.
    pub fn callback_policy(&self) -> CallbackPolicy {
        self.callbacks.policy.unwrap_or_default()
    }

    /// Fallback confirm labels, with unset entries taken from the built-in defaults.
    pub fn confirm_labels(&self) -> ConfirmLabels {
        let defaults = ConfirmLabels::default();
        ConfirmLabels {
            grant: self
                .confirm
                .grant_text
                .clone()
                .unwrap_or(defaults.grant),
            deny: self.confirm.deny_text.clone().unwrap_or(defaults.deny),
        }
    }
}
