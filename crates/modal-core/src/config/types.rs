//! Configuration type definitions.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! field is optional so a project file can override a single value without
//! restating the rest of the user file.
//!
//! # Example Configuration
//!
//! ```toml
//! [callbacks]
//! policy = "retain"
//!
//! [confirm]
//! grant_text = "Yes"
//! deny_text = "No"
//! ```

use serde::{Deserialize, Serialize};

use crate::controller::CallbackPolicy;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.modal/config.toml`
/// 2. Project config: `./.modal/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModalConfig {
    /// How controllers treat callbacks that already fired
    #[serde(default)]
    pub callbacks: CallbackConfig,

    /// Confirm dialog defaults
    #[serde(default)]
    pub confirm: ConfirmConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CallbackConfig {
    /// `retain` (default) or `clear_on_fire`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<CallbackPolicy>,
}

/// Labels used when a confirm dialog is opened without its own button text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfirmConfig {
    /// Default: "Yes".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_text: Option<String>,

    /// Default: "No".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_text: Option<String>,
}
