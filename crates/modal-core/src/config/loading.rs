//! Configuration loading and merging logic.
//!
//! Missing config files are expected and skipped. Files that exist but fail
//! to read or parse are errors; callers decide whether to fall back to
//! defaults.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::defaults::{config_path_in, user_config_path};
use crate::config::types::{CallbackConfig, ConfirmConfig, ModalConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.modal/config.toml`)
/// 3. Project config (`./.modal/config.toml`)
///
/// # Errors
///
/// Returns an error if a present file cannot be parsed or the merged result
/// fails validation. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ModalConfig, ConfigError> {
    let project_root = std::env::current_dir()?;
    load_hierarchy_from(user_config_path().as_deref(), &project_root)
}

/// Same as [`load_hierarchy`] with explicit locations.
///
/// `user_config` is the full path of the user file; `project_root` is the
/// directory whose `.modal/config.toml` overrides it.
pub fn load_hierarchy_from(
    user_config: Option<&Path>,
    project_root: &Path,
) -> Result<ModalConfig, ConfigError> {
    let mut config = ModalConfig::default();

    if let Some(path) = user_config
        && let Some(user) = load_config_file(path)?
    {
        config = merge_configs(config, user);
    }

    if let Some(project) = load_config_file(&config_path_in(project_root))? {
        config = merge_configs(config, project);
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `Ok(None)` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<ModalConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each optional field is replaced only when the override sets it.
pub fn merge_configs(base: ModalConfig, override_config: ModalConfig) -> ModalConfig {
    ModalConfig {
        callbacks: CallbackConfig {
            policy: override_config.callbacks.policy.or(base.callbacks.policy),
        },
        confirm: ConfirmConfig {
            grant_text: override_config
                .confirm
                .grant_text
                .or(base.confirm.grant_text),
            deny_text: override_config.confirm.deny_text.or(base.confirm.deny_text),
        },
    }
}
