//! Validation of a merged configuration.

use crate::config::types::ModalConfig;
use crate::errors::ConfigError;

/// Validate the configuration.
///
/// Confirm labels, when set, must contain something other than whitespace;
/// an empty label would render an invisible button.
pub fn validate_config(config: &ModalConfig) -> Result<(), ConfigError> {
    let labels = [
        ("confirm.grant_text", &config.confirm.grant_text),
        ("confirm.deny_text", &config.confirm.deny_text),
    ];

    for (key, value) in labels {
        if let Some(text) = value
            && text.trim().is_empty()
        {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must not be empty", key),
            });
        }
    }

    Ok(())
}
