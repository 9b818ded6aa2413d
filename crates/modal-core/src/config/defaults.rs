//! Default locations for configuration files.

use std::path::{Path, PathBuf};

/// Directory holding modal's config file, under home or a project root.
pub const CONFIG_DIR_NAME: &str = ".modal";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// `<root>/.modal/config.toml`
pub fn config_path_in(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// `~/.modal/config.toml`, or `None` when no home directory can be found.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| config_path_in(&home))
}
