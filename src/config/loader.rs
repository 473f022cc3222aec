use std::path::{Path, PathBuf};

use crate::error::{AppResult, ConfigError};

use super::types::ConfigFile;

/// Default config filename checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "orderstorm.toml";

/// Load the TOML config file, if any.
///
/// An explicit `--config` path must exist; the default filename is only
/// used when present in the working directory.
///
/// # Errors
///
/// Returns an error when an explicit path is missing or unreadable, or when
/// the file is not valid TOML.
pub fn load_config(explicit: Option<&str>) -> AppResult<Option<ConfigFile>> {
    let path: PathBuf = match explicit {
        Some(path) => {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(ConfigError::NotFound { path }.into());
            }
            path
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(None);
            }
            path.to_path_buf()
        }
    };

    let contents = std::fs::read_to_string(&path).map_err(|err| ConfigError::Read {
        path: path.clone(),
        source: err,
    })?;
    let file: ConfigFile =
        toml::from_str(&contents).map_err(|err| ConfigError::Parse { path, source: err })?;
    Ok(Some(file))
}
