use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::domain::RunFile;
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Default config filenames, checked in order.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["loadreport.toml", "loadreport.json"];

/// Loads a configuration file from the provided path or default locations.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<ConfigFile>> {
    if let Some(path) = path {
        return Ok(Some(load_config_file(Path::new(path))?));
    }

    for candidate in DEFAULT_CONFIG_FILES {
        let path = PathBuf::from(candidate);
        if path.exists() {
            return Ok(Some(load_config_file(&path)?));
        }
    }

    Ok(None)
}

pub(crate) fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    parse_by_extension(path, &content)
}

/// Loads a finished run (`.json` or `.toml`).
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_run_file(path: &Path) -> AppResult<RunFile> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        AppError::config(ConfigError::ReadRunFile {
            path: path.to_path_buf(),
            source: err,
        })
    })?;
    parse_by_extension(path, &content)
}

fn parse_by_extension<T>(path: &Path, content: &str) -> AppResult<T>
where
    T: DeserializeOwned,
{
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(content).map_err(|err| {
            AppError::config(ConfigError::ParseToml {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some("json") => serde_json::from_str(content).map_err(|err| {
            AppError::config(ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: err,
            })
        }),
        Some(ext) => Err(AppError::config(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        })),
        None => Err(AppError::config(ConfigError::MissingExtension)),
    }
}
