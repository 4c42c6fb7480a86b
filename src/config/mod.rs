//! Configuration management module.
//!
//! This module handles loading the application configuration, including the
//! optional photo-service access key and theme preference.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/quote-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub unsplash_access_key: Option<String>,
    pub theme_name: String,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default)]
    pub unsplash_access_key: Option<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_theme_name() -> String {
    "light".to_string()
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            unsplash_access_key: None,
            theme_name: default_theme_name(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing configuration file is not an error; the
    /// defaults remain in place and the directory is created for later use.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.unsplash_access_key = data.unsplash_access_key;
            self.theme_name = data.theme_name;
        }

        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(FILE_NAME)).unwrap();
        writeln!(file, "unsplash_access_key: abc123").unwrap();
        writeln!(file, "theme_name: dark").unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.unsplash_access_key.as_deref(), Some("abc123"));
        assert_eq!(config.theme_name, "dark");
    }

    #[test]
    fn load_keeps_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert!(config.unsplash_access_key.is_none());
        assert_eq!(config.theme_name, "light");
    }

    #[test]
    fn load_applies_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(FILE_NAME)).unwrap();
        writeln!(file, "unsplash_access_key: abc123").unwrap();

        let mut config = Config::new();
        config.load(dir.path().to_str()).unwrap();
        assert_eq!(config.theme_name, "light");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = fs::File::create(dir.path().join(FILE_NAME)).unwrap();
        writeln!(file, "unsplash_access_key: [not, a, string").unwrap();

        let mut config = Config::new();
        assert!(config.load(dir.path().to_str()).is_err());
    }
}
