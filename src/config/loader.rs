//! Config domain: reading and seeding the RON config file.

use ron::Options;
use ron::ser::PrettyConfig;
use std::fs;
use std::path::Path;

use crate::config::{ConfigLoadError, HeeliesConfig};

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a config from RON text. Missing fields fall back to defaults.
pub fn parse_config(file: &str, contents: &str) -> Result<HeeliesConfig, ConfigLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load the config at `path`, writing out defaults first if it does not exist.
pub fn load_or_create_config(path: &Path) -> Result<HeeliesConfig, ConfigLoadError> {
    let file_name = path.display().to_string();

    if !path.exists() {
        let config = HeeliesConfig::default();
        write_config(path, &config)?;
        return Ok(config);
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_config(&file_name, &contents)
}

pub fn write_config(path: &Path, config: &HeeliesConfig) -> Result<(), ConfigLoadError> {
    let file_name = path.display().to_string();

    let contents =
        ron::ser::to_string_pretty(config, PrettyConfig::new()).map_err(|e| ConfigLoadError {
            file: file_name.clone(),
            message: format!("Serialize error: {}", e),
        })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigLoadError {
            file: file_name.clone(),
            message: format!("IO error: {}", e),
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigLoadError {
        file: file_name,
        message: format!("IO error: {}", e),
    })
}
