use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::toc::TocOptions;
use crate::utils::error::{BoxResult, TocError};

/// Option file names to look for, in order
const CONFIG_FILES: [&str; 4] = ["_toc.yml", "_toc.yaml", "_toc.toml", "_toc.json"];

/// Load TOC options from the first default option file in `dir`, or defaults
pub fn find_default_options<P: AsRef<Path>>(dir: P) -> BoxResult<TocOptions> {
    match find_default_config_file(&dir) {
        Some(path) => load_options(path),
        None => {
            debug!("No TOC option file in {}, using defaults", dir.as_ref().display());
            Ok(TocOptions::default())
        }
    }
}

/// Find the first default option file present in `dir`
fn find_default_config_file<P: AsRef<Path>>(dir: P) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.as_ref().join(name))
        .find(|path| path.exists())
}

/// Load TOC options from a YAML, TOML or JSON file
pub fn load_options<P: AsRef<Path>>(path: P) -> BoxResult<TocOptions> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", path.display()
        )).into());
    }

    debug!("Loading TOC options from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", path.display(), e
        )))?;

    // Parse based on file extension
    let options = match path.extension().map(|ext| ext.to_string_lossy().to_lowercase()) {
        Some(ext) => match ext.as_str() {
            "yml" | "yaml" => parse_yaml_options(&content, path)?,
            "toml" => parse_toml_options(&content, path)?,
            "json" => parse_json_options(&content, path)?,
            _ => {
                return Err(TocError::Config(format!(
                    "Unsupported configuration file format: {}", ext
                )).into());
            }
        },
        // Assume YAML if no extension
        None => parse_yaml_options(&content, path)?,
    };

    debug!("TOC options loaded: {:?}", options);
    Ok(options)
}

/// Parse a YAML option file. An empty file yields the defaults.
fn parse_yaml_options(content: &str, path: &Path) -> BoxResult<TocOptions> {
    if content.trim().is_empty() {
        return Ok(TocOptions::default());
    }

    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML option file
fn parse_toml_options(content: &str, path: &Path) -> BoxResult<TocOptions> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON option file
fn parse_json_options(content: &str, path: &Path) -> BoxResult<TocOptions> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}
