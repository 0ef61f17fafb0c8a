//! Configuration file support for hummingbird.
//!
//! Provides YAML-based defaults through `hummingbird.config.yml` files:
//! the raw file schema, loading, and validation into typed settings.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::application::dto::OutputFormat;
use crate::catalog::domain::{PageSize, SortKey, ToggleKey, ViewMode};
use crate::shared::error::CatalogError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "hummingbird.config.yml";

/// Config files larger than this are rejected before parsing
const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub page_size: Option<usize>,
    pub sort: Option<String>,
    pub view: Option<String>,
    pub scan_interval_seconds: Option<u64>,
    /// Toggle name to value, e.g. `newSection: false`
    pub toggles: Option<BTreeMap<String, bool>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Validated settings from a config file. Absent entries stay `None` so
/// command-line options and built-in defaults can fill them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    pub format: Option<OutputFormat>,
    pub page_size: Option<PageSize>,
    pub sort: Option<SortKey>,
    pub view: Option<ViewMode>,
    pub scan_interval: Option<Duration>,
    /// Overrides in the order they should be applied, master first
    pub toggles: Vec<(ToggleKey, bool)>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<CatalogConfig> {
    check_file(path)?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    let validated = validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(validated)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<CatalogConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn check_file(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    if metadata.is_symlink() {
        return Err(invalid(
            path,
            "the config file is a symbolic link",
            "Point --config at the real file instead of a link",
        ));
    }

    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(invalid(
            path,
            &format!(
                "file is too large ({} bytes, maximum {} bytes)",
                metadata.len(),
                MAX_CONFIG_SIZE
            ),
            "Config files only hold a handful of settings",
        ));
    }

    Ok(())
}

fn invalid(path: &Path, reason: &str, hint: &str) -> anyhow::Error {
    CatalogError::InvalidConfig {
        path: path.to_path_buf(),
        reason: reason.to_string(),
        hint: hint.to_string(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<CatalogConfig> {
    let format = config
        .format
        .as_deref()
        .map(OutputFormat::from_str)
        .transpose()
        .map_err(|e| invalid(path, &e, "Use 'markdown' or 'json' for format"))?;

    let page_size = config
        .page_size
        .map(|size| {
            PageSize::from_value(size).ok_or_else(|| {
                invalid(
                    path,
                    &format!("page_size must be one of 20, 50, 100 (got {})", size),
                    "Fix the page_size entry",
                )
            })
        })
        .transpose()?;

    let sort = config
        .sort
        .as_deref()
        .map(SortKey::from_str)
        .transpose()
        .map_err(|e| invalid(path, &e, "Use 'relevance', 'name' or 'date' for sort"))?;

    let view = config
        .view
        .as_deref()
        .map(ViewMode::from_str)
        .transpose()
        .map_err(|e| invalid(path, &e, "Use 'list' or 'grid' for view"))?;

    let scan_interval = match config.scan_interval_seconds {
        Some(0) => {
            return Err(invalid(
                path,
                "scan_interval_seconds must be greater than 0",
                "Remove the entry to keep the 60 second default",
            ))
        }
        Some(seconds) => Some(Duration::from_secs(seconds)),
        None => None,
    };

    let mut toggles = Vec::new();
    if let Some(ref entries) = config.toggles {
        for (name, value) in entries {
            let key = ToggleKey::from_str(name)
                .map_err(|e| invalid(path, &e, "Run `hummingbird toggles` to list toggle names"))?;
            toggles.push((key, *value));
        }
    }
    toggles.sort_by_key(|(key, _)| *key != ToggleKey::MASTER);

    Ok(CatalogConfig {
        format,
        page_size,
        sort,
        view,
        scan_interval,
        toggles,
    })
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
