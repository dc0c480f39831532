//! Configuration file support for os-support.
//!
//! Provides YAML-based configuration through `os-support.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;
use crate::support_matrix::domain::{ExceptionTable, ReleaseLine};

pub const CONFIG_FILENAME: &str = "os-support.config.yml";

pub const DEFAULT_PLATFORM_NAME: &str = ".NET";
pub const DEFAULT_RELEASE_NOTES_LINK: &str =
    "https://github.com/dotnet/core/blob/main/release-notes/{version}/supported-os.md";
pub const DEFAULT_RELEASE_LINES: [u32; 3] = [6, 7, 8];
pub const DEFAULT_CURRENT_RELEASE_LINES: [u32; 2] = [6, 8];
/// Widest accepted "EOL soon" window, ten years
pub const MAX_EOL_SOON_DAYS: i64 = 3650;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub platform_name: Option<String>,
    pub release_notes_link: Option<String>,
    pub release_lines: Option<Vec<u32>>,
    pub current_release_lines: Option<Vec<u32>>,
    pub lifecycle_api_url: Option<String>,
    pub eol_soon_days: Option<i64>,
    /// Documented exceptions keyed by distribution id.
    #[serde(default)]
    pub exceptions: HashMap<String, Vec<ExceptionEntry>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A version whose anomalies are known and documented.
#[derive(Debug, Deserialize)]
pub struct ExceptionEntry {
    pub version: String,
    pub note: Option<String>,
}

impl ConfigFile {
    pub fn platform_name(&self) -> &str {
        self.platform_name.as_deref().unwrap_or(DEFAULT_PLATFORM_NAME)
    }

    pub fn release_notes_link(&self) -> &str {
        self.release_notes_link
            .as_deref()
            .unwrap_or(DEFAULT_RELEASE_NOTES_LINK)
    }

    pub fn release_lines(&self) -> Vec<ReleaseLine> {
        to_release_lines(self.release_lines.as_deref(), &DEFAULT_RELEASE_LINES)
    }

    pub fn current_release_lines(&self) -> Vec<ReleaseLine> {
        to_release_lines(
            self.current_release_lines.as_deref(),
            &DEFAULT_CURRENT_RELEASE_LINES,
        )
    }

    pub fn exception_table(&self) -> ExceptionTable {
        let mut table = ExceptionTable::new();
        for (distribution_id, entries) in &self.exceptions {
            for entry in entries {
                table.insert(
                    distribution_id,
                    entry.version.trim(),
                    entry.note.as_deref().unwrap_or(""),
                );
            }
        }
        table
    }
}

fn to_release_lines(configured: Option<&[u32]>, default: &[u32]) -> Vec<ReleaseLine> {
    configured
        .unwrap_or(default)
        .iter()
        .copied()
        .map(ReleaseLine::new)
        .collect()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Resolves the configuration for a run: an explicit path must exist,
/// otherwise the working directory is searched and defaults apply.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(dir)?.unwrap_or_default()),
    }
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let (Some(all), Some(current)) = (&config.release_lines, &config.current_release_lines) {
        for line in current {
            if !all.contains(line) {
                bail!(
                    "Invalid config: current_release_lines contains {} which is not listed in release_lines.\n\n\
                     💡 Hint: Every displayed release line must also be one of the release_lines.",
                    line
                );
            }
        }
    }

    if let Some(days) = config.eol_soon_days {
        if days < 0 {
            bail!(
                "Invalid config: eol_soon_days must not be negative (got {}).",
                days
            );
        }
        if days > MAX_EOL_SOON_DAYS {
            bail!(
                "Invalid config: eol_soon_days must be at most {} (got {}).",
                MAX_EOL_SOON_DAYS,
                days
            );
        }
    }

    for (distribution_id, entries) in &config.exceptions {
        for (i, entry) in entries.iter().enumerate() {
            if entry.version.trim().is_empty() {
                bail!(
                    "Invalid config: exceptions.{}[{}].version must not be empty.\n\n\
                     💡 Hint: Each exception entry must name the version it covers (e.g., \"20.04\").",
                    distribution_id,
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
