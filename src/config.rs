//! Configuration file support for orgchart.
//!
//! Provides YAML-based configuration through `orgchart.config.yml` files and
//! merges it with command-line arguments into the effective [`Settings`].

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::DEFAULT_API_URL;
use crate::application::dto::OutputFormat;
use crate::cli::Args;
use crate::org_chart::domain::ListingMode;
use crate::shared::error::OrgChartError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "orgchart.config.yml";

/// Top-level configuration file schema.
///
/// The access token is deliberately absent: it only comes from the command
/// line or the environment.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub org: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub hide_team_members: Option<bool>,
    pub api_url: Option<String>,
    pub fail_on_orphans: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(org) = &config.org {
        if org.trim().is_empty() {
            return Err(OrgChartError::InvalidConfig {
                message: "org must not be empty".to_string(),
                hint: "Remove the 'org' key or set it to your organization name".to_string(),
            }
            .into());
        }
    }

    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|message| OrgChartError::InvalidConfig {
            message,
            hint: "Supported formats are 'dot' and 'json'".to_string(),
        })?;
    }

    if let Some(api_url) = &config.api_url {
        if api_url.trim().is_empty() {
            return Err(OrgChartError::InvalidConfig {
                message: "api_url must not be empty".to_string(),
                hint: format!("Remove the 'api_url' key to use {}", DEFAULT_API_URL),
            }
            .into());
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        if key == "token" {
            eprintln!(
                "⚠️  Warning: 'token' is not read from the config file. Use --token or GITHUB_TOKEN."
            );
        } else {
            eprintln!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            );
        }
    }
}

/// Effective settings for one run
///
/// Command-line flags and environment variables win over the config file,
/// which wins over built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub org: String,
    pub token: String,
    pub listing_mode: ListingMode,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub api_url: String,
    pub fail_on_orphans: bool,
}

impl Settings {
    pub fn resolve(args: Args, file: Option<ConfigFile>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let org = args
            .org
            .or(file.org)
            .filter(|org| !org.trim().is_empty())
            .ok_or_else(|| OrgChartError::InvalidConfig {
                message: "organization name is required".to_string(),
                hint: "Set --org or GITHUB_ORG, or add 'org' to orgchart.config.yml".to_string(),
            })?;

        let token = args
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| OrgChartError::InvalidConfig {
                message: "access token is required".to_string(),
                hint: "Set --token or GITHUB_TOKEN".to_string(),
            })?;

        let format = match (args.format, file.format) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(&format).map_err(|message| {
                OrgChartError::InvalidConfig {
                    message,
                    hint: "Supported formats are 'dot' and 'json'".to_string(),
                }
            })?,
            (None, None) => OutputFormat::default(),
        };

        let hide_team_members = args
            .hide_team_members
            .or(file.hide_team_members)
            .unwrap_or(false);

        Ok(Self {
            org,
            token,
            listing_mode: ListingMode::from_hide_members(hide_team_members),
            format,
            output: args.output.or(file.output),
            api_url: args
                .api_url
                .or(file.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            fail_on_orphans: args
                .fail_on_orphans
                .or(file.fail_on_orphans)
                .unwrap_or(false),
        })
    }
}
