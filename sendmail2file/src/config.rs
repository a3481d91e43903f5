use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_FILE: &str = "/var/lib/send2file/mails";
pub const CONFIG_FILE_NAME: &str = ".sendmail2file.toml";
pub const FILE_ENV: &str = "SENDMAIL2FILE_FILE";

/// Content of the configuration file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// File the emails are appended to
    pub file: Option<PathBuf>,

    /// fsync the file after each email
    #[serde(default)]
    pub sync: bool,
}

/// Settings of one delivery, once every source has been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub file: PathBuf,
    pub sync: bool,
}

pub fn read_config(config_file: PathBuf) -> Result<Config> {
    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .open(config_file.as_path())?;

    let mut config = String::new();
    file.read_to_string(&mut config)?;

    Ok(toml::from_str(&config)?)
}

pub fn default_config_file(home: Option<&Path>) -> Option<PathBuf> {
    home.map(|h| h.join(CONFIG_FILE_NAME))
}

/// An explicitly requested configuration file must exist, the one from
/// the home directory is optional.
pub fn load_config(explicit: Option<PathBuf>, home: Option<&Path>) -> Result<Option<Config>> {
    let config_file = match explicit {
        Some(path) => path,
        None => match default_config_file(home) {
            Some(path) if path.is_file() => path,
            _ => return Ok(None),
        },
    };

    let config = read_config(config_file.clone())
        .with_context(|| format!("'{}' must be a valid config file", config_file.display()))?;
    info!(path = %config_file.display(), "using config file");
    Ok(Some(config))
}

/// Command line wins over the config file, which wins over the
/// environment.
pub fn resolve(
    cli_file: Option<PathBuf>,
    cli_sync: bool,
    config: Option<Config>,
    env_file: Option<OsString>,
) -> DeliveryConfig {
    let config = config.unwrap_or_default();
    let file = cli_file
        .or(config.file)
        .or_else(|| env_file.filter(|f| !f.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));

    DeliveryConfig {
        file,
        sync: cli_sync || config.sync,
    }
}
