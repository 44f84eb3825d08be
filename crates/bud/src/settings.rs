//! Settings for `bud`.
//!
//! Layered like this, last one wins: built-in defaults, an optional TOML
//! file, `BUD_*` environment variables, command-line flags.
use std::path::PathBuf;

use serde::Deserialize;

use crate::{Cli, error::Result};

const CONFIG_FILE: &str = "bud/config.toml";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `bud.msg`. Falls back to `$XDG_DATA_HOME`.
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    /// Currency totals are labelled with and the form preselects.
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "warn".to_string(),
            currency: "PEN".to_string(),
        }
    }
}

pub fn load(cli: &Cli) -> Result<Settings> {
    let config_path = cli
        .config
        .clone()
        .or_else(|| dirs::config_dir().map(|dir| dir.join(CONFIG_FILE)));

    let mut builder = config::Config::builder();
    if let Some(path) = config_path {
        builder = builder.add_source(
            config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(cli.config.is_some()),
        );
    }
    builder = builder.add_source(config::Environment::with_prefix("BUD"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(data_dir) = &cli.data_dir {
        settings.data_dir = Some(data_dir.clone());
    }
    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }

    Ok(settings)
}
