//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Standard locations searched when no path is given, in order.
pub const CONFIG_CANDIDATES: &[&str] = &[".chapiz.toml", "chapiz.toml", ".config/chapiz.toml"];

/// Loaded configuration and where it came from
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path, or the first standard location
    /// that exists, or defaults.
    ///
    /// An explicit path that does not exist is an error; a missing standard
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(Path::new(".")),
        };

        let schema = match &config_path {
            Some(p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        tracing::debug!(path = ?config_path, "Loaded configuration");

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find a configuration file under `root`
fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|candidate| candidate.is_file())
}

/// Load, parse and validate a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let context = format!("Loading {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(context.clone())?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(Error::from)
        .context(context.clone())?;

    schema.validate().context(context)?;
    Ok(schema)
}
