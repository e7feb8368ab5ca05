//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::{Path, PathBuf};

/// Largest accepted `output.precision`.
const MAX_PRECISION: usize = 12;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit `path` must exist. Without one, the standard locations are
    /// searched and defaults are used if none is present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::file_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            tracing::debug!(path = %p.display(), "loading config file");
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = ["geomatch.toml", ".geomatch.toml", ".config/geomatch.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::new(
            ErrorCode::IoError,
            format!("Failed to read config file {}", path.display()),
        )
        .with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| Error::config_parse(path, e))
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    if schema.output.precision > MAX_PRECISION {
        return Err(Error::invalid_config_value(format!(
            "output.precision must be at most {}, got {}",
            MAX_PRECISION, schema.output.precision
        )));
    }

    if !matches!(schema.output.format.as_str(), "text" | "json") {
        return Err(Error::invalid_config_value(format!(
            "output.format must be \"text\" or \"json\", got {:?}",
            schema.output.format
        )));
    }

    if !matches!(schema.general.log_format.as_str(), "text" | "json") {
        return Err(Error::invalid_config_value(format!(
            "general.log_format must be \"text\" or \"json\", got {:?}",
            schema.general.log_format
        )));
    }

    if let Some(format) = &schema.input.default_format {
        if !matches!(format.as_str(), "decimal" | "dms") {
            return Err(Error::invalid_config_value(format!(
                "input.default_format must be \"decimal\" or \"dms\", got {:?}",
                format
            )));
        }
    }

    Ok(())
}
