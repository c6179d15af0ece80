use std::path::{Path, PathBuf};

use mojifix_repair::charset::parse_chain;
use mojifix_repair::{ConfigError, RepairOptions, Replacement};
use mojifix_workbook::{DEFAULT_LOCATION_LIMIT, FillMarker, RepairConfig};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Options file passed with `--config`. Every field is optional.
///
/// ```yaml
/// confidence_threshold: 0.5
/// similarity_threshold: 0.9
/// fallback_chain: [utf-8, latin1, iso-8859-1]
/// fill_color: "800080"
/// extra_replacements:
///   - { from: "Ã§", to: "ç" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub confidence_threshold: Option<f64>,
    pub similarity_threshold: Option<f64>,
    pub fallback_chain: Option<Vec<String>>,
    pub fill_color: Option<String>,
    #[serde(default)]
    pub extra_replacements: Vec<Replacement>,
    /// Cap on unrecoverable cell locations listed in the report.
    pub location_limit: Option<usize>,
}

impl ConfigFile {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // an empty file means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_yaml_str(&text).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve against the defaults and validate.
    pub fn into_config(self) -> Result<RepairConfig, ConfigError> {
        let mut options = RepairOptions::default();
        if let Some(t) = self.confidence_threshold {
            options.confidence_threshold = t;
        }
        if let Some(t) = self.similarity_threshold {
            options.similarity_threshold = t;
        }
        if let Some(labels) = self.fallback_chain {
            options.fallback_chain = parse_chain(labels)?;
        }
        options.table.extend(self.extra_replacements)?;
        options.validate()?;

        let fill = match self.fill_color {
            Some(color) => FillMarker::parse(&color)?,
            None => FillMarker::default(),
        };
        Ok(RepairConfig {
            options,
            fill,
            location_limit: self.location_limit.unwrap_or(DEFAULT_LOCATION_LIMIT),
        })
    }
}
