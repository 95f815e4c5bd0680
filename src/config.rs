//! Loader configuration
//!
//! Settings can come from a YAML file, with command-line flags layered on
//! top. Every field has a default, so an empty file is a valid config.

use crate::error::{Error, Result};
use crate::schema::TableKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default database location
pub const DEFAULT_OUTPUT: &str = "pulse.db";

// ============================================================================
// Top-Level Loader Config
// ============================================================================

/// Complete loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoaderConfig {
    /// Root of the exported JSON tree
    #[serde(default)]
    pub input_dir: Option<PathBuf>,

    /// Database file to create
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Tables to load
    #[serde(default = "default_tables")]
    pub tables: Vec<TableKind>,

    /// Rows per insert transaction
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_tables() -> Vec<TableKind> {
    TableKind::ALL.to_vec()
}

fn default_batch_size() -> usize {
    1000
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            input_dir: None,
            output: default_output(),
            tables: default_tables(),
            batch_size: default_batch_size(),
        }
    }
}

impl LoaderConfig {
    /// Parse a config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml reads an empty document as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Input directory, which must be set
    pub fn input_dir(&self) -> Result<&Path> {
        self.input_dir
            .as_deref()
            .ok_or_else(|| Error::config("Input directory not specified"))
    }

    /// Check the config against the filesystem before any work starts.
    ///
    /// The output location must not exist yet so an earlier database is
    /// never written over.
    pub fn validate(&self) -> Result<()> {
        let input = self.input_dir()?;
        if !input.is_dir() {
            return Err(Error::FileNotFound {
                path: input.to_path_buf(),
            });
        }

        if self.output.exists() {
            return Err(Error::OutputExists {
                path: self.output.clone(),
            });
        }

        if self.tables.is_empty() {
            return Err(Error::config("No tables selected"));
        }

        if self.batch_size == 0 {
            return Err(Error::config("batch_size must be greater than 0"));
        }

        Ok(())
    }
}

/// Parse a comma-separated table list (`top_user,top_transaction`)
pub fn parse_table_list(list: &str) -> Result<Vec<TableKind>> {
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.parse::<TableKind>())
        .collect()
}
