//! Layout types

use crate::calendar::{Quarter, QuarterWindow};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Name attached to country-level rows
pub const COUNTRY_NAME: &str = "india";

/// Geography level a row is aggregated by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoLevel {
    Country,
    State,
}

impl GeoLevel {
    /// Value stored in the `aggregated_by` column
    pub fn as_str(self) -> &'static str {
        match self {
            GeoLevel::Country => "country",
            GeoLevel::State => "state",
        }
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geography a leaf file belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeoScope {
    /// Country or state
    pub level: GeoLevel,
    /// `india` for the country, the state directory name otherwise
    pub name: String,
}

impl GeoScope {
    /// The implicit country scope
    pub fn country() -> Self {
        Self {
            level: GeoLevel::Country,
            name: COUNTRY_NAME.to_string(),
        }
    }

    /// A state scope, named after its directory (lower-cased)
    pub fn state(name: &str) -> Self {
        Self {
            level: GeoLevel::State,
            name: name.to_lowercase(),
        }
    }
}

/// What a direct child of the domain root stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryRole {
    /// Holds one directory per state
    StateGroup,
    /// Country-level year directory
    Year(i32),
}

/// Metadata recovered from a leaf file's position in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafLocation {
    /// Full path of the leaf file
    pub path: PathBuf,
    /// Geography the file reports on
    pub scope: GeoScope,
    /// Year from the parent directory
    pub year: i32,
    /// Quarter from the file name
    pub quarter: Quarter,
}

impl LeafLocation {
    /// Date range covered by this file
    pub fn window(&self) -> Result<QuarterWindow> {
        QuarterWindow::new(self.quarter, self.year).ok_or_else(|| {
            Error::invalid_year(&self.path, format!("{} (out of range)", self.year))
        })
    }
}
