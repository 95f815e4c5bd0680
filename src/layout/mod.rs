//! Directory convention module
//!
//! Each export domain lives under `<domain>/country/india/` and encodes its
//! metadata purely in the path:
//!
//! ```text
//! country/india/
//! ├── 2018/                      country scope, year 2018
//! │   ├── 1.json                 Q1
//! │   └── 2.json                 Q2
//! └── state/                     state group (name contains "state")
//!     └── maharashtra/           state scope
//!         └── 2019/              year 2019
//!             └── 3.json         Q3
//! ```
//!
//! Interpretation works on path components only, so it can be checked
//! against synthetic paths without touching the filesystem.

mod types;

pub use types::{DirectoryRole, GeoLevel, GeoScope, LeafLocation, COUNTRY_NAME};

use crate::calendar::Quarter;
use crate::error::{Error, Result};
use std::path::{Component, Path};

/// Marker substring identifying a state group directory
const STATE_MARKER: &str = "state";

/// Whether a directory name denotes a state group
pub fn is_state_group(name: &str) -> bool {
    name.contains(STATE_MARKER)
}

/// Parse a year directory name
pub fn parse_year(dir: &Path) -> Result<i32> {
    let name = file_name(dir);
    name.parse::<i32>()
        .map_err(|_| Error::invalid_year(dir, name))
}

/// Classify a direct child of the domain root
pub fn classify_child(child: &Path) -> Result<DirectoryRole> {
    if is_state_group(&file_name(child)) {
        Ok(DirectoryRole::StateGroup)
    } else {
        parse_year(child).map(DirectoryRole::Year)
    }
}

/// Interpret a leaf file path relative to its domain root.
///
/// Accepts `<year>/<quarter file>` for the country scope and
/// `<state group>/<state>/<year>/<quarter file>` for a state.
pub fn locate(root: &Path, leaf: &Path) -> Result<LeafLocation> {
    let relative = leaf.strip_prefix(root).map_err(|_| {
        Error::unexpected_layout(leaf, format!("not under '{}'", root.display()))
    })?;

    let parts: Vec<&Path> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(Path::new(part)),
            _ => None,
        })
        .collect();

    let Some(first) = parts.first() else {
        return Err(Error::unexpected_layout(leaf, "empty relative path"));
    };

    let (scope, year_dir) = match (classify_child(&root.join(first))?, parts.len()) {
        (DirectoryRole::Year(_), 2) => (GeoScope::country(), root.join(first)),
        (DirectoryRole::StateGroup, 4) => {
            let state_dir = root.join(parts[0]).join(parts[1]);
            (GeoScope::state(&file_name(&state_dir)), state_dir.join(parts[2]))
        }
        (DirectoryRole::Year(_), n) => {
            return Err(Error::unexpected_layout(
                leaf,
                format!("country files sit two levels below the root, found {n}"),
            ));
        }
        (DirectoryRole::StateGroup, n) => {
            return Err(Error::unexpected_layout(
                leaf,
                format!("state files sit four levels below the root, found {n}"),
            ));
        }
    };

    Ok(LeafLocation {
        path: leaf.to_path_buf(),
        year: parse_year(&year_dir)?,
        quarter: Quarter::from_file(leaf)?,
        scope,
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests;
