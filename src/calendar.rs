//! Quarter calendar
//!
//! Leaf files are named after the calendar quarter they cover (`1.json`
//! through `4.json`). This module turns that indicator plus a year into the
//! inclusive date range attached to every row.

use crate::error::{Error, Result};
use chrono::{Months, NaiveDate};
use std::fmt;
use std::path::Path;

/// Calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// All quarters in calendar order
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Parse a quarter indicator (`"1"` to `"4"`)
    pub fn from_indicator(indicator: &str) -> Option<Self> {
        match indicator {
            "1" => Some(Quarter::Q1),
            "2" => Some(Quarter::Q2),
            "3" => Some(Quarter::Q3),
            "4" => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// Read the quarter from a leaf file name, ignoring its extension
    pub fn from_file(path: &Path) -> Result<Self> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_indicator(&stem).ok_or_else(|| Error::unrecognized_quarter(path, stem))
    }

    /// 1-based quarter index
    pub fn index(self) -> u32 {
        match self {
            Quarter::Q1 => 1,
            Quarter::Q2 => 2,
            Quarter::Q3 => 3,
            Quarter::Q4 => 4,
        }
    }

    /// First month of the quarter (1-based)
    pub fn start_month(self) -> u32 {
        (self.index() - 1) * 3 + 1
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.index())
    }
}

/// Inclusive date range covered by one quarter of one year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterWindow {
    /// Calendar year
    pub year: i32,
    /// First day of the quarter
    pub start_date: NaiveDate,
    /// Last day of the quarter
    pub end_date: NaiveDate,
}

impl QuarterWindow {
    /// Build the window for a quarter of a year.
    ///
    /// Returns `None` only when the year is outside the range chrono can
    /// represent.
    pub fn new(quarter: Quarter, year: i32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, quarter.start_month(), 1)?;
        let end_date = start_date
            .checked_add_months(Months::new(3))?
            .pred_opt()?;

        Some(Self {
            year,
            start_date,
            end_date,
        })
    }

    /// Number of days covered, inclusive of both ends
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
