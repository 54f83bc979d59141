//! Season type for NBA competition years.

use crate::error::{DashError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years.
///
/// A season is named by the calendar year it starts in, so `Season(2023)`
/// is the 2023-24 season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Season shown by the dashboard on a given day.
    ///
    /// July through September is the off-season and maps to the previous
    /// year; every other month maps to the calendar year.
    pub fn for_date(date: NaiveDate) -> Self {
        let year = date.year() as u16;
        if (7..=9).contains(&date.month()) {
            Self(year - 1)
        } else {
            Self(year)
        }
    }

    /// Season for today's local date.
    pub fn current() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }

    /// Human label, e.g. `2023-24`.
    pub fn label(&self) -> String {
        format!("{}-{:02}", self.0, (self.0 + 1) % 100)
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2023)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
