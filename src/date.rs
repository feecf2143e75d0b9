// file: src/date.rs
// version: 1.0.0
// guid: b4c5d6e7-f8a9-0123-4567-890123bcdefa

//! Report date resolution and formatting
//!
//! Both downstream operations take their target day as `--date YYYY-MM-DD`,
//! so the runner resolves the date exactly once per run and threads the same
//! value through every step.

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::{Result, RunnerError};

/// Wire format shared with the downstream management commands
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date as passed to the import and anomaly-report operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReportDate(NaiveDate);

impl ReportDate {
    /// Today's date on the local clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse a `YYYY-MM-DD` string, rejecting anything else
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| RunnerError::date(format!("'{}' is not a YYYY-MM-DD date", s)))
    }

    /// Resolve an optional override, falling back to today
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(s) => Self::parse(s),
            None => Ok(Self::today()),
        }
    }
}

impl fmt::Display for ReportDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
