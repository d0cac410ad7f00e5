//! Wind group extraction from candidate METAR reports.
//!
//! A report qualifies when it carries the `METAR` marker, the target
//! station, a `Z` timestamp, then a wind group (`dddssKT` or `VRBssKT`)
//! after any run of uppercase letters and spaces, and a `=` somewhere
//! after it. Only the first wind group of a qualifying report is taken.

use crate::error::Result;
use crate::models::WindToken;
use regex::Regex;
use tracing::trace;

/// Matcher for one target station
#[derive(Debug, Clone)]
pub struct WindExtractor {
    station: String,
    pattern: Regex,
}

impl WindExtractor {
    /// Compile the report pattern for `station` (an ICAO identifier)
    pub fn new(station: &str) -> Result<Self> {
        let pattern = Regex::new(&format!(
            r"\d*\s*METAR.*{} \d*Z [A-Z ]*(\d{{5}}KT|VRB\d{{2}}KT).*=",
            regex::escape(station)
        ))?;

        Ok(Self {
            station: station.to_string(),
            pattern,
        })
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    /// Wind group of a qualifying report, `None` otherwise
    pub fn extract(&self, report: &str) -> Option<WindToken> {
        let token = self
            .pattern
            .captures(report)
            .and_then(|caps| caps.get(1))
            .map(|group| WindToken::new(group.as_str()));

        if token.is_none() {
            trace!("No {} wind group in report: {}", self.station, report);
        }
        token
    }

    /// Wind groups of every qualifying report, in report order
    pub fn extract_all<'a, I>(&self, reports: I) -> Vec<WindToken>
    where
        I: IntoIterator<Item = &'a String>,
    {
        reports
            .into_iter()
            .filter_map(|report| self.extract(report))
            .collect()
    }
}
