//! Core data structures for wind-direction processing.
//!
//! Defines compass sectors, wind tokens and their classification,
//! the distribution histogram, and run statistics.

use crate::constants::{SECTOR_ABBREVIATIONS, SECTOR_COUNT, SECTOR_NAMES, SECTOR_WIDTH_DEGREES};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight 45° compass sectors used by the histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Sector {
    /// All sectors in index order
    pub const ALL: [Sector; SECTOR_COUNT] = [
        Sector::North,
        Sector::Northeast,
        Sector::East,
        Sector::Southeast,
        Sector::South,
        Sector::Southwest,
        Sector::West,
        Sector::Northwest,
    ];

    /// Look up a sector by histogram index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Histogram slot for this sector
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        SECTOR_NAMES[self.index()]
    }

    pub fn abbreviation(self) -> &'static str {
        SECTOR_ABBREVIATIONS[self.index()]
    }

    /// Bearing at the middle of the sector
    pub fn center_degrees(self) -> f64 {
        self.index() as f64 * SECTOR_WIDTH_DEGREES
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw wind group pulled out of a METAR report, e.g. `24015KT` or `VRB03KT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindToken(String);

impl WindToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of classifying a wind token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindClassification {
    /// No dominant direction; counts towards every sector
    Variable,
    /// Fixed direction in whole degrees
    Fixed(u16),
    /// Neither form matched; discarded
    Unrecognized,
}

/// Wind-direction histogram indexed by sector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistributionCounts([u64; SECTOR_COUNT]);

impl DistributionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, sector: Sector) -> u64 {
        self.0[sector.index()]
    }

    pub fn as_array(&self) -> &[u64; SECTOR_COUNT] {
        &self.0
    }

    /// Sum over all slots (a variable wind contributes one per sector)
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Sector with the highest count, lowest index winning ties
    pub fn dominant(&self) -> Option<Sector> {
        let mut best: Option<(Sector, u64)> = None;
        for sector in Sector::ALL {
            let count = self.get(sector);
            if count > 0 && best.is_none_or(|(_, top)| count > top) {
                best = Some((sector, count));
            }
        }
        best.map(|(sector, _)| sector)
    }

    /// Percentage of the total falling in `sector`
    pub fn share(&self, sector: Sector) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(sector) as f64 * 100.0 / total as f64
    }

    pub(crate) fn increment(&mut self, sector: Sector) {
        self.0[sector.index()] += 1;
    }

    pub(crate) fn increment_all(&mut self) {
        for slot in self.0.iter_mut() {
            *slot += 1;
        }
    }
}

impl From<[u64; SECTOR_COUNT]> for DistributionCounts {
    fn from(counts: [u64; SECTOR_COUNT]) -> Self {
        Self(counts)
    }
}

/// Formats like the bracketed array the tool has always printed: `[0 1 2 ...]`
impl fmt::Display for DistributionCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", parts.join(" "))
    }
}

/// Processing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub reports_found: usize,
    pub wind_tokens: usize,
    pub fixed_winds: usize,
    pub variable_winds: usize,
    pub unrecognized_winds: usize,
    pub processing_time_ms: u128,
}

/// Per-sector line of a finished report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorSummary {
    pub sector: Sector,
    pub abbreviation: String,
    pub count: u64,
    pub share_percent: f64,
}

/// Final result of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindReport {
    pub station: String,
    pub counts: DistributionCounts,
    pub sectors: Vec<SectorSummary>,
    pub dominant: Option<Sector>,
    pub stats: ProcessingStats,
}

impl WindReport {
    pub fn new(station: impl Into<String>, counts: DistributionCounts, stats: ProcessingStats) -> Self {
        let sectors = Sector::ALL
            .iter()
            .map(|&sector| SectorSummary {
                sector,
                abbreviation: sector.abbreviation().to_string(),
                count: counts.get(sector),
                share_percent: counts.share(sector),
            })
            .collect();

        Self {
            station: station.into(),
            counts,
            sectors,
            dominant: counts.dominant(),
            stats,
        }
    }
}
