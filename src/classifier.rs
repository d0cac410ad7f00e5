//! Wind token classification into compass sectors.
//!
//! Sector `i` covers bearings within ±22.5° of `i * 45°`. The sector is
//! `round(direction / 45) mod 8` with rounding half away from zero, so
//! 360° folds back into North. Whole-degree bearings never land exactly
//! on a boundary, so the rounding mode only matters for the pinned
//! boundary tests below.

use crate::constants::{SECTOR_COUNT, SECTOR_WIDTH_DEGREES};
use crate::models::{Sector, WindClassification, WindToken};
use regex::Regex;
use std::sync::LazyLock;

/// Variable wind, `VRBssKT`
static VARIABLE_WIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^VRB\d{2}KT$").unwrap());

/// Fixed wind, `dddssKT`; captures the direction digits
static FIXED_WIND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{3})\d{2}KT$").unwrap());

/// Classify a raw wind token
pub fn classify(token: &WindToken) -> WindClassification {
    let raw = token.as_str();

    if VARIABLE_WIND.is_match(raw) {
        return WindClassification::Variable;
    }

    FIXED_WIND
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse::<u16>().ok())
        .map_or(WindClassification::Unrecognized, WindClassification::Fixed)
}

/// Sector holding a bearing in whole degrees
pub fn sector_for_direction(degrees: u16) -> Sector {
    let slot = (f64::from(degrees) / SECTOR_WIDTH_DEGREES).round() as i64;
    let index = slot.rem_euclid(SECTOR_COUNT as i64) as usize;

    // rem_euclid keeps the index in range
    Sector::from_index(index).unwrap_or_else(|| unreachable!("sector index {index} out of range"))
}
