//! Wind-direction distribution accumulation.
//!
//! `WindAggregator` is the only writer of the histogram. It takes
//! `&mut self`, so concurrent producers must funnel their tokens to a
//! single owner (the processor drains a channel for this).

use crate::classifier::{classify, sector_for_direction};
use crate::models::{DistributionCounts, WindClassification, WindToken};
use tracing::trace;

/// Running totals for one run
#[derive(Debug, Clone, Default)]
pub struct WindAggregator {
    counts: DistributionCounts,
    fixed: usize,
    variable: usize,
    unrecognized: usize,
}

impl WindAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classification outcome to the histogram
    pub fn record(&mut self, outcome: WindClassification) {
        match outcome {
            WindClassification::Fixed(degrees) => {
                let sector = sector_for_direction(degrees);
                trace!("Fixed wind {}° -> {}", degrees, sector);
                self.counts.increment(sector);
                self.fixed += 1;
            }
            WindClassification::Variable => {
                self.counts.increment_all();
                self.variable += 1;
            }
            WindClassification::Unrecognized => {
                self.unrecognized += 1;
            }
        }
    }

    /// Classify and record a raw wind token
    pub fn record_token(&mut self, token: &WindToken) {
        self.record(classify(token));
    }

    pub fn record_tokens<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'a WindToken>,
    {
        for token in tokens {
            self.record_token(token);
        }
    }

    pub fn counts(&self) -> DistributionCounts {
        self.counts
    }

    pub fn fixed_winds(&self) -> usize {
        self.fixed
    }

    pub fn variable_winds(&self) -> usize {
        self.variable
    }

    pub fn unrecognized_winds(&self) -> usize {
        self.unrecognized
    }

    /// Consume the aggregator, yielding the final histogram
    pub fn into_counts(self) -> DistributionCounts {
        self.counts
    }
}
