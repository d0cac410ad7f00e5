//! Composition of the splitting, extraction and aggregation stages.

use crate::aggregator::WindAggregator;
use crate::extractor::WindExtractor;
use crate::models::WindToken;
use crate::splitter::split_reports;

/// Wind tokens found in one bulletin
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletinScan {
    pub reports_found: usize,
    pub tokens: Vec<WindToken>,
}

/// Split one bulletin and pull the wind group out of each qualifying report
pub fn scan_bulletin(bulletin: &str, extractor: &WindExtractor) -> BulletinScan {
    let reports = split_reports(bulletin);
    let tokens = extractor.extract_all(&reports);

    BulletinScan {
        reports_found: reports.len(),
        tokens,
    }
}

/// Run every bulletin through the pipeline into one aggregator
pub fn tally<I, S>(bulletins: I, extractor: &WindExtractor) -> WindAggregator
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = WindAggregator::new();
    for bulletin in bulletins {
        let scan = scan_bulletin(bulletin.as_ref(), extractor);
        aggregator.record_tokens(&scan.tokens);
    }
    aggregator
}
