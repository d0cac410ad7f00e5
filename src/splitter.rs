//! Bulletin splitting into candidate METAR reports.
//!
//! A bulletin is free-form text holding METAR reports that may span
//! several lines, interleaved with comment lines and TAF forecasts.
//! Reports are rebuilt by concatenating trimmed lines up to a `=`
//! terminator. The first TAF marker ends the scan of the whole bulletin.

use regex::Regex;
use std::sync::LazyLock;

/// Line that opens a TAF section
static TAF_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"TAF").unwrap());

/// Line carrying a `#` comment
static COMMENT_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w*#").unwrap());

/// Line that closes the report in progress
static REPORT_TERMINATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"=").unwrap());

pub fn is_taf_marker(line: &str) -> bool {
    TAF_MARKER.is_match(line)
}

pub fn is_comment(line: &str) -> bool {
    COMMENT_LINE.is_match(line)
}

pub fn is_terminator(line: &str) -> bool {
    REPORT_TERMINATOR.is_match(line)
}

/// Split a bulletin into the candidate reports it contains, in order.
///
/// A trailing report with no terminator is dropped. A comment line that
/// also holds a `=` contributes nothing but still closes the report.
pub fn split_reports(bulletin: &str) -> Vec<String> {
    let mut reports = Vec::new();
    let mut current = String::new();

    for line in bulletin.lines() {
        if is_taf_marker(line) {
            break;
        }

        if !is_comment(line) {
            current.push_str(line.trim_matches(' '));
        }

        if is_terminator(line) {
            reports.push(std::mem::take(&mut current));
        }
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_report() {
        let reports = split_reports("METAR EGLL 0900Z 24015KT ==\n");
        assert_eq!(reports, vec!["METAR EGLL 0900Z 24015KT =="]);
    }

    #[test]
    fn test_multi_line_report_is_concatenated_after_trimming() {
        let bulletin = "  METAR EGLL 010850Z   \n 24015KT 9999 FEW030=  \n";
        let reports = split_reports(bulletin);
        assert_eq!(reports, vec!["METAR EGLL 010850Z24015KT 9999 FEW030="]);
    }

    #[test]
    fn test_several_reports_keep_order() {
        let bulletin = "METAR EGLL 0850Z 24015KT=\nMETAR EGLL 0920Z VRB03KT=\nMETAR EGLL 0950Z 36005KT=\n";
        let reports = split_reports(bulletin);
        assert_eq!(reports.len(), 3);
        assert!(reports[1].contains("VRB03KT"));
        assert!(reports[2].contains("36005KT"));
    }

    #[test]
    fn test_comment_lines_contribute_nothing() {
        let bulletin = "METAR EGLL 0900Z\n# this is ignored\n 24015KT=\n";
        let reports = split_reports(bulletin);
        assert_eq!(reports, vec!["METAR EGLL 0900Z24015KT="]);
    }

    #[test]
    fn test_comment_with_terminator_closes_report() {
        let bulletin = "METAR EGLL 0900Z 24015KT\n# closing = here\nMETAR EGLL 0930Z 25010KT=\n";
        let reports = split_reports(bulletin);
        assert_eq!(
            reports,
            vec!["METAR EGLL 0900Z 24015KT", "METAR EGLL 0930Z 25010KT="]
        );
    }

    #[test]
    fn test_taf_before_terminator_yields_nothing() {
        let bulletin = "METAR EGLL 0900Z 24015KT\nTAF EGLL 0812/0918 24012KT=\n";
        assert!(split_reports(bulletin).is_empty());
    }

    #[test]
    fn test_taf_stops_whole_bulletin() {
        let bulletin = "METAR EGLL 0850Z 24015KT=\nTAF EGLL 0812/0918 24012KT=\nMETAR EGLL 0920Z 25010KT=\n";
        let reports = split_reports(bulletin);
        assert_eq!(reports, vec!["METAR EGLL 0850Z 24015KT="]);
    }

    #[test]
    fn test_unterminated_trailing_report_is_dropped() {
        let bulletin = "METAR EGLL 0850Z 24015KT=\nMETAR EGLL 0920Z 25010KT\n";
        assert_eq!(split_reports(bulletin).len(), 1);
    }

    #[test]
    fn test_terminator_anywhere_in_line() {
        let bulletin = "METAR EGLL 0850Z 24015KT= RMK\n";
        assert_eq!(split_reports(bulletin), vec!["METAR EGLL 0850Z 24015KT= RMK"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let bulletin = "METAR EGLL 0850Z 24015KT=\r\nMETAR EGLL 0920Z 25010KT=\r\n";
        assert_eq!(
            split_reports(bulletin),
            vec!["METAR EGLL 0850Z 24015KT=", "METAR EGLL 0920Z 25010KT="]
        );
    }

    #[test]
    fn test_splitting_is_repeatable() {
        let bulletin = "METAR EGLL 0850Z 24015KT=\n# note\nMETAR EGLL\n 0920Z VRB02KT=\n";
        assert_eq!(split_reports(bulletin), split_reports(bulletin));
    }

    #[test]
    fn test_line_predicates() {
        assert!(is_taf_marker("TAF AMD EGLL"));
        assert!(!is_taf_marker("METAR EGLL"));
        assert!(is_comment("# header"));
        assert!(is_comment("abc# trailing"));
        assert!(!is_comment("METAR EGLL 0900Z 24015KT="));
        assert!(is_terminator("Q1015="));
        assert!(!is_terminator("METAR EGLL"));
    }
}
