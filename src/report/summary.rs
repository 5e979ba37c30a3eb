use serde::Serialize;

use crate::alignment::pairwise::PairOutcome;

/// Column names of the TSV report
pub const TSV_HEADER: &str = "first\tsecond\tedit_distance\tstart_location\tend_location\tpercent_identity\tinfix_percent_identity\tcigar";

/// Machine-readable record for one pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport<'a> {
    pub first: usize,
    pub second: usize,
    pub edit_distance: usize,
    pub start_location: Option<usize>,
    pub end_location: Option<usize>,
    pub percent_identity: u32,
    pub infix_percent_identity: u32,
    pub cigar: &'a str,
}

impl<'a> From<&'a PairOutcome> for PairReport<'a> {
    fn from(outcome: &'a PairOutcome) -> Self {
        Self {
            first: outcome.first,
            second: outcome.second,
            edit_distance: outcome.edit_distance,
            start_location: outcome.target_start,
            end_location: outcome.end_location,
            percent_identity: outcome.percent_identity,
            infix_percent_identity: outcome.infix_percent_identity,
            cigar: &outcome.cigar,
        }
    }
}

impl PairReport<'_> {
    /// One tab-separated row; missing locations are written as `*`
    #[must_use]
    pub fn to_tsv_row(&self) -> String {
        let location = |value: Option<usize>| value.map_or_else(|| "*".to_string(), |v| v.to_string());
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.first,
            self.second,
            self.edit_distance,
            location(self.start_location),
            location(self.end_location),
            self.percent_identity,
            self.infix_percent_identity,
            self.cigar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::engine::BioAligner;
    use crate::alignment::pairwise::{PairwiseAligner, PairwiseConfig};

    fn outcome() -> PairOutcome {
        PairwiseAligner::new(&BioAligner, PairwiseConfig::default())
            .align_pair(0, 1, b"CCC", b"AAACCCGGG")
            .unwrap()
    }

    #[test]
    fn test_tsv_row() {
        let outcome = outcome();
        let report = PairReport::from(&outcome);
        assert_eq!(report.to_tsv_row(), "0\t1\t0\t3\t5\t33\t100\t3=");
        assert_eq!(
            TSV_HEADER.split('\t').count(),
            report.to_tsv_row().split('\t').count()
        );
    }

    #[test]
    fn test_json_fields() {
        let outcome = outcome();
        let value = serde_json::to_value(PairReport::from(&outcome)).unwrap();
        assert_eq!(value["first"], 0);
        assert_eq!(value["second"], 1);
        assert_eq!(value["edit_distance"], 0);
        assert_eq!(value["start_location"], 3);
        assert_eq!(value["end_location"], 5);
        assert_eq!(value["percent_identity"], 33);
        assert_eq!(value["infix_percent_identity"], 100);
        assert_eq!(value["cigar"], "3=");
    }

    #[test]
    fn test_missing_location_in_tsv() {
        let mut outcome = outcome();
        outcome.target_start = None;
        let row = PairReport::from(&outcome).to_tsv_row();
        assert_eq!(row.split('\t').nth(3), Some("*"));
    }
}
