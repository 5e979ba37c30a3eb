/// A single FASTA record's symbols, exactly as they appeared in the file
/// minus line endings. Header text is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    symbols: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl AsRef<[u8]> for SequenceRecord {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

/// Ordered collection of records; index = position in the input file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceCorpus {
    records: Vec<SequenceRecord>,
}

impl SequenceCorpus {
    #[must_use]
    pub fn new(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SequenceRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }

    /// Number of unordered pairs, N(N-1)/2
    #[must_use]
    pub fn pair_count(&self) -> usize {
        let n = self.records.len();
        n * n.saturating_sub(1) / 2
    }

    /// All index pairs (i, j) with i < j, ascending by i then j
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.records.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
}

impl From<Vec<Vec<u8>>> for SequenceCorpus {
    fn from(sequences: Vec<Vec<u8>>) -> Self {
        Self::new(sequences.into_iter().map(SequenceRecord::new).collect())
    }
}

impl std::ops::Index<usize> for SequenceCorpus {
    type Output = SequenceRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> SequenceCorpus {
        SequenceCorpus::from(vec![b"ACGT".to_vec(); n])
    }

    #[test]
    fn test_pairs_order() {
        let pairs: Vec<_> = corpus(4).pairs().collect();
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_pair_count_matches_enumeration() {
        for n in 0..8 {
            let c = corpus(n);
            assert_eq!(c.pair_count(), c.pairs().count());
            assert_eq!(c.pair_count(), n * n.saturating_sub(1) / 2);
        }
    }

    #[test]
    fn test_degenerate_corpora_have_no_pairs() {
        assert_eq!(corpus(0).pairs().count(), 0);
        assert_eq!(corpus(1).pairs().count(), 0);
    }

    #[test]
    fn test_record_accessors() {
        let record = SequenceRecord::new(b"ACGTN".to_vec());
        assert_eq!(record.len(), 5);
        assert!(!record.is_empty());
        assert_eq!(record.as_bytes(), b"ACGTN");
    }
}
