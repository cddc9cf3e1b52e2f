//! Encoded form of a single row.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Alternating zero-run / one-run counts for one row.
///
/// Even positions hold zero-run lengths, odd positions one-run lengths. A
/// trailing zero-run without a partner is read as if followed by an empty
/// one-run.
///
/// # Examples
///
/// ```
/// use rle_codec::RunLengths;
///
/// let runs = RunLengths::from_vec(vec![3, 1, 4, 0]);
/// assert_eq!(runs.decoded_len(), 8);
/// assert_eq!(runs.count_ones(), 1);
/// assert_eq!(runs.as_bytes().len(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RunLengths {
    counts: Vec<u16>,
}

impl RunLengths {
    /// Wraps raw counts without validation.
    pub fn from_vec(counts: Vec<u16>) -> Self {
        Self { counts }
    }

    pub fn as_slice(&self) -> &[u16] {
        &self.counts
    }

    pub fn into_vec(self) -> Vec<u16> {
        self.counts
    }

    /// Number of stored counts (not bits).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of bits this encoding decodes to.
    pub fn decoded_len(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// Number of set bits, computed from the one-run counts without decoding.
    pub fn count_ones(&self) -> usize {
        self.counts.iter().skip(1).step_by(2).map(|&c| c as usize).sum()
    }

    /// Zero-copy view of the counts in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.counts)
    }

    /// Iterates `(zeros, ones)` pairs; an unmatched trailing zero-run pairs with 0.
    pub fn pairs(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.counts
            .chunks(2)
            .map(|pair| (pair[0], pair.get(1).copied().unwrap_or(0)))
    }
}

impl From<Vec<u16>> for RunLengths {
    fn from(counts: Vec<u16>) -> Self {
        Self::from_vec(counts)
    }
}

impl AsRef<[u16]> for RunLengths {
    fn as_ref(&self) -> &[u16] {
        &self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_pad_trailing_zero_run() {
        let runs = RunLengths::from_vec(vec![0, 4, 0]);
        let pairs: Vec<_> = runs.pairs().collect();
        assert_eq!(pairs, vec![(0, 4), (0, 0)]);
    }

    #[test]
    fn counts_without_decoding() {
        let runs = RunLengths::from_vec(vec![2, 3, 1, 5, 7]);
        assert_eq!(runs.decoded_len(), 18);
        assert_eq!(runs.count_ones(), 8);
    }

    #[test]
    fn empty_encoding() {
        let runs = RunLengths::default();
        assert!(runs.is_empty());
        assert_eq!(runs.decoded_len(), 0);
        assert_eq!(runs.pairs().count(), 0);
        assert!(runs.as_bytes().is_empty());
    }

    #[test]
    fn byte_view_covers_every_count() {
        let runs: RunLengths = vec![1u16, 0x0102].into();
        assert_eq!(runs.as_bytes().len(), 4);
        assert_eq!(runs.as_ref(), &[1, 0x0102]);
    }
}
