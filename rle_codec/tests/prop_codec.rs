//! Property-based tests for the run-length codec.

use proptest::prelude::*;
use rle_codec::{Codec, RunLengths, decode, encode};

/// Rows built from a handful of long runs, so that overflow chaining is hit
/// with small maximum run lengths.
fn runny_row() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec((any::<bool>(), 0usize..40), 0..12).prop_map(|runs| {
        runs.into_iter()
            .flat_map(|(bit, len)| std::iter::repeat_n(bit, len))
            .collect()
    })
}

//
// -----------------------------------------------------------------------------
// Round trips
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_default_roundtrip(row in prop::collection::vec(any::<bool>(), 0..500)) {
        prop_assert_eq!(decode(&encode(&row)), row);
    }

    #[test]
    fn prop_small_max_roundtrip(row in runny_row(), max in 1u16..8) {
        let codec = Codec::new(max).unwrap();
        let runs = codec.encode(&row);
        prop_assert_eq!(runs.decoded_len(), row.len());
        prop_assert_eq!(codec.decode(&runs), row);
    }
}

//
// -----------------------------------------------------------------------------
// Shape of the encoding
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_counts_never_exceed_max(row in runny_row(), max in 1u16..8) {
        let runs = Codec::new(max).unwrap().encode(&row);
        prop_assert!(runs.as_slice().iter().all(|&c| c <= max));
    }

    #[test]
    fn prop_terminated_by_empty_run(row in runny_row()) {
        let runs = encode(&row);
        if row.is_empty() {
            prop_assert!(runs.is_empty());
        } else {
            prop_assert!(runs.len() >= 2);
            prop_assert_eq!(runs.as_slice().last().copied(), Some(0));
        }
    }

    #[test]
    fn prop_leading_run_is_zeros(row in runny_row()) {
        let runs = encode(&row);
        let leading_zeros = row.iter().take_while(|&&b| !b).count();
        if !row.is_empty() {
            prop_assert_eq!(runs.as_slice()[0] as usize, leading_zeros);
        }
    }

    #[test]
    fn prop_count_ones_matches_row(row in runny_row(), max in 1u16..8) {
        let runs = Codec::new(max).unwrap().encode(&row);
        prop_assert_eq!(runs.count_ones(), row.iter().filter(|&&b| b).count());
    }

    #[test]
    fn prop_blank_is_encoded_zero_row(width in 0usize..200, max in 1u16..16) {
        let codec = Codec::new(max).unwrap();
        prop_assert_eq!(codec.blank(width), codec.encode(&vec![false; width]));
    }
}

proptest! {
    // Arbitrary count sequences decode to exactly their summed length.
    #[test]
    fn prop_decode_length_is_sum(counts in prop::collection::vec(0u16..50, 0..20)) {
        let runs = RunLengths::from_vec(counts.clone());
        let expected: usize = counts.iter().map(|&c| c as usize).sum();
        prop_assert_eq!(decode(&runs).len(), expected);
    }
}

#[test]
fn long_run_beyond_default_max() {
    let row = vec![true; 140_000];
    let runs = encode(&row);
    assert_eq!(runs.as_slice(), &[0, 65_000, 0, 65_000, 0, 10_000, 0]);
    assert_eq!(decode(&runs), row);
}
