//! Encoding and decoding of bit rows.

use crate::{CodecError, RunLengths};
use log::trace;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Largest run stored in a single count unless configured otherwise.
pub const DEFAULT_MAX_RUN_LENGTH: u16 = 65_000;

/// Run-length codec bound to a maximum run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    max_run_length: u16,
}

impl Default for Codec {
    fn default() -> Self {
        Self {
            max_run_length: DEFAULT_MAX_RUN_LENGTH,
        }
    }
}

impl Codec {
    /// Creates a codec whose counts never exceed `max_run_length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rle_codec::{Codec, CodecError};
    ///
    /// assert!(Codec::new(255).is_ok());
    /// assert_eq!(Codec::new(0), Err(CodecError::InvalidMaxRunLength(0)));
    /// ```
    pub fn new(max_run_length: u16) -> Result<Self, CodecError> {
        if max_run_length == 0 {
            return Err(CodecError::InvalidMaxRunLength(max_run_length));
        }
        Ok(Self { max_run_length })
    }

    pub fn max_run_length(&self) -> u16 {
        self.max_run_length
    }

    /// Encodes a dense row.
    ///
    /// The output starts with the leading zero-run and always ends with an
    /// empty run of the color opposite to the last physical run. A run longer
    /// than the maximum is cut at the maximum and continued after an empty
    /// run of the other color.
    pub fn encode(&self, row: &[bool]) -> RunLengths {
        if row.is_empty() {
            return RunLengths::default();
        }

        let max = self.max_run_length as usize;
        let mut counts: Vec<u16> = Vec::new();
        let mut current = false;
        let mut run = 0usize;

        for &bit in row {
            if bit != current {
                counts.push(run as u16);
                current = bit;
                run = 0;
            } else if run == max {
                counts.push(self.max_run_length);
                counts.push(0);
                run = 0;
            }
            run += 1;
        }

        counts.push(run as u16);
        counts.push(0);

        trace!(
            "encoded {} bits into {} counts (max run {})",
            row.len(),
            counts.len(),
            self.max_run_length
        );
        RunLengths::from_vec(counts)
    }

    /// Encoding of an all-zero row, built without materializing the row.
    pub fn blank(&self, width: usize) -> RunLengths {
        if width == 0 {
            return RunLengths::default();
        }

        let max = self.max_run_length as usize;
        let mut counts: Vec<u16> = Vec::with_capacity(2 * width.div_ceil(max));
        let mut remaining = width;
        while remaining > max {
            counts.push(self.max_run_length);
            counts.push(0);
            remaining -= max;
        }
        counts.push(remaining as u16);
        counts.push(0);
        RunLengths::from_vec(counts)
    }

    pub fn decode(&self, runs: &RunLengths) -> Vec<bool> {
        decode(runs)
    }
}

/// Encodes with [`DEFAULT_MAX_RUN_LENGTH`].
pub fn encode(row: &[bool]) -> RunLengths {
    Codec::default().encode(row)
}

/// Decodes run counts into a dense row.
///
/// The result length is the sum of the counts; it is not checked against any
/// expected width.
pub fn decode(runs: &RunLengths) -> Vec<bool> {
    let mut out = Vec::new();
    decode_into(runs, &mut out);
    out
}

/// Like [`decode`], reusing `out`'s allocation.
pub fn decode_into(runs: &RunLengths, out: &mut Vec<bool>) {
    out.clear();
    out.reserve(runs.decoded_len());
    for (zeros, ones) in runs.pairs() {
        out.resize(out.len() + zeros as usize, false);
        out.resize(out.len() + ones as usize, true);
    }
}
