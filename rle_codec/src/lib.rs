//! # rle_codec
//!
//! A `no_std` compatible run-length codec for rows of bits.
//!
//! A row is stored as alternating run counts, starting with a run of zeros
//! (possibly empty) followed by a run of ones, and so on. Every count fits in
//! a `u16` and never exceeds the codec's maximum run length; longer runs are
//! chained through zero-length runs of the opposite color.
//!
//! ```rust
//! use rle_codec::{decode, encode};
//!
//! let row = [false, false, false, true, false, false, false, false];
//! let runs = encode(&row);
//! assert_eq!(runs.as_slice(), &[3, 1, 4, 0]);
//! assert_eq!(decode(&runs), row.to_vec());
//! ```
//!
//! ## Overflow chaining
//!
//! ```rust
//! use rle_codec::Codec;
//!
//! let codec = Codec::new(3).expect("valid max run length");
//! let runs = codec.encode(&[true; 7]);
//!
//! // 3 ones, an empty zero-run, 3 more ones, another empty zero-run, 1 one
//! assert_eq!(runs.as_slice(), &[0, 3, 0, 3, 0, 1, 0]);
//! assert_eq!(codec.decode(&runs), vec![true; 7]);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod codec;
pub mod error;
pub mod runs;

pub use codec::{Codec, DEFAULT_MAX_RUN_LENGTH, decode, decode_into, encode};
pub use error::CodecError;
pub use runs::RunLengths;
