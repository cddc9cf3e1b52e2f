//! # rle_bitmap
//!
//! A `no_std` compatible two-dimensional bitmap that keeps every row
//! run-length encoded and decodes rows on demand into a bounded cache.
//!
//! ```rust
//! use rle_bitmap::RleBitmap;
//!
//! // 10_000 x 2_000 bits; the cache keeps 5% of the rows decoded
//! let mut mask = RleBitmap::new(10_000, 2_000).expect("Failed to create bitmap");
//! mask.set(42, 7, true).unwrap();
//!
//! assert_eq!(mask.get(42, 7), Ok(true));
//! assert_eq!(mask.get(43, 7), Ok(false));
//! assert_eq!(mask.cache_capacity(), 100);
//! ```
//!
//! ## Lazy write-back
//!
//! Writes only touch the decoded row. The encoded store is updated when the
//! row is evicted or on [`RleBitmap::flush_changes`].
//!
//! ```rust
//! use rle_bitmap::RleBitmap;
//!
//! let mut mask = RleBitmap::new(64, 64).expect("Failed to create bitmap");
//! let blank_bytes = mask.encoded_bytes();
//!
//! for x in 0..64 {
//!     mask.set(x, 0, x % 2 == 0).unwrap();
//! }
//! assert_eq!(mask.encoded_bytes(), blank_bytes);
//!
//! assert_eq!(mask.flush_changes(), Ok(1));
//! assert!(mask.encoded_bytes() > blank_bytes);
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod bitmap;
pub mod cache;
pub mod config;
pub mod error;
pub mod store;

pub use bitmap::RleBitmap;
pub use cache::{CacheEntry, CacheStats, RowCache};
pub use config::BitmapConfig;
pub use error::{BitmapError, Result};
pub use rle_codec::{Codec, RunLengths};
pub use store::RowStore;
