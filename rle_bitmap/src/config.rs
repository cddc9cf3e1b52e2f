//! Construction options for [`RleBitmap`](crate::RleBitmap).

use crate::{BitmapError, Result};
use rle_codec::DEFAULT_MAX_RUN_LENGTH;

/// Share of the rows kept decoded when no cache size is configured.
pub const DEFAULT_CACHE_PERCENT: usize = 5;

/// Bitmap configuration with a fluent builder API.
///
/// ```
/// use rle_bitmap::BitmapConfig;
///
/// let config = BitmapConfig::new(1024, 400);
/// assert_eq!(config.effective_cache_capacity(), 20);
///
/// let config = config.with_cache_max_items(3).with_max_run_length(255);
/// assert_eq!(config.effective_cache_capacity(), 3);
/// assert_eq!(config.max_run_length, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapConfig {
    pub width: usize,
    pub height: usize,
    /// `None` means [`DEFAULT_CACHE_PERCENT`] of `height`.
    pub cache_max_items: Option<usize>,
    pub max_run_length: u16,
}

impl BitmapConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cache_max_items: None,
            max_run_length: DEFAULT_MAX_RUN_LENGTH,
        }
    }

    pub fn with_cache_max_items(mut self, items: usize) -> Self {
        self.cache_max_items = Some(items);
        self
    }

    pub fn with_max_run_length(mut self, max_run_length: u16) -> Self {
        self.max_run_length = max_run_length;
        self
    }

    /// Number of decoded rows the cache may hold: at least one, at most
    /// `height`.
    pub fn effective_cache_capacity(&self) -> usize {
        // Split to keep `height * percent` from overflowing.
        let default = self.height / 100 * DEFAULT_CACHE_PERCENT
            + self.height % 100 * DEFAULT_CACHE_PERCENT / 100;
        self.cache_max_items
            .unwrap_or(default)
            .min(self.height)
            .max(1)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BitmapError::Construction {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}
