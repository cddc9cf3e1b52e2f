//! Bit-level access to a run-length encoded bitmap.
//!
//! # Examples
//!
//! ```rust
//! use rle_bitmap::{BitmapConfig, RleBitmap};
//!
//! let config = BitmapConfig::new(8, 3).with_cache_max_items(1);
//! let mut bitmap = RleBitmap::with_config(config).expect("valid dimensions");
//!
//! bitmap.set(0, 0, true).unwrap();
//!
//! // Touching row 1 evicts row 0 and writes it back in encoded form
//! assert!(!bitmap.get(0, 1).unwrap());
//! assert!(!bitmap.is_cached(0));
//! assert!(bitmap.get(0, 0).unwrap());
//! ```

use crate::cache::{CacheStats, RowCache};
use crate::store::RowStore;
use crate::{BitmapConfig, BitmapError, Result};
use log::debug;
use rle_codec::Codec;

/// Fixed-size bitmap whose rows are stored run-length encoded, with a
/// bounded cache of decoded rows in front of the store.
#[derive(Debug)]
pub struct RleBitmap {
    width: usize,
    height: usize,
    store: RowStore,
    cache: RowCache,
}

impl RleBitmap {
    /// Creates a bitmap with the default cache size and maximum run length.
    ///
    /// ```
    /// use rle_bitmap::{BitmapError, RleBitmap};
    ///
    /// assert!(RleBitmap::new(640, 480).is_ok());
    /// assert!(matches!(
    ///     RleBitmap::new(640, 0),
    ///     Err(BitmapError::Construction { .. })
    /// ));
    /// ```
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_config(BitmapConfig::new(width, height))
    }

    pub fn with_config(config: BitmapConfig) -> Result<Self> {
        config.validate()?;
        let codec = Codec::new(config.max_run_length)?;
        let capacity = config.effective_cache_capacity();

        debug!(
            "creating {}x{} bitmap (cache capacity {}, max run length {})",
            config.width, config.height, capacity, config.max_run_length
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            store: RowStore::new(config.height, codec.blank(config.width)),
            cache: RowCache::new(config.width, config.height, capacity, codec),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check_bounds(x, y)?;
        let entry = self.cache.fetch(y, &mut self.store)?;
        Ok(entry.bits()[x])
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) -> Result<()> {
        self.check_bounds(x, y)?;
        let entry = self.cache.fetch(y, &mut self.store)?;
        entry.bits_mut()[x] = value;
        self.cache.mark_dirty(y);
        Ok(())
    }

    /// Flips a bit and returns its new value.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check_bounds(x, y)?;
        let entry = self.cache.fetch(y, &mut self.store)?;
        let bit = &mut entry.bits_mut()[x];
        *bit = !*bit;
        let value = *bit;
        self.cache.mark_dirty(y);
        Ok(value)
    }

    /// Commits every modified cached row to the encoded store.
    ///
    /// Returns how many rows were written back.
    pub fn flush_changes(&mut self) -> Result<usize> {
        self.cache.flush(&mut self.store)
    }

    /// Decoded row `y`, loaded through the cache.
    pub fn row(&mut self, y: usize) -> Result<&[bool]> {
        self.check_row(y)?;
        let entry = self.cache.fetch(y, &mut self.store)?;
        Ok(entry.bits())
    }

    /// Set bits in row `y`. Uncached rows are counted from their encoding
    /// and are not admitted to the cache.
    pub fn count_ones_in_row(&self, y: usize) -> Result<usize> {
        self.check_row(y)?;
        match self.cache.get(y) {
            Some(entry) => Ok(entry.bits().iter().filter(|&&b| b).count()),
            None => Ok(self.store.get_encoded(y)?.count_ones()),
        }
    }

    pub fn is_cached(&self, y: usize) -> bool {
        self.cache.contains(y)
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Bytes used by the encoded store. Dirty rows count at their last
    /// committed size.
    pub fn encoded_bytes(&self) -> usize {
        self.store.encoded_bytes()
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.width {
            return Err(BitmapError::ColumnOutOfRange {
                x,
                width: self.width,
            });
        }
        self.check_row(y)
    }

    fn check_row(&self, y: usize) -> Result<()> {
        if y >= self.height {
            return Err(BitmapError::RowOutOfRange {
                y,
                height: self.height,
            });
        }
        Ok(())
    }
}
