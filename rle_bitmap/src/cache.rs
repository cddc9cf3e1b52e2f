//! Bounded cache of decoded rows with FIFO eviction and lazy write-back.
//!
//! Entries live in a dense slot array indexed by row number; a queue records
//! the order in which rows were admitted. The oldest admitted row is evicted
//! first, regardless of how recently it was read or written. Dirty victims
//! are re-encoded into the [`RowStore`] before they are dropped.

use crate::store::RowStore;
use crate::{BitmapError, Result};
use log::{debug, trace};
use rle_codec::Codec;

#[cfg(not(feature = "std"))]
use alloc::{collections::VecDeque, vec, vec::Vec};
#[cfg(feature = "std")]
use std::collections::VecDeque;

/// A decoded row owned by the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    row: usize,
    dirty: bool,
    bits: Vec<bool>,
}

impl CacheEntry {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable access to the bits. Callers must mark the row dirty afterwards.
    ///
    /// Only the bitmap facade edits cached bits, so writes always reach the
    /// store:
    ///
    /// ```compile_fail
    /// use rle_bitmap::{Codec, RowCache, RowStore};
    ///
    /// let codec = Codec::default();
    /// let mut store = RowStore::new(2, codec.blank(8));
    /// let mut cache = RowCache::new(8, 2, 1, codec);
    /// cache.fetch(0, &mut store).unwrap().bits_mut()[0] = true;
    /// ```
    pub(crate) fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}

/// Counters collected over the cache's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Rows re-encoded into the store, by eviction or flush.
    pub write_backs: u64,
}

#[derive(Debug)]
pub struct RowCache {
    slots: Vec<Option<CacheEntry>>,
    order: VecDeque<usize>,
    capacity: usize,
    width: usize,
    codec: Codec,
    stats: CacheStats,
}

impl RowCache {
    /// Creates an empty cache for `height` rows of `width` bits.
    ///
    /// `capacity` is clamped to `1..=height`; the cache never holds more
    /// rows than the bitmap has.
    pub fn new(width: usize, height: usize, capacity: usize, codec: Codec) -> Self {
        let capacity = capacity.min(height).max(1);
        Self {
            slots: vec![None; height],
            order: VecDeque::with_capacity(capacity),
            capacity,
            width,
            codec,
            stats: CacheStats::default(),
        }
    }

    /// Returns the cached entry for `row`, decoding it from `store` on a miss.
    ///
    /// Admitting a new row into a full cache evicts the oldest admitted row
    /// first. The returned entry is never the victim.
    pub fn fetch(&mut self, row: usize, store: &mut RowStore) -> Result<&mut CacheEntry> {
        if row >= self.slots.len() {
            return Err(BitmapError::RowOutOfRange {
                y: row,
                height: self.slots.len(),
            });
        }

        let entry = match self.slots[row].take() {
            Some(entry) => {
                self.stats.hits += 1;
                trace!("row cache hit for row {}", row);
                entry
            }
            None => {
                let entry = self.load(row, store)?;
                if self.order.len() >= self.capacity {
                    self.evict_oldest(store)?;
                }
                self.order.push_back(row);
                entry
            }
        };

        Ok(self.slots[row].insert(entry))
    }

    /// Flags a cached row as modified. Returns `false` if `row` is not cached.
    pub fn mark_dirty(&mut self, row: usize) -> bool {
        match self.slots.get_mut(row).and_then(Option::as_mut) {
            Some(entry) => {
                entry.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Writes every dirty row back to `store` and clears the dirty flags.
    ///
    /// Entries stay cached. Returns the number of rows written.
    pub fn flush(&mut self, store: &mut RowStore) -> Result<usize> {
        let mut written = 0;
        for &row in &self.order {
            if let Some(entry) = self.slots[row].as_mut().filter(|e| e.dirty) {
                store.set_encoded(row, self.codec.encode(&entry.bits))?;
                entry.dirty = false;
                written += 1;
            }
        }
        self.stats.write_backs += written as u64;
        debug!("flushed {} dirty rows", written);
        Ok(written)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn contains(&self, row: usize) -> bool {
        self.get(row).is_some()
    }

    pub fn is_dirty(&self, row: usize) -> bool {
        self.get(row).is_some_and(CacheEntry::is_dirty)
    }

    /// Cached entry for `row`, without touching the store or the statistics.
    pub fn get(&self, row: usize) -> Option<&CacheEntry> {
        self.slots.get(row).and_then(Option::as_ref)
    }

    /// Cached rows, oldest admitted first.
    pub fn cached_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn load(&mut self, row: usize, store: &RowStore) -> Result<CacheEntry> {
        let encoded = store.get_encoded(row)?;
        let found = encoded.decoded_len();
        if found != self.width {
            return Err(BitmapError::RowLengthMismatch {
                y: row,
                expected: self.width,
                found,
            });
        }

        self.stats.misses += 1;
        trace!("row cache miss for row {}", row);
        Ok(CacheEntry {
            row,
            dirty: false,
            bits: self.codec.decode(encoded),
        })
    }

    fn evict_oldest(&mut self, store: &mut RowStore) -> Result<()> {
        let Some(&victim) = self.order.front() else {
            return Ok(());
        };

        let dirty = match &self.slots[victim] {
            Some(entry) if entry.dirty => {
                store.set_encoded(victim, self.codec.encode(&entry.bits))?;
                self.stats.write_backs += 1;
                true
            }
            _ => false,
        };

        self.order.pop_front();
        self.slots[victim] = None;
        self.stats.evictions += 1;
        debug!("evicted row {} (dirty: {})", victim, dirty);
        Ok(())
    }
}
