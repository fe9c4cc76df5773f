use std::collections::VecDeque;

use ahash::AHashMap;

use super::Crs;

/// Cache key: source, target and the coordinates rounded to 2 decimals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(super) struct CacheKey {
    from: Crs,
    to: Crs,
    x: i64,
    y: i64,
}

impl CacheKey {
    pub(super) fn new(from: Crs, to: Crs, point: [f64; 2]) -> Self {
        Self { from, to, x: round_centi(point[0]), y: round_centi(point[1]) }
    }
}

#[inline]
fn round_centi(value: f64) -> i64 { (value * 100.0).round() as i64 }

/// Bounded conversion cache. Once the bound is exceeded the oldest half of
/// the entries (by insertion order) is evicted; lookups don't refresh age.
#[derive(Debug)]
pub(super) struct ConversionCache {
    capacity: usize,
    entries: AHashMap<CacheKey, [f64; 2]>,
    order: VecDeque<CacheKey>,
}

impl ConversionCache {
    pub(super) fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1), entries: AHashMap::new(), order: VecDeque::new() }
    }

    #[inline] pub(super) fn len(&self) -> usize { self.entries.len() }

    #[inline] pub(super) fn get(&self, key: &CacheKey) -> Option<[f64; 2]> { self.entries.get(key).copied() }

    pub(super) fn insert(&mut self, key: CacheKey, value: [f64; 2]) {
        if self.entries.insert(key, value).is_none() {
            self.order.push_back(key);
        }
        if self.entries.len() > self.capacity { self.evict_oldest_half() }
    }

    pub(super) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn evict_oldest_half(&mut self) {
        let count = self.entries.len() / 2;
        for key in self.order.drain(..count) {
            self.entries.remove(&key);
        }
        log::debug!("[proj::cache] evicted {count} entries, {} remain", self.entries.len());
    }
}
