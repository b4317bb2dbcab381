use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use thiserror::Error;

const DEFAULT_CAPACITY: usize = 8;
const DEFAULT_LOAD_FACTOR: f64 = 0.75;
const MIN_CAPACITY: usize = 4;

#[derive(Debug, Error, PartialEq)]
pub enum HashTableError {
    #[error("load factor must be within 0.25..=0.95, got {0}")]
    LoadFactorOutOfRange(f64),
}

/// Hash table with separate chaining and dynamic resizing.
///
/// Buckets are vectors of key-value pairs; empty buckets are stored as
/// `None`. The table doubles when the live count exceeds
/// `capacity * load_factor` and halves under one-fifth load, but never
/// shrinks below its initial capacity.
///
/// ```
/// use algolab_collections::HashTable;
///
/// let mut table = HashTable::new();
/// table.insert("one", 1);
/// table.insert("two", 2);
/// assert_eq!(table.get(&"one"), Some(&1));
/// assert_eq!(table.remove(&"two"), Some(2));
/// assert_eq!(table.get(&"two"), None);
/// ```
#[derive(Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Option<Vec<(K, V)>>>,
    size: usize,
    load_factor: f64,
    min_capacity: usize,
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    pub fn new() -> Self {
        Self::with_options(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR)
            .expect("default options are in range")
    }

    /// Builds a table with explicit starting capacity and load factor.
    /// Capacities below 4 are raised to 4; a load factor outside
    /// `0.25..=0.95` is an error.
    pub fn with_options(initial_capacity: usize, load_factor: f64) -> Result<Self, HashTableError> {
        if !(0.25..=0.95).contains(&load_factor) {
            return Err(HashTableError::LoadFactorOutOfRange(load_factor));
        }
        let capacity = initial_capacity.max(MIN_CAPACITY);

        Ok(Self {
            buckets: (0..capacity).map(|_| None).collect(),
            size: 0,
            load_factor,
            min_capacity: capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Live count divided by bucket count.
    pub fn load(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    /// Inserts or replaces. Returns the previous value for an existing key.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let replaced = self.insert_pair(key, value);
        if replaced.is_none() {
            self.size += 1;
            self.maybe_grow();
        }
        replaced
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let bucket = self.buckets[self.index_for(key)].as_ref()?;
        bucket.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.index_for(key);
        let bucket = self.buckets[idx].as_mut()?;
        bucket.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes a key and hands back its value. Missing keys are `None`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index_for(key);
        let bucket = self.buckets[idx].as_mut()?;
        let pos = bucket.iter().position(|(k, _)| k == key)?;
        let (_, value) = bucket.remove(pos);
        if bucket.is_empty() {
            self.buckets[idx] = None;
        }
        self.size -= 1;
        self.maybe_shrink();
        Some(value)
    }

    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = None;
        }
        self.size = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flatten()
            .flatten()
            .map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    fn index_for(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }

    /// Insert or update without touching size; returns the replaced value.
    fn insert_pair(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.index_for(&key);
        let bucket = self.buckets[idx].get_or_insert_with(Vec::new);
        for (k, v) in bucket.iter_mut() {
            if *k == key {
                return Some(std::mem::replace(v, value));
            }
        }
        bucket.push((key, value));
        None
    }

    fn maybe_grow(&mut self) {
        let threshold = (self.buckets.len() as f64 * self.load_factor) as usize;
        if self.size > threshold {
            self.resize(self.buckets.len() * 2);
        }
    }

    fn maybe_shrink(&mut self) {
        let capacity = self.buckets.len();
        if capacity > self.min_capacity && self.size * 5 < capacity {
            let candidate = (capacity / 2).max(self.min_capacity).max(MIN_CAPACITY);
            // Only shrink when still under 0.4 load at the smaller size,
            // otherwise grow/shrink cycles would thrash around a boundary.
            if self.size * 5 < candidate * 2 {
                self.resize(candidate);
            }
        }
    }

    fn resize(&mut self, new_capacity: usize) {
        let old = std::mem::replace(
            &mut self.buckets,
            (0..new_capacity).map(|_| None).collect(),
        );
        for bucket in old.into_iter().flatten() {
            for (k, v) in bucket {
                self.insert_pair(k, v);
            }
        }
    }
}
