use std::fmt::Display;

/// Bucket count used when none is configured.
pub const DEFAULT_BUCKETS: usize = 1000;

/// A fixed-size hash table with separate chaining.
///
/// The hash of a key is the sum of the character codes of its `Display` form, modulo
/// the bucket count. This is cheap and deterministic but not collision resistant:
/// anagrams (and `12`/`21`) always share a bucket, and large keyspaces cluster, so
/// bucket lengths are not uniformly distributed.
#[derive(Debug, Clone)]
pub struct ChainedHashMap<K, V> {
    buckets: Vec<Vec<(K, V)>>,
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Display + PartialEq,
{
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Display + PartialEq,
{
    /// Creates a table with `size` buckets (at least one).
    pub fn new(size: usize) -> Self {
        let mut buckets = Vec::with_capacity(size.max(1));
        buckets.resize_with(size.max(1), Vec::new);
        Self { buckets }
    }

    pub fn bucket_index(&self, key: &K) -> usize {
        let sum: usize = key.to_string().chars().map(|c| c as usize).sum();
        sum % self.buckets.len()
    }

    /// Inserts or updates in place. Returns the replaced value, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        match bucket.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                bucket.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Removes `key`. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &K) -> bool {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        match bucket.iter().position(|(existing, _)| existing == key) {
            Some(position) => {
                bucket.remove(position);
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain.
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// All entries, bucket by bucket and then in chain order.
    /// The order is an artifact of the hash function, not a sort.
    pub fn all_items(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|(key, value)| (key, value))
    }
}
