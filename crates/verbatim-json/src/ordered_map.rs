//! Insertion-order-preserving map with tombstoned removal.
//!
//! [`OrderedMap`] backs JSON objects: iteration yields entries in the order
//! their keys were first inserted, updates keep the original position, and
//! removal leaves a tombstone in the slot sequence instead of shifting later
//! entries.
//!
//! # Compaction policy
//!
//! One consistent contract: every read-side operation filters tombstones
//! inline and never mutates the container. Physical reclamation is an explicit
//! opt-in via [`compact`](OrderedMap::compact). The slot sequence therefore
//! grows monotonically between compactions, and a live key's stored index
//! always names the slot currently holding it.
//!
//! Re-inserting a previously removed key appends a *new* trailing slot — the
//! old position is never resurrected. This is observable through iteration
//! order and is part of the contract.

use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// A map from `K` to `V` that remembers first-insertion order.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: HashMap<K, (V, usize)>,
    slots: Vec<Option<K>>,
    tombstones: usize,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            slots: Vec::new(),
            tombstones: 0,
        }
    }

    /// Number of live entries (tombstones excluded).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the slot sequence, tombstones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of tombstoned slots awaiting compaction.
    pub fn tombstone_count(&self) -> usize {
        self.tombstones
    }

    /// Insert or update. A new key appends a trailing slot; a known key keeps
    /// its order position and only the value changes. O(1) amortized.
    pub fn insert(&mut self, key: K, value: V) {
        if let Some((stored, _)) = self.entries.get_mut(&key) {
            *stored = value;
        } else {
            self.entries.insert(key.clone(), (value, self.slots.len()));
            self.slots.push(Some(key));
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|(v, _)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get_mut(key).map(|(v, _)| v)
    }

    /// Indexer with auto-insertion: an absent key gains a default value in a
    /// new trailing slot, mirroring the map/array duality of JSON objects.
    pub fn get_mut_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        match self.entries.entry(key) {
            Entry::Occupied(entry) => &mut entry.into_mut().0,
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                let slot = self.slots.len();
                let value = entry.insert((V::default(), slot));
                self.slots.push(Some(key));
                &mut value.0
            }
        }
    }

    /// Remove a key, returning whether it was present. The slot becomes a
    /// tombstone; no other index shifts.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.entries.remove(key) {
            Some((_, index)) => {
                self.slots[index] = None;
                self.tombstones += 1;
                true
            }
            None => false,
        }
    }

    /// Drop all entries and slots.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
        self.tombstones = 0;
    }

    /// Live keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Live values in first-insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Live `(key, value)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys()
            .map(move |k| (k, &self.entries[k].0))
    }

    /// The `index`-th live entry in insertion order; `None` out of range.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.iter().nth(index)
    }

    /// Physically remove tombstones, rewriting stored indices. Iteration
    /// order is unchanged; only `slot_count` shrinks.
    pub fn compact(&mut self) {
        if self.tombstones == 0 {
            return;
        }
        self.slots.retain(Option::is_some);
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some((_, stored)) = slot.as_ref().and_then(|k| self.entries.get_mut(k)) {
                *stored = index;
            }
        }
        self.tombstones = 0;
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq,
{
    /// Structural equality: same live entries in the same order. Tombstone
    /// layout is not observable and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.insert(key, value);
        }
        map
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
