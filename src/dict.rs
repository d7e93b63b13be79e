//! Dict: string-keyed container layer over `hashbrown::HashMap`.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use std::collections::hash_map::RandomState;

/// A string-keyed map with conditional inserts.
///
/// Conditional mutation operations return the number of entries affected
/// (`1` or `0`) rather than the displaced value; use [`Dict::take`] when the
/// removed value itself is needed.
pub struct Dict<V, S = RandomState> {
    map: HashMap<String, V, S>,
}

impl<V> Dict<V> {
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<V> Default for Dict<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over immutable entries in `Dict`.
pub struct Iter<'a, V> {
    it: hashbrown::hash_map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, v)| (k.as_str(), v))
    }
}

/// Iterator over mutable entries in `Dict`.
pub struct IterMut<'a, V> {
    it: hashbrown::hash_map::IterMut<'a, String, V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V, S> Dict<V, S>
where
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Sets `key` to `value` unconditionally, overwriting any existing
    /// value. Returns `1` if the key was newly inserted, `0` if it already
    /// existed.
    pub fn put(&mut self, key: String, value: V) -> usize {
        match self.map.entry(key) {
            Entry::Occupied(mut e) => {
                e.insert(value);
                0
            }
            Entry::Vacant(e) => {
                e.insert(value);
                1
            }
        }
    }

    /// Inserts only if `key` is absent. Returns `1` if inserted, `0` if the
    /// key already existed (existing value untouched; `value` is dropped).
    pub fn put_if_absent(&mut self, key: String, value: V) -> usize {
        match self.map.entry(key) {
            Entry::Occupied(_) => 0,
            Entry::Vacant(e) => {
                e.insert(value);
                1
            }
        }
    }

    /// Overwrites only if `key` is present. Returns `1` if overwritten, `0`
    /// if the key was absent (no insertion occurs; `value` is dropped).
    pub fn put_if_exists<Q>(&mut self, key: &Q, value: V) -> usize
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get_mut(key) {
            Some(slot) => {
                *slot = value;
                1
            }
            None => 0,
        }
    }

    /// Deletes `key` if present. Returns `1` if a key was removed, `0` if it
    /// was not present.
    pub fn remove<Q>(&mut self, key: &Q) -> usize
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.remove(key) {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Removes `key` and returns its value, `None` if absent.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        String: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.remove(key)
    }

    /// Invokes `consumer(key, value)` once per entry, in unspecified order.
    /// A consumer returning `false` stops the traversal immediately.
    ///
    /// The `&self` receiver means the dictionary cannot be mutated from
    /// inside the consumer; the borrow checker enforces what would
    /// otherwise have to be an iteration-safety footnote.
    pub fn for_each<F>(&self, mut consumer: F)
    where
        F: FnMut(&str, &V) -> bool,
    {
        for (k, v) in self.map.iter() {
            if !consumer(k, v) {
                break;
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.map.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            it: self.map.iter_mut(),
        }
    }

    /// Returns every current key exactly once, order unspecified. The
    /// result length equals `len()` at the time of the call.
    pub fn keys(&self) -> Vec<String> {
        self.map.keys().cloned().collect()
    }

    pub(crate) fn keys_borrowed(&self) -> Vec<&String> {
        self.map.keys().collect()
    }

    /// Removes all entries in place, leaving an empty dictionary. Allocated
    /// capacity is retained for reuse.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
