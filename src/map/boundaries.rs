use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::ops::Bound;

use crate::span::SpanExc;

/// Ordered `(key, value)` boundaries. Each entry starts a run of its value
/// which continues up to the next stored key.
#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct Boundaries<K, V> {
    map: BTreeMap<K, V>,
}

impl<K, V> Default for Boundaries<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Boundaries<K, V> {
    pub const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    pub const fn from_map(map: BTreeMap<K, V>) -> Self {
        Self { map }
    }

    #[must_use]
    pub fn into_map(self) -> BTreeMap<K, V> {
        self.map
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.map.iter()
    }
}

impl<K: Ord, V> Boundaries<K, V> {
    #[must_use]
    pub fn get(&self, k: &K) -> Option<&V> {
        self.map.get(k)
    }

    /// Find the last boundary less than or equal to |k|.
    #[must_use]
    pub fn lower_bound_last(&self, k: &K) -> Option<(&K, &V)> {
        self.map.range((Bound::Unbounded, Bound::Included(k))).next_back()
    }

    /// Find the last boundary strictly less than |k|.
    #[must_use]
    pub fn before(&self, k: &K) -> Option<(&K, &V)> {
        self.map.range((Bound::Unbounded, Bound::Excluded(k))).next_back()
    }

    pub fn insert(&mut self, k: K, v: V) -> Option<V> {
        self.map.insert(k, v)
    }

    pub fn remove(&mut self, k: &K) -> Option<V> {
        self.map.remove(k)
    }

    pub fn retain(&mut self, f: impl FnMut(&K, &mut V) -> bool) {
        self.map.retain(f);
    }
}

impl<K: Ord + Clone, V> Boundaries<K, V> {
    /// Removes every boundary with key inside |s| and returns how many were
    /// removed. Only the removed keys are visited.
    pub fn remove_span(&mut self, s: SpanExc<&K>) -> usize {
        if s.is_empty() {
            return 0;
        }
        let keys: Vec<K> = self
            .map
            .range((Bound::Included(s.st), Bound::Excluded(s.en)))
            .map(|(k, _)| k.clone())
            .collect();
        for k in &keys {
            self.map.remove(k);
        }
        keys.len()
    }
}

impl<'a, K, V> IntoIterator for &'a Boundaries<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
