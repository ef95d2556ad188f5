pub(crate) mod boundaries;
pub(crate) mod canon;

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;
use std::fmt;
use std::ops::Index;

use crate::Result;
use crate::error::Error;
use crate::iter::Runs;
use crate::map::boundaries::Boundaries;
use crate::span::SpanExc;

/// Maps every key of a totally ordered key space to a value, storing only the
/// keys where the value changes. All keys below the first boundary map to
/// `val_begin`.
///
/// The boundaries are kept canonical: no boundary repeats the value in effect
/// just before it. `K`'s `Ord` must be a strict total order; behaviour for
/// inconsistent orderings is unspecified.
#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub struct IntervalMap<K, V> {
    val_begin: V,
    boundaries: Boundaries<K, V>,
    // False if seeded with boundaries that may not be canonical.
    canonical: bool,
}

impl<K, V: Default> Default for IntervalMap<K, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K, V> IntervalMap<K, V> {
    /// Creates a map where every key maps to |val_begin|.
    pub const fn new(val_begin: V) -> Self {
        Self { val_begin, boundaries: Boundaries::new(), canonical: true }
    }

    #[must_use]
    pub const fn val_begin(&self) -> &V {
        &self.val_begin
    }

    /// Number of stored boundaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Iterates over the stored `(key, value)` boundaries in key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.boundaries.iter()
    }

    /// Iterates over the maximal runs of the map in key order.
    pub fn runs(&self) -> Runs<'_, K, V> {
        Runs::new(&self.val_begin, self.boundaries.iter())
    }

    #[must_use]
    pub fn into_parts(self) -> (V, BTreeMap<K, V>) {
        (self.val_begin, self.boundaries.into_map())
    }
}

impl<K: Ord, V> IntervalMap<K, V> {
    /// Returns the value in effect at |k|.
    #[must_use]
    pub fn get(&self, k: &K) -> &V {
        self.boundaries.lower_bound_last(k).map_or(&self.val_begin, |(_, v)| v)
    }
}

impl<K: Ord, V: PartialEq> IntervalMap<K, V> {
    /// Seeds a map with |boundaries| as-is, without any canonicalization.
    /// Mainly for setting up fixtures. If the boundaries are not canonical,
    /// the next `assign` canonicalizes the whole map.
    pub fn from_raw(val_begin: V, boundaries: BTreeMap<K, V>) -> Self {
        let boundaries = Boundaries::from_map(boundaries);
        let canonical = canon::check(&boundaries, &val_begin).is_ok();
        Self { val_begin, boundaries, canonical }
    }

    /// Builds a map from boundaries given in key order, rejecting input that
    /// is unsorted or not canonical.
    pub fn try_from_boundaries(
        val_begin: V,
        boundaries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (idx, (k, v)) in boundaries.into_iter().enumerate() {
            if map.last_key_value().is_some_and(|(last, _)| *last >= k) {
                return Err(Error::UnsortedKeys { idx });
            }
            map.insert(k, v);
        }
        let boundaries = Boundaries::from_map(map);
        canon::check(&boundaries, &val_begin)?;
        Ok(Self { val_begin, boundaries, canonical: true })
    }

    /// Checks the boundaries are in canonical form.
    pub fn check_canonical(&self) -> Result<()> {
        canon::check(&self.boundaries, &self.val_begin)
    }

    #[cfg(test)]
    fn assert_canonical(&self) {
        if let Err(e) = self.check_canonical() {
            panic!("non-canonical boundaries: {e}");
        }
    }
}

impl<K: Ord + Clone, V: Clone + PartialEq> IntervalMap<K, V> {
    /// Assigns |val| to every key in `[st, en)`. Does nothing if `st >= en`.
    pub fn assign(&mut self, st: K, en: K, val: V) {
        if st >= en {
            tracing::trace!("skipping assign to empty span");
            return;
        }
        if !self.canonical {
            self.canonicalize();
        }

        // Value just before |st|. A boundary exactly at |st| gets overwritten
        // so it can't be the source.
        let prev = self.boundaries.before(&st).map_or(&self.val_begin, |(_, v)| v);
        let insert_st = *prev != val;
        // Value that has to resume at |en|. If a boundary sits exactly at
        // |en| it already carries this value.
        let tail = match self.boundaries.lower_bound_last(&en) {
            Some((k, _)) if *k == en => None,
            Some((_, v)) => Some(v),
            None => Some(&self.val_begin),
        };
        let tail = tail.filter(|&v| *v != val).cloned();

        let removed = self.boundaries.remove_span(SpanExc::new(&st, &en));
        let insert_en = tail.is_some();
        if let Some(tail) = tail {
            self.boundaries.insert(en.clone(), tail);
        }
        if insert_st {
            self.boundaries.insert(st, val);
        }
        let merged = canon::canonicalize_at(&mut self.boundaries, &en, &self.val_begin);

        tracing::trace!(removed, insert_st, insert_en, merged, "assigned span");
        #[cfg(test)]
        self.assert_canonical();
    }

    /// Assigns |val| to every key in |s|. Does nothing if |s| is empty.
    pub fn assign_span(&mut self, s: SpanExc<K>, val: V) {
        self.assign(s.st, s.en, val);
    }

    /// Drops every redundant boundary. Returns the number dropped. Only
    /// needed for maps seeded by `from_raw`, since `assign` keeps the map
    /// canonical.
    pub fn canonicalize(&mut self) -> usize {
        let dropped = canon::canonicalize(&mut self.boundaries, &self.val_begin);
        if dropped > 0 {
            tracing::debug!(dropped, "canonicalized boundaries");
        }
        self.canonical = true;
        dropped
    }
}

impl<K: Ord, V> Index<&K> for IntervalMap<K, V> {
    type Output = V;

    fn index(&self, k: &K) -> &Self::Output {
        self.get(k)
    }
}

impl<'a, K, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}
