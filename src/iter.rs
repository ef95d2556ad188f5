use std::collections::btree_map;
use std::fmt;
use std::iter::FusedIterator;

use crate::span::SpanExc;

/// A maximal run of keys sharing one value. |st| is `None` for the run
/// extending to negative infinity, |en| is `None` for the run extending to
/// positive infinity.
#[must_use]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub struct Run<'a, K, V> {
    pub st: Option<&'a K>,
    pub en: Option<&'a K>,
    pub value: &'a V,
}

impl<'a, K, V> Run<'a, K, V> {
    /// Returns the run as a span, if it is bounded on both sides.
    #[must_use]
    pub fn to_span(&self) -> Option<SpanExc<&'a K>> {
        Some(SpanExc::new(self.st?, self.en?))
    }
}

impl<K: Ord, V> Run<'_, K, V> {
    #[must_use]
    pub fn contains(&self, k: &K) -> bool {
        self.st.is_none_or(|st| st <= k) && self.en.is_none_or(|en| k < en)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Run<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.st {
            Some(st) => write!(f, "[{st},")?,
            None => write!(f, "(..,")?,
        }
        match self.en {
            Some(en) => write!(f, "{en})")?,
            None => write!(f, "..)")?,
        }
        write!(f, ": {}", self.value)
    }
}

/// Iterates the runs of an interval map in key order. Always yields at least
/// one run.
#[must_use]
#[derive(Debug, Clone)]
pub struct Runs<'a, K, V> {
    st: Option<&'a K>,
    // None once the unbounded last run has been yielded.
    value: Option<&'a V>,
    boundaries: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Runs<'a, K, V> {
    pub(crate) fn new(val_begin: &'a V, boundaries: btree_map::Iter<'a, K, V>) -> Self {
        Self { st: None, value: Some(val_begin), boundaries }
    }
}

impl<'a, K, V> Iterator for Runs<'a, K, V> {
    type Item = Run<'a, K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value?;
        let st = self.st;
        if let Some((k, v)) = self.boundaries.next() {
            self.st = Some(k);
            self.value = Some(v);
            Some(Run { st, en: Some(k), value })
        } else {
            self.value = None;
            Some(Run { st, en: None, value })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = if self.value.is_some() { self.boundaries.len() + 1 } else { 0 };
        (n, Some(n))
    }
}

impl<K, V> ExactSizeIterator for Runs<'_, K, V> {}

impl<K, V> FusedIterator for Runs<'_, K, V> {}
