use std::fmt;
use std::ops::Range;

/// Half-open span of keys, `[st, en)`. Spans with `st >= en` are empty.
#[must_use]
#[derive(Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Copy, Clone)]
pub struct SpanExc<T> {
    pub st: T,
    pub en: T,
}

impl<T: fmt::Display> fmt::Display for SpanExc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.st, self.en)
    }
}

impl<T> SpanExc<T> {
    pub const fn new(st: T, en: T) -> Self {
        Self { st, en }
    }
}

impl<T: PartialOrd> SpanExc<T> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.st >= self.en
    }

    #[must_use]
    pub fn contains(&self, t: &T) -> bool {
        &self.st <= t && &self.en > t
    }

    #[must_use]
    pub fn contains_span(&self, s: &Self) -> bool {
        self.st <= s.st && self.en >= s.en
    }
}

impl<T: Ord + Clone> SpanExc<T> {
    #[must_use]
    pub fn intersect(&self, s: &Self) -> Option<Self> {
        let span = Self::new((&self.st).max(&s.st).clone(), (&self.en).min(&s.en).clone());
        if span.is_empty() { None } else { Some(span) }
    }
}

impl<T> From<Range<T>> for SpanExc<T> {
    fn from(r: Range<T>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl<T> From<SpanExc<T>> for Range<T> {
    fn from(s: SpanExc<T>) -> Self {
        s.st..s.en
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ops() {
        let exc_0_2 = SpanExc::<i64>::new(0, 2);
        let exc_1_3 = SpanExc::<i64>::new(1, 3);
        let exc_2_4 = SpanExc::<i64>::new(2, 4);
        let empty = SpanExc::<i64>::default();

        assert_eq!(exc_0_2.intersect(&exc_0_2), Some(SpanExc::new(0, 2)));
        assert_eq!(exc_0_2.intersect(&exc_1_3), Some(SpanExc::new(1, 2)));
        assert_eq!(exc_0_2.intersect(&exc_2_4), None);
        assert_eq!(exc_0_2.intersect(&empty), None);
        assert_eq!(exc_1_3.intersect(&exc_2_4), Some(SpanExc::new(2, 3)));
        assert_eq!(exc_2_4.intersect(&exc_1_3), Some(SpanExc::new(2, 3)));

        assert!(exc_1_3.contains_span(&SpanExc::new(2, 3)));
        assert!(!exc_1_3.contains_span(&exc_2_4));
    }

    #[test]
    fn empty() {
        assert!(SpanExc::new(3, 3).is_empty());
        assert!(SpanExc::new(4, 3).is_empty());
        assert!(!SpanExc::new(3, 4).is_empty());
    }

    #[test]
    fn contains() {
        let s = SpanExc::new(2, 5);
        assert!(!s.contains(&1));
        assert!(s.contains(&2));
        assert!(s.contains(&4));
        assert!(!s.contains(&5));
    }

    #[test]
    fn conversions() {
        let s: SpanExc<i32> = (1..4).into();
        assert_eq!(s, SpanExc::new(1, 4));
        assert_eq!(Range::from(s), 1..4);
        assert_eq!(s.to_string(), "[1,4)");
    }
}
