//! Canonicalization of boundaries. A boundary is redundant if its value equals
//! the value in effect just before it: either the previous boundary's value,
//! or the sentinel value for the first boundary. Canonical form has none.

use crate::Result;
use crate::error::Error;
use crate::map::boundaries::Boundaries;

/// Drops every redundant boundary. Returns the number of boundaries dropped.
pub fn canonicalize<K: Ord, V: Clone + PartialEq>(
    b: &mut Boundaries<K, V>,
    val_begin: &V,
) -> usize {
    let len = b.len();
    let mut prev = val_begin.clone();
    b.retain(|_, v| {
        if *v == prev {
            false
        } else {
            prev = v.clone();
            true
        }
    });
    len - b.len()
}

/// Drops the boundary at |k|, if there is one and it is redundant. Canonical
/// form can only break next to boundaries that were just inserted or exposed
/// by removal, so this is enough after a single edit if the rest of |b| was
/// canonical. Returns true if a boundary was dropped.
pub fn canonicalize_at<K: Ord, V: PartialEq>(
    b: &mut Boundaries<K, V>,
    k: &K,
    val_begin: &V,
) -> bool {
    let Some(v) = b.get(k) else {
        return false;
    };
    let prev = b.before(k).map_or(val_begin, |(_, pv)| pv);
    if v == prev {
        b.remove(k);
        true
    } else {
        false
    }
}

/// Checks that |b| is in canonical form. Reports the first violation found.
pub fn check<K: Ord, V: PartialEq>(b: &Boundaries<K, V>, val_begin: &V) -> Result<()> {
    let mut prev = val_begin;
    for (idx, (_, v)) in b.iter().enumerate() {
        if v == prev {
            return Err(Error::RedundantBoundary { idx });
        }
        prev = v;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn make(v: &[(i32, char)]) -> Boundaries<i32, char> {
        Boundaries::from_map(v.iter().copied().collect::<BTreeMap<_, _>>())
    }

    fn entries(b: &Boundaries<i32, char>) -> Vec<(i32, char)> {
        b.iter().map(|(&k, &v)| (k, v)).collect()
    }

    #[test]
    fn canonicalize_merges_adjacent() {
        let mut b = make(&[(1, 'a'), (2, 'a'), (3, 'b'), (4, 'b'), (5, 'b'), (6, 'a')]);
        assert_eq!(canonicalize(&mut b, &'x'), 3);
        assert_eq!(entries(&b), vec![(1, 'a'), (3, 'b'), (6, 'a')]);
    }

    #[test]
    fn canonicalize_drops_leading() {
        let mut b = make(&[(1, 'x'), (2, 'x'), (3, 'a'), (4, 'x')]);
        assert_eq!(canonicalize(&mut b, &'x'), 2);
        assert_eq!(entries(&b), vec![(3, 'a'), (4, 'x')]);
    }

    #[test]
    fn canonicalize_all_redundant() {
        let mut b = make(&[(1, 'x'), (2, 'x')]);
        assert_eq!(canonicalize(&mut b, &'x'), 2);
        assert!(b.is_empty());
    }

    #[test]
    fn canonicalize_noop() {
        let mut b = make(&[(1, 'a'), (2, 'b'), (3, 'x')]);
        assert_eq!(canonicalize(&mut b, &'x'), 0);
        assert_eq!(entries(&b), vec![(1, 'a'), (2, 'b'), (3, 'x')]);
    }

    #[test]
    fn canonicalize_at_drops() {
        let mut b = make(&[(1, 'a'), (2, 'a'), (3, 'b')]);
        assert!(!canonicalize_at(&mut b, &1, &'x'));
        assert!(!canonicalize_at(&mut b, &3, &'x'));
        assert!(!canonicalize_at(&mut b, &7, &'x'));
        assert!(canonicalize_at(&mut b, &2, &'x'));
        assert_eq!(entries(&b), vec![(1, 'a'), (3, 'b')]);
    }

    #[test]
    fn canonicalize_at_first() {
        let mut b = make(&[(1, 'x'), (2, 'a')]);
        assert!(canonicalize_at(&mut b, &1, &'x'));
        assert_eq!(entries(&b), vec![(2, 'a')]);
    }

    #[test]
    fn check_reports_first_violation() {
        assert!(check(&make(&[]), &'x').is_ok());
        assert!(check(&make(&[(1, 'a'), (2, 'x'), (3, 'a')]), &'x').is_ok());

        let err = check(&make(&[(1, 'x'), (2, 'a')]), &'x').unwrap_err();
        assert!(matches!(err, Error::RedundantBoundary { idx: 0 }));

        let err = check(&make(&[(1, 'a'), (2, 'b'), (3, 'b')]), &'x').unwrap_err();
        assert!(matches!(err, Error::RedundantBoundary { idx: 2 }));
    }
}
