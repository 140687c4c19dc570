//! Column comparators over optional values.
//!
//! Every sortable column compares `Option<K>` with a fixed placement for absent
//! values, so a row with a missing field never panics the sort and always lands at a
//! predictable end of the table.

use std::cmp::Ordering;
use std::sync::Arc;

/// Where absent values sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AbsentPolicy {
    First,
    #[default]
    Last,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ascending comparison of two optional values.
pub fn compare_optional<K: Ord>(a: Option<&K>, b: Option<&K>, policy: AbsentPolicy) -> Ordering {
    compare_directed(a, b, SortDirection::Ascending, policy)
}

/// Direction applies to present values only; absent values stay where `policy` puts them.
pub fn compare_directed<K: Ord>(
    a: Option<&K>,
    b: Option<&K>,
    direction: SortDirection,
    policy: AbsentPolicy,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        },
        (None, None) => Ordering::Equal,
        (None, Some(_)) => match policy {
            AbsentPolicy::First => Ordering::Less,
            AbsentPolicy::Last => Ordering::Greater,
        },
        (Some(_), None) => match policy {
            AbsentPolicy::First => Ordering::Greater,
            AbsentPolicy::Last => Ordering::Less,
        },
    }
}

type CompareFn<R> = dyn Fn(&R, &R, SortDirection) -> Ordering + Send + Sync;

/// Type-erased comparator for one column.
pub struct SortSpec<R> {
    compare: Arc<CompareFn<R>>,
}

impl<R> Clone for SortSpec<R> {
    fn clone(&self) -> Self {
        Self {
            compare: self.compare.clone(),
        }
    }
}

impl<R> SortSpec<R> {
    pub fn compare(&self, a: &R, b: &R, direction: SortDirection) -> Ordering {
        (self.compare)(a, b, direction)
    }

    /// Stable sort of `rows`.
    pub fn sort(&self, rows: &mut [R], direction: SortDirection) {
        rows.sort_by(|a, b| self.compare(a, b, direction));
    }
}

/// Comparator that orders rows by an optional key.
pub fn sort_by_key<R, K, F>(extract: F, policy: AbsentPolicy) -> SortSpec<R>
where
    R: 'static,
    K: Ord + 'static,
    F: Fn(&R) -> Option<K> + Send + Sync + 'static,
{
    SortSpec {
        compare: Arc::new(move |a: &R, b: &R, direction| {
            compare_directed(extract(a).as_ref(), extract(b).as_ref(), direction, policy)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(policy: AbsentPolicy) -> SortSpec<(u32, Option<i32>)> {
        sort_by_key(|r: &(u32, Option<i32>)| r.1, policy)
    }

    #[test]
    fn test_absent_last_ascending() {
        let mut rows = vec![(0, Some(5)), (1, None), (2, Some(2))];
        spec(AbsentPolicy::Last).sort(&mut rows, SortDirection::Ascending);
        let keys: Vec<Option<i32>> = rows.iter().map(|r| r.1).collect();
        assert_eq!(keys, vec![Some(2), Some(5), None]);
    }

    #[test]
    fn test_sort_is_stable_on_reinvocation() {
        let mut rows = vec![(0, Some(1)), (1, None), (2, Some(1)), (3, None)];
        let s = spec(AbsentPolicy::Last);
        s.sort(&mut rows, SortDirection::Ascending);
        let first: Vec<u32> = rows.iter().map(|r| r.0).collect();
        assert_eq!(first, vec![0, 2, 1, 3]);
        s.sort(&mut rows, SortDirection::Ascending);
        let second: Vec<u32> = rows.iter().map(|r| r.0).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_descending_keeps_absent_placement() {
        let mut rows = vec![(0, Some(5)), (1, None), (2, Some(2)), (3, Some(9))];
        spec(AbsentPolicy::Last).sort(&mut rows, SortDirection::Descending);
        let keys: Vec<Option<i32>> = rows.iter().map(|r| r.1).collect();
        assert_eq!(keys, vec![Some(9), Some(5), Some(2), None]);
    }

    #[test]
    fn test_absent_first_policy() {
        let mut rows = vec![(0, Some(5)), (1, None), (2, Some(2))];
        spec(AbsentPolicy::First).sort(&mut rows, SortDirection::Ascending);
        let keys: Vec<Option<i32>> = rows.iter().map(|r| r.1).collect();
        assert_eq!(keys, vec![None, Some(2), Some(5)]);
    }

    #[test]
    fn test_compare_optional_is_total() {
        use Ordering::*;
        let p = AbsentPolicy::Last;
        assert_eq!(compare_optional(Some(&1), Some(&2), p), Less);
        assert_eq!(compare_optional::<i32>(None, None, p), Equal);
        assert_eq!(compare_optional(None, Some(&1), p), Greater);
        assert_eq!(compare_optional(Some(&1), None, p), Less);
    }
}
