//! Free point number enumeration.

use std::collections::HashSet;

/// Lazily enumerates positive numbers absent from a used set, smallest first.
#[derive(Debug, Clone)]
pub struct FreeNumbers {
    used: HashSet<u32>,
    next: Option<u32>,
}

impl Iterator for FreeNumbers {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        while let Some(n) = self.next {
            self.next = n.checked_add(1);
            if !self.used.contains(&n) {
                return Some(n);
            }
        }
        None
    }
}

/// Free numbers not in `used`, in increasing order starting from 1.
///
/// Duplicates and order of `used` do not matter; `0` is never a candidate.
pub fn free_numbers<I>(used: I) -> FreeNumbers
where
    I: IntoIterator<Item = u32>,
{
    FreeNumbers {
        used: used.into_iter().collect(),
        next: Some(1),
    }
}

/// The `count` smallest positive numbers not in `used`.
pub fn find_free<I>(used: I, count: usize) -> Vec<u32>
where
    I: IntoIterator<Item = u32>,
{
    free_numbers(used).take(count).collect()
}

/// The smallest positive number not in `used`.
pub fn smallest_free<I>(used: I) -> Option<u32>
where
    I: IntoIterator<Item = u32>,
{
    free_numbers(used).next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_find_free_skips_used() {
        assert_eq!(find_free([1, 2, 3, 5], 3), vec![4, 6, 7]);
    }

    #[test]
    fn test_find_free_nothing_used() {
        assert_eq!(find_free(Vec::new(), 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_find_free_zero_count() {
        assert!(find_free([1, 2, 3], 0).is_empty());
    }

    #[test]
    fn test_find_free_ignores_order_duplicates_and_zero() {
        assert_eq!(find_free([5, 0, 2, 2, 1, 5], 4), vec![3, 4, 6, 7]);
    }

    #[test]
    fn test_smallest_free() {
        assert_eq!(smallest_free([2, 3]), Some(1));
        assert_eq!(smallest_free([1, 2, 3]), Some(4));
    }

    #[test]
    fn test_free_numbers_stop_at_u32_max() {
        let mut free = free_numbers([1]);
        free.next = Some(u32::MAX);
        assert_eq!(free.collect::<Vec<_>>(), vec![u32::MAX]);
    }

    proptest! {
        #[test]
        fn prop_gap_correctness(
            used in proptest::collection::vec(0u32..300, 0..200),
            count in 0usize..100,
        ) {
            let free = find_free(used.iter().copied(), count);
            let used_set: HashSet<u32> = used.iter().copied().collect();

            prop_assert_eq!(free.len(), count);
            for pair in free.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            for n in &free {
                prop_assert!(*n >= 1);
                prop_assert!(!used_set.contains(n));
            }
            if let Some(&largest) = free.last() {
                for n in 1..largest {
                    prop_assert!(free.contains(&n) || used_set.contains(&n));
                }
            }
        }
    }
}
