//! The ordered/numeric reductions the plain list cannot offer for free:
//! each block's bound admits exactly the element types that support the
//! operation, so `SinglyLinkedList<i32>` and friends pick up the whole
//! integer-list surface without a second list implementation.

use core::mem;

use num_traits::{PrimInt, ToPrimitive, WrappingAdd, Zero};

use super::SinglyLinkedList;
use crate::error::ListError;

impl<T: PartialEq> SinglyLinkedList<T> {
    /// Number of elements equal to `value`.
    pub fn count_occurrences(&self, value: &T) -> usize {
        self.iter().filter(|item| *item == value).count()
    }

    /// Unlinks every node whose value equals its predecessor's, collapsing
    /// consecutive runs of duplicates to one element.
    ///
    /// Only adjacent duplicates are considered; sort first to deduplicate
    /// the whole list.
    ///
    /// # Examples
    /// ```
    /// use linked_lists::SinglyLinkedList;
    ///
    /// let mut list: SinglyLinkedList<i32> = [5, 3, 5, 1, 3].into_iter().collect();
    /// list.sort();
    /// list.dedup();
    /// assert_eq!(list.to_vec(), vec![1, 3, 5]);
    /// ```
    pub fn dedup(&mut self) {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            while let Some(next) = node.next.take() {
                if next.value == node.value {
                    node.next = next.next;
                    self.len -= 1;
                } else {
                    node.next = Some(next);
                    break;
                }
            }
            cursor = node.next.as_deref_mut();
        }
    }
}

impl<T: Ord> SinglyLinkedList<T> {
    /// Smallest element, by a linear scan with a running extremum.
    pub fn min(&self) -> Result<&T, ListError> {
        self.iter().min().ok_or(ListError::Empty)
    }

    /// Largest element.
    pub fn max(&self) -> Result<&T, ListError> {
        self.iter().max().ok_or(ListError::Empty)
    }

    /// Sorts the list ascending, in place.
    ///
    /// Repeated adjacent-swap passes over the node *values* (the links are
    /// never rewired), ending with the first pass that swaps nothing.
    /// Stable, O(1) extra space, O(n²) comparisons in the worst case.
    pub fn sort(&mut self) {
        loop {
            let mut swapped = false;
            let mut cursor = self.head.as_deref_mut();
            while let Some(node) = cursor {
                if let Some(next) = node.next.as_deref_mut() {
                    if node.value > next.value {
                        mem::swap(&mut node.value, &mut next.value);
                        swapped = true;
                    }
                }
                cursor = node.next.as_deref_mut();
            }
            if !swapped {
                break;
            }
        }
    }
}

impl<T: PrimInt + WrappingAdd> SinglyLinkedList<T> {
    /// Additive fold over the elements; an empty list sums to zero.
    /// Overflow wraps rather than panicking.
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, item| acc.wrapping_add(item))
    }

    /// Arithmetic mean of the elements, computed in floating point over the
    /// wrapped `sum`.
    pub fn average(&self) -> Result<f64, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let sum = self
            .sum()
            .to_f64()
            .expect("primitive integers convert to f64");
        Ok(sum / self.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::SinglyLinkedList;
    use crate::error::ListError;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn integer_reductions_scenario() {
        let list: SinglyLinkedList<i32> = [5, 3, 5, 1, 3].into_iter().collect();
        assert_eq!(list.sum(), 17);
        assert_eq!(list.min(), Ok(&1));
        assert_eq!(list.max(), Ok(&5));
        assert_eq!(list.count_occurrences(&3), 2);
        assert_eq!(list.average(), Ok(17.0 / 5.0));
    }

    #[test]
    fn sort_then_dedup_scenario() {
        let mut list: SinglyLinkedList<i32> = [5, 3, 5, 1, 3].into_iter().collect();
        list.sort();
        assert_eq!(list.to_vec(), vec![1, 3, 3, 5, 5]);
        list.dedup();
        assert_eq!(list.to_vec(), vec![1, 3, 5]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn sort_is_idempotent_and_permutes() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0usize, 1, 2, 17, 64] {
            let values: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let mut list: SinglyLinkedList<i32> = values.iter().copied().collect();
            let mut expected = values.clone();
            expected.sort();

            list.sort();
            assert_eq!(list.to_vec(), expected);
            assert_eq!(list.len(), len);

            list.sort();
            assert_eq!(list.to_vec(), expected);
        }
    }

    #[test]
    fn dedup_collapses_only_adjacent_runs() {
        let mut list: SinglyLinkedList<i32> = [1, 1, 1, 2, 2, 3, 1].into_iter().collect();
        list.dedup();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 1]);
        assert_eq!(list.len(), 4);

        let mut untouched: SinglyLinkedList<i32> = [1, 2, 1].into_iter().collect();
        untouched.dedup();
        assert_eq!(untouched.to_vec(), vec![1, 2, 1]);
    }

    #[test]
    fn dedup_on_empty_and_singleton() {
        let mut empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        empty.dedup();
        assert!(empty.is_empty());

        let mut single: SinglyLinkedList<i32> = [4].into_iter().collect();
        single.dedup();
        assert_eq!(single.to_vec(), vec![4]);
    }

    #[test]
    fn reductions_on_empty_list() {
        let list: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(list.sum(), 0);
        assert_eq!(list.min(), Err(ListError::Empty));
        assert_eq!(list.max(), Err(ListError::Empty));
        assert_eq!(list.average(), Err(ListError::Empty));
    }

    #[test]
    fn sum_wraps_on_overflow() {
        let list: SinglyLinkedList<i8> = [i8::MAX, 1].into_iter().collect();
        assert_eq!(list.sum(), i8::MIN);
    }

    #[test]
    fn count_occurrences_misses_are_zero() {
        let list: SinglyLinkedList<i32> = [5, 3, 5].into_iter().collect();
        assert_eq!(list.count_occurrences(&9), 0);
    }
}
