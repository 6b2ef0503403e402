use super::*;
use crossbeam::scope;
use proptest::prelude::*;

const ALL_PIVOTS: [PivotPolicy; 5] = [
    PivotPolicy::First,
    PivotPolicy::Last,
    PivotPolicy::Middle,
    PivotPolicy::Random,
    PivotPolicy::MedianOfThree,
];

fn from_values(values: &[i32]) -> IntVector {
    let mut v = IntVector::with_capacity(values.len());
    for &x in values {
        v.push_back(x);
    }
    v
}

#[test]
fn test_basic_push_pop() {
    let mut v = IntVector::new();
    v.push_back(1);
    v.push_back(2);
    v.push_back(3);
    assert_eq!(v.len(), 3);
    assert_eq!(v[0], 1);
    assert_eq!(v.get_at(1), 2);
    assert_eq!(*v.at(2), 3);
    assert_eq!(v.pop_back(), 3);
    assert_eq!(v.pop_front(), 1);
    assert_eq!(v.pop_back(), 2);
    assert!(v.is_empty());
}

#[test]
fn test_insert_delete() {
    let mut v = IntVector::new();
    v.push_back(1);
    v.push_back(3);
    v.insert_at(1, 2);
    v.push_front(0);
    assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(v.delete_at(2), 2);
    assert_eq!(v.as_slice(), &[0, 1, 3]);
}

#[test]
fn test_set_at() {
    let mut v = from_values(&[1, 2, 3]);
    v.set_at(1, 20);
    *v.at_mut(2) += 10;
    assert_eq!(v.as_slice(), &[1, 20, 13]);
}

#[test]
fn test_sort_and_search_scenario() {
    let mut v = IntVector::with_capacity(5);
    for x in [5, 3, 1, 4, 2] {
        v.push_back(x);
    }
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v.linear_search(4), 3);

    v.quick_sort();
    assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(v.binary_search(3), 2);
    assert_eq!(v.binary_search(6), 5);
    assert_eq!(v.linear_search(6), 5);
}

#[test]
fn test_zero_capacity() {
    let mut v = IntVector::with_capacity(0);
    assert!(v.is_empty());
    assert!(v.is_full());
    assert_eq!(v.linear_search(1), 0);
    assert_eq!(v.binary_search(1), 0);
    v.bubble_sort();
    v.quick_sort();

    v.push_back(7);
    assert!(v.capacity() >= 1);
    assert_eq!(v.get_at(0), 7);
}

#[test]
fn test_shrink_truncates() {
    let mut v = from_values(&[1, 2, 3]);
    assert!(v.is_full());
    v.set_capacity(1);
    assert_eq!(v.len(), 1);
    assert_eq!(v.capacity(), 1);
    assert_eq!(v.get_at(0), 1);
}

#[test]
fn test_grow_preserves_values() {
    let mut v = from_values(&[4, 5, 6]);
    v.set_capacity(40);
    assert_eq!(v.capacity(), 40);
    assert_eq!(v.as_slice(), &[4, 5, 6]);
    assert!(v.try_set_capacity(8).is_ok());
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.as_slice(), &[4, 5, 6]);
}

#[test]
fn test_try_set_capacity_overflow() {
    let mut v = from_values(&[1, 2]);
    let err = v.try_set_capacity(usize::MAX).unwrap_err();
    assert_eq!(err.requested, usize::MAX);
    assert_eq!(v.as_slice(), &[1, 2]);
    assert_eq!(v.capacity(), 2);
}

#[test]
fn test_linear_growth_step() {
    let mut v = IntVector::with_capacity(2);
    v.push_back(1);
    v.push_back(2);
    v.push_back(3);
    assert_eq!(v.capacity(), 2 + GrowthPolicy::DEFAULT_INCREMENT);
    while v.len() < v.capacity() {
        v.push_back(0);
    }
    v.push_front(9);
    assert_eq!(v.capacity(), 2 + 2 * GrowthPolicy::DEFAULT_INCREMENT);
    assert_eq!(v.get_at(0), 9);
}

#[test]
fn test_doubling_growth() {
    let config = VectorConfig::new().with_growth(GrowthPolicy::Doubling);
    let mut v = IntVector::with_config(0, config);
    let mut seen = Vec::new();
    for i in 0..9 {
        v.push_back(i);
        seen.push(v.capacity());
    }
    assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn test_growth_policy_next_capacity() {
    assert_eq!(GrowthPolicy::default().next_capacity(0), 16);
    assert_eq!(GrowthPolicy::Linear { increment: 0 }.next_capacity(3), 4);
    assert_eq!(GrowthPolicy::Doubling.next_capacity(0), 1);
    assert_eq!(GrowthPolicy::Doubling.next_capacity(5), 10);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_growth_overflow() {
    GrowthPolicy::Doubling.next_capacity(usize::MAX);
}

#[test]
fn test_delete_keeps_capacity() {
    let mut v = from_values(&[1, 2, 3, 4]);
    v.delete_at(0);
    v.pop_back();
    assert_eq!(v.capacity(), 4);
    assert_eq!(v.as_slice(), &[2, 3]);
}

#[test]
fn test_set_size_within_capacity() {
    let mut v = IntVector::with_capacity(4);
    v.push_back(1);
    v.push_back(2);
    v.set_size(1);
    assert_eq!(v.as_slice(), &[1]);
    v.set_size(4);
    assert_eq!(v.len(), 4);
    assert!(v.is_full());
}

#[test]
fn test_bubble_sort_sorted_input_single_pass() {
    let mut v = from_values(&[1, 2, 2, 5, 9]);
    assert_eq!(v.bubble_sort(), 1);
    assert_eq!(v.as_slice(), &[1, 2, 2, 5, 9]);
}

#[test]
fn test_quick_sort_every_pivot_on_sorted_input() {
    let sorted: Vec<i32> = (0..2000).collect();
    for pivot in ALL_PIVOTS {
        let mut v = from_values(&sorted);
        v.quick_sort_with(pivot);
        assert_eq!(v.as_slice(), sorted.as_slice(), "pivot {:?}", pivot);

        let mut v: IntVector = sorted.iter().rev().copied().collect();
        v.quick_sort_with(pivot);
        assert_eq!(v.as_slice(), sorted.as_slice(), "pivot {:?}", pivot);
    }
}

#[test]
fn test_configured_pivot() {
    let config = VectorConfig::new().with_pivot(PivotPolicy::Last);
    let mut v = IntVector::with_config(3, config);
    v.extend([3, 1, 2]);
    assert_eq!(v.config().pivot, PivotPolicy::Last);
    v.quick_sort();
    assert_eq!(v.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_iterators() {
    let mut v = from_values(&[10, 20, 30]);

    let mut sum = 0;
    for &x in &v {
        sum += x;
    }
    assert_eq!(sum, 60);

    for x in &mut v {
        *x += 1;
    }
    assert_eq!(v[0], 11);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![11, 21, 31]);
}

#[test]
fn test_equality_ignores_capacity() {
    let mut a = IntVector::with_capacity(10);
    a.extend([1, 2]);
    let b = from_values(&[1, 2]);
    assert_eq!(a, b);
    assert_eq!(
        format!("{:?}", b),
        "IntVector { len: 2, capacity: 2, items: [1, 2] }"
    );
}

#[test]
fn test_shared_reads_across_threads() {
    let v: IntVector = (0..100).collect();

    scope(|s| {
        s.spawn(|_| {
            for x in 0..100 {
                assert_eq!(v.linear_search(x), x as usize);
            }
        });
        s.spawn(|_| {
            for x in 0..100 {
                assert_eq!(v.binary_search(x), x as usize);
            }
        });
    })
    .unwrap();
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_out_of_bounds_get() {
    let v = from_values(&[1]);
    v.get_at(1);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_out_of_bounds_set_within_capacity() {
    let mut v = IntVector::with_capacity(8);
    v.push_back(1);
    v.set_at(1, 2);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_out_of_bounds_delete() {
    let mut v = IntVector::new();
    v.delete_at(0);
}

#[test]
#[should_panic(expected = "insert_at: index 2 out of bounds")]
fn test_out_of_bounds_insert() {
    let mut v = IntVector::new();
    v.push_back(1);
    v.insert_at(2, 10);
}

#[test]
#[should_panic(expected = "pop_front on an empty IntVector")]
fn test_pop_empty() {
    let mut v = IntVector::with_capacity(4);
    v.pop_front();
}

#[test]
#[should_panic(expected = "exceeds capacity")]
fn test_set_size_beyond_capacity() {
    let mut v = IntVector::with_capacity(2);
    v.set_size(3);
}

fn is_ascending(values: &[i32]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}

proptest! {
    #[test]
    fn push_back_keeps_values_and_invariant(
        initial in 0usize..8,
        values in prop::collection::vec(any::<i32>(), 0..200),
    ) {
        let mut v = IntVector::with_capacity(initial);
        for (i, &x) in values.iter().enumerate() {
            v.push_back(x);
            prop_assert!(v.len() <= v.capacity());
            prop_assert_eq!(v.len(), i + 1);
        }
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn insert_then_delete_restores(
        values in prop::collection::vec(any::<i32>(), 0..64),
        seed in any::<usize>(),
        x in any::<i32>(),
    ) {
        let mut v = from_values(&values);
        let index = seed % (values.len() + 1);
        v.insert_at(index, x);
        prop_assert_eq!(v.get_at(index), x);
        prop_assert!(v.len() <= v.capacity());
        prop_assert_eq!(v.delete_at(index), x);
        prop_assert_eq!(v.as_slice(), values.as_slice());
    }

    #[test]
    fn set_capacity_keeps_prefix(
        values in prop::collection::vec(any::<i32>(), 0..64),
        new_capacity in 0usize..96,
    ) {
        let mut v = from_values(&values);
        v.set_capacity(new_capacity);
        let keep = values.len().min(new_capacity);
        prop_assert_eq!(v.capacity(), new_capacity);
        prop_assert_eq!(v.as_slice(), &values[..keep]);
    }

    #[test]
    fn linear_search_finds_first(
        values in prop::collection::vec(-20i32..20, 0..64),
        needle in -25i32..25,
    ) {
        let v = from_values(&values);
        let expected = values.iter().position(|&x| x == needle).unwrap_or(values.len());
        prop_assert_eq!(v.linear_search(needle), expected);
    }

    #[test]
    fn binary_search_on_sorted(
        values in prop::collection::vec(-50i32..50, 0..128),
        needle in -60i32..60,
    ) {
        let v = from_values(&sorted_copy(&values));
        let found = v.binary_search(needle);
        if values.contains(&needle) {
            prop_assert!(found < v.len());
            prop_assert_eq!(v.get_at(found), needle);
        } else {
            prop_assert_eq!(found, v.len());
        }
    }

    #[test]
    fn bubble_sort_sorts(values in prop::collection::vec(any::<i32>(), 0..128)) {
        let mut v = from_values(&values);
        v.bubble_sort();
        prop_assert!(is_ascending(&v));
        let expected = sorted_copy(&values);
        prop_assert_eq!(v.as_slice(), expected.as_slice());
        prop_assert!(v.bubble_sort() <= 1);
    }

    #[test]
    fn quick_sort_sorts_with_every_pivot(values in prop::collection::vec(-100i32..100, 0..256)) {
        let expected = sorted_copy(&values);
        for pivot in ALL_PIVOTS {
            let mut v = from_values(&values);
            v.quick_sort_with(pivot);
            prop_assert_eq!(v.as_slice(), expected.as_slice());

            v.quick_sort_with(pivot);
            prop_assert_eq!(v.as_slice(), expected.as_slice());
        }
    }
}
