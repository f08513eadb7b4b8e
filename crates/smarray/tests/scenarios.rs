use proptest::prelude::*;
use smarray::prelude::*;
use smarray_test_utils::{sample_sequence, ReallocCounter};

#[test]
fn push_insert_erase_resize_walkthrough() {
    let mut array = DynArray::new();
    array.push_back(1);
    array.push_back(2);
    array.push_back(3);
    assert_eq!(array.size(), 3);

    array.insert(array.begin(), 0);
    assert_eq!(array.as_slice(), [0, 1, 2, 3]);

    array.erase(array.begin());
    assert_eq!(array.as_slice(), [1, 2, 3]);

    let capacity = array.capacity();
    array.resize(1, 0);
    assert_eq!(array.as_slice(), [1]);
    assert_eq!(array.capacity(), capacity);

    array.resize(4, 9);
    assert_eq!(array.as_slice(), [1, 9, 9, 9]);
}

#[test]
fn reverse_cursors_over_three_elements() {
    let array = DynArray::from_slice(&[10, 20, 30]);
    assert_eq!(array[array.rbegin()], 30);
    assert_eq!(*array.rbegin().read(&array), 30);
    assert_eq!(Cursor::from(array.rend()), array.begin());

    let mut visited = Vec::new();
    let mut it = array.rbegin();
    while it != array.rend() {
        visited.push(array[it]);
        it.increment();
    }
    assert_eq!(visited, [30, 20, 10]);
}

#[test]
fn reverse_cursor_reports_slot_before_construction_slot() {
    let array = DynArray::from_slice(&[10, 20, 30]);
    let mid = ReverseCursor::new(array.begin() + 2);
    assert_eq!(mid.slot(), 1);
    assert_eq!(array[mid], 20);
    assert_eq!(mid.base(), array.begin() + 2);
}

#[test]
fn checked_and_unchecked_access_at_size() {
    let array = DynArray::from_slice(&[10, 20, 30]);
    assert_eq!(
        array.at(array.size()),
        Err(ArrayError::OutOfRange { index: 3, size: 3 })
    );
    // Unchecked: reads the first spare slot, which was never written.
    assert_eq!(array[array.size()], 0);
}

#[test]
fn pop_back_leaves_value_readable_by_index() {
    let mut array = DynArray::from_slice(&["a".to_string(), "b".to_string()]);
    array.pop_back();
    assert_eq!(array.size(), 1);
    assert_eq!(array[1], "b");
}

#[test]
fn boundary_no_ops_on_empty() {
    let mut array: DynArray<i32> = DynArray::new();
    array.pop_back();
    assert_eq!(array.erase(array.end()), array.end());
    assert_eq!(array.erase(array.end() - 0), array.end());
    assert_eq!(array.size(), 0);
    assert_eq!(array.capacity(), 0);
}

#[test]
fn reserve_length_error_leaves_state() {
    let mut array = DynArray::from_slice(&[1u64, 2, 3]);
    let max = array.max_size();
    let err = array.reserve(usize::MAX).unwrap_err();
    assert_eq!(
        err,
        ArrayError::Length {
            requested: usize::MAX,
            max
        }
    );
    assert_eq!(
        err.to_string(),
        format!("requested capacity {} exceeds maximum size {max}", usize::MAX)
    );
    assert_eq!(array.as_slice(), [1, 2, 3]);
}

#[test]
fn copies_are_independent() {
    let a = DynArray::from_slice(&sample_sequence(64, 7));
    let mut b = a.clone();
    assert_eq!(a, b);
    b.erase(b.begin());
    b.push_back(-1);
    assert_ne!(a, b);
    assert_eq!(a.as_slice(), sample_sequence(64, 7).as_slice());
}

#[test]
fn range_construction_from_another_array_with_cursors() {
    let src = DynArray::from_slice(&sample_sequence(10, 3));
    let tail = DynArray::from_range(&src, src.begin() + 4, src.end());
    assert_eq!(tail.as_slice(), &src.as_slice()[4..]);

    let reversed: DynArray<i64> = DynArray::construct((&src, src.rbegin(), src.rend()));
    let expected: Vec<i64> = src.iter().rev().copied().collect();
    assert_eq!(reversed.as_slice(), expected.as_slice());
}

#[test]
fn cursor_stays_put_across_reallocation() {
    let mut array = DynArray::from_slice(&[1, 2, 3]);
    let second = array.begin() + 1;
    array.reserve(100).unwrap();
    array.insert(array.begin(), 0);
    // Same slot, different element: cursors are not tracked.
    assert_eq!(array[second], 1);
}

#[test]
fn swap_keeps_both_invariants() {
    let mut small = DynArray::from_slice(&[1]);
    let mut large = DynArray::with_value(40, 2);
    small.swap(&mut large);
    assert_eq!(small.size(), 40);
    assert!(small.size() <= small.capacity());
    assert!(large.size() <= large.capacity());
    assert_eq!(large.as_slice(), [1]);
}

#[test]
fn std_algorithms_on_live_elements() {
    let array = DynArray::with_value(5, 5);
    assert_eq!(array.iter().filter(|&&v| v == 5).count(), 5);
    let mut it = array.begin();
    for _ in 0..4 {
        it.increment();
    }
    assert_eq!(array.begin() + 4, it);
    assert_eq!(array.walk(array.begin(), array.end()).count(), 5);
}

proptest! {
    #[test]
    fn fill_construction_property(n in 0usize..500, v in any::<i32>()) {
        let array = DynArray::with_value(n, v);
        prop_assert_eq!(array.size(), n);
        prop_assert!(array.iter().all(|&x| x == v));
    }

    #[test]
    fn pushes_grow_geometrically(k in 1usize..5_000) {
        let mut array = DynArray::new();
        let mut counter = ReallocCounter::new();
        for i in 0..k {
            array.push_back(i);
            counter.observe(array.capacity());
        }
        prop_assert_eq!(array.size(), k);
        // log_1.5(k) plus the handful of small-size steps.
        let bound = ((k as f64).ln() / 1.5f64.ln()).ceil() as usize + 2;
        prop_assert!(counter.reallocations() <= bound, "{} > {}", counter.reallocations(), bound);
    }

    #[test]
    fn reserve_within_bounds_is_exact(
        items in proptest::collection::vec(any::<u16>(), 0..40),
        extra in 0usize..100,
    ) {
        let mut array = DynArray::from_slice(&items);
        let target = array.capacity() + extra + 1;
        array.reserve(target).unwrap();
        prop_assert_eq!(array.capacity(), target);
        prop_assert_eq!(array.as_slice(), items.as_slice());
    }

    #[test]
    fn reverse_walk_is_reversed_forward_walk(
        items in proptest::collection::vec(any::<i8>(), 0..40),
    ) {
        let array = DynArray::from_slice(&items);
        let forward: Vec<i8> = array.walk(array.begin(), array.end()).copied().collect();
        let mut backward: Vec<i8> = array.walk(array.rbegin(), array.rend()).copied().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(Cursor::from(array.rbegin()), array.end());
        prop_assert_eq!(Cursor::from(array.rend()), array.begin());
    }
}
