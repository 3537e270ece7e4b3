#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::sync::Arc;

use super::*;
use crate::algorithms::{Search, Sort};
use crate::collections::contiguous::Array;
use crate::diagnostics::Recorder;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::{assert_panics, panic_message};
use crate::util::tracked::{CountedDrop, ZeroSizedType};

#[test]
fn test_capacity_rules() {
    let mut list = ArrayList::new();
    assert_eq!(list.cap(), MIN_CAP);

    list.extend(0..10);
    assert_eq!(list.cap(), 10, "Filling the initial capacity shouldn't grow.");

    list.push(10);
    assert_eq!(list.cap(), 15, "The first growth should be by a factor of 1.5.");

    list.extend(11..16);
    assert_eq!(list.len(), 16);
    assert_eq!(list.cap(), 22, "Growth should truncate fractional capacity.");

    assert_eq!(ArrayList::<u8>::with_cap(0).cap(), MIN_CAP);
    assert_eq!(ArrayList::<u8>::with_cap(40).cap(), 40);
    assert_eq!(ArrayList::from([1, 2, 3]).cap(), MIN_CAP);
    assert_eq!(ArrayList::from_iter_sized(0..20).cap(), 30);
    assert_eq!(ArrayList::from(Array::from_iter_sized(0..9)).cap(), 13);
    assert_eq!(ArrayList::<u8>::repeat_default(7).cap(), 10);
}

#[test]
fn test_capacity_overflow() {
    let message = panic_message(|| {
        ArrayList::<u64>::new().extend(iter::repeat(0).take(usize::MAX))
    });
    assert_eq!(
        message.as_deref(),
        Some("Capacity overflow!"),
        "An impossible size hint should panic instead of looping."
    );

    let mut list = ArrayList::from([1_u64, 2]);
    assert_panics!({ list.extend(iter::repeat(0).take(usize::MAX - 1)) });
    assert_eq!(&*list, &[1, 2], "The list should be untouched by a failed reservation.");

    assert_eq!(grown_cap(0), 1);
    assert_eq!(grown_cap(1), 2);
    assert_eq!(grown_cap(usize::MAX / 2), usize::MAX / 2 + usize::MAX / 4);
    assert_panics!({ grown_cap(usize::MAX) });
    assert_panics!({ grown_cap(usize::MAX - 1) });
}

#[test]
fn test_capacity_never_shrinks() {
    let mut list = ArrayList::from_iter_sized(0..30);
    let cap = list.cap();

    list.remove(0);
    list.pop();
    list.remove_all(&5);
    list.truncate(3);
    assert_eq!(list.cap(), cap);

    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.cap(), cap, "Clearing should keep the allocation.");

    list.reserve(5);
    assert_eq!(list.cap(), cap, "Reserving less than the capacity should do nothing.");
    list.reserve(100);
    assert!(list.cap() >= 100);
}

#[test]
fn test_push_and_pop() {
    let mut list = ArrayList::new();
    for i in 0..25 {
        list.push(i);
        assert!(list.cap() >= list.len());
    }
    assert_eq!(list.len(), 25);

    list.push(99);
    assert_eq!(list.pop(), Some(99), "pop should return the value that was just pushed.");
    assert_eq!(list.len(), 25, "The length should be restored after push then pop.");

    for i in (0..25).rev() {
        assert_eq!(list.pop(), Some(i));
    }
    assert_eq!(list.pop(), None);
    assert_eq!(list.pop(), None, "Popping an empty list repeatedly should be harmless.");
}

#[test]
fn test_insert_and_remove() {
    let mut list = ArrayList::from(['a', 'c', 'e']);
    list.insert(1, 'b');
    list.insert(3, 'd');
    list.insert(0, '_');
    list.insert(list.len(), 'f');
    assert_eq!(&*list, &['_', 'a', 'b', 'c', 'd', 'e', 'f']);

    assert_eq!(list.remove(0), '_');
    assert_eq!(list.remove(5), 'f');
    assert_eq!(list.remove(2), 'c');
    assert_eq!(&*list, &['a', 'b', 'd', 'e']);

    assert_eq!(list.try_insert(5, 'z'), Err(IndexOutOfBounds { index: 5, len: 4 }));
    assert_eq!(list.try_remove(4), Err(IndexOutOfBounds { index: 4, len: 4 }));
    assert_eq!(list.len(), 4, "Failed calls shouldn't change the list.");

    assert_panics!({ list.insert(10, 'z') });
    assert_panics!({ list.remove(4) });

    let mut list = ArrayList::new();
    list.extend(0..10);
    assert_eq!(list.cap(), 10);
    list.insert(5, 100);
    assert_eq!(list.cap(), 15, "Inserting into a full list should grow it once.");
    assert_eq!(list[5], 100);
    assert_eq!(list[10], 9);
}

#[test]
fn test_remove_then_push_then_sort() {
    let mut list = ArrayList::from([1, 6, 3, 7, 4, 8, 9, 0, 2, 4, 5, 6, 7, 7, 8, 1, 0, 0, 9]);

    assert_eq!(list.remove(4), 4);
    list.push(10);
    assert_eq!(
        &*list,
        &[1, 6, 3, 7, 8, 9, 0, 2, 4, 5, 6, 7, 7, 8, 1, 0, 0, 9, 10]
    );
    assert_eq!(list.len(), 19);

    list.quick_sort();
    assert_eq!(
        &*list,
        &[0, 0, 0, 1, 1, 2, 3, 4, 5, 6, 6, 7, 7, 7, 8, 8, 9, 9, 10]
    );
    assert_eq!(list.search_binary(&10), Some(18));
    assert_eq!(list.search_interpolation(&3), Some(6));
}

#[test]
fn test_remove_all() {
    let mut list = ArrayList::from([3, 1, 3, 3, 2, 3, 4, 3]);
    assert_eq!(list.remove_all(&3), 5);
    assert_eq!(&*list, &[1, 2, 4], "Survivors should keep their order.");
    assert_eq!(list.remove_all(&7), 0);
    assert_eq!(list.len(), 3);

    let counter = CountedDrop::new();
    let mut list = ArrayList::from_iter_sized(iter::repeat_n(counter.clone(), 4));
    assert_eq!(list.len(), 4);
    list.clear();
    assert_eq!(counter.drops(), 4, "Removed values should be dropped.");
}

#[test]
fn test_out_of_bounds() {
    let recorder = Arc::new(Recorder::new());
    let list = ArrayList::from([1, 2, 3]).with_diagnostics(recorder.handle());

    let message = panic_message(|| list[3]);
    assert_eq!(
        message.as_deref(),
        Some("Index 3 out of bounds for collection with 3 elements!")
    );
    assert_eq!(
        recorder.errors(),
        ["Index 3 out of bounds for collection with 3 elements!"],
        "The sink should receive the same message as an error."
    );
    assert!(recorder.warnings().is_empty());

    let mut list = list;
    assert_eq!(list.try_get(2), Ok(&3));
    assert_eq!(list.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    if let Ok(value) = list.try_get_mut(0) {
        *value = 10;
    }
    assert_eq!(list.replace(1, 20), 2);
    assert_eq!(&*list, &[10, 20, 3]);

    let message = panic_message(|| list.insert(4, 0));
    assert_eq!(
        message.as_deref(),
        Some("Index 4 out of bounds for collection with 3 elements!")
    );
    assert_eq!(recorder.errors().len(), 2);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut list = ArrayList::new();
    for _ in 0..12 {
        list.push(counter.clone());
    }
    assert_eq!(counter.drops(), 0, "Growing should move values without dropping them.");

    drop(list.pop());
    drop(list.remove(0));
    assert_eq!(counter.drops(), 2);

    list.truncate(5);
    assert_eq!(counter.drops(), 7);

    drop(list);
    assert_eq!(counter.drops(), 12, "Every value should be dropped exactly once.");
}

#[test]
fn test_zst_support() {
    let mut list = ArrayList::new();
    for _ in 0..20 {
        list.push(ZeroSizedType);
    }
    assert_eq!(list.len(), 20);
    assert_eq!(list[19], ZeroSizedType);
    list.insert(3, ZeroSizedType);
    assert_eq!(list.remove(0), ZeroSizedType);
    assert_eq!(list.iter().count(), 20);
    assert_eq!(list.into_iter().count(), 20);
}

#[test]
fn test_equality_and_hash() {
    let list = ArrayList::from_iter_sized(0_usize..5);
    let mut other = ArrayList::with_cap(50);
    other.extend(0_usize..5);

    assert_eq!(list, other, "Capacity shouldn't affect equality.");
    assert_ne!(list, ArrayList::from([0, 1, 2, 3]));

    let state = RandomState::new();
    assert_eq!(state.hash_one(&list), state.hash_one(&other));
    assert_eq!(
        state.hash_one(&list),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_clone() {
    let recorder = Arc::new(Recorder::new());
    let original = ArrayList::from([String::from("a"), String::from("b")])
        .with_diagnostics(recorder.handle());
    let mut copy = original.clone();

    copy[1].push('!');
    copy.push(String::from("c"));
    assert_eq!(&*original, &["a", "b"], "Mutating a clone shouldn't affect the original.");
    assert_eq!(&*copy, &["a", "b!", "c"]);
    assert_eq!(copy.cap(), original.cap());

    assert_panics!({ copy[3].clear() });
    assert_eq!(recorder.errors().len(), 1, "A clone should report to the same sink.");
}

#[test]
fn test_iterators() {
    let mut list: ArrayList<_> = (0..5).collect();
    for value in &mut list {
        *value *= 3;
    }
    assert_eq!((&list).into_iter().sum::<i32>(), 30);

    let array = Array::from(list.clone());
    assert_eq!(&*array, &[0, 3, 6, 9, 12]);
    assert_eq!(array.size(), 5, "Converting should discard unused capacity.");

    let mut iter = list.into_iter();
    assert_eq!(iter.next_back(), Some(12));
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.len(), 3);

    let counter = CountedDrop::new();
    let list = ArrayList::from_iter_sized(iter::repeat_n(counter.clone(), 8));
    let mut iter = list.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(counter.drops(), 8);
}

#[test]
fn test_display() {
    let list = ArrayList::from([1, 2, 3]);
    assert_eq!(list.to_string(), "[1, 2, 3]");
    assert!(format!("{list:?}").contains("cap: 10"));
}
