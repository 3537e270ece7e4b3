#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::sync::Arc;

use super::*;
use crate::algorithms::{Search, Sort};
use crate::diagnostics::Recorder;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::{assert_panics, panic_message};
use crate::util::tracked::{CountedDrop, ZeroSizedType};

#[test]
fn test_construction() {
    let values = [4, 8, 15, 16, 23, 42];
    let arr = Array::from(values);
    assert_eq!(arr.size(), values.len());
    for (i, value) in values.iter().enumerate() {
        assert_eq!(arr[i], *value, "Each value should be at its original index.");
    }

    assert_eq!(Array::<u8>::new().size(), 0);
    assert_eq!(&*Array::<u8>::repeat_default(3), &[0, 0, 0]);
    assert_eq!(&*Array::repeat_item('x', 2), &['x', 'x']);
    assert_eq!(Array::from_slice(&values), arr);
    assert_eq!(Array::from(&values[..]), arr);
    assert_eq!(Array::from_iter_sized(values), arr);
    assert_eq!(values.into_iter().collect::<Array<_>>(), arr);
}

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().len(),
        5,
        "Should iterate over the right number of ZST instances."
    );
    assert_eq!(arr.into_iter().count(), 5);
}

#[test]
fn test_realloc() {
    let mut arr = Array::from_iter_sized(0..5).forget_init();
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(10);
    for i in 5..10 {
        arr[i].write(i as i32);
    }
    // SAFETY: All 10 values are now initialized.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(
        &*arr,
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        "When growing, all elements should remain in the Array."
    );

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0);
    // SAFETY: There are no values.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(arr, Array::new());

    assert_panics!({
        let mut arr = Array::<u64>::new_uninit(5);
        arr.realloc(isize::MAX as usize)
    });
}

#[test]
fn test_out_of_bounds() {
    let recorder = Arc::new(Recorder::new());
    let mut arr = Array::from([1, 2, 3]).with_diagnostics(recorder.handle());

    let message = panic_message(|| arr[3]);
    assert_eq!(
        message.as_deref(),
        Some("Index 3 out of bounds for collection with 3 elements!")
    );
    assert_eq!(
        recorder.errors(),
        ["Index 3 out of bounds for collection with 3 elements!"],
        "The failure should be reported before panicking."
    );

    assert_panics!({ arr[usize::MAX] = 0; });
    assert_eq!(recorder.errors().len(), 2, "Writes should be checked too.");

    assert_eq!(arr.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(arr.try_replace(2, 30), Ok(3));
    assert_eq!(arr.try_replace(5, 50), Err(IndexOutOfBounds { index: 5, len: 3 }));
    assert_eq!(&*arr, &[1, 2, 30]);
    assert_eq!(recorder.errors().len(), 2, "try methods shouldn't report anything.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let arr = Array::from_iter_sized(iter::repeat_n(counter.clone(), 10));

    drop(arr);

    assert_eq!(counter.drops(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from_iter_sized(0_usize..5);

    assert_eq!(
        arr,
        Array::from([0, 1, 2, 3, 4]),
        "Different construction methods should produce equal results."
    );
    assert_ne!(Array::from([0, 1, 2, 5, 4]), arr);
    assert_ne!(Array::from([0, 1, 2, 3]), arr, "Arrays of different sizes are never equal.");

    let borrowed: &[usize] = arr.borrow();
    assert_eq!(borrowed, &[0, 1, 2, 3, 4], "Borrow equality should be upheld.");
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from_iter_sized(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_clone_is_deep() {
    let original = Array::from([String::from("a"), String::from("b")]);
    let mut copy = original.clone();
    copy[0].push('!');

    assert_eq!(original[0], "a", "Mutating a clone shouldn't affect the original.");
    assert_eq!(copy[0], "a!");
    assert_ne!(original.as_ptr(), copy.as_ptr(), "A clone should own separate storage.");
}

#[test]
fn test_iterators() {
    let mut arr = Array::from_iter_sized(0_usize..5);
    let collected = Array::from_iter_sized(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in &mut arr {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );
    assert_eq!((&arr).into_iter().sum::<usize>(), 20);

    assert_eq!(
        arr,
        Array::from_iter_sized(arr.clone()),
        "Cloned and collected array should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.as_slice(), &[2, 4, 6]);
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new();
    let arr = Array::from_iter_sized(iter::repeat_n(counter.clone(), 10));

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        counter.drops(),
        10,
        "Dropping a partially consumed owned iterator should drop all remaining elements."
    );
}

#[test]
fn test_search_and_sort() {
    let mut arr = Array::from([9, 4, 7, 1, 8]);
    assert_eq!(arr.search_linear(&7), Some(2));
    assert!(arr.contains(&8));
    assert!(!arr.contains(&5));

    arr.selection_sort();
    assert_eq!(&*arr, &[1, 4, 7, 8, 9]);
    assert_eq!(arr.search_binary(&8), Some(3));
    assert_eq!(arr.search_interpolation(&1), Some(0));
    assert_eq!(arr.search_interpolation(&5), None);

    let mut arr = Array::from(["d", "a", "c", "b"]);
    arr.bubble_sort();
    assert_eq!(&*arr, &["a", "b", "c", "d"]);
}
