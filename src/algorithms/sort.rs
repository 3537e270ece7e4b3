use std::mem;

use super::min_index_in;
use crate::collections::Array;

/// Sorts `slice` in ascending order by repeatedly swapping adjacent elements that are out of
/// order. Each pass settles the largest remaining element at the end, and sorting stops early once
/// a pass makes no swaps.
///
/// This sort is stable.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::bubble_sort;
/// let mut values = [5, 1, 4, 2, 8];
/// bubble_sort(&mut values);
/// assert_eq!(values, [1, 2, 4, 5, 8]);
/// ```
pub fn bubble_sort<T: PartialOrd>(slice: &mut [T]) {
    let mut bound = slice.len();

    while bound > 1 {
        let mut swapped = false;
        for j in 0..bound - 1 {
            if slice[j] > slice[j + 1] {
                slice.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
        bound -= 1;
    }
}

/// Sorts `slice` in ascending order by swapping the minimum of the unsorted remainder into each
/// position in turn.
///
/// This sort is not stable.
pub fn selection_sort<T: PartialOrd>(slice: &mut [T]) {
    for i in 0..slice.len().saturating_sub(1) {
        // The range i..len is never empty here.
        if let Some(min) = min_index_in(slice, i..slice.len()) {
            slice.swap(i, min);
        }
    }
}

/// Sorts `slice` in ascending order by sorting each half recursively and merging the results.
/// Merging requires a copy of the left half, so up to `n / 2` elements are cloned at once.
///
/// This sort is stable: when the heads of both halves are equal, the left one is taken first.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::merge_sort;
/// let mut values = [8, 2, 5, 3, 4, 7, 6, 1];
/// merge_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn merge_sort<T: PartialOrd + Clone>(slice: &mut [T]) {
    if slice.len() <= 1 {
        return;
    }

    let mid = slice.len() / 2;
    {
        let (left, right) = slice.split_at_mut(mid);
        merge_sort(left);
        merge_sort(right);
    }
    merge(slice, mid);
}

/// Merges the sorted runs `slice[..mid]` and `slice[mid..]` in place.
fn merge<T: PartialOrd + Clone>(slice: &mut [T], mid: usize) {
    let left = Array::from_slice(&slice[..mid]);
    let (mut l, mut r) = (0, mid);

    // The write position is always l + (r - mid), which stays at or behind r. Taking from the left
    // therefore never overwrites an unmerged element of the right run.
    for i in 0..slice.len() {
        let take_left = l < left.size() && (r == slice.len() || left[l] <= slice[r]);

        if take_left {
            slice[i].clone_from(&left[l]);
            l += 1;
        } else {
            slice.swap(i, r);
            r += 1;
        }
    }
}

/// Sorts `slice` in ascending order using Lomuto partitioning, with the last element of each
/// partition as the pivot.
///
/// Recursion is only made into the smaller partition, so the stack depth stays logarithmic even
/// when the running time degrades to quadratic on already sorted input.
///
/// This sort is not stable.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::quick_sort;
/// let mut values = [3, 7, 8, 5, 2, 1, 9, 5, 4];
/// quick_sort(&mut values);
/// assert_eq!(values, [1, 2, 3, 4, 5, 5, 7, 8, 9]);
/// ```
pub fn quick_sort<T: PartialOrd>(mut slice: &mut [T]) {
    while slice.len() > 1 {
        let pivot = partition(slice);
        let (left, right) = mem::take(&mut slice).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            slice = right;
        } else {
            quick_sort(right);
            slice = left;
        }
    }
}

/// Moves every element `<=` the last element to the front, then places the last element directly
/// after them. Returns the pivot's final index.
fn partition<T: PartialOrd>(slice: &mut [T]) -> usize {
    let last = slice.len() - 1;
    let mut boundary = 0;

    for j in 0..last {
        if slice[j] <= slice[last] {
            slice.swap(boundary, j);
            boundary += 1;
        }
    }

    slice.swap(boundary, last);
    boundary
}
