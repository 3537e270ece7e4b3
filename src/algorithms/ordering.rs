use std::ops::Range;

use crate::diagnostics::Diagnostics;

/// Returns the lesser of `a` and `b`. If neither is less than the other, `b` is returned.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::min;
/// assert_eq!(min(3, 7), 3);
/// assert_eq!(min("b", "a"), "a");
/// ```
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Returns the greater of `a` and `b`. If neither is greater than the other, `b` is returned.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Returns the index of the first minimum value in `slice`, or None if it is empty.
///
/// An empty slice is reported as a warning through the default [`Diagnostics`].
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::min_index;
/// assert_eq!(min_index(&[4, 1, 3, 1]), Some(1));
/// assert_eq!(min_index::<u8>(&[]), None);
/// ```
pub fn min_index<T: PartialOrd>(slice: &[T]) -> Option<usize> {
    min_index_in(slice, 0..slice.len())
}

/// Returns the index (into `slice`, not `range`) of the first minimum value within `range`, or
/// None if the range is empty.
///
/// # Panics
/// Panics if `range` is non-empty and extends past the end of `slice`.
pub fn min_index_in<T: PartialOrd>(slice: &[T], range: Range<usize>) -> Option<usize> {
    min_index_with(slice, range, &Diagnostics::Log)
}

/// The same as [`min_index_in`], reporting an empty range to `diag`.
///
/// # Panics
/// Panics if `range` is non-empty and extends past the end of `slice`.
pub fn min_index_with<T: PartialOrd>(
    slice: &[T],
    range: Range<usize>,
    diag: &Diagnostics,
) -> Option<usize> {
    extreme_index(slice, range, diag, "minimum", |candidate, best| candidate < best)
}

/// Returns the index of the first maximum value in `slice`, or None if it is empty.
///
/// An empty slice is reported as a warning through the default [`Diagnostics`].
pub fn max_index<T: PartialOrd>(slice: &[T]) -> Option<usize> {
    max_index_in(slice, 0..slice.len())
}

/// Returns the index (into `slice`, not `range`) of the first maximum value within `range`, or
/// None if the range is empty.
///
/// # Panics
/// Panics if `range` is non-empty and extends past the end of `slice`.
pub fn max_index_in<T: PartialOrd>(slice: &[T], range: Range<usize>) -> Option<usize> {
    max_index_with(slice, range, &Diagnostics::Log)
}

/// The same as [`max_index_in`], reporting an empty range to `diag`.
///
/// # Panics
/// Panics if `range` is non-empty and extends past the end of `slice`.
pub fn max_index_with<T: PartialOrd>(
    slice: &[T],
    range: Range<usize>,
    diag: &Diagnostics,
) -> Option<usize> {
    extreme_index(slice, range, diag, "maximum", |candidate, best| candidate > best)
}

/// Scans `range` for the leftmost element that no later element `beats`.
fn extreme_index<T>(
    slice: &[T],
    range: Range<usize>,
    diag: &Diagnostics,
    what: &str,
    beats: impl Fn(&T, &T) -> bool,
) -> Option<usize> {
    if range.is_empty() {
        diag.warn(&format!(
            "Range {range:?} is empty, unable to find a {what} value!"
        ));
        return None;
    }

    let mut best = range.start;
    for i in range.start + 1..range.end {
        if beats(&slice[i], &slice[best]) {
            best = i;
        }
    }
    Some(best)
}
