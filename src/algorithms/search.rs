use super::Interpolate;

/// Searches `slice` front to back for `elem`, returning the index of the first match. Works for
/// any slice, sorted or not.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::linear_search;
/// assert_eq!(linear_search(&[5, 3, 9, 3], &3), Some(1));
/// assert_eq!(linear_search(&[5, 3, 9, 3], &4), None);
/// ```
pub fn linear_search<T: PartialEq>(slice: &[T], elem: &T) -> Option<usize> {
    slice.iter().position(|item| item == elem)
}

/// Searches a slice sorted in ascending order for `elem` by repeatedly halving the candidate
/// range. If `elem` occurs more than once, the index of any one of the matches may be returned.
///
/// The result is unspecified if `slice` isn't sorted.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::binary_search;
/// let sorted = [1, 3, 5, 7, 9, 11];
/// assert_eq!(binary_search(&sorted, &7), Some(3));
/// assert_eq!(binary_search(&sorted, &8), None);
/// ```
pub fn binary_search<T: PartialOrd>(slice: &[T], elem: &T) -> Option<usize> {
    check_sorted(slice);

    // Candidates are within low..high.
    let (mut low, mut high) = (0, slice.len());
    while low < high {
        let mid = low + (high - low) / 2;
        let probe = &slice[mid];

        if probe == elem {
            return Some(mid);
        } else if elem > probe {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    None
}

/// Searches a slice sorted in ascending order for `elem`, estimating its position from the values
/// at either end of the candidate range rather than bisecting. Performs best on uniformly
/// distributed values. If `elem` occurs more than once, the index of any one of the matches may be
/// returned.
///
/// When the values at both ends of the candidate range are equal, every value between them is
/// too, so the search ends there without estimating a position.
///
/// The result is unspecified if `slice` isn't sorted.
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::interpolation_search;
/// let sorted = [10, 20, 30, 40, 50, 60, 70];
/// assert_eq!(interpolation_search(&sorted, &60), Some(5));
/// assert_eq!(interpolation_search(&sorted, &65), None);
/// assert_eq!(interpolation_search(&[4, 4, 4], &4), Some(0));
/// ```
pub fn interpolation_search<T: Interpolate>(slice: &[T], elem: &T) -> Option<usize> {
    check_sorted(slice);

    if slice.is_empty() {
        return None;
    }

    let target = elem.ordinal();
    // Candidates are within low..=high.
    let (mut low, mut high) = (0, slice.len() - 1);

    while low <= high {
        let low_value = slice[low].ordinal();
        let high_value = slice[high].ordinal();

        if target < low_value || target > high_value {
            return None;
        }
        if low_value == high_value {
            // low_value <= target <= high_value, so they're all equal.
            return Some(low);
        }

        let probe = probe_index(low, high, target - low_value, high_value - low_value);
        let probe_value = slice[probe].ordinal();

        if probe_value == target {
            return Some(probe);
        } else if target > probe_value {
            low = probe + 1;
        } else {
            // probe > low here, because slice[low] <= target < slice[probe].
            high = probe - 1;
        }
    }

    None
}

/// Returns true if `slice` contains `elem`, using [`linear_search`].
pub fn contains<T: PartialEq>(slice: &[T], elem: &T) -> bool {
    linear_search(slice, elem).is_some()
}

/// Estimates the index of a value `offset` above the low bracket, where the brackets are `span`
/// apart. Requires `0 <= offset <= span` and `span > 0`, giving a result within `low..=high`.
const fn probe_index(low: usize, high: usize, offset: i128, span: i128) -> usize {
    let width = (high - low) as u128;

    match width.checked_mul(offset as u128) {
        Some(scaled) => low + (scaled / span as u128) as usize,
        // Fall back to bisecting if the estimate can't be computed.
        None => low + (high - low) / 2,
    }
}

fn check_sorted<T: PartialOrd>(slice: &[T]) {
    if cfg!(feature = "check-preconditions") {
        debug_assert!(
            slice.is_sorted_by(|a, b| a <= b),
            "Searched slice must be sorted in ascending order!"
        );
    }
}
