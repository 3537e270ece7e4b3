use super::Interpolate;

/// Search algorithms as methods on slices, and therefore on anything that dereferences to one.
///
/// The names are prefixed to avoid being shadowed by inherent slice methods, such as
/// [`slice::binary_search`].
///
/// # Examples
/// ```
/// # use dsa_core::algorithms::Search;
/// # use dsa_core::collections::Array;
/// let arr = Array::from([2, 4, 6, 8]);
/// assert_eq!(arr.search_linear(&6), Some(2));
/// assert_eq!(arr.search_binary(&8), Some(3));
/// assert_eq!(arr.search_interpolation(&5), None);
/// assert!(arr.contains(&4));
/// ```
pub trait Search<T> {
    /// See [`linear_search`](super::linear_search).
    fn search_linear(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq;

    /// See [`binary_search`](super::binary_search).
    fn search_binary(&self, elem: &T) -> Option<usize>
    where
        T: PartialOrd;

    /// See [`interpolation_search`](super::interpolation_search).
    fn search_interpolation(&self, elem: &T) -> Option<usize>
    where
        T: Interpolate;
}

impl<T> Search<T> for [T] {
    fn search_linear(&self, elem: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        super::linear_search(self, elem)
    }

    fn search_binary(&self, elem: &T) -> Option<usize>
    where
        T: PartialOrd,
    {
        super::binary_search(self, elem)
    }

    fn search_interpolation(&self, elem: &T) -> Option<usize>
    where
        T: Interpolate,
    {
        super::interpolation_search(self, elem)
    }
}

/// In-place sort algorithms as methods on slices, and therefore on anything that dereferences to
/// one.
pub trait Sort<T> {
    /// See [`bubble_sort`](super::bubble_sort).
    fn bubble_sort(&mut self)
    where
        T: PartialOrd;

    /// See [`selection_sort`](super::selection_sort).
    fn selection_sort(&mut self)
    where
        T: PartialOrd;

    /// See [`merge_sort`](super::merge_sort).
    fn merge_sort(&mut self)
    where
        T: PartialOrd + Clone;

    /// See [`quick_sort`](super::quick_sort).
    fn quick_sort(&mut self)
    where
        T: PartialOrd;
}

impl<T> Sort<T> for [T] {
    fn bubble_sort(&mut self)
    where
        T: PartialOrd,
    {
        super::bubble_sort(self)
    }

    fn selection_sort(&mut self)
    where
        T: PartialOrd,
    {
        super::selection_sort(self)
    }

    fn merge_sort(&mut self)
    where
        T: PartialOrd + Clone,
    {
        super::merge_sort(self)
    }

    fn quick_sort(&mut self)
    where
        T: PartialOrd,
    {
        super::quick_sort(self)
    }
}
