use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ptr::{self, NonNull};
use std::{alloc, slice};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, size, _) = self.into_raw();
        IntoIter {
            ptr,
            cap: size,
            start: 0,
            end: size,
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owned type for owned iteration over an [`Array`] or
/// [`ArrayList`](crate::collections::ArrayList). See [`Array::into_iter`] and
/// [`ArrayList::into_iter`](crate::collections::ArrayList::into_iter).
///
/// The values in `start..end` haven't been yielded yet, while the allocation spans `cap` values.
pub struct IntoIter<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the values that haven't been yielded yet as a slice.
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized and within the allocation.
        unsafe { slice::from_raw_parts(self.ptr.add(self.start).as_ptr(), self.end - self.start) }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: The values in start..end haven't been moved out yet, so they are dropped exactly
        // once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        let layout = Array::<T>::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: The layout is the same as the one the Array was allocated with.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the initialized range. Incrementing start afterwards means
            // the value is never read or dropped again, so it is effectively moved off of the heap.
            let value = unsafe { self.ptr.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is within the initialized range and is excluded
            // from it from now on.
            let value = unsafe { self.ptr.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// SAFETY: IntoIter uniquely owns its values, the same as Array.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: IntoIter has no interior mutability.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
