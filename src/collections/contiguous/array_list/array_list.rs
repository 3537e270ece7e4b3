use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::MaybeUninit;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::diagnostics::Diagnostics;
use crate::util::error::IndexOutOfBounds;

/// The capacity of a new ArrayList, and the lowest capacity an ArrayList can have.
pub const MIN_CAP: usize = 10;

// Capacity grows by a factor of 3/2, truncated.
const GROWTH_NUMERATOR: usize = 3;
const GROWTH_DENOMINATOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Capacity starts at [`MIN_CAP`] and grows by a factor of 1.5 (rounded down) whenever an
/// insertion would exceed it. An ArrayList never shrinks its capacity.
///
/// Indexing out of bounds reports an [`IndexOutOfBounds`] error to the list's [`Diagnostics`] and
/// then panics. Each panicking accessor has a `try_` counterpart which returns the error instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ArrayList.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `index` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `remove_all` | `O(n)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `extend` | `O(m)`*, `O(n+m)` |
/// | `contains` | `O(n)` |
///
/// \* If the ArrayList doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the ArrayList has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct ArrayList<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty ArrayList with capacity [`MIN_CAP`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let list: ArrayList<u8> = ArrayList::new();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.cap(), 10);
    /// ```
    pub fn new() -> ArrayList<T> {
        ArrayList::with_cap(MIN_CAP)
    }

    /// Creates a new ArrayList with capacity equal to the provided value, or [`MIN_CAP`] if that is
    /// greater, allowing values to be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list: ArrayList<u8> = ArrayList::with_cap(25);
    /// assert_eq!(list.cap(), 25);
    /// list.extend(0..25);
    /// assert_eq!(list.cap(), 25);
    ///
    /// assert_eq!(ArrayList::<u8>::with_cap(3).cap(), 10);
    /// ```
    pub fn with_cap(cap: usize) -> ArrayList<T> {
        ArrayList {
            arr: Array::new_uninit(cmp::max(cap, MIN_CAP)),
            len: 0,
        }
    }

    /// Returns the length of the ArrayList.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let list = ArrayList::from([1, 2, 3]);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ArrayList contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list: ArrayList<u8> = ArrayList::new();
    /// assert!(list.is_empty());
    /// list.push(1);
    /// assert!(!list.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the ArrayList.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns the [`Diagnostics`] that failures of this ArrayList are reported to.
    pub const fn diagnostics(&self) -> &Diagnostics {
        self.arr.diagnostics()
    }

    /// Replaces the [`Diagnostics`] that failures of this ArrayList are reported to.
    pub fn set_diagnostics(&mut self, diag: Diagnostics) {
        self.arr.set_diagnostics(diag);
    }

    /// Returns self, reporting failures to `diag` from now on.
    pub fn with_diagnostics(mut self, diag: Diagnostics) -> ArrayList<T> {
        self.set_diagnostics(diag);
        self
    }

    /// Push the provided value onto the end of the ArrayList, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list = ArrayList::<u8>::new();
    /// for i in 0..=10 {
    ///     list.push(i);
    /// }
    /// assert_eq!(&*list, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    /// assert_eq!(list.cap(), 15);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the ArrayList, assuming that there is enough
    /// capacity to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the ArrayList has enough capacity to add the provided
    /// value, using methods like [`reserve`](ArrayList::reserve) or
    /// [`with_cap`](ArrayList::with_cap) to do so. Using this method on an ArrayList without enough
    /// capacity is undefined behavior.
    pub const unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the ArrayList has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the ArrayList, returning an owned value if the
    /// ArrayList has length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list = ArrayList::from_iter_sized(0..5);
    /// for i in (0..list.len()).rev() {
    ///     assert_eq!(list.pop(), Some(i));
    /// }
    /// assert_eq!(list.pop(), None);
    /// ```
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before reading.
            self.len -= 1;

            // SAFETY: len has just been decremented, so it is within the capacity of the
            // ArrayList and the value there is initialized. Because it is now outside of len, the
            // value on the heap is never read or dropped again.
            let value = unsafe {
                self.arr.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `index == len` is equivalent to [`push`](ArrayList::push).
    ///
    /// # Panics
    /// Panics if `index > len`, after reporting the failure to the list's [`Diagnostics`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list = ArrayList::from_iter_sized(0..3);
    /// list.insert(1, 100);
    /// list.insert(1, 200);
    /// list.insert(3, 300);
    /// list.insert(6, 400);
    /// assert_eq!(&*list, &[0, 200, 100, 300, 1, 2, 400]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if let Err(err) = self.try_insert(index, value) {
            self.diagnostics().fail(err)
        }
    }

    /// Inserts the provided value at the given index, or returns an error if `index > len`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`. The value is dropped in this case.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.cap() {
            self.grow();
        }

        // SAFETY: index <= len < cap, so both the source range index..len and the destination
        // range index + 1..=len are within the allocation. ptr::copy handles the overlap.
        unsafe {
            let at = self.arr.ptr.add(index).as_ptr();
            ptr::copy(at, at.add(1), self.len - index);
            at.write(MaybeUninit::new(value));
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds, after reporting the failure to the list's
    /// [`Diagnostics`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list: ArrayList<_> = "Hello world!".chars().collect();
    /// assert_eq!(list.remove(1), 'e');
    /// assert_eq!(list.remove(4), ' ');
    /// assert_eq!(list, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(value) => value,
            Err(err) => self.diagnostics().fail(err),
        }
    }

    /// Removes the element at the provided index, or returns an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value there is initialized and the range index + 1..len is
        // within the allocation. The value is moved out before it is overwritten by the copy.
        let value = unsafe {
            let at = self.arr.ptr.add(index).as_ptr();
            let value = at.read().assume_init();
            ptr::copy(at.add(1), at, self.len - index - 1);
            value
        };

        self.len -= 1;
        Ok(value)
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds, after reporting the failure to the list's
    /// [`Diagnostics`].
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        std::mem::replace(&mut self[index], new_value)
    }

    /// Returns a reference to the value at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&(**self)[index])
    }

    /// Returns a mutable reference to the value at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut (**self)[index])
    }

    /// Shortens the ArrayList to `len` elements, dropping the rest. Does nothing if the ArrayList
    /// is already no longer than `len`. The capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }

        let dropped = self.len - len;
        // Shrink first, so that a panicking drop can't lead to a double drop.
        self.len = len;

        // SAFETY: The values in len..len + dropped were initialized and are now outside of the
        // list, so they are dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(len).as_ptr().cast::<T>(),
                dropped,
            ));
        }
    }

    /// Removes all elements from the ArrayList. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Ensures that the ArrayList has capacity to hold an additional `extra` elements. After
    /// invoking this method, the capacity will be >= len + extra.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).expect("Capacity overflow!");

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Creates an ArrayList from an iterator that knows its exact length in advance, allocating
    /// once.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn from_iter_sized<I>(value: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = value.into_iter();
        let mut list = ArrayList::with_cap(initial_cap(iter.len()));

        // push rather than push_unchecked, in case the iterator reports the wrong length.
        for item in iter {
            list.push(item);
        }

        list
    }

    /// Reallocates the internal Array with the provided capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        #[cfg(feature = "log")]
        log::trace!(
            target: "dsa_core",
            "ArrayList of {} elements reallocating from capacity {} to {}",
            self.len,
            self.cap(),
            new_cap,
        );

        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the ArrayList can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the ArrayList would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        self.realloc_with_cap(grown_cap(self.cap()));
    }

    /// Checks that the provided index is within the bounds of self.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        }
    }
}

impl<T: PartialEq> ArrayList<T> {
    /// Removes every element equal to `value`, keeping the remaining elements in order. Returns
    /// the number of elements removed.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::ArrayList;
    /// let mut list = ArrayList::from([1, 2, 1, 3, 1]);
    /// assert_eq!(list.remove_all(&1), 3);
    /// assert_eq!(&*list, &[2, 3]);
    /// ```
    pub fn remove_all(&mut self, value: &T) -> usize {
        let mut kept = 0;

        for i in 0..self.len {
            if self[i] != *value {
                // Everything in kept..i is equal to value, so this keeps survivors in order.
                self.swap(kept, i);
                kept += 1;
            }
        }

        let removed = self.len - kept;
        self.truncate(kept);
        removed
    }
}

impl<T: Clone> ArrayList<T> {
    /// Creates a new ArrayList containing a clone of every value in `values`.
    pub fn from_slice(values: &[T]) -> ArrayList<T> {
        ArrayList::from_iter_sized(values.iter().cloned())
    }
}

impl<T: Default> ArrayList<T> {
    /// Creates a new ArrayList of length `len`, filled with the default value of `T`.
    pub fn repeat_default(len: usize) -> ArrayList<T> {
        ArrayList::from_iter_sized(std::iter::repeat_with(T::default).take(len))
    }
}

/// The capacity used for an ArrayList created with `len` initial values.
pub(crate) fn initial_cap(len: usize) -> usize {
    cmp::max(len.saturating_add(len / GROWTH_DENOMINATOR), MIN_CAP)
}

/// The capacity that an ArrayList with capacity `cap` grows to, `cap * 3 / 2` (truncated).
///
/// # Panics
/// Panics if the new capacity would exceed [`usize::MAX`].
pub(crate) fn grown_cap(cap: usize) -> usize {
    // cap * 3 / 2 == cap + cap / 2, which only overflows when the result does.
    // Always grow by at least one, even below MIN_CAP.
    let extra = cmp::max(cap * (GROWTH_NUMERATOR - GROWTH_DENOMINATOR) / GROWTH_DENOMINATOR, 1);
    cap.checked_add(extra).expect("Capacity overflow!")
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        let needed = self.len.checked_add(iter.size_hint().0).expect("Capacity overflow!");

        // Grow in whole steps, so extending looks the same as pushing repeatedly. Each step is at
        // least 1.5x, and grown_cap panics before passing usize::MAX.
        let mut new_cap = self.cap();
        while new_cap < needed {
            new_cap = grown_cap(new_cap);
        }
        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut list = ArrayList::with_cap(initial_cap(iter.size_hint().0));

        for item in iter {
            list.push(item);
        }

        list
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        self.clear();

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop. Doing so
        // also deallocates the owned memory.
    }
}

impl<T> Deref for ArrayList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ArrayList is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within this
        // ArrayList. The borrow checker enforces that self isn't mutated due to this function
        // taking a &self.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for ArrayList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self prevents any other access.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    /// Returns a reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, after reporting the failure to the list's
    /// [`Diagnostics`].
    fn index(&self, index: usize) -> &Self::Output {
        if let Err(err) = self.check_index(index) {
            self.diagnostics().fail(err)
        }
        &(**self)[index]
    }
}

impl<T> IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if let Err(err) = self.check_index(index) {
            self.diagnostics().fail(err)
        }
        &mut (**self)[index]
    }
}

impl<T> AsRef<[T]> for ArrayList<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for ArrayList<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for ArrayList<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for ArrayList<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// ArrayList is Send and Sync exactly when T is, via Array<MaybeUninit<T>>.

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_cap(self.cap());

        for value in self.iter() {
            // SAFETY: list has the same capacity as self, which holds at least len values.
            unsafe { list.push_unchecked(value.clone()); }
        }

        list.with_diagnostics(self.diagnostics().clone())
    }
}

impl<T> From<Array<T>> for ArrayList<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        let mut list = ArrayList {
            arr: value.forget_init(),
            len,
        };

        let cap = initial_cap(len);
        if cap > list.cap() {
            list.realloc_with_cap(cap);
        }
        list
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayList<T> {
    fn from(value: [T; N]) -> Self {
        ArrayList::from_iter_sized(value)
    }
}

impl<T: Clone> From<&[T]> for ArrayList<T> {
    fn from(value: &[T]) -> Self {
        ArrayList::from_slice(value)
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: Hash> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for ArrayList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
