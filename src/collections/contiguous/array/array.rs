use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{ManuallyDrop, MaybeUninit};
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::collections::contiguous::ArrayList;
use crate::diagnostics::Diagnostics;
use crate::util::error::IndexOutOfBounds;

/// An array that is sized once at runtime and never changes size afterwards. Similar to a
/// [`Box<[T]>`](Box<T>).
///
/// Indexing out of bounds reports an [`IndexOutOfBounds`] error to the Array's [`Diagnostics`] and
/// then panics. Use [`try_get`](Array::try_get) for a fallible alternative.
///
/// Searching and sorting are provided through the [`Search`](crate::algorithms::Search) and
/// [`Sort`](crate::algorithms::Sort) traits, which apply via `Deref<Target = [T]>`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `index` | `O(1)` |
/// | `try_get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `from_slice` | `O(n)` |
/// | `contains` | `O(n)` |
/// | `search_binary` | `O(log n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) diag: Diagnostics,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0.
    ///
    /// This method isn't very helpful in most cases because the size remains zero after
    /// initialization. See [`Array::repeat_default`] or [`Array::from`] for preferred methods of
    /// initialization.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            diag: Diagnostics::default(),
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of `size` values, where the value at each index is the result of
    /// calling `fill` with that index.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let arr = Array::from_fn(4, |i| i * i);
    /// assert_eq!(&*arr, &[0, 1, 4, 9]);
    /// ```
    pub fn from_fn(size: usize, mut fill: impl FnMut(usize) -> T) -> Array<T> {
        let mut arr = Self::new_uninit(size);

        for (index, slot) in arr.iter_mut().enumerate() {
            slot.write(fill(index));
        }

        // SAFETY: Every slot has just been written. (If fill panics, arr is dropped as
        // MaybeUninit values, which leaks the written ones but never drops uninitialized memory.)
        unsafe { arr.assume_init() }
    }

    /// Creates an Array from an iterator that knows its exact length in advance.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator yields fewer items
    /// than it reported. Any excess items are left in the iterator.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let arr = Array::from_iter_sized(1_u8..=3);
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    pub fn from_iter_sized<I>(iter: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut iter = iter.into_iter();

        Self::from_fn(iter.len(), |_| {
            iter.next().unwrap_or_else(
                || panic!("ExactSizeIterator yielded fewer items than its reported length!")
            )
        })
    }

    /// Returns a reference to the value at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size`.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.try_get(1), Ok(&2));
    /// assert!(arr.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&(**self)[index])
    }

    /// Returns a mutable reference to the value at `index`, or an error if it is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut (**self)[index])
    }

    /// Replaces the value at `index` with `value`, returning the old value, or an error if `index`
    /// is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= size`.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.try_get_mut(index).map(|slot| std::mem::replace(slot, value))
    }

    /// Returns the [`Diagnostics`] that failures of this Array are reported to.
    pub const fn diagnostics(&self) -> &Diagnostics {
        &self.diag
    }

    /// Replaces the [`Diagnostics`] that failures of this Array are reported to.
    pub fn set_diagnostics(&mut self, diag: Diagnostics) {
        self.diag = diag;
    }

    /// Returns self, reporting failures to `diag` from now on.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// # use dsa_core::diagnostics::Diagnostics;
    /// let arr = Array::from([1, 2, 3]).with_diagnostics(Diagnostics::Silent);
    /// assert_eq!(arr[0], 1);
    /// ```
    pub fn with_diagnostics(mut self, diag: Diagnostics) -> Array<T> {
        self.diag = diag;
        self
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`. Although it may not seem very useful by
    /// itself, this method acts as a counterpart to [`Array::assume_init`] and allows
    /// the Array to be reallocated.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size, diag) = self.into_raw();
        Array {
            // MaybeUninit<T> has the same layout as T.
            ptr: ptr.cast(),
            size,
            diag,
            _phantom: PhantomData,
        }
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).expect("Capacity overflow!")
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }

    /// Decomposes self without dropping any values or deallocating. The caller becomes responsible
    /// for the allocation.
    pub(crate) fn into_raw(self) -> (NonNull<T>, usize, Diagnostics) {
        let this = ManuallyDrop::new(self);
        // SAFETY: this is never dropped or used again, so diag is moved out exactly once.
        let diag = unsafe { ptr::read(&this.diag) };
        (this.ptr, this.size, diag)
    }

    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index < self.size {
            Ok(())
        } else {
            Err(IndexOutOfBounds {
                index,
                len: self.size,
            })
        }
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new `Array<T>` with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        Self::from_fn(count, |_| item.clone())
    }

    /// Creates a new Array containing a clone of every value in `values`.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// let values = [String::from("a"), String::from("b")];
    /// let arr = Array::from_slice(&values);
    /// assert_eq!(&*arr, &values);
    /// ```
    pub fn from_slice(values: &[T]) -> Array<T> {
        Self::from_fn(values.len(), |index| values[index].clone())
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::from_fn(count, |_| T::default())
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size, diag) = self.into_raw();
        Array {
            // MaybeUninit<T> has the same layout as T.
            ptr: ptr.cast(),
            size,
            diag,
            _phantom: PhantomData,
        }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    /// Values beyond `new_size` are discarded without being dropped.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub(crate) fn realloc(&mut self, new_size: usize) {
        if new_size == self.size {
            return;
        }

        let old_layout = Self::make_layout(self.size);
        let new_layout = Self::make_layout(new_size);

        // Zero-sized types never allocate, so their sizes are handled by the first two branches.
        let new_ptr = match (old_layout.size(), new_layout.size()) {
            (0, _) => Self::make_ptr(new_layout),
            (_, 0) => {
                // SAFETY: ptr was allocated in the global allocator with old_layout, which is
                // non-zero.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and are dropped exactly once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Array::<T>::make_layout(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size values, all of which are initialized. The borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, and the mutable borrow of self prevents any other access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    /// Returns a reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, after reporting the failure to the Array's
    /// [`Diagnostics`].
    fn index(&self, index: usize) -> &Self::Output {
        if let Err(err) = self.check_index(index) {
            self.diag.fail(err)
        }
        &(**self)[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if let Err(err) = self.check_index(index) {
            self.diag.fail(err)
        }
        &mut (**self)[index]
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send. Diagnostics only hold Send + Sync sinks.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_slice(self).with_diagnostics(self.diag.clone())
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(value: [T; N]) -> Self {
        Array::from_iter_sized(value)
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(value: &[T]) -> Self {
        Array::from_slice(value)
    }
}

impl<T> From<ArrayList<T>> for Array<T> {
    fn from(value: ArrayList<T>) -> Self {
        let mut value = ManuallyDrop::new(value);
        let len = value.len;
        // Drop the uninitialized tail of the allocation.
        value.arr.realloc(len);

        // SAFETY: value is never dropped or used again, so arr is moved out exactly once. The
        // first len values of the list are initialized and now make up the whole allocation.
        unsafe { ptr::read(&value.arr).assume_init() }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<ArrayList<T>>().into()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
