//! Free-standing ordering, search and sort algorithms over slices.
//!
//! Everything here operates on `[T]`, so it applies equally to [`Array`](crate::collections::Array),
//! [`ArrayList`](crate::collections::ArrayList), [`Vec`] and plain arrays. The [`Search`] and
//! [`Sort`] traits expose the same algorithms as methods on any slice.
//!
//! # Preconditions
//! All of these algorithms assume that the element type's ordering is total. Using them with a
//! partial order (e.g. floats containing NaN) is a logic error that produces unspecified, but
//! memory safe, results. [`binary_search`] and [`interpolation_search`] additionally require their
//! input to be sorted in ascending order, which is only checked when the `check-preconditions`
//! feature is enabled, and only in debug builds.
//!
//! # Time Complexity
//! | Function | Complexity |
//! |-|-|
//! | `min_index` / `max_index` | `O(n)` |
//! | `linear_search` / `contains` | `O(n)` |
//! | `binary_search` | `O(log n)` |
//! | `interpolation_search` | `O(log log n)`*, `O(n)` |
//! | `bubble_sort` | `O(n^2)` |
//! | `selection_sort` | `O(n^2)` |
//! | `merge_sort` | `O(n log n)` |
//! | `quick_sort` | `O(n log n)`**, `O(n^2)` |
//!
//! \* For uniformly distributed values.
//!
//! \** On average. Already sorted input (in either direction) hits the quadratic case because the
//! pivot is always the last element.
#![warn(missing_docs)]

mod interpolate;
mod ordering;
mod search;
mod sort;
mod traits;

pub use interpolate::*;
pub use ordering::*;
pub use search::*;
pub use sort::*;
pub use traits::*;
