//! Generic collections and algorithms: a fixed size [`Array`](collections::Array), a growable
//! [`ArrayList`](collections::ArrayList), a two slot [`Pair`](collections::Pair) and an
//! [`AssociationList`](collections::AssociationList) map, along with searching and sorting
//! algorithms that work on all of them (and on any other slice).
//!
//! # Method
//! The contiguous collections own their memory directly, through the global allocator, rather
//! than wrapping [`Vec`]. [`ArrayList`](collections::ArrayList) manages its own capacity, which
//! starts at 10 and grows by a factor of 1.5.
//!
//! The algorithms are free functions over `[T]` in [`algorithms`], and are also available as
//! methods through the [`Search`](algorithms::Search) and [`Sort`](algorithms::Sort) traits.
//!
//! # Error Handling
//! Specifically for a collections library, it is more ergonomic for functions to panic in some
//! cases, because users don't want to be forced to handle an error every time they index into a
//! list. Indexing therefore panics on failure, while `try_` methods return a [`Result`] for
//! callers who want to handle it.
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using the structs in [`error`] which implement [`Error`](std::error::Error), unified by
//! [`AccessError`](error::AccessError).
//!
//! Before panicking, every failure is reported to the [`Diagnostics`](diagnostics::Diagnostics)
//! handle of the collection involved. By default that is the `log` facade.
//!
//! # Features
//! - `log` (default): forward diagnostics to the `log` crate, and trace capacity growth.
//! - `check-preconditions`: in debug builds, assert that input to binary and interpolation search
//!   is sorted.
#![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithms;
pub mod collections;
pub mod diagnostics;

pub(crate) mod util;

/// Errors produced when accessing collections.
pub mod error {
    #[doc(inline)]
    pub use crate::util::error::*;
}

/// The traits needed to use the algorithms as methods.
pub mod prelude {
    #[doc(inline)]
    pub use crate::algorithms::{Search, Sort};
}
