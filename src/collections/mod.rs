//! Various general-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! gives them every slice method, along with the [`Search`](crate::algorithms::Search) and
//! [`Sort`](crate::algorithms::Sort) traits, without repeating that functionality per type.
//!
//! [`AssociationList`] is the exception: it is a map built on top of an [`ArrayList`] of
//! [`Pair`]s, and exposes the backing list through [`AssociationList::as_list`].

pub mod association;
pub mod contiguous;
pub mod pair;

#[doc(inline)]
pub use association::AssociationList;
#[doc(inline)]
pub use contiguous::{Array, ArrayList};
#[doc(inline)]
pub use pair::Pair;
