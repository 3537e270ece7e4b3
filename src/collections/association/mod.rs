//! A module containing [`AssociationList`] and associated types.
//!
//! Currently, the only other included types are for iteration, providing owned and borrowed
//! iteration over entries, keys or values in a list.
//!
//! As a note, there is no iterator giving mutable access to keys, because mutating the keys of an
//! AssociationList in place could create two entries for the same key.
//!
//! [`AssociationList`] is also re-exported under the parent module.

mod association_list;
mod iter;

pub use association_list::*;
pub use iter::*;
