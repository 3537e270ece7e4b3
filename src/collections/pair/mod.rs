//! A module containing [`Pair`], a two slot value holder.
//!
//! [`Pair`] is also re-exported under the parent module.

mod pair;

pub use pair::*;
