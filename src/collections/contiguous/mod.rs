//! Contiguous collection types. Namely [`Array`] for collections sized once at runtime and
//! [`ArrayList`] for contiguous collections that vary in size at runtime.
#![warn(missing_docs)]

pub mod array;
pub mod array_list;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use array_list::ArrayList;
