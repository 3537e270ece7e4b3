use derive_more::{Display, Error, From, IsVariant};

/// An index was outside of the bounds of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Index {index} out of bounds for collection with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// A key had no entry in an [`AssociationList`](crate::collections::AssociationList).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Key {key} not found in association list!")]
pub struct KeyNotFound {
    /// The requested key, rendered with [`Debug`](std::fmt::Debug) at the point of failure.
    pub key: String,
}

/// Any failure to access an element of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum AccessError {
    #[allow(missing_docs)]
    IndexOutOfBounds(IndexOutOfBounds),
    #[allow(missing_docs)]
    KeyNotFound(KeyNotFound),
}
