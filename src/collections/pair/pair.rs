use std::fmt::{self, Display, Formatter};

use derive_more::From;

/// Two independently typed values, held together. Pair is the entry type of
/// [`AssociationList`](crate::collections::AssociationList).
///
/// Equality and hashing are per-component, while ordering is lexicographic: `first` is compared
/// before `second`. A default Pair holds the default value of each component.
///
/// # Examples
/// ```
/// # use dsa_core::collections::Pair;
/// let pair = Pair::new("answer", 42);
/// assert_eq!(pair.first, "answer");
/// assert_eq!(pair.swap(), Pair::new(42, "answer"));
/// assert_eq!(Pair::from((1, 'a')).into_tuple(), (1, 'a'));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From)]
pub struct Pair<T1, T2> {
    #[allow(missing_docs)]
    pub first: T1,
    #[allow(missing_docs)]
    pub second: T2,
}

impl<T1, T2> Pair<T1, T2> {
    /// Creates a new Pair from its two components.
    pub const fn new(first: T1, second: T2) -> Pair<T1, T2> {
        Pair { first, second }
    }

    /// Consumes self, returning both components as a tuple.
    pub fn into_tuple(self) -> (T1, T2) {
        (self.first, self.second)
    }

    /// Returns a Pair of references to each component.
    pub const fn as_ref(&self) -> Pair<&T1, &T2> {
        Pair {
            first: &self.first,
            second: &self.second,
        }
    }

    /// Returns a Pair of mutable references to each component.
    pub const fn as_mut(&mut self) -> Pair<&mut T1, &mut T2> {
        Pair {
            first: &mut self.first,
            second: &mut self.second,
        }
    }

    /// Consumes self, returning a Pair with the components in the opposite slots.
    pub fn swap(self) -> Pair<T2, T1> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }
}

impl<T1, T2> From<Pair<T1, T2>> for (T1, T2) {
    fn from(value: Pair<T1, T2>) -> Self {
        value.into_tuple()
    }
}

impl<T1: Display, T2: Display> Display for Pair<T1, T2> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
