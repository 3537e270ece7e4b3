use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::ArrayList;
use crate::collections::pair::Pair;
use crate::diagnostics::Diagnostics;
use crate::util::error::KeyNotFound;

/// A map of keys to values, stored as an [`ArrayList`] of [`Pair`]s in insertion order.
///
/// There is no hashing involved: keys only need to implement [`PartialEq`], and every lookup is a
/// linear scan. There is at most one entry for any key, which [`set`](AssociationList::set)
/// upholds by overwriting the existing entry in place. Entries are never removed individually.
///
/// Indexing with an absent key reports a [`KeyNotFound`] error to the list's [`Diagnostics`] and
/// then panics. Use [`get`](AssociationList::get) or [`try_get`](AssociationList::try_get) to
/// handle absent keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the AssociationList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` | `O(n)` |
/// | `get` | `O(n)` |
/// | `index` | `O(n)` |
/// | `contains_key` | `O(n)` |
/// | `same_entries` | `O(n^2)` |
///
/// # Examples
/// ```
/// # use dsa_core::collections::AssociationList;
/// let mut ages = AssociationList::new();
/// ages.set("alice", 31);
/// ages.set("bob", 27);
/// assert_eq!(ages.set("alice", 32), Some(31));
///
/// assert_eq!(ages.len(), 2);
/// assert_eq!(ages["alice"], 32);
/// assert_eq!(ages.get("carol"), None);
/// ```
#[derive(Clone)]
pub struct AssociationList<K, V> {
    pub(crate) list: ArrayList<Pair<K, V>>,
}

impl<K, V> AssociationList<K, V> {
    /// Creates a new, empty AssociationList.
    pub fn new() -> AssociationList<K, V> {
        AssociationList {
            list: ArrayList::new(),
        }
    }

    /// Creates a new, empty AssociationList which can hold `cap` entries without reallocating.
    pub fn with_cap(cap: usize) -> AssociationList<K, V> {
        AssociationList {
            list: ArrayList::with_cap(cap),
        }
    }

    /// Returns the number of entries in the AssociationList.
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns true if the AssociationList contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the backing list of entries, in storage order.
    pub const fn as_list(&self) -> &ArrayList<Pair<K, V>> {
        &self.list
    }

    /// Returns the [`Diagnostics`] that failures of this AssociationList are reported to.
    pub const fn diagnostics(&self) -> &Diagnostics {
        self.list.diagnostics()
    }

    /// Replaces the [`Diagnostics`] that failures of this AssociationList are reported to.
    pub fn set_diagnostics(&mut self, diag: Diagnostics) {
        self.list.set_diagnostics(diag);
    }

    /// Returns self, reporting failures to `diag` from now on.
    pub fn with_diagnostics(mut self, diag: Diagnostics) -> AssociationList<K, V> {
        self.set_diagnostics(diag);
        self
    }

    /// Returns an iterator over all entries, as references, in storage order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all entries, with mutable references to the values. Keys can't be
    /// mutated in place, because doing so could break the one-entry-per-key rule.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: PartialEq, V> AssociationList<K, V> {
    /// Associates `value` with `key`. If the key already has an entry, its value is replaced in
    /// place and the previous value is returned. Otherwise, a new entry is appended.
    ///
    /// As with [`std::collections::HashMap::insert`], the key isn't changed if it already exists.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match self.position(&key) {
            Some(index) => Some(mem::replace(&mut self.list[index].second, value)),
            None => {
                self.list.push(Pair::new(key, value));
                None
            },
        }
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q represents a borrowed version of K, where equality carries over the borrow.
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        let entry = &self.list[index];
        Some((&entry.first, &entry.second))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the list
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.get_entry(key).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// list contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.position(key)?;
        Some(&mut self.list[index].second)
    }

    /// Returns a reference to the value associated with the provided `key`, or an error naming the
    /// key if there is none.
    ///
    /// # Errors
    /// Returns [`KeyNotFound`] if the list contains no value for `key`.
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: PartialEq + Debug + ?Sized,
    {
        self.get(key).ok_or_else(|| key_not_found(key))
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.position(key).is_some()
    }

    /// Returns true if both lists hold the same entries, regardless of the order they are stored
    /// in. Compare with `==`, which also requires the same order.
    ///
    /// # Examples
    /// ```
    /// # use dsa_core::collections::AssociationList;
    /// let a = AssociationList::from([(1, 'a'), (2, 'b')]);
    /// let b = AssociationList::from([(2, 'b'), (1, 'a')]);
    /// assert!(a.same_entries(&b));
    /// assert_ne!(a, b);
    /// ```
    pub fn same_entries(&self, other: &AssociationList<K, V>) -> bool
    where
        V: PartialEq,
    {
        // Keys are unique on both sides, so equal lengths and a match for every entry of self
        // means there is nothing left over in other.
        self.len() == other.len()
            && self.iter().all(|entry| other.get(&entry.first) == Some(&entry.second))
    }

    /// Finds the storage index of the entry for `key`.
    pub(crate) fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.list.iter().position(|entry| entry.first.borrow() == key)
    }
}

fn key_not_found<Q: Debug + ?Sized>(key: &Q) -> KeyNotFound {
    KeyNotFound {
        key: format!("{key:?}"),
    }
}

impl<K, V, Q> Index<&Q> for AssociationList<K, V>
where
    K: PartialEq + Borrow<Q>,
    Q: PartialEq + Debug + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Panics
    /// Panics if there is no entry for `key`, after reporting the failure to the list's
    /// [`Diagnostics`].
    fn index(&self, key: &Q) -> &Self::Output {
        match self.position(key) {
            Some(index) => &self.list[index].second,
            None => self.diagnostics().fail(key_not_found(key)),
        }
    }
}

impl<K, V, Q> IndexMut<&Q> for AssociationList<K, V>
where
    K: PartialEq + Borrow<Q>,
    Q: PartialEq + Debug + ?Sized,
{
    fn index_mut(&mut self, key: &Q) -> &mut Self::Output {
        match self.position(key) {
            Some(index) => &mut self.list[index].second,
            None => self.diagnostics().fail(key_not_found(key)),
        }
    }
}

impl<K, V> Default for AssociationList<K, V> {
    fn default() -> Self {
        AssociationList::new()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for AssociationList<K, V> {
    /// Compares entries in storage order. See [`AssociationList::same_entries`] for a comparison
    /// that ignores order.
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<K: Eq, V: Eq> Eq for AssociationList<K, V> {}

impl<K: PartialEq, V> From<ArrayList<Pair<K, V>>> for AssociationList<K, V> {
    /// Creates an AssociationList from a list of entries. Later entries overwrite the values of
    /// earlier entries with an equal key.
    fn from(value: ArrayList<Pair<K, V>>) -> Self {
        let mut list = AssociationList::with_cap(value.len())
            .with_diagnostics(value.diagnostics().clone());
        list.extend(value);
        list
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for AssociationList<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: PartialEq, V> FromIterator<Pair<K, V>> for AssociationList<K, V> {
    fn from_iter<I: IntoIterator<Item = Pair<K, V>>>(iter: I) -> Self {
        let mut list = AssociationList::new();
        list.extend(iter);
        list
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssociationList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().map(|(key, value)| Pair::new(key, value)).collect()
    }
}

impl<K: PartialEq, V> Extend<Pair<K, V>> for AssociationList<K, V> {
    fn extend<I: IntoIterator<Item = Pair<K, V>>>(&mut self, iter: I) {
        for Pair { first, second } in iter {
            self.set(first, second);
        }
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for AssociationList<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Debug, V: Debug> Debug for AssociationList<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssociationList")
            .field("entries", &DebugEntries(self))
            .field("len", &self.len())
            .field("cap", &self.list.cap())
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for AssociationList<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&DebugEntries(self), f)
    }
}

/// Formats the entries of an AssociationList as a map, in storage order.
struct DebugEntries<'a, K, V>(&'a AssociationList<K, V>);

impl<K: Debug, V: Debug> Debug for DebugEntries<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|entry| (&entry.first, &entry.second)))
            .finish()
    }
}
