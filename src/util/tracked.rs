//! Element types for observing what collections and algorithms do with their contents.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZeroSizedType;

/// Increments a shared counter every time a clone of it is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// Returns the number of drops observed so far.
    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A value that compares by `key` only, while `tag` records where it started out. Used to observe
/// whether a sort keeps equal keys in their original order.
#[derive(Debug, Clone, Copy)]
pub struct Keyed {
    pub key: i32,
    pub tag: usize,
}

impl Keyed {
    /// Tags each key with its position in `keys`.
    pub fn tag_all(keys: &[i32]) -> Vec<Keyed> {
        keys.iter()
            .enumerate()
            .map(|(tag, &key)| Keyed { key, tag })
            .collect()
    }
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}
