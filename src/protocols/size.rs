//! Size-query capability.
//!
//! The standard capability set calls this `Sized`. Rust already reserves that
//! name for the compile-time-size marker, and a glob import of a second
//! `Sized` would shadow it in every `?Sized` bound, so the trait is
//! `SizeQueryable` here. The catalogue still answers to `Sized`.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Values that can report how many elements they hold.
pub trait SizeQueryable {
    /// Number of elements.
    fn size(&self) -> usize;
}

/// Counts characters, not bytes.
impl SizeQueryable for str {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl SizeQueryable for String {
    fn size(&self) -> usize {
        self.chars().count()
    }
}

impl<T> SizeQueryable for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> SizeQueryable for [T; N] {
    fn size(&self) -> usize {
        N
    }
}

impl<T> SizeQueryable for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> SizeQueryable for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> SizeQueryable for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> SizeQueryable for BTreeSet<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> SizeQueryable for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> SizeQueryable for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: SizeQueryable + ?Sized> SizeQueryable for &T {
    fn size(&self) -> usize {
        (**self).size()
    }
}
