//! Membership-test capability.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::ops::{Range, RangeInclusive};

/// Values that can answer whether they contain an item.
///
/// `Item` is the type being looked up. Hashed and ordered collections accept
/// any borrowed form of their element type, so a `HashSet<String>` answers
/// for `str` as well as `String`.
///
/// ```
/// use std::collections::HashSet;
/// use capability_protocols::ContainmentCheckable;
///
/// fn has<C, I>(collection: &C, item: &I) -> bool
/// where
///     C: ContainmentCheckable<I> + ?Sized,
///     I: ?Sized,
/// {
///     collection.contains(item)
/// }
///
/// let tags: HashSet<String> = ["rust".to_string()].into_iter().collect();
/// assert!(has(&tags, "rust"));
/// assert!(has("haystack", "st"));
/// assert!(!has(&vec![1, 2, 3], &4));
/// ```
///
/// The membership test takes exactly one item. An implementation with a
/// second argument does not satisfy the trait:
///
/// ```compile_fail
/// use capability_protocols::ContainmentCheckable;
///
/// struct Grid(Vec<Vec<u8>>);
///
/// impl ContainmentCheckable<u8> for Grid {
///     fn contains(&self, row: &u8, col: &u8) -> bool {
///         self.0.len() > *row as usize && self.0[0].len() > *col as usize
///     }
/// }
/// ```
pub trait ContainmentCheckable<Item: ?Sized> {
    /// Whether `item` is a member of `self`.
    fn contains(&self, item: &Item) -> bool;
}

impl<T: PartialEq> ContainmentCheckable<T> for [T] {
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|candidate| candidate == item)
    }
}

impl<T: PartialEq, const N: usize> ContainmentCheckable<T> for [T; N] {
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|candidate| candidate == item)
    }
}

impl<T: PartialEq> ContainmentCheckable<T> for Vec<T> {
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|candidate| candidate == item)
    }
}

impl<T: PartialEq> ContainmentCheckable<T> for VecDeque<T> {
    fn contains(&self, item: &T) -> bool {
        self.iter().any(|candidate| candidate == item)
    }
}

impl<T, Q, S> ContainmentCheckable<Q> for HashSet<T, S>
where
    T: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, item: &Q) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T, Q> ContainmentCheckable<Q> for BTreeSet<T>
where
    T: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn contains(&self, item: &Q) -> bool {
        BTreeSet::contains(self, item)
    }
}

// Maps answer for their keys.
impl<K, V, Q, S> ContainmentCheckable<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    fn contains(&self, item: &Q) -> bool {
        self.contains_key(item)
    }
}

impl<K, V, Q> ContainmentCheckable<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    fn contains(&self, item: &Q) -> bool {
        self.contains_key(item)
    }
}

impl ContainmentCheckable<str> for str {
    fn contains(&self, item: &str) -> bool {
        str::contains(self, item)
    }
}

impl ContainmentCheckable<char> for str {
    fn contains(&self, item: &char) -> bool {
        str::contains(self, *item)
    }
}

impl ContainmentCheckable<str> for String {
    fn contains(&self, item: &str) -> bool {
        str::contains(self, item)
    }
}

impl ContainmentCheckable<char> for String {
    fn contains(&self, item: &char) -> bool {
        str::contains(self, *item)
    }
}

impl<T: PartialOrd> ContainmentCheckable<T> for Range<T> {
    fn contains(&self, item: &T) -> bool {
        Range::contains(self, item)
    }
}

impl<T: PartialOrd> ContainmentCheckable<T> for RangeInclusive<T> {
    fn contains(&self, item: &T) -> bool {
        RangeInclusive::contains(self, item)
    }
}

impl<Item, T> ContainmentCheckable<Item> for &T
where
    Item: ?Sized,
    T: ContainmentCheckable<Item> + ?Sized,
{
    fn contains(&self, item: &Item) -> bool {
        (**self).contains(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member<C, I>(collection: &C, item: &I) -> bool
    where
        C: ContainmentCheckable<I> + ?Sized,
        I: ?Sized,
    {
        collection.contains(item)
    }

    #[test]
    fn test_sequences() {
        assert!(member(&[1, 2, 3][..], &2));
        assert!(member(&[1, 2, 3], &3));
        assert!(!member(&vec!["a", "b"], &"c"));
        let queue: VecDeque<u8> = VecDeque::from(vec![4, 5]);
        assert!(member(&queue, &5));
        assert!(!member(&Vec::<u8>::new(), &0));
    }

    #[test]
    fn test_sets_accept_borrowed_items() {
        let hashed: HashSet<String> = ["alpha", "beta"].iter().map(|s| s.to_string()).collect();
        assert!(member(&hashed, "alpha"));
        assert!(member(&hashed, &"beta".to_string()));
        assert!(!member(&hashed, "gamma"));

        let ordered: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        assert!(member(&ordered, &1i32));
        assert!(!member(&ordered, &9i32));
    }

    #[test]
    fn test_maps_check_keys_not_values() {
        let mut scores = HashMap::new();
        scores.insert("ann".to_string(), 10);
        assert!(member(&scores, "ann"));
        assert!(!member(&scores, "10"));

        let mut ordered = BTreeMap::new();
        ordered.insert(7u32, "seven");
        assert!(member(&ordered, &7u32));
        assert!(!member(&ordered, &8u32));
    }

    #[test]
    fn test_text_substring_and_char() {
        assert!(member("haystack", "hay"));
        assert!(member("haystack", ""));
        assert!(!member("haystack", "needle"));
        assert!(member("haystack", &'y'));
        assert!(member(&String::from("owned"), "wne"));
        assert!(!member(&String::from("owned"), &'z'));
    }

    #[test]
    fn test_ranges() {
        assert!(member(&(0..10), &0));
        assert!(!member(&(0..10), &10));
        assert!(member(&(0..=10), &10));
        assert!(member(&(0.5..1.5), &1.0));
        assert!(!member(&(0.5..1.5), &f64::NAN));
    }

    #[test]
    fn test_reference_forwards() {
        let values = vec![1, 2];
        let borrowed: &Vec<i32> = &values;
        assert!(member(&borrowed, &2));
    }
}
