//! Hashed collections keyed by [`Coord`].

use std::collections::hash_map;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::coord::Coord;

/// A set of coordinates.
///
/// Membership is by value; iteration order is unspecified.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coord, PositionSet};
///
/// let mut set = PositionSet::new();
/// assert!(set.insert(Coord::new(1, 2)));
/// assert!(!set.insert(Coord::new(1, 2)));
/// assert!(set.contains(Coord::new(1, 2)));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSet {
    inner: FxHashSet<Coord>,
}

impl PositionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coord`, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coord) -> bool {
        self.inner.insert(coord)
    }

    /// Removes `coord`, returning `true` if it was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        self.inner.remove(&coord)
    }

    /// Returns `true` if `coord` is a member.
    #[must_use]
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.inner.contains(&coord)
    }

    /// Number of members.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set has no members.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over the members in unspecified order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.inner.iter().copied()
    }

    /// Returns the members sorted by [`Coord`]'s ordering.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<Coord> {
        let mut coords: Vec<_> = self.iter().collect();
        coords.sort_unstable();
        coords
    }
}

impl FromIterator<Coord> for PositionSet {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for PositionSet {
    fn extend<T: IntoIterator<Item = Coord>>(&mut self, iter: T) {
        self.inner.extend(iter);
    }
}

impl IntoIterator for PositionSet {
    type Item = Coord;
    type IntoIter = std::collections::hash_set::IntoIter<Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// A map from coordinates to values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap<V> {
    inner: FxHashMap<Coord, V>,
}

impl<V> Default for PositionMap<V> {
    fn default() -> Self {
        Self {
            inner: FxHashMap::default(),
        }
    }
}

impl<V> PositionMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` at `coord`, returning the value it replaced.
    pub fn insert(&mut self, coord: Coord, value: V) -> Option<V> {
        self.inner.insert(coord, value)
    }

    /// Returns the value stored at `coord`.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&V> {
        self.inner.get(&coord)
    }

    /// Returns a mutable reference to the value stored at `coord`.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut V> {
        self.inner.get_mut(&coord)
    }

    /// Returns the entry for `coord` for in-place insertion or update.
    pub fn entry(&mut self, coord: Coord) -> hash_map::Entry<'_, Coord, V> {
        self.inner.entry(coord)
    }

    /// Removes and returns the value stored at `coord`.
    pub fn remove(&mut self, coord: Coord) -> Option<V> {
        self.inner.remove(&coord)
    }

    /// Returns `true` if a value is stored at `coord`.
    #[must_use]
    pub fn contains_key(&self, coord: Coord) -> bool {
        self.inner.contains_key(&coord)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(coord, &value)` pairs in unspecified order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Coord, &V)> {
        self.inner.iter().map(|(&c, v)| (c, v))
    }

    /// Iterates over the keys in unspecified order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        self.inner.keys().copied()
    }
}

impl<V> FromIterator<(Coord, V)> for PositionMap<V> {
    fn from_iter<T: IntoIterator<Item = (Coord, V)>>(iter: T) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
