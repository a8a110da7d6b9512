//! Disjoint-set forest over grid positions with mergeable payloads.

use std::ops::BitOr;

use gridkit_core::Coord;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy)]
struct Entry<P> {
    parent: Coord,
    rank: u8,
    payload: P,
}

/// Union-find over [`Coord`]s where each set carries the bitwise OR of its
/// members' payloads.
///
/// Positions join lazily through [`add`](Self::add). [`find`](Self::find)
/// compresses paths and [`union`](Self::union) links by rank.
///
/// # Examples
///
/// ```
/// use gridkit_core::Coord;
/// use gridkit_search::PositionForest;
///
/// let mut forest = PositionForest::new();
/// forest.add(Coord::new(0, 0), 0b01_u8);
/// forest.add(Coord::new(1, 0), 0b10_u8);
/// assert_eq!(forest.union(Coord::new(0, 0), Coord::new(1, 0)), Some(0b11));
/// assert_eq!(forest.union(Coord::new(0, 0), Coord::new(9, 9)), None);
/// ```
#[derive(Debug, Clone)]
pub struct PositionForest<P> {
    entries: FxHashMap<Coord, Entry<P>>,
}

impl<P> Default for PositionForest<P> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<P> PositionForest<P>
where
    P: Copy + BitOr<Output = P>,
{
    /// Creates an empty forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `coord` as a singleton set carrying `payload`.
    ///
    /// Returns `false` and keeps the existing payload if `coord` was already added.
    pub fn add(&mut self, coord: Coord, payload: P) -> bool {
        if self.entries.contains_key(&coord) {
            return false;
        }
        self.entries.insert(
            coord,
            Entry {
                parent: coord,
                rank: 0,
                payload,
            },
        );
        true
    }

    /// Returns `true` if `coord` was added.
    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Returns the representative of `coord`'s set, or `None` if it was never added.
    pub fn find(&mut self, coord: Coord) -> Option<Coord> {
        let root = self.root(coord)?;
        let mut current = coord;
        while current != root {
            let entry = self.entries.get_mut(&current)?;
            current = std::mem::replace(&mut entry.parent, root);
        }
        Some(root)
    }

    fn root(&self, coord: Coord) -> Option<Coord> {
        let mut current = coord;
        loop {
            let parent = self.entries.get(&current)?.parent;
            if parent == current {
                return Some(current);
            }
            current = parent;
        }
    }

    /// Merges the sets of `a` and `b` and returns the merged payload.
    ///
    /// Returns `None` if either position was never added. Uniting two
    /// members of the same set returns that set's payload unchanged.
    pub fn union(&mut self, a: Coord, b: Coord) -> Option<P> {
        let ra = self.find(a)?;
        let rb = self.find(b)?;
        if ra == rb {
            return self.payload(ra);
        }
        let (rank_a, rank_b) = (self.entries[&ra].rank, self.entries[&rb].rank);
        let (root, child) = if rank_a < rank_b { (rb, ra) } else { (ra, rb) };

        let child_entry = self.entries.get_mut(&child)?;
        child_entry.parent = root;
        let child_payload = child_entry.payload;

        let root_entry = self.entries.get_mut(&root)?;
        root_entry.payload = root_entry.payload | child_payload;
        if rank_a == rank_b {
            root_entry.rank = root_entry.rank.saturating_add(1);
        }
        Some(root_entry.payload)
    }

    /// The payload of the set containing `coord`.
    #[must_use]
    pub fn payload(&self, coord: Coord) -> Option<P> {
        let root = self.root(coord)?;
        self.entries.get(&root).map(|entry| entry.payload)
    }

    /// Returns `true` if both positions were added and belong to the same set.
    #[must_use]
    pub fn connected(&self, a: Coord, b: Coord) -> bool {
        matches!((self.root(a), self.root(b)), (Some(ra), Some(rb)) if ra == rb)
    }

    /// Number of positions added.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
