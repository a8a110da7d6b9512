//! Detecting when blocked cells cut a grid in two.
//!
//! Each blocked cell is tagged with the grid [`Edges`] it touches and joined
//! to its 8-connected blocked neighbors in a [`PositionForest`]. A chain of
//! blocked cells separates the top-left corner from the bottom-right one
//! exactly when its merged edges connect {top, right} to {left, bottom}.
//!
//! # Examples
//!
//! ```
//! use gridkit_core::Coord;
//! use gridkit_search::first_cut;
//!
//! // A diagonal wall from the top-right to the bottom-left corner.
//! let wall = [Coord::new(0, 2), Coord::new(2, 0), Coord::new(1, 1)];
//! assert_eq!(first_cut(3, 3, wall), Some(Coord::new(1, 1)));
//! assert_eq!(first_cut(3, 3, [Coord::new(1, 1)]), None);
//! ```

use gridkit_core::Coord;

use crate::forest::PositionForest;

bitflags::bitflags! {
    /// Grid borders touched by a cell or a connected group of cells.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Edges: u8 {
        /// Column `0`.
        const LEFT = 0b0001;
        /// Column `width - 1`.
        const RIGHT = 0b0010;
        /// Row `0`.
        const TOP = 0b0100;
        /// Row `height - 1`.
        const BOTTOM = 0b1000;
    }
}

impl Edges {
    /// Every edge combination that blocks all paths between the top-left and
    /// bottom-right corners.
    const CUTS: [u8; 9] = [
        0b0011, 0b0101, 0b0111, 0b1010, 0b1011, 0b1100, 0b1101, 0b1110, 0b1111,
    ];

    /// The borders of a `width` x `height` grid that `coord` lies on.
    #[must_use]
    pub fn touched_by(coord: Coord, width: i64, height: i64) -> Self {
        let mut edges = Self::empty();
        edges.set(Self::LEFT, coord.x == 0);
        edges.set(Self::RIGHT, coord.x == width - 1);
        edges.set(Self::TOP, coord.y == 0);
        edges.set(Self::BOTTOM, coord.y == height - 1);
        edges
    }

    /// Returns `true` if a blocked group touching these borders separates the
    /// top-left corner from the bottom-right corner.
    #[must_use]
    pub fn separates_corners(self) -> bool {
        Self::CUTS.contains(&self.bits())
    }
}

/// Blocks the cells of `blocked` one at a time and returns the first one
/// after which no path joins `(0, 0)` and `(width - 1, height - 1)`.
///
/// Cells outside the `width` x `height` grid are ignored. Returns `None` if
/// the grid stays connected after every cell is blocked.
pub fn first_cut<I>(width: i64, height: i64, blocked: I) -> Option<Coord>
where
    I: IntoIterator<Item = Coord>,
{
    let mut forest = PositionForest::new();
    let inside = |c: Coord| (0..width).contains(&c.x) && (0..height).contains(&c.y);
    for coord in blocked.into_iter().filter(|&c| inside(c)) {
        forest.add(coord, Edges::touched_by(coord, width, height));
        for neighbor in coord.box_neighbors() {
            forest.union(coord, neighbor);
        }
        if forest
            .payload(coord)
            .is_some_and(Edges::separates_corners)
        {
            log::debug!("grid cut by {coord} after {} blocks", forest.len());
            return Some(coord);
        }
    }
    None
}
