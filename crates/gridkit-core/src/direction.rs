//! Neighbor schemes.
//!
//! Two closed direction sets are provided:
//!
//! - [`Direction`] - the four cardinal directions (4-neighborhood)
//! - [`BoxDirection`] - the eight surrounding directions (8-neighborhood)
//!
//! Both implement [`Heading`], so coordinate stepping, ray casting and
//! neighbor lookups accept either one.
//!
//! [`BoxNeighbors`] records which of the eight surrounding cells satisfy a
//! predicate, which is enough to classify a cell's corners.

use crate::coord::Coord;

/// A direction that maps to a fixed coordinate delta.
pub trait Heading: Copy {
    /// The offset of one step in this direction.
    fn delta(self) -> Coord;
}

/// One of the four cardinal directions.
///
/// The declaration order East, South, West, North is clockwise because `y`
/// grows downward. [`Direction::index`] exposes that order for callers that
/// store per-direction data in arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Direction {
    /// `+x`
    East,
    /// `+y`
    South,
    /// `-x`
    West,
    /// `-y`
    North,
}

impl Direction {
    /// All cardinal directions in clockwise order, starting east.
    pub const ALL: [Self; 4] = [Self::East, Self::South, Self::West, Self::North];

    /// Returns the direction at `index` in [`Direction::ALL`], modulo 4.
    #[must_use]
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Position of this direction in [`Direction::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The direction after a quarter turn clockwise (east becomes south).
    #[must_use]
    #[inline]
    pub const fn turn_clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The direction after a quarter turn counter-clockwise (east becomes north).
    #[must_use]
    #[inline]
    pub const fn turn_counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Returns `true` for east and west.
    #[must_use]
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

impl Heading for Direction {
    #[inline]
    fn delta(self) -> Coord {
        match self {
            Self::East => Coord::new(1, 0),
            Self::South => Coord::new(0, 1),
            Self::West => Coord::new(-1, 0),
            Self::North => Coord::new(0, -1),
        }
    }
}

/// One of the eight directions surrounding a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum BoxDirection {
    /// `(-1, -1)`
    NorthWest,
    /// `(0, -1)`
    North,
    /// `(1, -1)`
    NorthEast,
    /// `(1, 0)`
    East,
    /// `(1, 1)`
    SouthEast,
    /// `(0, 1)`
    South,
    /// `(-1, 1)`
    SouthWest,
    /// `(-1, 0)`
    West,
}

impl BoxDirection {
    /// All box directions, clockwise from north-west.
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
    ];

    /// The four diagonal directions.
    pub const DIAGONALS: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position of this direction in [`BoxDirection::ALL`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way.
    #[must_use]
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// Returns `true` for the four diagonal directions.
    #[must_use]
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.index() % 2 == 0
    }
}

impl Heading for BoxDirection {
    #[inline]
    fn delta(self) -> Coord {
        match self {
            Self::NorthWest => Coord::new(-1, -1),
            Self::North => Coord::new(0, -1),
            Self::NorthEast => Coord::new(1, -1),
            Self::East => Coord::new(1, 0),
            Self::SouthEast => Coord::new(1, 1),
            Self::South => Coord::new(0, 1),
            Self::SouthWest => Coord::new(-1, 1),
            Self::West => Coord::new(-1, 0),
        }
    }
}

impl From<Direction> for BoxDirection {
    #[inline]
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::East => Self::East,
            Direction::South => Self::South,
            Direction::West => Self::West,
            Direction::North => Self::North,
        }
    }
}

bitflags::bitflags! {
    /// A set of box directions, typically "which neighbors belong to the same region".
    ///
    /// Built with [`Coord::box_neighbors_where`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BoxNeighbors: u8 {
        /// [`BoxDirection::NorthWest`]
        const NORTH_WEST = 1 << 0;
        /// [`BoxDirection::North`]
        const NORTH = 1 << 1;
        /// [`BoxDirection::NorthEast`]
        const NORTH_EAST = 1 << 2;
        /// [`BoxDirection::East`]
        const EAST = 1 << 3;
        /// [`BoxDirection::SouthEast`]
        const SOUTH_EAST = 1 << 4;
        /// [`BoxDirection::South`]
        const SOUTH = 1 << 5;
        /// [`BoxDirection::SouthWest`]
        const SOUTH_WEST = 1 << 6;
        /// [`BoxDirection::West`]
        const WEST = 1 << 7;
    }
}

impl From<BoxDirection> for BoxNeighbors {
    #[inline]
    fn from(dir: BoxDirection) -> Self {
        Self::from_bits_retain(1 << dir.index())
    }
}

impl BoxNeighbors {
    /// The four quadrants around a cell as `(vertical, horizontal, diagonal)` triples.
    const QUADRANTS: [(Self, Self, Self); 4] = [
        (Self::NORTH, Self::WEST, Self::NORTH_WEST),
        (Self::NORTH, Self::EAST, Self::NORTH_EAST),
        (Self::SOUTH, Self::EAST, Self::SOUTH_EAST),
        (Self::SOUTH, Self::WEST, Self::SOUTH_WEST),
    ];

    /// Returns `true` if the neighbor in `dir` is in the set.
    #[must_use]
    #[inline]
    pub fn has(self, dir: BoxDirection) -> bool {
        self.contains(Self::from(dir))
    }

    /// Counts the region corners that touch the center cell.
    ///
    /// Treating the set as "neighbors in the same region", each quadrant
    /// contributes a convex corner when both orthogonal neighbors are absent,
    /// or a concave corner when both are present but the diagonal is not.
    /// Summed over every cell of a region this equals its number of sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::BoxNeighbors;
    ///
    /// // An isolated cell has four convex corners.
    /// assert_eq!(BoxNeighbors::empty().corners(), 4);
    /// // The bend of an L-shape: one concave corner inside the bend and
    /// // one convex corner on the opposite side.
    /// assert_eq!((BoxNeighbors::NORTH | BoxNeighbors::EAST).corners(), 2);
    /// // Filling the diagonal removes the concave corner.
    /// let filled = BoxNeighbors::NORTH | BoxNeighbors::NORTH_EAST | BoxNeighbors::EAST;
    /// assert_eq!(filled.corners(), 1);
    /// ```
    #[must_use]
    pub fn corners(self) -> usize {
        Self::QUADRANTS
            .into_iter()
            .filter(|&(vertical, horizontal, diagonal)| {
                let v = self.contains(vertical);
                let h = self.contains(horizontal);
                (!v && !h) || (v && h && !self.contains(diagonal))
            })
            .count()
    }
}
