//! Integer grid coordinates.

use crate::direction::{BoxDirection, BoxNeighbors, Direction, Heading};

/// A position on an integer 2D plane.
///
/// `x` grows to the east (right) and `y` grows to the south (down), matching
/// the row-major layout of [`Grid`](crate::Grid). Coordinates are plain
/// values: every transform returns a new coordinate.
///
/// Coordinates are ordered by `x` first, then `y`.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coord, Direction};
///
/// let p = Coord::new(3, 4);
/// assert_eq!(p.step(Direction::North), Coord::new(3, 3));
/// assert_eq!(p.manhattan_distance(Coord::ORIGIN), 7);
/// assert_eq!(p.to_string(), "3,4");
/// ```
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Add,
    derive_more::Sub,
    derive_more::Display,
)]
#[display("{x},{y}")]
pub struct Coord {
    /// Column, growing eastward.
    pub x: i64,
    /// Row, growing southward.
    pub y: i64,
}

impl Coord {
    /// The coordinate `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Creates a coordinate.
    #[must_use]
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns this coordinate shifted by `(dx, dy)`.
    #[must_use]
    #[inline]
    pub const fn translate(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Returns the adjacent coordinate in the given direction.
    #[must_use]
    #[inline]
    pub fn step<H: Heading>(self, heading: H) -> Self {
        self + heading.delta()
    }

    /// Returns the coordinate `n` steps away in the given direction.
    #[must_use]
    #[inline]
    pub fn step_by<H: Heading>(self, heading: H, n: i64) -> Self {
        self + heading.delta().stretch(n)
    }

    /// Multiplies both components by `len`.
    #[must_use]
    #[inline]
    pub const fn stretch(self, len: i64) -> Self {
        Self::new(self.x * len, self.y * len)
    }

    /// Straight-line distance to `other`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    /// Taxicab distance to `other`.
    #[must_use]
    #[inline]
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbors, in [`Direction::ALL`] order.
    ///
    /// No bounds are applied; use [`Grid::cardinal_neighbors`] to keep only
    /// coordinates inside a grid.
    ///
    /// [`Grid::cardinal_neighbors`]: crate::Grid::cardinal_neighbors
    pub fn cardinal_neighbors(self) -> impl Iterator<Item = Self> {
        Direction::ALL.into_iter().map(move |dir| self.step(dir))
    }

    /// The eight surrounding neighbors, in [`BoxDirection::ALL`] order.
    pub fn box_neighbors(self) -> impl Iterator<Item = Self> {
        BoxDirection::ALL.into_iter().map(move |dir| self.step(dir))
    }

    /// Returns the set of box directions whose neighbor satisfies `pred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{BoxNeighbors, Coord};
    ///
    /// let present = Coord::new(1, 1).box_neighbors_where(|c| c.y == 0);
    /// assert_eq!(
    ///     present,
    ///     BoxNeighbors::NORTH_WEST | BoxNeighbors::NORTH | BoxNeighbors::NORTH_EAST
    /// );
    /// ```
    pub fn box_neighbors_where<F>(self, mut pred: F) -> BoxNeighbors
    where
        F: FnMut(Self) -> bool,
    {
        BoxDirection::ALL
            .into_iter()
            .filter(|&dir| pred(self.step(dir)))
            .map(BoxNeighbors::from)
            .collect()
    }
}

impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_translate_and_stretch() {
        let p = Coord::new(3, 4);
        assert_eq!(p + Coord::new(6, -1), Coord::new(9, 3));
        assert_eq!(p.translate(0, -5), Coord::new(3, -1));
        assert_eq!(p.stretch(2), Coord::new(6, 8));
        assert_eq!(p - p, Coord::ORIGIN);
    }

    #[test]
    fn test_distances() {
        let a = Coord::new(6, 8);
        let b = Coord::new(9, 12);
        assert!((a.euclidean_distance(b) - 5.0).abs() < 1e-9);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(b.manhattan_distance(a), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(9, 8).to_string(), "9,8");
        assert_eq!(Coord::new(-1, 0).to_string(), "-1,0");
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]
        );
    }

    #[test]
    fn test_neighbor_order() {
        let p = Coord::new(0, 0);
        let cardinal: Vec<_> = p.cardinal_neighbors().collect();
        assert_eq!(
            cardinal,
            vec![
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(-1, 0),
                Coord::new(0, -1)
            ]
        );
        assert_eq!(p.box_neighbors().count(), 8);
        assert!(p.box_neighbors().all(|q| q != p));
    }

    #[test]
    fn test_step_by() {
        assert_eq!(
            Coord::ORIGIN.step_by(BoxDirection::SouthWest, 3),
            Coord::new(-3, 3)
        );
    }

    proptest! {
        #[test]
        fn test_step_then_opposite_returns(x in -1000i64..1000, y in -1000i64..1000) {
            let p = Coord::new(x, y);
            for dir in Direction::ALL {
                prop_assert_eq!(p.step(dir).step(dir.opposite()), p);
            }
            for dir in BoxDirection::ALL {
                prop_assert_eq!(p.step(dir).step(dir.opposite()), p);
            }
        }

        #[test]
        fn test_neighbors_are_one_step_away(x in -1000i64..1000, y in -1000i64..1000) {
            let p = Coord::new(x, y);
            for q in p.cardinal_neighbors() {
                prop_assert_eq!(p.manhattan_distance(q), 1);
            }
        }
    }
}
