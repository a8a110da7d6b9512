//! A grid that tiles infinitely in both directions.

use crate::{coord::Coord, error::GridError, grid::Grid};

/// A [`Grid`] addressed modulo its dimensions, so every coordinate is valid.
///
/// Negative coordinates wrap with Euclidean remainder: `(-1, 0)` resolves to
/// the last column of the first row. Writes through [`set`](Self::set) are
/// visible at every tiling of the same cell.
///
/// The wrapper also tracks the smallest and largest raw coordinate written,
/// starting from the base extent, so callers can later [`slice`](Self::slice)
/// out exactly the region they touched.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coord, Grid, WrappingGrid};
///
/// let base: Grid<char> = "ab\ncd".parse()?;
/// let mut tiles = WrappingGrid::new(base)?;
/// assert_eq!(*tiles.get(Coord::new(-1, -1)), 'd');
/// assert_eq!(*tiles.get(Coord::new(4, 5)), 'c');
///
/// tiles.set(Coord::new(3, 0), 'z');
/// assert_eq!(tiles.touched(), (Coord::new(0, 0), Coord::new(3, 1)));
/// assert_eq!(tiles.slice(Coord::new(0, 0), Coord::new(3, 0)).to_string(), "azaz");
/// # Ok::<(), gridkit_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappingGrid<V> {
    base: Grid<V>,
    min: Coord,
    max: Coord,
}

impl<V> WrappingGrid<V> {
    /// Wraps `base`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if `base` has no cells.
    pub fn new(base: Grid<V>) -> Result<Self, GridError> {
        if base.is_empty() {
            return Err(GridError::Empty);
        }
        let max = Coord::new(to_i64(base.width()) - 1, to_i64(base.height()) - 1);
        Ok(Self {
            base,
            min: Coord::ORIGIN,
            max,
        })
    }

    fn resolve(&self, coord: Coord) -> Coord {
        Coord::new(
            coord.x.rem_euclid(to_i64(self.base.width())),
            coord.y.rem_euclid(to_i64(self.base.height())),
        )
    }

    /// Returns the cell that `coord` resolves to.
    #[must_use]
    pub fn get(&self, coord: Coord) -> &V {
        &self.base[self.resolve(coord)]
    }

    /// Stores `value` in the cell that `coord` resolves to and returns the
    /// previous value.
    pub fn set(&mut self, coord: Coord, value: V) -> V {
        self.min = Coord::new(self.min.x.min(coord.x), self.min.y.min(coord.y));
        self.max = Coord::new(self.max.x.max(coord.x), self.max.y.max(coord.y));
        let cell = self.resolve(coord);
        std::mem::replace(&mut self.base[cell], value)
    }

    /// Smallest and largest raw coordinates written so far, including the
    /// base extent.
    #[must_use]
    pub fn touched(&self) -> (Coord, Coord) {
        (self.min, self.max)
    }

    /// The underlying single tile.
    #[must_use]
    pub fn base(&self) -> &Grid<V> {
        &self.base
    }

    /// Consumes the wrapper and returns the underlying tile.
    #[must_use]
    pub fn into_base(self) -> Grid<V> {
        self.base
    }
}

impl<V: Clone> WrappingGrid<V> {
    /// Copies the inclusive rectangle `min..=max` into a plain grid.
    ///
    /// The cell at `(dx, dy)` of the result is the cell that
    /// `min + (dx, dy)` resolves to. An inverted rectangle yields an empty grid.
    #[must_use]
    pub fn slice(&self, min: Coord, max: Coord) -> Grid<V> {
        let width = extent(min.x, max.x);
        let height = extent(min.y, max.y);
        Grid::from_fn(width, height, |offset| self.get(min + offset).clone())
    }

    /// Copies the rectangle reported by [`touched`](Self::touched).
    #[must_use]
    pub fn slice_touched(&self) -> Grid<V> {
        let (min, max) = self.touched();
        self.slice(min, max)
    }
}

#[expect(clippy::cast_possible_wrap)]
fn to_i64(n: usize) -> i64 {
    n as i64
}

fn extent(from: i64, to: i64) -> usize {
    usize::try_from(to - from + 1).unwrap_or(0)
}
