//! Bounds-checked rectangular grids.
//!
//! [`Grid`] stores its cells row-major in a single vector. Every accessor
//! that takes a [`Coord`] checks it against `[0, width) x [0, height)` and
//! reports [`GridError::OutOfBounds`] instead of clamping.
//!
//! # Examples
//!
//! ```
//! use gridkit_core::{Coord, Direction, Grid};
//!
//! let mut grid: Grid<char> = "abc\ndef".parse()?;
//! assert_eq!((grid.width(), grid.height()), (3, 2));
//! assert_eq!(grid[Coord::new(1, 1)], 'e');
//!
//! grid.set(Coord::new(0, 0), 'z')?;
//! assert_eq!(grid.find_first(&'z'), Some(Coord::ORIGIN));
//! assert!(grid.get(Coord::new(3, 0)).is_err());
//!
//! let rotated = grid.rotate_clockwise();
//! assert_eq!(rotated.to_string(), "dz\neb\nfc");
//! # Ok::<(), gridkit_core::GridError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::{Enumerate, FusedIterator},
    ops::{Index, IndexMut},
    slice,
    str::FromStr,
};

use crate::{
    coord::Coord,
    direction::{Direction, Heading},
    error::GridError,
};

/// A rectangular 2D container of cells.
///
/// Equality compares dimensions and every cell. [`Clone`] produces a deep,
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<V> {
    width: usize,
    height: usize,
    cells: Vec<V>,
}

impl<V> Grid<V> {
    /// Creates a grid whose cells are produced by `f` in row-major order.
    ///
    /// A grid with zero width or zero height is normalized to `0x0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{Coord, Grid};
    ///
    /// let grid = Grid::from_fn(10, 5, |c| c.x * c.y);
    /// assert_eq!(grid[Coord::new(9, 4)], 36);
    /// ```
    #[must_use]
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(Coord) -> V,
    {
        let (width, height) = normalize(width, height);
        let cells = (0..width * height)
            .map(|i| f(coord_at(i, width)))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from rows, checking that they form a rectangle.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] if there are no rows or the first row is
    /// empty, and [`GridError::RaggedRow`] if any row's length differs from
    /// the first.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(values);
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        match width {
            Some(width) if width > 0 => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(GridError::Empty),
        }
    }

    /// Number of columns.
    #[must_use]
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `coord` lies inside the grid.
    #[must_use]
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn checked_index(&self, coord: Coord) -> Result<usize, GridError> {
        self.index_of(coord).ok_or(GridError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })
    }

    /// Returns the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    #[inline]
    pub fn get(&self, coord: Coord) -> Result<&V, GridError> {
        let i = self.checked_index(coord)?;
        Ok(&self.cells[i])
    }

    /// Returns the cell at `coord` shifted by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the shifted coordinate is outside the grid.
    #[inline]
    pub fn get_offset(&self, coord: Coord, dx: i64, dy: i64) -> Result<&V, GridError> {
        self.get(coord.translate(dx, dy))
    }

    /// Returns a mutable reference to the cell at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    #[inline]
    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut V, GridError> {
        let i = self.checked_index(coord)?;
        Ok(&mut self.cells[i])
    }

    /// Stores `value` at `coord`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Coord, value: V) -> Result<V, GridError> {
        self.get_mut(coord)
            .map(|cell| std::mem::replace(cell, value))
    }

    /// Iterates over `(coord, &value)` pairs in row-major order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.cells.iter().enumerate(),
            width: self.width,
        }
    }

    /// Iterates over `(coord, &mut value)` pairs in row-major order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Coord, &mut V)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, v)| (coord_at(i, width), v))
    }

    /// Iterates over every coordinate in row-major order.
    pub fn positions(&self) -> impl DoubleEndedIterator<Item = Coord> + ExactSizeIterator + use<V> {
        let width = self.width;
        (0..self.cells.len()).map(move |i| coord_at(i, width))
    }

    /// Iterates over cell values in row-major order.
    pub fn values(&self) -> slice::Iter<'_, V> {
        self.cells.iter()
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[V]> {
        // `max(1)` keeps `chunks` valid for the empty grid.
        self.cells.chunks(self.width.max(1))
    }

    /// Returns every coordinate whose value satisfies `pred`, row-major.
    pub fn find_all<F>(&self, mut pred: F) -> Vec<Coord>
    where
        F: FnMut(&V) -> bool,
    {
        self.iter()
            .filter(|(_, v)| pred(v))
            .map(|(c, _)| c)
            .collect()
    }

    /// Returns the first coordinate, row-major, holding `value`.
    #[must_use]
    pub fn find_first(&self, value: &V) -> Option<Coord>
    where
        V: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(c, _)| c)
    }

    /// Collects up to `max_len` values starting at `origin` (inclusive) and
    /// walking in `heading`, stopping early at the grid edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit_core::{BoxDirection, Coord, Grid};
    ///
    /// let grid: Grid<char> = "XMAS\n....".parse()?;
    /// let word: String = grid
    ///     .ray(Coord::ORIGIN, BoxDirection::East, 4)
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(word, "XMAS");
    /// assert_eq!(grid.ray(Coord::ORIGIN, BoxDirection::North, 4).len(), 1);
    /// # Ok::<(), gridkit_core::GridError>(())
    /// ```
    pub fn ray<H: Heading>(&self, origin: Coord, heading: H, max_len: usize) -> Vec<&V> {
        let delta = heading.delta();
        std::iter::successors(Some(origin), |&c| Some(c + delta))
            .take(max_len)
            .map_while(|c| self.get(c).ok())
            .collect()
    }

    /// Orthogonal neighbors of `coord` that lie inside the grid.
    pub fn cardinal_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.cardinal_neighbors().filter(|&c| self.contains(c))
    }

    /// Surrounding neighbors of `coord` that lie inside the grid.
    pub fn box_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        coord.box_neighbors().filter(|&c| self.contains(c))
    }

    /// The neighbor of `coord` in `heading`, if it lies inside the grid.
    #[must_use]
    pub fn neighbor<H: Heading>(&self, coord: Coord, heading: H) -> Option<Coord> {
        let next = coord.step(heading);
        self.contains(next).then_some(next)
    }

    /// Cardinal directions from `coord` whose neighbor is inside the grid.
    pub fn open_directions(&self, coord: Coord) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&dir| self.contains(coord.step(dir)))
    }

    /// Builds a new grid by applying `f` to every cell.
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Coord, &V) -> U,
    {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|(c, v)| f(c, v)).collect(),
        }
    }

    /// Consumes the grid and returns its cells in row-major order.
    #[must_use]
    pub fn into_cells(self) -> Vec<V> {
        self.cells
    }
}

impl<V: Clone> Grid<V> {
    /// Creates a grid with every cell set to `value`.
    ///
    /// A grid with zero width or zero height is normalized to `0x0`.
    #[must_use]
    pub fn filled(width: usize, height: usize, value: V) -> Self {
        let (width, height) = normalize(width, height);
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    /// Returns the cells column by column.
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<V>> {
        (0..self.width)
            .map(|x| {
                self.cells
                    .iter()
                    .skip(x)
                    .step_by(self.width)
                    .cloned()
                    .collect()
            })
            .collect()
    }

    /// Returns a copy with the cell at `coord` replaced by `value`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn with(&self, coord: Coord, value: V) -> Result<Self, GridError> {
        let mut copy = self.clone();
        copy.set(coord, value)?;
        Ok(copy)
    }

    /// Returns a copy with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.height, self.width, |c| self[Coord::new(c.y, c.x)].clone())
    }

    /// Returns a copy rotated a quarter turn to the right.
    ///
    /// The first row of the result is the first column read bottom to top.
    #[must_use]
    pub fn rotate_clockwise(&self) -> Self {
        let last_row = to_i64(self.height) - 1;
        Self::from_fn(self.height, self.width, |c| {
            self[Coord::new(c.y, last_row - c.x)].clone()
        })
    }

    /// Returns a copy rotated a quarter turn to the left.
    ///
    /// The first row of the result is the last column read top to bottom.
    #[must_use]
    pub fn rotate_counter_clockwise(&self) -> Self {
        let last_column = to_i64(self.width) - 1;
        Self::from_fn(self.height, self.width, |c| {
            self[Coord::new(last_column - c.y, c.x)].clone()
        })
    }

    /// Returns a copy surrounded by a one-cell border of `value`.
    ///
    /// The result is two cells wider and two cells taller.
    #[must_use]
    pub fn wrap_border(&self, value: V) -> Self {
        Self::from_fn(self.width + 2, self.height + 2, |c| {
            self.get(c.translate(-1, -1))
                .map_or_else(|_| value.clone(), Clone::clone)
        })
    }
}

impl<V> Index<Coord> for Grid<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    #[track_caller]
    fn index(&self, coord: Coord) -> &Self::Output {
        match self.get(coord) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<V> IndexMut<Coord> for Grid<V> {
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    #[track_caller]
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        match self.get_mut(coord) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<'a, V> IntoIterator for &'a Grid<V> {
    type Item = (Coord, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Display> Display for Grid<V> {
    /// Writes one line per row with no separator and no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for value in row {
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid<char> {
    type Err = GridError;

    /// Parses one row per non-blank line, trimming surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::chars),
        )
    }
}

/// Iterator over `(coord, &value)` pairs of a [`Grid`], in row-major order.
///
/// Created by [`Grid::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: Enumerate<slice::Iter<'a, V>>,
    width: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Coord, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (i, v) = self.inner.next()?;
        Some((coord_at(i, self.width), v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let (i, v) = self.inner.next_back()?;
        Some((coord_at(i, self.width), v))
    }
}

impl<V> FusedIterator for Iter<'_, V> {}
impl<V> ExactSizeIterator for Iter<'_, V> {}

#[expect(clippy::cast_possible_wrap)]
#[inline]
fn to_i64(n: usize) -> i64 {
    n as i64
}

fn normalize(width: usize, height: usize) -> (usize, usize) {
    if width == 0 || height == 0 {
        (0, 0)
    } else {
        (width, height)
    }
}

#[inline]
fn coord_at(index: usize, width: usize) -> Coord {
    Coord::new(to_i64(index % width), to_i64(index / width))
}
