//! Flood fill of 4-connected regions with perimeter and corner counts.
//!
//! A [`RegionFinder`] remembers which cells earlier fills have claimed, so
//! repeated fills partition the grid into disjoint [`Region`]s.
//!
//! # Examples
//!
//! ```
//! use gridkit_core::Grid;
//! use gridkit_search::regions;
//!
//! let grid: Grid<char> = "AAAA\nBBCD\nBBCC\nEEEC".parse()?;
//! let found = regions(&grid);
//! assert_eq!(found.len(), 5);
//!
//! let fence: usize = found.iter().map(|r| r.area() * r.perimeter()).sum();
//! let sides: usize = found.iter().map(|r| r.area() * r.corners()).sum();
//! assert_eq!((fence, sides), (140, 80));
//! # Ok::<(), gridkit_core::GridError>(())
//! ```

use gridkit_core::{Coord, Grid, GridError, PositionSet};

/// A connected set of cells found by a flood fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    origin: Coord,
    cells: PositionSet,
    perimeter: usize,
}

impl Region {
    /// The cell the fill started from.
    #[must_use]
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// The value this region was filled with, read from its origin in `grid`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `grid` does not contain the origin.
    pub fn value_at<'g, V>(&self, grid: &'g Grid<V>) -> Result<&'g V, GridError> {
        grid.get(self.origin)
    }

    /// The member cells.
    #[must_use]
    pub fn cells(&self) -> &PositionSet {
        &self.cells
    }

    /// Number of member cells.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of cell edges between a member and a non-member, the grid
    /// boundary included.
    #[must_use]
    pub fn perimeter(&self) -> usize {
        self.perimeter
    }

    /// Number of corners of the region's outline, which equals its number of
    /// straight sides.
    ///
    /// Holes count too: their outlines contribute their own corners.
    #[must_use]
    pub fn corners(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                cell.box_neighbors_where(|n| self.cells.contains(n))
                    .corners()
            })
            .sum()
    }
}

/// Flood filler that never assigns a cell to two regions.
#[derive(Debug, Clone)]
pub struct RegionFinder<'a, V> {
    grid: &'a Grid<V>,
    assigned: Grid<bool>,
}

impl<'a, V> RegionFinder<'a, V> {
    /// Creates a finder with every cell unassigned.
    #[must_use]
    pub fn new(grid: &'a Grid<V>) -> Self {
        Self {
            grid,
            assigned: Grid::filled(grid.width(), grid.height(), false),
        }
    }

    /// Returns `true` if an earlier fill claimed `coord`.
    ///
    /// Coordinates outside the grid are never assigned.
    #[must_use]
    pub fn is_assigned(&self, coord: Coord) -> bool {
        self.assigned.get(coord).is_ok_and(|&b| b)
    }

    /// Fills the region of cells equal to the value at `start`.
    ///
    /// Returns `None` if `start` is outside the grid or already assigned.
    pub fn fill(&mut self, start: Coord) -> Option<Region>
    where
        V: PartialEq,
    {
        self.fill_by(start, |a, b| a == b)
    }

    /// Fills the region of cells for which `same(start_value, cell_value)` holds.
    ///
    /// Walks 4-connected neighbors with an explicit stack. Returns `None` if
    /// `start` is outside the grid or already assigned.
    pub fn fill_by<F>(&mut self, start: Coord, mut same: F) -> Option<Region>
    where
        F: FnMut(&V, &V) -> bool,
    {
        let grid = self.grid;
        let value = grid.get(start).ok()?;
        if self.is_assigned(start) {
            return None;
        }

        let mut cells = PositionSet::new();
        let mut perimeter = 0;
        let mut stack = vec![start];
        self.assigned[start] = true;
        while let Some(cell) = stack.pop() {
            cells.insert(cell);
            let mut matching = 0;
            for next in grid.cardinal_neighbors(cell) {
                if !same(value, &grid[next]) {
                    continue;
                }
                matching += 1;
                if !self.assigned[next] {
                    self.assigned[next] = true;
                    stack.push(next);
                }
            }
            perimeter += 4 - matching;
        }

        log::trace!(
            "region at {start}: area={} perimeter={perimeter}",
            cells.len()
        );
        Some(Region {
            origin: start,
            cells,
            perimeter,
        })
    }
}

/// Partitions `grid` into regions of equal values, in row-major order of
/// their first cell.
pub fn regions<V: PartialEq>(grid: &Grid<V>) -> Vec<Region> {
    let mut finder = RegionFinder::new(grid);
    grid.positions()
        .filter_map(|coord| finder.fill(coord))
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn parse(s: &str) -> Grid<char> {
        s.parse().unwrap()
    }

    fn prices(grid: &Grid<char>) -> (usize, usize) {
        let found = regions(grid);
        (
            found.iter().map(|r| r.area() * r.perimeter()).sum(),
            found.iter().map(|r| r.area() * r.corners()).sum(),
        )
    }

    #[test]
    fn test_single_cell_region() {
        let grid = parse("A");
        let mut finder = RegionFinder::new(&grid);
        let region = finder.fill(Coord::ORIGIN).unwrap();
        assert_eq!(region.area(), 1);
        assert_eq!(region.perimeter(), 4);
        assert_eq!(region.corners(), 4);
        assert_eq!(region.value_at(&grid), Ok(&'A'));
    }

    #[test]
    fn test_uniform_grid_is_one_region() {
        let grid = Grid::filled(7, 3, 0_u8);
        let found = regions(&grid);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].area(), 21);
        assert_eq!(found[0].perimeter(), 2 * (7 + 3));
        assert_eq!(found[0].corners(), 4);
    }

    #[test]
    fn test_fill_skips_assigned_and_outside() {
        let grid = parse("AB\nAB");
        let mut finder = RegionFinder::new(&grid);
        let a = finder.fill(Coord::new(0, 1)).unwrap();
        assert_eq!(a.origin(), Coord::new(0, 1));
        assert_eq!(a.area(), 2);
        assert!(finder.is_assigned(Coord::ORIGIN));
        assert!(!finder.is_assigned(Coord::new(1, 0)));
        assert!(finder.fill(Coord::ORIGIN).is_none());
        assert!(finder.fill(Coord::new(5, 5)).is_none());
        assert!(!finder.is_assigned(Coord::new(5, 5)));
    }

    #[test]
    fn test_fill_by_custom_predicate() {
        let grid = parse("ab1\ncd2");
        let mut finder = RegionFinder::new(&grid);
        let letters = finder
            .fill_by(Coord::ORIGIN, |_, v| v.is_ascii_alphabetic())
            .unwrap();
        assert_eq!(letters.area(), 4);
        assert_eq!(letters.perimeter(), 8);
        assert_eq!(letters.corners(), 4);
    }

    #[test]
    fn test_region_with_hole() {
        let (fence, sides) = prices(&parse("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO"));
        assert_eq!(fence, 772);
        assert_eq!(sides, 436);
    }

    #[test]
    fn test_e_shape_sides() {
        let (_, sides) = prices(&parse("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE"));
        assert_eq!(sides, 236);
    }

    #[test]
    fn test_diagonal_touching_holes_sides() {
        let (_, sides) = prices(&parse("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA"));
        assert_eq!(sides, 368);
    }

    proptest! {
        #[test]
        fn test_regions_partition_grid(cells in prop::collection::vec(0u8..3, 1..=36), width in 1usize..=6) {
            let height = cells.len().div_ceil(width);
            let grid = Grid::from_fn(width, height, |c| {
                let i = usize::try_from(c.y).unwrap() * width + usize::try_from(c.x).unwrap();
                cells.get(i).copied().unwrap_or(0)
            });
            let found = regions(&grid);
            let total: usize = found.iter().map(Region::area).sum();
            prop_assert_eq!(total, grid.len());
            let mut seen = PositionSet::new();
            for region in &found {
                for cell in region.cells().iter() {
                    prop_assert!(seen.insert(cell));
                }
                prop_assert!(region.corners() >= 4);
                prop_assert!(region.corners() % 2 == 0);
            }
        }
    }
}
