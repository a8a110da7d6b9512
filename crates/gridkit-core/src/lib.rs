//! Core grid data structures for puzzle solving.
//!
//! This crate provides the coordinate, direction and grid types that the
//! search and region algorithms in `gridkit-search` operate on.
//!
//! # Overview
//!
//! 1. **Geometry** - Points on an integer plane
//!    - [`coord`]: [`Coord`], an immutable `(x, y)` value with stepping and distances
//!    - [`direction`]: the [`Direction`] (4-neighbor) and [`BoxDirection`]
//!      (8-neighbor) schemes behind the [`Heading`] trait, and the
//!      [`BoxNeighbors`] bit set used for corner detection
//!
//! 2. **Containers** - Cells addressed by coordinate
//!    - [`grid`]: [`Grid`], a bounds-checked rectangle of cells
//!    - [`wrapping_grid`]: [`WrappingGrid`], a grid tiled infinitely in both directions
//!    - [`position_set`]: [`PositionSet`] and [`PositionMap`], hashed by value
//!
//! Out-of-range access is reported through [`GridError`].
//!
//! # Examples
//!
//! ```
//! use gridkit_core::{BoxDirection, Coord, Grid};
//!
//! let grid: Grid<char> = "XMAS\nMM..\nA.A.\nS..S".parse()?;
//! let hits = grid
//!     .find_all(|&c| c == 'X')
//!     .into_iter()
//!     .flat_map(|start| BoxDirection::ALL.map(|dir| grid.ray(start, dir, 4)))
//!     .filter(|word| word.iter().copied().eq(['X', 'M', 'A', 'S'].iter()))
//!     .count();
//! assert_eq!(hits, 3);
//! # Ok::<(), gridkit_core::GridError>(())
//! ```

pub mod coord;
pub mod direction;
pub mod error;
pub mod grid;
pub mod position_set;
pub mod wrapping_grid;

pub use self::{
    coord::Coord,
    direction::{BoxDirection, BoxNeighbors, Direction, Heading},
    error::GridError,
    grid::Grid,
    position_set::{PositionMap, PositionSet},
    wrapping_grid::WrappingGrid,
};
