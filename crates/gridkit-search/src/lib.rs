//! Search and region algorithms over `gridkit-core` grids.
//!
//! # Overview
//!
//! - [`search`]: [`PrioritySearch`], an A* / Dijkstra engine over any
//!   [`SearchSpace`] that keeps every optimal predecessor, so all optimal
//!   paths can be recovered at once
//! - [`spaces`]: ready-made spaces, [`GridWalk`] for plain 4-directional
//!   movement and [`FacingWalk`] where turning costs extra
//! - [`region`]: flood fill into [`Region`]s with area, perimeter and side counts
//! - [`forest`]: [`PositionForest`], a union-find over coordinates with OR-merged payloads
//! - [`edges`]: [`first_cut`], which finds the block that disconnects two grid corners
//!
//! # Examples
//!
//! ```
//! use gridkit_core::{Coord, Grid};
//! use gridkit_search::{GridWalk, min_cost};
//!
//! let grid: Grid<char> = "..#\n#..\n...".parse()?;
//! let walk = GridWalk::new(&grid, Coord::new(2, 2), |&c| c == '.');
//! assert_eq!(min_cost(&walk, Coord::ORIGIN), Some(4));
//! # Ok::<(), gridkit_core::GridError>(())
//! ```

pub mod edges;
pub mod forest;
pub mod region;
pub mod search;
pub mod spaces;

pub use self::{
    edges::{Edges, first_cut},
    forest::PositionForest,
    region::{Region, RegionFinder, regions},
    search::{
        PrioritySearch, SearchOutcome, SearchSpace, SearchStats, min_cost, optimal_positions,
    },
    spaces::{Facing, FacingWalk, GridWalk},
};
