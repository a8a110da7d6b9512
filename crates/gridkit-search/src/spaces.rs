//! Ready-made search spaces over a [`Grid`].

use std::fmt;

use gridkit_core::{Coord, Direction, Grid};

use crate::search::SearchSpace;

/// Four-directional walking with unit step cost.
///
/// A cell can be entered when `passable` returns `true` for its value. The
/// start cell is never checked. The heuristic is the Manhattan distance to
/// the goal.
#[derive(Debug, Clone)]
pub struct GridWalk<'a, V, F> {
    grid: &'a Grid<V>,
    goal: Coord,
    passable: F,
}

impl<'a, V, F> GridWalk<'a, V, F> {
    /// Creates a walk over `grid` towards `goal`.
    #[must_use]
    pub fn new(grid: &'a Grid<V>, goal: Coord, passable: F) -> Self
    where
        F: Fn(&V) -> bool,
    {
        Self {
            grid,
            goal,
            passable,
        }
    }
}

impl<V, F> SearchSpace for GridWalk<'_, V, F>
where
    F: Fn(&V) -> bool,
{
    type State = Coord;

    fn successors(&self, state: Coord, out: &mut Vec<(Coord, u64)>) {
        out.extend(
            self.grid
                .cardinal_neighbors(state)
                .filter(|&next| (self.passable)(&self.grid[next]))
                .map(|next| (next, 1)),
        );
    }

    fn is_goal(&self, state: Coord) -> bool {
        state == self.goal
    }

    fn heuristic(&self, state: Coord) -> u64 {
        state.manhattan_distance(self.goal)
    }

    fn position(&self, state: Coord) -> Coord {
        state
    }
}

/// A position together with the direction it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facing {
    /// Where the walker stands.
    pub position: Coord,
    /// Which way it faces.
    pub direction: Direction,
}

impl Facing {
    /// Creates a facing state.
    #[must_use]
    pub const fn new(position: Coord, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.direction)
    }
}

/// Walking where turning in place has its own cost.
///
/// From `Facing { position, direction }` the walker may step forward for
/// [`forward_cost`](Self::forward_cost) when the next cell is passable, or
/// turn a quarter in either direction for [`turn_cost`](Self::turn_cost).
/// Any facing on the goal cell is a goal.
///
/// # Examples
///
/// ```
/// use gridkit_core::{Coord, Direction, Grid};
/// use gridkit_search::{Facing, FacingWalk, PrioritySearch};
///
/// let grid: Grid<char> = "#####\n#..E#\n#.#.#\n#S..#\n#####".parse()?;
/// let start = Facing::new(Coord::new(1, 3), Direction::East);
///
/// let walk = FacingWalk::new(&grid, Coord::new(3, 1), |&c| c != '#');
/// let outcome = PrioritySearch::new(&walk).run(start);
/// assert_eq!(outcome.cost(), Some(1004));
/// assert_eq!(outcome.optimal_positions().len(), 5);
///
/// let free_turns = FacingWalk::new(&grid, Coord::new(3, 1), |&c| c != '#').turn_cost(0);
/// let outcome = PrioritySearch::new(&free_turns).run(start);
/// assert_eq!(outcome.cost(), Some(4));
/// assert_eq!(outcome.optimal_positions().len(), 8);
/// # Ok::<(), gridkit_core::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FacingWalk<'a, V, F> {
    grid: &'a Grid<V>,
    goal: Coord,
    passable: F,
    forward_cost: u64,
    turn_cost: u64,
}

impl<'a, V, F> FacingWalk<'a, V, F> {
    /// Default cost of one step forward.
    pub const DEFAULT_FORWARD_COST: u64 = 1;
    /// Default cost of one quarter turn.
    pub const DEFAULT_TURN_COST: u64 = 1000;

    /// Creates a walk over `grid` towards `goal` with the default costs.
    #[must_use]
    pub fn new(grid: &'a Grid<V>, goal: Coord, passable: F) -> Self
    where
        F: Fn(&V) -> bool,
    {
        Self {
            grid,
            goal,
            passable,
            forward_cost: Self::DEFAULT_FORWARD_COST,
            turn_cost: Self::DEFAULT_TURN_COST,
        }
    }

    /// Sets the cost of one step forward.
    #[must_use]
    pub fn forward_cost(mut self, cost: u64) -> Self {
        self.forward_cost = cost;
        self
    }

    /// Sets the cost of one quarter turn.
    #[must_use]
    pub fn turn_cost(mut self, cost: u64) -> Self {
        self.turn_cost = cost;
        self
    }
}

impl<V, F> SearchSpace for FacingWalk<'_, V, F>
where
    F: Fn(&V) -> bool,
{
    type State = Facing;

    fn successors(&self, state: Facing, out: &mut Vec<(Facing, u64)>) {
        let Facing {
            position,
            direction,
        } = state;
        if let Some(ahead) = self.grid.neighbor(position, direction)
            && (self.passable)(&self.grid[ahead])
        {
            out.push((Facing::new(ahead, direction), self.forward_cost));
        }
        out.push((
            Facing::new(position, direction.turn_clockwise()),
            self.turn_cost,
        ));
        out.push((
            Facing::new(position, direction.turn_counter_clockwise()),
            self.turn_cost,
        ));
    }

    fn is_goal(&self, state: Facing) -> bool {
        state.position == self.goal
    }

    fn heuristic(&self, state: Facing) -> u64 {
        state.position.manhattan_distance(self.goal) * self.forward_cost
    }

    fn position(&self, state: Facing) -> Coord {
        state.position
    }
}
