//! Best-first search that keeps every optimal predecessor.
//!
//! [`PrioritySearch`] runs A* (or Dijkstra, with the default zero
//! heuristic) over any [`SearchSpace`]. Unlike a plain shortest-path search
//! it records *all* predecessors that reach a state at its best cost, so the
//! [`SearchOutcome`] can enumerate every state and position that lies on
//! some optimal path.
//!
//! # Examples
//!
//! ```
//! use gridkit_core::{Coord, Grid};
//! use gridkit_search::{GridWalk, PrioritySearch};
//!
//! let grid: Grid<char> = "S..\n.#.\n..E".parse()?;
//! let walk = GridWalk::new(&grid, Coord::new(2, 2), |&c| c != '#');
//! let outcome = PrioritySearch::new(&walk).run(Coord::ORIGIN);
//!
//! assert_eq!(outcome.cost(), Some(4));
//! // Both ways around the wall are optimal.
//! assert_eq!(outcome.optimal_positions().len(), 8);
//! # Ok::<(), gridkit_core::GridError>(())
//! ```

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque, hash_map::Entry},
    fmt::Debug,
    hash::Hash,
};

use gridkit_core::{Coord, PositionSet};
use rustc_hash::{FxHashMap, FxHashSet};

/// A weighted state graph that [`PrioritySearch`] can explore.
pub trait SearchSpace {
    /// A search state. Usually a [`Coord`], possibly with extra data such as a facing.
    type State: Copy + Eq + Hash + Debug;

    /// Appends every `(next_state, step_cost)` reachable from `state` to `out`.
    fn successors(&self, state: Self::State, out: &mut Vec<(Self::State, u64)>);

    /// Returns `true` if `state` ends the search.
    fn is_goal(&self, state: Self::State) -> bool;

    /// Lower bound on the remaining cost from `state` to a goal.
    ///
    /// Must never overestimate. Defaults to `0`, which makes the search Dijkstra.
    fn heuristic(&self, state: Self::State) -> u64 {
        let _ = state;
        0
    }

    /// The grid position a state occupies.
    fn position(&self, state: Self::State) -> Coord;
}

/// Counters describing the work done by one search run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the open set and expanded.
    pub expanded: usize,
    /// Entries pushed onto the open set.
    pub queued: usize,
    /// Entries skipped because their state had since been reached more cheaply.
    pub stale: usize,
    /// Entries skipped because they could not beat the best goal cost.
    pub pruned: usize,
}

#[derive(Debug, Clone)]
struct Node<S> {
    position: Coord,
    g: u64,
    predecessors: Vec<S>,
}

#[derive(Debug)]
struct OpenEntry<S> {
    f: u64,
    g: u64,
    seq: u64,
    state: S,
}

impl<S> PartialEq for OpenEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for OpenEntry<S> {}

impl<S> PartialOrd for OpenEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for OpenEntry<S> {
    // Reversed so the max-heap pops the lowest f first, then the oldest entry.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A single search over a [`SearchSpace`].
#[derive(Debug)]
pub struct PrioritySearch<'a, S> {
    space: &'a S,
}

impl<'a, S: SearchSpace> PrioritySearch<'a, S> {
    /// Creates a search over `space`.
    #[must_use]
    pub fn new(space: &'a S) -> Self {
        Self { space }
    }

    /// Explores from `start` until no open entry can improve on the best goal.
    ///
    /// The open set is drained completely, so every predecessor that reaches
    /// a state at its optimal cost is recorded.
    #[must_use]
    pub fn run(&self, start: S::State) -> SearchOutcome<S::State> {
        let space = self.space;
        let mut stats = SearchStats::default();
        let mut table = FxHashMap::default();
        let mut open = BinaryHeap::new();
        let mut seq = 0;

        table.insert(
            start,
            Node {
                position: space.position(start),
                g: 0,
                predecessors: Vec::new(),
            },
        );
        open.push(OpenEntry {
            f: space.heuristic(start),
            g: 0,
            seq,
            state: start,
        });
        stats.queued += 1;

        let mut best: Option<u64> = None;
        let mut goals = Vec::new();
        let mut successors = Vec::new();

        while let Some(entry) = open.pop() {
            let OpenEntry { f, g, state, .. } = entry;
            if table.get(&state).is_some_and(|node: &Node<_>| g > node.g) {
                stats.stale += 1;
                continue;
            }
            if best.is_some_and(|best| f > best) {
                stats.pruned += 1;
                continue;
            }
            stats.expanded += 1;

            if space.is_goal(state) {
                match best {
                    Some(b) if g > b => {}
                    Some(b) if g == b => goals.push(state),
                    _ => {
                        best = Some(g);
                        goals.clear();
                        goals.push(state);
                    }
                }
            }

            successors.clear();
            space.successors(state, &mut successors);
            for &(next, cost) in &successors {
                let next_g = g + cost;
                let requeue = match table.entry(next) {
                    Entry::Vacant(vacant) => {
                        vacant.insert(Node {
                            position: space.position(next),
                            g: next_g,
                            predecessors: vec![state],
                        });
                        true
                    }
                    Entry::Occupied(mut occupied) => {
                        let node = occupied.get_mut();
                        match next_g.cmp(&node.g) {
                            Ordering::Less => {
                                node.g = next_g;
                                node.predecessors.clear();
                                node.predecessors.push(state);
                                true
                            }
                            Ordering::Equal => {
                                if !node.predecessors.contains(&state) {
                                    node.predecessors.push(state);
                                }
                                false
                            }
                            Ordering::Greater => false,
                        }
                    }
                };
                if requeue {
                    seq += 1;
                    open.push(OpenEntry {
                        f: next_g + space.heuristic(next),
                        g: next_g,
                        seq,
                        state: next,
                    });
                    stats.queued += 1;
                }
            }
        }

        log::debug!(
            "search from {start:?} finished: cost={best:?} goals={} expanded={} queued={} stale={} pruned={}",
            goals.len(),
            stats.expanded,
            stats.queued,
            stats.stale,
            stats.pruned,
        );

        SearchOutcome {
            start,
            cost: best,
            goals,
            table,
            stats,
        }
    }
}

/// The result of [`PrioritySearch::run`].
#[derive(Debug, Clone)]
pub struct SearchOutcome<S> {
    start: S,
    cost: Option<u64>,
    goals: Vec<S>,
    table: FxHashMap<S, Node<S>>,
    stats: SearchStats,
}

impl<S: Copy + Eq + Hash> SearchOutcome<S> {
    /// The optimal cost to any goal, or `None` if no goal is reachable.
    #[must_use]
    pub fn cost(&self) -> Option<u64> {
        self.cost
    }

    /// Every goal state reached at the optimal cost, in the order they were expanded.
    #[must_use]
    pub fn goal_states(&self) -> &[S] {
        &self.goals
    }

    /// Every state that lies on at least one optimal path, goals and start included.
    ///
    /// Empty when no goal is reachable.
    #[must_use]
    pub fn optimal_states(&self) -> FxHashSet<S> {
        let mut visited = FxHashSet::default();
        let mut queue: VecDeque<S> = self.goals.iter().copied().collect();
        visited.extend(self.goals.iter().copied());
        while let Some(state) = queue.pop_front() {
            let Some(node) = self.table.get(&state) else {
                continue;
            };
            for &prev in &node.predecessors {
                if visited.insert(prev) {
                    queue.push_back(prev);
                }
            }
        }
        visited
    }

    /// Every grid position covered by at least one optimal path.
    ///
    /// States that share a position (such as different facings on the same
    /// tile) count once.
    #[must_use]
    pub fn optimal_positions(&self) -> PositionSet {
        self.optimal_states()
            .into_iter()
            .filter_map(|state| self.table.get(&state).map(|node| node.position))
            .collect()
    }

    /// One optimal path from the start to the first goal, both inclusive.
    ///
    /// Follows the first recorded predecessor of each state. Empty when no
    /// goal is reachable.
    #[must_use]
    pub fn path(&self) -> Vec<S> {
        let Some(&goal) = self.goals.first() else {
            return Vec::new();
        };
        let mut path = vec![goal];
        let mut seen = FxHashSet::default();
        seen.insert(goal);
        let mut current = goal;
        while current != self.start {
            let Some(&prev) = self
                .table
                .get(&current)
                .and_then(|node| node.predecessors.first())
            else {
                break;
            };
            if !seen.insert(prev) {
                break;
            }
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }

    /// The best known cost from the start to `state`, if it was reached.
    #[must_use]
    pub fn g_score(&self, state: S) -> Option<u64> {
        self.table.get(&state).map(|node| node.g)
    }

    /// Counters for the run that produced this outcome.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Returns the optimal cost from `start` to a goal of `space`.
#[must_use]
pub fn min_cost<S: SearchSpace>(space: &S, start: S::State) -> Option<u64> {
    PrioritySearch::new(space).run(start).cost()
}

/// Returns every position on some optimal path from `start` to a goal of `space`.
#[must_use]
pub fn optimal_positions<S: SearchSpace>(space: &S, start: S::State) -> PositionSet {
    PrioritySearch::new(space).run(start).optimal_positions()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A small explicit graph: `edges[i]` lists `(to, cost)` from node `i`.
    struct Explicit {
        edges: Vec<Vec<(usize, u64)>>,
        goal: usize,
    }

    impl SearchSpace for Explicit {
        type State = usize;

        fn successors(&self, state: usize, out: &mut Vec<(usize, u64)>) {
            out.extend(self.edges[state].iter().copied());
        }

        fn is_goal(&self, state: usize) -> bool {
            state == self.goal
        }

        fn position(&self, state: usize) -> Coord {
            Coord::new(i64::try_from(state).unwrap(), 0)
        }
    }

    fn diamond() -> Explicit {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 both cost 2; 0 -> 3 directly costs 5.
        Explicit {
            edges: vec![
                vec![(1, 1), (2, 1), (3, 5)],
                vec![(3, 1)],
                vec![(3, 1)],
                vec![],
            ],
            goal: 3,
        }
    }

    #[test]
    fn test_equal_cost_predecessors_are_all_kept() {
        let space = diamond();
        let outcome = PrioritySearch::new(&space).run(0);
        assert_eq!(outcome.cost(), Some(2));
        assert_eq!(outcome.goal_states(), &[3]);
        let states = outcome.optimal_states();
        assert_eq!(states.len(), 4);
        assert_eq!(outcome.optimal_positions().len(), 4);
        assert_eq!(outcome.g_score(3), Some(2));
        assert_eq!(outcome.path(), vec![0, 1, 3]);
    }

    #[test]
    fn test_costlier_branch_is_excluded() {
        let mut space = diamond();
        space.edges[2] = vec![(3, 2)];
        let outcome = PrioritySearch::new(&space).run(0);
        assert_eq!(outcome.cost(), Some(2));
        let mut states: Vec<_> = outcome.optimal_states().into_iter().collect();
        states.sort_unstable();
        assert_eq!(states, vec![0, 1, 3]);
    }

    #[test]
    fn test_unreachable_goal() {
        let space = Explicit {
            edges: vec![vec![(1, 1)], vec![(0, 1)], vec![]],
            goal: 2,
        };
        let outcome = PrioritySearch::new(&space).run(0);
        assert_eq!(outcome.cost(), None);
        assert!(outcome.optimal_states().is_empty());
        assert!(outcome.optimal_positions().is_empty());
        assert!(outcome.path().is_empty());
        assert_eq!(outcome.g_score(2), None);
        assert_eq!(min_cost(&space, 0), None);
    }

    #[test]
    fn test_start_is_goal() {
        let space = Explicit {
            edges: vec![vec![(0, 0)]],
            goal: 0,
        };
        let outcome = PrioritySearch::new(&space).run(0);
        assert_eq!(outcome.cost(), Some(0));
        assert_eq!(outcome.path(), vec![0]);
        assert_eq!(optimal_positions(&space, 0).len(), 1);
    }

    #[test]
    fn test_zero_cost_cycle_terminates() {
        let space = Explicit {
            edges: vec![vec![(1, 0)], vec![(0, 0), (2, 3)], vec![]],
            goal: 2,
        };
        let outcome = PrioritySearch::new(&space).run(0);
        assert_eq!(outcome.cost(), Some(3));
        assert_eq!(outcome.optimal_states().len(), 3);
        assert_eq!(outcome.path(), vec![0, 1, 2]);
    }

    #[test]
    fn test_stats_are_counted() {
        let space = diamond();
        let stats = PrioritySearch::new(&space).run(0).stats();
        assert!(stats.expanded >= 4);
        assert_eq!(
            stats.queued,
            stats.expanded + stats.stale + stats.pruned
        );
    }
}
