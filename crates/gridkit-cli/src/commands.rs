//! Subcommand implementations. Each returns the text to print.

use gridkit_core::{BoxDirection, Coord, Direction, Grid};
use gridkit_graph::{Graph, maximum_clique, triangles};
use gridkit_search::{Facing, FacingWalk, GridWalk, PrioritySearch, first_cut, min_cost, regions};

use crate::input::{self, CliError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MazeOptions {
    pub(crate) start: char,
    pub(crate) end: char,
    pub(crate) wall: char,
    pub(crate) forward_cost: u64,
    pub(crate) turn_cost: u64,
    pub(crate) facing: bool,
}

impl Default for MazeOptions {
    fn default() -> Self {
        Self {
            start: 'S',
            end: 'E',
            wall: '#',
            forward_cost: 1,
            turn_cost: 1000,
            facing: true,
        }
    }
}

fn cost_line(cost: Option<u64>) -> String {
    cost.map_or_else(|| "none".to_owned(), |c| c.to_string())
}

pub(crate) fn maze(text: &str, options: &MazeOptions) -> Result<String, CliError> {
    let grid = input::parse_grid(text)?;
    let start = input::find_marker(&grid, options.start)?;
    let end = input::find_marker(&grid, options.end)?;
    let wall = options.wall;
    let passable = move |c: &char| *c != wall;

    let (cost, tiles) = if options.facing {
        let walk = FacingWalk::new(&grid, end, passable)
            .forward_cost(options.forward_cost)
            .turn_cost(options.turn_cost);
        let outcome = PrioritySearch::new(&walk).run(Facing::new(start, Direction::East));
        (outcome.cost(), outcome.optimal_positions().len())
    } else {
        let walk = GridWalk::new(&grid, end, passable);
        let outcome = PrioritySearch::new(&walk).run(start);
        (outcome.cost(), outcome.optimal_positions().len())
    };
    Ok(format!("cost: {}\ntiles: {tiles}", cost_line(cost)))
}

pub(crate) fn regions_report(text: &str) -> Result<String, CliError> {
    let grid = input::parse_grid(text)?;
    let found = regions(&grid);
    let by_perimeter: usize = found.iter().map(|r| r.area() * r.perimeter()).sum();
    let by_sides: usize = found.iter().map(|r| r.area() * r.corners()).sum();
    Ok(format!(
        "regions: {}\nfence by perimeter: {by_perimeter}\nfence by sides: {by_sides}",
        found.len()
    ))
}

pub(crate) fn bytes(text: &str, size: usize, take: usize) -> Result<String, CliError> {
    let coords = input::parse_coords(text)?;
    let mut blocked = Grid::filled(size, size, false);
    for (i, &coord) in coords.iter().enumerate() {
        if i < take {
            blocked.set(coord, true)?;
        } else {
            blocked.get(coord)?;
        }
    }
    log::info!("{} of {} bytes fallen", take.min(coords.len()), coords.len());

    #[expect(clippy::cast_possible_wrap)]
    let last = size as i64 - 1;
    let walk = GridWalk::new(&blocked, Coord::new(last, last), |&b| !b);
    let steps = min_cost(&walk, Coord::ORIGIN);
    let cut = first_cut(last + 1, last + 1, coords.iter().copied())
        .map_or_else(|| "none".to_owned(), |coord| coord.to_string());
    Ok(format!("steps: {}\nfirst cut: {cut}", cost_line(steps)))
}

pub(crate) fn network(text: &str, prefix: &str) -> Result<String, CliError> {
    let graph: Graph<&str> = input::parse_links(text)?.into_iter().collect();
    let with_prefix = triangles(&graph)
        .iter()
        .filter(|t| t.iter().any(|name| name.starts_with(prefix)))
        .count();
    let largest = maximum_clique(&graph).map_or_else(String::new, |c| c.join(","));
    Ok(format!(
        "triangles: {with_prefix}\nlargest clique: {largest}"
    ))
}

pub(crate) fn words(text: &str, word: &str) -> Result<String, CliError> {
    let grid = input::parse_grid(text)?;
    let letters: Vec<char> = word.chars().collect();
    let matches = match letters.first() {
        None => 0,
        Some(first) => grid
            .find_all(|c| c == first)
            .into_iter()
            .flat_map(|start| BoxDirection::ALL.map(|dir| grid.ray(start, dir, letters.len())))
            .filter(|ray| ray.iter().copied().eq(letters.iter()))
            .count(),
    };
    Ok(format!("matches: {matches}"))
}
