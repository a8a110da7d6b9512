//! Worked puzzle examples exercising the search and region algorithms end to end.

use gridkit_core::{BoxDirection, Coord, Direction, Grid, WrappingGrid};
use gridkit_search::{
    Facing, FacingWalk, GridWalk, PrioritySearch, first_cut, min_cost, optimal_positions, regions,
};

const MAZE: &str = "
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

const BYTES: &str = "5,4 4,2 4,5 3,0 2,1 6,3 2,4 1,5 0,6 3,3 2,6 5,1 1,2 5,5 2,5 6,5 1,4 0,4 6,4 1,1 6,1 1,0 0,5 1,6 2,0";

const GARDEN: &str = "
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

const WORDS: &str = "
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

fn bytes() -> Vec<Coord> {
    BYTES
        .split_whitespace()
        .map(|pair| {
            let (x, y) = pair.split_once(',').unwrap();
            Coord::new(x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

mod maze {
    use super::*;

    fn setup() -> (Grid<char>, Facing, Coord) {
        let grid: Grid<char> = MAZE.parse().unwrap();
        let start = grid.find_first(&'S').unwrap();
        let end = grid.find_first(&'E').unwrap();
        (grid, Facing::new(start, Direction::East), end)
    }

    #[test]
    fn test_lowest_score_with_turn_cost() {
        let (grid, start, end) = setup();
        let walk = FacingWalk::new(&grid, end, |&c| c != '#');
        let outcome = PrioritySearch::new(&walk).run(start);
        assert_eq!(outcome.cost(), Some(7036));
        assert!(!outcome.goal_states().is_empty());
        for &goal in outcome.goal_states() {
            assert_eq!(goal.position, end);
            assert_eq!(outcome.g_score(goal), Some(7036));
        }
    }

    #[test]
    fn test_tiles_on_any_best_path() {
        let (grid, start, end) = setup();
        let walk = FacingWalk::new(&grid, end, |&c| c != '#');
        let tiles = optimal_positions(&walk, start);
        assert_eq!(tiles.len(), 45);
        assert!(tiles.contains(start.position));
        assert!(tiles.contains(end));
        assert!(tiles.iter().all(|c| grid[c] != '#'));
    }

    #[test]
    fn test_path_is_contiguous_and_costs_the_minimum() {
        let (grid, start, end) = setup();
        let walk = FacingWalk::new(&grid, end, |&c| c != '#');
        let outcome = PrioritySearch::new(&walk).run(start);
        let path = outcome.path();
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last().map(|s| s.position), Some(end));

        let mut cost = 0;
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.position == b.position {
                assert_ne!(a.direction, b.direction);
                cost += 1000;
            } else {
                assert_eq!(a.position.step(a.direction), b.position);
                cost += 1;
            }
        }
        assert_eq!(Some(cost), outcome.cost());
    }

    #[test]
    fn test_plain_walk_ignores_turns() {
        let (grid, start, end) = setup();
        let walk = GridWalk::new(&grid, end, |&c| c != '#');
        assert_eq!(min_cost(&walk, start.position), Some(28));
    }
}

mod falling_bytes {
    use super::*;

    fn blocked_grid(take: usize) -> Grid<bool> {
        let mut grid = Grid::filled(7, 7, false);
        for coord in bytes().into_iter().take(take) {
            grid.set(coord, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_shortest_path_after_twelve_bytes() {
        let grid = blocked_grid(12);
        let walk = GridWalk::new(&grid, Coord::new(6, 6), |&blocked| !blocked);
        assert_eq!(min_cost(&walk, Coord::ORIGIN), Some(22));
    }

    #[test]
    fn test_first_cut_matches_search() {
        let all = bytes();
        let cut = first_cut(7, 7, all.iter().copied());
        assert_eq!(cut, Some(Coord::new(6, 1)));

        let index = all.iter().position(|&c| Some(c) == cut).unwrap();
        let before = blocked_grid(index);
        let walk = GridWalk::new(&before, Coord::new(6, 6), |&blocked| !blocked);
        assert!(min_cost(&walk, Coord::ORIGIN).is_some());
        let after = blocked_grid(index + 1);
        let walk = GridWalk::new(&after, Coord::new(6, 6), |&blocked| !blocked);
        assert_eq!(min_cost(&walk, Coord::ORIGIN), None);
    }
}

mod garden {
    use super::*;

    #[test]
    fn test_fence_prices() {
        let grid: Grid<char> = GARDEN.parse().unwrap();
        let found = regions(&grid);
        assert_eq!(found.len(), 11);
        let by_perimeter: usize = found.iter().map(|r| r.area() * r.perimeter()).sum();
        let by_sides: usize = found.iter().map(|r| r.area() * r.corners()).sum();
        assert_eq!(by_perimeter, 1930);
        assert_eq!(by_sides, 1206);
        assert_eq!(found[0].value_at(&grid), Ok(&'R'));
        assert_eq!(found[0].area(), 12);
    }
}

mod word_search {
    use super::*;

    fn count(grid: &Grid<char>, word: &str) -> usize {
        let letters: Vec<char> = word.chars().collect();
        let Some(&first) = letters.first() else {
            return 0;
        };
        grid.find_all(|&c| c == first)
            .into_iter()
            .flat_map(|start| BoxDirection::ALL.map(|dir| grid.ray(start, dir, letters.len())))
            .filter(|ray| ray.iter().copied().eq(letters.iter()))
            .count()
    }

    #[test]
    fn test_xmas_count() {
        let grid: Grid<char> = WORDS.parse().unwrap();
        assert_eq!(count(&grid, "XMAS"), 18);
    }

    #[test]
    fn test_rotation_preserves_count() {
        let grid: Grid<char> = WORDS.parse().unwrap();
        assert_eq!(count(&grid.rotate_clockwise(), "XMAS"), 18);
        assert_eq!(count(&grid.transpose(), "XMAS"), 18);
    }
}

mod tiling {
    use super::*;

    #[test]
    fn test_wrapping_walk_reaches_beyond_base() {
        let base: Grid<char> = "..#\n.#.\n...".parse().unwrap();
        let tiles = WrappingGrid::new(base).unwrap();
        assert_eq!(*tiles.get(Coord::new(5, -3)), '#');
        let slice = tiles.slice(Coord::new(-3, -3), Coord::new(5, 5));
        assert_eq!((slice.width(), slice.height()), (9, 9));
        let walk = GridWalk::new(&slice, Coord::new(8, 8), |&c| c == '.');
        assert_eq!(min_cost(&walk, Coord::ORIGIN), Some(16));
    }
}
