//! Puzzle input parsing.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use gridkit_core::{Coord, Grid, GridError};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
    #[display("line {line}: expected {expected}, found {text:?}")]
    Line {
        line: usize,
        expected: &'static str,
        text: String,
    },
    #[display("grid has no {_0:?} cell")]
    MissingMarker(#[error(not(source))] char),
}

pub(crate) fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

pub(crate) fn parse_grid(text: &str) -> Result<Grid<char>, CliError> {
    let grid: Grid<char> = text.parse()?;
    log::debug!("parsed {}x{} grid", grid.width(), grid.height());
    Ok(grid)
}

pub(crate) fn find_marker(grid: &Grid<char>, marker: char) -> Result<Coord, CliError> {
    grid.find_first(&marker)
        .ok_or(CliError::MissingMarker(marker))
}

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Parses one `x,y` pair per line.
pub(crate) fn parse_coords(text: &str) -> Result<Vec<Coord>, CliError> {
    content_lines(text)
        .map(|(line, content)| {
            let invalid = || CliError::Line {
                line,
                expected: "x,y",
                text: content.to_owned(),
            };
            let (x, y) = content.split_once(',').ok_or_else(invalid)?;
            let x = x.trim().parse().map_err(|_| invalid())?;
            let y = y.trim().parse().map_err(|_| invalid())?;
            Ok(Coord::new(x, y))
        })
        .collect()
}

/// Parses one `a-b` link per line.
pub(crate) fn parse_links(text: &str) -> Result<Vec<(&str, &str)>, CliError> {
    content_lines(text)
        .map(|(line, content)| {
            content
                .split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| CliError::Line {
                    line,
                    expected: "a-b",
                    text: content.to_owned(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coords() {
        let coords = parse_coords("5,4\n\n 4,2 \n").unwrap();
        assert_eq!(coords, vec![Coord::new(5, 4), Coord::new(4, 2)]);
    }

    #[test]
    fn test_parse_coords_reports_line() {
        let err = parse_coords("1,2\n3;4\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: expected x,y, found \"3;4\"");
        assert!(parse_coords("1,x").is_err());
    }

    #[test]
    fn test_parse_links() {
        assert_eq!(parse_links("kh-tc\nqp-kh").unwrap(), vec![("kh", "tc"), ("qp", "kh")]);
        assert!(parse_links("kh-").is_err());
        assert!(parse_links("khtc").is_err());
    }

    #[test]
    fn test_grid_errors_convert() {
        let err = parse_grid("ab\nc").unwrap_err();
        assert!(matches!(err, CliError::Grid(GridError::RaggedRow { row: 1, .. })));
        let grid = parse_grid("ab").unwrap();
        assert!(matches!(find_marker(&grid, 'S'), Err(CliError::MissingMarker('S'))));
        assert_eq!(find_marker(&grid, 'b').unwrap(), Coord::new(1, 0));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read(Path::new("/nonexistent/gridkit/input.txt")).unwrap_err();
        assert!(err.to_string().starts_with("failed to read /nonexistent/gridkit/input.txt"));
    }
}
