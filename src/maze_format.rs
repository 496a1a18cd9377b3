//! Plain text `.maze` documents.
//!
//! ```text
//! +---+---+
//! |   | G |
//! +---+   +
//! | S |   |
//! +---+---+
//! ```
//!
//! The top line is the northern boundary. `-` and `|` are walls, a space is an open
//! wall, and `.` marks a wall whose state is unknown. `S` and `G` in the middle of a
//! cell mark start and goal cells. Lines beginning with `#` are comments.

use crate::grid::{Cell, Direction, WallGrid};
use crate::settings::{CArraySettings, ParseSettings};
use anyhow::{anyhow, Error};
use log::{debug, warn};
use std::str::FromStr;

/// The character width of one cell, including one pillar or vertical wall
const CELL_WIDTH: usize = 4;

/// Parse a maze document, inferring the maze size from its shape
///
/// # Examples
///
/// ```
/// use micromouse_maze::grid::{Cell, Direction};
/// use micromouse_maze::maze_format::parse_maze_string;
///
/// let grid = parse_maze_string("+---+---+\n|   | G |\n+---+   +\n| S |   |\n+---+---+\n").unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid.starts(), &[Cell::new(0, 0)]);
/// assert_eq!(grid.goals(), &[Cell::new(1, 1)]);
/// assert!(grid.query_wall(0, 0, Direction::North));
/// assert!(!grid.query_wall(1, 0, Direction::North));
/// ```
pub fn parse_maze_string(text: &str) -> Result<WallGrid, Error> {
    parse_maze_string_with(text, &ParseSettings::default())
}

/// Parse a maze document with the given options
pub fn parse_maze_string_with(text: &str, settings: &ParseSettings) -> Result<WallGrid, Error> {
    let mut lines: Vec<&str> = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let first_len = lines.first().map_or(0, |line| line.len());
    let size = settings
        .size
        .unwrap_or_else(|| usize::max(lines.len() / 2, first_len / CELL_WIDTH));
    if size == 0 {
        return Err(anyhow!("Maze document has no rows"));
    }

    let mut grid = WallGrid::new(size, vec![], vec![])?;
    for (i, line) in lines.iter().rev().enumerate() {
        let line = line.trim_end().as_bytes();
        let y = (i / 2) as i32;
        if i % 2 == 0 {
            // +---+---+---+---+
            for (x, c) in glyphs(line, 2) {
                match c {
                    b'-' => grid.update_wall(x, y, Direction::South, true),
                    b' ' => grid.update_wall(x, y, Direction::South, false),
                    _ => {}
                }
            }
        } else {
            // |   |   | G |   |
            for (x, c) in glyphs(line, 0) {
                match c {
                    b'|' => grid.update_wall(x, y, Direction::West, true),
                    b' ' => grid.update_wall(x, y, Direction::West, false),
                    _ => {}
                }
            }
            for (x, c) in glyphs(line, 2) {
                let cell = Cell::new(x, y);
                match c {
                    b'S' | b'G' if !grid.is_cell_inside(x, y) => {
                        warn!("Ignoring {} outside of the field at ({x}, {y})", c as char)
                    }
                    b'S' => grid.add_start(cell),
                    b'G' => grid.add_goal(cell),
                    _ => {}
                }
            }
        }
    }

    debug!(
        "Parsed {size}x{size} maze with {} known walls",
        grid.known_wall_count()
    );
    Ok(grid)
}

/// Every fourth character of the line, starting at `offset`, with its column index
fn glyphs(line: &[u8], offset: usize) -> impl Iterator<Item = (i32, u8)> + '_ {
    line.iter()
        .skip(offset)
        .step_by(CELL_WIDTH)
        .enumerate()
        .map(|(x, c)| (x as i32, *c))
}

impl FromStr for WallGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_maze_string(s)
    }
}

/// Generate the text form of a maze
///
/// Walls whose state is unknown are written as `.`, whether or not they exist.
pub fn maze_string(grid: &WallGrid) -> String {
    let size = grid.size() as i32;
    let mut res = String::new();
    for y in (-1..size).rev() {
        // +---+---+---+---+
        res.push('+');
        for x in 0..size {
            if !grid.query_known(x, y, Direction::North) {
                res.push_str(" . ");
            } else if grid.query_wall(x, y, Direction::North) {
                res.push_str("---");
            } else {
                res.push_str("   ");
            }
            res.push('+');
        }
        res.push('\n');
        if y == -1 {
            break;
        }
        // |   |   | G |   |
        res.push('|');
        for x in 0..size {
            let cell = Cell::new(x, y);
            if grid.starts().contains(&cell) {
                res.push_str(" S ");
            } else if grid.goals().contains(&cell) {
                res.push_str(" G ");
            } else {
                res.push_str("   ");
            }
            if !grid.query_known(x, y, Direction::East) {
                res.push('.');
            } else if grid.query_wall(x, y, Direction::East) {
                res.push('|');
            } else {
                res.push(' ');
            }
        }
        res.push('\n');
    }
    res
}

/// Returns the wall drawn at a character position of a maze document of the given size
///
/// `line` counts from the top of the document. Pillars, cell contents, and positions
/// outside the document return `None`.
///
/// ```
/// use micromouse_maze::grid::{Cell, Direction};
/// use micromouse_maze::maze_format::wall_at_glyph;
///
/// // +---+---+
/// // |   | G |
/// assert_eq!(wall_at_glyph(2, 0, 6), Some((Cell::new(1, 1), Direction::North)));
/// assert_eq!(wall_at_glyph(2, 1, 4), Some((Cell::new(1, 1), Direction::West)));
/// assert_eq!(wall_at_glyph(2, 1, 6), None);
/// ```
pub fn wall_at_glyph(size: usize, line: usize, column: usize) -> Option<(Cell, Direction)> {
    if line > 2 * size || column > CELL_WIDTH * size {
        return None;
    }
    let x = (column / CELL_WIDTH) as i32;
    let y = size as i32 - 1 - (line / 2) as i32;
    let offset = column % CELL_WIDTH;
    if line % 2 == 0 {
        (offset != 0).then_some((Cell::new(x, y), Direction::North))
    } else {
        (offset == 0).then_some((Cell::new(x, y), Direction::West))
    }
}

/// Generate a C array literal of the maze's walls, one byte per cell
///
/// Bit `bit_order[d]` of each byte is set when the wall on side `d` of the cell exists,
/// with `d` in East, North, West, South order. Bits of 32 or more are skipped.
///
/// ```
/// use micromouse_maze::grid::standard_mazes::StandardMaze;
/// use micromouse_maze::maze_format::c_array_string;
/// use micromouse_maze::settings::CArraySettings;
///
/// let grid = StandardMaze::Open.get_grid().unwrap();
/// assert_eq!(
///     c_array_string(&grid, &CArraySettings::default()),
///     "const uint8_t maze_data[ /* y */ 2][ /* x */ 2] = {\n    {0xc, 0x9},\n    {0x6, 0x3},\n};\n"
/// );
/// ```
pub fn c_array_string(grid: &WallGrid, settings: &CArraySettings) -> String {
    let size = grid.size() as i32;
    let y_comment = if settings.y_origin_is_top { "N-1-y" } else { "y" };
    let mut res = format!(
        "{} {}[ /* {} */ {}][ /* x */ {}] = {{\n",
        settings.element_type, settings.name, y_comment, size, size
    );
    let mut rows: Vec<i32> = (0..size).collect();
    if settings.y_origin_is_top {
        rows.reverse();
    }
    for y in rows {
        let cells: Vec<String> = (0..size)
            .map(|x| {
                let mut hex = 0u32;
                for (direction, bit) in Direction::get_all().iter().zip(settings.bit_order) {
                    if grid.query_wall(x, y, *direction) {
                        hex |= 1u32.checked_shl(bit as u32).unwrap_or(0);
                    }
                }
                format!("0x{hex:x}")
            })
            .collect();
        res.push_str(&format!("    {{{}}},\n", cells.join(", ")));
    }
    res.push_str("};\n");
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::standard_mazes::*;

    #[test]
    fn parse_single_cell() {
        let grid = parse_maze_string("+---+\n| S |\n+---+").unwrap();
        assert_eq!(grid.size(), 1);
        for d in Direction::get_all() {
            assert!(grid.query_wall(0, 0, d));
            assert!(grid.query_known(0, 0, d));
        }
        assert_eq!(grid.starts(), &[Cell::new(0, 0)]);
        assert!(grid.goals().is_empty());
    }

    #[test]
    fn parse_marks_known() {
        let grid = MAZE_WINDING_4X4.parse::<WallGrid>().unwrap();
        assert_eq!(grid.known_wall_count(), 24);
        assert!(grid.query_wall(0, 0, Direction::East));
        assert!(!grid.query_wall(0, 0, Direction::North));
        assert!(grid.query_wall(2, 1, Direction::South));
        assert!(!grid.query_wall(2, 3, Direction::West));
        assert_eq!(grid.goals(), &[Cell::new(3, 3)]);
    }

    #[test]
    fn parse_unknown_walls() {
        let grid = parse_maze_string(MAZE_PARTIAL_2X2).unwrap();
        assert!(!grid.query_known(0, 1, Direction::East));
        assert!(!grid.query_known(0, 0, Direction::North));
        assert!(grid.query_known(1, 0, Direction::North));
        assert!(grid.query_known(0, 0, Direction::East));
        assert_eq!(grid.goals(), &[Cell::new(0, 1), Cell::new(1, 1)]);
    }

    #[test]
    fn parse_skips_comments() {
        let text = format!("# generated\n{MAZE_OPEN_2X2}# trailing\n\n");
        let grid = parse_maze_string(&text).unwrap();
        assert_eq!(grid, parse_maze_string(MAZE_OPEN_2X2).unwrap());
    }

    #[test]
    fn parse_empty() {
        assert!(parse_maze_string("").is_err());
        assert!(parse_maze_string("# nothing here\n").is_err());
    }

    #[test]
    fn parse_size_override() {
        let settings = ParseSettings { size: Some(4) };
        let grid = parse_maze_string_with(MAZE_OPEN_2X2, &settings).unwrap();
        assert_eq!(grid.size(), 4);
        assert!(!grid.query_wall(0, 0, Direction::East));
        assert!(grid.query_wall(1, 0, Direction::East));
        assert!(!grid.query_known(2, 0, Direction::East));
    }

    #[test]
    fn parse_ignores_unrecognized() {
        let grid = parse_maze_string("+-x-+-*-+\n| S ? X |\n+ ~ + @ +\n|  Q  ! |\n+---+---+\n")
            .unwrap();
        assert_eq!(grid.size(), 2);
        assert!(!grid.query_known(0, 1, Direction::East));
        assert!(!grid.query_known(0, 0, Direction::North));
        assert!(!grid.query_known(1, 0, Direction::North));
        assert!(grid.query_known(0, 0, Direction::East));
        assert_eq!(grid.starts(), &[Cell::new(0, 1)]);
        assert!(grid.goals().is_empty());
    }

    #[test]
    fn parse_short_lines() {
        let grid = parse_maze_string("+---+---+\n|\n+\n| S |   |\n+---+---+\n").unwrap();
        assert_eq!(grid.size(), 2);
        assert!(grid.query_wall(0, 0, Direction::East));
        assert!(!grid.query_known(0, 1, Direction::East));
        assert!(!grid.query_known(0, 0, Direction::North));
    }

    #[test]
    fn parse_accumulates_duplicates() {
        let text = "+---+---+\n| G   G |\n+   +   +\n| S   S |\n+---+---+\n";
        let grid = parse_maze_string(text).unwrap();
        assert_eq!(grid.starts(), &[Cell::new(0, 0), Cell::new(1, 0)]);
        assert_eq!(grid.goals().len(), 2);
    }

    #[test]
    fn serialize_unknown() {
        let grid = WallGrid::new(1, vec![], vec![]).unwrap();
        assert_eq!(maze_string(&grid), "+---+\n|   |\n+---+\n");

        let grid = WallGrid::new(2, vec![], vec![]).unwrap();
        assert_eq!(
            maze_string(&grid),
            "+---+---+\n|   .   |\n+ . + . +\n|   .   |\n+---+---+\n"
        );
    }

    #[test]
    fn serialize_unknown_hides_wall() {
        let mut grid = WallGrid::new(2, vec![], vec![]).unwrap();
        grid.set_wall(0, 0, Direction::East, true, Some(false));
        assert!(maze_string(&grid).contains("|   .   |\n+---+---+"));
        grid.set_known(0, 0, Direction::East, true);
        assert!(maze_string(&grid).contains("|   |   |\n+---+---+"));
    }

    #[test]
    fn serialize_start_before_goal() {
        let grid = WallGrid::new(1, vec![Cell::new(0, 0)], vec![Cell::new(0, 0)]).unwrap();
        assert_eq!(maze_string(&grid), "+---+\n| S |\n+---+\n");
    }

    #[test]
    fn round_trip() {
        for maze in [MAZE_WINDING_4X4, MAZE_POCKET_4X4, MAZE_OPEN_2X2] {
            let grid = parse_maze_string(maze).unwrap();
            let again = parse_maze_string(&maze_string(&grid)).unwrap();
            assert_eq!(grid, again);
        }
    }

    #[test]
    fn round_trip_edited() {
        let mut grid = parse_maze_string(MAZE_WINDING_4X4).unwrap();
        grid.toggle_wall(1, 1, Direction::East);
        grid.toggle_wall(2, 2, Direction::North);
        let again = parse_maze_string(&maze_string(&grid)).unwrap();
        assert_eq!(grid, again);
        assert!(!again.query_wall(2, 1, Direction::West));
    }

    #[test]
    fn glyph_positions() {
        let size = 2;
        assert_eq!(wall_at_glyph(size, 0, 0), None);
        assert_eq!(
            wall_at_glyph(size, 0, 1),
            Some((Cell::new(0, 1), Direction::North))
        );
        assert_eq!(
            wall_at_glyph(size, 2, 2),
            Some((Cell::new(0, 0), Direction::North))
        );
        assert_eq!(
            wall_at_glyph(size, 3, 8),
            Some((Cell::new(2, 0), Direction::West))
        );
        assert_eq!(
            wall_at_glyph(size, 4, 5),
            Some((Cell::new(1, -1), Direction::North))
        );
        assert_eq!(wall_at_glyph(size, 5, 0), None);
        assert_eq!(wall_at_glyph(size, 1, 9), None);
    }

    #[test]
    fn glyph_positions_match_serializer() {
        let mut grid = parse_maze_string(MAZE_OPEN_2X2).unwrap();
        // the open wall between (0, 0) and (0, 1)
        let (cell, direction) = wall_at_glyph(2, 2, 2).unwrap();
        grid.toggle_wall(cell.x, cell.y, direction);
        assert!(grid.query_wall(0, 1, Direction::South));
        let text = maze_string(&grid);
        assert_eq!(text.lines().nth(2), Some("+---+   +"));
    }

    #[test]
    fn c_array_wide_bits_skipped() {
        let grid = parse_maze_string(MAZE_SINGLE).unwrap();
        let settings = CArraySettings {
            bit_order: [0, 40, 255, 3],
            ..Default::default()
        };
        assert!(c_array_string(&grid, &settings).contains("    {0x9},
"));
    }

    #[test]
    fn c_array_options() {
        let grid = parse_maze_string(MAZE_OPEN_2X2).unwrap();
        let settings = CArraySettings {
            name: "walls".to_string(),
            element_type: "uint8_t".to_string(),
            bit_order: [3, 2, 1, 0],
            y_origin_is_top: true,
        };
        assert_eq!(
            c_array_string(&grid, &settings),
            "uint8_t walls[ /* N-1-y */ 2][ /* x */ 2] = {\n    {0x6, 0xc},\n    {0x3, 0x9},\n};\n"
        );
    }
}
