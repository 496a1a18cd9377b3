//! Wall and cell coordinate arithmetic.
//!
//! Every physical wall segment can be named from either of the two cells it separates.
//! [`uniquify`] collapses both names onto a single [`WallCoord`], and [`wall_index`] maps
//! that coordinate onto the dense wall arrays of a [`WallGrid`](crate::grid::WallGrid).

use anyhow::{anyhow, Error};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// An integer cell location in the maze
///
/// `(0, 0)` is the bottom left cell; `x` increases to the right and `y` increases upwards.
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Cell {
    /// Column - increases to the right
    pub x: i32,
    /// Row - increases upwards
    pub y: i32,
}

impl Cell {
    /// Create a new Cell
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the given direction
    ///
    /// The result may lie outside the field, and wraps around at the `i32` limits.
    ///
    /// ```
    /// use micromouse_maze::grid::{Cell, Direction};
    ///
    /// assert_eq!(Cell::new(0, 0).next(Direction::North), Cell::new(0, 1));
    /// assert_eq!(Cell::new(0, 0).next(Direction::West), Cell::new(-1, 0));
    /// ```
    pub fn next(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Enum for direction values.
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// +x
    East = 0,
    /// +y
    North = 1,
    /// -x
    West = 2,
    /// -y
    South = 3,
}

impl Direction {
    /// All directions, in index order
    pub fn get_all() -> [Self; 4] {
        [Self::East, Self::North, Self::West, Self::South]
    }

    /// The `(dx, dy)` step taken when moving in this direction
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }

    /// The direction pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::East => Direction::West,
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::South => Direction::North,
        }
    }
}

/// Which half of the wall index space a wall lives in
#[derive(
    Clone,
    Copy,
    Debug,
    Hash,
    Eq,
    PartialEq,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Orientation {
    /// Walls queried as East or West
    Vertical = 0,
    /// Walls queried as North or South
    Horizontal = 1,
}

/// The canonical coordinate of a single physical wall
///
/// A vertical wall at `(x, y)` is the East wall of cell `(x, y)`; a horizontal wall at
/// `(x, y)` is the North wall of cell `(x, y)`. Coordinates may be negative for walls on
/// the west or south boundary.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct WallCoord {
    /// Column of the cell owning this wall
    pub x: i32,
    /// Row of the cell owning this wall
    pub y: i32,
    /// Vertical or horizontal
    pub orientation: Orientation,
}

impl WallCoord {
    /// Create a new WallCoord
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }
}

/// Returns the canonical coordinates of the wall on side `direction` of cell `(x, y)`
///
/// Both sides of a wall map to the same coordinate. Coordinates wrap at the `i32` limits;
/// a wrapped coordinate is never [valid](is_valid_wall).
///
/// ```
/// use micromouse_maze::grid::{uniquify, Direction};
///
/// assert_eq!(uniquify(3, 4, Direction::East), uniquify(4, 4, Direction::West));
/// assert_eq!(uniquify(3, 4, Direction::North), uniquify(3, 5, Direction::South));
/// ```
pub fn uniquify(x: i32, y: i32, direction: Direction) -> WallCoord {
    match direction {
        Direction::East => WallCoord::new(x, y, Orientation::Vertical),
        Direction::North => WallCoord::new(x, y, Orientation::Horizontal),
        Direction::West => WallCoord::new(x.wrapping_sub(1), y, Orientation::Vertical),
        Direction::South => WallCoord::new(x, y.wrapping_sub(1), Orientation::Horizontal),
    }
}

/// Returns whether the wall is an interior wall of a maze with `size` cells per side
///
/// Walls on the maze boundary are not valid; they are never stored.
pub fn is_valid_wall(wall: WallCoord, size: usize) -> bool {
    let s = size as i64;
    let o = u8::from(wall.orientation) as i64;
    let (x, y) = (wall.x as i64, wall.y as i64);
    x >= 0 && y >= 0 && x < s + o - 1 && y < s - o
}

/// Returns the storage index of a wall, in `0..2 * size * size`
///
/// Fails if the wall is not [valid](is_valid_wall).
///
/// ```
/// use micromouse_maze::grid::{wall_index, Orientation, WallCoord};
///
/// assert_eq!(wall_index(WallCoord::new(1, 2, Orientation::Vertical), 4).unwrap(), 9);
/// assert_eq!(wall_index(WallCoord::new(1, 2, Orientation::Horizontal), 4).unwrap(), 25);
/// assert!(wall_index(WallCoord::new(3, 0, Orientation::Vertical), 4).is_err());
/// ```
pub fn wall_index(wall: WallCoord, size: usize) -> Result<usize, Error> {
    if !is_valid_wall(wall, size) {
        return Err(anyhow!(
            "Wall ({}, {}, {:?}) is out of field for maze size {}",
            wall.x,
            wall.y,
            wall.orientation,
            size
        ));
    }
    let half = u8::from(wall.orientation) as usize;
    Ok(wall.x as usize + wall.y as usize * size + half * size * size)
}

/// Returns the storage index of a cell, `y * size + x`
///
/// Fails if the cell lies outside the field.
pub fn cell_index(x: i32, y: i32, size: usize) -> Result<usize, Error> {
    if !is_cell_inside(x, y, size) {
        return Err(anyhow!(
            "Cell ({}, {}) is out of field for maze size {}",
            x,
            y,
            size
        ));
    }
    Ok(y as usize * size + x as usize)
}

/// Returns whether the cell lies inside a maze with `size` cells per side
pub fn is_cell_inside(x: i32, y: i32, size: usize) -> bool {
    let s = size as i64;
    x >= 0 && y >= 0 && (x as i64) < s && (y as i64) < s
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uniquify_cases() {
        assert_eq!(
            uniquify(2, 3, Direction::East),
            WallCoord::new(2, 3, Orientation::Vertical)
        );
        assert_eq!(
            uniquify(2, 3, Direction::North),
            WallCoord::new(2, 3, Orientation::Horizontal)
        );
        assert_eq!(
            uniquify(2, 3, Direction::West),
            WallCoord::new(1, 3, Orientation::Vertical)
        );
        assert_eq!(
            uniquify(2, 3, Direction::South),
            WallCoord::new(2, 2, Orientation::Horizontal)
        );
    }

    #[test]
    fn uniquify_shared_walls() {
        for x in -1..5 {
            for y in -1..5 {
                for d in Direction::get_all() {
                    let n = Cell::new(x, y).next(d);
                    assert_eq!(uniquify(x, y, d), uniquify(n.x, n.y, d.opposite()));
                }
            }
        }
    }

    #[test]
    fn uniquify_extremes() {
        for (x, y, d) in [
            (i32::MIN, 0, Direction::West),
            (0, i32::MIN, Direction::South),
            (i32::MAX, 0, Direction::East),
            (0, i32::MAX, Direction::North),
        ] {
            assert!(!is_valid_wall(uniquify(x, y, d), 4));
        }
        assert_eq!(
            Cell::new(i32::MAX, 0).next(Direction::East),
            Cell::new(i32::MIN, 0)
        );
    }

    #[test]
    fn valid_wall_counts() {
        for size in 1..8 {
            let mut vertical = 0;
            let mut horizontal = 0;
            for x in -2..size as i32 + 2 {
                for y in -2..size as i32 + 2 {
                    if is_valid_wall(WallCoord::new(x, y, Orientation::Vertical), size) {
                        vertical += 1;
                    }
                    if is_valid_wall(WallCoord::new(x, y, Orientation::Horizontal), size) {
                        horizontal += 1;
                    }
                }
            }
            assert_eq!(vertical, size * (size - 1));
            assert_eq!(horizontal, size * (size - 1));
        }
    }

    #[test]
    fn wall_index_is_injective() {
        let size = 5;
        let mut seen = HashSet::new();
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            for x in 0..size as i32 {
                for y in 0..size as i32 {
                    let wall = WallCoord::new(x, y, orientation);
                    if let Ok(i) = wall_index(wall, size) {
                        assert!(i < 2 * size * size);
                        assert!(seen.insert(i), "duplicate index {i}");
                    }
                }
            }
        }
        assert_eq!(seen.len(), 2 * size * (size - 1));
    }

    #[test]
    fn wall_index_oob() {
        let size = 4;
        assert!(wall_index(uniquify(0, 0, Direction::West), size).is_err());
        assert!(wall_index(uniquify(0, 0, Direction::South), size).is_err());
        assert!(wall_index(uniquify(3, 0, Direction::East), size).is_err());
        assert!(wall_index(uniquify(0, 3, Direction::North), size).is_err());
    }

    #[test]
    fn cell_index_in_field() {
        assert_eq!(cell_index(0, 0, 4).unwrap(), 0);
        assert_eq!(cell_index(3, 0, 4).unwrap(), 3);
        assert_eq!(cell_index(1, 2, 4).unwrap(), 9);
        assert_eq!(cell_index(3, 3, 4).unwrap(), 15);
    }

    #[test]
    fn cell_index_oob() {
        assert!(cell_index(-1, 0, 4).is_err());
        assert!(cell_index(0, 4, 4).is_err());
        assert_eq!(
            format!("{}", cell_index(4, 1, 4).unwrap_err()),
            "Cell (4, 1) is out of field for maze size 4"
        );
    }

    #[test]
    fn direction_primitives() {
        assert_eq!(u8::from(Direction::South), 3);
        assert_eq!(Direction::try_from(1u8).unwrap(), Direction::North);
        assert!(Direction::try_from(4u8).is_err());
    }
}
