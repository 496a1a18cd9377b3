//! Maze wall database and utilities.

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod coords;
pub mod standard_mazes;

pub use coords::{
    cell_index, is_cell_inside, is_valid_wall, uniquify, wall_index, Cell, Direction, Orientation,
    WallCoord,
};

/// A square maze of walls, with start and goal cells
///
/// Each interior wall has two flags: whether it exists, and whether its state is known.
/// Walls on the boundary of the field always exist and are always known, and can't be
/// changed.
///
/// # Examples
///
/// ```
/// use micromouse_maze::grid::{Cell, Direction, WallGrid};
///
/// let mut grid = WallGrid::new(4, vec![Cell::new(0, 0)], vec![]).unwrap();
/// grid.set_wall(0, 0, Direction::East, true, Some(true));
///
/// assert!(grid.query_wall(1, 0, Direction::West));
/// assert!(grid.query_known(1, 0, Direction::West));
/// assert!(grid.query_wall(0, 0, Direction::South));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallGrid {
    size: usize,
    walls: Vec<bool>,
    knowns: Vec<bool>,
    start: Vec<Cell>,
    goals: Vec<Cell>,
}

impl WallGrid {
    /// Create a maze with `size` cells per side, with no walls present or known
    pub fn new(size: usize, start: Vec<Cell>, goals: Vec<Cell>) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::msg("Maze size must be at least 1"));
        }
        Ok(Self {
            size,
            walls: vec![false; 2 * size * size],
            knowns: vec![false; 2 * size * size],
            start,
            goals,
        })
    }

    /// Number of cells on one side of the maze
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells in the maze
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    fn slot(&self, x: i32, y: i32, direction: Direction) -> Option<usize> {
        let wall = uniquify(x, y, direction);
        if !is_valid_wall(wall, self.size) {
            return None;
        }
        wall_index(wall, self.size).ok()
    }

    /// Returns whether the wall on side `direction` of cell `(x, y)` exists
    ///
    /// Boundary walls always exist.
    pub fn query_wall(&self, x: i32, y: i32, direction: Direction) -> bool {
        match self.slot(x, y, direction) {
            Some(i) => self.walls[i],
            None => true,
        }
    }

    /// Sets whether the wall on side `direction` of cell `(x, y)` exists, and optionally
    /// whether it is known
    ///
    /// Boundary walls are left untouched.
    pub fn set_wall(
        &mut self,
        x: i32,
        y: i32,
        direction: Direction,
        exists: bool,
        known: Option<bool>,
    ) {
        if let Some(i) = self.slot(x, y, direction) {
            self.walls[i] = exists;
            if let Some(known) = known {
                self.knowns[i] = known;
            }
        }
    }

    /// Returns whether the state of the wall on side `direction` of cell `(x, y)` is known
    ///
    /// Boundary walls are always known.
    pub fn query_known(&self, x: i32, y: i32, direction: Direction) -> bool {
        match self.slot(x, y, direction) {
            Some(i) => self.knowns[i],
            None => true,
        }
    }

    /// Sets whether the state of the wall on side `direction` of cell `(x, y)` is known
    pub fn set_known(&mut self, x: i32, y: i32, direction: Direction, known: bool) {
        if let Some(i) = self.slot(x, y, direction) {
            self.knowns[i] = known;
        }
    }

    /// Sets whether a wall exists and marks it as known
    pub fn update_wall(&mut self, x: i32, y: i32, direction: Direction, exists: bool) {
        self.set_wall(x, y, direction, exists, Some(true));
    }

    /// Flips a wall and marks it as known, returning the new state
    ///
    /// ```
    /// use micromouse_maze::grid::{Direction, WallGrid};
    ///
    /// let mut grid = WallGrid::new(2, vec![], vec![]).unwrap();
    /// assert_eq!(grid.toggle_wall(0, 0, Direction::North), true);
    /// assert_eq!(grid.toggle_wall(0, 1, Direction::South), false);
    /// // boundary walls can't be removed
    /// assert_eq!(grid.toggle_wall(0, 0, Direction::West), true);
    /// ```
    pub fn toggle_wall(&mut self, x: i32, y: i32, direction: Direction) -> bool {
        let exists = !self.query_wall(x, y, direction);
        self.update_wall(x, y, direction, exists);
        self.query_wall(x, y, direction)
    }

    /// Returns whether the cell lies inside the field
    pub fn is_cell_inside(&self, x: i32, y: i32) -> bool {
        is_cell_inside(x, y, self.size)
    }

    /// Returns the index of the cell in dense per-cell arrays
    ///
    /// # Examples
    ///
    /// ```
    /// use micromouse_maze::grid::WallGrid;
    ///
    /// let grid = WallGrid::new(4, vec![], vec![]).unwrap();
    /// assert_eq!(grid.cell_index(1, 2).unwrap(), 9);
    /// assert!(grid.cell_index(4, 0).is_err());
    /// ```
    pub fn cell_index(&self, x: i32, y: i32) -> Result<usize, Error> {
        cell_index(x, y, self.size)
    }

    /// Returns the neighboring cells reachable from `(x, y)` without crossing a wall
    pub fn open_neighbors(&self, x: i32, y: i32) -> Vec<Cell> {
        let mut neighbors = vec![];
        for direction in Direction::get_all() {
            let next = Cell::new(x, y).next(direction);
            if !self.query_wall(x, y, direction) && self.is_cell_inside(next.x, next.y) {
                neighbors.push(next);
            }
        }
        neighbors
    }

    /// Returns the number of interior walls whose state is known
    pub fn known_wall_count(&self) -> usize {
        let size = self.size;
        let mut count = 0;
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            for x in 0..size as i32 {
                for y in 0..size as i32 {
                    let wall = WallCoord::new(x, y, orientation);
                    if let Ok(i) = wall_index(wall, size) {
                        if self.knowns[i] {
                            count += 1;
                        }
                    }
                }
            }
        }
        count
    }

    /// Returns the wall reference closest to a point, in cell coordinates
    ///
    /// Cell centers lie on integer coordinates, so the East wall of `(0, 0)` passes
    /// through `(0.5, 0)`.
    ///
    /// ```
    /// use micromouse_maze::grid::{Cell, Direction, WallGrid};
    ///
    /// let grid = WallGrid::new(4, vec![], vec![]).unwrap();
    /// assert_eq!(grid.wall_nearest(0.45, 0.1), (Cell::new(0, 0), Direction::East));
    /// assert_eq!(grid.wall_nearest(2.1, 1.6), (Cell::new(2, 1), Direction::North));
    /// ```
    pub fn wall_nearest(&self, x: f32, y: f32) -> (Cell, Direction) {
        let xf = x - x.trunc();
        let yf = y - y.trunc();
        if (xf.abs() - 0.5).abs() < (yf.abs() - 0.5).abs() {
            (
                Cell::new((x - 0.5).round() as i32, y.round() as i32),
                Direction::East,
            )
        } else {
            (
                Cell::new(x.round() as i32, (y - 0.5).round() as i32),
                Direction::North,
            )
        }
    }

    /// Returns the start cells
    pub fn starts(&self) -> &[Cell] {
        &self.start
    }

    /// Returns the goal cells
    pub fn goals(&self) -> &[Cell] {
        &self.goals
    }

    /// Adds a start cell
    pub fn add_start(&mut self, cell: Cell) {
        self.start.push(cell);
    }

    /// Adds a goal cell
    pub fn add_goal(&mut self, cell: Cell) {
        self.goals.push(cell);
    }

    /// Replaces the goal cells
    pub fn set_goals(&mut self, goals: Vec<Cell>) {
        self.goals = goals;
    }

    /// Removes duplicate goal cells, leaving them sorted
    pub fn dedup_goals(&mut self) {
        self.goals.sort();
        self.goals.dedup();
    }

    /// Returns an error if any start or goal cell lies outside the field
    pub fn validate_cells(&self) -> Result<(), Error> {
        for (kind, cells) in [("Start", &self.start), ("Goal", &self.goals)] {
            if let Some(c) = cells.iter().find(|c| !self.is_cell_inside(c.x, c.y)) {
                return Err(anyhow!("{} cell ({}, {}) is out of field", kind, c.x, c.y));
            }
        }
        Ok(())
    }
}

fn write_cells(f: &mut fmt::Formatter<'_>, cells: &[Cell]) -> fmt::Result {
    for (i, c) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({}, {})", c.x, c.y)?;
    }
    Ok(())
}

impl fmt::Display for WallGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "size: {}x{}", self.size, self.size)?;
        write!(f, "start: ")?;
        write_cells(f, &self.start)?;
        write!(f, "\ngoals: ")?;
        write_cells(f, &self.goals)
    }
}
