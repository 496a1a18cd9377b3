//! Breadth first search distance fields over a [`WallGrid`]

use crate::grid::{Cell, WallGrid};
use anyhow::Error;
use log::debug;
use std::collections::VecDeque;
use std::fmt;
use std::ops::Index;

/// Number of steps from every cell to the nearest of a set of root cells
///
/// `None` means the cell can't be reached. The map borrows its grid, so walls can't change
/// while it is alive; build a new one after editing the maze.
///
/// # Examples
///
/// ```
/// use micromouse_maze::grid::{Cell, WallGrid};
/// use micromouse_maze::step_map::StepMap;
///
/// let grid = WallGrid::new(2, vec![], vec![Cell::new(0, 0)]).unwrap();
/// let mut step_map = StepMap::new(&grid);
/// step_map.update_from_goals().unwrap();
///
/// assert_eq!(step_map.get(0, 0), Some(0));
/// assert_eq!(step_map.get(1, 1), Some(2));
/// ```
#[derive(Clone, Debug)]
pub struct StepMap<'a> {
    grid: &'a WallGrid,
    steps: Vec<Option<u32>>,
}

impl<'a> StepMap<'a> {
    /// Create a step map with every cell unreached
    pub fn new(grid: &'a WallGrid) -> Self {
        Self {
            grid,
            steps: vec![None; grid.cell_count()],
        }
    }

    /// The grid this map was built from
    pub fn grid(&self) -> &'a WallGrid {
        self.grid
    }

    /// Recompute the map from the given roots, or from the grid's goals if `None`
    ///
    /// An empty slice of roots does not fall back to the goals; every cell is left
    /// unreached. Fails if a root lies outside the field.
    pub fn update(&mut self, roots: Option<&[Cell]>) -> Result<&[Option<u32>], Error> {
        let grid = self.grid;
        let roots = roots.unwrap_or(grid.goals());

        self.steps.fill(None);
        let mut queue = VecDeque::new();
        for root in roots {
            self.steps[grid.cell_index(root.x, root.y)?] = Some(0);
            queue.push_back(*root);
        }

        while let Some(cell) = queue.pop_front() {
            let Some(step) = self.steps[grid.cell_index(cell.x, cell.y)?] else {
                continue;
            };
            for next in grid.open_neighbors(cell.x, cell.y) {
                let i = grid.cell_index(next.x, next.y)?;
                if self.steps[i].is_some_and(|s| s <= step + 1) {
                    continue;
                }
                self.steps[i] = Some(step + 1);
                queue.push_back(next);
            }
        }

        debug!(
            "Step map from {} roots reached {} of {} cells",
            roots.len(),
            self.steps.iter().filter(|s| s.is_some()).count(),
            self.steps.len()
        );
        Ok(&self.steps)
    }

    /// Recompute the map from the grid's goals
    pub fn update_from_goals(&mut self) -> Result<&[Option<u32>], Error> {
        self.update(None)
    }

    /// Returns the steps to the cell, or `None` if it is unreached or outside the field
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        let i = self.grid.cell_index(x, y).ok()?;
        self.steps[i]
    }

    /// Returns the steps of every cell, indexed by [`WallGrid::cell_index`]
    pub fn steps(&self) -> &[Option<u32>] {
        &self.steps
    }
}

impl Index<usize> for StepMap<'_> {
    type Output = Option<u32>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl fmt::Display for StepMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.grid.size() as i32;
        for y in (0..size).rev() {
            for x in 0..size {
                match self.get(x, y) {
                    Some(step) => write!(f, "{step:>4}")?,
                    None => write!(f, "{:>4}", "inf")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
