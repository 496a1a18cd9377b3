//! Goal detection for mazes recovered from images.
//!
//! Micromouse goal areas are open blocks of cells with a pillar in the middle that no wall
//! touches. Starting from the start cells, every reachable pillar with four open walls
//! around it marks its four surrounding cells as goals. Open areas near the edge of a
//! maze can produce extra goals.

use crate::grid::{Cell, Direction, WallGrid};
use crate::step_map::StepMap;
use anyhow::Error;
use log::info;

/// The four wall references touching the pillar at the top right corner of `(x, y)`
fn walls_around_pillar(x: i32, y: i32) -> [(i32, i32, Direction); 4] {
    [
        (x, y, Direction::East),
        (x + 1, y, Direction::North),
        (x + 1, y + 1, Direction::West),
        (x, y + 1, Direction::South),
    ]
}

/// Returns the cells around reachable pillars with no walls, sorted and without duplicates
///
/// ```
/// use micromouse_maze::goals::pillar_goals;
/// use micromouse_maze::grid::{Cell, WallGrid};
///
/// let grid = WallGrid::new(2, vec![Cell::new(0, 0)], vec![]).unwrap();
/// assert_eq!(pillar_goals(&grid).unwrap().len(), 4);
/// ```
pub fn pillar_goals(grid: &WallGrid) -> Result<Vec<Cell>, Error> {
    let mut step_map = StepMap::new(grid);
    step_map.update(Some(grid.starts()))?;

    let size = grid.size() as i32;
    let mut goals = vec![];
    for x in 0..size {
        for y in 0..size {
            if step_map.get(x, y).is_none() {
                continue;
            }
            let around = walls_around_pillar(x, y);
            if around.iter().all(|&(x, y, d)| !grid.query_wall(x, y, d)) {
                goals.extend(around.iter().map(|&(x, y, _)| Cell::new(x, y)));
            }
        }
    }
    goals.sort();
    goals.dedup();
    Ok(goals)
}

/// Replaces the grid's goals with [`pillar_goals`]
pub fn assign_pillar_goals(grid: &mut WallGrid) -> Result<(), Error> {
    let goals = pillar_goals(grid)?;
    info!("Detected {} goal cells", goals.len());
    grid.set_goals(goals);
    Ok(())
}
