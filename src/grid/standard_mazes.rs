#![cfg_attr(rustfmt, rustfmt_skip)]
//! A set of pre-made general purpose mazes

use crate::grid::WallGrid;
use crate::maze_format::parse_maze_string;
use anyhow::Error;
use serde::{Deserialize, Serialize};

/// A single cell surrounded by the boundary
pub const MAZE_SINGLE: &str = "\
+---+
| S |
+---+
";

/// A 2x2 maze with no interior walls
pub const MAZE_OPEN_2X2: &str = "\
+---+---+
|       |
+   +   +
| S   G |
+---+---+
";

/// A 4x4 maze with a single winding route from the start to the goal
///
/// Step map from the goal, bottom row first:
/// `12 7 6 5`, `11 8 3 4`, `10 9 2 1`, `11 10 11 0`
pub const MAZE_WINDING_4X4: &str = "\
+---+---+---+---+
|   |       | G |
+   +   +---+   +
|       |       |
+   +   +   +---+
|   |   |       |
+   +   +---+   +
| S |           |
+---+---+---+---+
";

/// A 2x2 maze where two walls haven't been explored yet
pub const MAZE_PARTIAL_2X2: &str = "\
+---+---+
| G . G |
+ . +   +
| S |   |
+---+---+
";

/// A 4x4 maze with an open 2x2 block in its upper right corner
pub const MAZE_POCKET_4X4: &str = "\
+---+---+---+---+
|   |           |
+   +---+   +   +
|   |           |
+   +   +---+---+
|           |   |
+   +---+   +   +
| S         |   |
+---+---+---+---+
";

/// Enum for the built-in mazes
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// [`MAZE_SINGLE`]
    Single,
    /// [`MAZE_OPEN_2X2`]
    Open,
    /// [`MAZE_WINDING_4X4`]
    #[default]
    Winding,
    /// [`MAZE_PARTIAL_2X2`]
    Partial,
    /// [`MAZE_POCKET_4X4`]
    Pocket,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 5] {
        [
            Self::Single,
            Self::Open,
            Self::Winding,
            Self::Partial,
            Self::Pocket,
        ]
    }

    /// Get the text form of this maze
    pub fn get_text(&self) -> &'static str {
        match self {
            Self::Single => MAZE_SINGLE,
            Self::Open => MAZE_OPEN_2X2,
            Self::Winding => MAZE_WINDING_4X4,
            Self::Partial => MAZE_PARTIAL_2X2,
            Self::Pocket => MAZE_POCKET_4X4,
        }
    }

    /// Parse this maze into a [`WallGrid`]
    ///
    /// ```
    /// use micromouse_maze::grid::standard_mazes::StandardMaze;
    ///
    /// let grid = StandardMaze::Winding.get_grid().unwrap();
    /// assert_eq!(grid.size(), 4);
    /// ```
    pub fn get_grid(&self) -> Result<WallGrid, Error> {
        parse_maze_string(self.get_text())
    }
}
