//! Options for reading, writing, and exporting mazes

use serde::{Deserialize, Serialize};

/// Options for the maze document parser
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSettings {
    /// Number of cells per side; inferred from the document shape when `None`
    pub size: Option<usize>,
}

/// Options for the C array export
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CArraySettings {
    /// Variable name
    pub name: String,
    /// Element type, including qualifiers
    pub element_type: String,
    /// Bit used for the East, North, West, and South walls
    ///
    /// Bits must lie in `0..8` to fit a `uint8_t`; bits of 32 or more are skipped.
    pub bit_order: [u8; 4],
    /// Write the top row of the maze first
    pub y_origin_is_top: bool,
}

impl Default for CArraySettings {
    fn default() -> Self {
        Self {
            name: "maze_data".to_string(),
            element_type: "const uint8_t".to_string(),
            bit_order: [0, 1, 2, 3],
            y_origin_is_top: false,
        }
    }
}

/// Options for the command line tool
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeToolSettings {
    /// Parser options
    pub parse: ParseSettings,
    /// C array options
    pub c_array: CArraySettings,
    /// Print the step map from the goal cells
    pub print_step_map: bool,
    /// Print the C array export
    pub print_c_array: bool,
}

impl Default for MazeToolSettings {
    fn default() -> Self {
        Self {
            parse: Default::default(),
            c_array: Default::default(),
            print_step_map: true,
            print_c_array: false,
        }
    }
}

impl MazeToolSettings {
    /// Build settings from the positional arguments following the maze file path
    ///
    /// Recognizes a maze size and the `--c-array` and `--no-step-map` flags; anything
    /// else is returned as unrecognized.
    ///
    /// ```
    /// use micromouse_maze::settings::MazeToolSettings;
    ///
    /// let (settings, unknown) = MazeToolSettings::from_args(["16", "--c-array", "-x"]);
    /// assert_eq!(settings.parse.size, Some(16));
    /// assert!(settings.print_c_array);
    /// assert_eq!(unknown, vec!["-x".to_string()]);
    /// ```
    pub fn from_args<I, S>(args: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut settings = Self::default();
        let mut unknown = vec![];
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--c-array" => settings.print_c_array = true,
                "--no-step-map" => settings.print_step_map = false,
                _ => match arg.parse::<usize>() {
                    Ok(size) => settings.parse.size = Some(size),
                    Err(_) => unknown.push(arg.to_string()),
                },
            }
        }
        (settings, unknown)
    }
}
