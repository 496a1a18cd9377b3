#![warn(missing_docs)]
//! Micromouse maze walls, `.maze` documents, and step maps

pub mod goals;
pub mod grid;
pub mod maze_format;
pub mod settings;
pub mod step_map;
