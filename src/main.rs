use anyhow::{Context, Error};
use log::{error, info, warn};
use micromouse_maze::maze_format::{c_array_string, maze_string, parse_maze_string_with};
use micromouse_maze::settings::MazeToolSettings;
use micromouse_maze::step_map::StepMap;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("please specify a maze file.");
        eprintln!("usage: micromouse-maze <maze-file> [size] [--c-array] [--no-step-map]");
        return ExitCode::from(1);
    };
    let (settings, unknown) = MazeToolSettings::from_args(args);
    for arg in unknown {
        warn!("Ignoring unrecognized argument {arg:?}");
    }

    match run(&path, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(path: &str, settings: &MazeToolSettings) -> Result<(), Error> {
    let text = std::fs::read_to_string(path).with_context(|| format!("couldn't read {path}"))?;
    let grid = parse_maze_string_with(&text, &settings.parse)?;
    info!("Loaded maze from {path}");

    println!("{grid}");
    print!("{}", maze_string(&grid));

    if settings.print_step_map {
        let mut step_map = StepMap::new(&grid);
        step_map.update_from_goals()?;
        print!("{step_map}");
    }
    if settings.print_c_array {
        print!("{}", c_array_string(&grid, &settings.c_array));
    }
    Ok(())
}
