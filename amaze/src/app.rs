use std::{io, time::Duration};

use amaze_core::dims::Dims;
use amaze_core::maze::algorithms::{Backtracker, GenError, Solver};
use amaze_core::trace::NoTrace;
use clap::Parser;
use rand::{thread_rng, Rng as _};
use thiserror::Error;

use crate::helpers::render_lines;
use crate::settings::Settings;
use crate::view::MazeView;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Gen(#[from] GenError),
}

#[derive(Parser, Debug)]
#[clap(version, author, about, name = "amaze")]
pub struct Args {
    #[clap(short, long, help = "Generate from this seed instead of a random one")]
    pub seed: Option<u64>,
    #[clap(long, help = "Maze width in cells")]
    pub width: Option<i32>,
    #[clap(long, help = "Maze height in cells")]
    pub height: Option<i32>,
    #[clap(short, long, help = "Milliseconds between animation steps")]
    pub delay: Option<u64>,
    #[clap(
        short,
        long,
        action,
        help = "Print the finished maze instead of animating"
    )]
    pub plain: bool,
    #[clap(short, long, action, help = "Reset config to default and quit")]
    pub reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    pub show_config_path: bool,
}

pub fn run(args: Args) -> Result<(), Error> {
    if args.reset_config {
        Settings::reset_config(Settings::default_path());
        return Ok(());
    }

    if args.show_config_path {
        let settings_path = Settings::default_path();
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = Settings::load(Settings::default_path());

    let default_size = settings.get_default_size();
    let size = Dims(
        args.width.unwrap_or(default_size.0),
        args.height.unwrap_or(default_size.1),
    );
    let delay = args
        .delay
        .map(Duration::from_millis)
        .unwrap_or_else(|| settings.get_step_delay());

    let seed = args.seed.unwrap_or_else(|| thread_rng().gen());
    if args.seed.is_some() {
        println!("Using seed {}", seed);
    } else {
        println!("Using random seed {}", seed);
    }

    let solved = if args.plain {
        let mut maze = Backtracker::generate(size, Some(seed), &mut NoTrace)?;
        for line in render_lines(&maze) {
            println!("{}", line);
        }
        Solver::solve(&mut maze, &mut NoTrace)
    } else {
        let mut view = MazeView::new(&settings, delay)?;

        view.set_status("Carving...");
        let mut maze = Backtracker::generate(size, Some(seed), &mut view)?;

        view.set_status("Solving...");
        let solved = Solver::solve(&mut maze, &mut view);

        view.set_status(if solved {
            "Solved! Press any key."
        } else {
            "No path! Press any key."
        });
        view.finish(&maze)?;

        solved
    };

    if solved {
        println!("Maze solved.");
    } else {
        println!("Maze could not be solved.");
    }

    Ok(())
}
