use amaze::app::{self, Args, Error};
use amaze::logging;

use clap::Parser;

fn main() -> Result<(), Error> {
    let args = Args::parse();

    better_panic::install();
    logging::init();

    let result = app::run(args);

    log::logger().flush();

    result
}
