use clap::Parser;

use maze_chase::cli::Args;
use maze_chase::{game, menu};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let opts = args.launch_options();

    let result = if args.no_menu { game::run(&opts) } else { menu::run(&opts) };
    if let Err(err) = result {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}
