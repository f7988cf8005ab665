//! Command line.
use std::path::PathBuf;

use clap::Parser;

use crate::core::config::GameConfig;
use crate::game::LaunchOptions;

#[derive(Parser, Debug)]
#[command(version, about = "Steer through the maze, dodge the ghosts, eat the pellets")]
pub struct Args {
    /// Skip the front screen and start playing right away.
    #[arg(long)]
    pub no_menu: bool,
    /// Seed for ghost wandering.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Directory holding sprites, fonts and sounds.
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,
    /// Maze file: rows of 1 (wall) and 0 (open).
    #[arg(long)]
    pub layout: Option<PathBuf>,
}

impl Args {
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            config: GameConfig::default(),
            assets: self.assets.clone(),
            layout: self.layout.clone(),
            seed: self.seed,
        }
    }
}
