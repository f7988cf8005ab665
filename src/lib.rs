//! Maze chase: steer through a tile maze, dodge wandering ghosts, eat pellets.
//!
//! - `core`: window-free game rules (layout, collision, actors, session)
//! - `render`: raylib drawing of a session and its sprites
//! - `display`, `process_events`, `audio_manager`: the raylib/rodio edges
//! - `menu`, `game`: the front screen and the session runner

pub mod audio_manager;
pub mod cli;
pub mod core;
pub mod display;
pub mod game;
pub mod menu;
pub mod process_events;
pub mod render;
