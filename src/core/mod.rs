//! Core game types and logic (data, motion, ghosts, session).
//!
//! - `geom`: integer rectangles
//! - `maze`: tile layout parsing, walls and pickup seeds
//! - `collision`: axis-separated wall resolution
//! - `actor`: shared player/ghost motion
//! - `enemy`: ghost wandering controller
//! - `config`: gameplay tunables
//! - `session`: entity ownership and the per-frame rules

pub mod actor;
pub mod collision;
pub mod config;
pub mod enemy;
pub mod geom;
pub mod maze;
pub mod session;
