//! Gameplay tunables.
use std::time::Duration;

use crate::core::geom::Rect;
use crate::core::maze::Layout;

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Edge length of one maze tile in pixels.
    pub tile: i32,
    pub pickup_size: i32,
    pub actor_size: i32,
    pub player_speed: i32,
    pub ghost_speed: i32,
    /// Player spawn, by sprite centre.
    pub spawn: (i32, i32),
    /// Ghost spawns, by sprite centre. One ghost per entry.
    pub ghost_spawns: Vec<(i32, i32)>,
    /// Clamp rectangle for every actor. Deliberately a bit larger than the
    /// drawn maze.
    pub world_bounds: Rect,
    pub fps: u32,
    /// Blocking pause after the player is caught.
    pub hit_stop: Duration,
    /// Extra window height below the maze, as a factor of the maze height.
    pub vertical_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile: 27,
            pickup_size: 10,
            actor_size: 30,
            player_speed: 2,
            ghost_speed: 1,
            spawn: (100, 405),
            ghost_spawns: vec![(430, 430), (410, 430), (390, 430), (370, 430)],
            world_bounds: Rect::new(0, 0, 900, 990),
            fps: 60,
            hit_stop: Duration::from_millis(1000),
            vertical_margin: 1.04,
        }
    }
}

impl GameConfig {
    /// Game window size for `layout`.
    pub fn window_size(&self, layout: &Layout) -> (i32, i32) {
        let w = self.tile * layout.width() as i32;
        let h = (self.tile * layout.height() as i32) as f32 * self.vertical_margin;
        (w, h as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_fits_the_builtin_maze_with_a_bottom_margin() {
        let layout = Layout::builtin().unwrap();
        let (w, h) = GameConfig::default().window_size(&layout);
        assert_eq!(w, 27 * 31);
        assert!(h > 27 * 34);
        // world clamp is looser than the window
        let bounds = GameConfig::default().world_bounds;
        assert!(bounds.right() > w && bounds.bottom() > h);
    }
}
