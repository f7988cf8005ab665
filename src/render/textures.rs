//! Texture loading with solid-colour fallbacks.
use std::path::Path;

use raylib::prelude::*;

pub const PLAYER_SPRITE: &str = "player.png";
pub const GHOST_SPRITES: [&str; 4] = ["ghost1.png", "ghost2.png", "ghost3.png", "ghost4.png"];

const PLAYER_FALLBACK: Color = Color::new(255, 255, 0, 255);
const GHOST_FALLBACKS: [Color; 4] = [
    Color::new(255, 60, 60, 255),
    Color::new(255, 150, 220, 255),
    Color::new(70, 230, 230, 255),
    Color::new(255, 170, 60, 255),
];

/// Loads `path` as a `w x h` texture. Any failure is logged and yields `None`.
pub fn load_texture_scaled(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
    w: i32,
    h: i32,
) -> Option<Texture2D> {
    let mut img = match Image::load_image(&path.to_string_lossy()) {
        Ok(img) => img,
        Err(err) => {
            log::warn!("{}: {err:?}, using placeholder", path.display());
            return None;
        }
    };
    img.resize(w, h);
    match rl.load_texture_from_image(thread, &img) {
        Ok(tex) => Some(tex),
        Err(err) => {
            log::warn!("{}: {err:?}, using placeholder", path.display());
            None
        }
    }
}

/// Loads a TTF at a fixed size, `None` means the raylib default font.
pub fn load_font(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path, size: i32) -> Option<Font> {
    match rl.load_font_ex(thread, &path.to_string_lossy(), size, None) {
        Ok(font) => Some(font),
        Err(err) => {
            log::warn!("{}: {err:?}, using default font", path.display());
            None
        }
    }
}

/// A square actor sprite, or the colour to fill its rectangle with.
pub struct Sprite {
    pub texture: Option<Texture2D>,
    pub fallback: Color,
    pub size: i32,
}

pub struct SpriteSet {
    pub player: Sprite,
    pub ghosts: Vec<Sprite>,
}

impl SpriteSet {
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, assets: &Path, size: i32, ghosts: usize) -> Self {
        let player = Sprite {
            texture: load_texture_scaled(rl, thread, &assets.join(PLAYER_SPRITE), size, size),
            fallback: PLAYER_FALLBACK,
            size,
        };
        let ghosts = (0..ghosts)
            .map(|i| Sprite {
                texture: load_texture_scaled(
                    rl,
                    thread,
                    &assets.join(GHOST_SPRITES[i % GHOST_SPRITES.len()]),
                    size,
                    size,
                ),
                fallback: GHOST_FALLBACKS[i % GHOST_FALLBACKS.len()],
                size,
            })
            .collect();
        Self { player, ghosts }
    }

    /// Sprite for the `i`th ghost; ghosts beyond the loaded set reuse the first ones.
    pub fn ghost(&self, i: usize) -> &Sprite {
        &self.ghosts[i % self.ghosts.len()]
    }
}
