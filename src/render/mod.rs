//! Drawing of a running session.
//!
//! - `textures`: sprite/font loading with fallbacks
//! - `sprites`: rotated actor sprites

pub mod sprites;
pub mod textures;

use rand::Rng;
use raylib::prelude::*;

use crate::core::session::Session;
use sprites::draw_actor;
use textures::SpriteSet;

pub const WALL_COLOR: Color = Color::new(0, 0, 255, 255);
pub const PICKUP_COLOR: Color = Color::new(255, 255, 0, 255);

pub const CAUGHT_MESSAGE: &str = "Caught!";
pub const CAUGHT_POS: (i32, i32) = (300, 155);
pub const MESSAGE_SIZE: i32 = 74;

/// Player, walls, pickups, then ghosts on top.
pub fn draw_scene<D: RaylibDraw, R: Rng>(d: &mut D, session: &Session<R>, sprites: &SpriteSet) {
    draw_actor(d, &sprites.player, session.player());
    for wall in session.obstacles() {
        d.draw_rectangle(wall.x, wall.y, wall.w, wall.h, WALL_COLOR);
    }
    for p in session.pickups() {
        d.draw_rectangle(p.rect.x, p.rect.y, p.rect.w, p.rect.h, PICKUP_COLOR);
    }
    for (i, ghost) in session.ghosts().iter().enumerate() {
        draw_actor(d, sprites.ghost(i), ghost);
    }
}

/// Text in `font`, or in the raylib default font when it failed to load.
pub fn draw_label<D: RaylibDraw>(d: &mut D, font: Option<&Font>, text: &str, x: i32, y: i32, size: i32, color: Color) {
    match font {
        Some(font) => d.draw_text_ex(font, text, Vector2::new(x as f32, y as f32), size as f32, 1.0, color),
        None => d.draw_text(text, x, y, size, color),
    }
}

pub fn draw_caught_message<D: RaylibDraw>(d: &mut D, font: Option<&Font>) {
    let (x, y) = CAUGHT_POS;
    draw_label(d, font, CAUGHT_MESSAGE, x, y, MESSAGE_SIZE, Color::WHITE);
}

/// Rough pixel width of `text`, close enough to centre a short line.
pub fn approx_text_width(text: &str, size: i32) -> i32 {
    text.chars().count() as i32 * size / 2
}
