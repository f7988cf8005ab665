//! Actor drawing.
use raylib::prelude::*;

use crate::core::actor::Actor;
use crate::render::textures::Sprite;

/// Draws `actor` centred on its rectangle and rotated to its facing.
pub fn draw_actor<D: RaylibDraw>(d: &mut D, sprite: &Sprite, actor: &Actor) {
    let r = actor.rect;
    match &sprite.texture {
        Some(tex) => {
            let size = sprite.size as f32;
            let (cx, cy) = r.center();
            // raylib rotates clockwise, facing angles are counter-clockwise
            d.draw_texture_pro(
                tex,
                Rectangle::new(0.0, 0.0, size, size),
                Rectangle::new(cx as f32, cy as f32, size, size),
                Vector2::new(size / 2.0, size / 2.0),
                -actor.facing.degrees(),
                Color::WHITE,
            );
        }
        None => d.draw_rectangle(r.x, r.y, r.w, r.h, sprite.fallback),
    }
}
