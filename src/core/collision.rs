//! Axis-separated sweep-and-correct against static obstacles.
//!
//! X is resolved completely before Y. A diagonal step into a corner
//! therefore stops on one axis instead of sliding along the wall; that is
//! the intended feel.
use crate::core::geom::Rect;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub dx: i32,
    pub dy: i32,
    /// False when any obstacle was touched on either axis.
    pub movable: bool,
}

/// Moves `body` by `(dx, dy)` one axis at a time, snapping it flush against
/// every obstacle it ends up overlapping.
///
/// Obstacles are visited in slice order and each overlap snaps
/// independently, so when several overlap on the same axis the last one
/// visited decides the final edge.
pub fn resolve(body: &mut Rect, dx: i32, dy: i32, obstacles: &[Rect]) -> Resolution {
    let mut hit = false;

    body.x += dx;
    let mut rx = dx;
    for wall in obstacles {
        if body.overlaps(wall) {
            hit = true;
            if dx > 0 {
                body.set_right(wall.left());
            } else if dx < 0 {
                body.set_left(wall.right());
            }
            rx = 0;
        }
    }

    body.y += dy;
    let mut ry = dy;
    for wall in obstacles {
        if body.overlaps(wall) {
            hit = true;
            if dy > 0 {
                body.set_bottom(wall.top());
            } else if dy < 0 {
                body.set_top(wall.bottom());
            }
            ry = 0;
        }
    }

    Resolution { dx: rx, dy: ry, movable: !hit }
}
