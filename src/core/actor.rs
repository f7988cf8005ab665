//! Shared motion state for the player and the ghosts.
use crate::core::collision;
use crate::core::enemy::Wander;
use crate::core::geom::Rect;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Sprite rotation in degrees, counter-clockwise from facing right.
    pub fn degrees(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::Up => 90.0,
            Direction::Left => 180.0,
            Direction::Down => 270.0,
        }
    }
}

/// Held directional intents. Any combination may be set at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Intents {
    pub fn only(dir: Direction) -> Self {
        let mut i = Self::default();
        i.set(dir, true);
        i
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub rect: Rect,
    pub facing: Direction,
    pub speed: i32,
    /// Result of the last collision pass.
    pub movable: bool,
    /// Present only on ghosts.
    pub wander: Option<Wander>,
}

impl Actor {
    pub fn new(cx: i32, cy: i32, size: i32, speed: i32) -> Self {
        Self {
            rect: Rect::centered(cx, cy, size, size),
            facing: Direction::Right,
            speed,
            movable: true,
            wander: None,
        }
    }

    pub fn with_wander(mut self, wander: Wander) -> Self {
        self.wander = Some(wander);
        self
    }

    pub fn is_ghost(&self) -> bool {
        self.wander.is_some()
    }

    /// One frame of motion. Intents are read left, right, up, down; every
    /// active one contributes displacement and the last one read sets the
    /// facing, so left+right cancel out but leave the actor facing right.
    pub fn step(&mut self, intents: Intents, obstacles: &[Rect], bounds: &Rect) {
        let (mut dx, mut dy) = (0, 0);
        if intents.left {
            dx -= self.speed;
            self.facing = Direction::Left;
        }
        if intents.right {
            dx += self.speed;
            self.facing = Direction::Right;
        }
        if intents.up {
            dy -= self.speed;
            self.facing = Direction::Up;
        }
        if intents.down {
            dy += self.speed;
            self.facing = Direction::Down;
        }

        // resolve() leaves the rect at its corrected position
        let res = collision::resolve(&mut self.rect, dx, dy, obstacles);
        self.movable = res.movable;
        self.rect.clamp_within(bounds);
    }

    pub fn respawn(&mut self, cx: i32, cy: i32) {
        self.rect.set_center(cx, cy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0, 0, 900, 990);

    #[test]
    fn last_intent_read_sets_facing() {
        let mut a = Actor::new(100, 100, 30, 2);
        a.step(Intents { left: true, right: true, ..Default::default() }, &[], &BOUNDS);
        assert_eq!(a.rect.center(), (100, 100));
        assert_eq!(a.facing, Direction::Right);

        a.step(Intents { left: true, down: true, ..Default::default() }, &[], &BOUNDS);
        assert_eq!(a.rect.center(), (98, 102));
        assert_eq!(a.facing, Direction::Down);
    }

    #[test]
    fn no_intents_keeps_facing() {
        let mut a = Actor::new(100, 100, 30, 2);
        a.step(Intents::only(Direction::Up), &[], &BOUNDS);
        a.step(Intents::default(), &[], &BOUNDS);
        assert_eq!(a.facing, Direction::Up);
        assert!(a.movable);
    }

    #[test]
    fn blocked_step_clears_movable() {
        let wall = Rect::new(116, 80, 27, 27);
        let mut a = Actor::new(100, 100, 30, 2);
        a.step(Intents::only(Direction::Right), &[wall], &BOUNDS);
        assert_eq!(a.rect.right(), 116);
        assert!(!a.movable);
    }

    #[test]
    fn stays_within_world_bounds_for_any_intents() {
        let mut a = Actor::new(20, 20, 30, 7);
        for frame in 0..600u32 {
            let bits = (frame / 37) % 16;
            let intents = Intents {
                left: bits & 1 != 0,
                right: bits & 2 != 0,
                up: bits & 4 != 0,
                down: bits & 8 != 0,
            };
            a.step(intents, &[], &BOUNDS);
            assert!(a.rect.left() >= 0 && a.rect.top() >= 0);
            assert!(a.rect.right() <= 900 && a.rect.bottom() <= 990);
        }
    }

    #[test]
    fn facing_angles() {
        let angles: Vec<f32> = Direction::ALL.iter().map(|d| d.degrees()).collect();
        assert_eq!(angles, vec![180.0, 0.0, 90.0, 270.0]);
    }
}
