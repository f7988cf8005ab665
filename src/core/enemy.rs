//! Ghost wandering: a memoryless random walk on a frame timer.
use std::ops::Range;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::core::actor::{Actor, Direction, Intents};
use crate::core::geom::Rect;

/// Frames between direction changes, at 60 FPS roughly half a second to a second.
pub const REDIRECT_FRAMES: Range<u32> = 30..60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wander {
    pub heading: Direction,
    pub threshold: u32,
    pub elapsed: u32,
}

impl Wander {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            heading: random_heading(rng),
            threshold: rng.gen_range(REDIRECT_FRAMES),
            elapsed: 0,
        }
    }

    /// Picks a fresh heading and threshold once the timer has run out.
    /// Returns true when the heading was re-rolled this frame.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.elapsed < self.threshold {
            return false;
        }
        self.heading = random_heading(rng);
        self.threshold = rng.gen_range(REDIRECT_FRAMES);
        self.elapsed = 0;
        true
    }
}

fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    *Direction::ALL.choose(rng).unwrap_or(&Direction::Left)
}

/// Runs one frame of a ghost: timer, heading to intent, shared motion.
/// Actors without a wander record are left alone.
pub fn wander_step<R: Rng + ?Sized>(actor: &mut Actor, obstacles: &[Rect], bounds: &Rect, rng: &mut R) {
    let Some(wander) = actor.wander.as_mut() else { return };
    wander.tick(rng);
    let intents = Intents::only(wander.heading);
    actor.step(intents, obstacles, bounds);
    if let Some(wander) = actor.wander.as_mut() {
        wander.elapsed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BOUNDS: Rect = Rect::new(0, 0, 900, 990);

    #[test]
    fn thresholds_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let w = Wander::new(&mut rng);
            assert!(REDIRECT_FRAMES.contains(&w.threshold));
            assert_eq!(w.elapsed, 0);
        }
    }

    #[test]
    fn heading_changes_only_when_timer_expires() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ghost = Actor::new(450, 450, 30, 1).with_wander(Wander::new(&mut rng));
        let mut rerolls = 0;

        for _ in 0..2_000 {
            let before = ghost.wander.clone().unwrap();
            wander_step(&mut ghost, &[], &BOUNDS, &mut rng);
            let after = ghost.wander.as_ref().unwrap();

            if before.elapsed >= before.threshold {
                rerolls += 1;
                assert!(REDIRECT_FRAMES.contains(&after.threshold));
                assert_eq!(after.elapsed, 1);
            } else {
                assert_eq!(after.heading, before.heading);
                assert_eq!(after.threshold, before.threshold);
                assert_eq!(after.elapsed, before.elapsed + 1);
            }
        }
        assert!(rerolls >= 2_000 / 60);
    }

    #[test]
    fn ghost_moves_along_its_heading() {
        let mut rng = StdRng::seed_from_u64(3);
        let wander = Wander { heading: Direction::Down, threshold: 50, elapsed: 0 };
        let mut ghost = Actor::new(450, 450, 30, 1).with_wander(wander);
        for _ in 0..10 {
            wander_step(&mut ghost, &[], &BOUNDS, &mut rng);
        }
        assert_eq!(ghost.rect.center(), (450, 460));
        assert_eq!(ghost.facing, Direction::Down);
    }

    #[test]
    fn player_is_not_driven() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut player = Actor::new(100, 405, 30, 2);
        wander_step(&mut player, &[], &BOUNDS, &mut rng);
        assert_eq!(player.rect.center(), (100, 405));
    }
}
