//! One play session: owns every entity and runs the per-frame rules.
//!
//! The shell drives a frame as
//! `handle` (input) -> `advance` (motion) -> draw -> `resolve_contacts`.
//! Nothing here touches the window, so the whole loop is testable.
use rand::Rng;

use crate::core::actor::{Actor, Direction, Intents};
use crate::core::config::GameConfig;
use crate::core::enemy::{wander_step, Wander};
use crate::core::geom::Rect;
use crate::core::maze::Layout;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PickupId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pickup {
    pub id: PickupId,
    pub rect: Rect,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Press(Direction),
    Release(Direction),
}

/// What happened in the consequence phase of a frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Consequences {
    /// A ghost touched the player; the player is already back at spawn.
    pub caught: bool,
    /// The last player step was blocked and the intents were dropped.
    pub wall_stop: bool,
    pub pickup: Option<PickupId>,
}

pub struct Session<R: Rng> {
    config: GameConfig,
    layout: Layout,
    obstacles: Vec<Rect>,
    pickups: Vec<Pickup>,
    player: Actor,
    ghosts: Vec<Actor>,
    intents: Intents,
    state: SessionState,
    rng: R,
    frame: u64,
}

impl<R: Rng> Session<R> {
    pub fn new(config: GameConfig, layout: Layout, mut rng: R) -> Self {
        let obstacles = layout.obstacles(config.tile);
        let (sx, sy) = config.spawn;
        let player = Actor::new(sx, sy, config.actor_size, config.player_speed);
        let ghosts = config
            .ghost_spawns
            .iter()
            .map(|&(x, y)| {
                Actor::new(x, y, config.actor_size, config.ghost_speed).with_wander(Wander::new(&mut rng))
            })
            .collect::<Vec<_>>();
        let pickups = layout
            .pickup_seeds(config.tile, config.pickup_size)
            .into_iter()
            .enumerate()
            .map(|(i, seed)| Pickup { id: PickupId(i), rect: seed.rect })
            .collect::<Vec<_>>();

        log::info!(
            "session ready: {}x{} tiles, {} walls, {} pickups, {} ghosts",
            layout.width(),
            layout.height(),
            obstacles.len(),
            pickups.len(),
            ghosts.len()
        );

        Self {
            config,
            layout,
            obstacles,
            pickups,
            player,
            ghosts,
            intents: Intents::default(),
            state: SessionState::Running,
            rng,
            frame: 0,
        }
    }

    pub fn config(&self) -> &GameConfig { &self.config }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn obstacles(&self) -> &[Rect] { &self.obstacles }
    pub fn pickups(&self) -> &[Pickup] { &self.pickups }
    pub fn player(&self) -> &Actor { &self.player }
    pub fn ghosts(&self) -> &[Actor] { &self.ghosts }
    pub fn intents(&self) -> Intents { self.intents }
    pub fn state(&self) -> SessionState { self.state }
    pub fn frame(&self) -> u64 { self.frame }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn terminate(&mut self) {
        if self.state == SessionState::Running {
            log::info!("session terminated after {} frames", self.frame);
        }
        self.state = SessionState::Terminated;
    }

    /// Key presses latch an intent until the matching release.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.terminate(),
            InputEvent::Press(dir) => self.intents.set(dir, true),
            InputEvent::Release(dir) => self.intents.set(dir, false),
        }
    }

    /// Player motion followed by every ghost. Ghosts ignore the player.
    pub fn advance(&mut self) {
        if !self.is_running() {
            return;
        }
        let bounds = self.config.world_bounds;
        self.player.step(self.intents, &self.obstacles, &bounds);
        for ghost in &mut self.ghosts {
            wander_step(ghost, &self.obstacles, &bounds, &mut self.rng);
        }
        self.frame += 1;
    }

    /// Ghost contact, then wall stop, then at most one pickup.
    pub fn resolve_contacts(&mut self) -> Consequences {
        let mut out = Consequences::default();
        if !self.is_running() {
            return out;
        }

        if self.ghosts.iter().any(|g| g.rect.overlaps(&self.player.rect)) {
            let (sx, sy) = self.config.spawn;
            log::debug!("caught at {:?} on frame {}", self.player.rect.center(), self.frame);
            self.player.respawn(sx, sy);
            self.intents.clear();
            out.caught = true;
        }

        if !self.player.movable {
            self.intents.clear();
            out.wall_stop = true;
        }

        let touched = self
            .pickups
            .iter()
            .find(|p| p.rect.overlaps(&self.player.rect))
            .map(|p| p.id);
        if let Some(id) = touched {
            out.pickup = self.consume_pickup(id).map(|p| p.id);
        }

        out
    }

    /// Removes a pickup. Consuming one that is already gone does nothing.
    pub fn consume_pickup(&mut self, id: PickupId) -> Option<Pickup> {
        let index = self.pickups.iter().position(|p| p.id == id)?;
        let pickup = self.pickups.remove(index);
        log::debug!("pickup {} taken, {} left", id.0, self.pickups.len());
        Some(pickup)
    }

    #[cfg(test)]
    pub(crate) fn ghosts_mut(&mut self) -> &mut [Actor] {
        &mut self.ghosts
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Actor {
        &mut self.player
    }
}
