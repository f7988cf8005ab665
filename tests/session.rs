use rand::SeedableRng;
use rand::rngs::StdRng;

use maze_chase::core::actor::{Direction, Intents};
use maze_chase::core::config::GameConfig;
use maze_chase::core::maze::Layout;
use maze_chase::core::session::{InputEvent, Session};

fn session_with(config: GameConfig, seed: u64) -> Session<StdRng> {
    Session::new(config, Layout::builtin().unwrap(), StdRng::seed_from_u64(seed))
}

fn run_frame(session: &mut Session<StdRng>) -> maze_chase::core::session::Consequences {
    session.advance();
    session.resolve_contacts()
}

#[test]
fn holding_right_moves_exactly_speed_per_frame() {
    let config = GameConfig { ghost_spawns: vec![], ..Default::default() };
    let mut session = session_with(config, 0);
    let spawn_right = session.player().rect.right();
    let speed = session.config().player_speed;

    session.handle(InputEvent::Press(Direction::Right));
    // the first wall on the spawn rows starts at x=324
    let frames = 50;
    for _ in 0..frames {
        let out = run_frame(&mut session);
        assert!(!out.caught && !out.wall_stop);
    }

    assert_eq!(session.player().rect.right(), spawn_right + frames * speed);
    assert_eq!(session.player().facing, Direction::Right);
    assert_eq!(session.intents(), Intents::only(Direction::Right));
}

#[test]
fn walking_the_tunnel_eats_the_pickups_on_the_way() {
    let config = GameConfig { ghost_spawns: vec![], ..Default::default() };
    let mut session = session_with(config, 0);
    let before = session.pickups().len();

    session.handle(InputEvent::Press(Direction::Right));
    let mut eaten = 0;
    for _ in 0..100 {
        if run_frame(&mut session).pickup.is_some() {
            eaten += 1;
        }
    }

    assert!(eaten > 0);
    assert_eq!(session.pickups().len(), before - eaten);
    // nothing left under the player
    let player = session.player().rect;
    assert!(session.pickups().iter().all(|p| !p.rect.overlaps(&player)));
}

#[test]
fn running_into_a_ghost_resets_only_the_player() {
    // one ghost boxed into the spawn tunnel just right of the player
    let config = GameConfig { ghost_spawns: vec![(200, 405)], ..Default::default() };
    let mut session = session_with(config, 11);
    let spawn = session.player().rect;

    session.handle(InputEvent::Press(Direction::Right));
    let mut caught_on = None;
    for frame in 0..300 {
        let pickups_before = session.pickups().len();
        let out = run_frame(&mut session);
        if out.caught {
            caught_on = Some(frame);
            // at most the pickup under the spawn point goes as well
            assert!(pickups_before - session.pickups().len() <= 1);
            break;
        }
    }

    assert!(caught_on.is_some(), "player never met the ghost");
    assert_eq!(session.player().rect, spawn);
    assert_eq!(session.intents(), Intents::default());
    assert_eq!(session.ghosts().len(), 1);
    assert!(session.is_running());

    // with no intents the player stays put
    let out = run_frame(&mut session);
    assert!(!out.caught);
    assert_eq!(session.player().rect, spawn);
}

#[test]
fn ghosts_keep_wandering_without_a_player_nearby() {
    let mut session = session_with(GameConfig::default(), 5);
    let start: Vec<_> = session.ghosts().iter().map(|g| g.rect).collect();
    for _ in 0..240 {
        run_frame(&mut session);
        let bounds = session.config().world_bounds;
        for g in session.ghosts() {
            assert!(g.rect.left() >= bounds.left() && g.rect.right() <= bounds.right());
            assert!(g.rect.top() >= bounds.top() && g.rect.bottom() <= bounds.bottom());
        }
    }
    let moved = session
        .ghosts()
        .iter()
        .zip(&start)
        .filter(|(g, s)| g.rect != **s)
        .count();
    assert!(moved > 0);
}
