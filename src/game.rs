//! Runs one session in its own window until quit.
use std::path::PathBuf;
use std::thread;

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

use crate::audio_manager::AudioManager;
use crate::core::config::GameConfig;
use crate::core::maze::Layout;
use crate::core::session::Session;
use crate::display::Display;
use crate::process_events::process_events;
use crate::render::{self, textures};

pub const WINDOW_TITLE: &str = "Maze Chase";
pub const MESSAGE_FONT: &str = "title_font.ttf";
pub const PICKUP_SOUND: &str = "pickup.mp3";

/// Everything a section needs to start.
#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub config: GameConfig,
    pub assets: PathBuf,
    /// `None` plays the built-in maze.
    pub layout: Option<PathBuf>,
    /// `None` seeds the ghosts from entropy.
    pub seed: Option<u64>,
}

impl LaunchOptions {
    pub fn load_layout(&self) -> anyhow::Result<Layout> {
        match &self.layout {
            Some(path) => {
                Layout::load(path).with_context(|| format!("loading layout {}", path.display()))
            }
            None => Layout::builtin().context("parsing built-in layout"),
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

pub fn run(opts: &LaunchOptions) -> anyhow::Result<()> {
    let layout = opts.load_layout()?;
    let (width, height) = opts.config.window_size(&layout);
    let mut session = Session::new(opts.config.clone(), layout, opts.rng());

    let mut display = Display::open(width, height, WINDOW_TITLE, opts.config.fps);
    let sprites = textures::SpriteSet::load(
        &mut display.rl,
        &display.thread,
        &opts.assets,
        opts.config.actor_size,
        session.ghosts().len(),
    );
    let font = textures::load_font(
        &mut display.rl,
        &display.thread,
        &opts.assets.join(MESSAGE_FONT),
        render::MESSAGE_SIZE,
    );
    let audio = AudioManager::new().map(|mut audio| {
        audio.load_pickup(&opts.assets.join(PICKUP_SOUND));
        audio
    });

    while session.is_running() {
        for event in process_events(&display.rl) {
            session.handle(event);
        }
        if !session.is_running() {
            break;
        }

        session.advance();

        let out = {
            let mut d = display.rl.begin_drawing(&display.thread);
            d.clear_background(Color::BLACK);
            render::draw_scene(&mut d, &session, &sprites);
            let out = session.resolve_contacts();
            if out.caught {
                render::draw_caught_message(&mut d, font.as_ref());
            }
            out
        };

        if out.caught {
            // hit-stop: the whole loop freezes with the message on screen
            thread::sleep(opts.config.hit_stop);
        }
        if out.pickup.is_some() {
            if let Some(audio) = &audio {
                audio.play_pickup();
            }
        }
    }

    log::info!("{} pickups left", session.pickups().len());
    drop(font);
    drop(sprites);
    display.close();
    Ok(())
}
