//! Explicitly owned raylib window.
use raylib::prelude::*;

/// A live window. Closing it (or dropping it) tears the window down, after
/// which another one may be opened.
pub struct Display {
    pub rl: RaylibHandle,
    pub thread: RaylibThread,
}

impl Display {
    pub fn open(width: i32, height: i32, title: &str, fps: u32) -> Self {
        let (mut rl, thread) = raylib::init().size(width, height).title(title).build();
        rl.set_target_fps(fps);
        log::info!("opened {width}x{height} window {title:?}");
        Self { rl, thread }
    }

    /// Anything loaded against this window (textures, fonts) must be dropped first.
    pub fn close(self) {
        log::debug!("closing window");
        drop(self);
    }
}
