//! Front screen: one button per playable section.
use raylib::prelude::*;

use crate::core::geom::Rect;
use crate::display::Display;
use crate::game::{self, LaunchOptions};
use crate::render::{approx_text_width, draw_label, textures};

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;
pub const TITLE: &str = "Maze Chase";
pub const TITLE_SIZE: i32 = 74;
pub const BUTTON_TEXT_SIZE: i32 = 40;
pub const BACKGROUND_IMAGE: &str = "menu_background.png";
pub const TITLE_FONT: &str = "title_font.ttf";

const SHADOW_OFFSET: i32 = 3;
const BUTTON_W: i32 = 300;
const BUTTON_H: i32 = 75;
const BUTTON_GAP: i32 = 25;

const YELLOW: Color = Color::new(255, 255, 0, 255);

/// A playable section and the function that runs it.
pub struct Section {
    pub label: &'static str,
    pub launch: fn(&LaunchOptions) -> anyhow::Result<()>,
}

pub const SECTIONS: &[Section] = &[Section { label: "Level 1", launch: game::run }];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub rect: Rect,
    pub section: usize,
}

/// Buttons stacked downwards from the middle of the screen.
pub fn layout_buttons(count: usize) -> Vec<Button> {
    (0..count)
        .map(|i| Button {
            rect: Rect::new(
                SCREEN_WIDTH / 2 - BUTTON_W / 2,
                SCREEN_HEIGHT / 2 + i as i32 * (BUTTON_H + BUTTON_GAP),
                BUTTON_W,
                BUTTON_H,
            ),
            section: i,
        })
        .collect()
}

pub fn hit_test(buttons: &[Button], x: f32, y: f32) -> Option<&Button> {
    buttons.iter().find(|b| b.rect.contains_point(x, y))
}

struct MenuArt {
    background: Option<Texture2D>,
    title_font: Option<Font>,
}

impl MenuArt {
    fn load(display: &mut Display, opts: &LaunchOptions) -> Self {
        let Display { rl, thread } = display;
        Self {
            background: textures::load_texture_scaled(
                rl,
                thread,
                &opts.assets.join(BACKGROUND_IMAGE),
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
            ),
            title_font: textures::load_font(rl, thread, &opts.assets.join(TITLE_FONT), TITLE_SIZE),
        }
    }

    fn draw<D: RaylibDraw>(&self, d: &mut D, buttons: &[Button], hovered: Option<usize>) {
        d.clear_background(Color::BLACK);
        if let Some(bg) = &self.background {
            d.draw_texture(bg, 0, 0, Color::WHITE);
        }
        d.draw_rectangle(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT, Color::new(0, 0, 0, 128));

        let font = self.title_font.as_ref();
        let x = SCREEN_WIDTH / 2 - approx_text_width(TITLE, TITLE_SIZE) / 2;
        let y = SCREEN_HEIGHT / 4 - TITLE_SIZE / 2;
        draw_label(d, font, TITLE, x + SHADOW_OFFSET, y + SHADOW_OFFSET, TITLE_SIZE, Color::BLACK);
        draw_label(d, font, TITLE, x, y, TITLE_SIZE, YELLOW);

        for b in buttons {
            let color = if hovered == Some(b.section) { Color::WHITE } else { YELLOW };
            let r = b.rect;
            d.draw_rectangle_lines_ex(
                Rectangle::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32),
                3.0,
                color,
            );
            let label = SECTIONS[b.section].label;
            let (cx, cy) = r.center();
            let lx = cx - approx_text_width(label, BUTTON_TEXT_SIZE) / 2;
            d.draw_text(label, lx, cy - BUTTON_TEXT_SIZE / 2, BUTTON_TEXT_SIZE, color);
        }
    }
}

/// Shows the menu until a section is chosen or the window is closed. The
/// menu window is gone before the chosen section starts.
pub fn run(opts: &LaunchOptions) -> anyhow::Result<()> {
    let mut display = Display::open(SCREEN_WIDTH, SCREEN_HEIGHT, TITLE, opts.config.fps);
    let art = MenuArt::load(&mut display, opts);
    let buttons = layout_buttons(SECTIONS.len());

    let mut chosen = None;
    while !display.rl.window_should_close() {
        let mouse = display.rl.get_mouse_position();
        let hovered = hit_test(&buttons, mouse.x, mouse.y).map(|b| b.section);
        if display.rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && hovered.is_some() {
            chosen = hovered;
            break;
        }
        let mut d = display.rl.begin_drawing(&display.thread);
        art.draw(&mut d, &buttons, hovered);
    }

    drop(art);
    display.close();

    match chosen {
        Some(i) => {
            let section = &SECTIONS[i];
            log::info!("starting {}", section.label);
            (section.launch)(opts).map_err(|err| err.context(format!("running {}", section.label)))
        }
        None => Ok(()),
    }
}
