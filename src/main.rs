use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod viewer;

use quote_carousel::carousel::Debounce;
use quote_carousel::constants::*;
use quote_carousel::{CarouselConfig, Input, Key, Page};

use crate::viewer::cli::Args;
use crate::viewer::content::{generated_cards, image_cards, quote_slides};
use crate::viewer::scene::{Hit, Panel};

const QUOTE_WIDTH: f32 = 720.0;
const QUOTE_HEIGHT: f32 = 260.0;
const CARD_WIDTH: f32 = 320.0;
const CARD_HEIGHT: f32 = 220.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Carousel Viewer")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Mount Carousels ---
    let mut page = Page::new(rl.get_screen_width() as f32);
    let mut panels = Vec::new();
    let mut top = 60.0;
    if args.layout.shows_quotes() {
        panels.push(Panel::mount(
            &mut page,
            CarouselConfig::quotes().with_autoplay(args.autoplay()),
            quote_slides(args.shuffle),
            QUOTE_WIDTH,
            QUOTE_HEIGHT,
            top,
        ));
        top = 400.0;
    }
    if args.layout.shows_pages() {
        let cards = match &args.image_dir {
            Some(dir) => image_cards(&mut rl, &thread, dir, args.shuffle)?,
            None => generated_cards(args.slides),
        };
        panels.push(Panel::mount(
            &mut page,
            CarouselConfig::pages(),
            cards,
            CARD_WIDTH,
            CARD_HEIGHT,
            top,
        ));
    }
    info!(carousels = page.len(), "viewer initialized");

    let mut resize = Debounce::new(RESIZE_DEBOUNCE);
    let mut minimized = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(FRAME_TIME * 4.0); // realtime, capped after stalls
        let screen_width = rl.get_screen_width() as f32;

        // 1. Page-level signals
        if rl.is_window_resized() {
            resize.push(screen_width);
        }
        if let Some(width) = resize.tick(dt) {
            page.resize(width);
        }
        if rl.is_window_minimized() != minimized {
            minimized = !minimized;
            page.set_hidden(minimized);
        }

        // 2. Pointer
        let mouse = rl.get_mouse_position();
        for panel in panels.iter_mut() {
            let inside = panel
                .bounds(&page, screen_width)
                .check_collision_point_rec(mouse);
            if inside != panel.hovered {
                panel.hovered = inside;
                let input = if inside { Input::PointerEnter } else { Input::PointerLeave };
                page.dispatch(panel.id, input);
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mut focus = None;
            for panel in panels.iter_mut() {
                if let Some(hit) = panel.hit(&page, screen_width, mouse) {
                    focus = Some(panel.id);
                    panel.dragging = hit == Hit::Track;
                    page.dispatch(panel.id, Panel::input_for(hit, mouse.x));
                }
            }
            page.focus(focus);
        }
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            for panel in panels.iter_mut().filter(|p| p.dragging) {
                panel.dragging = false;
                page.dispatch(panel.id, Input::PointerUp { x: mouse.x });
            }
        }

        // 3. Keyboard, routed to the focused carousel only
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            page.key(Key::ArrowLeft);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            page.key(Key::ArrowRight);
        }

        // 4. Clock
        page.tick(dt);
        for (id, event) in page.drain_events() {
            info!(carousel = id, ?event, "position changed");
        }
        for panel in panels.iter() {
            panel.update(dt);
        }

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        for panel in panels.iter() {
            panel.draw(&mut d, &page, page.focused() == Some(panel.id));
        }
        d.draw_text(
            "click a carousel to focus it, then use the arrow keys",
            20,
            d.get_screen_height() - 30,
            18,
            Color::GRAY,
        );
    }

    page.unload();
    Ok(())
}
