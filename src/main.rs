use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod animator;
mod constants;
mod controller;
mod counter;
mod deck;
mod display;
mod effects;
mod input;
mod layout;
mod market;
mod presenter;
mod render;
mod state;
mod texture_loader;
mod timer;

use crate::constants::*;
use crate::deck::Deck;
use crate::presenter::Presenter;

const BUNDLED_DECK: &str = include_str!("../decks/duoweave.md");

/// Present a slide deck in a window.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Deck markup file; the bundled DuoWeave deck is shown when omitted
    deck: Option<PathBuf>,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Navigation lock window in milliseconds
    #[arg(long, default_value_t = (TRANSITION_DURATION * 1000.0) as u64)]
    transition_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let deck = match &args.deck {
        Some(path) => Deck::load(path).with_context(|| format!("loading deck {}", path.display()))?,
        None => Deck::parse(BUNDLED_DECK, &std::env::current_dir()?)?,
    };
    info!(slides = deck.slides.len(), "deck loaded");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Pitch Deck")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape dismisses the help overlay instead of closing the window
    rl.set_exit_key(None);

    let transition = args.transition_ms as f64 / 1000.0;
    let mut presenter = Presenter::new(deck, transition, rl.get_time(), &mut rand::rng())?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = rl.get_time();
        presenter.tick(now);

        for command in input::poll(&mut rl) {
            presenter.command(command, now);
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            let (w, h) = (rl.get_screen_width() as f32, rl.get_screen_height() as f32);
            presenter.click(point, w, h, now);
        }

        presenter.load_images(&mut rl, &thread, now);

        let mut d = rl.begin_drawing(&thread);
        render::draw_frame(&mut d, &presenter, now);
    }

    info!("presentation closed");
    Ok(())
}
