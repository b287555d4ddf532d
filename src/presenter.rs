use std::collections::HashMap;
use rand::Rng;
use raylib::prelude::*;
use tracing::debug;

use crate::constants::*;
use crate::controller::Presentation;
use crate::counter::CounterAnimation;
use crate::deck::{CardStyle, Deck, DeckError, Element};
use crate::effects::{self, Particle};
use crate::input::Command;
use crate::layout;
use crate::market::{self, MarketHighlight};
use crate::texture_loader::LazyImages;

/// Everything on screen around the presentation: help overlay, counters,
/// market highlight, lazily loaded images and decorations.
pub struct Presenter {
    presentation: Presentation,
    help_visible: bool,
    market: MarketHighlight,
    counters: HashMap<(usize, usize), (CounterAnimation, f64)>,
    images: LazyImages,
    particles: Vec<Particle>,
}

impl Presenter {
    pub fn new(deck: Deck, transition_duration: f64, now: f64, rng: &mut impl Rng) -> Result<Self, DeckError> {
        Ok(Self {
            presentation: Presentation::new(deck, transition_duration, now)?,
            help_visible: false,
            market: MarketHighlight::new(),
            counters: HashMap::new(),
            images: LazyImages::new(),
            particles: effects::particles(rng),
        })
    }

    /// Handles a key command. Timers due at `now` fire first, so a lock
    /// whose window has passed never swallows the command.
    pub fn command(&mut self, command: Command, now: f64) {
        self.tick(now);
        let p = &mut self.presentation;
        match command {
            Command::Advance => {
                p.advance(now);
            }
            Command::Retreat => {
                p.retreat(now);
            }
            Command::First => {
                p.jump_to(0, now);
            }
            Command::Last => {
                let last = p.total_slides() - 1;
                p.jump_to(last, now);
            }
            Command::ShowHelp => self.help_visible = true,
            Command::HideHelp => self.help_visible = false,
        }
    }

    /// Left click at `point` in a window of `width` x `height`.
    ///
    /// The help overlay covers the whole window: while it is shown only its
    /// Close button reacts, besides the market labels being dismissed.
    pub fn click(&mut self, point: Vector2, width: f32, height: f32, now: f64) {
        self.tick(now);

        if self.help_visible {
            if layout::help_close_button(width, height).check_collision_point_rec(point) {
                self.help_visible = false;
            }
            self.market.dismiss();
            return;
        }

        if layout::prev_button(width, height).check_collision_point_rec(point) {
            self.command(Command::Retreat, now);
        } else if layout::next_button(width, height).check_collision_point_rec(point) {
            self.command(Command::Advance, now);
        }

        if width > COMPACT_WIDTH as f32 {
            return;
        }
        match self.market_hit(point, width) {
            Some(circle) => self.market.tap(circle, now),
            None => self.market.dismiss(),
        }
    }

    /// Market circle under `point` on the current slide, if it has one.
    pub fn market_hit(&self, point: Vector2, width: f32) -> Option<market::Circle> {
        let index = self.presentation.current_index();
        let slide = &self.presentation.deck().slides[index];
        let rects = layout::slide_layout(slide, width);

        slide
            .elements
            .iter()
            .zip(rects)
            .filter(|(e, _)| matches!(e, Element::Market { .. }))
            .find_map(|(_, area)| {
                let (centre, radii) = layout::market_circles(area);
                market::hit(centre.distance_to(point), radii)
            })
    }

    /// Advances timers to `now`: fires navigation tasks, starts counters and
    /// requests images for slides that just became active.
    pub fn tick(&mut self, now: f64) {
        for (index, at) in self.presentation.tick(now) {
            let slide = &self.presentation.deck().slides[index];
            for (element, item) in slide.elements.iter().enumerate() {
                if let Element::Card { style: CardStyle::Metric, value, .. } = item {
                    if let Some(counter) = CounterAnimation::parse(value) {
                        self.counters.insert((index, element), (counter, at));
                    }
                }
            }
            for path in slide.images() {
                self.images.request(path);
            }
            debug!(slide = index + 1, "slide active");
        }
        self.market.tick(now);
    }

    pub fn load_images(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, now: f64) {
        self.images.load_pending(rl, thread, now);
    }

    /// Text shown for a metric value, counting up if it is animated.
    pub fn metric_text(&self, slide: usize, element: usize, value: &str, now: f64) -> String {
        match self.counters.get(&(slide, element)) {
            Some((counter, started)) => counter.text_at(now - started),
            None => value.to_string(),
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn market(&self) -> &MarketHighlight {
        &self.market
    }

    pub fn images(&self) -> &LazyImages {
        &self.images
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
