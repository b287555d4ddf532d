use raylib::prelude::*;
use crate::deck::{Element, Slide};

const MARGIN: f32 = 80.0;
const GAP: f32 = 18.0;
const CARD_HEIGHT: f32 = 130.0;
const MARKET_HEIGHT: f32 = 320.0;
const IMAGE_HEIGHT: f32 = 260.0;
const BUTTON_WIDTH: f32 = 100.0;
const BUTTON_HEIGHT: f32 = 40.0;

pub const PROGRESS_HEIGHT: f32 = 4.0;

pub fn font_size(element: &Element) -> i32 {
    match element {
        Element::Heading { level: 1, .. } => 56,
        Element::Heading { level: 2, .. } => 34,
        Element::Heading { .. } => 28,
        _ => 24,
    }
}

fn element_height(element: &Element) -> f32 {
    match element {
        Element::Card { .. } => CARD_HEIGHT,
        Element::Market { .. } => MARKET_HEIGHT,
        Element::Image { .. } => IMAGE_HEIGHT,
        other => font_size(other) as f32 * 1.25,
    }
}

/// One rectangle per element, top to bottom. Consecutive cards share a row.
pub fn slide_layout(slide: &Slide, width: f32) -> Vec<Rectangle> {
    let content_width = (width - 2.0 * MARGIN).max(1.0);
    let mut rects = Vec::with_capacity(slide.elements.len());
    let mut y = MARGIN;
    let mut i = 0;

    while i < slide.elements.len() {
        if matches!(slide.elements[i], Element::Card { .. }) {
            let run = slide.elements[i..]
                .iter()
                .take_while(|e| matches!(e, Element::Card { .. }))
                .count();
            let card_width = (content_width - GAP * (run - 1) as f32) / run as f32;
            for k in 0..run {
                let x = MARGIN + k as f32 * (card_width + GAP);
                rects.push(Rectangle::new(x, y, card_width, CARD_HEIGHT));
            }
            y += CARD_HEIGHT + GAP;
            i += run;
            continue;
        }

        let height = element_height(&slide.elements[i]);
        rects.push(Rectangle::new(MARGIN, y, content_width, height));
        y += height + GAP;
        i += 1;
    }
    rects
}

/// Centre and radii (TAM, SAM, SOM) of the market circles drawn in `area`.
pub fn market_circles(area: Rectangle) -> (Vector2, [f32; 3]) {
    let centre = Vector2::new(area.x + area.width * 0.5, area.y + area.height * 0.5);
    let outer = area.height.min(area.width) * 0.5;
    (centre, [outer, outer * 0.66, outer * 0.33])
}

pub fn prev_button(width: f32, height: f32) -> Rectangle {
    Rectangle::new(width * 0.5 - BUTTON_WIDTH - GAP * 0.5, height - BUTTON_HEIGHT - 20.0, BUTTON_WIDTH, BUTTON_HEIGHT)
}

pub fn next_button(width: f32, height: f32) -> Rectangle {
    Rectangle::new(width * 0.5 + GAP * 0.5, height - BUTTON_HEIGHT - 20.0, BUTTON_WIDTH, BUTTON_HEIGHT)
}

pub fn help_panel(width: f32, height: f32) -> Rectangle {
    let (w, h) = (440.0, 340.0);
    Rectangle::new((width - w) * 0.5, (height - h) * 0.5, w, h)
}

pub fn help_close_button(width: f32, height: f32) -> Rectangle {
    let panel = help_panel(width, height);
    Rectangle::new(panel.x + 32.0, panel.y + panel.height - BUTTON_HEIGHT - 24.0, BUTTON_WIDTH, BUTTON_HEIGHT)
}
