use raylib::prelude::*;

use crate::animator::{SlidePhase, SlideVisual};
use crate::constants::*;
use crate::deck::{CardStyle, Element, Slide};
use crate::effects;
use crate::layout::{self, PROGRESS_HEIGHT};
use crate::market;
use crate::presenter::Presenter;
use crate::texture_loader::ImageSlot;

const BACKGROUND: Color = Color::new(15, 23, 42, 255);
const TEXT: Color = Color::new(241, 245, 249, 255);
const MUTED: Color = Color::new(148, 163, 184, 255);
const ACCENT: Color = Color::new(59, 130, 246, 255);
const CARD: Color = Color::new(30, 41, 59, 255);
const CARD_HOVER: Color = Color::new(51, 65, 85, 255);
const SKELETON: Color = Color::new(51, 65, 85, 255);

const HELP_LINES: [(&str, &str); 5] = [
    ("Next slide:", "Right"),
    ("Previous slide:", "Left"),
    ("First slide:", "Home"),
    ("Last slide:", "End"),
    ("Space:", "Space"),
];

fn fade(color: Color, alpha: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha.clamp(0.0, 1.0)) as u8)
}

/// Eased 0..1 progress of an animation started at `since`.
fn progress(now: f64, since: f64, duration: f64) -> f32 {
    let t = ((now - since) / duration).clamp(0.0, 1.0) as f32;
    ease::cubic_out(t, 0.0, 1.0, 1.0)
}

pub fn draw_frame(d: &mut RaylibDrawHandle, presenter: &Presenter, now: f64) {
    let width = d.get_screen_width() as f32;
    let height = d.get_screen_height() as f32;
    let mouse = d.get_mouse_position();
    let presentation = presenter.presentation();

    d.clear_background(BACKGROUND);

    let slides = presentation.deck().slides.iter().zip(presentation.visuals());
    for (index, (slide, visual)) in slides.enumerate() {
        if let SlidePhase::Active { since } = visual.phase {
            draw_slide(d, presenter, index, slide, visual, since, now, width, mouse);
        }
    }

    // Progress bar and counter
    let display = presentation.display();
    d.draw_rectangle_rec(
        Rectangle::new(0.0, 0.0, width * display.progress_percent / 100.0, PROGRESS_HEIGHT),
        ACCENT,
    );
    let counter_width = d.measure_text(&display.counter_text, 20);
    d.draw_text(&display.counter_text, width as i32 - counter_width - 24, height as i32 - 48, 20, MUTED);

    draw_button(d, layout::prev_button(width, height), "Prev", mouse);
    draw_button(d, layout::next_button(width, height), "Next", mouse);

    if presenter.help_visible() {
        draw_help(d, width, height, mouse);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_slide(
    d: &mut RaylibDrawHandle,
    presenter: &Presenter,
    index: usize,
    slide: &Slide,
    visual: &SlideVisual,
    since: f64,
    now: f64,
    width: f32,
    mouse: Vector2,
) {
    let entered = progress(now, since, SLIDE_FADE_DURATION);
    let slide_dy = 30.0 * (1.0 - entered);
    let time = (now - since) as f32;

    if index == 0 {
        let height = d.get_screen_height() as f32;
        for particle in presenter.particles() {
            let y = particle.y * height + particle.offset_at(time);
            d.draw_circle_v(Vector2::new(particle.x * width, y), 2.0, fade(Color::WHITE, 0.3 * entered));
        }
    }
    if index == SHIELD_SLIDE {
        draw_shield(d, Vector2::new(width - 110.0, 90.0 + effects::float_offset(time, 0.0, 3.0)), fade(TEXT, 0.2 * entered));
    }

    let rects = layout::slide_layout(slide, width);
    for (element_index, (element, rect)) in slide.elements.iter().zip(rects).enumerate() {
        let Some(revealed_at) = visual.revealed.get(element_index).copied().flatten() else {
            continue;
        };
        let shown = progress(now, revealed_at, ELEMENT_FADE_DURATION);
        let alpha = entered.min(shown);
        let rect = Rectangle::new(rect.x, rect.y + slide_dy, rect.width, rect.height);

        match element {
            Element::Heading { text, .. } => {
                let dy = 20.0 * (1.0 - shown);
                let color = if element_index == 0 { TEXT } else { ACCENT };
                d.draw_text(text, rect.x as i32, (rect.y + dy) as i32, layout::font_size(element), fade(color, alpha));
            }
            Element::Paragraph(text) => {
                d.draw_text(text, rect.x as i32, rect.y as i32, layout::font_size(element), fade(MUTED, alpha));
            }
            Element::ListItem(text) => {
                let x = rect.x - 20.0 * (1.0 - shown);
                let size = layout::font_size(element);
                d.draw_circle_v(Vector2::new(x + 6.0, rect.y + size as f32 * 0.5), 4.0, fade(ACCENT, alpha));
                d.draw_text(text, (x + 22.0) as i32, rect.y as i32, size, fade(TEXT, alpha));
            }
            Element::Card { style, title, value } => {
                let scale = 0.9 + 0.1 * shown;
                let (w, h) = (rect.width * scale, rect.height * scale);
                let card = Rectangle::new(
                    rect.x + (rect.width - w) * 0.5,
                    rect.y + (rect.height - h) * 0.5 + 30.0 * (1.0 - shown),
                    w,
                    h,
                );
                let fill = if card.check_collision_point_rec(mouse) { CARD_HOVER } else { CARD };
                d.draw_rectangle_rounded(card, 0.12, 8, fade(fill, alpha));
                if *style == CardStyle::Metric {
                    d.draw_rectangle_rec(Rectangle::new(card.x, card.y, 4.0, card.height), fade(ACCENT, alpha));
                }
                let value = match style {
                    CardStyle::Metric => presenter.metric_text(index, element_index, value, now),
                    CardStyle::Data => value.clone(),
                };
                d.draw_text(&value, (card.x + 20.0) as i32, (card.y + 22.0) as i32, 40, fade(TEXT, alpha));
                d.draw_text(title, (card.x + 20.0) as i32, (card.y + card.height - 40.0) as i32, 20, fade(MUTED, alpha));
            }
            Element::Market { labels } => draw_market(d, presenter, rect, labels, mouse, width, alpha),
            Element::Image { alt, path } => draw_image(d, presenter.images().get(path), rect, alt, now, alpha),
        }
    }
}

fn draw_market(
    d: &mut RaylibDrawHandle,
    presenter: &Presenter,
    area: Rectangle,
    labels: &[String; 3],
    mouse: Vector2,
    width: f32,
    alpha: f32,
) {
    let (centre, radii) = layout::market_circles(area);
    // Compact windows show the tapped label; wide windows follow the mouse
    let highlighted = if width <= COMPACT_WIDTH as f32 {
        presenter.market().shown()
    } else {
        market::hit(centre.distance_to(mouse), radii)
    };

    for circle in market::Circle::ALL {
        let i = circle.index();
        let tint = 0.25 + 0.2 * i as f32;
        d.draw_circle_v(centre, radii[i], fade(ACCENT, tint * alpha));
    }
    if let Some(circle) = highlighted {
        let label = &labels[circle.index()];
        let size = 24;
        let x = centre.x as i32 - d.measure_text(label, size) / 2;
        let y = (centre.y - radii[circle.index()]) as i32 + 12;
        d.draw_text(label, x, y, size, fade(TEXT, alpha));
    }
}

fn draw_image(d: &mut RaylibDrawHandle, slot: Option<&ImageSlot>, area: Rectangle, alt: &str, now: f64, alpha: f32) {
    match slot {
        Some(ImageSlot::Loaded { texture, loaded_at }) => {
            let shown = progress(now, *loaded_at, IMAGE_FADE_DURATION);
            let (tw, th) = (texture.width() as f32, texture.height() as f32);
            let scale = (area.width / tw).min(area.height / th);
            let (w, h) = (tw * scale, th * scale);
            let dy = 20.0 * (1.0 - shown);
            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tw, th),
                Rectangle::new(area.x, area.y + dy, w, h),
                Vector2::new(0.0, 0.0),
                0.0,
                fade(Color::WHITE, shown.min(alpha)),
            );
        }
        // Loading skeleton, kept when the load failed
        _ => {
            let pulse = 0.6 + 0.4 * ((now * 3.0).sin() as f32).abs();
            d.draw_rectangle_rounded(area, 0.05, 8, fade(SKELETON, pulse * alpha));
            d.draw_text(alt, area.x as i32 + 16, area.y as i32 + 16, 20, fade(MUTED, alpha));
        }
    }
}

fn draw_shield(d: &mut RaylibDrawHandle, centre: Vector2, color: Color) {
    let (w, h) = (60.0, 70.0);
    d.draw_rectangle_rec(Rectangle::new(centre.x - w * 0.5, centre.y - h * 0.5, w, h * 0.5), color);
    d.draw_triangle(
        Vector2::new(centre.x - w * 0.5, centre.y),
        Vector2::new(centre.x, centre.y + h * 0.5),
        Vector2::new(centre.x + w * 0.5, centre.y),
        color,
    );
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, mouse: Vector2) {
    let fill = if rect.check_collision_point_rec(mouse) { ACCENT } else { CARD };
    d.draw_rectangle_rounded(rect, 0.3, 8, fill);
    let size = 20;
    let x = rect.x as i32 + (rect.width as i32 - d.measure_text(label, size)) / 2;
    let y = rect.y as i32 + (rect.height as i32 - size) / 2;
    d.draw_text(label, x, y, size, TEXT);
}

fn draw_help(d: &mut RaylibDrawHandle, width: f32, height: f32, mouse: Vector2) {
    d.draw_rectangle_rec(Rectangle::new(0.0, 0.0, width, height), fade(Color::BLACK, 0.5));
    let panel = layout::help_panel(width, height);
    d.draw_rectangle_rounded(panel, 0.05, 8, Color::WHITE);

    let (x, mut y) = (panel.x as i32 + 32, panel.y as i32 + 28);
    d.draw_text("Keyboard Shortcuts", x, y, 28, BACKGROUND);
    y += 48;
    for (action, key) in HELP_LINES {
        d.draw_text(action, x, y, 20, BACKGROUND);
        let key_x = (panel.x + panel.width) as i32 - 32 - d.measure_text(key, 20);
        d.draw_text(key, key_x, y, 20, ACCENT);
        y += 32;
    }

    draw_button(d, layout::help_close_button(width, height), "Close", mouse);
}
