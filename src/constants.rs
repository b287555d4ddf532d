pub const RENDER_WIDTH: i32 = 1280;           // Default window width
pub const RENDER_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const TRANSITION_DURATION: f64 = 0.8;     // Navigation lock window (seconds)
pub const ACTIVATE_DELAY: f64 = 0.1;          // Delay before the target slide becomes active (seconds)
pub const SLIDE_FADE_DURATION: f64 = 0.8;     // Slide opacity/translate transition (seconds)
pub const ELEMENT_FADE_DURATION: f64 = 0.6;   // Per element entrance animation (seconds)

pub const HEADING_STAGGER: f64 = 0.2;         // Delay between headings (seconds)
pub const CARD_STAGGER: f64 = 0.15;           // Delay between cards and metrics (seconds)
pub const LIST_ITEM_STAGGER: f64 = 0.1;       // Delay between list items (seconds)

pub const COUNTER_FRAMES: u32 = 60;           // Steps a counter takes to reach its target
pub const COUNTER_FRAME_TIME: f64 = 0.016;    // Time per counter step (seconds)

pub const IMAGE_FADE_DURATION: f64 = 0.6;     // Fade-in after a lazy image finishes loading (seconds)

pub const MARKET_LABEL_DURATION: f64 = 3.0;   // Auto-hide for a tapped market circle (seconds)
pub const COMPACT_WIDTH: i32 = 768;           // At or below this width market circles react to taps

pub const PARTICLE_COUNT: usize = 20;         // Particles on the cover slide
pub const FLOAT_AMPLITUDE: f32 = 10.0;        // Vertical travel of floating decorations (pixels)
pub const SHIELD_SLIDE: usize = 2;            // Slide carrying the floating shield icon
