/// Browser-side constants: element ids, colours and canvas styling.
///
/// Simulation tuning lives in `core::constants`; everything here only
/// affects how a frame lands on the 2D canvas.
// Canvas picked up automatically by `start()`
pub const CANVAS_ID: &str = "particle-field";

// Palette
pub const BACKGROUND_CSS: &str = "#05050c";
pub const FADE_CSS: &str = "rgba(5, 5, 12, 0.15)"; // translucent, leaves short trails
pub const PARTICLE_CSS: &str = "rgb(220, 225, 240)";
pub const CONNECTION_CSS: &str = "rgb(180, 190, 220)";
pub const PULSE_RING_CSS: &str = "rgb(160, 175, 230)";

// Stroke widths (logical px)
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;
pub const PULSE_RING_LINE_WIDTH: f64 = 1.0;

// Frame timing is logged once per this many frames
pub const FRAME_STATS_INTERVAL: u32 = 600;
