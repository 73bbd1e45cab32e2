pub const RENDER_WIDTH: i32 = 1280;           // Initial viewer window width
pub const RENDER_HEIGHT: i32 = 720;           // Initial viewer window height
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const TRANSITION_DURATION: f32 = 0.5;     // Window during which new moves are dropped (seconds)
pub const AUTOPLAY_INTERVAL: f32 = 5.0;       // Period between autoplay advances (seconds)
pub const RESIZE_DEBOUNCE: f32 = 0.25;        // Quiet time before a resize is applied (seconds)

pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal drag that counts as a swipe
pub const SLIDE_GAP: f32 = 32.0;              // Space between two slides on the track

pub const BREAKPOINT_SMALL: f32 = 768.0;      // Below this width one slide fits per page
pub const BREAKPOINT_MEDIUM: f32 = 1200.0;    // Below this width two slides fit per page
