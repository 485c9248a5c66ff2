// Tuning constants shared by the pure state machines.

// Viewport
pub const SMALL_VIEWPORT_MAX_PX: f64 = 768.0; // widths at or below use the reduced reveal set

// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: f64 = 30.0;
pub const SECTION_REVEAL_OFFSET_PX: f64 = 50.0;
pub const SECTION_STAGGER_SEC: f64 = 0.2;

// Skill bars
pub const SKILL_BARS_THRESHOLD: f64 = 0.5;
pub const SKILL_BARS_DELAY_MS: u32 = 500;

// Carousel
pub const AUTOPLAY_INTERVAL_MS: u32 = 4000;
pub const CAROUSEL_VIEW_THRESHOLD: f64 = 0.2;
pub const SWIPE_MIN_PX: f64 = 50.0; // exclusive

// Frame pacing
pub const FRAME_SLACK_MS: f64 = 1.0; // rAF timestamps jitter around the refresh interval

// Cursor
pub const CURSOR_EASE: f32 = 0.15;
pub const CURSOR_MAX_FPS: f64 = 60.0;
pub const CURSOR_POINTER_THROTTLE_MS: f64 = 8.0;

// Flying bug
pub const BUG_MAX_FPS: f64 = 30.0;
pub const BUG_ARRIVE_RADIUS: f32 = 50.0;
pub const BUG_RETARGET_PROBABILITY: f64 = 0.005;
pub const BUG_TARGET_MARGIN: f32 = 50.0;
pub const BUG_FLEE_RADIUS: f32 = 80.0;
pub const BUG_STEP_FRACTION: f32 = 0.015;
pub const BUG_JITTER: f32 = 0.5; // max absolute jitter per axis per tick
pub const BUG_EDGE_MARGIN: f32 = 20.0;
pub const BUG_CATCH_RADIUS: f32 = 25.0;
pub const BUG_POINTER_THROTTLE_MS: f64 = 16.0;
pub const BUG_RESPAWN_MS: u32 = 3000;

// Skills reveal
pub const SKILL_RING_RADIUS: f64 = 35.0;
pub const LOGO_FADE_MS: u32 = 250;
pub const CAPTION_SWAP_MS: u32 = 250;
pub const SKILLS_CONTAINER_MS: u32 = 800;
pub const RING_FILL_DELAY_MS: u32 = 500;
pub const RING_STAGGER_MS: u32 = 200;
pub const CAPTION_RESTORE_MS: u32 = 300;
pub const LANGUAGE_REFRESH_MS: u32 = 100;

// Notifications
pub const NOTICE_SLIDE_IN_MS: u32 = 100;
pub const NOTICE_DISMISS_MS: u32 = 5000;
pub const NOTICE_SLIDE_OUT_MS: u32 = 300;

// Scroll effects
pub const SCROLL_THROTTLE_MS: f64 = 16.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;
pub const PARALLAX_ROTATE_PER_PX: f64 = 0.1;
