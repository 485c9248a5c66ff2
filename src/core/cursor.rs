use super::constants::{
    CURSOR_EASE, CURSOR_MAX_FPS, CURSOR_POINTER_THROTTLE_MS, SMALL_VIEWPORT_MAX_PX,
};
use super::timing::{FrameLimiter, Throttle};
use glam::Vec2;

/// Elements that switch the cursor into its hover style.
pub const INTERACTIVE_SELECTORS: &[&str] = &[
    "a",
    "button",
    ".carousel-card",
    ".carousel-nav",
    ".media-img",
    ".skill-item",
    ".lang-toggle",
    "input",
    "textarea",
    ".connect-btn",
];

pub fn interactive_selector() -> String {
    INTERACTIVE_SELECTORS.join(", ")
}

/// Custom cursor only on hover-capable fine pointers with room to draw it.
pub fn cursor_enabled(no_hover: bool, coarse_pointer: bool, width_px: f64) -> bool {
    !no_hover && !coarse_pointer && width_px >= SMALL_VIEWPORT_MAX_PX
}

#[inline]
pub fn lerp_toward(current: Vec2, target: Vec2, ease: f32) -> Vec2 {
    current + (target - current) * ease
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    pub mouse: Vec2,
    pub outline: Vec2,
    pub hovering: bool,
    running: bool,
    pointer_throttle: Throttle,
    frames: FrameLimiter,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            mouse: Vec2::ZERO,
            outline: Vec2::ZERO,
            hovering: false,
            running: false,
            pointer_throttle: Throttle::new(CURSOR_POINTER_THROTTLE_MS),
            frames: FrameLimiter::new(CURSOR_MAX_FPS),
        }
    }

    /// Records a pointer sample; returns false when throttled away.
    pub fn pointer_moved(&mut self, pos: Vec2, now_ms: f64) -> bool {
        if !self.pointer_throttle.ready(now_ms) {
            return false;
        }
        self.mouse = pos;
        true
    }

    /// Advances the trailing outline. Returns false when the frame was skipped
    /// by the rate cap or the follower is suspended.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.running || !self.frames.should_update(now_ms) {
            return false;
        }
        self.outline = lerp_toward(self.outline, self.mouse, CURSOR_EASE);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if the loop was stopped and needs rescheduling.
    pub fn resume(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.frames.reset();
        true
    }

    pub fn suspend(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        std::mem::replace(&mut self.hovering, hovering) != hovering
    }
}

/// CSS translate placing an element's center at `pos`.
pub fn centered_transform(pos: Vec2) -> String {
    format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", pos.x, pos.y)
}
