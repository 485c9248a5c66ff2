use super::constants::{
    BUG_ARRIVE_RADIUS, BUG_CATCH_RADIUS, BUG_EDGE_MARGIN, BUG_FLEE_RADIUS, BUG_JITTER,
    BUG_MAX_FPS, BUG_POINTER_THROTTLE_MS, BUG_RETARGET_PROBABILITY, BUG_STEP_FRACTION,
    BUG_TARGET_MARGIN, SMALL_VIEWPORT_MAX_PX,
};
use super::timing::{FrameLimiter, Throttle};
use glam::Vec2;
use rand::Rng;

const MOBILE_AGENTS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

pub fn is_mobile_agent(user_agent: &str) -> bool {
    MOBILE_AGENTS.iter().any(|m| user_agent.contains(m))
}

pub fn bug_enabled(user_agent: &str, width_px: f64) -> bool {
    !is_mobile_agent(user_agent) && width_px >= SMALL_VIEWPORT_MAX_PX
}

/// Uniform point inside the viewport, keeping `margin` from every edge.
pub fn random_point(rng: &mut impl Rng, viewport: Vec2, margin: f32) -> Vec2 {
    let span = (viewport - Vec2::splat(2.0 * margin)).max(Vec2::ZERO);
    Vec2::new(
        margin + rng.gen::<f32>() * span.x,
        margin + rng.gen::<f32>() * span.y,
    )
}

/// Point mirrored through `pos` away from `pointer`, kept inside the margin.
pub fn flee_target(pos: Vec2, pointer: Vec2, viewport: Vec2) -> Vec2 {
    let mirrored = pos + (pos - pointer);
    clamp_to_viewport(mirrored, viewport, BUG_TARGET_MARGIN)
}

pub fn clamp_to_viewport(p: Vec2, viewport: Vec2, margin: f32) -> Vec2 {
    let min = Vec2::splat(margin);
    let max = (viewport - Vec2::splat(margin)).max(min);
    p.clamp(min, max)
}

#[derive(Clone, Debug)]
pub struct BugSprite {
    pub pos: Vec2,
    pub target: Vec2,
    pub caught: bool,
    viewport: Vec2,
    running: bool,
    frames: FrameLimiter,
    catch_throttle: Throttle,
}

impl BugSprite {
    pub fn spawn(rng: &mut impl Rng, viewport: Vec2) -> Self {
        Self {
            pos: random_point(rng, viewport, BUG_TARGET_MARGIN),
            target: random_point(rng, viewport, BUG_TARGET_MARGIN),
            caught: false,
            viewport,
            running: false,
            frames: FrameLimiter::new(BUG_MAX_FPS),
            catch_throttle: Throttle::new(BUG_POINTER_THROTTLE_MS),
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.pos = clamp_to_viewport(self.pos, viewport, BUG_EDGE_MARGIN);
        self.target = clamp_to_viewport(self.target, viewport, BUG_TARGET_MARGIN);
    }

    /// One motion step. Skipped (returns false) when rate-capped, caught or
    /// suspended.
    pub fn tick(&mut self, rng: &mut impl Rng, pointer: Option<Vec2>, now_ms: f64) -> bool {
        if !self.running || self.caught || !self.frames.should_update(now_ms) {
            return false;
        }
        self.step(rng, pointer);
        true
    }

    /// Motion math without rate limiting.
    pub fn step(&mut self, rng: &mut impl Rng, pointer: Option<Vec2>) {
        let to_target = self.target - self.pos;
        if to_target.length() < BUG_ARRIVE_RADIUS || rng.gen_bool(BUG_RETARGET_PROBABILITY) {
            self.target = random_point(rng, self.viewport, BUG_TARGET_MARGIN);
        }
        if let Some(p) = pointer {
            if self.pos.distance(p) < BUG_FLEE_RADIUS {
                self.target = flee_target(self.pos, p, self.viewport);
            }
        }
        let jitter = Vec2::new(
            rng.gen_range(-BUG_JITTER..=BUG_JITTER),
            rng.gen_range(-BUG_JITTER..=BUG_JITTER),
        );
        let moved = self.pos + (self.target - self.pos) * BUG_STEP_FRACTION + jitter;
        self.pos = clamp_to_viewport(moved, self.viewport, BUG_EDGE_MARGIN);
    }

    /// Heading in degrees, for rotating the sprite toward its target.
    pub fn heading_deg(&self) -> f32 {
        let d = self.target - self.pos;
        d.y.atan2(d.x).to_degrees()
    }

    /// CSS transform placing the sprite, nose pointing along its heading.
    pub fn transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) rotate({:.0}deg)",
            self.pos.x,
            self.pos.y,
            self.heading_deg() + 90.0
        )
    }

    /// Catch check against a pointer sample. True exactly once per catch.
    pub fn try_catch(&mut self, pointer: Vec2, now_ms: f64) -> bool {
        if self.caught || !self.catch_throttle.ready(now_ms) {
            return false;
        }
        if self.pos.distance(pointer) < BUG_CATCH_RADIUS {
            self.caught = true;
            self.running = false;
            return true;
        }
        false
    }

    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.pos = random_point(rng, self.viewport, BUG_TARGET_MARGIN);
        self.target = random_point(rng, self.viewport, BUG_TARGET_MARGIN);
        self.caught = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if the loop needs (re)scheduling.
    pub fn resume(&mut self) -> bool {
        if self.running || self.caught {
            return false;
        }
        self.running = true;
        self.frames.reset();
        true
    }

    pub fn suspend(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }
}
