use super::constants::FRAME_SLACK_MS;

/// Leading-edge throttle over a millisecond clock.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    /// True if the caller may run now; records `now_ms` when it does.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Caps how many updates an animation-frame loop computes per second.
#[derive(Clone, Copy, Debug)]
pub struct FrameLimiter {
    throttle: Throttle,
}

impl FrameLimiter {
    /// Frames arriving up to `FRAME_SLACK_MS` early still count, so a display
    /// refreshing at exactly `max_fps` is not halved by timestamp jitter.
    pub fn new(max_fps: f64) -> Self {
        Self {
            throttle: Throttle::new(1000.0 / max_fps - FRAME_SLACK_MS),
        }
    }

    pub fn should_update(&mut self, now_ms: f64) -> bool {
        self.throttle.ready(now_ms)
    }

    /// Forget the last frame so the next one always updates (after a resume).
    pub fn reset(&mut self) {
        self.throttle.last_ms = None;
    }
}
