use super::constants::SWIPE_MIN_PX;

/// Where a card sits relative to the active one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardSlot {
    Active,
    Previous,
    Next,
    Hidden,
}

impl CardSlot {
    pub const ALL_CLASSES: [&'static str; 4] = ["is-active", "is-prev", "is-next", "is-hidden"];

    pub fn class_name(self) -> &'static str {
        match self {
            CardSlot::Active => "is-active",
            CardSlot::Previous => "is-prev",
            CardSlot::Next => "is-next",
            CardSlot::Hidden => "is-hidden",
        }
    }
}

/// What the caller should do with the autoplay timer after a state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayCommand {
    Start,
    Stop,
    Keep,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    active: usize,
    hover: bool,
    in_view: bool,
    lightbox_open: bool,
    autoplay_running: bool,
}

impl Carousel {
    /// Returns `None` for an empty card set; there is nothing to rotate.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            active: 0,
            hover: false,
            in_view: true,
            lightbox_open: false,
            autoplay_running: false,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn set_active(&mut self, index: isize) -> usize {
        let n = self.len as isize;
        self.active = index.rem_euclid(n) as usize;
        self.active
    }

    pub fn next(&mut self) -> usize {
        self.set_active(self.active as isize + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.set_active(self.active as isize - 1)
    }

    pub fn slot(&self, index: usize) -> CardSlot {
        let prev = (self.active + self.len - 1) % self.len;
        let next = (self.active + 1) % self.len;
        if index == self.active {
            CardSlot::Active
        } else if index == prev {
            CardSlot::Previous
        } else if index == next {
            CardSlot::Next
        } else {
            CardSlot::Hidden
        }
    }

    pub fn slots(&self) -> Vec<CardSlot> {
        (0..self.len).map(|i| self.slot(i)).collect()
    }

    // ---------------- Autoplay gating ----------------

    pub fn autoplay_allowed(&self) -> bool {
        !self.hover && self.in_view && !self.lightbox_open
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay_running
    }

    /// Starting is idempotent: a running timer is kept.
    pub fn start_autoplay(&mut self) -> AutoplayCommand {
        if self.autoplay_running || !self.autoplay_allowed() {
            return AutoplayCommand::Keep;
        }
        self.autoplay_running = true;
        AutoplayCommand::Start
    }

    pub fn stop_autoplay(&mut self) -> AutoplayCommand {
        if !self.autoplay_running {
            return AutoplayCommand::Keep;
        }
        self.autoplay_running = false;
        AutoplayCommand::Stop
    }

    pub fn set_hover(&mut self, hover: bool) -> AutoplayCommand {
        self.hover = hover;
        self.reconcile()
    }

    pub fn set_in_view(&mut self, in_view: bool) -> AutoplayCommand {
        self.in_view = in_view;
        self.reconcile()
    }

    pub fn set_lightbox_open(&mut self, open: bool) -> AutoplayCommand {
        self.lightbox_open = open;
        self.reconcile()
    }

    fn reconcile(&mut self) -> AutoplayCommand {
        if self.autoplay_allowed() {
            self.start_autoplay()
        } else {
            self.stop_autoplay()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Prev,
}

/// Horizontal touch gesture tracker for the carousel stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    end_x: Option<f64>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn touch_move(&mut self, x: f64) {
        self.end_x = Some(x);
    }

    pub fn touch_end(&mut self) -> Option<SwipeDirection> {
        let (start, end) = (self.start_x?, self.end_x?);
        swipe_direction(start - end)
    }
}

/// `dx` is start minus end; a leftward swipe (positive) advances.
pub fn swipe_direction(dx: f64) -> Option<SwipeDirection> {
    if dx > SWIPE_MIN_PX {
        Some(SwipeDirection::Next)
    } else if dx < -SWIPE_MIN_PX {
        Some(SwipeDirection::Prev)
    } else {
        None
    }
}

pub fn dot_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}
