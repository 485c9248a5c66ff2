// Host-side tests for reveal styles, scroll effects and timing helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
    pub mod timing {
        include!("../src/core/timing.rs");
    }
    pub mod page {
        include!("../src/core/page.rs");
    }
}

use crate::site::reveal::*;
use crate::site::scroll::*;
use crate::site::page::init_deferred;
use crate::site::timing::{FrameLimiter, Throttle};

#[test]
fn reveal_set_depends_on_width() {
    assert_eq!(reveal_selector(768.0), REDUCED_REVEAL_SELECTOR);
    assert_eq!(reveal_selector(375.0), REDUCED_REVEAL_SELECTOR);
    assert_eq!(reveal_selector(769.0), FULL_REVEAL_SELECTOR);
    assert!(FULL_REVEAL_SELECTOR.contains(".project-card"));
}

#[test]
fn reveal_styles() {
    let hidden = RevealStyle::hidden();
    assert_eq!(hidden.opacity, "0");
    assert_eq!(hidden.transform, "translateY(30px)");
    assert!(hidden.transition.is_some());

    let shown = RevealStyle::shown();
    assert_eq!(shown.opacity, "1");
    assert_eq!(shown.transform, "translateY(0)");
    assert_eq!(shown.transition, None);
}

#[test]
fn sections_are_staggered() {
    let first = RevealStyle::section_hidden(0);
    assert_eq!(first.transform, "translateY(50px)");
    assert_eq!(
        first.transition.as_deref(),
        Some("opacity 0.8s ease 0.0s, transform 0.8s ease 0.0s")
    );
    let fourth = RevealStyle::section_hidden(3);
    assert_eq!(
        fourth.transition.as_deref(),
        Some("opacity 0.8s ease 0.6s, transform 0.8s ease 0.6s")
    );
}

#[test]
fn skill_bar_levels() {
    assert_eq!(skill_bar_scale("85"), Some(0.85));
    assert_eq!(skill_bar_scale(" 100 "), Some(1.0));
    assert_eq!(skill_bar_scale("high"), None);
    assert_eq!(skill_bar_transform(0.5), "scaleX(0.5)");
}

#[test]
fn parallax_speeds_up_per_cube() {
    assert_eq!(parallax_transform(0.0, 0), "translateY(0.00px) rotate(0.00deg)");
    assert_eq!(
        parallax_transform(100.0, 0),
        "translateY(-50.00px) rotate(10.00deg)"
    );
    assert_eq!(
        parallax_transform(100.0, 2),
        "translateY(-70.00px) rotate(10.00deg)"
    );
}

#[test]
fn anchors() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/blog"), None);
}

#[test]
fn projects_buttons_swap() {
    assert_eq!(ProjectsView::default(), ProjectsView::Collapsed);
    assert_eq!(ProjectsView::Collapsed.button_display(), ("block", "none"));
    assert_eq!(ProjectsView::All.button_display(), ("none", "block"));
}

#[test]
fn throttle_is_leading_edge() {
    let mut t = Throttle::new(16.0);
    assert!(t.ready(1000.0));
    assert!(!t.ready(1010.0));
    assert!(t.ready(1016.0));
    assert!(!t.ready(1020.0));
}

#[test]
fn frame_limiter_reset_allows_next_frame() {
    let mut f = FrameLimiter::new(30.0);
    assert!(f.should_update(0.0));
    assert!(!f.should_update(30.0));
    assert!(f.should_update(34.0));
    f.reset();
    assert!(f.should_update(35.0));
}

#[test]
fn frame_limiter_tolerates_jitter_at_full_rate() {
    let mut f = FrameLimiter::new(60.0);
    // rAF timestamps on a 60Hz display, a little under 16.67ms apart.
    for t in [0.0, 16.5, 33.2, 49.8, 66.4, 83.0] {
        assert!(f.should_update(t), "frame at {t} dropped");
    }
    assert!(!f.should_update(86.0));
}

#[test]
fn frame_limiter_still_caps_fast_displays() {
    let mut f = FrameLimiter::new(60.0);
    let updates = (0..120)
        .map(|k| k as f64 * 1000.0 / 120.0)
        .filter(|t| f.should_update(*t))
        .count();
    assert_eq!(updates, 60);
}

#[test]
fn init_waits_only_while_loading() {
    assert!(init_deferred("loading"));
    assert!(!init_deferred("interactive"));
    assert!(!init_deferred("complete"));
}
