// Host-side tests for the skills logo reveal schedule and ring math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod skills {
        include!("../src/core/skills.rs");
    }
}

use crate::site::skills::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn ring_steps(steps: &[ScheduledStep]) -> Vec<(u32, usize, f64)> {
    steps
        .iter()
        .filter_map(|s| match s.step {
            RevealStep::SetRing { index, offset } => Some((s.at_ms, index, offset)),
            _ => None,
        })
        .collect()
}

#[test]
fn ring_offset_formula() {
    let c = ring_circumference();
    assert!(close(c, 2.0 * std::f64::consts::PI * 35.0));
    assert!(close(ring_offset(0.0), c));
    assert!(close(ring_offset(100.0), 0.0));
    assert!(close(ring_offset(75.0), c * 0.25));
    // Out-of-range percentages are clamped.
    assert!(close(ring_offset(150.0), 0.0));
    assert!(close(ring_offset(-10.0), c));
}

#[test]
fn percent_parsing() {
    assert_eq!(parse_percent(Some("85")), 85.0);
    assert_eq!(parse_percent(Some(" 60% ")), 60.0);
    assert_eq!(parse_percent(Some("lots")), 0.0);
    assert_eq!(parse_percent(Some("NaN")), 0.0);
    assert_eq!(parse_percent(None), 0.0);
}

#[test]
fn caption_attributes() {
    assert_eq!(CaptionKind::Logo.attribute("ar"), "data-lang-ar");
    assert_eq!(CaptionKind::Skills.attribute("en"), "data-skills-en");
}

#[test]
fn show_schedule() {
    let mut reveal = SkillsReveal::default();
    assert_eq!(reveal.view(), SkillsView::Logo);
    let steps = reveal.toggle(&[90.0, 50.0]);
    assert_eq!(reveal.view(), SkillsView::Skills);
    assert_eq!(reveal.caption(), CaptionKind::Skills);

    assert_eq!(
        steps[..4],
        [
            ScheduledStep {
                at_ms: 0,
                step: RevealStep::FadeLogo { out: true }
            },
            ScheduledStep {
                at_ms: 250,
                step: RevealStep::HideCaption
            },
            ScheduledStep {
                at_ms: 500,
                step: RevealStep::SetCaption(CaptionKind::Skills)
            },
            ScheduledStep {
                at_ms: 800,
                step: RevealStep::ShowContainer { visible: true }
            },
        ]
    );

    let rings = ring_steps(&steps);
    assert_eq!(rings.len(), 2);
    assert_eq!((rings[0].0, rings[0].1), (1300, 0));
    assert_eq!((rings[1].0, rings[1].1), (1500, 1));
    assert!(close(rings[0].2, ring_offset(90.0)));
    assert!(close(rings[1].2, ring_offset(50.0)));
    assert!(steps.windows(2).all(|w| w[0].at_ms <= w[1].at_ms));
}

#[test]
fn hide_schedule_resets_rings_at_once() {
    let mut reveal = SkillsReveal::default();
    reveal.toggle(&[90.0, 50.0, 10.0]);
    let steps = reveal.toggle(&[90.0, 50.0, 10.0]);
    assert_eq!(reveal.view(), SkillsView::Logo);

    let rings = ring_steps(&steps);
    assert_eq!(rings.len(), 3);
    for (at, _, offset) in rings {
        assert_eq!(at, 0);
        assert!(close(offset, ring_circumference()));
    }
    assert!(steps.contains(&ScheduledStep {
        at_ms: 0,
        step: RevealStep::ShowContainer { visible: false }
    }));
    assert!(steps.contains(&ScheduledStep {
        at_ms: 0,
        step: RevealStep::FadeLogo { out: false }
    }));
    assert_eq!(
        steps.last(),
        Some(&ScheduledStep {
            at_ms: 300,
            step: RevealStep::SetCaption(CaptionKind::Logo)
        })
    );
}

#[test]
fn no_rings_still_swaps_views() {
    let mut reveal = SkillsReveal::default();
    let steps = reveal.toggle(&[]);
    assert_eq!(steps.len(), 4);
    assert_eq!(reveal.view(), SkillsView::Skills);
}

#[test]
fn each_toggle_starts_a_new_generation() {
    let mut reveal = SkillsReveal::default();
    let first = reveal.generation();
    reveal.toggle(&[]);
    let second = reveal.generation();
    assert_ne!(first, second);
    assert!(reveal.is_current(second));
    reveal.toggle(&[]);
    assert!(!reveal.is_current(second));
}

// What the page shows, as driven by applied steps.
#[derive(Debug, Default)]
struct Page {
    logo_faded: bool,
    container_visible: bool,
    caption: Option<CaptionKind>,
    rings: Vec<f64>,
}

impl Page {
    fn apply(&mut self, step: RevealStep) {
        match step {
            RevealStep::FadeLogo { out } => self.logo_faded = out,
            RevealStep::HideCaption => {}
            RevealStep::SetCaption(kind) => self.caption = Some(kind),
            RevealStep::ShowContainer { visible } => self.container_visible = visible,
            RevealStep::SetRing { index, offset } => self.rings[index] = offset,
        }
    }
}

// Clicks the logo at each time in `clicks`, firing delayed steps on a
// shared clock and skipping steps whose toggle has been superseded.
fn play(clicks: &[u32], until: u32, percents: &[f64]) -> (SkillsReveal, Page) {
    let mut reveal = SkillsReveal::default();
    let mut page = Page {
        rings: vec![ring_circumference(); percents.len()],
        ..Page::default()
    };
    let mut pending: Vec<(u32, u64, RevealStep)> = Vec::new();

    let fire_until = |t: u32,
                      reveal: &SkillsReveal,
                      page: &mut Page,
                      pending: &mut Vec<(u32, u64, RevealStep)>| {
        pending.sort_by_key(|(at, _, _)| *at);
        let due: Vec<_> = pending.iter().filter(|(at, _, _)| *at <= t).cloned().collect();
        pending.retain(|(at, _, _)| *at > t);
        for (_, generation, step) in due {
            if reveal.is_current(generation) {
                page.apply(step);
            }
        }
    };

    for &t in clicks {
        fire_until(t, &reveal, &mut page, &mut pending);
        let steps = reveal.toggle(percents);
        let generation = reveal.generation();
        for s in steps {
            if s.at_ms == 0 {
                page.apply(s.step);
            } else {
                pending.push((t + s.at_ms, generation, s.step));
            }
        }
    }
    fire_until(until, &reveal, &mut page, &mut pending);
    (reveal, page)
}

#[test]
fn quick_show_then_hide_ends_on_logo() {
    let (reveal, page) = play(&[0, 100], 3000, &[90.0, 40.0]);
    assert_eq!(reveal.view(), SkillsView::Logo);
    assert!(!page.container_visible);
    assert!(!page.logo_faded);
    assert_eq!(page.caption, Some(CaptionKind::Logo));
    for offset in page.rings {
        assert!(close(offset, ring_circumference()));
    }
}

#[test]
fn hide_during_ring_fill_resets_rings() {
    let (reveal, page) = play(&[0, 1400], 4000, &[90.0, 40.0, 70.0]);
    assert_eq!(reveal.view(), SkillsView::Logo);
    assert!(!page.container_visible);
    for offset in page.rings {
        assert!(close(offset, ring_circumference()));
    }
}

#[test]
fn show_hide_show_ends_fully_shown() {
    let (reveal, page) = play(&[0, 100, 200], 3000, &[90.0, 40.0]);
    assert_eq!(reveal.view(), SkillsView::Skills);
    assert!(page.container_visible);
    assert!(page.logo_faded);
    assert_eq!(page.caption, Some(CaptionKind::Skills));
    assert!(close(page.rings[0], ring_offset(90.0)));
    assert!(close(page.rings[1], ring_offset(40.0)));
}
