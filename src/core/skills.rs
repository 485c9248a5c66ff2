use super::constants::{
    CAPTION_RESTORE_MS, CAPTION_SWAP_MS, LOGO_FADE_MS, RING_FILL_DELAY_MS, RING_STAGGER_MS,
    SKILLS_CONTAINER_MS, SKILL_RING_RADIUS,
};
use std::f64::consts::PI;

/// Full stroke length of a skill ring; also its "empty" dash offset.
pub fn ring_circumference() -> f64 {
    2.0 * PI * SKILL_RING_RADIUS
}

/// Dash offset that fills `percent` of a ring. Clamped to 0..=100.
pub fn ring_offset(percent: f64) -> f64 {
    let p = percent.clamp(0.0, 100.0);
    ring_circumference() * (1.0 - p / 100.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillsView {
    #[default]
    Logo,
    Skills,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionKind {
    Logo,
    Skills,
}

impl CaptionKind {
    /// Attribute holding the caption for `lang`, e.g. `data-skills-ar`.
    pub fn attribute(self, lang_code: &str) -> String {
        match self {
            CaptionKind::Logo => format!("data-lang-{lang_code}"),
            CaptionKind::Skills => format!("data-skills-{lang_code}"),
        }
    }
}

/// A single visual change of the skills reveal, applied at `at_ms` after the click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScheduledStep {
    pub at_ms: u32,
    pub step: RevealStep,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealStep {
    FadeLogo { out: bool },
    HideCaption,
    SetCaption(CaptionKind),
    ShowContainer { visible: bool },
    SetRing { index: usize, offset: f64 },
}

#[derive(Clone, Debug, Default)]
pub struct SkillsReveal {
    view: SkillsView,
    generation: u64,
}

impl SkillsReveal {
    pub fn view(&self) -> SkillsView {
        self.view
    }

    /// Bumped on every toggle; steps from an older toggle must not be applied.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Flips the view and returns the steps to play, sorted by time.
    /// Any steps still pending from the previous toggle become stale.
    pub fn toggle(&mut self, ring_percents: &[f64]) -> Vec<ScheduledStep> {
        self.generation += 1;
        let steps = match self.view {
            SkillsView::Logo => show_steps(ring_percents),
            SkillsView::Skills => hide_steps(ring_percents.len()),
        };
        self.view = match self.view {
            SkillsView::Logo => SkillsView::Skills,
            SkillsView::Skills => SkillsView::Logo,
        };
        steps
    }

    /// Caption to show for the current view.
    pub fn caption(&self) -> CaptionKind {
        match self.view {
            SkillsView::Logo => CaptionKind::Logo,
            SkillsView::Skills => CaptionKind::Skills,
        }
    }
}

fn show_steps(ring_percents: &[f64]) -> Vec<ScheduledStep> {
    let mut steps = vec![
        ScheduledStep {
            at_ms: 0,
            step: RevealStep::FadeLogo { out: true },
        },
        ScheduledStep {
            at_ms: LOGO_FADE_MS,
            step: RevealStep::HideCaption,
        },
        ScheduledStep {
            at_ms: LOGO_FADE_MS + CAPTION_SWAP_MS,
            step: RevealStep::SetCaption(CaptionKind::Skills),
        },
        ScheduledStep {
            at_ms: SKILLS_CONTAINER_MS,
            step: RevealStep::ShowContainer { visible: true },
        },
    ];
    let fill_start = SKILLS_CONTAINER_MS + RING_FILL_DELAY_MS;
    steps.extend(ring_percents.iter().enumerate().map(|(index, &p)| ScheduledStep {
        at_ms: fill_start + index as u32 * RING_STAGGER_MS,
        step: RevealStep::SetRing {
            index,
            offset: ring_offset(p),
        },
    }));
    steps
}

fn hide_steps(ring_count: usize) -> Vec<ScheduledStep> {
    let empty = ring_circumference();
    let mut steps: Vec<ScheduledStep> = (0..ring_count)
        .map(|index| ScheduledStep {
            at_ms: 0,
            step: RevealStep::SetRing {
                index,
                offset: empty,
            },
        })
        .collect();
    steps.push(ScheduledStep {
        at_ms: 0,
        step: RevealStep::ShowContainer { visible: false },
    });
    steps.push(ScheduledStep {
        at_ms: 0,
        step: RevealStep::FadeLogo { out: false },
    });
    steps.push(ScheduledStep {
        at_ms: CAPTION_RESTORE_MS,
        step: RevealStep::SetCaption(CaptionKind::Logo),
    });
    steps
}

/// Parses a ring's stored percentage (`data-percent`); bad values read as 0.
pub fn parse_percent(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().trim_end_matches('%').parse::<f64>().ok())
        .filter(|p| p.is_finite())
        .unwrap_or(0.0)
}
