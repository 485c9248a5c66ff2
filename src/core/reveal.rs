use super::constants::{
    REVEAL_OFFSET_PX, SECTION_REVEAL_OFFSET_PX, SECTION_STAGGER_SEC, SMALL_VIEWPORT_MAX_PX,
};

pub const REDUCED_REVEAL_SELECTOR: &str = ".section-title";
pub const FULL_REVEAL_SELECTOR: &str =
    ".section-title, .project-card, .skill-item, .contact-info, .contact-form";

#[inline]
pub fn is_small_viewport(width_px: f64) -> bool {
    width_px <= SMALL_VIEWPORT_MAX_PX
}

/// Elements that get the scroll reveal, by viewport width.
pub fn reveal_selector(width_px: f64) -> &'static str {
    if is_small_viewport(width_px) {
        REDUCED_REVEAL_SELECTOR
    } else {
        FULL_REVEAL_SELECTOR
    }
}

/// Inline style values for a reveal transition.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

impl RevealStyle {
    pub fn hidden() -> Self {
        Self {
            opacity: "0",
            transform: format!("translateY({}px)", REVEAL_OFFSET_PX),
            transition: Some("opacity 0.6s ease, transform 0.6s ease".to_string()),
        }
    }

    pub fn shown() -> Self {
        Self {
            opacity: "1",
            transform: "translateY(0)".to_string(),
            transition: None,
        }
    }

    /// Hidden state for the `index`-th page section; later sections start later.
    pub fn section_hidden(index: usize) -> Self {
        let delay = index as f64 * SECTION_STAGGER_SEC;
        Self {
            opacity: "0",
            transform: format!("translateY({}px)", SECTION_REVEAL_OFFSET_PX),
            transition: Some(format!(
                "opacity 0.8s ease {delay:.1}s, transform 0.8s ease {delay:.1}s"
            )),
        }
    }
}

/// Parses a skill bar's `data-level` into its horizontal scale.
pub fn skill_bar_scale(level: &str) -> Option<f64> {
    let level: f64 = level.trim().parse().ok()?;
    level.is_finite().then_some(level / 100.0)
}

pub fn skill_bar_transform(scale: f64) -> String {
    format!("scaleX({scale})")
}
