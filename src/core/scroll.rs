use super::constants::{PARALLAX_BASE_SPEED, PARALLAX_ROTATE_PER_PX, PARALLAX_SPEED_STEP};

/// Parallax transform for the `index`-th floating cube at `scroll_y`.
pub fn parallax_transform(scroll_y: f64, index: usize) -> String {
    let speed = PARALLAX_BASE_SPEED + index as f64 * PARALLAX_SPEED_STEP;
    let y = 0.0 - scroll_y * speed;
    format!(
        "translateY({:.2}px) rotate({:.2}deg)",
        y,
        scroll_y * PARALLAX_ROTATE_PER_PX
    )
}

/// Target id of an in-page anchor (`#about` -> `about`). Bare `#` has none.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectsView {
    #[default]
    Collapsed,
    All,
}

impl ProjectsView {
    /// Display values for (show-all button, show-less button).
    pub fn button_display(self) -> (&'static str, &'static str) {
        match self {
            ProjectsView::Collapsed => ("block", "none"),
            ProjectsView::All => ("none", "block"),
        }
    }
}
