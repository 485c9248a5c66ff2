// DOM contract: ids, selectors and class names the page markup provides.
//
// Any of these may be missing; the component that needs it stays disabled.

// Language
pub const LANG_TOGGLE_ID: &str = "langToggle";
pub const LANG_LABEL_SELECTOR: &str = ".lang-text";
pub const LANG_TEXT_SELECTOR: &str = "[data-lang-en]";

// Reveal
pub const SECTION_SELECTOR: &str = "section";
pub const SKILLS_SECTION_SELECTOR: &str = ".skills-section";
pub const SKILL_BAR_SELECTOR: &str = ".skill-bar";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const SKILL_ITEM_SELECTOR: &str = ".skill-item";

// Carousel
pub const CAROUSEL_STAGE_SELECTOR: &str = ".carousel-stage";
pub const CAROUSEL_CARD_SELECTOR: &str = ".carousel-card";
pub const CAROUSEL_PREV_SELECTOR: &str = ".carousel-nav.prev";
pub const CAROUSEL_NEXT_SELECTOR: &str = ".carousel-nav.next";
pub const CAROUSEL_DOTS_SELECTOR: &str = ".carousel-dots";
pub const CAROUSEL_WRAPPER_SELECTOR: &str = ".carousel3d-wrapper";
pub const CARD_IMAGE_SELECTOR: &str = ".media-img";
pub const CARD_TITLE_SELECTOR: &str = ".carousel-body h3";

// Lightbox
pub const LIGHTBOX_ID: &str = "image-lightbox";
pub const LIGHTBOX_CONTENT_SELECTOR: &str = ".lightbox-content";
pub const LIGHTBOX_CAPTION_SELECTOR: &str = ".lb-caption";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lb-close";
pub const LIGHTBOX_PREV_SELECTOR: &str = ".lb-prev";
pub const LIGHTBOX_NEXT_SELECTOR: &str = ".lb-next";
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";
pub const NO_SCROLL_CLASS: &str = "noscroll";

// Cursor
pub const CURSOR_DOT_CLASS: &str = "cursor-dot";
pub const CURSOR_OUTLINE_CLASS: &str = "cursor-outline";
pub const CURSOR_HOVER_CLASS: &str = "cursor-hover";
pub const CUSTOM_CURSOR_BODY_CLASS: &str = "custom-cursor";

// Flying bug
pub const BUG_CLASS: &str = "flying-bug";
pub const BUG_CAUGHT_CLASS: &str = "caught";
pub const BUG_CAUGHT_MESSAGE: &str = "You caught the bug! It will be back...";

// Skills reveal
pub const SKILLS_LOGO_ID: &str = "skillsLogo";
pub const SKILLS_TEXT_ID: &str = "skillsText";
pub const SKILLS_REVEAL_ID: &str = "skillsReveal";
pub const SKILL_RING_SELECTOR: &str = ".skill-circle-progress";
pub const SKILL_PERCENT_ATTR: &str = "data-percent";
pub const FADED_CLASS: &str = "faded";
pub const VISIBLE_CLASS: &str = "visible";

// Contact
pub const CONTACT_FORM_SELECTOR: &str = ".contact-form";
pub const NOTIFICATION_SELECTOR: &str = ".notification";

// Scroll effects
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const CONNECT_BUTTON_SELECTOR: &str = ".connect-btn";
pub const CONTACT_SECTION_SELECTOR: &str = ".contact-section";
pub const FLOATING_CUBE_SELECTOR: &str = ".floating-cube";
pub const SHOW_ALL_PROJECTS_ID: &str = "showAllProjectsBtn";
pub const SHOW_LESS_PROJECTS_ID: &str = "showLessProjectsBtn";
pub const PROJECTS_GRID_SELECTOR: &str = ".projects-grid";
pub const PROJECTS_SECTION_ID: &str = "projects";
pub const SHOW_ALL_CLASS: &str = "show-all";
