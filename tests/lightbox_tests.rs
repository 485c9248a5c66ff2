// Host-side tests for the lightbox gallery, navigation and focus trap.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lightbox {
    include!("../src/core/lightbox.rs");
}

use lightbox::*;

fn card(src: Option<&str>, alt: Option<&str>, caption: Option<&str>) -> CardImage {
    CardImage {
        src: src.map(str::to_string),
        alt: alt.map(str::to_string),
        caption: caption.map(str::to_string),
    }
}

fn three_images() -> Lightbox<&'static str> {
    Lightbox::new(build_gallery(vec![
        card(Some("a.png"), Some("A"), Some("First")),
        card(Some("b.png"), None, Some("  Second ")),
        card(Some("c.png"), Some("C"), None),
    ]))
}

#[test]
fn gallery_skips_cards_without_image() {
    let gallery = build_gallery(vec![
        card(Some("a.png"), None, Some("A")),
        card(None, None, Some("no image")),
        card(Some(""), None, Some("empty src")),
        card(Some("d.png"), None, None),
    ]);
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery[0].card_index, 0);
    assert_eq!(gallery[1].card_index, 3);
}

#[test]
fn caption_is_trimmed_and_backs_up_alt() {
    let lb = three_images();
    let second = &lb.gallery()[1];
    assert_eq!(second.caption, "Second");
    assert_eq!(second.display_alt(), "Second");
    assert_eq!(lb.gallery()[0].display_alt(), "A");
}

#[test]
fn open_and_close_return_focus_to_origin() {
    let mut lb = three_images();
    assert!(!lb.is_open());
    let shown = lb.open(1, "card-1").map(|e| e.src.clone());
    assert_eq!(shown.as_deref(), Some("b.png"));
    assert!(lb.is_open());
    assert_eq!(lb.close(), Some("card-1"));
    assert!(!lb.is_open());
    assert_eq!(lb.close(), None);
}

#[test]
fn open_out_of_range_is_ignored() {
    let mut lb = three_images();
    assert!(lb.open(3, "x").is_none());
    assert!(!lb.is_open());
    assert_eq!(lb.current_index(), 0);
}

#[test]
fn navigation_wraps_both_ways() {
    let mut lb = three_images();
    lb.open(2, "origin");
    assert_eq!(lb.next().map(|e| e.card_index), Some(0));
    assert_eq!(lb.prev().map(|e| e.card_index), Some(2));
    assert_eq!(lb.prev().map(|e| e.card_index), Some(1));
}

#[test]
fn navigation_shown_only_for_multiple_images() {
    assert!(three_images().shows_navigation());
    let single: Lightbox<()> = Lightbox::new(build_gallery(vec![card(Some("a.png"), None, None)]));
    assert!(!single.shows_navigation());
    let mut empty: Lightbox<()> = Lightbox::new(Vec::new());
    assert!(!empty.shows_navigation());
    assert!(empty.next().is_none());
    assert!(empty.prev().is_none());
}

#[test]
fn keys_map_to_actions() {
    assert_eq!(lightbox_key("Escape", false), Some(LightboxKey::Close));
    assert_eq!(lightbox_key("ArrowLeft", false), Some(LightboxKey::Prev));
    assert_eq!(lightbox_key("ArrowRight", true), Some(LightboxKey::Next));
    assert_eq!(
        lightbox_key("Tab", true),
        Some(LightboxKey::Tab { backwards: true })
    );
    assert_eq!(lightbox_key("Enter", false), None);
}

#[test]
fn focus_trap_wraps_at_the_edges() {
    // Tab from the last element goes to the first.
    assert_eq!(focus_trap_target(3, Some(2), false), Some(0));
    // Shift+Tab from the first goes to the last.
    assert_eq!(focus_trap_target(3, Some(0), true), Some(2));
    // Anywhere else the browser handles it.
    assert_eq!(focus_trap_target(3, Some(1), false), None);
    assert_eq!(focus_trap_target(3, Some(1), true), None);
    assert_eq!(focus_trap_target(3, None, false), None);
    assert_eq!(focus_trap_target(0, Some(0), false), None);
    // A single focusable element traps in both directions.
    assert_eq!(focus_trap_target(1, Some(0), false), Some(0));
    assert_eq!(focus_trap_target(1, Some(0), true), Some(0));
}
