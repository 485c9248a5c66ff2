use crate::constants::{
    PROJECT_CARD_SELECTOR, SECTION_SELECTOR, SKILLS_SECTION_SELECTOR, SKILL_BAR_SELECTOR,
    SKILL_ITEM_SELECTOR,
};
use crate::core::constants::{
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SKILL_BARS_DELAY_MS, SKILL_BARS_THRESHOLD,
};
use crate::core::reveal::{
    is_small_viewport, reveal_selector, skill_bar_scale, skill_bar_transform, RevealStyle,
};
use crate::dom;
use anyhow::anyhow;
use gloo_timers::callback::Timeout;
use web_sys as web;

fn apply_style(el: &web::Element, style: &RevealStyle) {
    dom::set_style(el, "opacity", style.opacity);
    dom::set_style(el, "transform", &style.transform);
    if let Some(t) = &style.transition {
        dom::set_style(el, "transition", t);
    }
}

/// Scroll reveal for titles (and cards/skills/contact on wide screens).
pub fn init_reveal(document: &web::Document, width: f64) -> anyhow::Result<()> {
    let targets = dom::query_all(document, reveal_selector(width));
    let hidden = RevealStyle::hidden();
    for el in &targets {
        apply_style(el, &hidden);
    }
    let shown = RevealStyle::shown();
    dom::observe_intersections(
        &targets,
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        move |entry, _| {
            if entry.is_intersecting() {
                apply_style(&entry.target(), &shown);
            }
        },
    )?;
    log::info!("[reveal] watching {} elements", targets.len());
    Ok(())
}

/// Staggered reveal of whole page sections; immediate on small screens.
pub fn init_sections(document: &web::Document, width: f64) -> anyhow::Result<()> {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    let shown = RevealStyle::shown();
    if is_small_viewport(width) {
        for s in &sections {
            apply_style(s, &shown);
        }
        return Ok(());
    }
    for (i, s) in sections.iter().enumerate() {
        apply_style(s, &RevealStyle::section_hidden(i));
    }
    dom::observe_intersections(&sections, REVEAL_THRESHOLD, None, move |entry, _| {
        if entry.is_intersecting() {
            apply_style(&entry.target(), &shown);
        }
    })?;
    Ok(())
}

/// Fills skill bars once, the first time the skills section is half visible.
pub fn init_skill_bars(document: &web::Document) -> anyhow::Result<()> {
    let section = dom::query(document, SKILLS_SECTION_SELECTOR)
        .ok_or_else(|| anyhow!("missing {}", SKILLS_SECTION_SELECTOR))?;
    let doc = document.clone();
    dom::observe_intersections(
        std::slice::from_ref(&section),
        SKILL_BARS_THRESHOLD,
        None,
        move |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            animate_skill_bars(&doc);
            observer.unobserve(&entry.target());
        },
    )?;
    Ok(())
}

fn animate_skill_bars(document: &web::Document) {
    for bar in dom::query_all(document, SKILL_BAR_SELECTOR) {
        let Some(scale) = bar
            .get_attribute("data-level")
            .and_then(|l| skill_bar_scale(&l))
        else {
            continue;
        };
        dom::set_style(&bar, "transition", "transform 1.5s ease-out");
        Timeout::new(SKILL_BARS_DELAY_MS, move || {
            dom::set_style(&bar, "transform", &skill_bar_transform(scale));
        })
        .forget();
    }
}

/// Desktop hover lift on project cards and skill items.
pub fn init_hover_lift(document: &web::Document, width: f64) -> anyhow::Result<()> {
    if is_small_viewport(width) {
        return Err(anyhow!("small viewport"));
    }
    let groups = [
        (
            PROJECT_CARD_SELECTOR,
            "translateY(-15px) scale(1.02)",
            "translateY(0) scale(1)",
        ),
        (
            SKILL_ITEM_SELECTOR,
            "translateX(15px) scale(1.05)",
            "translateX(0) scale(1)",
        ),
    ];
    for (selector, over, out) in groups {
        for el in dom::query_all(document, selector) {
            let enter_el = el.clone();
            dom::listen(&el, "mouseenter", move |_: web::Event| {
                dom::set_style(&enter_el, "transform", over);
            });
            let leave_el = el.clone();
            dom::listen(&el, "mouseleave", move |_: web::Event| {
                dom::set_style(&leave_el, "transform", out);
            });
        }
    }
    Ok(())
}
