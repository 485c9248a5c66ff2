use crate::constants::{
    ANCHOR_SELECTOR, CONNECT_BUTTON_SELECTOR, CONTACT_SECTION_SELECTOR, FLOATING_CUBE_SELECTOR,
    PROJECTS_GRID_SELECTOR, PROJECTS_SECTION_ID, SHOW_ALL_CLASS, SHOW_ALL_PROJECTS_ID,
    SHOW_LESS_PROJECTS_ID,
};
use crate::core::constants::SCROLL_THROTTLE_MS;
use crate::core::reveal::is_small_viewport;
use crate::core::scroll::{anchor_target, parallax_transform, ProjectsView};
use crate::core::timing::Throttle;
use crate::dom;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// In-page anchors and the "connect" button scroll smoothly.
pub fn init_smooth_anchors(document: &web::Document) -> anyhow::Result<()> {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let a = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            ev.prevent_default();
            let href = a.get_attribute("href").unwrap_or_default();
            if let Some(target) = anchor_target(&href).and_then(|id| doc.get_element_by_id(id)) {
                dom::scroll_into_view_smooth(&target);
            }
        });
    }
    if let Some(btn) = dom::query(document, CONNECT_BUTTON_SELECTOR) {
        let doc = document.clone();
        dom::listen(&btn, "click", move |_: web::Event| {
            if let Some(section) = dom::query(&doc, CONTACT_SECTION_SELECTOR) {
                dom::scroll_into_view_smooth(&section);
            }
        });
    }
    Ok(())
}

/// Hover glow and scroll parallax on the decorative cubes (desktop only).
pub fn init_floating_cubes(document: &web::Document, width: f64) -> anyhow::Result<()> {
    if is_small_viewport(width) {
        return Err(anyhow!("small viewport"));
    }
    let cubes = dom::query_all(document, FLOATING_CUBE_SELECTOR);
    if cubes.is_empty() {
        return Err(anyhow!("no {}", FLOATING_CUBE_SELECTOR));
    }
    for cube in &cubes {
        let c = cube.clone();
        dom::listen(cube, "mouseenter", move |_: web::Event| {
            dom::set_style(&c, "transform", "scale(1.2) rotate(45deg)");
            dom::set_style(&c, "box-shadow", "0 0 30px rgba(0, 212, 255, 0.8)");
        });
        let c = cube.clone();
        dom::listen(cube, "mouseleave", move |_: web::Event| {
            dom::set_style(&c, "transform", "scale(1) rotate(0deg)");
            dom::set_style(&c, "box-shadow", "none");
        });
    }

    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
    let win = window.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        if !throttle.borrow_mut().ready(instant::now()) {
            return;
        }
        let scrolled = win.page_y_offset().unwrap_or(0.0);
        for (i, cube) in cubes.iter().enumerate() {
            dom::set_style(cube, "transform", &parallax_transform(scrolled, i));
        }
    });
    Ok(())
}

/// "Show all" / "show less" for the project grid.
pub fn init_projects_toggle(document: &web::Document) -> anyhow::Result<()> {
    let grid = dom::query(document, PROJECTS_GRID_SELECTOR)
        .ok_or_else(|| anyhow!("missing {}", PROJECTS_GRID_SELECTOR))?;
    let show_all = document
        .get_element_by_id(SHOW_ALL_PROJECTS_ID)
        .ok_or_else(|| anyhow!("missing #{}", SHOW_ALL_PROJECTS_ID))?;
    let show_less = document
        .get_element_by_id(SHOW_LESS_PROJECTS_ID)
        .ok_or_else(|| anyhow!("missing #{}", SHOW_LESS_PROJECTS_ID))?;

    let render = {
        let (grid, show_all, show_less) = (grid.clone(), show_all.clone(), show_less.clone());
        move |view: ProjectsView| {
            _ = grid
                .class_list()
                .toggle_with_force(SHOW_ALL_CLASS, view == ProjectsView::All);
            let (all_display, less_display) = view.button_display();
            dom::set_style(&show_all, "display", all_display);
            dom::set_style(&show_less, "display", less_display);
        }
    };

    let r = render.clone();
    dom::listen(&show_all, "click", move |_: web::Event| r(ProjectsView::All));
    let doc = document.clone();
    dom::listen(&show_less, "click", move |_: web::Event| {
        render(ProjectsView::Collapsed);
        if let Some(section) = doc.get_element_by_id(PROJECTS_SECTION_ID) {
            dom::scroll_into_view_smooth(&section);
        }
    });
    Ok(())
}
