#![cfg(target_arch = "wasm32")]
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod bug;
mod carousel;
mod constants;
mod contact;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod language;
mod lightbox;
mod notify;
mod reveal;
mod scroll;
mod skills;

// Each component is independent: a missing element or unsupported device
// disables that component only.
fn report(component: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => log::debug!("[{}] ready", component),
        Err(e) => log::info!("[{}] disabled: {}", component, e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if crate::core::page::init_deferred(&document.ready_state()) {
        let started = Rc::new(Cell::new(false));
        let doc = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
            if !started.replace(true) {
                init_all(&doc);
            }
        });
    } else {
        init_all(&document);
    }
    Ok(())
}

fn init_all(document: &web::Document) {
    let width = dom::viewport_width();

    report("lang", language::init(document));
    report("reveal", reveal::init_reveal(document, width));
    report("sections", reveal::init_sections(document, width));
    report("skill-bars", reveal::init_skill_bars(document));
    report("hover", reveal::init_hover_lift(document, width));

    match carousel::init(document) {
        Ok(handle) => report("lightbox", lightbox::init(document, &handle)),
        Err(e) => log::info!("[carousel] disabled: {}", e),
    }

    report("cursor", cursor::init(document));
    report("bug", bug::init(document));
    report("skills", skills::init(document));
    report("contact", contact::init(document));
    report("anchors", scroll::init_smooth_anchors(document));
    report("cubes", scroll::init_floating_cubes(document, width));
    report("projects", scroll::init_projects_toggle(document));
    log::info!("[page] initialized");
}
