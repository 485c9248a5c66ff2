use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn client_position(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Pointer moves anywhere in the document, with a millisecond timestamp.
pub fn wire_pointer_move(document: &web::Document, mut on_move: impl FnMut(Vec2, f64) + 'static) {
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        on_move(client_position(&ev), instant::now());
    });
}

/// Pointer leaving / re-entering the window. Called with `true` on entry.
pub fn wire_window_presence(document: &web::Document, on_change: impl FnMut(bool) + 'static) {
    let Some(root) = document.document_element() else {
        return;
    };
    let on_change: Rc<RefCell<dyn FnMut(bool)>> = Rc::new(RefCell::new(on_change));
    let enter = on_change.clone();
    dom::listen(&root, "mouseenter", move |_: web::Event| (*enter.borrow_mut())(true));
    dom::listen(&root, "mouseleave", move |_: web::Event| (*on_change.borrow_mut())(false));
}

/// Tab visibility changes. Called with `true` when the page becomes visible.
pub fn wire_visibility(document: &web::Document, mut on_change: impl FnMut(bool) + 'static) {
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        on_change(dom::document_visible(&doc));
    });
}

/// Delegated hover detection: reports whether the element under the
/// pointer matches `selector` (or sits inside a match).
pub fn wire_hover_delegate(
    document: &web::Document,
    selector: String,
    on_hover: impl FnMut(bool) + 'static,
) {
    let on_hover: Rc<RefCell<dyn FnMut(bool)>> = Rc::new(RefCell::new(on_hover));
    let over_sel = selector.clone();
    let over = on_hover.clone();
    dom::listen(document, "mouseover", move |ev: web::MouseEvent| {
        if matches_target(ev.target(), &over_sel) {
            (*over.borrow_mut())(true);
        }
    });
    dom::listen(document, "mouseout", move |ev: web::MouseEvent| {
        if matches_target(ev.target(), &selector) && !matches_target(ev.related_target(), &selector)
        {
            (*on_hover.borrow_mut())(false);
        }
    });
}

fn matches_target(target: Option<web::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
