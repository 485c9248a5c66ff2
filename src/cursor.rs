use crate::constants::{
    CURSOR_DOT_CLASS, CURSOR_HOVER_CLASS, CURSOR_OUTLINE_CLASS, CUSTOM_CURSOR_BODY_CLASS,
};
use crate::core::cursor::{centered_transform, cursor_enabled, interactive_selector, CursorFollower};
use crate::dom;
use crate::events::pointer;
use crate::frame::FrameLoop;
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn create_layer(document: &web::Document, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("create {}: {:?}", class, e))?;
    el.set_class_name(class);
    _ = el.set_attribute("aria-hidden", "true");
    Ok(el)
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let enabled = cursor_enabled(
        dom::media_matches("(hover: none)"),
        dom::media_matches("(pointer: coarse)"),
        dom::viewport_width(),
    );
    if !enabled {
        return Err(anyhow!("touch device or narrow viewport"));
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let dot = create_layer(document, CURSOR_DOT_CLASS)?;
    let outline = create_layer(document, CURSOR_OUTLINE_CLASS)?;
    _ = body.append_child(&dot);
    _ = body.append_child(&outline);
    _ = body.class_list().add_1(CUSTOM_CURSOR_BODY_CLASS);

    let state = Rc::new(RefCell::new(CursorFollower::new()));

    let frame_state = state.clone();
    let frame_outline = outline.clone();
    let frames = FrameLoop::new(move |ts| {
        let mut c = frame_state.borrow_mut();
        if !c.is_running() {
            return false;
        }
        if c.tick(ts) {
            dom::set_style(&frame_outline, "transform", &centered_transform(c.outline));
        }
        true
    });

    let move_state = state.clone();
    let move_frames = frames.clone();
    let move_dot = dot.clone();
    pointer::wire_pointer_move(document, move |pos, now| {
        let mut c = move_state.borrow_mut();
        if c.pointer_moved(pos, now) {
            dom::set_style(&move_dot, "transform", &centered_transform(c.mouse));
        }
        if c.resume() {
            move_frames.start();
        }
    });

    let hover_state = state.clone();
    let layers = [dot, outline];
    pointer::wire_hover_delegate(document, interactive_selector(), move |hovering| {
        if hover_state.borrow_mut().set_hovering(hovering) {
            for el in &layers {
                _ = el.class_list().toggle_with_force(CURSOR_HOVER_CLASS, hovering);
            }
        }
    });

    let presence_state = state.clone();
    let presence_frames = frames.clone();
    pointer::wire_window_presence(document, move |inside| {
        toggle_running(&presence_state, &presence_frames, inside);
    });

    pointer::wire_visibility(document, move |visible| {
        toggle_running(&state, &frames, visible);
    });

    log::info!("[cursor] enabled");
    Ok(())
}

fn toggle_running(state: &Rc<RefCell<CursorFollower>>, frames: &FrameLoop, run: bool) {
    let mut c = state.borrow_mut();
    if run {
        if c.resume() {
            frames.start();
        }
    } else if c.suspend() {
        frames.stop();
    }
}
