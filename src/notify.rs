use crate::constants::NOTIFICATION_SELECTOR;
use crate::core::constants::{NOTICE_DISMISS_MS, NOTICE_SLIDE_IN_MS, NOTICE_SLIDE_OUT_MS};
use crate::core::notice::{
    Notice, NOTICE_BASE_STYLE, NOTICE_HIDDEN_TRANSFORM, NOTICE_SHOWN_TRANSFORM,
};
use crate::dom;
use gloo_timers::callback::Timeout;
use web_sys as web;

/// Shows `notice` as a toast, replacing any toast already on screen.
pub fn show(document: &web::Document, notice: &Notice) {
    if let Some(existing) = dom::query(document, NOTIFICATION_SELECTOR) {
        existing.remove();
    }
    let Some(body) = document.body() else {
        return;
    };
    let el = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::error!("[notify] create_element failed: {:?}", e);
            return;
        }
    };
    el.set_class_name(&notice.class_name());
    el.set_text_content(Some(&notice.message));
    _ = el.set_attribute("role", "status");
    _ = el.set_attribute("style", NOTICE_BASE_STYLE);
    dom::set_style(&el, "background", notice.kind.background());
    _ = body.append_child(&el);

    let slide_in = el.clone();
    Timeout::new(NOTICE_SLIDE_IN_MS, move || {
        dom::set_style(&slide_in, "transform", NOTICE_SHOWN_TRANSFORM);
    })
    .forget();

    Timeout::new(NOTICE_DISMISS_MS, move || {
        dom::set_style(&el, "transform", NOTICE_HIDDEN_TRANSFORM);
        Timeout::new(NOTICE_SLIDE_OUT_MS, move || {
            if el.parent_node().is_some() {
                el.remove();
            }
        })
        .forget();
    })
    .forget();
}
