use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` for `event` on `target` for the page's lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`listen`] but registered as a passive listener (touch/scroll).
pub fn listen_passive<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_in(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.style().set_property(property, value);
    }
}

#[inline]
pub fn focus(el: &web::Element) {
    if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
        _ = h.focus();
    }
}

pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(width as f32, height as f32)
}

pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_into_view_smooth(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Registers `targets` with a new intersection observer. The callback gets
/// each entry plus the observer, so one-shot watchers can detach themselves.
pub fn observe_intersections(
    targets: &[web::Element],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_entry: impl FnMut(web::IntersectionObserverEntry, &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_entry(entry, &observer);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    closure.forget();
    for t in targets {
        observer.observe(t);
    }
    Ok(observer)
}

pub fn document_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}
