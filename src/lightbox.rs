use crate::carousel::CarouselHandle;
use crate::constants::{
    CARD_IMAGE_SELECTOR, CARD_TITLE_SELECTOR, CAROUSEL_CARD_SELECTOR, FOCUSABLE_SELECTOR,
    LIGHTBOX_CAPTION_SELECTOR, LIGHTBOX_CLOSE_SELECTOR, LIGHTBOX_CONTENT_SELECTOR, LIGHTBOX_ID,
    LIGHTBOX_NEXT_SELECTOR, LIGHTBOX_PREV_SELECTOR, NO_SCROLL_CLASS,
};
use crate::core::lightbox::{build_gallery, focus_trap_target, CardImage, GalleryEntry, Lightbox};
use crate::dom;
use crate::events::keyboard;
use anyhow::anyhow;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LightboxView {
    document: web::Document,
    root: web::Element,
    content: web::Element,
    img: Option<web::HtmlImageElement>,
    caption: Option<web::Element>,
    prev_btn: Option<web::Element>,
    next_btn: Option<web::Element>,
}

#[derive(Clone)]
pub struct LightboxHandle {
    state: Rc<RefCell<Lightbox<web::Element>>>,
    view: Rc<LightboxView>,
    carousel: CarouselHandle,
}

impl LightboxHandle {
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn open(&self, index: usize, origin: web::Element) {
        let entry = self.state.borrow_mut().open(index, origin).cloned();
        let Some(entry) = entry else {
            return;
        };
        let v = &self.view;
        _ = v.root.set_attribute("aria-hidden", "false");
        if let Some(body) = v.document.body() {
            _ = body.class_list().add_1(NO_SCROLL_CLASS);
        }
        self.show(&entry);
        let content = v.content.clone();
        Timeout::new(0, move || dom::focus(&content)).forget();
        self.carousel.set_lightbox_open(true);
        log::info!("[lightbox] open {}", index);
    }

    pub fn close(&self) {
        let restore = self.state.borrow_mut().close();
        let v = &self.view;
        _ = v.root.set_attribute("aria-hidden", "true");
        if let Some(body) = v.document.body() {
            _ = body.class_list().remove_1(NO_SCROLL_CLASS);
        }
        if let Some(img) = &v.img {
            img.set_src("");
        }
        if let Some(el) = restore {
            dom::focus(&el);
        }
        self.carousel.set_lightbox_open(false);
    }

    pub fn next(&self) {
        let entry = self.state.borrow_mut().next().cloned();
        if let Some(entry) = entry {
            self.show(&entry);
        }
    }

    pub fn prev(&self) {
        let entry = self.state.borrow_mut().prev().cloned();
        if let Some(entry) = entry {
            self.show(&entry);
        }
    }

    fn show(&self, entry: &GalleryEntry) {
        let v = &self.view;
        let Some(img) = &v.img else {
            return;
        };
        img.set_src(&entry.src);
        img.set_alt(entry.display_alt());
        if let Some(caption) = &v.caption {
            caption.set_text_content(Some(&entry.caption));
        }
        let display = if self.state.borrow().shows_navigation() {
            ""
        } else {
            "none"
        };
        for btn in [&v.prev_btn, &v.next_btn].into_iter().flatten() {
            dom::set_style(btn, "display", display);
        }
    }

    /// Keeps Tab focus cycling inside the lightbox content.
    pub fn trap_focus(&self, ev: &web::KeyboardEvent, backwards: bool) {
        let focusables: Vec<web::Element> =
            dom::query_all_in(&self.view.content, FOCUSABLE_SELECTOR)
                .into_iter()
                .filter(|el| !el.has_attribute("disabled"))
                .collect();
        let active = self.view.document.active_element();
        let focused = active
            .as_ref()
            .and_then(|a| focusables.iter().position(|el| el == a));
        if let Some(target) = focus_trap_target(focusables.len(), focused, backwards) {
            ev.prevent_default();
            dom::focus(&focusables[target]);
        }
    }
}

fn read_card(card: &web::Element) -> CardImage {
    let img = dom::query_in(card, CARD_IMAGE_SELECTOR);
    CardImage {
        src: img.as_ref().and_then(|i| i.get_attribute("src")),
        alt: img.as_ref().and_then(|i| i.get_attribute("alt")),
        caption: dom::query_in(card, CARD_TITLE_SELECTOR).and_then(|t| t.text_content()),
    }
}

pub fn init(document: &web::Document, carousel: &CarouselHandle) -> anyhow::Result<()> {
    let root = document
        .get_element_by_id(LIGHTBOX_ID)
        .ok_or_else(|| anyhow!("missing #{}", LIGHTBOX_ID))?;
    let content = dom::query_in(&root, LIGHTBOX_CONTENT_SELECTOR)
        .ok_or_else(|| anyhow!("missing {}", LIGHTBOX_CONTENT_SELECTOR))?;

    let gallery = build_gallery(carousel.cards().iter().map(read_card));
    let view = LightboxView {
        document: document.clone(),
        img: dom::query_in(&root, "img").and_then(|i| i.dyn_into().ok()),
        caption: dom::query_in(&root, LIGHTBOX_CAPTION_SELECTOR),
        prev_btn: dom::query_in(&root, LIGHTBOX_PREV_SELECTOR),
        next_btn: dom::query_in(&root, LIGHTBOX_NEXT_SELECTOR),
        root,
        content,
    };
    let handle = LightboxHandle {
        state: Rc::new(RefCell::new(Lightbox::new(gallery))),
        view: Rc::new(view),
        carousel: carousel.clone(),
    };

    let entries: Vec<GalleryEntry> = handle.state.borrow().gallery().to_vec();
    for (idx, entry) in entries.iter().enumerate() {
        let Some(card) = carousel.cards().get(entry.card_index) else {
            continue;
        };
        let Some(img) = dom::query_in(card, CARD_IMAGE_SELECTOR) else {
            continue;
        };
        let h = handle.clone();
        let img_for_origin = img.clone();
        dom::listen(&img, "click", move |_: web::MouseEvent| {
            let origin = img_for_origin
                .closest(CAROUSEL_CARD_SELECTOR)
                .ok()
                .flatten()
                .unwrap_or_else(|| img_for_origin.clone());
            h.open(idx, origin);
        });
    }

    let h = handle.clone();
    let root = handle.view.root.clone();
    dom::listen(&handle.view.root, "click", move |ev: web::MouseEvent| {
        let on_backdrop = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|t| t == root);
        if on_backdrop {
            h.close();
        }
    });
    let buttons: [(&str, fn(&LightboxHandle)); 3] = [
        (LIGHTBOX_CLOSE_SELECTOR, LightboxHandle::close),
        (LIGHTBOX_PREV_SELECTOR, LightboxHandle::prev),
        (LIGHTBOX_NEXT_SELECTOR, LightboxHandle::next),
    ];
    for (selector, action) in buttons {
        if let Some(btn) = dom::query_in(&handle.view.root, selector) {
            let h = handle.clone();
            dom::listen(&btn, "click", move |_: web::Event| action(&h));
        }
    }

    keyboard::wire_lightbox_keydown(document, handle.clone());
    log::info!("[lightbox] gallery of {}", entries.len());
    Ok(())
}
