use crate::core::lightbox::{lightbox_key, LightboxKey};
use crate::dom;
use crate::lightbox::LightboxHandle;
use web_sys as web;

pub fn handle_lightbox_keydown(ev: &web::KeyboardEvent, lightbox: &LightboxHandle) {
    if !lightbox.is_open() {
        return;
    }
    let Some(key) = lightbox_key(&ev.key(), ev.shift_key()) else {
        return;
    };
    match key {
        LightboxKey::Close => {
            ev.prevent_default();
            lightbox.close();
        }
        LightboxKey::Prev => {
            ev.prevent_default();
            lightbox.prev();
        }
        LightboxKey::Next => {
            ev.prevent_default();
            lightbox.next();
        }
        LightboxKey::Tab { backwards } => lightbox.trap_focus(ev, backwards),
    }
}

pub fn wire_lightbox_keydown(document: &web::Document, lightbox: LightboxHandle) {
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_lightbox_keydown(&ev, &lightbox);
    });
}
