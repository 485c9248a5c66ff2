use crate::constants::{LANG_LABEL_SELECTOR, LANG_TEXT_SELECTOR, LANG_TOGGLE_ID};
use crate::core::language::{localized_text, Language, LanguageState, PreferenceStore};
use crate::dom;
use anyhow::anyhow;
use gloo_storage::{LocalStorage, Storage};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// `localStorage`, storing plain strings rather than JSON.
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            log::warn!("[lang] could not persist preference: {:?}", e);
        }
    }
}

/// Language currently applied to the document, read back from `<html lang>`.
pub fn document_language(document: &web::Document) -> Language {
    document
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let toggle = document
        .get_element_by_id(LANG_TOGGLE_ID)
        .ok_or_else(|| anyhow!("missing #{}", LANG_TOGGLE_ID))?;
    let label = dom::query_in(&toggle, LANG_LABEL_SELECTOR);

    let state = Rc::new(RefCell::new(LanguageState::load(&BrowserStore)));
    let initial = state.borrow().current;
    apply_document(document, initial);
    apply_language(document, label.as_ref(), initial);
    log::info!("[lang] initial language {}", initial);

    let doc = document.clone();
    dom::listen(&toggle, "click", move |_: web::Event| {
        let lang = state.borrow_mut().toggle(&mut BrowserStore);
        apply_document(&doc, lang);
        apply_language(&doc, label.as_ref(), lang);
        log::info!("[lang] switched to {}", lang);
    });
    Ok(())
}

fn apply_document(document: &web::Document, lang: Language) {
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", lang.code());
        _ = root.set_attribute("dir", lang.direction().as_str());
    }
}

/// Copies each tagged element's text for `lang` into its visible text.
pub fn apply_language(document: &web::Document, label: Option<&web::Element>, lang: Language) {
    if let Some(label) = label {
        label.set_text_content(Some(&lang.label()));
    }
    for el in dom::query_all(document, LANG_TEXT_SELECTOR) {
        if let Some(text) = localized_text(lang, |attr| el.get_attribute(attr)) {
            el.set_text_content(Some(&text));
        }
    }
}
