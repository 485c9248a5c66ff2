use crate::constants::{
    FADED_CLASS, LANG_TOGGLE_ID, SKILLS_LOGO_ID, SKILLS_REVEAL_ID, SKILLS_TEXT_ID,
    SKILL_PERCENT_ATTR, SKILL_RING_SELECTOR, VISIBLE_CLASS,
};
use crate::core::constants::LANGUAGE_REFRESH_MS;
use crate::core::skills::{
    parse_percent, ring_circumference, CaptionKind, RevealStep, SkillsReveal, SkillsView,
};
use crate::dom;
use crate::language::document_language;
use anyhow::anyhow;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct SkillsWiring {
    document: web::Document,
    logo: web::Element,
    caption: Option<web::Element>,
    container: Option<web::Element>,
    rings: Rc<Vec<web::Element>>,
    percents: Rc<Vec<f64>>,
    state: Rc<RefCell<SkillsReveal>>,
    pending: Rc<RefCell<Vec<Timeout>>>,
}

impl SkillsWiring {
    fn toggle(&self) {
        // dropping a Timeout cancels it
        self.pending.borrow_mut().clear();
        let steps = self.state.borrow_mut().toggle(&self.percents);
        let generation = self.state.borrow().generation();
        log::info!("[skills] now showing {:?}", self.state.borrow().view());
        for s in steps {
            if s.at_ms == 0 {
                self.apply(s.step);
                continue;
            }
            let w = self.clone();
            let timer = Timeout::new(s.at_ms, move || {
                if w.state.borrow().is_current(generation) {
                    w.apply(s.step);
                }
            });
            self.pending.borrow_mut().push(timer);
        }
    }

    fn apply(&self, step: RevealStep) {
        match step {
            RevealStep::FadeLogo { out } => {
                _ = self.logo.class_list().toggle_with_force(FADED_CLASS, out);
            }
            RevealStep::HideCaption => {
                if let Some(c) = &self.caption {
                    dom::set_style(c, "opacity", "0");
                }
            }
            RevealStep::SetCaption(kind) => self.set_caption(kind),
            RevealStep::ShowContainer { visible } => {
                if let Some(c) = &self.container {
                    _ = c.class_list().toggle_with_force(VISIBLE_CLASS, visible);
                }
            }
            RevealStep::SetRing { index, offset } => {
                if let Some(ring) = self.rings.get(index) {
                    dom::set_style(ring, "stroke-dashoffset", &format!("{offset:.2}"));
                }
            }
        }
    }

    fn set_caption(&self, kind: CaptionKind) {
        let Some(c) = &self.caption else {
            return;
        };
        let lang = document_language(&self.document);
        if let Some(text) = c.get_attribute(&kind.attribute(lang.code())) {
            c.set_text_content(Some(&text));
        }
        dom::set_style(c, "opacity", "1");
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let logo = document
        .get_element_by_id(SKILLS_LOGO_ID)
        .ok_or_else(|| anyhow!("missing #{}", SKILLS_LOGO_ID))?;
    let container = document.get_element_by_id(SKILLS_REVEAL_ID);
    let rings = match &container {
        Some(c) => dom::query_all_in(c, SKILL_RING_SELECTOR),
        None => Vec::new(),
    };
    let percents: Vec<f64> = rings
        .iter()
        .map(|r| parse_percent(r.get_attribute(SKILL_PERCENT_ATTR).as_deref()))
        .collect();

    let empty = format!("{:.2}", ring_circumference());
    for ring in &rings {
        dom::set_style(ring, "stroke-dasharray", &empty);
        dom::set_style(ring, "stroke-dashoffset", &empty);
    }

    let wiring = SkillsWiring {
        document: document.clone(),
        caption: document.get_element_by_id(SKILLS_TEXT_ID),
        logo,
        container,
        rings: Rc::new(rings),
        percents: Rc::new(percents),
        state: Rc::new(RefCell::new(SkillsReveal::default())),
        pending: Rc::new(RefCell::new(Vec::new())),
    };

    let w = wiring.clone();
    dom::listen(&wiring.logo, "click", move |_: web::Event| w.toggle());

    // The language toggle rewrites the caption with its logo text; put the
    // skills caption back once that has happened.
    if let Some(toggle) = document.get_element_by_id(LANG_TOGGLE_ID) {
        let w = wiring.clone();
        dom::listen(&toggle, "click", move |_: web::Event| {
            let w = w.clone();
            Timeout::new(LANGUAGE_REFRESH_MS, move || {
                if w.state.borrow().view() == SkillsView::Skills {
                    w.set_caption(CaptionKind::Skills);
                }
            })
            .forget();
        });
    }

    log::info!("[skills] {} rings", wiring.rings.len());
    Ok(())
}
