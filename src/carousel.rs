use crate::constants::{
    CAROUSEL_CARD_SELECTOR, CAROUSEL_DOTS_SELECTOR, CAROUSEL_NEXT_SELECTOR,
    CAROUSEL_PREV_SELECTOR, CAROUSEL_STAGE_SELECTOR, CAROUSEL_WRAPPER_SELECTOR,
};
use crate::core::carousel::{
    dot_label, AutoplayCommand, CardSlot, Carousel, SwipeDirection, SwipeTracker,
};
use crate::core::constants::{AUTOPLAY_INTERVAL_MS, CAROUSEL_VIEW_THRESHOLD};
use crate::dom;
use anyhow::anyhow;
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Shared handle to the carousel: state, the card/dot elements it renders
/// into, and the autoplay timer.
#[derive(Clone)]
pub struct CarouselHandle {
    state: Rc<RefCell<Carousel>>,
    cards: Rc<Vec<web::Element>>,
    dots: Rc<Vec<web::Element>>,
    timer: Rc<RefCell<Option<Interval>>>,
}

impl CarouselHandle {
    pub fn cards(&self) -> &[web::Element] {
        &self.cards
    }

    pub fn set_active(&self, index: isize) {
        self.state.borrow_mut().set_active(index);
        self.render();
    }

    pub fn next(&self) {
        self.state.borrow_mut().next();
        self.render();
    }

    pub fn prev(&self) {
        self.state.borrow_mut().prev();
        self.render();
    }

    pub fn set_hover(&self, hover: bool) {
        let cmd = self.state.borrow_mut().set_hover(hover);
        self.apply(cmd);
    }

    pub fn set_in_view(&self, in_view: bool) {
        let cmd = self.state.borrow_mut().set_in_view(in_view);
        self.apply(cmd);
    }

    pub fn set_lightbox_open(&self, open: bool) {
        let cmd = self.state.borrow_mut().set_lightbox_open(open);
        self.apply(cmd);
    }

    pub fn start_autoplay(&self) {
        let cmd = self.state.borrow_mut().start_autoplay();
        self.apply(cmd);
    }

    fn apply(&self, cmd: AutoplayCommand) {
        match cmd {
            AutoplayCommand::Start => {
                let handle = self.clone();
                *self.timer.borrow_mut() =
                    Some(Interval::new(AUTOPLAY_INTERVAL_MS, move || handle.next()));
            }
            AutoplayCommand::Stop => {
                // dropping the Interval clears it
                self.timer.borrow_mut().take();
            }
            AutoplayCommand::Keep => {}
        }
    }

    fn render(&self) {
        let state = self.state.borrow();
        for (i, card) in self.cards.iter().enumerate() {
            let classes = card.class_list();
            for c in CardSlot::ALL_CLASSES {
                _ = classes.remove_1(c);
            }
            _ = classes.add_1(state.slot(i).class_name());
        }
        for (i, dot) in self.dots.iter().enumerate() {
            if i == state.active() {
                _ = dot.set_attribute("aria-current", "true");
            } else {
                _ = dot.remove_attribute("aria-current");
            }
        }
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<CarouselHandle> {
    let stage = dom::query(document, CAROUSEL_STAGE_SELECTOR)
        .ok_or_else(|| anyhow!("missing {}", CAROUSEL_STAGE_SELECTOR))?;
    let cards = dom::query_all_in(&stage, CAROUSEL_CARD_SELECTOR);
    let state = Carousel::new(cards.len()).ok_or_else(|| anyhow!("no carousel cards"))?;

    let dots = build_dots(document, cards.len())?;
    let handle = CarouselHandle {
        state: Rc::new(RefCell::new(state)),
        cards: Rc::new(cards),
        dots: Rc::new(dots),
        timer: Rc::new(RefCell::new(None)),
    };

    for (i, dot) in handle.dots.iter().enumerate() {
        let h = handle.clone();
        dom::listen(dot, "click", move |_: web::Event| h.set_active(i as isize));
    }
    if let Some(btn) = dom::query(document, CAROUSEL_NEXT_SELECTOR) {
        let h = handle.clone();
        dom::listen(&btn, "click", move |_: web::Event| h.next());
    }
    if let Some(btn) = dom::query(document, CAROUSEL_PREV_SELECTOR) {
        let h = handle.clone();
        dom::listen(&btn, "click", move |_: web::Event| h.prev());
    }

    if let Some(wrapper) = dom::query(document, CAROUSEL_WRAPPER_SELECTOR) {
        let h = handle.clone();
        dom::listen(&wrapper, "mouseenter", move |_: web::Event| h.set_hover(true));
        let h = handle.clone();
        dom::listen(&wrapper, "mouseleave", move |_: web::Event| h.set_hover(false));
    }

    let h = handle.clone();
    dom::observe_intersections(
        std::slice::from_ref(&stage),
        CAROUSEL_VIEW_THRESHOLD,
        None,
        move |entry, _| h.set_in_view(entry.is_intersecting()),
    )?;

    wire_swipe(&stage, &handle);

    handle.set_active(0);
    handle.start_autoplay();
    log::info!("[carousel] {} cards", handle.cards.len());
    Ok(handle)
}

fn build_dots(document: &web::Document, count: usize) -> anyhow::Result<Vec<web::Element>> {
    let Some(container) = dom::query(document, CAROUSEL_DOTS_SELECTOR) else {
        return Ok(Vec::new());
    };
    container.set_inner_html("");
    (0..count)
        .map(|i| {
            let b = document
                .create_element("button")
                .map_err(|e| anyhow!("create dot: {:?}", e))?;
            _ = b.set_attribute("type", "button");
            _ = b.set_attribute("aria-label", &dot_label(i));
            _ = container.append_child(&b);
            Ok(b)
        })
        .collect()
}

fn wire_swipe(stage: &web::Element, handle: &CarouselHandle) {
    let swipe = Rc::new(RefCell::new(SwipeTracker::default()));

    let s = swipe.clone();
    dom::listen_passive(stage, "touchstart", move |ev: web::TouchEvent| {
        if let Some(t) = ev.changed_touches().get(0) {
            s.borrow_mut().touch_start(t.client_x() as f64);
        }
    });
    let s = swipe.clone();
    dom::listen_passive(stage, "touchmove", move |ev: web::TouchEvent| {
        if let Some(t) = ev.changed_touches().get(0) {
            s.borrow_mut().touch_move(t.client_x() as f64);
        }
    });
    let h = handle.clone();
    dom::listen(stage, "touchend", move |_: web::TouchEvent| {
        let direction = swipe.borrow_mut().touch_end();
        match direction {
            Some(SwipeDirection::Next) => h.next(),
            Some(SwipeDirection::Prev) => h.prev(),
            None => {}
        }
    });
}
