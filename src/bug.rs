use crate::constants::{BUG_CAUGHT_CLASS, BUG_CAUGHT_MESSAGE, BUG_CLASS};
use crate::core::bug::{bug_enabled, BugSprite};
use crate::core::constants::BUG_RESPAWN_MS;
use crate::core::notice::Notice;
use crate::dom;
use crate::events::pointer;
use crate::frame::FrameLoop;
use crate::notify;
use anyhow::anyhow;
use glam::Vec2;
use gloo_timers::callback::Timeout;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct BugWiring {
    document: web::Document,
    el: web::Element,
    sprite: Rc<RefCell<BugSprite>>,
    rng: Rc<RefCell<StdRng>>,
    pointer: Rc<Cell<Option<Vec2>>>,
    frames: FrameLoop,
}

impl BugWiring {
    fn render(&self) {
        let transform = self.sprite.borrow().transform();
        dom::set_style(&self.el, "transform", &transform);
    }

    fn resume(&self) {
        if self.sprite.borrow_mut().resume() {
            self.frames.start();
        }
    }

    fn suspend(&self) {
        if self.sprite.borrow_mut().suspend() {
            self.frames.stop();
        }
    }

    fn on_pointer(&self, pos: Vec2, now: f64) {
        self.pointer.set(Some(pos));
        let caught = self.sprite.borrow_mut().try_catch(pos, now);
        if !caught {
            return;
        }
        self.frames.stop();
        _ = self.el.class_list().add_1(BUG_CAUGHT_CLASS);
        notify::show(&self.document, &Notice::info(BUG_CAUGHT_MESSAGE));
        log::info!("[bug] caught");

        let w = self.clone();
        Timeout::new(BUG_RESPAWN_MS, move || {
            w.sprite.borrow_mut().respawn(&mut *w.rng.borrow_mut());
            _ = w.el.class_list().remove_1(BUG_CAUGHT_CLASS);
            w.render();
            if dom::document_visible(&w.document) {
                w.resume();
            }
        })
        .forget();
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let agent = window.navigator().user_agent().unwrap_or_default();
    if !bug_enabled(&agent, dom::viewport_width()) {
        return Err(anyhow!("mobile agent or narrow viewport"));
    }
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("create bug: {:?}", e))?;
    el.set_class_name(BUG_CLASS);
    _ = el.set_attribute("aria-hidden", "true");
    el.set_text_content(Some("\u{1F41E}"));
    _ = body.append_child(&el);

    let mut rng = StdRng::from_entropy();
    let sprite = BugSprite::spawn(&mut rng, dom::viewport_size());
    let sprite = Rc::new(RefCell::new(sprite));
    let rng = Rc::new(RefCell::new(rng));
    let pointer_pos: Rc<Cell<Option<Vec2>>> = Rc::new(Cell::new(None));

    let frames = {
        let sprite = sprite.clone();
        let rng = rng.clone();
        let pointer_pos = pointer_pos.clone();
        let el = el.clone();
        FrameLoop::new(move |ts| {
            let mut s = sprite.borrow_mut();
            if !s.is_running() {
                return false;
            }
            if s.tick(&mut *rng.borrow_mut(), pointer_pos.get(), ts) {
                dom::set_style(&el, "transform", &s.transform());
            }
            true
        })
    };

    let wiring = BugWiring {
        document: document.clone(),
        el,
        sprite,
        rng,
        pointer: pointer_pos,
        frames,
    };

    let w = wiring.clone();
    pointer::wire_pointer_move(document, move |pos, now| w.on_pointer(pos, now));

    let w = wiring.clone();
    pointer::wire_visibility(document, move |visible| {
        if visible {
            w.resume();
        } else {
            w.suspend();
        }
    });

    let w = wiring.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        w.sprite.borrow_mut().resize(dom::viewport_size());
    });

    wiring.render();
    wiring.resume();
    log::info!("[bug] released");
    Ok(())
}
