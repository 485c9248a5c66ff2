use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A `requestAnimationFrame` loop that can be paused and resumed.
///
/// The frame callback receives the frame timestamp in milliseconds and
/// returns whether the loop should keep running.
#[derive(Clone)]
pub struct FrameLoop {
    tick: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let tick: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));
        let tick_clone = tick.clone();
        let pending_clone = pending.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            pending_clone.set(None);
            if on_frame(ts) {
                pending_clone.set(request_frame(&tick_clone));
            }
        }) as Box<dyn FnMut(f64)>));
        Self { tick, pending }
    }

    /// Schedules the next frame unless one is already pending.
    pub fn start(&self) {
        if self.pending.get().is_none() {
            self.pending.set(request_frame(&self.tick));
        }
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request_frame(tick: &FrameCallback) -> Option<i32> {
    let w = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    w.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
}
