use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type TickClosure = Closure<dyn FnMut(f64)>;

/// Recurring animation-frame subscription. The callback re-arms itself each
/// tick; [`FrameLoop::cancel`] (or drop) stops the pending request and
/// releases the callback, so an unmounted host never keeps ticking against a
/// detached surface.
pub struct FrameLoop {
    raf_id: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
    closure: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    /// Run `tick` once per animation frame until cancelled. Returns None when
    /// there is no window to schedule against.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Option<Self> {
        let f: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        let raf_id = Rc::new(Cell::new(0));
        let cancelled = Rc::new(Cell::new(false));

        let id = raf_id.clone();
        let done = cancelled.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if done.get() {
                return;
            }
            tick(timestamp);

            if let Some(window) = web_sys::window() {
                if let Ok(next) = window
                    .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref())
                {
                    id.set(next);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let window = web_sys::window()?;
        let first = window
            .request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())
            .ok()?;
        raf_id.set(first);

        Some(Self {
            raf_id,
            cancelled,
            closure: g,
        })
    }

    /// Idempotent. Must not be called from inside the tick itself.
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.raf_id.get());
        }
        // dropping the closure breaks its self-referencing Rc cycle
        self.closure.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
