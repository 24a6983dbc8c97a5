use std::cell::RefCell;
use std::rc::Rc;

use crate::canvas::{self, ResizeListener};
use crate::config::StarfieldConfig;
use crate::frame_loop::FrameLoop;
use crate::render;
use crate::rng::Xorshift64;
use crate::starfield::Starfield;

/// Live starfield bound to a canvas. Dropping it cancels the frame loop and
/// detaches the resize listener.
pub struct Animator {
    _frames: FrameLoop,
    _resize: ResizeListener,
}

/// Bind a starfield to the canvas with the given id. Returns None when the
/// canvas or its 2d context is unavailable, leaving the host page untouched.
pub fn mount(canvas_id: &str, cfg: StarfieldConfig) -> Option<Animator> {
    let canvas = canvas::by_id(canvas_id)?;
    let ctx = canvas::context_2d(&canvas)?;

    let field = Rc::new(RefCell::new(Starfield::new(
        cfg.sanitized(),
        Xorshift64::from_entropy(),
    )));

    if let Some((w, h)) = canvas::fit_to_container(&canvas, &ctx) {
        field.borrow_mut().reseed(w, h);
    }

    {
        let f = field.borrow();
        web_sys::console::log_1(
            &format!(
                "starfield: {} stars on {:.0}x{:.0}",
                f.stars().len(),
                f.width(),
                f.height()
            )
            .into(),
        );
    }

    // reseed synchronously, so the frame callback only ever sees a fully
    // pre- or fully post-resize population
    let resize_canvas = canvas.clone();
    let resize_ctx = ctx.clone();
    let resize_field = field.clone();
    let resize = ResizeListener::attach(move || {
        if let Some((w, h)) = canvas::fit_to_container(&resize_canvas, &resize_ctx) {
            resize_field.borrow_mut().reseed(w, h);
        }
    })?;

    let frames = FrameLoop::start(move |_timestamp| {
        let mut f = field.borrow_mut();
        f.step();
        render::draw(&ctx, &f);
    })?;

    Some(Animator {
        _frames: frames,
        _resize: resize,
    })
}
