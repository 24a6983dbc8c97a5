use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn by_id(id: &str) -> Option<HtmlCanvasElement> {
    let document = web_sys::window()?.document()?;
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlCanvasElement>()
        .ok()
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas.get_context("2d").ok()?.map(|c| c.unchecked_into())
}

/// Match the backing buffer to the canvas's container, scaled by the device
/// pixel ratio so strokes stay crisp on high-density displays. Returns the
/// CSS-pixel dimensions the simulation runs in, or None while the surface
/// isn't measurable.
pub fn fit_to_container(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
) -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let (w, h) = match canvas.parent_element() {
        Some(parent) => (parent.client_width() as f64, parent.client_height() as f64),
        None => (
            window.inner_width().ok()?.as_f64()?,
            window.inner_height().ok()?.as_f64()?,
        ),
    };
    if w <= 0.0 || h <= 0.0 {
        return None;
    }

    let dpr = window.device_pixel_ratio();
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };

    canvas.set_width((w * dpr) as u32);
    canvas.set_height((h * dpr) as u32);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{w}px"));
    let _ = style.set_property("height", &format!("{h}px"));
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    Some((w, h))
}

/// Window resize subscription that detaches on drop.
pub struct ResizeListener {
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut() + 'static) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            on_resize();
        }) as Box<dyn FnMut(web_sys::Event)>);

        let window = web_sys::window()?;
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
        }
    }
}
