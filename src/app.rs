use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::animator::{self, Animator};
use crate::config::StarfieldConfig;

const CANVAS_ID: &str = "starsCanvas";

#[component]
pub fn App() -> impl IntoView {
    view! { <HeroBackdrop /> }
}

/// Hero section whose canvas hosts the starfield. The animator is created
/// once the canvas exists in the DOM and dropped when the section unmounts.
#[component]
pub fn HeroBackdrop() -> impl IntoView {
    let animator: Rc<RefCell<Option<Animator>>> = Rc::new(RefCell::new(None));

    let slot_for_mount = SendWrapper::new(animator.clone());
    Effect::new(move |_| {
        let cfg = StarfieldConfig::load();
        *slot_for_mount.borrow_mut() = animator::mount(CANVAS_ID, cfg);
    });

    let slot_for_cleanup = SendWrapper::new(animator);
    on_cleanup(move || {
        slot_for_cleanup.borrow_mut().take();
    });

    view! {
        <section class="hero">
            <canvas id=CANVAS_ID aria-hidden="true"></canvas>
        </section>
    }
}
