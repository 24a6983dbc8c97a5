mod animator;
mod app;
mod canvas;
mod config;
mod constants;
mod frame_loop;
mod render;
mod rng;
mod star;
mod starfield;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
