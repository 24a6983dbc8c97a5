// Starfield defaults (config.rs exposes these as the runtime-overridable set)
pub const NUM_STARS: usize = 200;
pub const MIN_R: f64 = 0.5;
pub const MAX_R: f64 = 2.2;
pub const TWINKLE_SPEED: f64 = 0.02; // base per-frame phase increment
pub const FADE_PROB: f64 = 0.02; // chance per frame to trigger a fade-out

// Rendering
pub const GLOW_SCALE: f64 = 6.0; // glow radius = core radius * this
pub const WRAP_MARGIN: f64 = 10.0; // px past each edge before wrap-around
pub const ALPHA_RELAX: f64 = 0.06; // fraction of the alpha gap closed per frame
pub const OVERLAY_BOTTOM_ALPHA: f64 = 0.12;

// localStorage key holding an optional JSON config override
pub const CONFIG_STORAGE_KEY: &str = "starfield.config";
