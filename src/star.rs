use crate::config::StarfieldConfig;
use crate::constants::{ALPHA_RELAX, WRAP_MARGIN};
use crate::rng::Xorshift64;

const TAU: f64 = std::f64::consts::PI * 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeDir {
    In,
    Out,
}

/// One simulated point-light.
#[derive(Debug, Clone)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Opacity ceiling, set at spawn.
    pub base_alpha: f64,
    /// Current opacity, mutated every frame. Kept in [0, 1].
    pub alpha: f64,
    pub twinkle_phase: f64,
    pub twinkle_speed: f64,
    /// In a fade transition rather than steady twinkling.
    pub fading: bool,
    pub fade_progress: f64,
    pub fade_dir: FadeDir,
    pub drift_x: f64,
    pub drift_y: f64,
}

impl Star {
    pub fn spawn(w: f64, h: f64, cfg: &StarfieldConfig, rng: &mut Xorshift64) -> Self {
        let base_alpha = rng.range(0.3, 0.95);
        Self {
            x: rng.next_f64() * w,
            y: rng.next_f64() * h,
            r: rng.range(cfg.min_radius, cfg.max_radius),
            base_alpha,
            // start near base brightness so the field doesn't pop in from black
            alpha: base_alpha * rng.range(0.6, 1.0),
            twinkle_phase: rng.next_f64() * TAU,
            twinkle_speed: cfg.twinkle_speed * rng.range(0.6, 1.6),
            fading: false,
            fade_progress: 0.0,
            fade_dir: FadeDir::In,
            drift_x: rng.range(-0.05, 0.05),
            drift_y: rng.range(-0.02, 0.02),
        }
    }

    /// In-place respawn after a completed fade-out: position, size, brightness
    /// and phase are redrawn; drift and twinkle speed survive.
    fn respawn(&mut self, w: f64, h: f64, cfg: &StarfieldConfig, rng: &mut Xorshift64) {
        self.x = rng.next_f64() * w;
        self.y = rng.next_f64() * h;
        self.base_alpha = rng.range(0.35, 0.95);
        self.r = rng.range(cfg.min_radius, cfg.max_radius);
        self.twinkle_phase = rng.next_f64() * TAU;
        self.fading = true;
        self.fade_dir = FadeDir::In;
        self.fade_progress = 0.0;
    }

    /// Advance this star by one frame.
    pub fn step(&mut self, w: f64, h: f64, cfg: &StarfieldConfig, rng: &mut Xorshift64) {
        self.twinkle_phase += self.twinkle_speed;
        let tw = (self.twinkle_phase.sin() + 1.0) / 2.0;
        // twinkle modulates between 60% and 100% of base brightness
        let target_alpha = self.base_alpha * (0.6 + 0.4 * tw);

        self.x += self.drift_x;
        self.y += self.drift_y;
        if self.x < -WRAP_MARGIN {
            self.x = w + WRAP_MARGIN;
        }
        if self.x > w + WRAP_MARGIN {
            self.x = -WRAP_MARGIN;
        }
        if self.y < -WRAP_MARGIN {
            self.y = h + WRAP_MARGIN;
        }
        if self.y > h + WRAP_MARGIN {
            self.y = -WRAP_MARGIN;
        }

        if !self.fading && rng.next_f64() < cfg.fade_probability {
            self.fading = true;
            self.fade_dir = FadeDir::Out;
            self.fade_progress = 0.0;
        }

        if self.fading {
            self.fade_progress += 0.01 * rng.range(0.8, 1.6);
            self.alpha = match self.fade_dir {
                FadeDir::Out => target_alpha * (1.0 - self.fade_progress),
                FadeDir::In => target_alpha * self.fade_progress,
            };
            if self.fade_progress >= 1.0 {
                match self.fade_dir {
                    // a faded-out star comes straight back somewhere else
                    FadeDir::Out => self.respawn(w, h, cfg, rng),
                    FadeDir::In => {
                        self.fading = false;
                        self.fade_progress = 0.0;
                    }
                }
            }
        } else {
            self.alpha += (target_alpha - self.alpha) * ALPHA_RELAX;
        }

        // fade math can overshoot the valid range when progress passes 1
        self.alpha = self.alpha.clamp(0.0, 1.0);
    }
}
