use crate::config::StarfieldConfig;
use crate::rng::Xorshift64;
use crate::star::Star;

/// The full star population plus the surface it lives on. Owned by the
/// animator and touched only from the frame callback and the resize handler,
/// both on the single browser thread.
pub struct Starfield {
    cfg: StarfieldConfig,
    width: f64,
    height: f64,
    stars: Vec<Star>,
    rng: Xorshift64,
}

impl Starfield {
    /// Empty field; call [`Starfield::reseed`] once the surface is measurable.
    pub fn new(cfg: StarfieldConfig, rng: Xorshift64) -> Self {
        Self {
            cfg,
            width: 0.0,
            height: 0.0,
            stars: Vec::new(),
            rng,
        }
    }

    /// Discard the old population and seed a fresh one for the given surface.
    /// Runs synchronously, so a frame callback never observes a half-built
    /// field.
    pub fn reseed(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        let Self { cfg, rng, stars, .. } = self;
        *stars = (0..cfg.star_count)
            .map(|_| Star::spawn(width, height, cfg, rng))
            .collect();
    }

    /// Advance every star by one frame, in population order.
    pub fn step(&mut self) {
        let Self {
            cfg,
            width,
            height,
            stars,
            rng,
        } = self;
        for star in stars.iter_mut() {
            star.step(*width, *height, cfg, rng);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_field(seed: u64, cfg: StarfieldConfig) -> Starfield {
        Starfield::new(cfg, Xorshift64::seeded(seed))
    }

    #[test]
    fn population_size_is_invariant_across_frames() {
        let cfg = StarfieldConfig {
            star_count: 64,
            fade_probability: 1.0, // constant respawn churn
            ..Default::default()
        };
        let mut field = seeded_field(11, cfg);
        field.reseed(800.0, 600.0);

        for _ in 0..300 {
            field.step();
            assert_eq!(field.stars().len(), 64);
        }
    }

    #[test]
    fn reseed_replaces_every_star() {
        let mut field = seeded_field(12, StarfieldConfig::default());
        field.reseed(800.0, 600.0);
        let before: Vec<(f64, f64)> = field.stars().iter().map(|s| (s.x, s.y)).collect();

        field.reseed(400.0, 300.0);

        assert_eq!(field.width(), 400.0);
        assert_eq!(field.height(), 300.0);
        assert_eq!(field.stars().len(), before.len());
        for (star, old) in field.stars().iter().zip(&before) {
            assert_ne!((star.x, star.y), *old);
        }
    }

    #[test]
    fn reseeded_stars_fit_the_new_surface() {
        let mut field = seeded_field(13, StarfieldConfig::default());
        field.reseed(320.0, 200.0);
        for star in field.stars() {
            assert!((0.0..320.0).contains(&star.x));
            assert!((0.0..200.0).contains(&star.y));
        }
    }

    #[test]
    fn identical_seeds_replay_identical_frames() {
        let cfg = StarfieldConfig::default();
        let mut a = seeded_field(99, cfg.clone());
        let mut b = seeded_field(99, cfg);
        a.reseed(800.0, 600.0);
        b.reseed(800.0, 600.0);

        for _ in 0..120 {
            a.step();
            b.step();
        }

        for (sa, sb) in a.stars().iter().zip(b.stars()) {
            assert_eq!(
                (sa.x, sa.y, sa.alpha, sa.r),
                (sb.x, sb.y, sb.alpha, sb.r)
            );
        }
    }

    #[test]
    fn new_field_is_empty_until_reseeded() {
        let field = seeded_field(14, StarfieldConfig::default());
        assert!(field.stars().is_empty());
        assert_eq!(field.width(), 0.0);
    }
}
