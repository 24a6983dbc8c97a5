use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for the starfield. Defaults match the production values; a JSON
/// override can be dropped into localStorage under
/// [`constants::CONFIG_STORAGE_KEY`] for quick visual tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub star_count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub twinkle_speed: f64,
    pub fade_probability: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: constants::NUM_STARS,
            min_radius: constants::MIN_R,
            max_radius: constants::MAX_R,
            twinkle_speed: constants::TWINKLE_SPEED,
            fade_probability: constants::FADE_PROB,
        }
    }
}

impl StarfieldConfig {
    /// Defaults, overridden by a JSON blob in localStorage when present and
    /// parseable. Unreadable storage or malformed JSON falls back silently.
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(constants::CONFIG_STORAGE_KEY).ok().flatten());

        match stored {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Clamp degenerate values so the simulation never sees them: probability
    /// into [0, 1], radii non-negative and ordered.
    pub fn sanitized(mut self) -> Self {
        self.fade_probability = self.fade_probability.clamp(0.0, 1.0);
        self.min_radius = self.min_radius.max(0.0);
        if self.max_radius < self.min_radius {
            self.max_radius = self.min_radius;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = StarfieldConfig::default();
        assert_eq!(cfg.star_count, 200);
        assert_eq!(cfg.min_radius, 0.5);
        assert_eq!(cfg.max_radius, 2.2);
        assert_eq!(cfg.twinkle_speed, 0.02);
        assert_eq!(cfg.fade_probability, 0.02);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let cfg: StarfieldConfig = serde_json::from_str(r#"{"star_count": 50}"#).unwrap();
        assert_eq!(cfg.star_count, 50);
        assert_eq!(cfg.max_radius, 2.2);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(serde_json::from_str::<StarfieldConfig>("not json").is_err());
    }

    #[test]
    fn sanitized_clamps_degenerate_values() {
        let cfg = StarfieldConfig {
            fade_probability: 3.0,
            min_radius: 2.0,
            max_radius: 1.0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(cfg.fade_probability, 1.0);
        assert_eq!(cfg.max_radius, cfg.min_radius);
    }
}
