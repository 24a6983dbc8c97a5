/// Wasm-native xorshift64 generator. One JS interop call at seed time
/// instead of one per draw, and seedable so simulation runs can be replayed.
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Seed from `Math.random()`. Browser-only; tests use [`Xorshift64::seeded`].
    pub fn from_entropy() -> Self {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        Self::seeded(seed)
    }

    /// Uniform f64 in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        // top 53 bits -> f64 mantissa
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = Xorshift64::seeded(0);
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift64::seeded(42);
        let mut b = Xorshift64::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64(), b.next_f64());
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = Xorshift64::seeded(7);
        for _ in 0..1000 {
            let v = rng.range(-0.05, 0.05);
            assert!((-0.05..0.05).contains(&v));
        }
    }
}
