//! Random sources used to populate a board.
//!
//! The browser build draws from `Math.random()`; a seeded generator gives
//! reproducible boards for tests and for `?seed=` URLs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Next sample, uniform in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// `Math.random()` from the host page. Only usable on wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Random source picked at startup: seeded when the page asked for a seed.
#[derive(Clone, Debug)]
pub enum HostRandom {
    Browser(MathRandom),
    Seeded(SeededRandom),
}

impl HostRandom {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => HostRandom::Seeded(SeededRandom::new(s)),
            None => HostRandom::Browser(MathRandom),
        }
    }
}

impl RandomSource for HostRandom {
    fn next_unit(&mut self) -> f64 {
        match self {
            HostRandom::Browser(r) => r.next_unit(),
            HostRandom::Seeded(r) => r.next_unit(),
        }
    }
}
