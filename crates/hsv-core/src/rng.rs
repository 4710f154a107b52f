//! Deterministic RNG wrapper, seed-derivation helpers and the random-source seam.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Source of the randomness consumed when building a problem instance.
///
/// Local fields, coupling weights and oracle restarts are all drawn through
/// this trait so callers can substitute a scripted source in tests.
pub trait RandomSource {
    /// Returns a sample from the half-open interval between `low` and `high`.
    ///
    /// The bounds may be supplied in either order; the sample is computed as
    /// `low + (high - low) * u` with `u` uniform in `[0, 1)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;

    /// Returns an index uniformly drawn from `0..upper` (0 when `upper == 0`).
    fn index(&mut self, upper: usize) -> usize;
}

/// Deterministic RNG handle exposed to HSV consumers.
///
/// The handle is a thin wrapper around `StdRng`. A master `seed: u64` must be
/// provided by the caller. Substreams are derived by hashing
/// `(master_seed, substream_id)` with SipHash-1-3 configured with fixed zero
/// keys, see [`derive_substream_seed`].
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle for the given substream of a master seed.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl RandomSource for RngHandle {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let unit: f64 = self.rng.gen();
        low + (high - low) * unit
    }

    fn index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// `uniform` ignores its bounds and returns the next scripted value verbatim;
/// `index` maps the next value onto `0..upper` by truncation and modulo.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a scripted source. An empty script behaves as a constant `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }

    fn next_value(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, _low: f64, _high: f64) -> f64 {
        self.next_value()
    }

    fn index(&mut self, upper: usize) -> usize {
        if upper == 0 {
            return 0;
        }
        let raw = self.next_value().abs() as usize;
        raw % upper
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
