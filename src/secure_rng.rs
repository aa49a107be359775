//! Random number generation for phase randomization.
//!
//! Surrogate generation takes its random source as an explicit `&mut` handle,
//! so any `rand` generator works. This module provides the default one: a
//! ChaCha20 generator that can be seeded for reproducible significance tests,
//! plus a per-thread instance for callers that do not care about seeding.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::cell::RefCell;
use std::f64::consts::TAU;

/// Draw `count` independent phases uniformly from `[0, 2π)`.
pub fn uniform_phases<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(0.0..TAU)).collect()
}

/// ChaCha20-backed random source.
///
/// `with_seed` expands the `u64` to a full 256-bit ChaCha seed, so two
/// instances built from the same seed produce identical streams.
#[derive(Clone)]
pub struct SecureRng {
    rng: ChaCha20Rng,
    seed: Option<u64>,
}

impl std::fmt::Debug for SecureRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureRng")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl SecureRng {
    /// Create a new RNG with entropy from the OS.
    pub fn new() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
            seed: None,
        }
    }

    /// Create a new RNG with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        log::debug!("seeding phase RNG with {}", seed);
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seed this instance was created with, `None` for entropy-seeded instances.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draw `count` phases uniformly from `[0, 2π)`.
    pub fn uniform_phases(&mut self, count: usize) -> Vec<f64> {
        uniform_phases(&mut self.rng, count)
    }
}

impl Default for SecureRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for SecureRng {
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

thread_local! {
    static THREAD_RNG: RefCell<SecureRng> = RefCell::new(SecureRng::new());
}

/// Execute a function with this thread's RNG.
///
/// Each thread owns an independent, entropy-seeded generator, so no locking
/// is involved. A nested call, made while the thread's generator is already
/// borrowed, runs against a fresh entropy-seeded generator instead.
pub fn with_thread_local_rng<F, T>(f: F) -> T
where
    F: FnOnce(&mut SecureRng) -> T,
{
    THREAD_RNG.with(|cell| match cell.try_borrow_mut() {
        Ok(mut rng) => f(&mut rng),
        Err(_) => {
            log::trace!("thread-local RNG already borrowed, using a fresh generator");
            f(&mut SecureRng::new())
        }
    })
}
