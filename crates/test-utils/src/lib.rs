//! Arbitrary value generation for tests across the ferry crates.

use arbitrary::{Arbitrary, Unstructured};
use rand::{rngs::StdRng, RngCore, SeedableRng};

/// The default buffer size for the `ArbitraryGenerator`.
const ARB_GEN_LEN: usize = 65_536;

/// Number of fresh buffers tried before giving up on a type.
const MAX_ATTEMPTS: usize = 16;

/// Feeds random bytes into [`Arbitrary`] impls.
///
/// Generators built with [`ArbitraryGenerator::new_seeded`] produce the same
/// sequence of values on every run, which keeps failing tests reproducible.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
    rng: StdRng,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    /// Creates a generator seeded from the OS entropy source.
    pub fn new() -> Self {
        Self::with_rng(ARB_GEN_LEN, StdRng::from_entropy())
    }

    /// Creates a generator with a fixed seed.
    pub fn new_seeded(seed: u64) -> Self {
        Self::with_rng(ARB_GEN_LEN, StdRng::seed_from_u64(seed))
    }

    /// Creates a generator with a buffer of `size` bytes. Types with large
    /// collections need a larger buffer to avoid running out of entropy.
    pub fn new_with_size(size: usize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    fn with_rng(size: usize, rng: StdRng) -> Self {
        Self {
            buf: vec![0u8; size],
            rng,
        }
    }

    /// Generates an arbitrary instance of type `T`.
    ///
    /// # Panics
    ///
    /// If `T::arbitrary` fails on every attempted buffer.
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        let mut last_error = None;

        for _ in 0..MAX_ATTEMPTS {
            self.rng.fill_bytes(&mut self.buf);
            let mut u = Unstructured::new(&self.buf);
            match T::arbitrary(&mut u) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }

        let error_msg = last_error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unknown error".to_string());
        panic!("failed to generate arbitrary instance: {error_msg}");
    }

    /// Fills a fixed-size byte array.
    pub fn bytes<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        self.rng.fill_bytes(&mut out);
        out
    }
}
