use crate::Generator;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use typed_builder::TypedBuilder;
use wormhole_core::Alias;

/// Characters an alias is drawn from: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Builds a string of `length` characters, each drawn independently and
/// uniformly from [`ALPHABET`] using the given randomness source.
///
/// The output is not suitable where unpredictability matters.
pub fn random_alias<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Random alias generator backed by the calling thread's RNG.
///
/// Every call draws from a thread-local generator, so concurrent callers
/// share no state at all.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RandomGenerator {
    /// Values below 1 are raised to 1.
    #[builder(default = DEFAULT_ALIAS_LENGTH, setter(transform = |length: usize| length.max(1)))]
    length: usize,
}

impl RandomGenerator {
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> Alias {
        Alias::new_unchecked(random_alias(&mut rand::rng(), self.length))
    }
}

/// Random alias generator with an explicit seed.
///
/// Two generators built from the same seed produce the same sequence.
#[derive(Debug)]
pub struct SeededGenerator {
    length: usize,
    rng: Mutex<StdRng>,
}

impl SeededGenerator {
    pub fn new(seed: u64) -> Self {
        Self::with_length(seed, DEFAULT_ALIAS_LENGTH)
    }

    /// A `length` of 0 is raised to 1.
    pub fn with_length(seed: u64, length: usize) -> Self {
        Self {
            length: length.max(1),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Generator for SeededGenerator {
    fn generate(&self) -> Alias {
        let mut rng = self.rng.lock();
        Alias::new_unchecked(random_alias(&mut *rng, self.length))
    }
}
