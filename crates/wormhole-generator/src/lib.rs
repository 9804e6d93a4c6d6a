pub mod random;

pub use random::{random_alias, RandomGenerator, SeededGenerator, ALPHABET, DEFAULT_ALIAS_LENGTH};

use wormhole_core::Alias;

/// Trait for generating alias candidates.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is enforced by the repository, so a generator only has to keep
/// the collision probability low.
pub trait Generator: Send + Sync + 'static {
    /// Produces a fresh alias candidate.
    fn generate(&self) -> Alias;
}

impl<G: Generator + ?Sized> Generator for std::sync::Arc<G> {
    fn generate(&self) -> Alias {
        (**self).generate()
    }
}
