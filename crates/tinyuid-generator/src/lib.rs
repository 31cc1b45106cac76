//! Short unique-identifier generation.
//!
//! [`TinyUid`] produces identifiers far shorter than a 36-character UUID
//! using one of two strategies: a per-instance counter encoded over a
//! shuffled 62-character dictionary (collision-free for the instance's
//! lifetime) or fixed-length uniform random sampling from the same
//! dictionary.

pub mod error;
mod sink;
mod tiny_uid;

pub use error::Error;
pub use sink::{DebugSink, TracingSink};
pub use tiny_uid::{TinyUid, TinyUidSettings, DEFAULT_RANDOM_LENGTH};

use tinyuid_core::Uid;

/// Trait for producing short identifiers.
///
/// Implementations are pure generators with no storage interaction; the
/// strategy behind `generate` can range from random sampling to
/// distributed schemes (Snowflake-style ids, UUIDs, etc.).
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Uid>;
    /// Generates a value that converts into a short identifier.
    ///
    /// The generated identifier should be unique within the generator's
    /// lifetime.
    fn generate(&self) -> Self::Output;
}

impl Generator for TinyUid {
    type Output = Uid;

    fn generate(&self) -> Self::Output {
        // Counter mode is the collision-free strategy; generic consumers
        // rely on `generate` never repeating an id for one instance.
        self.next_id()
    }
}

#[cfg(test)]
mod tests {
    use super::{Generator, TinyUid};

    #[test]
    fn tinyuid_implements_generator_trait() {
        let generator = TinyUid::default();

        let first = generator.generate();
        let second = generator.generate();

        assert_ne!(first.as_str(), second.as_str());
        assert_eq!(generator.counter(), 2);
    }
}
