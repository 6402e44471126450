pub mod park_miller;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};
use serde::{Serialize, Deserialize};

pub use park_miller::ParkMiller;

/// Which generator a run draws its initial weights (and epoch shuffles) from.
/// Stored in the training config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RngKind {
    /// The Park–Miller generator the reference results were produced with.
    Reference { seed: u32 },
    /// `StdRng` seeded from a 64-bit value; reproducible across runs.
    Seeded { seed: u64 },
    /// Thread-local entropy; different weights every run.
    Entropy,
}

impl Default for RngKind {
    fn default() -> Self {
        RngKind::Reference { seed: 1 }
    }
}

impl RngKind {
    pub fn build(&self) -> RandomSource {
        match self {
            RngKind::Reference { seed } => RandomSource::Reference(ParkMiller::with_seed(*seed)),
            RngKind::Seeded { seed } => RandomSource::Seeded(StdRng::seed_from_u64(*seed)),
            RngKind::Entropy => RandomSource::Entropy(rand::thread_rng()),
        }
    }
}

/// A concrete generator built from an [`RngKind`].
pub enum RandomSource {
    Reference(ParkMiller),
    Seeded(StdRng),
    Entropy(ThreadRng),
}

impl RandomSource {
    /// Uniform draw in [0, 1), the shape of value weight initialization
    /// expects.
    pub fn next_f64(&mut self) -> f64 {
        match self {
            RandomSource::Reference(rng) => rng.next_f64(),
            RandomSource::Seeded(rng) => rng.gen::<f64>(),
            RandomSource::Entropy(rng) => rng.gen::<f64>(),
        }
    }

    fn inner(&mut self) -> &mut dyn RngCore {
        match self {
            RandomSource::Reference(rng) => rng as &mut dyn RngCore,
            RandomSource::Seeded(rng) => rng as &mut dyn RngCore,
            RandomSource::Entropy(rng) => rng as &mut dyn RngCore,
        }
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.inner().next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner().next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner().try_fill_bytes(dest)
    }
}
