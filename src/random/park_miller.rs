use rand::RngCore;

/// Modulus of the minimal-standard generator, 2^31 − 1.
pub const P: u32 = 2_147_483_647;
/// Multiplier of the minimal-standard generator.
pub const A: u32 = 16_807;

/// Park–Miller "minimal standard" linear congruential generator.
///
/// The product wraps in `u32` before the modulus is taken, so this is not the
/// textbook 64-bit recurrence. Seed 1 reproduces the published logic-gate
/// weights.
#[derive(Debug, Clone)]
pub struct ParkMiller {
    current: u32,
}

impl ParkMiller {
    /// Generator seeded with 1.
    pub fn new() -> ParkMiller {
        ParkMiller { current: 1 }
    }

    /// A seed congruent to 0 mod P would lock the generator at zero, so it is
    /// replaced with 1.
    pub fn with_seed(seed: u32) -> ParkMiller {
        let current = seed % P;
        ParkMiller { current: if current == 0 { 1 } else { current } }
    }

    pub fn step(&mut self) -> u32 {
        self.current = self.current.wrapping_mul(A) % P;
        self.current
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / P as f64
    }
}

impl Default for ParkMiller {
    fn default() -> Self {
        ParkMiller::new()
    }
}

/// States are below 2^31, so each `u32` is assembled from the top 16 bits of
/// two consecutive states to keep bit 31 populated for `rand`'s samplers.
impl RngCore for ParkMiller {
    fn next_u32(&mut self) -> u32 {
        let hi = self.step() >> 15;
        let lo = self.step() >> 15;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
