use rand::rngs::OsRng;
use rand::RngCore;

/// Pluggable source of cryptographically secure random bytes for secret seeds.
pub trait SeedSource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]);
}

/// Operating-system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSeedSource;

impl SeedSource for OsSeedSource {
    fn fill_bytes(&self, buf: &mut [u8]) {
        OsRng.fill_bytes(buf);
    }
}

/// Deterministic source for tests and reproducible demos.
///
/// Repeats `pattern` across the buffer; never use it to serve real rolls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSeedSource {
    pattern: Vec<u8>,
}

impl FixedSeedSource {
    /// An empty pattern yields all-zero bytes.
    pub fn new(pattern: Vec<u8>) -> Self {
        Self { pattern }
    }
}

impl SeedSource for FixedSeedSource {
    fn fill_bytes(&self, buf: &mut [u8]) {
        if self.pattern.is_empty() {
            buf.fill(0);
            return;
        }
        for (dst, src) in buf.iter_mut().zip(self.pattern.iter().cycle()) {
            *dst = *src;
        }
    }
}
