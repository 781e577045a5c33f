use crate::types::{CommitHash, DieFace};
use sha2::{Digest, Sha256};

/// Random bytes behind every secret seed (128 bits).
pub const SECRET_SEED_BYTES: usize = 16;

/// Faces on the die.
pub const DIE_FACES: u32 = 6;

/// Leading hash bytes read as a big-endian `u32` when deriving the face.
pub const FACE_WINDOW_BYTES: usize = 4;

/// SHA-256 over `secret_seed || public_seed` (UTF-8 bytes, no separator).
pub fn commit_hash(secret_seed: &str, public_seed: &str) -> CommitHash {
    let mut hasher = Sha256::new();
    hasher.update(secret_seed.as_bytes());
    hasher.update(public_seed.as_bytes());
    CommitHash(hasher.finalize().into())
}

/// Derive the die face from a commit hash.
///
/// The first 32 bits are reduced modulo 6. Since 2^32 is not a multiple of 6,
/// faces 1 through 4 are each one value more likely than faces 5 and 6 (out
/// of 2^32). The formula is kept exactly so published rolls stay reproducible.
pub fn die_face(hash: &CommitHash) -> DieFace {
    let mut window = [0u8; FACE_WINDOW_BYTES];
    window.copy_from_slice(&hash.0[..FACE_WINDOW_BYTES]);
    let value = u32::from_be_bytes(window);
    DieFace((value % DIE_FACES) as u8 + 1)
}
