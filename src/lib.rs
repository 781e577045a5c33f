//! Provably fair die rolls via commit-reveal hashing.
//!
//! A roll commits to `SHA-256(secret_seed || public_seed)`, where the secret
//! seed is 16 fresh random bytes in hex and the public seed comes from the
//! client. The face is the first four hash bytes as a big-endian `u32`,
//! reduced modulo 6, plus one. Anyone holding both seeds can recompute the
//! hash and face with [`verify`].
//!
//! ```
//! use fairroll::seed::OsSeedSource;
//!
//! let roll = fairroll::commit(&OsSeedSource, Some("client seed")).unwrap();
//! let check = fairroll::verify(Some("client seed"), Some(roll.secret_seed.as_str())).unwrap();
//! assert!(check.matches(&roll.hash));
//! ```

pub mod api;
pub mod core;
pub mod error;
pub mod roll;
pub mod seed;
pub mod types;

#[cfg(feature = "server")]
pub mod server;

pub use crate::core::{commit_hash, die_face};
pub use error::RollError;
#[cfg(feature = "server")]
pub use error::ServerError;
pub use roll::{commit, verify};
pub use seed::{FixedSeedSource, OsSeedSource, SeedSource};
pub use types::{CommitHash, DieFace, Roll, SecretSeed, Verification};
