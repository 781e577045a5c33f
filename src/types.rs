use crate::core::SECRET_SEED_BYTES;
use crate::seed::SeedSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// SHA-256 digest binding a secret seed to a public seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CommitHash(pub [u8; 32]);

impl CommitHash {
    /// Lowercase hex, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Display for CommitHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("commit hash must be 64 hex characters")]
pub struct ParseHashError;

impl FromStr for CommitHash {
    type Err = ParseHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| ParseHashError)?;
        Ok(CommitHash(bytes))
    }
}

impl Serialize for CommitHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for CommitHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A die face in `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DieFace(pub(crate) u8);

impl DieFace {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl From<&CommitHash> for DieFace {
    fn from(hash: &CommitHash) -> Self {
        crate::core::die_face(hash)
    }
}

/// Server-generated secret seed: lowercase hex of 16 random bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SecretSeed(String);

impl SecretSeed {
    /// Draw a fresh seed from `source`.
    pub fn generate(source: &dyn SeedSource) -> Self {
        let mut bytes = [0u8; SECRET_SEED_BYTES];
        source.fill_bytes(&mut bytes);
        SecretSeed(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SecretSeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of a commit: published hash, derived face and the revealed secret.
///
/// The secret is revealed in the same response as the hash, so the roll is
/// auditable after the fact rather than concealed during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roll {
    pub hash: CommitHash,
    pub dice_roll: DieFace,
    pub secret_seed: SecretSeed,
}

/// Result of a verification: the recomputed hash only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub computed_hash: CommitHash,
}

impl Verification {
    /// Client-side check against the hash published by the commit.
    pub fn matches(&self, published: &CommitHash) -> bool {
        self.computed_hash == *published
    }

    /// Face the published hash would have produced, recomputed locally.
    pub fn dice_roll(&self) -> DieFace {
        DieFace::from(&self.computed_hash)
    }
}
