//! Commit and verify operations of the provably fair roll.
//!
//! Both are pure functions of their arguments: nothing is cached or stored
//! between calls, so the client must keep the revealed secret seed if it
//! wants to verify later.

use crate::core::{commit_hash, die_face};
use crate::error::RollError;
use crate::seed::SeedSource;
use crate::types::{Roll, SecretSeed, Verification};

/// Commit to a fresh roll for `public_seed`.
///
/// Rejects a missing or empty seed before drawing any randomness.
pub fn commit(source: &dyn SeedSource, public_seed: Option<&str>) -> Result<Roll, RollError> {
    let public_seed = non_empty(public_seed).ok_or(RollError::PublicSeedRequired)?;

    let secret_seed = SecretSeed::generate(source);
    let hash = commit_hash(secret_seed.as_str(), public_seed);
    let dice_roll = die_face(&hash);

    Ok(Roll {
        hash,
        dice_roll,
        secret_seed,
    })
}

/// Recompute the commit hash from a revealed secret seed.
///
/// Does not compare against anything; see [`Verification::matches`].
pub fn verify(
    public_seed: Option<&str>,
    secret_seed: Option<&str>,
) -> Result<Verification, RollError> {
    let (public_seed, secret_seed) = non_empty(public_seed)
        .zip(non_empty(secret_seed))
        .ok_or(RollError::BothSeedsRequired)?;

    Ok(Verification {
        computed_hash: commit_hash(secret_seed, public_seed),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{FixedSeedSource, OsSeedSource};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const SECRET_BYTES: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];

    #[derive(Default)]
    struct CountingSource {
        calls: AtomicUsize,
    }

    impl SeedSource for CountingSource {
        fn fill_bytes(&self, buf: &mut [u8]) {
            self.calls.fetch_add(1, Ordering::SeqCst);
            buf.fill(7);
        }
    }

    #[test]
    fn commit_with_fixed_source_is_reproducible() {
        let source = FixedSeedSource::new(SECRET_BYTES.to_vec());
        let roll = commit(&source, Some("abc")).expect("commit");
        assert_eq!(roll.secret_seed.as_str(), "00112233445566778899aabbccddeeff");
        assert_eq!(
            roll.hash.to_hex(),
            "b32ea5818c6d41e6b64d3fc5b23ab46524586238e8168f27296d9b580cef1a0c"
        );
        assert_eq!(roll.dice_roll.value(), 4);

        let again = commit(&source, Some("abc")).expect("commit");
        assert_eq!(roll, again);
    }

    #[test]
    fn commit_then_verify_yields_same_hash() {
        let source = OsSeedSource;
        let long = "x".repeat(4096);
        for public in ["abc", "a", "ünïcödé 🎲", long.as_str()] {
            let roll = commit(&source, Some(public)).expect("commit");
            let verification =
                verify(Some(public), Some(roll.secret_seed.as_str())).expect("verify");
            assert_eq!(verification.computed_hash, roll.hash);
            assert!(verification.matches(&roll.hash));
            assert_eq!(verification.dice_roll(), roll.dice_roll);
        }
    }

    #[test]
    fn commit_draws_fresh_secret_each_call() {
        let source = OsSeedSource;
        let first = commit(&source, Some("same")).expect("commit");
        let second = commit(&source, Some("same")).expect("commit");
        assert_ne!(first.secret_seed, second.secret_seed);
        assert_ne!(first.hash, second.hash);
    }

    #[test]
    fn commit_rejects_missing_or_empty_without_drawing() {
        let source = CountingSource::default();
        assert_eq!(
            commit(&source, Some("")),
            Err(RollError::PublicSeedRequired)
        );
        assert_eq!(commit(&source, None), Err(RollError::PublicSeedRequired));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);

        commit(&source, Some("p")).expect("commit");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn verify_requires_both_seeds() {
        for (public, secret) in [
            (Some("a"), Some("")),
            (Some(""), Some("b")),
            (Some(""), Some("")),
            (None, Some("b")),
            (Some("a"), None),
            (None, None),
        ] {
            assert_eq!(
                verify(public, secret),
                Err(RollError::BothSeedsRequired),
                "public={public:?} secret={secret:?}"
            );
        }
    }

    #[test]
    fn verify_is_deterministic() {
        let first = verify(Some("hello world"), Some("deadbeefdeadbeefdeadbeefdeadbeef"))
            .expect("verify");
        let second = verify(Some("hello world"), Some("deadbeefdeadbeefdeadbeefdeadbeef"))
            .expect("verify");
        assert_eq!(first, second);
        assert_eq!(
            first.computed_hash.to_hex(),
            "c93c7eda572d57465f13ced6fe9bffe0ab34e0fd9b796af355780f22602a758c"
        );
    }

    #[test]
    fn tampered_secret_is_detected() {
        let source = OsSeedSource;
        let roll = commit(&source, Some("abc")).expect("commit");
        let mut tampered = roll.secret_seed.to_string();
        let last = tampered.pop().unwrap();
        tampered.push(if last == '0' { '1' } else { '0' });

        let verification = verify(Some("abc"), Some(tampered.as_str())).expect("verify");
        assert!(!verification.matches(&roll.hash));
    }

    #[test]
    fn concurrent_commits_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let public = format!("seed-{i}");
                    let roll = commit(&OsSeedSource, Some(public.as_str())).expect("commit");
                    let verification =
                        verify(Some(public.as_str()), Some(roll.secret_seed.as_str()))
                            .expect("verify");
                    assert!(verification.matches(&roll.hash));
                    roll.secret_seed
                })
            })
            .collect();
        let seeds: std::collections::HashSet<_> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(seeds.len(), 8);
    }
}
