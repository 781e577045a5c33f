//! Browser-side verification of published rolls.
//!
//! The server reveals the secret seed alongside the hash; these bindings let
//! the page recompute both without trusting the server's verify endpoint.

use fairroll::core::{commit_hash, die_face};
use fairroll::types::CommitHash;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RollCheck {
    computed_hash: String,
    dice_roll: u8,
    matches: bool,
}

/// Hex SHA-256 of `secret_seed || public_seed`.
#[wasm_bindgen]
pub fn compute_hash(secret_seed: &str, public_seed: &str) -> String {
    commit_hash(secret_seed, public_seed).to_hex()
}

/// Die face (1..=6) for a published hash.
#[wasm_bindgen]
pub fn dice_face(hash_hex: &str) -> Result<u8, JsValue> {
    let hash = parse_hash(hash_hex)?;
    Ok(die_face(&hash).value())
}

/// Recompute a roll and compare it to the hash published at commit time.
#[wasm_bindgen]
pub fn check_roll(
    public_seed: &str,
    secret_seed: &str,
    published_hash: &str,
) -> Result<JsValue, JsValue> {
    let published = parse_hash(published_hash)?;
    let computed = commit_hash(secret_seed, public_seed);
    let check = RollCheck {
        computed_hash: computed.to_hex(),
        dice_roll: die_face(&computed).value(),
        matches: computed == published,
    };
    to_value(&check).map_err(|err| JsValue::from_str(&err.to_string()))
}

fn parse_hash(hash_hex: &str) -> Result<CommitHash, JsValue> {
    hash_hex
        .parse::<CommitHash>()
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
