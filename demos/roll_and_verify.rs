//! Commit to a roll, then audit it the way a client would.
//!
//! Usage: `cargo run --example roll_and_verify -- "my public seed"`

use std::error::Error;

use fairroll::seed::OsSeedSource;
use fairroll::{commit, verify};

fn main() -> Result<(), Box<dyn Error>> {
    let public_seed = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demo-public-seed".to_owned());

    let roll = commit(&OsSeedSource, Some(public_seed.as_str()))?;
    println!("commit: {}", serde_json::to_string_pretty(&roll)?);

    // Later: the client recomputes from the revealed secret.
    let check = verify(Some(public_seed.as_str()), Some(roll.secret_seed.as_str()))?;
    println!("verify: {}", serde_json::to_string_pretty(&check)?);
    println!(
        "hash matches: {}, face: {}",
        check.matches(&roll.hash),
        check.dice_roll().value()
    );

    // A single altered character in the secret breaks the match.
    let mut forged = roll.secret_seed.to_string();
    let first = if forged.starts_with('0') { "1" } else { "0" };
    forged.replace_range(0..1, first);
    let forged_check = verify(Some(public_seed.as_str()), Some(forged.as_str()))?;
    println!("forged secret matches: {}", forged_check.matches(&roll.hash));

    Ok(())
}
