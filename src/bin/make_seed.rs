//! Seed maintenance helper: parse, validate and pretty-rewrite the embedded
//! seed asset so hand edits stay canonical.
//!
//! Usage: `cargo run --bin make_seed [path/to/seed.json]`

use anyhow::{Context, Result};
use itertools::Itertools;
use spark::data::SeedData;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("src/data/seed.json"));

    rewrite_seed(&path)
}

fn rewrite_seed(path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {:?}", path))?;
    let seed: SeedData =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {:?}", path))?;

    seed.validate()
        .with_context(|| format!("seed file {:?} failed validation", path))?;

    let by_distance = seed
        .candidates
        .iter()
        .sorted_by_key(|c| c.distance_ft)
        .map(|c| format!("{} ({} ft)", c.name, c.distance_ft))
        .join(", ");
    println!("Candidates by distance: {}", by_distance);
    println!(
        "{} conversations, {} pending pings, viewer profile: {}",
        seed.conversations.len(),
        seed.ping_requests.len(),
        seed.profile.name
    );

    let pretty = serde_json::to_string_pretty(&seed).context("failed to re-serialize seed")?;
    std::fs::write(path, pretty + "\n")
        .with_context(|| format!("failed to write seed file {:?}", path))?;
    println!("Rewrote {:?}", path);

    Ok(())
}
