use std::fs;

use anyhow::Context;
use tracing::info;

use crate::{
    entities::seed::SeedData,
    repositories::memory_repo::MemoryRepo,
    settings::AppConfig,
};

/// Builds the process-wide store and seeds it according to `config`.
///
/// A `seed_file` takes precedence over the built-in demo fixture; with
/// `seed_demo_data` off and no file the store starts empty.
pub fn create_store(config: &AppConfig) -> anyhow::Result<MemoryRepo> {
    let store = MemoryRepo::new();

    let seed = match (&config.seed_file, config.seed_demo_data) {
        (Some(path), _) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read seed file {path}"))?;
            Some(SeedData::from_json(&raw).with_context(|| format!("Invalid seed file {path}"))?)
        }
        (None, true) => Some(SeedData::demo().context("Invalid built-in demo fixture")?),
        (None, false) => None,
    };

    match seed {
        Some(seed) => {
            seed.validate()
                .map_err(|e| anyhow::anyhow!("Seed data rejected: {e}"))?;

            let counts = store.seed(seed);
            info!(
                profiles = counts.profiles,
                skills = counts.skills,
                projects = counts.projects,
                experiences = counts.experiences,
                education = counts.education,
                "In-memory store seeded."
            );
        }
        None => info!("In-memory store started empty."),
    }

    Ok(store)
}
