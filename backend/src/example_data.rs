//! Seeded example roster wiring.
//!
//! Compiled with the `example-data` feature. Settings come from the
//! environment via OrthoConfig (`EXAMPLE_DATA_*`); the generated roster is
//! captured once at startup into an in-memory directory.

use example_data::GenerationError;
use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::Person;
use crate::domain::ports::InMemoryDirectory;

/// Default generator seed, reproducing the demo roster.
const DEFAULT_SEED: u64 = 123;

/// Default roster size.
const DEFAULT_COUNT: usize = 20;

/// Configuration values controlling the example roster.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXAMPLE_DATA")]
pub struct ExampleDataSettings {
    /// Serve the generated example roster instead of the built-in fixture.
    #[ortho_config(default = false)]
    pub enabled: bool,
    /// Seed for the deterministic generator.
    pub seed: Option<u64>,
    /// Number of people to generate.
    pub count: Option<usize>,
}

impl ExampleDataSettings {
    /// Return the configured seed, falling back to the default.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Return the configured roster size, falling back to the default.
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }
}

/// Generate the configured roster and capture it into a directory.
///
/// # Errors
///
/// Propagates [`GenerationError`] from the generator; with the default
/// settings generation always succeeds.
pub fn seeded_directory(
    settings: &ExampleDataSettings,
) -> Result<InMemoryDirectory, GenerationError> {
    let records = example_data::generate_people(settings.seed(), settings.count())?;
    let people = records
        .into_iter()
        .map(|record| Person::new(record.name, record.title, record.email, record.role))
        .collect();

    Ok(InMemoryDirectory::new(people))
}
