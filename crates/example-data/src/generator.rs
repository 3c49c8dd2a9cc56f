//! Deterministic roster generation.
//!
//! The core generation function produces a reproducible list of people
//! records from a numeric seed. The same seed and count always produce
//! identical output.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::job::raw::{Position, Title};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::record::PersonRecord;

/// Maximum number of attempts to generate a usable person name.
const MAX_NAME_ATTEMPTS: usize = 100;

/// Domains assigned to generated email addresses.
///
/// Reserved example domains only, so generated rosters never reference a
/// deliverable mailbox.
const EMAIL_DOMAINS: [&str; 3] = ["example.com", "example.net", "example.org"];

/// Generates a roster of example people.
///
/// Seeds a deterministic RNG with `seed`, so identical inputs yield an
/// identical roster. Each generated person has:
///
/// - a full name composed of a faked first and last name,
/// - a job title and role drawn from the job fakers,
/// - a lowercase email derived from the name, unique within the roster.
///
/// # Errors
///
/// Returns [`GenerationError`] if a usable name cannot be produced within
/// the retry budget.
///
/// # Example
///
/// ```
/// use example_data::generate_people;
///
/// let people = generate_people(123, 3).expect("generated");
///
/// assert_eq!(people.len(), 3);
/// // Same seed produces an identical roster
/// let again = generate_people(123, 3).expect("generated");
/// assert_eq!(people, again);
/// ```
pub fn generate_people(seed: u64, count: usize) -> Result<Vec<PersonRecord>, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut taken_emails = HashSet::with_capacity(count);
    let mut people = Vec::with_capacity(count);

    for _ in 0..count {
        let person = generate_single_person(&mut rng, &mut taken_emails)?;
        people.push(person);
    }

    Ok(people)
}

/// Generates a single person with the provided RNG.
fn generate_single_person(
    rng: &mut ChaCha8Rng,
    taken_emails: &mut HashSet<String>,
) -> Result<PersonRecord, GenerationError> {
    let (name, local_part) = generate_name(rng)?;
    let email = allocate_email(rng, &local_part, taken_emails);

    let title: String = Title(EN).fake_with_rng(rng);
    let role: String = Position(EN).fake_with_rng(rng);

    Ok(PersonRecord {
        name,
        title,
        email,
        role,
    })
}

/// Generates a display name together with its email local part.
///
/// Retries up to `MAX_NAME_ATTEMPTS` times until the name survives being
/// stripped down to mailbox-safe characters. Faked names are almost always
/// usable on the first attempt; the retry loop guards against pathological
/// outputs such as names made entirely of punctuation.
fn generate_name(rng: &mut ChaCha8Rng) -> Result<(String, String), GenerationError> {
    for _ in 0..MAX_NAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);

        let first_part = mailbox_safe(&first);
        let last_part = mailbox_safe(&last);
        if first_part.is_empty() || last_part.is_empty() {
            continue;
        }

        let name = format!("{first} {last}");
        let local_part = format!("{first_part}.{last_part}");
        return Ok((name, local_part));
    }

    Err(GenerationError::NameGenerationFailed {
        max_attempts: MAX_NAME_ATTEMPTS,
    })
}

/// Reduces a name fragment to lowercase ASCII alphanumerics.
fn mailbox_safe(fragment: &str) -> String {
    fragment
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Builds a roster-unique email for the given local part.
///
/// Collisions get a numeric suffix appended to the local part, so repeated
/// names remain distinct records.
fn allocate_email(
    rng: &mut ChaCha8Rng,
    local_part: &str,
    taken_emails: &mut HashSet<String>,
) -> String {
    let domain = EMAIL_DOMAINS.choose(rng).copied().unwrap_or("example.com");

    let candidate = format!("{local_part}@{domain}");
    if taken_emails.insert(candidate.clone()) {
        return candidate;
    }

    let mut suffix = 2_u32;
    loop {
        let candidate = format!("{local_part}{suffix}@{domain}");
        if taken_emails.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}
