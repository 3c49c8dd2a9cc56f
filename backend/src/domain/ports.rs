//! Domain ports defining the edges of the hexagon.
//!
//! Inbound adapters (HTTP handlers) use these ports to fetch user-visible
//! data without importing data-source concerns. Production wires a seeded
//! roster; tests use a deterministic in-memory implementation.

use async_trait::async_trait;

use crate::domain::{Error, Person};

/// Domain use-case port for obtaining the displayed roster.
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// Return the full roster in its natural input order.
    async fn list_people(&self) -> Result<Vec<Person>, Error>;
}

/// Directory backed by a fixed in-memory roster.
///
/// The roster is captured at construction time and served unchanged for the
/// lifetime of the directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    people: Vec<Person>,
}

impl InMemoryDirectory {
    /// Capture the given roster.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

#[async_trait]
impl DirectoryQuery for InMemoryDirectory {
    async fn list_people(&self) -> Result<Vec<Person>, Error> {
        Ok(self.people.clone())
    }
}

/// Fixture roster used until a data source is wired.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDirectoryQuery;

#[async_trait]
impl DirectoryQuery for FixtureDirectoryQuery {
    async fn list_people(&self) -> Result<Vec<Person>, Error> {
        Ok(vec![
            Person::new(
                "Lindsay Walton",
                "Front-end Developer",
                "lindsay.walton@example.com",
                "Member",
            ),
            Person::new(
                "Courtney Henry",
                "Designer",
                "courtney.henry@example.com",
                "Admin",
            ),
            Person::new(
                "Tom Cook",
                "Director of Product",
                "tom.cook@example.com",
                "Member",
            ),
            Person::new(
                "Whitney Francis",
                "Copywriter",
                "whitney.francis@example.com",
                "Admin",
            ),
            Person::new(
                "Leonard Krasner",
                "Senior Designer",
                "leonard.krasner@example.com",
                "Owner",
            ),
        ])
    }
}
