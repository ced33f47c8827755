//! # Persons Directory
//!
//! Feature slice for managing person records (name, age, city) on top of the
//! shared `SurrealDB` connection.
//!
//! The slice is wired in three layers:
//!
//! 1. **Repository** ([`PersonRepository`]): single-statement `SurrealQL`
//!    access to the `person` table.
//! 2. **Service** ([`PersonService`]): payload validation and identifier
//!    parsing in front of the repository.
//! 3. **Routes** ([`persons_router`]): the `/persons` REST surface with
//!    `OpenAPI` annotations.
//!
//! The table schema ships with the crate as [`SCHEMA`] and is applied by the
//! database layer at startup.

pub mod domain;
mod error;
pub mod server;

pub use domain::{Person, PersonInput, Violation};
pub use error::{PersonsError, PersonsErrorExt};
pub use server::repository::PersonRepository;
pub use server::routes::{ErrorResponse, persons_router};
pub use server::service::PersonService;

use roster_database::{Database, SchemaScript};
use roster_kernel::domain::registry::InitializedSlice;

/// Schema for the `person` table, applied on database init.
pub const SCHEMA: SchemaScript =
    SchemaScript::new("persons", include_str!("../schema/person.surql"));

/// Persons feature state.
#[roster_derive::roster_slice]
pub struct Persons {
    pub service: PersonService,
}

/// Initialize the persons feature against the shared database handle.
///
/// # Errors
/// Currently infallible; the `Result` is part of the slice init contract.
pub fn init(db: &Database) -> Result<InitializedSlice, PersonsError> {
    tracing::info!("Persons slice initialized");

    let repository = PersonRepository::new(db.clone());
    let inner = PersonsInner { service: PersonService::new(repository) };

    let slice = Persons::new(inner);
    Ok(InitializedSlice::new(slice))
}
