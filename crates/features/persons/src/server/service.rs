use crate::domain::{Person, PersonInput};
use crate::error::PersonsError;
use crate::server::repository::PersonRepository;
use roster_kernel::oid::ObjectId;
use tracing::debug;

/// Business operations over the persons directory.
///
/// Identifiers coming from callers are parsed before they reach the store,
/// so a malformed id never turns into a query. Absent records are `Ok`
/// values, not errors.
#[derive(Debug, Clone)]
pub struct PersonService {
    repository: PersonRepository,
}

impl PersonService {
    #[must_use]
    pub const fn new(repository: PersonRepository) -> Self {
        Self { repository }
    }

    /// Validates the payload and stores a new person.
    ///
    /// # Errors
    /// Returns [`PersonsError::Validation`] with the comma-joined field
    /// messages when the payload breaks a constraint, in which case nothing
    /// is persisted.
    pub async fn create(&self, input: PersonInput) -> Result<Person, PersonsError> {
        check_input(&input)?;

        let person = self.repository.insert(&input).await?;
        debug!(id = %person.id, "Person created");
        Ok(person)
    }

    /// # Errors
    /// Fails only on engine errors.
    pub async fn list(&self) -> Result<Vec<Person>, PersonsError> {
        self.repository.find_all().await
    }

    /// # Errors
    /// Returns [`PersonsError::InvalidId`] for malformed identifiers; an
    /// absent record is `Ok(None)`.
    pub async fn get(&self, id: &str) -> Result<Option<Person>, PersonsError> {
        let id = ObjectId::parse(id)?;
        self.repository.find_by_id(&id).await
    }

    /// Validates the payload, then overwrites all mutable fields of the
    /// record in a single store round trip.
    ///
    /// # Errors
    /// Returns [`PersonsError::Validation`] or [`PersonsError::InvalidId`]
    /// before anything is written; an absent record is `Ok(None)`.
    pub async fn update(
        &self,
        id: &str,
        input: PersonInput,
    ) -> Result<Option<Person>, PersonsError> {
        check_input(&input)?;
        let id = ObjectId::parse(id)?;

        let updated = self.repository.update(&id, &input).await?;
        if let Some(person) = &updated {
            debug!(id = %person.id, "Person updated");
        }
        Ok(updated)
    }

    /// # Errors
    /// Returns [`PersonsError::InvalidId`] for malformed identifiers;
    /// deleting an absent record is `Ok(false)`.
    pub async fn delete(&self, id: &str) -> Result<bool, PersonsError> {
        let id = ObjectId::parse(id)?;

        let deleted = self.repository.delete_by_id(&id).await?;
        if deleted {
            debug!(%id, "Person deleted");
        }
        Ok(deleted)
    }

    /// # Errors
    /// Fails only on engine errors; no match is an empty list.
    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Person>, PersonsError> {
        self.repository.find_by_city(city).await
    }
}

fn check_input(input: &PersonInput) -> Result<(), PersonsError> {
    input.validate().map_err(|violations| PersonsError::Validation {
        message: violations
            .into_iter()
            .map(|violation| violation.message)
            .collect::<Vec<_>>()
            .join(", ")
            .into(),
        context: None,
    })
}
