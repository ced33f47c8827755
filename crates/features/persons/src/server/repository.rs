use crate::domain::{Person, PersonInput};
use crate::error::{PersonsError, PersonsErrorExt};
use roster_database::Database;
use roster_kernel::domain::constants::PERSON;
use roster_kernel::oid::ObjectId;
use surrealdb::types::{SurrealValue, Value};

/// Row shape returned by person queries.
///
/// The record key is projected out of the `RecordId` with `id.id()`, so
/// callers only ever see the bare 24-character identifier.
#[derive(Debug, SurrealValue)]
struct PersonRow {
    id: String,
    name: String,
    age: i64,
    city: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self { id: row.id, name: row.name, age: row.age, city: row.city }
    }
}

/// Data access for the `person` table.
///
/// Every operation is a single `SurrealQL` statement, so concurrent writers
/// converge on last-write-wins without read-modify-write races.
#[derive(Debug, Clone)]
pub struct PersonRepository {
    db: Database,
}

impl PersonRepository {
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Persists a new record under a store-assigned identifier.
    ///
    /// # Errors
    /// Fails if the engine rejects the statement or returns no record.
    pub async fn insert(&self, input: &PersonInput) -> Result<Person, PersonsError> {
        let id = ObjectId::generate();
        let created = self
            .db
            .query(
                "CREATE type::thing($tb, $id) CONTENT { name: $name, age: $age, city: $city } \
                 RETURN id.id() AS id, name, age, city",
            )
            .bind(("tb", PERSON))
            .bind(("id", String::from(id)))
            .bind(("name", input.name.clone()))
            .bind(("age", input.age))
            .bind(("city", input.city.clone()))
            .await
            .context("Creating person")?
            .take::<Option<PersonRow>>(0)
            .context("Parsing created person")?;

        created.map(Person::from).ok_or_else(|| PersonsError::Internal {
            message: "Create returned no record".into(),
            context: None,
        })
    }

    /// # Errors
    /// Fails only on engine errors; an absent record is `Ok(None)`.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Person>, PersonsError> {
        let row = self
            .db
            .query("SELECT id.id() AS id, name, age, city FROM type::thing($tb, $id)")
            .bind(("tb", PERSON))
            .bind(("id", id.as_str().to_owned()))
            .await
            .context("Fetching person")?
            .take::<Option<PersonRow>>(0)
            .context("Parsing person")?;

        Ok(row.map(Person::from))
    }

    /// Returns every record, order unspecified.
    ///
    /// # Errors
    /// Fails only on engine errors.
    pub async fn find_all(&self) -> Result<Vec<Person>, PersonsError> {
        let rows = self
            .db
            .query("SELECT id.id() AS id, name, age, city FROM type::table($tb)")
            .bind(("tb", PERSON))
            .await
            .context("Listing persons")?
            .take::<Vec<PersonRow>>(0)
            .context("Parsing persons")?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    /// Case-sensitive equality match on `city`.
    ///
    /// # Errors
    /// Fails only on engine errors; no match is an empty list.
    pub async fn find_by_city(&self, city: &str) -> Result<Vec<Person>, PersonsError> {
        let rows = self
            .db
            .query(
                "SELECT id.id() AS id, name, age, city FROM type::table($tb) WHERE city = $city",
            )
            .bind(("tb", PERSON))
            .bind(("city", city.to_owned()))
            .await
            .context("Searching persons by city")?
            .take::<Vec<PersonRow>>(0)
            .context("Parsing persons")?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    /// Overwrites the mutable fields of an existing record in one statement.
    /// `UPDATE` on an absent record id is a no-op, which surfaces as
    /// `Ok(None)`.
    ///
    /// # Errors
    /// Fails only on engine errors.
    pub async fn update(
        &self,
        id: &ObjectId,
        input: &PersonInput,
    ) -> Result<Option<Person>, PersonsError> {
        let updated = self
            .db
            .query(
                "UPDATE type::thing($tb, $id) SET name = $name, age = $age, city = $city \
                 RETURN id.id() AS id, name, age, city",
            )
            .bind(("tb", PERSON))
            .bind(("id", id.as_str().to_owned()))
            .bind(("name", input.name.clone()))
            .bind(("age", input.age))
            .bind(("city", input.city.clone()))
            .await
            .context("Updating person")?
            .take::<Option<PersonRow>>(0)
            .context("Parsing updated person")?;

        Ok(updated.map(Person::from))
    }

    /// Removes a record, reporting whether anything was deleted.
    ///
    /// # Errors
    /// Fails only on engine errors.
    pub async fn delete_by_id(&self, id: &ObjectId) -> Result<bool, PersonsError> {
        let before = self
            .db
            .query("DELETE type::thing($tb, $id) RETURN BEFORE")
            .bind(("tb", PERSON))
            .bind(("id", id.as_str().to_owned()))
            .await
            .context("Deleting person")?
            .take::<Option<Value>>(0)
            .context("Parsing delete result")?;

        Ok(before.is_some())
    }
}
