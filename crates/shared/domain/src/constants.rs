//! Shared string constants: table names and `OpenAPI` tags.

/// `person` table, the directory's single record kind.
pub const PERSON: &str = "person";

/// `OpenAPI` tag for system endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";

/// `OpenAPI` tag for the persons resource.
pub const PERSONS_TAG: &str = "Persons";
