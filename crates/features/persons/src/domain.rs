use roster_derive::api_model;

/// A stored directory entry.
#[api_model]
pub struct Person {
    /// Store-assigned identifier: 24 lowercase hex characters.
    pub id: String,
    pub name: String,
    pub age: i64,
    pub city: String,
}

/// Payload for creating or replacing a [`Person`].
///
/// The identifier is never part of the payload; it is assigned on create and
/// taken from the path on update.
#[api_model]
pub struct PersonInput {
    pub name: String,
    pub age: i64,
    pub city: String,
}

/// A single field-level constraint failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: &'static str,
}

impl PersonInput {
    /// Checks the payload against the directory's field constraints.
    ///
    /// Violations are collected in field declaration order, so joined error
    /// messages stay stable across calls. Blank means empty or
    /// whitespace-only.
    ///
    /// # Errors
    /// Returns every violated constraint, one [`Violation`] per field.
    pub fn validate(&self) -> Result<(), Vec<Violation>> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(Violation { field: "name", message: "name is required" });
        }
        if self.age < 0 {
            violations.push(Violation { field: "age", message: "age must be non-negative" });
        }
        if self.city.trim().is_empty() {
            violations.push(Violation { field: "city", message: "city is required" });
        }

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}
