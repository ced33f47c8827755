//! Facade crate for Roster features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`schemas`] when building the database connection so feature tables
//!   are defined before any request runs.
//! - Call [`init`] to register feature slices; extend as new slices appear.

use roster_database::{Database, SchemaScript};
pub use roster_domain as domain;
pub use roster_kernel as kernel;

pub mod server {
    pub mod router {
        pub use roster_kernel::server::router::system_router;
        pub use roster_persons::persons_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use roster_persons as persons;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["persons"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Schema scripts contributed by enabled features, in apply order.
#[must_use]
pub fn schemas() -> Vec<SchemaScript> {
    vec![features::persons::SCHEMA]
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    database: &Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Persons directory
    slices.push(features::persons::init(database)?);

    Ok(slices)
}
