use std::borrow::Cow;

/// Persons error type.
#[roster_derive::roster_error]
pub enum PersonsError {
    /// Input payload failed field validation. The message carries one entry
    /// per violated field, comma-joined.
    #[error("{message}{}", format_context(context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Path identifier is not a well-formed object id.
    #[error("{source}{}", format_context(context))]
    InvalidId {
        #[source]
        source: roster_kernel::oid::ObjectIdError,
        context: Option<Cow<'static, str>>,
    },

    /// A wrapper for underlying `SurrealDB` engine errors.
    #[error("SurrealDB error{}: {source}", format_context(context))]
    Database {
        #[source]
        source: surrealdb::Error,
        context: Option<Cow<'static, str>>,
    },

    /// Shared state is missing the persons slice.
    #[error("State error{}: {source}", format_context(context))]
    State {
        #[source]
        source: roster_kernel::server::ApiStateError,
        context: Option<Cow<'static, str>>,
    },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
