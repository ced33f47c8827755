use roster_derive::roster_error;
use std::borrow::Cow;

#[roster_error]
pub enum DemoError {
    #[error("read failed{}: {source}", format_context(.context))]
    Read {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("record rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[test]
fn roster_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/roster_error_pass.rs");
}

#[test]
fn source_variant_converts_with_question_mark() {
    fn read() -> Result<(), DemoError> {
        Err(std::io::Error::other("denied"))?
    }

    let err = read().unwrap_err();
    assert!(matches!(err, DemoError::Read { context: None, .. }));
    assert_eq!(err.to_string(), "read failed: denied");
}

#[test]
fn context_attaches_to_source_results() {
    let res: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    let err = res.context("loading profile").unwrap_err();

    assert!(matches!(err, DemoError::Read { context: Some(_), .. }));
    assert_eq!(err.to_string(), "read failed (loading profile): boom");
}

#[test]
fn context_attaches_to_own_results() {
    let res: Result<(), DemoError> = Err(DemoError::Rejected {
        message: Cow::Borrowed("empty name"),
        context: None,
    });
    let err = res.context("validating input").unwrap_err();

    assert_eq!(err.to_string(), "record rejected (validating input): empty name");
}

#[test]
fn internal_variant_converts_from_strings() {
    let from_str: DemoError = "bad state".into();
    assert!(matches!(from_str, DemoError::Internal { .. }));
    assert_eq!(from_str.to_string(), "internal error: bad state");

    let from_string: DemoError = format!("bad state {}", 42).into();
    assert_eq!(from_string.to_string(), "internal error: bad state 42");
}

#[test]
fn source_is_preserved_for_error_chains() {
    use std::error::Error as _;

    let err: DemoError = std::io::Error::other("denied").into();
    let source = err.source().map(std::string::ToString::to_string);
    assert_eq!(source.as_deref(), Some("denied"));
}
