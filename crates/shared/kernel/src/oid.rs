use nanoid::nanoid;
use std::borrow::Cow;
use std::fmt;

#[roster_derive::roster_error]
pub enum ObjectIdError {
    #[error("Invalid identifier{}: {message}", format_context(.context))]
    Format { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Alphabet for generated identifiers: lowercase hex.
pub const OID_ALPHABET: &[char; 16] =
    &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f'];

/// Length of a canonical identifier in characters.
pub const OID_LEN: usize = 24;

/// A store-assigned record identifier: 24 lowercase hex characters.
///
/// Keeps the wire format stable regardless of the storage engine behind the
/// repository. Client-supplied identifiers go through [`ObjectId::parse`],
/// which rejects malformed input before it can reach a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(nanoid!(OID_LEN, OID_ALPHABET))
    }

    /// Parses a client-supplied identifier.
    ///
    /// Accepts mixed-case hex and normalizes to lowercase. Anything that is
    /// not exactly [`OID_LEN`] hex characters is rejected, which keeps
    /// "malformed id" distinguishable from "no such record" downstream.
    ///
    /// # Errors
    /// Returns [`ObjectIdError::Format`] for malformed input.
    pub fn parse(raw: &str) -> Result<Self, ObjectIdError> {
        if raw.len() != OID_LEN {
            return Err(ObjectIdError::Format {
                message: format!("identifier must be {OID_LEN} hex characters").into(),
                context: None,
            });
        }
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ObjectIdError::Format {
                message: "identifier must contain only hex characters".into(),
                context: None,
            });
        }

        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Returns the canonical lowercase form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_canonical() {
        let id = ObjectId::generate();
        assert_eq!(id.as_str().len(), OID_LEN);
        assert!(id.as_str().bytes().all(|b| b.is_ascii_hexdigit()));
        assert_eq!(ObjectId::parse(id.as_str()).unwrap(), id);
    }

    #[test]
    fn parse_normalizes_case() {
        let id = ObjectId::parse("65AB0F00112233445566AABB").unwrap();
        assert_eq!(id.as_str(), "65ab0f00112233445566aabb");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(ObjectId::parse("").is_err());
        assert!(ObjectId::parse("abc").is_err());
        assert!(ObjectId::parse("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
        assert!(ObjectId::parse("65ab0f00112233445566aab").is_err());
        assert!(ObjectId::parse("65ab0f00112233445566aabb0").is_err());
    }
}
