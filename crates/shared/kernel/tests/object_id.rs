use roster_kernel::oid::{OID_ALPHABET, OID_LEN, ObjectId};

#[test]
fn generates_expected_length_and_charset() {
    let id = ObjectId::generate();
    assert_eq!(id.as_str().len(), OID_LEN);

    for ch in id.as_str().chars() {
        assert!(OID_ALPHABET.contains(&ch), "unexpected character in identifier: {ch}");
    }
}

#[test]
fn generated_ids_are_distinct() {
    let first = ObjectId::generate();
    let second = ObjectId::generate();
    assert_ne!(first, second);
}

#[test]
fn parse_round_trips_and_normalizes() {
    let id = ObjectId::generate();
    let parsed = ObjectId::parse(&id.as_str().to_ascii_uppercase()).unwrap();
    assert_eq!(parsed, id);

    let display = parsed.to_string();
    assert_eq!(display, id.as_str());
}

#[test]
fn parse_rejects_malformed_identifiers() {
    for raw in ["", "123", "not-a-hex-identifier!!!!", "65ab0f00112233445566aabbcc"] {
        assert!(ObjectId::parse(raw).is_err(), "{raw:?} should be rejected");
    }
}
