use roster_domain::constants::{PERSON, PERSONS_TAG, SYSTEM_TAG};

#[test]
fn constants_match_entity_strings() {
    assert_eq!(PERSON, "person");
    assert_eq!(SYSTEM_TAG, "System");
    assert_eq!(PERSONS_TAG, "Persons");
}
