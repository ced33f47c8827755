use roster_database::Database;
use roster_persons::*;

const ABSENT_ID: &str = "000000000000000000000000";

async fn service() -> PersonService {
    let db = Database::builder()
        .url("mem://")
        .session("persons_test", "core")
        .schema(SCHEMA)
        .init()
        .await
        .expect("connect to mem://");

    PersonService::new(PersonRepository::new(db))
}

fn input(name: &str, age: i64, city: &str) -> PersonInput {
    PersonInput { name: name.to_owned(), age, city: city.to_owned() }
}

#[tokio::test]
async fn create_echoes_payload_with_fresh_id() {
    let service = service().await;

    let person = service.create(input("Lucía", 30, "Lima")).await.expect("create");

    assert_eq!(person.name, "Lucía");
    assert_eq!(person.age, 30);
    assert_eq!(person.city, "Lima");
    assert_eq!(person.id.len(), 24);
    assert!(person.id.bytes().all(|b| b.is_ascii_hexdigit()));
}

#[tokio::test]
async fn create_rejects_invalid_payload_without_persisting() {
    let service = service().await;

    let err = service.create(input("", -1, " ")).await.unwrap_err();
    let PersonsError::Validation { message, .. } = err else {
        panic!("expected validation error, got {err}");
    };
    assert_eq!(message, "name is required, age must be non-negative, city is required");

    assert!(service.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn get_round_trips_created_person() {
    let service = service().await;

    let created = service.create(input("Ana", 25, "Cusco")).await.expect("create");
    let found = service.get(&created.id).await.expect("get").expect("person exists");

    assert_eq!(found.id, created.id);
    assert_eq!(found.name, "Ana");
    assert_eq!(found.age, 25);
    assert_eq!(found.city, "Cusco");
}

#[tokio::test]
async fn get_normalizes_mixed_case_ids() {
    let service = service().await;

    let created = service.create(input("Ana", 25, "Cusco")).await.expect("create");
    let upper = created.id.to_ascii_uppercase();

    let found = service.get(&upper).await.expect("get");
    assert_eq!(found.map(|p| p.id), Some(created.id));
}

#[tokio::test]
async fn absent_id_reads_as_none() {
    let service = service().await;

    assert!(service.get(ABSENT_ID).await.expect("get").is_none());
    assert!(service.update(ABSENT_ID, input("Ana", 25, "Cusco")).await.expect("update").is_none());
    assert!(!service.delete(ABSENT_ID).await.expect("delete"));
}

#[tokio::test]
async fn malformed_id_is_reported_on_all_operations() {
    let service = service().await;

    let err = service.get("not-a-valid-id").await.unwrap_err();
    assert!(matches!(err, PersonsError::InvalidId { .. }));

    let err =
        service.update("zzzzzzzzzzzzzzzzzzzzzzzz", input("Ana", 25, "Cusco")).await.unwrap_err();
    assert!(matches!(err, PersonsError::InvalidId { .. }));

    let err = service.delete("123").await.unwrap_err();
    assert!(matches!(err, PersonsError::InvalidId { .. }));
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let service = service().await;

    let created = service.create(input("Ana", 25, "Cusco")).await.expect("create");
    let updated = service
        .update(&created.id, input("Ana María", 26, "Arequipa"))
        .await
        .expect("update")
        .expect("person exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ana María");
    assert_eq!(updated.age, 26);
    assert_eq!(updated.city, "Arequipa");

    let found = service.get(&created.id).await.expect("get").expect("person exists");
    assert_eq!(found.city, "Arequipa");
}

#[tokio::test]
async fn update_validates_before_touching_the_store() {
    let service = service().await;

    let created = service.create(input("Ana", 25, "Cusco")).await.expect("create");

    let err = service.update(&created.id, input("", 25, "Cusco")).await.unwrap_err();
    assert!(matches!(err, PersonsError::Validation { .. }));

    // Payload checks run before the identifier is parsed.
    let err = service.update("not-a-valid-id", input("", 25, "Cusco")).await.unwrap_err();
    assert!(matches!(err, PersonsError::Validation { .. }));

    let found = service.get(&created.id).await.expect("get").expect("person exists");
    assert_eq!(found.name, "Ana");
}

#[tokio::test]
async fn delete_reports_false_after_removal() {
    let service = service().await;

    let created = service.create(input("Ana", 25, "Cusco")).await.expect("create");

    assert!(service.delete(&created.id).await.expect("delete"));
    assert!(service.get(&created.id).await.expect("get").is_none());
    assert!(!service.delete(&created.id).await.expect("second delete"));
}

#[tokio::test]
async fn search_matches_city_exactly() {
    let service = service().await;

    service.create(input("Lucía", 30, "Lima")).await.expect("create");
    service.create(input("Marco", 41, "Lima")).await.expect("create");
    service.create(input("Ana", 25, "Cusco")).await.expect("create");

    let limeños = service.find_by_city("Lima").await.expect("search");
    assert_eq!(limeños.len(), 2);
    assert!(limeños.iter().all(|p| p.city == "Lima"));

    // Equality is case-sensitive and non-matching cities yield empty lists.
    assert!(service.find_by_city("lima").await.expect("search").is_empty());
    assert!(service.find_by_city("Iquitos").await.expect("search").is_empty());
}
