// Smoke tests against the configured pet-store service
//
// Ignored by default. Run with:
//   PROTOCOL=https:// API_BASE_URL=petstore.swagger.io cargo test -p petstore-client -- --ignored

use petstore_client::{ApiErrorBody, Category, Pet, PetApi, Tag};

mod common;

#[tokio::test]
#[ignore = "requires PROTOCOL and API_BASE_URL"]
async fn test_live_update_and_read_back() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let api = PetApi::from_env()?;

    let payload = PetApi::build_payload(
        Some(30),
        Some(Category::new(1, "Monkey")),
        Some("Gorilla"),
        Some(vec!["https://www.example.com/gorilla.jpg".into()]),
        Some(vec![Tag::new(1, "tag1")]),
        Some("pending"),
        false,
    );

    let response = api.create_or_update_pet(&payload).await?;
    assert_eq!(response.status(), 200);
    let pet: Pet = response.json()?;
    assert_eq!(pet, payload);
    Ok(())
}

#[tokio::test]
#[ignore = "requires PROTOCOL and API_BASE_URL"]
async fn test_live_error_statuses() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let api = PetApi::from_env()?;

    let missing = api.get_pet_by_id(9999999999u64).await?;
    assert_eq!(missing.status(), 404);
    let body: ApiErrorBody = missing.json()?;
    assert_eq!(body.kind, "error");
    assert_eq!(body.message, "Pet not found");

    assert_eq!(api.get_pet_by_id("").await?.status(), 405);
    Ok(())
}
