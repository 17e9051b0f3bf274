// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Pet API object - domain operations for /v2/pet endpoints
//
// Holds a TestClient by composition. No validation happens on this side:
// empty, non-numeric and out-of-range ids are sent as given, and create vs
// update is decided by the server from the payload's id field.

use crate::client::{ApiResponse, TestClient};
use crate::error::Result;
use crate::payload::{Category, Pet, Tag};
use std::fmt::Display;

/// Base path of the pet resource.
pub const PET_PATH: &str = "/v2/pet";

/// API object for `/v2/pet/*`.
pub struct PetApi {
    client: TestClient,
}

impl PetApi {
    pub fn new(client: TestClient) -> Self {
        Self { client }
    }

    /// Builds the client from `PROTOCOL` and `API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(TestClient::from_env()?))
    }

    /// The underlying session, e.g. to override `Accept` for one request.
    pub fn client(&self) -> &TestClient {
        &self.client
    }

    /// `GET /v2/pet/{id}`.
    pub async fn get_pet_by_id(&self, id: impl Display) -> Result<ApiResponse> {
        self.client.get(&format!("{}/{}", PET_PATH, id), None).await
    }

    /// `POST /v2/pet`.
    ///
    /// Creates a pet when the payload's id is absent or null, updates the
    /// existing pet otherwise.
    pub async fn create_or_update_pet(&self, pet: &Pet) -> Result<ApiResponse> {
        self.client.post(PET_PATH, Some(pet)).await
    }

    /// Assembles a payload from the six pet fields.
    ///
    /// With `strip_nulls == false` every field is present, `None` becoming an
    /// explicit `null`. With `strip_nulls == true` null and empty fields are
    /// omitted from the payload.
    pub fn build_payload(
        id: Option<i64>,
        category: Option<Category>,
        name: Option<&str>,
        photo_urls: Option<Vec<String>>,
        tags: Option<Vec<Tag>>,
        status: Option<&str>,
        strip_nulls: bool,
    ) -> Pet {
        let mut builder = Pet::builder();
        if let Some(id) = id {
            builder = builder.id(id);
        }
        if let Some(category) = category {
            builder = builder.category(category);
        }
        if let Some(name) = name {
            builder = builder.name(name);
        }
        if let Some(urls) = photo_urls {
            builder = builder.photo_urls(urls);
        }
        if let Some(tags) = tags {
            builder = builder.tags(tags);
        }
        if let Some(status) = status {
            builder = builder.status(status);
        }

        let pet = builder.build();
        if strip_nulls { pet.strip_nulls() } else { pet }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::Field;
    use serde_json::{Value, json};

    fn gorilla(strip_nulls: bool) -> Pet {
        PetApi::build_payload(
            Some(30),
            Some(Category::new(1, "Monkey")),
            Some("Gorilla"),
            Some(vec!["https://www.example.com/gorilla.jpg".to_string()]),
            Some(vec![Tag::new(1, "tag1")]),
            Some("pending"),
            strip_nulls,
        )
    }

    #[test]
    fn test_full_payload_has_every_field() {
        let value = serde_json::to_value(gorilla(false)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 30,
                "category": { "id": 1, "name": "Monkey" },
                "name": "Gorilla",
                "photoUrls": ["https://www.example.com/gorilla.jpg"],
                "tags": [{ "id": 1, "name": "tag1" }],
                "status": "pending",
            })
        );
    }

    #[test]
    fn test_strip_is_noop_without_nulls() {
        assert_eq!(gorilla(true), gorilla(false));
    }

    #[test]
    fn test_nulls_preserved_without_strip() {
        let pet = PetApi::build_payload(
            None,
            Some(Category::new(2, "Pokemon")),
            Some("Pikachu"),
            None,
            None,
            Some("sold"),
            false,
        );

        let value = serde_json::to_value(&pet).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 6);
        assert_eq!(object["id"], Value::Null);
        assert_eq!(object["photoUrls"], Value::Null);
        assert_eq!(object["tags"], Value::Null);
    }

    #[test]
    fn test_nulls_removed_with_strip() {
        let pet = PetApi::build_payload(
            None,
            Some(Category::new(3, "Digimon")),
            Some("Hackathon"),
            None,
            None,
            Some("pending"),
            true,
        );

        assert!(pet.id.is_absent());
        assert!(pet.photo_urls.is_absent());
        assert!(pet.tags.is_absent());
        assert_eq!(pet.name, Field::Value("Hackathon".to_string()));

        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(
            value,
            json!({
                "category": { "id": 3, "name": "Digimon" },
                "name": "Hackathon",
                "status": "pending",
            })
        );
    }

    #[test]
    fn test_every_null_combination_respects_strip_flag() {
        for mask in 0u8..64 {
            let bit = |n: u8| mask & (1 << n) != 0;
            let build = |strip| {
                PetApi::build_payload(
                    bit(0).then_some(7),
                    bit(1).then(|| Category::new(1, "c")),
                    bit(2).then_some("n"),
                    bit(3).then(|| vec!["u".to_string()]),
                    bit(4).then(|| vec![Tag::new(1, "t")]),
                    bit(5).then_some("sold"),
                    strip,
                )
            };

            assert_eq!(build(false).present_fields().len(), 6, "mask {mask:#08b}");
            assert_eq!(
                build(true).present_fields().len(),
                mask.count_ones() as usize,
                "mask {mask:#08b}"
            );
        }
    }
}
