//! petstore-client: HTTP test client and API objects for a pet-store REST service
//!
//! The crate is a thin test layer. [`TestClient`] wraps one HTTP session with
//! default headers and surfaces every response, whatever its status, so that
//! 400/404/405 outcomes are assertable results instead of errors.
//! [`PetApi`] composes a client with the `/v2/pet` operations and a payload
//! builder that can send fields as `null` or omit them.
//!
//! # Examples
//!
//! ```ignore
//! use petstore_client::{Category, PetApi, Tag};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PROTOCOL and API_BASE_URL
//!     let api = PetApi::from_env()?;
//!
//!     let payload = PetApi::build_payload(
//!         Some(30),
//!         Some(Category::new(1, "Monkey")),
//!         Some("Gorilla"),
//!         Some(vec!["https://www.example.com/gorilla.jpg".into()]),
//!         Some(vec![Tag::new(1, "tag1")]),
//!         Some("pending"),
//!         false,
//!     );
//!     let response = api.create_or_update_pet(&payload).await?;
//!     assert_eq!(response.status(), 200);
//!
//!     let missing = api.get_pet_by_id(9999999999u64).await?;
//!     assert_eq!(missing.status(), 404);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
mod error;
pub mod payload;
pub mod pet;

pub use client::{APPLICATION_JSON, APPLICATION_XML, ApiResponse, HeaderOverride, TestClient};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use payload::{ApiErrorBody, Category, Field, PET_STATUSES, Pet, PetBuilder, PetStatus, PetXml, Tag};
pub use pet::{PET_PATH, PetApi};
