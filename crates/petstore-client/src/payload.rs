// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// Resource payloads for /pet endpoints
//
// A payload field has three wire states: a value, an explicit JSON `null`,
// or absent from the object entirely. Sending null and omitting a field are
// different requests, so `Field<T>` keeps them apart.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pet statuses accepted by the service.
pub const PET_STATUSES: [&str; 3] = ["available", "pending", "sold"];

/// A tri-state payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Omitted from the serialized object.
    Absent,
    /// Serialized as JSON `null`.
    Null,
    /// Serialized as the value.
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    /// `Some` becomes a value, `None` becomes an explicit null.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Field::Null, Field::Value)
    }

    /// Drops null fields and values `is_empty` reports as empty.
    fn stripped(self, is_empty: impl Fn(&T) -> bool) -> Self {
        match self {
            Field::Value(v) if !is_empty(&v) => Field::Value(v),
            _ => Field::Absent,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Value(v) => v.serialize(serializer),
            // Absent fields are skipped by the containing struct.
            Field::Absent | Field::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Missing keys never reach here; `#[serde(default)]` makes them Absent.
        Ok(Field::from_option(Option::<T>::deserialize(deserializer)?))
    }
}

/// Pet category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}

/// Pet tag. Same shape as [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }
}

/// Known pet statuses.
///
/// Payloads carry the status as a string so that invalid values can be sent
/// on purpose; this enum is for the valid ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Sold => "sold",
        }
    }

    /// Parses a status string, `None` for anything the service rejects.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(PetStatus::Available),
            "pending" => Some(PetStatus::Pending),
            "sold" => Some(PetStatus::Sold),
            _ => None,
        }
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request/response body for `/v2/pet`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub category: Field<Category>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub photo_urls: Field<Vec<String>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tags: Field<Vec<Tag>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<String>,
}

impl Pet {
    /// Starts a payload with all six fields present and null.
    pub fn builder() -> PetBuilder {
        PetBuilder::default()
    }

    /// Removes every null or empty field from the payload.
    ///
    /// The result is a partial record: stripped fields are omitted from the
    /// wire instead of being sent as `null`. Empty strings and empty lists
    /// count as empty; a zero id does not.
    pub fn strip_nulls(self) -> Pet {
        Pet {
            id: self.id.stripped(|_| false),
            category: self.category.stripped(|_| false),
            name: self.name.stripped(String::is_empty),
            photo_urls: self.photo_urls.stripped(Vec::is_empty),
            tags: self.tags.stripped(Vec::is_empty),
            status: self.status.stripped(String::is_empty),
        }
    }

    /// Returns the id if it holds a value.
    pub fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    /// Returns a copy with the id set, e.g. to compare against a server-assigned id.
    pub fn with_id(mut self, id: i64) -> Pet {
        self.id = Field::Value(id);
        self
    }

    /// Returns a copy without the id field.
    pub fn without_id(mut self) -> Pet {
        self.id = Field::Absent;
        self
    }

    /// Names of the fields that will appear on the wire.
    pub fn present_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::with_capacity(6);
        if !self.id.is_absent() {
            fields.push("id");
        }
        if !self.category.is_absent() {
            fields.push("category");
        }
        if !self.name.is_absent() {
            fields.push("name");
        }
        if !self.photo_urls.is_absent() {
            fields.push("photoUrls");
        }
        if !self.tags.is_absent() {
            fields.push("tags");
        }
        if !self.status.is_absent() {
            fields.push("status");
        }
        fields
    }
}

/// Builder for [`Pet`]
///
/// Unset fields stay present as explicit nulls; call
/// [`Pet::strip_nulls`] on the result to omit them.
#[derive(Debug, Clone)]
pub struct PetBuilder {
    pet: Pet,
}

impl Default for PetBuilder {
    fn default() -> Self {
        Self {
            pet: Pet {
                id: Field::Null,
                category: Field::Null,
                name: Field::Null,
                photo_urls: Field::Null,
                tags: Field::Null,
                status: Field::Null,
            },
        }
    }
}

impl PetBuilder {
    pub fn id(mut self, id: i64) -> Self {
        self.pet.id = Field::Value(id);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.pet.category = Field::Value(category);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.pet.name = Field::Value(name.into());
        self
    }

    pub fn photo_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pet.photo_urls = Field::Value(urls.into_iter().map(Into::into).collect());
        self
    }

    pub fn tags(mut self, tags: Vec<Tag>) -> Self {
        self.pet.tags = Field::Value(tags);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.pet.status = Field::Value(status.into());
        self
    }

    pub fn build(self) -> Pet {
        self.pet
    }
}

/// XML representation returned for `Accept: application/xml`.
///
/// Only the scalar fields are mapped; nested elements are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename = "Pet")]
pub struct PetXml {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned by the service for 4xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}
