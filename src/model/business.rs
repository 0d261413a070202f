use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /businesses` and `PUT /businesses/{id}`.
///
/// Every attribute is optional at the wire level so that a missing attribute is reported
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct BusinessPayloadDto {
    pub owner_id: Option<i32>,
    pub name: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<i32>,
}

/// A single business as returned by create, get and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BusinessDto {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// A business row as returned inside listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BusinessEntryDto {
    pub business_id: i32,
    pub owner_id: i32,
    pub name: String,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// One page of `GET /businesses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBusinessesDto {
    pub entries: Vec<BusinessEntryDto>,
    /// Link to the following page, present only when this page is full.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}
