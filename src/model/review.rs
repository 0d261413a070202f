use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Body of `POST /reviews`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CreateReviewPayloadDto {
    pub user_id: Option<i32>,
    pub business_id: Option<i32>,
    pub stars: Option<i32>,
    /// `None` when absent, `Some(None)` when sent as `null`.
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub review_text: Option<Option<String>>,
}

/// Body of `PUT /reviews/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct UpdateReviewPayloadDto {
    pub stars: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[schema(value_type = Option<String>)]
    pub review_text: Option<Option<String>>,
}

/// Response of `POST /reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CreatedReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub business_id: i32,
    pub stars: i32,
    /// Echoed only when the request supplied it.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub review_text: Option<Option<String>>,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Response of `GET /reviews/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReviewDto {
    pub review_id: i32,
    pub user_id: i32,
    pub business_id: i32,
    pub stars: i32,
    pub review_text: Option<String>,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Response of `PUT /reviews/{id}`; the business is referenced by link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatedReviewDto {
    pub review_id: i32,
    pub user_id: i32,
    pub stars: i32,
    pub review_text: Option<String>,
    pub business: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Entry of `GET /users/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserReviewDto {
    pub id: i32,
    pub user_id: i32,
    pub stars: i32,
    pub review_text: Option<String>,
    pub business: String,
    #[serde(rename = "self")]
    pub self_link: String,
}

/// Distinguishes an explicit `null` from an absent field when paired with `#[serde(default)]`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
